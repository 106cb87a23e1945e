//! Pokedex - An interactive PokeAPI client
//!
//! Caches catalog responses in an in-memory TTL cache whose expired entries
//! are purged by a background reaper.

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod repl;
pub mod tasks;

pub use cache::TtlCache;
pub use client::PokeApiClient;
pub use config::Config;
pub use error::{PokedexError, Result};
pub use repl::Session;

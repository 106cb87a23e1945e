//! Data models for the catalog API
//!
//! Contains the response records decoded from PokeAPI bodies.

pub mod responses;

pub use responses::*;

//! Error types for the Pokedex client
//!
//! Provides unified error handling using thiserror.

use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for the cache, the catalog client and the REPL.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// Cache constructed with a zero expiration interval
    #[error("Invalid cache interval {0:?}: interval must be greater than zero")]
    InvalidInterval(Duration),

    /// Transport-level HTTP failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The catalog answered with a non-success status
    #[error("Request to {url} failed with status {status}")]
    Status { url: String, status: StatusCode },

    /// Response body was not the expected JSON
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Terminal I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Verb not recognised by the REPL
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// Command issued without its required argument
    #[error("Command '{command}' requires a {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    /// Inspect on a Pokemon that is not in the Pokedex
    #[error("You have not caught {0}")]
    NotCaught(String),
}

// == Result Type Alias ==
/// Convenience Result type for the Pokedex client.
pub type Result<T> = std::result::Result<T, PokedexError>;

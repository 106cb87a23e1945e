//! Client Module
//!
//! HTTP access to the PokeAPI catalog, backed by the TTL response cache.
//!
//! # Endpoints used
//! - `GET /location-area/` - Paginated location areas
//! - `GET /location-area/{name}/` - Pokemon encounters in an area
//! - `GET /pokemon/{name}/` - Pokemon details

pub mod pokeapi;

pub use pokeapi::{Fetched, PokeApiClient, Source};

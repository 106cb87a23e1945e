//! Catalog response records
//!
//! Typed views of the PokeAPI payloads the REPL reads. Fields the REPL does
//! not use are ignored during decoding.

use serde::Deserialize;

/// A `{ name, url }` reference, PokeAPI's generic link type
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// One page of `GET /location-area/`
#[derive(Debug, Clone, Deserialize)]
pub struct LocationAreaPage {
    /// URL of the following page, absent on the last page
    pub next: Option<String>,
    /// URL of the preceding page, absent on the first page
    pub previous: Option<String>,
    /// Location areas on this page
    pub results: Vec<NamedResource>,
}

/// Body of `GET /location-area/{name}/`
#[derive(Debug, Clone, Deserialize)]
pub struct LocationAreaDetail {
    #[serde(default)]
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

/// A Pokemon that can be met in a location area
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonEncounter {
    pub pokemon: NamedResource,
}

/// Body of `GET /pokemon/{name}/`
#[derive(Debug, Clone, Deserialize)]
pub struct Pokemon {
    pub name: String,
    /// Experience gained for defeating it; also the catch difficulty.
    /// PokeAPI reports null for some forms.
    #[serde(default)]
    pub base_experience: Option<u32>,
    pub height: u32,
    pub weight: u32,
    #[serde(default)]
    pub stats: Vec<PokemonStat>,
    #[serde(default)]
    pub types: Vec<PokemonType>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PokemonStat {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PokemonType {
    #[serde(default)]
    pub slot: u32,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

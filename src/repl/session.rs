//! REPL Session
//!
//! Executes commands against the catalog client while tracking pagination
//! and the caught Pokemon.

use std::collections::BTreeMap;
use std::io::Write;

use rand::Rng;
use tracing::info;

use crate::client::{PokeApiClient, Source};
use crate::error::{PokedexError, Result};
use crate::models::Pokemon;
use crate::repl::command::{Command, COMMANDS};

/// What the loop should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Decides a catch: the roll must beat the Pokemon's base experience.
///
/// An unknown base experience counts as zero, the easiest catch.
pub fn catch_succeeds(roll: u32, base_experience: Option<u32>) -> bool {
    roll > base_experience.unwrap_or(0)
}

/// Interactive session state.
#[derive(Debug)]
pub struct Session {
    client: PokeApiClient,
    catch_difficulty: u32,
    next: Option<String>,
    /// Absent before the first page and while on page one
    previous: Option<String>,
    pokedex: BTreeMap<String, Pokemon>,
}

impl Session {
    /// Creates a session; `catch_difficulty` is the exclusive upper bound
    /// of the catch roll.
    pub fn new(client: PokeApiClient, catch_difficulty: u32) -> Self {
        Self {
            client,
            catch_difficulty: catch_difficulty.max(1),
            next: None,
            previous: None,
            pokedex: BTreeMap::new(),
        }
    }

    /// Caught Pokemon, keyed by the name they were caught under.
    pub fn pokedex(&self) -> &BTreeMap<String, Pokemon> {
        &self.pokedex
    }

    /// Executes one command, writing its output to `out`.
    pub async fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> Result<Flow> {
        match command {
            Command::Help => self.help(out)?,
            Command::Exit => {
                writeln!(out, "Closing the Pokedex... Goodbye!")?;
                return Ok(Flow::Exit);
            }
            Command::Map => {
                let url = self.next.clone();
                self.show_page(url, out).await?;
            }
            Command::MapBack => {
                match self.previous.clone() {
                    Some(url) => self.show_page(Some(url), out).await?,
                    None => writeln!(out, "you're on the first page")?,
                }
            }
            Command::Explore(area) => self.explore(&area, out).await?,
            Command::Catch(name) => {
                let roll = rand::thread_rng().gen_range(0..self.catch_difficulty);
                self.catch(&name, roll, out).await?;
            }
            Command::Inspect(name) => self.inspect(&name, out)?,
            Command::Pokedex => {
                writeln!(out, "Your Pokedex:")?;
                for name in self.pokedex.keys() {
                    writeln!(out, " - {}", name)?;
                }
            }
        }

        Ok(Flow::Continue)
    }

    fn help<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "Welcome to the Pokedex!")?;
        writeln!(out, "Usage:")?;
        writeln!(out)?;
        for (usage, description) in COMMANDS {
            writeln!(out, "{}: {}", usage, description)?;
        }
        Ok(())
    }

    async fn show_page<W: Write>(&mut self, url: Option<String>, out: &mut W) -> Result<()> {
        let fetched = self.client.location_areas(url.as_deref()).await?;
        report_source(fetched.source, out)?;

        let page = fetched.data;
        self.next = page.next;
        self.previous = page.previous;

        for area in page.results {
            writeln!(out, "{}", area.name)?;
        }
        Ok(())
    }

    async fn explore<W: Write>(&self, area: &str, out: &mut W) -> Result<()> {
        writeln!(out, "Exploring {}...", area)?;
        let fetched = self.client.location_area(area).await?;
        report_source(fetched.source, out)?;

        writeln!(out, "Found Pokemon:")?;
        for encounter in fetched.data.pokemon_encounters {
            writeln!(out, " - {}", encounter.pokemon.name)?;
        }
        Ok(())
    }

    /// Attempts a catch with a precomputed `roll`.
    pub async fn catch<W: Write>(&mut self, name: &str, roll: u32, out: &mut W) -> Result<bool> {
        writeln!(out, "Throwing a Pokeball at {}...", name)?;
        let mut pokemon = self.client.pokemon(name).await?.data;

        if !catch_succeeds(roll, pokemon.base_experience) {
            writeln!(out, "{} escaped!", name)?;
            return Ok(false);
        }

        pokemon.name = name.to_string();
        self.pokedex.insert(name.to_string(), pokemon);
        info!("Caught {}", name);
        writeln!(out, "{} was caught!", name)?;
        writeln!(out, "You may now inspect it with the inspect command.")?;
        Ok(true)
    }

    fn inspect<W: Write>(&self, name: &str, out: &mut W) -> Result<()> {
        let pokemon = self
            .pokedex
            .get(name)
            .ok_or_else(|| PokedexError::NotCaught(name.to_string()))?;

        writeln!(out, "Name: {}", pokemon.name)?;
        writeln!(out, "Height: {}", pokemon.height)?;
        writeln!(out, "Weight: {}", pokemon.weight)?;
        writeln!(out, "Stats:")?;
        for stat in &pokemon.stats {
            writeln!(out, "  -{}: {}", stat.stat.name, stat.base_stat)?;
        }
        writeln!(out, "Types:")?;
        for kind in &pokemon.types {
            writeln!(out, "  - {}", kind.kind.name)?;
        }
        Ok(())
    }

    /// Ends the session, stopping the client's cache reaper.
    pub async fn shutdown(self) {
        self.client.shutdown().await;
    }
}

fn report_source<W: Write>(source: Source, out: &mut W) -> Result<()> {
    match source {
        Source::Network => writeln!(out, "New network request...")?,
        Source::Cache => writeln!(out, "Using cached data...")?,
    }
    Ok(())
}

//! REPL Commands
//!
//! Input normalisation and parsing of command lines into [`Command`]s.

use crate::error::{PokedexError, Result};

/// A parsed REPL command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    Map,
    MapBack,
    Explore(String),
    Catch(String),
    Inspect(String),
    Pokedex,
}

/// Name and description of every command, in help order.
pub const COMMANDS: &[(&str, &str)] = &[
    ("help", "Displays a help message"),
    ("exit", "Exit the Pokedex"),
    ("map", "Displays the names of the next 20 location areas"),
    ("mapb", "Displays the names of the previous 20 location areas"),
    ("explore <area>", "Lists the Pokemon found in a location area"),
    ("catch <pokemon>", "Attempt to catch the chosen Pokemon"),
    ("inspect <pokemon>", "Inspect a Pokemon in your Pokedex"),
    ("pokedex", "Lists all the Pokemon in your Pokedex"),
];

/// Lowercases and trims `text`, then splits it into words.
pub fn clean_input(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

impl Command {
    /// Parses cleaned words into a command.
    ///
    /// Returns `Ok(None)` for a blank line. Words after the expected
    /// argument are ignored.
    pub fn parse(words: &[String]) -> Result<Option<Self>> {
        let Some(verb) = words.first() else {
            return Ok(None);
        };
        let arg = words.get(1).cloned();

        let command = match verb.as_str() {
            "help" => Command::Help,
            "exit" => Command::Exit,
            "map" => Command::Map,
            "mapb" => Command::MapBack,
            "explore" => Command::Explore(require(arg, "explore", "location area name")?),
            "catch" => Command::Catch(require(arg, "catch", "Pokemon name")?),
            "inspect" => Command::Inspect(require(arg, "inspect", "Pokemon name")?),
            "pokedex" => Command::Pokedex,
            other => return Err(PokedexError::UnknownCommand(other.to_string())),
        };

        Ok(Some(command))
    }
}

fn require(arg: Option<String>, command: &'static str, argument: &'static str) -> Result<String> {
    arg.ok_or(PokedexError::MissingArgument { command, argument })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<String> {
        clean_input(text)
    }

    #[test]
    fn test_clean_input() {
        let cases = [
            (" hello world ", vec!["hello", "world"]),
            (
                "yes man the thing is good ",
                vec!["yes", "man", "the", "thing", "is", "good"],
            ),
            ("Charmander  BULBASAUR\tPIKACHU", vec!["charmander", "bulbasaur", "pikachu"]),
            ("   ", vec![]),
        ];

        for (input, expected) in cases {
            assert_eq!(clean_input(input), expected, "input: {:?}", input);
        }
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(Command::parse(&words("help")).unwrap(), Some(Command::Help));
        assert_eq!(Command::parse(&words("EXIT")).unwrap(), Some(Command::Exit));
        assert_eq!(Command::parse(&words("map")).unwrap(), Some(Command::Map));
        assert_eq!(Command::parse(&words("mapb")).unwrap(), Some(Command::MapBack));
        assert_eq!(
            Command::parse(&words("pokedex")).unwrap(),
            Some(Command::Pokedex)
        );
    }

    #[test]
    fn test_parse_commands_with_argument() {
        assert_eq!(
            Command::parse(&words("explore pastoria-city-area")).unwrap(),
            Some(Command::Explore("pastoria-city-area".to_string()))
        );
        assert_eq!(
            Command::parse(&words("catch Pikachu extra")).unwrap(),
            Some(Command::Catch("pikachu".to_string()))
        );
        assert_eq!(
            Command::parse(&words("inspect pidgey")).unwrap(),
            Some(Command::Inspect("pidgey".to_string()))
        );
    }

    #[test]
    fn test_parse_missing_argument() {
        let result = Command::parse(&words("catch"));
        assert!(matches!(
            result,
            Err(PokedexError::MissingArgument {
                command: "catch",
                ..
            })
        ));
    }

    #[test]
    fn test_parse_unknown_command() {
        let result = Command::parse(&words("fly away"));
        assert!(matches!(result, Err(PokedexError::UnknownCommand(verb)) if verb == "fly"));
    }

    #[test]
    fn test_parse_blank_line() {
        assert_eq!(Command::parse(&words("  ")).unwrap(), None);
    }

    #[test]
    fn test_every_verb_has_help() {
        for (usage, _) in COMMANDS {
            let verb = usage.split_whitespace().next().unwrap();
            let line = format!("{} arg", verb);
            assert!(Command::parse(&words(&line)).is_ok(), "verb {}", verb);
        }
    }
}

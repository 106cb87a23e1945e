//! REPL Loop
//!
//! Line input on a dedicated thread and the prompt/execute loop fed by it.

use std::io::{BufRead, Write};
use std::thread;

use tokio::sync::mpsc;
use tracing::warn;

use crate::error::Result;
use crate::repl::command::{clean_input, Command};
use crate::repl::session::{Flow, Session};

/// Lines buffered between the reader thread and the loop
const LINE_BUFFER: usize = 16;

/// Reads lines from `reader` on a plain OS thread and forwards them.
///
/// Blocking reads stay off the runtime, so the loop can be abandoned (for
/// example on Ctrl+C) without waiting for another line. The channel closes
/// at end of input or on a read error.
pub fn spawn_line_reader<R>(reader: R) -> mpsc::Receiver<String>
where
    R: BufRead + Send + 'static,
{
    let (tx, rx) = mpsc::channel(LINE_BUFFER);

    thread::spawn(move || {
        for line in reader.lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    warn!("Failed to read input: {}", err);
                    break;
                }
            };
            if tx.blocking_send(line).is_err() {
                break;
            }
        }
    });

    rx
}

/// Prompts, reads and executes commands until `exit` or end of input.
///
/// Command errors are reported as `Oops: ...` and the loop continues.
pub async fn run_repl<W: Write>(
    session: &mut Session,
    lines: &mut mpsc::Receiver<String>,
    out: &mut W,
) -> Result<()> {
    loop {
        write!(out, "Pokedex > ")?;
        out.flush()?;

        let Some(line) = lines.recv().await else {
            writeln!(out)?;
            return Ok(());
        };

        let command = match Command::parse(&clean_input(&line)) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                writeln!(out, "Oops: {}", err)?;
                continue;
            }
        };

        match session.execute(command, out).await {
            Ok(Flow::Exit) => return Ok(()),
            Ok(Flow::Continue) => {}
            Err(err) => writeln!(out, "Oops: {}", err)?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::time::Duration;

    use crate::client::PokeApiClient;
    use crate::config::Config;

    fn offline_session() -> Session {
        let config = Config {
            api_base_url: "http://127.0.0.1:1".to_string(),
            ..Config::default()
        };
        Session::new(PokeApiClient::new(&config).unwrap(), 608)
    }

    #[tokio::test]
    async fn test_repl_runs_until_exit() {
        let mut session = offline_session();
        let mut lines = spawn_line_reader(Cursor::new("help\nfly away\n\ninspect mew\nexit\nmap\n"));
        let mut out = Vec::new();

        run_repl(&mut session, &mut lines, &mut out).await.unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Pokedex > Welcome to the Pokedex!"));
        assert!(text.contains("Oops: Unknown command: fly"));
        assert!(text.contains("Oops: You have not caught mew"));
        assert!(text.ends_with("Closing the Pokedex... Goodbye!\n"));
        session.shutdown().await;
    }

    #[tokio::test]
    async fn test_repl_stops_at_end_of_input() {
        let mut session = offline_session();
        let mut lines = spawn_line_reader(Cursor::new("pokedex\n"));
        let mut out = Vec::new();

        run_repl(&mut session, &mut lines, &mut out).await.unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "Pokedex > Your Pokedex:\nPokedex > \n");
        session.shutdown().await;
    }

    #[tokio::test]
    async fn test_repl_can_be_abandoned_while_waiting_for_input() {
        let mut session = offline_session();
        // Sender kept alive: no line and no end of input ever arrive
        let (_tx, mut lines) = mpsc::channel::<String>(1);
        let mut out = Vec::new();

        let result = tokio::time::timeout(
            Duration::from_millis(50),
            run_repl(&mut session, &mut lines, &mut out),
        )
        .await;

        assert!(result.is_err(), "loop should still be waiting for input");
        tokio::time::timeout(Duration::from_secs(1), session.shutdown())
            .await
            .expect("shutdown should not wait on pending input");
    }
}

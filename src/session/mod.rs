//! The interactive session loop.
//!
//! A [`Session`] owns the single current [`Database`] value and drives the
//! resolution pipeline for each input line: parse → bind → dispatch →
//! replace snapshot → print. Every error raised along the way is caught
//! here, rendered as one line, and the loop reads the next input; nothing
//! terminates the process. The loop ends only when the input reaches EOF.

pub mod dispatch;

use std::io::BufRead;

use crate::command::{self, Catalog, Command};
use crate::error::Result;
use crate::import::HandParser;
use crate::store::Database;
use crate::ui::Ui;

/// One interactive session: the current store value, the command catalog,
/// and the hand-file parser collaborator.
pub struct Session {
    database: Database,
    catalog: Catalog,
    parser: Box<dyn HandParser>,
}

impl Session {
    /// Start a session with an empty store.
    pub fn new(parser: Box<dyn HandParser>) -> Self {
        Self {
            database: Database::empty(),
            catalog: Catalog::builtin(),
            parser,
        }
    }

    /// The current store snapshot.
    pub fn database(&self) -> &Database {
        &self.database
    }

    /// Resolve and dispatch one input line.
    ///
    /// On success the session's current store is replaced with the
    /// dispatched value and the output lines are returned. On any failure
    /// the current store is left untouched.
    pub fn execute(&mut self, line: &str) -> Result<Vec<String>> {
        let command = command::resolve(line, &self.catalog)?;
        tracing::debug!(?command, "dispatching command");
        self.apply(&command)
    }

    /// Dispatch an already-constructed command, bypassing line parsing.
    ///
    /// Used for the `--import` startup argument, where the path comes from
    /// the outer CLI rather than a tokenized REPL line.
    pub fn import_file(&mut self, path: &std::path::Path) -> Result<Vec<String>> {
        self.apply(&Command::ImportFile {
            path: path.to_path_buf(),
        })
    }

    fn apply(&mut self, command: &Command) -> Result<Vec<String>> {
        let outcome = dispatch::dispatch(command, &self.database, self.parser.as_ref())?;
        self.database = outcome.database;
        Ok(outcome.lines)
    }

    /// Run the read-eval-print loop until the input reaches EOF.
    ///
    /// Every per-line error is reported through `ui` and swallowed; only a
    /// failure to read the input itself ends the loop early.
    pub fn run(&mut self, input: &mut dyn BufRead, ui: &mut Ui) -> Result<()> {
        self.print_banner(ui);
        let mut line = String::new();
        loop {
            ui.prompt();
            line.clear();
            if input.read_line(&mut line)? == 0 {
                tracing::debug!("input reached EOF, ending session");
                break;
            }
            match self.execute(&line) {
                Ok(lines) => {
                    for out in &lines {
                        ui.message(out);
                    }
                }
                Err(e) => ui.error(&e.to_string()),
            }
        }
        Ok(())
    }

    fn print_banner(&self, ui: &mut Ui) {
        ui.info("Commands:");
        for spec in self.catalog.specs() {
            ui.info(&format!("  {:<18} {}", spec.name, spec.description));
        }
    }
}

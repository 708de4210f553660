//! Terminal output for the session loop.
//!
//! A thin styled writer over stdout. Styles come from [`console`], which
//! disables itself automatically when stdout is not a terminal or
//! `NO_COLOR` is set, so piped sessions (and the integration tests) see
//! plain text.

use std::io::Write;

use console::Style;

/// Visual theme for session output.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Style for the input prompt.
    pub prompt: Style,
    /// Style for error lines (red bold).
    pub error: Style,
    /// Style for secondary text such as the banner (dim).
    pub dim: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            prompt: Style::new().cyan().bold(),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
        }
    }
}

/// Styled writer for session output. All output goes to stdout, written
/// synchronously, one line at a time.
#[derive(Debug, Default)]
pub struct Ui {
    theme: Theme,
}

impl Ui {
    /// Create a UI with the default theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Print the input prompt, without a trailing newline.
    pub fn prompt(&mut self) {
        print!("{} ", self.theme.prompt.apply_to(">"));
        let _ = std::io::stdout().flush();
    }

    /// Print one command output line.
    pub fn message(&mut self, msg: &str) {
        println!("{}", msg);
    }

    /// Print one secondary/banner line.
    pub fn info(&mut self, msg: &str) {
        println!("{}", self.theme.dim.apply_to(msg));
    }

    /// Print one error line.
    pub fn error(&mut self, msg: &str) {
        println!("{}", self.theme.error.apply_to(format!("Error: {}", msg)));
    }
}

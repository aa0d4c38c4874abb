//! Status output

use console::{style, Term};

/// Kind of status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Operation completed
    Success,
    /// Something the user should look at
    Warning,
    /// Informational
    Info,
}

/// Writes status lines and report bodies to stdout
#[derive(Debug)]
pub struct Reporter {
    term: Term,
    /// Whether to use colors
    pub use_color: bool,
    /// Quiet mode
    pub quiet: bool,
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(true, false)
    }
}

impl Reporter {
    /// Create a new reporter
    #[must_use]
    pub fn new(use_color: bool, quiet: bool) -> Self {
        Self {
            term: Term::stdout(),
            use_color,
            quiet,
        }
    }

    /// Format a status line without printing it
    #[must_use]
    pub fn format_status(&self, status: Status, message: &str) -> String {
        let prefix = match (status, self.use_color) {
            (Status::Success, true) => style("✓").green().bold().to_string(),
            (Status::Warning, true) => style("⚠").yellow().bold().to_string(),
            (Status::Info, true) => style("ℹ").blue().bold().to_string(),
            (Status::Success, false) => "OK".to_string(),
            (Status::Warning, false) => "WARN".to_string(),
            (Status::Info, false) => "INFO".to_string(),
        };
        format!("{prefix} {message}")
    }

    fn status(&self, status: Status, message: &str) {
        if self.quiet {
            return;
        }
        let _ = self.term.write_line(&self.format_status(status, message));
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        self.status(Status::Success, message);
    }

    /// Print a warning message
    pub fn warning(&self, message: &str) {
        self.status(Status::Warning, message);
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        self.status(Status::Info, message);
    }

    /// Print a rendered report; shown even in quiet mode
    pub fn report(&self, body: &str) {
        let _ = self.term.write_str(body);
        let _ = self.term.flush();
    }
}

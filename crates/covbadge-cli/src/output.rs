//! Status output on stderr
//!
//! Stdout carries only the coverage percentage, so everything meant for a
//! human goes through [`Reporter`].

use console::{style, Term};

/// Status line writer
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
    /// Create a new reporter writing to stderr
    #[must_use]
    pub fn new(use_color: bool, quiet: bool) -> Self {
        Self {
            term: Term::stderr(),
            use_color,
            quiet,
        }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        if self.quiet {
            return;
        }
        self.write(&self.prefix("✓", "OK", Tone::Good), message);
    }

    /// Print a failure message
    pub fn failure(&self, message: &str) {
        // Always print failures, even in quiet mode
        self.write(&self.prefix("✗", "Error:", Tone::Bad), message);
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        if self.quiet {
            return;
        }
        self.write(&self.prefix("ℹ", "INFO", Tone::Neutral), message);
    }

    fn prefix(&self, symbol: &str, plain: &str, tone: Tone) -> String {
        if !self.use_color {
            return plain.to_string();
        }
        let styled = style(symbol).bold();
        match tone {
            Tone::Good => styled.green(),
            Tone::Bad => styled.red(),
            Tone::Neutral => styled.blue(),
        }
        .to_string()
    }

    fn write(&self, prefix: &str, message: &str) {
        let _ = self.term.write_line(&format!("{prefix} {message}"));
    }
}

#[derive(Clone, Copy)]
enum Tone {
    Good,
    Bad,
    Neutral,
}

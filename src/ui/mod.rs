//! User-facing output
//!
//! This module handles:
//! - Status messages for check, reconcile and init operations
//! - Rendering of check outcomes and reconcile reports (see [`display`])
//!
//! All output goes through the [`Reporter`] trait, which is passed into the
//! operations that need it. Commands use [`ConsoleReporter`]; tests capture
//! messages with a recording implementation.

pub mod display;

use console::Style;

/// Output sink for user-facing messages
pub trait Reporter {
    /// Plain informational line
    fn info(&mut self, message: &str);

    /// Positive outcome (e.g. up to date, file added)
    fn success(&mut self, message: &str);

    /// Something the user should look at, but not a failure
    fn warn(&mut self, message: &str);

    /// Failure of one step; the operation may still continue
    fn error(&mut self, message: &str);
}

/// Colored terminal reporter
///
/// Informational and success lines go to stdout, warnings and errors to stderr.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn info(&mut self, message: &str) {
        println!("{message}");
    }

    fn success(&mut self, message: &str) {
        println!("{}", Style::new().green().apply_to(message));
    }

    fn warn(&mut self, message: &str) {
        eprintln!(
            "{} {}",
            Style::new().yellow().bold().apply_to("Warning:"),
            message
        );
    }

    fn error(&mut self, message: &str) {
        eprintln!("{} {}", Style::new().red().bold().apply_to("Error:"), message);
    }
}

/// Reporter for `--quiet`: drops everything except errors
#[derive(Debug, Default)]
pub struct QuietReporter;

impl Reporter for QuietReporter {
    fn info(&mut self, _message: &str) {}

    fn success(&mut self, _message: &str) {}

    fn warn(&mut self, _message: &str) {}

    fn error(&mut self, message: &str) {
        ConsoleReporter.error(message);
    }
}

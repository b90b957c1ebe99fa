//! Terminal output for the command-line front end.
//!
//! Status lines go to stderr so stdout carries only the resolved version.

use console::style;

use crate::diagnostics::{Diagnostic, DiagnosticSink, Severity};

pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

pub fn display_warning(message: &str) {
    eprintln!("{} {}", style("WARNING:").yellow().bold(), message);
}

pub fn display_status(message: &str) {
    eprintln!("{} {}", style("→").yellow(), message);
}

/// Print a resolved version, labelled when more than one is shown
pub fn display_version(label: Option<&str>, version: &str) {
    match label {
        Some(label) => println!("{}: {}", label, version),
        None => println!("{}", version),
    }
}

/// Shows diagnostics on the terminal in place of log output.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalSink;

impl DiagnosticSink for TerminalSink {
    fn report(&self, diagnostic: &Diagnostic) {
        let message = diagnostic.to_string();
        match diagnostic.severity() {
            Severity::Warning => display_warning(&message),
            Severity::Error => display_error(&message),
        }
    }
}

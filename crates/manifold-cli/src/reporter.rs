//! Terminal rendering of synthesis events

use colored::Colorize;
use manifold_core::{Reporter, SynthesisEvent};

/// Prints synthesis events to the terminal.
///
/// Warnings always go to stderr. Phase progress is only shown in verbose
/// mode.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter {
    verbose: bool,
}

impl ConsoleReporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl Reporter for ConsoleReporter {
    fn report(&self, event: &SynthesisEvent) {
        match event {
            SynthesisEvent::PhaseStarted(phase) if self.verbose => {
                println!("   {} {}...", "-".dimmed(), phase.description());
            }
            SynthesisEvent::Warning(message) => {
                eprintln!("{}: {}", "warning".yellow().bold(), message);
            }
            _ => {}
        }
    }
}

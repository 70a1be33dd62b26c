//! Structured progress events emitted by the orchestrator.
//!
//! The orchestrator never prints. It reports [`SynthesisEvent`]s to an
//! injected [`Reporter`], and the caller decides how they are shown.

use std::fmt;
use std::sync::{Mutex, PoisonError};

/// Steps of one synthesis run, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    PrepareWorkspace,
    ExternalSteps,
    LoadPackage,
    Discovery,
    ApplyToggles,
    Write,
}

impl Phase {
    pub const ALL: [Phase; 6] = [
        Self::PrepareWorkspace,
        Self::ExternalSteps,
        Self::LoadPackage,
        Self::Discovery,
        Self::ApplyToggles,
        Self::Write,
    ];

    /// Human-readable description.
    pub fn description(&self) -> &'static str {
        match self {
            Self::PrepareWorkspace => "Preparing working directory",
            Self::ExternalSteps => "Updating version file and icons",
            Self::LoadPackage => "Loading package data",
            Self::Discovery => "Discovering entrypoints",
            Self::ApplyToggles => "Applying capabilities",
            Self::Write => "Writing manifest",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::PrepareWorkspace => "prepare-workspace",
            Self::ExternalSteps => "external-steps",
            Self::LoadPackage => "load-package",
            Self::Discovery => "discovery",
            Self::ApplyToggles => "apply-toggles",
            Self::Write => "write",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SynthesisEvent {
    PhaseStarted(Phase),
    PhaseCompleted(Phase),
    /// Non-fatal condition the user should see.
    Warning(String),
}

/// Receives synthesis events.
pub trait Reporter: Send + Sync {
    fn report(&self, event: &SynthesisEvent);
}

/// Forwards events to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&self, event: &SynthesisEvent) {
        match event {
            SynthesisEvent::PhaseStarted(phase) => {
                tracing::debug!(phase = %phase, "{}", phase.description())
            }
            SynthesisEvent::PhaseCompleted(phase) => {
                tracing::info!(phase = %phase, "phase completed")
            }
            SynthesisEvent::Warning(message) => tracing::warn!("{}", message),
        }
    }
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn report(&self, _event: &SynthesisEvent) {}
}

/// Keeps every event in memory.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    events: Mutex<Vec<SynthesisEvent>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events received so far, in order.
    pub fn events(&self) -> Vec<SynthesisEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Messages of the warnings received so far.
    pub fn warnings(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                SynthesisEvent::Warning(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    /// Phases that completed, in order.
    pub fn completed_phases(&self) -> Vec<Phase> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                SynthesisEvent::PhaseCompleted(phase) => Some(phase),
                _ => None,
            })
            .collect()
    }
}

impl Reporter for RecordingReporter {
    fn report(&self, event: &SynthesisEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_reporter_keeps_order() {
        let reporter = RecordingReporter::new();
        reporter.report(&SynthesisEvent::PhaseStarted(Phase::Discovery));
        reporter.report(&SynthesisEvent::Warning("careful".into()));
        reporter.report(&SynthesisEvent::PhaseCompleted(Phase::Discovery));

        assert_eq!(reporter.events().len(), 3);
        assert_eq!(reporter.warnings(), vec!["careful".to_string()]);
        assert_eq!(reporter.completed_phases(), vec![Phase::Discovery]);
    }

    #[test]
    fn test_phase_names_are_unique() {
        let mut names: Vec<String> = Phase::ALL.iter().map(ToString::to_string).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), Phase::ALL.len());
    }
}

use std::fmt;

use crate::error::{Error, Result};

/// Lifecycle of a single `Verifier`.
///
/// A verifier is configured, validated and executed exactly once. There is
/// no way back to `Configuring` after a run starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Configuring,
    Validated,
    Executing,
    Completed,
    Failed,
}

impl RunState {
    /// Check if transitioning from the current state to `next` is valid.
    ///
    /// Valid transitions:
    /// - `Configuring` -> `Validated` | `Failed`
    /// - `Validated` -> `Executing` | `Failed`
    /// - `Executing` -> `Completed` | `Failed`
    /// - `Completed` and `Failed` are terminal
    pub fn can_transition_to(&self, next: &RunState) -> bool {
        if self == next {
            return true;
        }

        match self {
            RunState::Configuring => matches!(next, RunState::Validated | RunState::Failed),
            RunState::Validated => matches!(next, RunState::Executing | RunState::Failed),
            RunState::Executing => matches!(next, RunState::Completed | RunState::Failed),
            RunState::Completed => false, // Terminal state
            RunState::Failed => false,    // Terminal state
        }
    }

    /// Attempt to transition to `next`, returning an error if invalid.
    pub fn try_transition(&self, next: RunState) -> Result<RunState> {
        if self.can_transition_to(&next) {
            Ok(next)
        } else {
            Err(Error::InvalidState {
                from: self.to_string(),
                to: next.to_string(),
            })
        }
    }

    pub fn valid_transitions(&self) -> Vec<RunState> {
        match self {
            RunState::Configuring => vec![RunState::Validated, RunState::Failed],
            RunState::Validated => vec![RunState::Executing, RunState::Failed],
            RunState::Executing => vec![RunState::Completed, RunState::Failed],
            RunState::Completed => vec![],
            RunState::Failed => vec![],
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, RunState::Completed | RunState::Failed)
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunState::Configuring => write!(f, "Configuring"),
            RunState::Validated => write!(f, "Validated"),
            RunState::Executing => write!(f, "Executing"),
            RunState::Completed => write!(f, "Completed"),
            RunState::Failed => write!(f, "Failed"),
        }
    }
}

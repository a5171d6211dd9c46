//! Per-form double-submit guard.
//!
//! The first submit of a cycle proceeds and flips the guard to
//! `Processing`; later submits are suppressed until the page is restored
//! from the back/forward cache, which starts a new cycle.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Ready,
    Processing,
}

/// What the controller should do with a submit event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitDecision {
    /// Let the browser submit; disable the control and show the processing label.
    Proceed,
    /// A submission is already in flight; cancel this one.
    Suppress,
}

#[derive(Clone, Debug, Default)]
pub struct SubmitGuard {
    phase: SubmitPhase,
    /// Submit control label captured when the cycle began.
    original_label: Option<String>,
}

impl SubmitGuard {
    /// Register a submit event. `label` is the control's current text.
    pub fn begin(&mut self, label: Option<String>) -> SubmitDecision {
        match self.phase {
            SubmitPhase::Processing => SubmitDecision::Suppress,
            SubmitPhase::Ready => {
                self.phase = SubmitPhase::Processing;
                self.original_label = label;
                SubmitDecision::Proceed
            }
        }
    }

    /// End the cycle. Returns the label to restore if one was in flight.
    pub fn reset(&mut self) -> Option<String> {
        if self.phase == SubmitPhase::Ready {
            return None;
        }
        self.phase = SubmitPhase::Ready;
        Some(self.original_label.take().unwrap_or_default())
    }
}

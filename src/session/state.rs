//! Quiz session state machine.

/// Lifecycle state of a quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Questions are being fetched.
    #[default]
    Loading,
    /// Questions are being answered.
    InProgress,
    /// Every question has been answered.
    Complete,
    /// The fetch produced no questions; the session cannot start.
    Failed,
}

impl SessionState {
    /// Check if transition to target state is valid.
    ///
    /// Valid transitions:
    /// - Loading -> InProgress
    /// - Loading -> Failed
    /// - InProgress -> Complete
    /// - Complete -> InProgress (restart)
    pub fn can_transition_to(&self, target: SessionState) -> bool {
        use SessionState::*;
        matches!(
            (*self, target),
            (Loading, InProgress) | (Loading, Failed) | (InProgress, Complete) | (Complete, InProgress)
        )
    }

    /// Attempt to transition to a new state.
    ///
    /// Returns `Ok(())` if the transition is valid, or an error otherwise.
    pub fn transition_to(&mut self, target: SessionState) -> crate::Result<()> {
        if self.can_transition_to(target) {
            *self = target;
            Ok(())
        } else {
            Err(crate::error::TriviaError::InvalidStateTransition {
                from: *self,
                to: target,
            })
        }
    }

    /// Check if the session accepts answers.
    pub fn can_answer(&self) -> bool {
        matches!(self, SessionState::InProgress)
    }
}

//! Per-slot computation state machine
//!
//! A slot is one logical computation context (the original exposed one
//! per input tab). It permits at most one in-flight request and is
//! enforced by the caller, not by the engine: concurrent independent
//! requests are safe, the slot only guards what a single surface
//! shows.

use crate::error::ValidationError;
use crate::session::HashEvent;
use crate::Result;
use serde::{Deserialize, Serialize};

/// State of a computation slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotState {
    Idle,
    Running,
    Completed,
    Failed,
}

impl Default for SlotState {
    fn default() -> Self {
        SlotState::Idle
    }
}

impl std::fmt::Display for SlotState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SlotState::Idle => "idle",
            SlotState::Running => "running",
            SlotState::Completed => "completed",
            SlotState::Failed => "failed",
        };
        write!(f, "{name}")
    }
}

/// Guarded state machine for one computation slot
///
/// Transitions: any non-running state may begin a computation; only a
/// running slot may reach a terminal state. A cancelled computation
/// returns the slot to [`SlotState::Idle`] since it leaves nothing to
/// show.
#[derive(Debug, Default)]
pub struct HashSlot {
    state: SlotState,
}

impl HashSlot {
    /// Create a new idle slot
    pub fn new() -> Self {
        Self {
            state: SlotState::Idle,
        }
    }

    /// Current state
    pub fn state(&self) -> SlotState {
        self.state
    }

    /// Whether a new request may start right now
    pub fn is_ready(&self) -> bool {
        self.state != SlotState::Running
    }

    /// Mark the start of a computation
    pub fn begin(&mut self) -> Result<()> {
        if self.state == SlotState::Running {
            return Err(ValidationError::SlotBusy.into());
        }
        self.state = SlotState::Running;
        Ok(())
    }

    /// Record the terminal event of the in-flight computation
    pub fn observe_terminal(&mut self, event: &HashEvent) -> Result<()> {
        let next = match event {
            HashEvent::Completed { .. } => SlotState::Completed,
            HashEvent::Failed { .. } => SlotState::Failed,
            HashEvent::Cancelled => SlotState::Idle,
            HashEvent::Progress { .. } => {
                return Err(ValidationError::invalid_transition(self.state, "progress").into());
            }
        };

        if self.state != SlotState::Running {
            return Err(ValidationError::invalid_transition(self.state, next).into());
        }
        self.state = next;
        Ok(())
    }

    /// Return a terminal slot to idle
    pub fn reset(&mut self) -> Result<()> {
        if self.state == SlotState::Running {
            return Err(ValidationError::invalid_transition(self.state, SlotState::Idle).into());
        }
        self.state = SlotState::Idle;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn completed() -> HashEvent {
        HashEvent::Completed {
            algorithm: "SHA-256".to_string(),
            digest: "00".repeat(32),
            input_size: 3,
        }
    }

    #[test]
    fn test_new_slot_is_idle() {
        let slot = HashSlot::new();
        assert_eq!(slot.state(), SlotState::Idle);
        assert!(slot.is_ready());
    }

    #[test]
    fn test_begin_from_idle() {
        let mut slot = HashSlot::new();
        slot.begin().unwrap();
        assert_eq!(slot.state(), SlotState::Running);
        assert!(!slot.is_ready());
    }

    #[test]
    fn test_begin_while_running_is_rejected() {
        let mut slot = HashSlot::new();
        slot.begin().unwrap();

        let error = slot.begin().unwrap_err();
        assert!(matches!(
            error,
            Error::Validation(crate::error::ValidationError::SlotBusy)
        ));
        assert_eq!(slot.state(), SlotState::Running);
    }

    #[test]
    fn test_terminal_events_map_to_states() {
        let mut slot = HashSlot::new();
        slot.begin().unwrap();
        slot.observe_terminal(&completed()).unwrap();
        assert_eq!(slot.state(), SlotState::Completed);

        slot.begin().unwrap();
        slot.observe_terminal(&HashEvent::Failed {
            message: "boom".to_string(),
        })
        .unwrap();
        assert_eq!(slot.state(), SlotState::Failed);

        slot.begin().unwrap();
        slot.observe_terminal(&HashEvent::Cancelled).unwrap();
        assert_eq!(slot.state(), SlotState::Idle);
    }

    #[test]
    fn test_terminal_states_allow_restart() {
        let mut slot = HashSlot::new();
        slot.begin().unwrap();
        slot.observe_terminal(&completed()).unwrap();

        // Completed and Failed slots may start again without a reset
        slot.begin().unwrap();
        assert_eq!(slot.state(), SlotState::Running);
    }

    #[test]
    fn test_progress_is_not_a_terminal_event() {
        let mut slot = HashSlot::new();
        slot.begin().unwrap();
        assert!(
            slot.observe_terminal(&HashEvent::Progress { percent: 50 })
                .is_err()
        );
        assert_eq!(slot.state(), SlotState::Running);
    }

    #[test]
    fn test_terminal_without_running_is_rejected() {
        let mut slot = HashSlot::new();
        assert!(slot.observe_terminal(&completed()).is_err());
        assert_eq!(slot.state(), SlotState::Idle);
    }

    #[test]
    fn test_reset() {
        let mut slot = HashSlot::new();
        slot.begin().unwrap();
        slot.observe_terminal(&completed()).unwrap();
        slot.reset().unwrap();
        assert_eq!(slot.state(), SlotState::Idle);

        slot.begin().unwrap();
        assert!(slot.reset().is_err());
    }
}

//! # Screen State
//!
//! Lifecycle of one host screen:
//!
//! ```text
//! Created ──(deferred load)──▶ DataLoaded
//!    │                            │
//!    └────────(teardown)──────────┴──▶ TornDown
//! ```
//!
//! Actions may arrive in any phase before teardown; they are counted, not
//! modelled as a phase.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Created,
    DataLoaded,
    TornDown,
}

#[derive(Debug)]
pub struct ScreenState {
    pub phase: Phase,
    /// Number of actions applied so far.
    pub actions_fired: u32,
}

impl Default for ScreenState {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenState {
    pub fn new() -> Self {
        Self {
            phase: Phase::Created,
            actions_fired: 0,
        }
    }

    pub fn is_torn_down(&self) -> bool {
        self.phase == Phase::TornDown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_new_defaults() {
        let state = ScreenState::new();
        assert_eq!(state.phase, Phase::Created);
        assert_eq!(state.actions_fired, 0);
        assert!(!state.is_torn_down());
    }
}

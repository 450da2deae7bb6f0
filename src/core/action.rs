//! # Actions
//!
//! Everything that reaches the screen from outside the render pass becomes an
//! `Action`. The delayed load? That's `Action::DataLoaded(record)`.
//! Button pressed? That's `Action::ActionRequested`.
//!
//! `update()` advances the screen state and returns the `Effect` the view
//! should apply. No rendering happens here.
//!
//! ```text
//! State + Action  →  update()  →  Effect
//! ```

use log::{debug, warn};

use crate::core::record::{DataRecord, OtherDataRecord};
use crate::core::state::{Phase, ScreenState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The simulated fetch finished.
    DataLoaded(DataRecord),
    /// The user activated the action button.
    ActionRequested,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    ShowData(DataRecord),
    ShowOtherData(OtherDataRecord),
}

/// Apply `action` to `state`. `expiration` is the text shown when the action fires.
///
/// Once the screen is torn down every action is dropped, so a late delivery
/// can never touch a discarded view.
pub fn update(state: &mut ScreenState, action: Action, expiration: &str) -> Effect {
    if state.is_torn_down() {
        warn!("Dropping {:?}: screen already torn down", action);
        return Effect::None;
    }

    match action {
        Action::DataLoaded(record) => {
            debug!("Data loaded: {:?}", record);
            state.phase = Phase::DataLoaded;
            Effect::ShowData(record)
        }
        Action::ActionRequested => {
            state.actions_fired += 1;
            debug!("Action fired ({} so far)", state.actions_fired);
            Effect::ShowOtherData(OtherDataRecord::new(expiration))
        }
    }
}

//! # Host Screen
//!
//! Owns the [`RootView`] and everything that feeds it:
//!
//! - a one-shot [`DeferredTask`] that delivers the library info after the
//!   configured delay (the simulated fetch),
//! - the listener capability handed to the action panel,
//! - the [`ScreenState`] machine that decides what each message does.
//!
//! Both the deferred task and the listener only *post* [`Action`]s into the
//! screen's channel. [`HostScreen::pump`] drains it on the presentation loop,
//! so all view mutation happens in one place.
//!
//! ```text
//!  DeferredTask ──DataLoaded──┐
//!                             ├──▶ mpsc ──▶ pump() ──▶ update() ──▶ RootView
//!  ScreenListener ─Requested──┘
//! ```

use std::sync::mpsc;

use log::{debug, info, warn};
use ratatui::Frame;
use ratatui::layout::Rect;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::deferred::DeferredTask;
use crate::core::listener::ActionListener;
use crate::core::record::DataRecord;
use crate::core::state::{Phase, ScreenState};
use crate::tui::component::{Component, EventHandler, Update};
use crate::tui::components::RootView;
use crate::tui::event::TuiEvent;

/// The capability the action panel calls. Holds a sender, never the screen.
struct ScreenListener {
    tx: mpsc::Sender<Action>,
}

impl ActionListener for ScreenListener {
    fn on_action(&self) {
        if self.tx.send(Action::ActionRequested).is_err() {
            warn!("Failed to post ActionRequested: receiver dropped");
        }
    }
}

pub struct HostScreen {
    root: RootView,
    state: ScreenState,
    rx: mpsc::Receiver<Action>,
    /// Pending simulated fetch. Dropping it cancels the delivery.
    pending_load: Option<DeferredTask>,
    expiration: String,
}

impl HostScreen {
    /// Build the screen and schedule the delayed load of `config.data`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(config: &ResolvedConfig) -> Self {
        let (mut screen, tx) = Self::build(config);
        info!(
            "Scheduling library info load in {}ms",
            config.load_delay.as_millis()
        );
        screen.pending_load = Some(DeferredTask::schedule(
            config.load_delay,
            tx,
            Action::DataLoaded(config.data.clone()),
        ));
        screen
    }

    /// Build the screen with `record` already shown. Nothing is scheduled.
    pub fn with_data(config: &ResolvedConfig, record: DataRecord) -> Self {
        let (mut screen, _tx) = Self::build(config);
        info!("Showing preset data: {:?}", record);
        screen.apply(Action::DataLoaded(record));
        screen
    }

    fn build(config: &ResolvedConfig) -> (Self, mpsc::Sender<Action>) {
        let (tx, rx) = mpsc::channel();
        let listener = ScreenListener { tx: tx.clone() };
        let screen = Self {
            root: RootView::new(config.title.clone(), Some(Box::new(listener))),
            state: ScreenState::new(),
            rx,
            pending_load: None,
            expiration: config.expiration.clone(),
        };
        (screen, tx)
    }

    pub fn root(&self) -> &RootView {
        &self.root
    }

    pub fn state(&self) -> &ScreenState {
        &self.state
    }

    /// True while the delayed load has neither run nor been cancelled.
    pub fn is_load_pending(&self) -> bool {
        self.pending_load.as_ref().is_some_and(DeferredTask::is_pending)
    }

    fn apply(&mut self, action: Action) {
        match update(&mut self.state, action, &self.expiration) {
            Effect::ShowData(record) => {
                self.root.update(&record);
                // The load has been applied; nothing left to cancel
                self.pending_load = None;
            }
            Effect::ShowOtherData(record) => self.root.update(&record),
            Effect::None => {}
        }
    }

    /// Apply every action posted since the last call. Returns true if any arrived.
    pub fn pump(&mut self) -> bool {
        let mut changed = false;
        while let Ok(action) = self.rx.try_recv() {
            debug!("Screen received: {:?}", action);
            self.apply(action);
            changed = true;
        }
        changed
    }

    /// Dispatch a UI event, then apply whatever it posted before returning.
    pub fn handle_event(&mut self, event: &TuiEvent) -> bool {
        let activated = self.root.handle_event(event).is_some();
        self.pump() || activated
    }

    /// Cancel the pending load and stop accepting actions. Idempotent.
    pub fn teardown(&mut self) {
        if self.state.is_torn_down() {
            return;
        }
        if let Some(mut task) = self.pending_load.take() {
            task.cancel();
        }
        self.state.phase = Phase::TornDown;
        info!("Screen torn down after {} action(s)", self.state.actions_fired);
    }
}

impl Drop for HostScreen {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl Component for HostScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.root.render(frame, area);
    }
}

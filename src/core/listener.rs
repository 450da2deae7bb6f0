//! # Action Listener
//!
//! The capability a child component uses to tell its owner "the user asked
//! for the action". The child only sees this trait, never the owner's type.

/// Receives button activations.
pub trait ActionListener {
    fn on_action(&self);
}

/// Closures work as listeners, which keeps tests short.
impl<F: Fn()> ActionListener for F {
    fn on_action(&self) {
        self()
    }
}

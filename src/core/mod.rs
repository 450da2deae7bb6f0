//! # Core Application Logic
//!
//! Records, the listener capability, and the screen state machine.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Records (view data)  │
//!                    │  • Action (messages)    │
//!                    │  • update() (reducer)   │
//!                    │  • DeferredTask         │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`record`]: `DataRecord` and `OtherDataRecord`, the values pushed into the view
//! - [`listener`]: The `ActionListener` capability
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`state`]: `ScreenState`, the per-screen lifecycle
//! - [`deferred`]: Cancellable one-shot delayed delivery
//! - [`config`]: Settings with defaults → file → env → CLI resolution

pub mod action;
pub mod config;
pub mod deferred;
pub mod listener;
pub mod record;
pub mod state;

//! # TUI Components
//!
//! Every component owns its own text and exposes only setters
//! ([`Update`](crate::tui::component::Update)) and rendering. Nothing outside
//! a component reaches into its widgets.
//!
//! ### Leaf Components
//!
//! - `TitleBar`: Decorative top bar with the screen title
//! - `DataPanel`: Library name / author / license rows
//! - `ActionPanel`: Button plus expiration label, notifies an `ActionListener`
//!
//! ### Composition
//!
//! `RootView` holds the leaves as owned fields and fans `update` calls out to
//! them. It adds scrolling and nothing else.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top bar)
//! ├── data_panel.rs    (Label/value rows)
//! ├── action_panel.rs  (Button + expiration)
//! └── root_view.rs     (Scrollable composition)
//! ```

mod action_panel;
mod data_panel;
mod root_view;
mod title_bar;

pub use action_panel::{ActionPanel, BUTTON_CAPTION};
pub use data_panel::{DataPanel, LABELS};
pub use root_view::RootView;
pub use title_bar::TitleBar;

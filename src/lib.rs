// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. buffer::BufferError)
    clippy::module_name_repetitions
)]

//! # Scrawl
//!
//! A minimal terminal text editor with configurable syntax highlighting.
//!
//! Scrawl edits a single plain-text document in the terminal with:
//! - Line-based editing (insert, delete, split, merge)
//! - A scrolling viewport that follows the cursor
//! - Rule-driven highlighting (keywords and line comments from a config file)
//!
//! ## Architecture
//!
//! Scrawl uses The Elm Architecture (TEA) pattern:
//! - **Model**: Application state
//! - **Message**: Events and actions
//! - **Update**: Pure state transitions
//! - **View**: Render to terminal
//!
//! ## Modules
//!
//! - [`app`]: Main application loop and state
//! - [`buffer`]: The line buffer and its editing operations
//! - [`highlight`]: Per-line token classification
//! - [`config`]: Highlight rule-set persistence
//! - [`fileio`]: Document loading and saving
//! - [`ui`]: Terminal UI components

pub mod app;
pub mod buffer;
pub mod config;
pub mod fileio;
pub mod highlight;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model};
    pub use crate::buffer::{Buffer, Line};
    pub use crate::highlight::RuleSet;
    pub use crate::ui::viewport::Viewport;
}

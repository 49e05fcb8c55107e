//! Application state and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete session state
//! - [`Message`]: All possible events and actions
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Main event loop with rendering

mod cursor;
mod event_loop;
mod input;
mod model;
mod update;

pub use cursor::{Cursor, Direction};
pub use model::{Model, TAB_STOP};
pub use update::{Message, update};

use std::path::PathBuf;

/// Main application struct that owns the terminal and runs the event loop.
pub struct App {
    file_path: Option<PathBuf>,
    config_path: Option<PathBuf>,
}

impl App {
    /// Create an application, optionally opening a file at startup.
    pub const fn new(file_path: Option<PathBuf>) -> Self {
        Self {
            file_path,
            config_path: None,
        }
    }

    /// Load a highlight rule set from this path before opening the file,
    /// and persist it back there on quit.
    pub fn with_rule_config(mut self, path: Option<PathBuf>) -> Self {
        self.config_path = path;
        self
    }
}

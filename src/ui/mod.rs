//! Terminal UI components.
//!
//! This module contains all UI-related code including:
//! - [`viewport`]: Scroll position and visible range management
//! - [`render`]: Drawing the buffer and status bar each frame

pub mod viewport;

mod render;
mod status;

pub use render::render;

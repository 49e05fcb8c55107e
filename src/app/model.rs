use std::path::{Path, PathBuf};

use crate::app::cursor::{Cursor, Direction};
use crate::buffer::Buffer;
use crate::config;
use crate::fileio::{self, OpenStatus};
use crate::highlight::RuleSet;
use crate::ui::viewport::Viewport;

/// Spaces per tab stop; Tab inserts spaces up to the next multiple.
pub const TAB_STOP: usize = 4;

/// Redraw cycles a status message stays on screen. The counter decrements
/// once per cycle whether or not a key was pressed.
const STATUS_TICKS: u8 = 50;

#[derive(Debug, Clone)]
struct StatusMessage {
    text: String,
    ticks: u8,
}

/// The complete editor session state.
///
/// All state lives here - no global or scattered state. The buffer, cursor,
/// and viewport are exclusively owned and mutated only from the
/// event-dispatch step.
#[derive(Default)]
pub struct Model {
    /// The document being edited
    pub buffer: Buffer,
    /// Current edit position
    pub cursor: Cursor,
    /// Scroll state following the cursor
    pub viewport: Viewport,
    /// Path the document loads from and saves to (None for untitled)
    pub file_path: Option<PathBuf>,
    /// Path the rule set was loaded from and persists back to on quit
    pub config_path: Option<PathBuf>,
    /// Highlight rule set; None means highlighting is disabled
    pub rules: Option<RuleSet>,
    /// Whether the app should quit
    pub should_quit: bool,
    status: Option<StatusMessage>,
}

impl std::fmt::Debug for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("file_path", &self.file_path)
            .field("cursor", &self.cursor)
            .field("line_count", &self.buffer.line_count())
            .field("highlighting", &self.rules.is_some())
            .finish_non_exhaustive()
    }
}

impl Model {
    /// Create a session for the given terminal size.
    pub fn new(terminal_size: (u16, u16)) -> Self {
        Self {
            viewport: Viewport::new(text_rows(terminal_size.1)),
            ..Self::default()
        }
    }

    // --- Status messages ---

    /// Show a transient status message.
    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            ticks: STATUS_TICKS,
        });
    }

    /// The current status message, if one is still showing.
    pub fn status_text(&self) -> Option<&str> {
        self.status.as_ref().map(|status| status.text.as_str())
    }

    /// Count down the status message by one redraw cycle.
    pub fn tick_status(&mut self) {
        if let Some(status) = &mut self.status {
            status.ticks = status.ticks.saturating_sub(1);
            if status.ticks == 0 {
                self.status = None;
            }
        }
    }

    // --- Document lifecycle ---

    /// Load `path` into the session, replacing the buffer. A missing file
    /// becomes a fresh document rather than an error.
    pub fn open(&mut self, path: &Path) {
        match fileio::open_document(path) {
            Ok((buffer, status)) => {
                self.buffer = buffer;
                self.cursor = Cursor::new();
                self.viewport.scroll_to_cursor(0);
                self.file_path = Some(path.to_path_buf());
                match status {
                    OpenStatus::Opened => {
                        self.set_status(format!("Opened file: {}", path.display()));
                    }
                    OpenStatus::NewFile => {
                        self.set_status(format!("New file: {}", path.display()));
                    }
                }
            }
            Err(err) => {
                tracing::warn!("open failed: {err:#}");
                self.set_status(format!("Error: Could not open file '{}'.", path.display()));
            }
        }
    }

    /// Save the buffer to its path. Failures surface as a status message
    /// only; the buffer is untouched.
    pub fn save(&mut self) {
        let Some(path) = self.file_path.clone() else {
            self.set_status("No filename specified.");
            return;
        };
        match fileio::save_document(&self.buffer, &path) {
            Ok(()) => self.set_status("File saved successfully!"),
            Err(err) => {
                tracing::warn!("save failed: {err:#}");
                self.set_status("Error: Could not save file!");
            }
        }
    }

    /// Load a highlight rule set, enabling highlighting on success. On
    /// failure the previous highlighting state is left unchanged.
    pub fn load_rules(&mut self, path: &Path) {
        self.config_path = Some(path.to_path_buf());
        match config::load_rule_set(path) {
            Ok(rules) => {
                self.rules = Some(rules);
                self.set_status(format!(
                    "Config file '{}' loaded successfully.",
                    path.display()
                ));
            }
            Err(err) => {
                tracing::warn!("config load failed: {err:#}");
                self.set_status(format!(
                    "Error: Could not open config file '{}'.",
                    path.display()
                ));
            }
        }
    }

    // --- Edits ---
    //
    // The cursor is clamped before each buffer call, so the addressing
    // errors below cannot fire from the event loop; they are logged and
    // swallowed rather than surfaced.

    /// Insert a character at the cursor and advance it.
    pub fn insert_char(&mut self, ch: char) {
        self.cursor.clamp(&self.buffer);
        let Cursor { row, col } = self.cursor;
        if let Err(err) = self.buffer.insert_char(row, col, ch) {
            tracing::warn!("insert_char: {err}");
            return;
        }
        self.cursor.col += 1;
        self.follow_cursor();
    }

    /// Split the current line at the cursor (Enter).
    pub fn insert_newline(&mut self) {
        self.cursor.clamp(&self.buffer);
        let Cursor { row, col } = self.cursor;
        if let Err(err) = self.buffer.split_line(row, col) {
            tracing::warn!("insert_newline: {err}");
            return;
        }
        self.cursor = Cursor::at(row + 1, 0);
        self.follow_cursor();
    }

    /// Insert spaces up to the next tab stop (Tab).
    pub fn insert_tab(&mut self) {
        self.cursor.clamp(&self.buffer);
        let spaces = TAB_STOP - (self.cursor.col % TAB_STOP);
        for _ in 0..spaces {
            self.insert_char(' ');
        }
    }

    /// Delete left of the cursor, merging with the previous line at
    /// column 0 (Backspace).
    pub fn backspace(&mut self) {
        self.cursor.clamp(&self.buffer);
        let Cursor { row, col } = self.cursor;
        if col > 0 {
            match self.buffer.delete_char(row, col - 1) {
                Ok(_) => self.cursor.col = col - 1,
                Err(err) => tracing::warn!("backspace: {err}"),
            }
        } else {
            match self.buffer.merge_with_previous(row) {
                Ok(Some(join_col)) => {
                    self.cursor = Cursor::at(row - 1, join_col);
                }
                Ok(None) => {} // first line, nothing to merge
                Err(err) => tracing::warn!("backspace merge: {err}"),
            }
        }
        self.follow_cursor();
    }

    /// Move the cursor one unit.
    pub fn move_cursor(&mut self, direction: Direction) {
        self.cursor.step(direction, &self.buffer);
        self.follow_cursor();
    }

    /// Re-derive the viewport height from a new terminal size.
    pub fn resize(&mut self, terminal_size: (u16, u16)) {
        self.viewport.resize(text_rows(terminal_size.1), self.cursor.row);
    }

    fn follow_cursor(&mut self) {
        self.viewport.scroll_to_cursor(self.cursor.row);
    }
}

/// Document rows available on screen: everything above the status bar.
const fn text_rows(terminal_height: u16) -> usize {
    terminal_height.saturating_sub(1) as usize
}

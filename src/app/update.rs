use crate::app::Model;
use crate::app::cursor::Direction;

/// All possible events and actions in the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Insert a printable character at the cursor
    InsertChar(char),
    /// Split the current line at the cursor (Enter)
    InsertNewline,
    /// Insert spaces to the next tab stop (Tab)
    InsertTab,
    /// Delete left of the cursor, merging lines at column 0 (Backspace)
    DeleteBack,
    /// Move the cursor one unit
    MoveCursor(Direction),
    /// Save the buffer to its file (side-effected by the event loop)
    Save,
    /// Terminal resized
    Resize(u16, u16),
    /// Quit the application
    Quit,
}

/// Pure function that updates the model based on a message.
///
/// This is the core of TEA - all state transitions happen here. The one
/// exception is [`Message::Save`], whose file write runs in the event loop
/// so this function stays free of side effects.
pub fn update(mut model: Model, msg: Message) -> Model {
    match msg {
        Message::InsertChar(ch) => model.insert_char(ch),
        Message::InsertNewline => model.insert_newline(),
        Message::InsertTab => model.insert_tab(),
        Message::DeleteBack => model.backspace(),
        Message::MoveCursor(direction) => model.move_cursor(direction),
        Message::Resize(width, height) => model.resize((width, height)),
        Message::Quit => model.should_quit = true,
        Message::Save => {}
    }
    model
}

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::cursor::Direction;
use crate::app::{App, Message};

impl App {
    /// Map a terminal event to a message, or `None` for events the editor
    /// ignores.
    pub(super) fn handle_event(event: &Event) -> Option<Message> {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => Self::handle_key(key),
            Event::Resize(width, height) => Some(Message::Resize(*width, *height)),
            _ => None,
        }
    }

    fn handle_key(key: &KeyEvent) -> Option<Message> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('q') => Some(Message::Quit),
                KeyCode::Char('s') => Some(Message::Save),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Up => Some(Message::MoveCursor(Direction::Up)),
            KeyCode::Down => Some(Message::MoveCursor(Direction::Down)),
            KeyCode::Left => Some(Message::MoveCursor(Direction::Left)),
            KeyCode::Right => Some(Message::MoveCursor(Direction::Right)),
            KeyCode::Enter => Some(Message::InsertNewline),
            KeyCode::Tab => Some(Message::InsertTab),
            KeyCode::Backspace => Some(Message::DeleteBack),
            KeyCode::Char(ch) => Some(Message::InsertChar(ch)),
            _ => None,
        }
    }
}

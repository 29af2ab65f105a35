use crate::component::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// What the loop should do with an input event
#[derive(Debug, PartialEq)]
pub enum Input {
    Dispatch(Action),
    Click { row: u16, column: u16 },
    Redraw,
    Quit,
    Ignore,
}

pub struct KeyHandler;

impl KeyHandler {
    pub fn handle_key(key_event: KeyEvent) -> Input {
        // Windows reports releases too; act on presses only
        if key_event.kind == KeyEventKind::Release {
            return Input::Ignore;
        }

        match (key_event.code, key_event.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Input::Quit,
            (KeyCode::Char('l'), KeyModifiers::CONTROL) => Input::Redraw,
            (KeyCode::Char('q'), _) | (KeyCode::Esc, _) => Input::Quit,
            (KeyCode::Char('+'), _) | (KeyCode::Char(' '), _) | (KeyCode::Enter, _) => {
                Input::Dispatch(Action::Increment)
            }
            _ => Input::Ignore,
        }
    }

    pub fn handle_mouse(mouse_event: MouseEvent) -> Input {
        match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => Input::Click {
                row: mouse_event.row,
                column: mouse_event.column,
            },
            _ => Input::Ignore,
        }
    }
}

use crate::ui::app::{PromptState, SelectApp};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Applies one key press and returns the resulting prompt state.
pub fn handle_key_event(app: &mut SelectApp, key: KeyEvent) -> PromptState {
    if key.kind != KeyEventKind::Press || app.state != PromptState::Prompting {
        return app.state;
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL)
        | (KeyCode::Char('d'), KeyModifiers::CONTROL)
        | (KeyCode::Esc, _)
        | (KeyCode::Char('q'), _) => {
            app.abort();
        }
        (KeyCode::Enter, _) => {
            app.confirm();
        }
        (KeyCode::Up, _) | (KeyCode::Char('k'), _) => {
            app.select_previous();
        }
        (KeyCode::Down, _) | (KeyCode::Char('j'), _) => {
            app.select_next();
        }
        (KeyCode::Home, _) => {
            app.select_first();
        }
        (KeyCode::End, _) => {
            app.select_last();
        }
        _ => {}
    }
    app.state
}

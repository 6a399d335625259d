use crate::ui::app::{App, Focus};
use crate::ui::form::FormIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    // The confirmation popup is modal.
    if app.removal().is_confirming() {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => app.confirm_removal(),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.decline_removal(),
            _ => {}
        }
        return;
    }

    if is_ctrl_char(key, 'r') {
        app.request_refresh();
        return;
    }

    match key.code {
        KeyCode::F(2) => return app.switch_screen(),
        KeyCode::Tab => return app.focus_next(),
        KeyCode::BackTab => return app.focus_prev(),
        _ => {}
    }

    match app.focus() {
        Focus::Form(kind) => {
            let intent = match key.code {
                KeyCode::Up => FormIntent::FocusPrev,
                KeyCode::Down => FormIntent::FocusNext,
                KeyCode::Left => FormIntent::Cycle { forward: false },
                KeyCode::Right => FormIntent::Cycle { forward: true },
                KeyCode::Backspace => FormIntent::Backspace,
                KeyCode::Enter => return app.submit_form(kind),
                KeyCode::Char(ch) if !has_command_modifier(key) => FormIntent::Edit(ch),
                _ => return,
            };
            app.dispatch_form(kind, intent);
        }
        Focus::BusList => match key.code {
            KeyCode::Up => app.move_selection(-1),
            KeyCode::Down => app.move_selection(1),
            KeyCode::Char('r') => app.request_refresh(),
            KeyCode::Char('d') | KeyCode::Delete => app.request_removal(),
            _ => {}
        },
    }
}

fn has_command_modifier(key: KeyEvent) -> bool {
    key.modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::{Filter, Section};
use crate::tui::app::{Action, App, Mode};

/// Keys in navigate mode
pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    // Section, theme and quit keys work everywhere
    match (key.modifiers, key.code) {
        (_, KeyCode::Char('q')) => return app.dispatch(Action::Quit),
        (_, KeyCode::Char('t')) => return app.dispatch(Action::ToggleTheme),
        (_, KeyCode::Char('h')) => return app.dispatch(Action::ShowSection(Section::Home)),
        (_, KeyCode::Char('?')) => return app.dispatch(Action::ShowSection(Section::About)),
        (KeyModifiers::NONE, KeyCode::Tab) | (_, KeyCode::BackTab) => {
            let next = app.section.other();
            return app.dispatch(Action::ShowSection(next));
        }
        (_, KeyCode::Esc) if app.section == Section::About => {
            return app.dispatch(Action::ShowSection(Section::Home));
        }
        _ => {}
    }

    // Everything else acts on the list, which only the home section shows
    if app.section != Section::Home {
        return;
    }

    match key.code {
        KeyCode::Char('n') | KeyCode::Char('i') | KeyCode::Char('a') => {
            app.mode = Mode::Input;
            app.input_cursor = app.input.len();
        }
        KeyCode::Char('j') | KeyCode::Down => move_cursor(app, 1),
        KeyCode::Char('k') | KeyCode::Up => move_cursor(app, -1),
        KeyCode::Char('g') | KeyCode::Home => app.cursor = 0,
        KeyCode::Char('G') | KeyCode::End => {
            app.cursor = app.session.filtered().len().saturating_sub(1);
        }
        KeyCode::Char(' ') | KeyCode::Char('x') | KeyCode::Enter => {
            if let Some(id) = app.selected_id() {
                app.dispatch(Action::Toggle(id));
            }
        }
        KeyCode::Char('d') | KeyCode::Delete | KeyCode::Backspace => {
            if let Some(id) = app.selected_id() {
                app.dispatch(Action::Delete(id));
            }
        }
        KeyCode::Char('c') => app.dispatch(Action::ClearCompleted),
        KeyCode::Char('1') => app.dispatch(Action::SetFilter(Filter::All)),
        KeyCode::Char('2') => app.dispatch(Action::SetFilter(Filter::Active)),
        KeyCode::Char('3') => app.dispatch(Action::SetFilter(Filter::Completed)),
        KeyCode::Char('f') => {
            let next = app.session.filter().next();
            app.dispatch(Action::SetFilter(next));
        }
        _ => {}
    }
}

fn move_cursor(app: &mut App, delta: isize) {
    let len = app.session.filtered().len();
    if len == 0 {
        return;
    }
    app.cursor = app.cursor.saturating_add_signed(delta).min(len - 1);
}

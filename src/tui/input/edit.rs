use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{Action, App, Mode};
use crate::util::unicode::{next_grapheme_boundary, prev_grapheme_boundary};

/// Keys while the add-task input has focus
pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Submit and clear; blank input adds nothing
        (_, KeyCode::Enter) => {
            let text = app.input.clone();
            app.dispatch(Action::Add(text));
            app.reset_input();
        }
        // Leave input mode, keeping the draft
        (_, KeyCode::Esc) => {
            app.mode = Mode::Navigate;
        }
        (_, KeyCode::Left) => {
            if let Some(pos) = prev_grapheme_boundary(&app.input, app.input_cursor) {
                app.input_cursor = pos;
            }
        }
        (_, KeyCode::Right) => {
            if let Some(pos) = next_grapheme_boundary(&app.input, app.input_cursor) {
                app.input_cursor = pos;
            }
        }
        (_, KeyCode::Home) => app.input_cursor = 0,
        (_, KeyCode::End) => app.input_cursor = app.input.len(),
        (m, KeyCode::Char('a')) if m.contains(KeyModifiers::CONTROL) => app.input_cursor = 0,
        (m, KeyCode::Char('e')) if m.contains(KeyModifiers::CONTROL) => {
            app.input_cursor = app.input.len()
        }
        // Ctrl-U clears the whole line
        (m, KeyCode::Char('u')) if m.contains(KeyModifiers::CONTROL) => app.reset_input(),
        (_, KeyCode::Backspace) => {
            if let Some(pos) = prev_grapheme_boundary(&app.input, app.input_cursor) {
                app.input.replace_range(pos..app.input_cursor, "");
                app.input_cursor = pos;
            }
        }
        (_, KeyCode::Delete) => {
            if let Some(end) = next_grapheme_boundary(&app.input, app.input_cursor) {
                app.input.replace_range(app.input_cursor..end, "");
            }
        }
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            insert_char(app, c);
        }
        _ => {}
    }
}

/// Insert at the cursor. Tabs become spaces so the task stays one line.
fn insert_char(app: &mut App, c: char) {
    let c = if c == '\t' { ' ' } else { c };
    if c.is_control() {
        return;
    }
    app.input.insert(app.input_cursor, c);
    app.input_cursor += c.len_utf8();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::storage::MemoryStorage;
    use crate::model::UiConfig;
    use crate::ops::session::Session;
    use crate::tui::input::handle_key;
    use crate::tui::input::test_keys::*;

    fn typing_app() -> App {
        let mut app = App::new(Session::open(Box::new(MemoryStorage::new())), UiConfig::default());
        app.mode = Mode::Input;
        app
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            handle_key(app, ch(c));
        }
    }

    #[test]
    fn enter_adds_trimmed_and_clears_input() {
        let mut app = typing_app();
        type_str(&mut app, "  buy milk  ");
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.session.store().len(), 1);
        assert_eq!(app.session.store().todos()[0].text, "buy milk");
        assert_eq!(app.input, "");
        assert_eq!(app.input_cursor, 0);
        // Stays in input mode for the next task
        assert_eq!(app.mode, Mode::Input);
    }

    #[test]
    fn enter_on_blank_adds_nothing() {
        let mut app = typing_app();
        type_str(&mut app, "   ");
        handle_key(&mut app, key(KeyCode::Enter));
        assert!(app.session.store().is_empty());
    }

    #[test]
    fn esc_keeps_draft() {
        let mut app = typing_app();
        type_str(&mut app, "draft");
        handle_key(&mut app, key(KeyCode::Esc));
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.input, "draft");
        assert!(app.session.store().is_empty());
    }

    #[test]
    fn cursor_editing() {
        let mut app = typing_app();
        type_str(&mut app, "helo");
        handle_key(&mut app, key(KeyCode::Left));
        type_str(&mut app, "l");
        assert_eq!(app.input, "hello");
        handle_key(&mut app, key(KeyCode::Home));
        handle_key(&mut app, key(KeyCode::Delete));
        assert_eq!(app.input, "ello");
        handle_key(&mut app, key(KeyCode::End));
        handle_key(&mut app, key(KeyCode::Backspace));
        assert_eq!(app.input, "ell");
        handle_key(&mut app, ctrl('u'));
        assert_eq!(app.input, "");
    }

    #[test]
    fn backspace_removes_whole_grapheme() {
        let mut app = typing_app();
        type_str(&mut app, "cafe\u{0301}");
        handle_key(&mut app, key(KeyCode::Backspace));
        assert_eq!(app.input, "caf");
    }

    #[test]
    fn letters_do_not_trigger_shortcuts_while_typing() {
        let mut app = typing_app();
        type_str(&mut app, "tq");
        assert_eq!(app.input, "tq");
        assert!(!app.should_quit);
        assert_eq!(app.session.theme(), crate::model::ThemeMode::Dark);
    }
}

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::tui::app::App;

const KEY_BINDINGS: &[(&str, &str)] = &[
    ("n", "add a task"),
    ("j / k", "move the cursor"),
    ("space", "mark done / not done"),
    ("d", "delete the task"),
    ("c", "clear completed tasks"),
    ("1 2 3, f", "show all / active / completed"),
    ("h, ?, tab", "home / about"),
    ("t", "switch between dark and light"),
    ("q", "quit"),
];

/// Render the static about section
pub fn render_about_view(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let heading = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let body = Style::default().fg(app.theme.text).bg(bg);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(" About tally", heading)),
        Line::from(""),
        Line::from(Span::styled(
            " A small task list that lives on your machine. Tasks and your theme \
             choice are saved locally after every change; nothing leaves this computer.",
            body,
        )),
        Line::from(""),
        Line::from(Span::styled(" Keys", heading)),
    ];

    for (keys, what) in KEY_BINDINGS {
        lines.push(Line::from(vec![
            Span::styled(
                format!("   {:<10}", keys),
                Style::default().fg(app.theme.text_bright).bg(bg),
            ),
            Span::styled(*what, body),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn about_lists_keys() {
        let app = empty_app();
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_about_view(frame, &app, area)
        });
        assert!(output.contains(ABOUT_MARKER));
        assert!(output.contains("   t         switch between dark and light"));
        assert!(output.contains("clear completed tasks"));
    }
}

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Filter;
use crate::tui::app::{App, Mode};
use crate::tui::view_model::{ListView, RowView};
use crate::util::unicode::{
    byte_offset_to_display_col, display_col_to_byte_offset, display_width, truncate_to_width,
};

const INPUT_PREFIX: &str = " + ";
const INPUT_PLACEHOLDER: &str = "What needs to be done? (n)";
/// Cursor marker, checkbox and spacing before the task text
const ROW_PREFIX_WIDTH: usize = 7;
/// Delete affordance at the end of each row
const DELETE_MARK: &str = " \u{00D7} ";

/// Render the home section: input, filter bar, task list, footer
pub fn render_home_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // input
            Constraint::Length(1), // filter bar
            Constraint::Min(1),    // list
            Constraint::Length(1), // footer
        ])
        .split(area);

    let view = app.list_view();
    render_input(frame, app, chunks[0]);
    render_filter_bar(frame, app, view.filter, chunks[1]);
    render_list(frame, app, &view, chunks[2]);
    render_footer(frame, app, &view, chunks[3]);
}

fn render_input(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.surface;
    let editing = app.mode == Mode::Input;
    let prefix_width = display_width(INPUT_PREFIX);
    let text_width = (area.width as usize).saturating_sub(prefix_width);

    // Scroll the draft left until the cursor cell fits on the row
    let cursor_col = byte_offset_to_display_col(&app.input, app.input_cursor);
    let start = if editing && cursor_col >= text_width {
        display_col_to_byte_offset(&app.input, cursor_col + 1 - text_width)
    } else {
        0
    };
    let visible = &app.input[start..];

    let mut spans = vec![Span::styled(
        INPUT_PREFIX,
        Style::default().fg(app.theme.highlight).bg(bg),
    )];
    if app.input.is_empty() && !editing {
        spans.push(Span::styled(
            truncate_to_width(INPUT_PLACEHOLDER, text_width),
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    } else {
        // While typing, clip plainly so an ellipsis never covers the cursor
        let shown = if editing {
            visible[..display_col_to_byte_offset(visible, text_width)].to_string()
        } else {
            truncate_to_width(visible, text_width)
        };
        spans.push(Span::styled(
            shown,
            Style::default().fg(app.theme.text_bright).bg(bg),
        ));
    }
    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);

    if editing {
        let scrolled = byte_offset_to_display_col(&app.input, start);
        let col = prefix_width + cursor_col.saturating_sub(scrolled);
        let col = col.min((area.width as usize).saturating_sub(1));
        frame.set_cursor_position((area.x + col as u16, area.y));
    }
}

fn render_filter_bar(frame: &mut Frame, app: &App, current: Filter, area: Rect) {
    let bg = app.theme.background;
    let mut spans: Vec<Span> = vec![Span::styled(" ", Style::default().bg(bg))];
    for (i, filter) in Filter::ALL.iter().enumerate() {
        let style = if *filter == current {
            Style::default()
                .fg(app.theme.text_bright)
                .bg(app.theme.selection_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.dim).bg(bg)
        };
        spans.push(Span::styled(format!(" {} {} ", i + 1, filter.label()), style));
        spans.push(Span::styled(" ", Style::default().bg(bg)));
    }
    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn render_list(frame: &mut Frame, app: &mut App, view: &ListView, area: Rect) {
    let bg = app.theme.background;

    if let Some(message) = &view.empty_message {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                message.clone(),
                Style::default().fg(app.theme.dim).bg(bg),
            )),
        ];
        let empty = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::default().bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    let visible_height = area.height as usize;
    adjust_scroll(app, visible_height);

    let width = area.width as usize;
    let lines: Vec<Line> = view
        .rows
        .iter()
        .enumerate()
        .skip(app.scroll_offset)
        .take(visible_height)
        .map(|(i, row)| row_line(app, row, i == app.cursor, width))
        .collect();

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// Keep the cursor row inside the visible window
fn adjust_scroll(app: &mut App, visible_height: usize) {
    if visible_height == 0 {
        return;
    }
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    } else if app.cursor >= app.scroll_offset + visible_height {
        app.scroll_offset = app.cursor + 1 - visible_height;
    }
}

fn row_line<'a>(app: &App, row: &RowView, is_cursor: bool, width: usize) -> Line<'a> {
    let bg = if is_cursor {
        app.theme.selection_bg
    } else {
        app.theme.background
    };
    let base = Style::default().bg(bg);

    let (checkbox, box_style) = if row.completed {
        ("[x]", base.fg(app.theme.done))
    } else {
        ("[ ]", base.fg(app.theme.text))
    };
    let text_style = if row.completed {
        base.fg(app.theme.dim).add_modifier(Modifier::CROSSED_OUT)
    } else if is_cursor {
        base.fg(app.theme.text_bright).add_modifier(Modifier::BOLD)
    } else {
        base.fg(app.theme.text_bright)
    };

    let marker = if is_cursor { " \u{25B8} " } else { "   " };
    let text_budget = width.saturating_sub(ROW_PREFIX_WIDTH + display_width(DELETE_MARK));
    let text = truncate_to_width(&row.text, text_budget);
    let pad = text_budget.saturating_sub(display_width(&text));

    Line::from(vec![
        Span::styled(marker, base.fg(app.theme.highlight)),
        Span::styled(checkbox, box_style),
        Span::styled(" ", base),
        Span::styled(text, text_style),
        Span::styled(" ".repeat(pad), base),
        Span::styled(DELETE_MARK, base.fg(app.theme.red)),
    ])
}

fn render_footer(frame: &mut Frame, app: &App, view: &ListView, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let left = format!(" {}", view.remaining_label);
    let mut spans = vec![Span::styled(left.clone(), Style::default().fg(app.theme.text).bg(bg))];

    if view.completed_count > 0 {
        let right = format!("c clear completed ({}) ", view.completed_count);
        let used = display_width(&left) + display_width(&right);
        if used < width {
            spans.push(Span::styled(" ".repeat(width - used), Style::default().bg(bg)));
            spans.push(Span::styled(right, Style::default().fg(app.theme.dim).bg(bg)));
        }
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

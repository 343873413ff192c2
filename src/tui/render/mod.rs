pub mod about_view;
pub mod home_view;
pub mod nav_bar;
pub mod status_row;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::App;
use crate::model::Section;

/// Draw one frame: nav bar, the visible section, status row
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: nav bar (2 rows) | content | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // nav bar + separator
            Constraint::Min(1),    // content area
            Constraint::Length(1), // status row
        ])
        .split(area);

    nav_bar::render_nav_bar(frame, app, chunks[0]);

    match app.section {
        Section::Home => home_view::render_home_view(frame, app, chunks[1]),
        Section::About => about_view::render_about_view(frame, app, chunks[1]),
    }

    status_row::render_status_row(frame, app, chunks[2]);
}

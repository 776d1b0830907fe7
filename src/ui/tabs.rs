// Diagram focus bar.
// Shows the widgets mounted on the current page and which one receives keys.

use ratatui::{prelude::*, widgets::*};

use crate::app::App;

/// Draw the focus tabs for the mounted diagrams.
pub fn draw_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = app
        .diagrams
        .iter()
        .enumerate()
        .map(|(i, diagram)| {
            let style = if i == app.focus {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(Span::styled(diagram.kind().tab_label(), style))
        })
        .collect();

    let tabs_widget = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Diagrams ")
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .select(app.focus)
        .highlight_style(Style::default().fg(Color::Yellow))
        .divider(Span::raw(" │ "));

    frame.render_widget(tabs_widget, area);
}

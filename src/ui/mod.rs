// UI module for rendering the TUI.
// Contains the catalog, paper pages, the slide deck modal and the help overlay.

mod breadcrumb;
pub mod canvas;
mod list;
pub mod modal;
mod page;
mod tabs;

use ratatui::{prelude::*, widgets::*};

use crate::app::App;
use crate::state::{Emphasis, Page};

/// Main draw function that renders the entire UI.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Breadcrumb
            Constraint::Min(1),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    let paper = app.current_paper();
    let accent = paper.map_or(Color::Cyan, |p| canvas::tone_color(p.theme.tone(), Emphasis::Normal));
    let date = paper.map(|p| p.date_label());
    breadcrumb::draw_breadcrumb(
        frame,
        &app.nav.breadcrumbs(),
        chunks[0],
        accent,
        date.as_deref(),
    );

    draw_content(frame, app, chunks[1]);
    draw_status_bar(frame, app, chunks[2]);

    if let Some(view) = app.deck.as_ref().and_then(|d| d.view()) {
        modal::draw_deck_modal(frame, &view, &mut app.hit_map);
    }

    // Help overlay (rendered last, on top of everything)
    if app.show_help {
        draw_help_overlay(frame);
    }
}

/// Draw the main content area for the current page.
fn draw_content(frame: &mut Frame, app: &mut App, area: Rect) {
    match app.nav.current() {
        Page::Catalog => {
            let header = Paragraph::new(vec![
                Line::styled(
                    "RESEARCH VISUALIZER",
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Line::styled(
                    "Interactive explorations of breakthrough papers in AI and Quantum Computing.",
                    Style::default().fg(Color::DarkGray),
                ),
            ]);
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(3), Constraint::Min(1)])
                .split(area);
            frame.render_widget(header, rows[0]);
            list::render_catalog_list(
                frame,
                &app.catalog,
                &mut app.catalog_state,
                rows[1],
                &mut app.hit_map,
            );
        }
        Page::Paper { .. } => match app.current_paper() {
            Some(paper) => {
                let buttons = page::draw_paper(frame, app, paper, area);
                app.hit_map.diagram_buttons = buttons;
            }
            None => list::render_empty(frame, area, "Paper not found"),
        },
    }
}

fn hint(key: &str, label: &str) -> [Span<'static>; 2] {
    [
        Span::raw(format!("  {} ", key)),
        Span::styled(label.to_string(), Style::default().fg(Color::DarkGray)),
    ]
}

/// Draw the status bar with keybinding hints and the latest notice.
fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = Vec::new();

    if app.deck_is_open() {
        spans.extend(hint("←→", "Slide"));
        spans.extend(hint("1-9", "Jump"));
        spans.extend(hint("Esc", "Close"));
    } else {
        match app.nav.current() {
            Page::Catalog => {
                spans.extend(hint("↑↓", "Navigate"));
                spans.extend(hint("↵", "Open"));
            }
            Page::Paper { .. } => {
                spans.extend(hint("↑↓", "Scroll"));
                spans.extend(hint("Tab", "Diagram"));
                if let Some(diagram) = app.focused_diagram() {
                    for (key, label) in diagram.hints() {
                        spans.extend(hint(key, label));
                    }
                }
                if app.deck.is_some() {
                    spans.extend(hint("s", "Slides"));
                }
                spans.extend(hint("Esc", "Back"));
            }
        }
        spans.extend(hint("?", "Help"));
    }
    spans.extend(hint("q", "Quit"));

    if let Some(status) = &app.status {
        spans.push(Span::styled(
            format!("  {}", status),
            Style::default().fg(Color::Yellow),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Draw the help overlay.
fn draw_help_overlay(frame: &mut Frame) {
    let popup_area = modal::centered_rect(60, 70, frame.area());

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let key_line = |key: &'static str, text: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {:<14}", key), Style::default().fg(Color::Cyan)),
            Span::raw(text),
        ])
    };

    let help_text = vec![
        Line::from(vec![Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        key_line("↑/↓ or j/k", "Select paper / scroll article"),
        key_line("Enter", "Open paper / diagram action"),
        key_line("Tab/Shift-Tab", "Focus next / previous diagram"),
        key_line("1-9", "Diagram selectors and qubit toggles"),
        key_line("s", "Open explainer slides"),
        key_line("←/→", "Previous / next slide"),
        key_line("Esc", "Close slides / go back"),
        key_line("?", "Show/hide this help"),
        key_line("q", "Quit"),
        Line::from(""),
        Line::from(vec![
            Span::styled("Click", Style::default().fg(Color::Yellow)),
            Span::styled(
                " a slide title to jump, outside the deck to close",
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::DarkGray)),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::styled(" or ", Style::default().fg(Color::DarkGray)),
            Span::styled("?", Style::default().fg(Color::Yellow)),
            Span::styled(" to close", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    let help_paragraph = Paragraph::new(help_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Help ")
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::config::Settings;
    use crate::content::Catalog;

    fn screen(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_catalog_screen() {
        let mut app = App::new(Catalog::builtin().unwrap(), Settings::default());
        let text = screen(&mut app);
        assert!(text.contains("Papers"));
        assert!(text.contains("AlphaQubit"));
        assert_eq!(app.hit_map.catalog_rows.len(), 5);
    }

    #[tokio::test]
    async fn test_deck_screen_records_modal() {
        let mut app = App::new(Catalog::builtin().unwrap(), Settings::default());
        app.open_paper("zep").unwrap();
        app.open_slides();

        let text = screen(&mut app);
        assert!(text.contains("Slide 1 of 6"));
        assert!(app.hit_map.modal.is_some());
        assert_eq!(app.hit_map.index_rows.len(), 6);
    }
}

// Paper page rendering.
// Hero header with optional network backdrop, scrollable article and the focused diagram.

use ratatui::{prelude::*, widgets::*};

use crate::app::App;
use crate::content::Paper;
use crate::diagrams::{Button, Control};
use crate::state::visual::Emphasis;
use crate::ui::canvas::{self, tone_color};
use crate::ui::tabs;

/// Article text as styled lines: kicker, heading, then paragraphs.
pub fn article_lines(paper: &Paper, accent: Color) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for section in &paper.sections {
        lines.push(Line::styled(
            section.kicker.to_uppercase(),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ));
        lines.push(Line::styled(
            section.heading,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ));
        lines.push(Line::raw(""));
        for paragraph in &section.paragraphs {
            lines.push(Line::styled(*paragraph, Style::default().fg(Color::Gray)));
            lines.push(Line::raw(""));
        }
    }
    lines
}

fn draw_hero(frame: &mut Frame, app: &App, paper: &Paper, area: Rect) {
    let accent = tone_color(paper.theme.tone(), Emphasis::Normal);

    if let Some(scene) = &app.backdrop {
        canvas::draw_backdrop(frame, &scene.visual(paper.theme.tone()), area);
    }

    let mut hero = vec![
        Line::styled(
            format!("{} • {} ↗", paper.url, paper.date_label()),
            Style::default().fg(Color::DarkGray),
        ),
        Line::raw(""),
        Line::styled(
            paper.headline.0,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            paper.headline.1,
            Style::default().fg(accent).add_modifier(Modifier::ITALIC),
        ),
        Line::raw(""),
        Line::styled(paper.tagline, Style::default().fg(Color::Gray)),
    ];
    if paper.has_slides() {
        hero.push(Line::styled(
            "Press s to view the explainer slides",
            Style::default().fg(Color::Yellow),
        ));
    }

    let paragraph = Paragraph::new(hero)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area.inner(Margin::new(4, 1)));
}

/// Draw the diagram buttons in one row and return their click targets.
fn draw_buttons(frame: &mut Frame, buttons: &[Button], accent: Color, area: Rect) -> Vec<(Rect, Control)> {
    let mut spans = Vec::new();
    let mut targets = Vec::new();
    let mut x = area.x;

    for button in buttons {
        let style = if button.active {
            Style::default()
                .fg(Color::Black)
                .bg(accent)
                .add_modifier(Modifier::BOLD)
        } else if button.control == Control::Action {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::Gray)
        };
        let span = Span::styled(format!("[{}]", button.label), style);
        let width = span.width() as u16;
        if x.saturating_add(width) > area.right() {
            break;
        }

        targets.push((Rect::new(x, area.y, width, 1), button.control));
        spans.push(span);
        spans.push(Span::raw(" "));
        x = x.saturating_add(width + 1);
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
    targets
}

/// Draw the page for the paper currently on top of the navigation stack.
/// Returns the click targets of the focused diagram's buttons.
pub fn draw_paper(frame: &mut Frame, app: &App, paper: &Paper, area: Rect) -> Vec<(Rect, Control)> {
    let accent = tone_color(paper.theme.tone(), Emphasis::Normal);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Min(5)])
        .split(area);
    draw_hero(frame, app, paper, rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(rows[1]);

    let article = Paragraph::new(article_lines(paper, accent))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(accent))
                .title(format!(" {} ", paper.title)),
        )
        .wrap(Wrap { trim: true })
        .scroll((app.scroll, 0));
    frame.render_widget(article, columns[0]);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Focus tabs
            Constraint::Length(2), // Description
            Constraint::Min(6),    // Visual
            Constraint::Length(1), // Buttons
        ])
        .split(columns[1]);

    tabs::draw_tabs(frame, app, side[0]);

    if let Some(diagram) = app.focused_diagram() {
        let kind = diagram.kind();
        let description = Paragraph::new(kind.description())
            .style(Style::default().fg(Color::DarkGray))
            .wrap(Wrap { trim: true });
        frame.render_widget(description, side[1]);
        canvas::draw_visual(frame, &diagram.visual(), kind.title(), side[2]);
        return draw_buttons(frame, &diagram.buttons(), accent, side[3]);
    }
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Catalog;

    #[test]
    fn test_button_targets_follow_labels() {
        use ratatui::backend::TestBackend;

        let buttons = vec![
            Button {
                label: "T1".to_string(),
                control: Control::Select(0),
                active: true,
            },
            Button {
                label: "Switch Timeline".to_string(),
                control: Control::Action,
                active: false,
            },
        ];
        let mut targets = Vec::new();
        let mut terminal = Terminal::new(TestBackend::new(40, 1)).unwrap();
        terminal
            .draw(|frame| targets = draw_buttons(frame, &buttons, Color::Blue, frame.area()))
            .unwrap();

        // "[T1] [Switch Timeline]"
        assert_eq!(
            targets,
            vec![
                (Rect::new(0, 0, 4, 1), Control::Select(0)),
                (Rect::new(5, 0, 17, 1), Control::Action),
            ]
        );
    }

    #[test]
    fn test_buttons_past_the_edge_are_dropped() {
        use ratatui::backend::TestBackend;

        let buttons: Vec<Button> = (0..5)
            .map(|i| Button {
                label: format!("Q{}", i + 1),
                control: Control::Select(i),
                active: false,
            })
            .collect();
        let mut targets = Vec::new();
        let mut terminal = Terminal::new(TestBackend::new(12, 1)).unwrap();
        terminal
            .draw(|frame| targets = draw_buttons(frame, &buttons, Color::Blue, frame.area()))
            .unwrap();

        assert_eq!(targets.len(), 2);
    }

    #[test]
    fn test_article_lines_cover_every_section() {
        let catalog = Catalog::builtin().unwrap();
        let paper = catalog.find("zep").unwrap();
        let lines = article_lines(paper, Color::Blue);

        let text: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
        assert!(text.contains(&"THE PROBLEM".to_string()));
        assert!(text.contains(&"The Graphiti Engine".to_string()));
        assert!(text.contains(&"Engineered for Speed".to_string()));
    }
}

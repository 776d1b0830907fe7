// Slide deck modal.
// Renders the open deck over the page: slide index sidebar, active slide and progress.

use ratatui::{prelude::*, widgets::*};

use crate::app::HitMap;
use crate::state::deck::{DeckView, VisualSlot};
use crate::state::visual::Emphasis;
use crate::ui::canvas::{self, tone_style};

/// `percent` of `length`, computed wide so large terminals cannot overflow.
fn scale(length: u16, percent: u16) -> u16 {
    let scaled = u32::from(length) * u32::from(percent.min(100)) / 100;
    // At most `length`, so it fits back into u16
    scaled as u16
}

/// Centered rectangle taking the given percentages of `area`.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let width = scale(area.width, percent_x);
    let height = scale(area.height, percent_y);
    Rect::new(
        area.x + (area.width.saturating_sub(width)) / 2,
        area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    )
}

/// Draw the deck modal on top of the current view and record its click targets.
pub fn draw_deck_modal(frame: &mut Frame, view: &DeckView, hit_map: &mut HitMap) {
    let modal_area = centered_rect(90, 85, frame.area());
    hit_map.modal = Some(modal_area);

    // Clear the area behind the modal
    frame.render_widget(Clear, modal_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(format!(" {} ", view.deck_title))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .title_bottom(Line::from(view.position_label()).right_aligned());
    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(30), Constraint::Min(20)])
        .split(inner);

    draw_index(frame, view, columns[0], hit_map);
    draw_slide(frame, view, columns[1]);
}

/// Sidebar listing every slide title with the active one highlighted.
fn draw_index(frame: &mut Frame, view: &DeckView, area: Rect, hit_map: &mut HitMap) {
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Slides ");
    let inner = block.inner(area);

    let items: Vec<ListItem> = view
        .index
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let style = if entry.active {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::Gray)
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:>2} ", i + 1), Style::default().fg(Color::DarkGray)),
                Span::styled(entry.title, style),
            ]))
        })
        .collect();

    let mut list_state = ListState::default();
    list_state.select(Some(view.current));

    let list_widget = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(list_widget, area, &mut list_state);

    let offset = list_state.offset();
    for row in 0..inner.height as usize {
        let index = offset + row;
        if index >= view.total {
            break;
        }
        let rect = Rect::new(inner.x, inner.y + row as u16, inner.width, 1);
        hit_map.index_rows.push((rect, index));
    }
}

/// Badge, title, body text, visual and the progress bar of the active slide.
fn draw_slide(frame: &mut Frame, view: &DeckView, area: Rect) {
    let area = area.inner(Margin::new(2, 1));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Badge
            Constraint::Length(2), // Title
            Constraint::Min(4),    // Body and visual
            Constraint::Length(1), // Progress
            Constraint::Length(1), // Key hints
        ])
        .split(area);

    let badge_style = tone_style(view.badge_theme.tone(), Emphasis::Normal)
        .add_modifier(Modifier::BOLD);
    let mut badge = Vec::new();
    if let Some(marker) = view.badge_theme.marker() {
        badge.push(Span::styled(format!("{} ", marker), badge_style));
    }
    badge.push(Span::styled(view.badge_label.to_uppercase(), badge_style));
    frame.render_widget(Paragraph::new(Line::from(badge)), chunks[0]);

    let title = Paragraph::new(view.slide.title.as_str()).style(
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(title, chunks[1]);

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[2]);

    let body: Vec<Line> = view.body.iter().map(|line| Line::raw(*line)).collect();
    frame.render_widget(
        Paragraph::new(body)
            .style(Style::default().fg(Color::Gray))
            .wrap(Wrap { trim: false }),
        content[0],
    );

    match &view.visual {
        VisualSlot::Visual(visual) => canvas::draw_visual(frame, visual, "Visual", content[1]),
        VisualSlot::Placeholder(text) => {
            let placeholder = Paragraph::new(*text)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(Style::default().fg(Color::DarkGray)),
                );
            frame.render_widget(placeholder, content[1]);
        }
    }

    let gauge = LineGauge::default()
        .filled_style(Style::default().fg(Color::Cyan))
        .unfilled_style(Style::default().fg(Color::DarkGray))
        .label("")
        .ratio(view.progress);
    frame.render_widget(gauge, chunks[3]);

    let hints = Line::from(vec![
        Span::styled(" ←", Style::default().fg(Color::Yellow)),
        Span::styled(" Prev  ", Style::default().fg(Color::DarkGray)),
        Span::styled("→", Style::default().fg(Color::Yellow)),
        Span::styled(" Next  ", Style::default().fg(Color::DarkGray)),
        Span::styled("1-9", Style::default().fg(Color::Yellow)),
        Span::styled(" Jump  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::styled(" Close ", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(hints).alignment(Alignment::Center), chunks[4]);
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::content::{Slide, SlideDeck};
    use crate::state::{KeyListeners, SlideNavigator};

    fn navigator() -> SlideNavigator {
        let slides = SlideDeck::new(vec![
            Slide::new("1", "First", "Hello").subtitle("Intro"),
            Slide::new("2", "Second", "World"),
            Slide::new("3", "Third", "Done"),
        ])
        .unwrap();
        SlideNavigator::new("Deck", slides, KeyListeners::new(), || {})
    }

    #[test]
    fn test_centered_rect() {
        let rect = centered_rect(50, 50, Rect::new(0, 0, 100, 40));
        assert_eq!(rect, Rect::new(25, 10, 50, 20));
    }

    #[test]
    fn test_centered_rect_on_wide_terminal() {
        let area = Rect::new(0, 0, 800, 60);
        let rect = centered_rect(90, 85, area);
        assert_eq!((rect.x, rect.y, rect.width, rect.height), (40, 4, 720, 51));
    }

    #[test]
    fn test_modal_records_index_rows() {
        let mut nav = navigator();
        nav.open();
        nav.next();
        let view = nav.view().unwrap();
        let mut hit_map = HitMap::default();

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|frame| draw_deck_modal(frame, &view, &mut hit_map))
            .unwrap();

        assert_eq!(hit_map.index_rows.len(), 3);
        assert_eq!(hit_map.index_rows[1].1, 1);
        assert!(hit_map.modal.is_some());

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Slide 2 of 3"));
        assert!(text.contains("CONCEPT"));
        assert!(text.contains("Visual Representation"));
    }
}

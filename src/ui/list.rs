// Catalog list rendering.
// Paper cards with date badge, subtitle, summary and a slides marker.

use ratatui::{prelude::*, widgets::*};

use crate::app::HitMap;
use crate::content::{Catalog, Paper};
use crate::state::visual::Emphasis;
use crate::ui::canvas::tone_color;

/// Lines per paper card.
const CARD_HEIGHT: usize = 3;

/// Render an empty state message.
pub fn render_empty(frame: &mut Frame, area: Rect, message: &str) {
    let text = Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(text, area);
}

fn paper_card(paper: &Paper) -> ListItem<'_> {
    let accent = tone_color(paper.theme.tone(), Emphasis::Normal);

    let mut header = vec![
        Span::styled(
            format!(" {} ", paper.date_label()),
            Style::default().fg(Color::Black).bg(accent),
        ),
        Span::raw(" "),
        Span::styled(
            paper.title,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    if paper.has_slides() {
        header.push(Span::styled("  ▤ Slides", Style::default().fg(Color::DarkGray)));
    }

    ListItem::new(vec![
        Line::from(header),
        Line::from(Span::styled(
            format!("  {}", paper.subtitle),
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
        )),
        Line::from(Span::styled(
            format!("  {}", paper.summary),
            Style::default().fg(Color::DarkGray),
        )),
    ])
}

/// Render the paper catalog and record each card's click target.
pub fn render_catalog_list(
    frame: &mut Frame,
    catalog: &Catalog,
    list_state: &mut ListState,
    area: Rect,
    hit_map: &mut HitMap,
) {
    let block = Block::default().borders(Borders::ALL).title(" Select a Paper ");

    if catalog.is_empty() {
        let inner = block.inner(area);
        frame.render_widget(block, area);
        render_empty(frame, inner, "No papers available");
        return;
    }

    let inner = block.inner(area);
    let items: Vec<ListItem> = catalog.papers().iter().map(paper_card).collect();

    let list_widget = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(list_widget, area, list_state);

    let visible = inner.height as usize / CARD_HEIGHT;
    let offset = list_state.offset();
    for slot in 0..visible {
        let index = offset + slot;
        if index >= catalog.len() {
            break;
        }
        let rect = Rect::new(
            inner.x,
            inner.y + (slot * CARD_HEIGHT) as u16,
            inner.width,
            CARD_HEIGHT as u16,
        );
        hit_map.catalog_rows.push((rect, index));
    }
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;

    use super::*;

    #[test]
    fn test_catalog_rows_follow_cards() {
        let catalog = Catalog::builtin().unwrap();
        let mut state = ListState::default();
        state.select(Some(0));
        let mut hit_map = HitMap::default();

        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal
            .draw(|frame| {
                render_catalog_list(frame, &catalog, &mut state, frame.area(), &mut hit_map)
            })
            .unwrap();

        // 18 inner rows fit six cards; the catalog has five
        assert_eq!(hit_map.catalog_rows.len(), 5);
        assert_eq!(hit_map.catalog_rows[1].0, Rect::new(1, 4, 78, 3));
        assert_eq!(hit_map.catalog_rows[4].1, 4);
    }
}

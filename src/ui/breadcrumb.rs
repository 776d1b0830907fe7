// Breadcrumb rendering for navigation trail.
// Shows the path from the catalog to the open paper, with its publication month on the right.

use ratatui::{prelude::*, widgets::*};

use crate::state::navigation::BreadcrumbNode;

/// Spans for the trail; the last crumb takes the accent color.
fn trail(breadcrumbs: &[BreadcrumbNode], accent: Color) -> Line<'static> {
    let last = breadcrumbs.len().saturating_sub(1);
    let mut spans = Vec::with_capacity(breadcrumbs.len() * 2);

    for (i, node) in breadcrumbs.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" › ", Style::default().fg(Color::DarkGray)));
        }
        let style = if i == last {
            Style::default().fg(accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(node.label.clone(), style));
    }

    Line::from(spans)
}

/// Render the breadcrumb trail.
pub fn draw_breadcrumb(
    frame: &mut Frame,
    breadcrumbs: &[BreadcrumbNode],
    area: Rect,
    accent: Color,
    date: Option<&str>,
) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(Paragraph::new(trail(breadcrumbs, accent)).block(block), area);

    let Some(date) = date else {
        return;
    };
    let first_row = Rect { height: 1, ..area };
    frame.render_widget(
        Paragraph::new(Span::styled(date.to_string(), Style::default().fg(Color::DarkGray)))
            .alignment(Alignment::Right),
        first_row,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::navigation::Page;

    #[test]
    fn test_last_crumb_uses_accent() {
        let crumbs = vec![
            Page::Catalog.to_breadcrumb(),
            Page::Paper {
                id: "amem".to_string(),
                title: "A-MEM".to_string(),
            }
            .to_breadcrumb(),
        ];
        let line = trail(&crumbs, Color::Green);

        assert_eq!(line.to_string(), "Papers › A-MEM");
        assert_eq!(line.spans[2].style.fg, Some(Color::Green));
        assert_eq!(line.spans[0].style.fg, Some(Color::Gray));
    }
}

// Visual painter.
// Paints a declarative Visual onto a braille canvas using percent coordinates.

use ratatui::symbols::Marker;
use ratatui::widgets::canvas::{Canvas, Circle, Context, Line as CanvasLine, Points, Rectangle};
use ratatui::{prelude::*, widgets::*};

use crate::state::visual::{Emphasis, Mark, Shape, Tone, Visual};

/// Radius below which a dot is drawn as a filled point cluster.
const SOLID_DOT: f64 = 4.0;

/// Terminal color for a tone at a given emphasis.
pub fn tone_color(tone: Tone, emphasis: Emphasis) -> Color {
    if emphasis == Emphasis::Faint {
        return Color::DarkGray;
    }
    let strong = emphasis == Emphasis::Strong;
    match tone {
        Tone::Muted => Color::Gray,
        Tone::Ink => Color::White,
        Tone::Gold => Color::Yellow,
        Tone::Blue if strong => Color::LightBlue,
        Tone::Blue => Color::Blue,
        Tone::Red if strong => Color::LightRed,
        Tone::Red => Color::Red,
        Tone::Green if strong => Color::LightGreen,
        Tone::Green => Color::Green,
        Tone::Orange => Color::Rgb(255, 140, 0),
        Tone::Purple if strong => Color::LightMagenta,
        Tone::Purple => Color::Magenta,
        Tone::Emerald => Color::Rgb(16, 185, 129),
        Tone::Amber => Color::Rgb(245, 158, 11),
    }
}

/// Text style for a tone at a given emphasis.
pub fn tone_style(tone: Tone, emphasis: Emphasis) -> Style {
    let style = Style::default().fg(tone_color(tone, emphasis));
    match emphasis {
        Emphasis::Strong => style.add_modifier(Modifier::BOLD),
        Emphasis::Faint => style.add_modifier(Modifier::DIM),
        Emphasis::Normal => style,
    }
}

/// Percent y (down) to canvas y (up).
fn flip(y: f64) -> f64 {
    100.0 - y
}

/// Points along a clockwise arc starting at 12 o'clock, in canvas space.
pub fn arc_points(x: f64, y: f64, radius: f64, fraction: f64) -> Vec<(f64, f64)> {
    let steps = (fraction * 96.0).ceil() as usize;
    (0..=steps)
        .map(|i| {
            let theta = std::f64::consts::TAU * fraction * i as f64 / steps.max(1) as f64;
            (x + radius * theta.sin(), flip(y) + radius * theta.cos())
        })
        .collect()
}

/// Left edge of a label centered on `x`, kept inside the canvas.
pub fn label_left(x: f64, text: &str, char_width: f64) -> f64 {
    let width = text.chars().count() as f64 * char_width;
    (x - width / 2.0).clamp(0.0, (100.0 - width).max(0.0))
}

fn paint_mark(ctx: &mut Context, mark: &Mark) {
    let color = tone_color(mark.tone, mark.emphasis);
    match &mark.shape {
        Shape::Dot { x, y, radius } if *radius < SOLID_DOT => {
            let mut coords = vec![(*x, flip(*y))];
            let r = radius / 2.0;
            for (dx, dy) in [(r, 0.0), (-r, 0.0), (0.0, r), (0.0, -r)] {
                coords.push((x + dx, flip(*y) + dy));
            }
            ctx.draw(&Points {
                coords: &coords,
                color,
            });
        }
        Shape::Dot { x, y, radius } => {
            ctx.draw(&Circle {
                x: *x,
                y: flip(*y),
                radius: *radius,
                color,
            });
        }
        Shape::Square { x, y, size } => {
            ctx.draw(&Rectangle {
                x: x - size / 2.0,
                y: flip(*y) - size / 2.0,
                width: *size,
                height: *size,
                color,
            });
        }
        Shape::Bar { x, width, height } => {
            let mut offset = 0.0;
            while offset <= *width {
                ctx.draw(&CanvasLine {
                    x1: x + offset,
                    y1: 0.0,
                    x2: x + offset,
                    y2: *height,
                    color,
                });
                offset += 1.0;
            }
        }
        Shape::Track { y, start, length } => {
            for dy in [-1.0, 0.0, 1.0] {
                ctx.draw(&CanvasLine {
                    x1: *start,
                    y1: flip(*y) + dy,
                    x2: start + length,
                    y2: flip(*y) + dy,
                    color,
                });
            }
        }
        Shape::Line { x1, y1, x2, y2 } => {
            ctx.draw(&CanvasLine {
                x1: *x1,
                y1: flip(*y1),
                x2: *x2,
                y2: flip(*y2),
                color,
            });
        }
        Shape::Arc {
            x,
            y,
            radius,
            fraction,
        } => {
            let points = arc_points(*x, *y, *radius, *fraction);
            for pair in points.windows(2) {
                ctx.draw(&CanvasLine {
                    x1: pair[0].0,
                    y1: pair[0].1,
                    x2: pair[1].0,
                    y2: pair[1].1,
                    color,
                });
            }
        }
        Shape::Label { .. } => {}
    }
}

/// Paint a visual edge to edge with no frame, behind other content.
pub fn draw_backdrop(frame: &mut Frame, visual: &Visual, area: Rect) {
    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([0.0, 100.0])
        .y_bounds([0.0, 100.0])
        .paint(|ctx| {
            for mark in &visual.marks {
                paint_mark(ctx, mark);
            }
        });
    frame.render_widget(canvas, area);
}

/// Draw a visual inside `area`, with its caption and status under the canvas.
pub fn draw_visual(frame: &mut Frame, visual: &Visual, title: &str, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(format!(" {} ", title));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let footer_lines = visual.caption.is_some() as u16 + visual.status.is_some() as u16;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(footer_lines)])
        .split(inner);

    let char_width = 100.0 / chunks[0].width.max(1) as f64;
    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([0.0, 100.0])
        .y_bounds([0.0, 100.0])
        .paint(|ctx| {
            for mark in visual.marks.iter().filter(|m| m.text().is_none()) {
                paint_mark(ctx, mark);
            }
            // Labels on their own layer so shapes never cover text
            ctx.layer();
            for mark in &visual.marks {
                if let Shape::Label { x, y, text } = &mark.shape {
                    ctx.print(
                        label_left(*x, text, char_width),
                        flip(*y),
                        Line::styled(text.clone(), tone_style(mark.tone, mark.emphasis)),
                    );
                }
            }
        });
    frame.render_widget(canvas, chunks[0]);

    let mut footer = Vec::new();
    if let Some(caption) = &visual.caption {
        footer.push(Line::styled(
            caption.clone(),
            Style::default().fg(Color::DarkGray),
        ));
    }
    if let Some(status) = &visual.status {
        footer.push(Line::styled(
            status.clone(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ));
    }
    if !footer.is_empty() {
        let paragraph = Paragraph::new(footer)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, chunks[1]);
    }
}

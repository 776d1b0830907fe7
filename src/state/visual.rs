// Declarative visual descriptions.
// Widgets map their state to a Visual; the UI layer paints it onto a canvas.

/// Color role of a mark. The renderer owns the actual palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Muted,
    Ink,
    Gold,
    Blue,
    Red,
    Green,
    Orange,
    Purple,
    Emerald,
    Amber,
}

/// How strongly a mark is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Emphasis {
    Faint,
    #[default]
    Normal,
    Strong,
}

/// Geometry of a mark. Coordinates are percentages of the drawing area,
/// origin at the top-left, y growing downwards.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Filled circle centered on (x, y).
    Dot { x: f64, y: f64, radius: f64 },
    /// Square centered on (x, y).
    Square { x: f64, y: f64, size: f64 },
    /// Vertical bar standing on the bottom edge; `height` is 0..=100.
    Bar { x: f64, width: f64, height: f64 },
    /// Horizontal bar starting at `start`; `length` is 0..=100.
    Track { y: f64, start: f64, length: f64 },
    /// Straight segment.
    Line { x1: f64, y1: f64, x2: f64, y2: f64 },
    /// Ring arc drawn clockwise from 12 o'clock; `fraction` is 0..=1.
    Arc { x: f64, y: f64, radius: f64, fraction: f64 },
    /// Text anchored at (x, y).
    Label { x: f64, y: f64, text: String },
}

/// A single painted element.
#[derive(Debug, Clone, PartialEq)]
pub struct Mark {
    pub shape: Shape,
    pub tone: Tone,
    pub emphasis: Emphasis,
}

impl Mark {
    pub fn new(shape: Shape) -> Self {
        Self {
            shape,
            tone: Tone::Ink,
            emphasis: Emphasis::Normal,
        }
    }

    pub fn dot(x: f64, y: f64, radius: f64) -> Self {
        Self::new(Shape::Dot { x, y, radius })
    }

    pub fn square(x: f64, y: f64, size: f64) -> Self {
        Self::new(Shape::Square { x, y, size })
    }

    pub fn bar(x: f64, width: f64, height: f64) -> Self {
        Self::new(Shape::Bar {
            x,
            width,
            height: height.clamp(0.0, 100.0),
        })
    }

    pub fn track(y: f64, start: f64, length: f64) -> Self {
        Self::new(Shape::Track {
            y,
            start,
            length: length.clamp(0.0, 100.0),
        })
    }

    pub fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(Shape::Line { x1, y1, x2, y2 })
    }

    pub fn arc(x: f64, y: f64, radius: f64, fraction: f64) -> Self {
        Self::new(Shape::Arc {
            x,
            y,
            radius,
            fraction: fraction.clamp(0.0, 1.0),
        })
    }

    pub fn label(x: f64, y: f64, text: impl Into<String>) -> Self {
        Self::new(Shape::Label {
            x,
            y,
            text: text.into(),
        })
    }

    pub fn tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    pub fn emphasis(mut self, emphasis: Emphasis) -> Self {
        self.emphasis = emphasis;
        self
    }

    pub fn faint(self) -> Self {
        self.emphasis(Emphasis::Faint)
    }

    pub fn strong(self) -> Self {
        self.emphasis(Emphasis::Strong)
    }

    /// Text carried by a label mark.
    pub fn text(&self) -> Option<&str> {
        match &self.shape {
            Shape::Label { text, .. } => Some(text),
            _ => None,
        }
    }
}

/// Everything a renderer needs to paint one widget state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Visual {
    pub marks: Vec<Mark>,
    /// Short explanatory line shown under the drawing.
    pub caption: Option<String>,
    /// State-dependent status line (e.g. parity violations).
    pub status: Option<String>,
}

impl Visual {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, mark: Mark) {
        self.marks.push(mark);
    }

    pub fn with_mark(mut self, mark: Mark) -> Self {
        self.marks.push(mark);
        self
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}

#[cfg(test)]
impl Visual {
    /// Find the first label mark with the given text.
    pub fn find_label(&self, text: &str) -> Option<&Mark> {
        self.marks.iter().find(|m| m.text() == Some(text))
    }

    pub fn has_label(&self, text: &str) -> bool {
        self.find_label(text).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_height_is_clamped() {
        let mark = Mark::bar(10.0, 20.0, 140.0);
        assert_eq!(
            mark.shape,
            Shape::Bar {
                x: 10.0,
                width: 20.0,
                height: 100.0
            }
        );
    }

    #[test]
    fn test_find_label() {
        let visual = Visual::new()
            .with_mark(Mark::dot(50.0, 50.0, 4.0).tone(Tone::Blue))
            .with_mark(Mark::label(50.0, 60.0, "Robbie").strong());

        let label = visual.find_label("Robbie").unwrap();
        assert_eq!(label.emphasis, Emphasis::Strong);
        assert!(!visual.has_label("Nike"));
    }
}

// Content types for papers and slides.
// Defines the immutable records shown by the catalog, article pages and slide decks.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::diagrams::DiagramKind;
use crate::error::{DeckError, Result};
use crate::state::visual::{Tone, Visual};

/// Badge theme of a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlideTheme {
    #[default]
    Default,
    Alert,
    Brand,
    /// Reserved; renders like `Default`.
    Dark,
    /// Reserved; renders like `Default`.
    Light,
}

impl SlideTheme {
    /// Color role of the badge.
    pub fn tone(&self) -> Tone {
        match self {
            SlideTheme::Alert => Tone::Red,
            SlideTheme::Brand => Tone::Blue,
            SlideTheme::Default | SlideTheme::Dark | SlideTheme::Light => Tone::Muted,
        }
    }

    /// Icon shown in front of the badge label.
    pub fn marker(&self) -> Option<&'static str> {
        match self {
            SlideTheme::Alert => Some("!"),
            SlideTheme::Brand => Some("⚡"),
            _ => None,
        }
    }
}

/// One slide of an explainer deck.
#[derive(Debug, Clone)]
pub struct Slide {
    pub id: String,
    pub title: String,
    pub subtitle: Option<String>,
    /// Body text; embedded newlines are line breaks.
    pub body: String,
    pub visual: Option<Visual>,
    pub theme: SlideTheme,
}

impl Slide {
    pub fn new(id: impl Into<String>, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            subtitle: None,
            body: body.into(),
            visual: None,
            theme: SlideTheme::Default,
        }
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn theme(mut self, theme: SlideTheme) -> Self {
        self.theme = theme;
        self
    }

    pub fn visual(mut self, visual: Visual) -> Self {
        self.visual = Some(visual);
        self
    }

    /// Body split into display lines; blank lines separate paragraphs.
    pub fn body_lines(&self) -> Vec<&str> {
        self.body.split('\n').map(str::trim_end).collect()
    }
}

/// Ordered, non-empty sequence of slides with unique ids.
#[derive(Debug, Clone)]
pub struct SlideDeck {
    slides: Vec<Slide>,
}

#[allow(clippy::len_without_is_empty)]
impl SlideDeck {
    pub fn new(slides: Vec<Slide>) -> Result<Self> {
        if slides.is_empty() {
            return Err(DeckError::EmptyDeck);
        }

        let mut seen = HashSet::new();
        for slide in &slides {
            if !seen.insert(slide.id.as_str()) {
                return Err(DeckError::DuplicateSlide(slide.id.clone()));
            }
        }

        Ok(Self { slides })
    }

    /// Number of slides. Always at least one.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slide> {
        self.slides.iter()
    }
}

impl std::ops::Index<usize> for SlideDeck {
    type Output = Slide;

    fn index(&self, index: usize) -> &Slide {
        &self.slides[index]
    }
}

/// Accent color of a paper page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaperTheme {
    Stone,
    Blue,
    Emerald,
    Purple,
    Orange,
}

impl PaperTheme {
    pub fn tone(&self) -> Tone {
        match self {
            PaperTheme::Stone => Tone::Gold,
            PaperTheme::Blue => Tone::Blue,
            PaperTheme::Emerald => Tone::Emerald,
            PaperTheme::Purple => Tone::Purple,
            PaperTheme::Orange => Tone::Orange,
        }
    }
}

/// A titled block of article prose.
#[derive(Debug, Clone)]
pub struct Section {
    /// Small uppercase label above the heading.
    pub kicker: &'static str,
    pub heading: &'static str,
    pub paragraphs: Vec<&'static str>,
}

/// A paper in the catalog.
#[derive(Debug, Clone)]
pub struct Paper {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub summary: &'static str,
    pub published: NaiveDate,
    pub url: &'static str,
    pub theme: PaperTheme,
    /// Hero headline and its accented second line.
    pub headline: (&'static str, &'static str),
    pub tagline: &'static str,
    pub sections: Vec<Section>,
    pub diagrams: Vec<DiagramKind>,
    /// Whether the page header shows the network backdrop.
    pub network_backdrop: bool,
    pub slides: Option<SlideDeck>,
}

impl Paper {
    /// Publication month, e.g. "Nov 2024".
    pub fn date_label(&self) -> String {
        self.published.format("%b %Y").to_string()
    }

    pub fn has_slides(&self) -> bool {
        self.slides.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_deck_rejected() {
        assert!(matches!(SlideDeck::new(vec![]), Err(DeckError::EmptyDeck)));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let slides = vec![Slide::new("1", "A", "a"), Slide::new("1", "B", "b")];
        match SlideDeck::new(slides) {
            Err(DeckError::DuplicateSlide(id)) => assert_eq!(id, "1"),
            other => panic!("expected duplicate error, got {:?}", other.map(|d| d.len())),
        }
    }

    #[test]
    fn test_body_lines_keep_paragraph_breaks() {
        let slide = Slide::new("1", "Title", "First.\n\nSecond line\nThird");
        assert_eq!(slide.body_lines(), vec!["First.", "", "Second line", "Third"]);
    }

    #[test]
    fn test_reserved_themes_render_as_default() {
        assert_eq!(SlideTheme::Dark.tone(), SlideTheme::Default.tone());
        assert_eq!(SlideTheme::Light.marker(), None);
        assert_eq!(SlideTheme::Alert.tone(), Tone::Red);
        assert_eq!(SlideTheme::Brand.marker(), Some("⚡"));
    }

    #[test]
    fn test_theme_parses_snake_case() {
        let theme: SlideTheme = serde_json::from_str("\"alert\"").unwrap();
        assert_eq!(theme, SlideTheme::Alert);
    }
}

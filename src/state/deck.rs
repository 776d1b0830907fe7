// Slide deck navigator.
// Owns the open/closed state and current slide, keyboard binding and the deck view model.

use crossterm::event::KeyCode;
use serde::{Deserialize, Serialize};

use crate::content::{Slide, SlideDeck, SlideTheme};
use crate::state::input::{KeyBinding, KeyListeners};
use crate::state::visual::Visual;

/// Badge label used when a slide has no subtitle.
pub const DEFAULT_BADGE: &str = "Concept";

/// Placeholder shown when a slide carries no visual.
pub const VISUAL_PLACEHOLDER: &str = "Visual Representation";

/// Where a deck starts when it is opened again after a close.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReopenPolicy {
    /// Always start at the first slide.
    #[default]
    Restart,
    /// Start at the slide that was showing when the deck was closed.
    Resume,
}

/// Visibility state of the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckState {
    Closed,
    Open(usize),
}

/// Modal slide-deck navigator.
pub struct SlideNavigator {
    title: String,
    slides: SlideDeck,
    state: DeckState,
    /// Index shown when the deck was last closed.
    last_index: usize,
    reopen: ReopenPolicy,
    keys: KeyListeners,
    /// Installed only while open.
    binding: Option<KeyBinding>,
    on_close: Box<dyn FnMut()>,
}

impl std::fmt::Debug for SlideNavigator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlideNavigator")
            .field("title", &self.title)
            .field("slides", &self.slides.len())
            .field("state", &self.state)
            .field("reopen", &self.reopen)
            .finish()
    }
}

impl SlideNavigator {
    /// Create a closed navigator. `on_close` runs once per open-to-closed transition.
    pub fn new(
        title: impl Into<String>,
        slides: SlideDeck,
        keys: KeyListeners,
        on_close: impl FnMut() + 'static,
    ) -> Self {
        Self {
            title: title.into(),
            slides,
            state: DeckState::Closed,
            last_index: 0,
            reopen: ReopenPolicy::default(),
            keys,
            binding: None,
            on_close: Box::new(on_close),
        }
    }

    pub fn with_reopen(mut self, reopen: ReopenPolicy) -> Self {
        self.reopen = reopen;
        self
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, DeckState::Open(_))
    }

    /// Whether the keyboard binding is installed.
    pub fn is_listening(&self) -> bool {
        self.binding.as_ref().is_some_and(KeyBinding::is_active)
    }

    /// Show the deck and install the keyboard binding. No-op if already open.
    pub fn open(&mut self) {
        if self.is_open() {
            return;
        }

        let start = match self.reopen {
            ReopenPolicy::Restart => 0,
            ReopenPolicy::Resume => self.last_index,
        };
        self.state = DeckState::Open(start);
        self.binding = Some(self.keys.install());
        log::info!("Opened deck '{}' at slide {}", self.title, start + 1);
    }

    /// Hide the deck, remove the keyboard binding and notify the host.
    pub fn close(&mut self) {
        let DeckState::Open(i) = self.state else {
            return;
        };

        self.last_index = i;
        self.state = DeckState::Closed;
        self.binding = None;
        log::info!("Closed deck '{}' on slide {}", self.title, i + 1);
        (self.on_close)();
    }

    /// Advance to the next slide, wrapping from last to first.
    pub fn next(&mut self) {
        if let DeckState::Open(i) = self.state {
            self.state = DeckState::Open((i + 1) % self.slides.len());
        }
    }

    /// Go back one slide, wrapping from first to last.
    pub fn previous(&mut self) {
        if let DeckState::Open(i) = self.state {
            let n = self.slides.len();
            self.state = DeckState::Open((i + n - 1) % n);
        }
    }

    /// Show the slide at `index`. Callers pass indices from the rendered index list.
    pub fn jump_to(&mut self, index: usize) {
        debug_assert!(index < self.slides.len(), "slide index out of range");
        if self.is_open() {
            self.state = DeckState::Open(index.min(self.slides.len() - 1));
        }
    }

    /// Handle a key press. Returns true if the deck consumed it.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        if !self.is_listening() {
            return false;
        }

        match code {
            KeyCode::Right => self.next(),
            KeyCode::Left => self.previous(),
            KeyCode::Esc => self.close(),
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if index < self.slides.len() {
                    self.jump_to(index);
                }
            }
            _ => return false,
        }
        true
    }

    /// View model for the active slide. `None` while closed.
    pub fn view(&self) -> Option<DeckView<'_>> {
        let DeckState::Open(current) = self.state else {
            return None;
        };

        let slide = &self.slides[current];
        let total = self.slides.len();

        let index = self
            .slides
            .iter()
            .enumerate()
            .map(|(i, s)| IndexEntry {
                title: &s.title,
                active: i == current,
            })
            .collect();

        let visual = match &slide.visual {
            Some(visual) => VisualSlot::Visual(visual),
            None => VisualSlot::Placeholder(VISUAL_PLACEHOLDER),
        };

        Some(DeckView {
            deck_title: &self.title,
            current,
            total,
            progress: (current + 1) as f64 / total as f64,
            index,
            slide,
            badge_label: slide.subtitle.as_deref().unwrap_or(DEFAULT_BADGE),
            badge_theme: slide.theme,
            body: slide.body_lines(),
            visual,
        })
    }
}

/// One row of the slide index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry<'a> {
    pub title: &'a str,
    pub active: bool,
}

/// Visual area content of a slide.
#[derive(Debug, Clone, PartialEq)]
pub enum VisualSlot<'a> {
    Visual(&'a Visual),
    Placeholder(&'static str),
}

/// Everything the modal needs to draw the active slide.
#[derive(Debug, Clone)]
pub struct DeckView<'a> {
    pub deck_title: &'a str,
    /// Zero-based index of the active slide.
    pub current: usize,
    pub total: usize,
    /// Fraction of the deck shown so far, in (0, 1].
    pub progress: f64,
    pub index: Vec<IndexEntry<'a>>,
    pub slide: &'a Slide,
    pub badge_label: &'a str,
    pub badge_theme: SlideTheme,
    pub body: Vec<&'a str>,
    pub visual: VisualSlot<'a>,
}

impl DeckView<'_> {
    /// "Slide i of n".
    pub fn position_label(&self) -> String {
        format!("Slide {} of {}", self.current + 1, self.total)
    }
}

#[cfg(test)]
impl SlideNavigator {
    pub fn state(&self) -> DeckState {
        self.state
    }

    /// Current slide index, if open.
    pub fn current_index(&self) -> Option<usize> {
        match self.state {
            DeckState::Open(i) => Some(i),
            DeckState::Closed => None,
        }
    }
}

// App state and main event loop.
// Owns page navigation, mounted diagrams and the slide deck, and routes keyboard and mouse input.

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::prelude::*;
use ratatui::widgets::ListState;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::time::MissedTickBehavior;

use crate::config::Settings;
use crate::content::{Catalog, Paper};
use crate::diagrams::{Control, Diagram, NetworkScene};
use crate::error::Result;
use crate::state::{KeyListeners, NavigationStack, Page, SlideNavigator};
use crate::ui;

/// Notifications raised by components back to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    DeckClosed,
}

/// Screen regions recorded during the last draw, used for mouse hit testing.
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    /// Outer rectangle of the slide modal, when shown.
    pub modal: Option<Rect>,
    /// One row per slide in the modal index.
    pub index_rows: Vec<(Rect, usize)>,
    /// One row per paper in the catalog list.
    pub catalog_rows: Vec<(Rect, usize)>,
    /// Buttons under the focused diagram.
    pub diagram_buttons: Vec<(Rect, Control)>,
}

impl HitMap {
    fn clear(&mut self) {
        self.modal = None;
        self.index_rows.clear();
        self.catalog_rows.clear();
        self.diagram_buttons.clear();
    }
}

fn hit<T: Copy>(targets: &[(Rect, T)], column: u16, row: u16) -> Option<T> {
    let point = Position::new(column, row);
    targets
        .iter()
        .find(|(rect, _)| rect.contains(point))
        .map(|(_, target)| *target)
}

/// Main application state.
pub struct App {
    pub catalog: Catalog,
    pub settings: Settings,
    pub nav: NavigationStack,
    /// Selection in the catalog list.
    pub catalog_state: ListState,
    /// Widgets mounted for the current paper page.
    pub diagrams: Vec<Diagram>,
    /// Index of the diagram receiving widget keys.
    pub focus: usize,
    pub deck: Option<SlideNavigator>,
    pub keys: KeyListeners,
    pub backdrop: Option<NetworkScene>,
    /// Vertical scroll of the article text.
    pub scroll: u16,
    pub show_help: bool,
    /// One-line notice shown in the status bar.
    pub status: Option<String>,
    pub hit_map: HitMap,
    /// Whether the app should exit.
    pub should_quit: bool,
    events_tx: UnboundedSender<AppEvent>,
    events_rx: UnboundedReceiver<AppEvent>,
}

impl App {
    pub fn new(catalog: Catalog, settings: Settings) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let mut catalog_state = ListState::default();
        if !catalog.is_empty() {
            catalog_state.select(Some(0));
        }

        Self {
            catalog,
            settings,
            nav: NavigationStack::default(),
            catalog_state,
            diagrams: Vec::new(),
            focus: 0,
            deck: None,
            keys: KeyListeners::new(),
            backdrop: None,
            scroll: 0,
            show_help: false,
            status: None,
            hit_map: HitMap::default(),
            should_quit: false,
            events_tx,
            events_rx,
        }
    }

    /// Paper shown on the current page, if any.
    pub fn current_paper(&self) -> Option<&Paper> {
        self.nav
            .current()
            .paper_id()
            .and_then(|id| self.catalog.find(id))
    }

    pub fn focused_diagram(&self) -> Option<&Diagram> {
        self.diagrams.get(self.focus)
    }

    /// Navigate to a paper page and mount its widgets. Requires a tokio runtime.
    pub fn open_paper(&mut self, id: &str) -> Result<()> {
        let paper = self.catalog.require(id)?.clone();

        if self.nav.current().paper_id().is_some() {
            self.unmount();
            self.nav.pop();
        }

        self.diagrams = paper.diagrams.iter().map(|k| Diagram::mount(*k)).collect();
        self.focus = 0;
        self.scroll = 0;
        self.backdrop = paper
            .network_backdrop
            .then(|| NetworkScene::generate(&mut rand::thread_rng()));
        self.deck = paper.slides.clone().map(|slides| {
            let tx = self.events_tx.clone();
            SlideNavigator::new(paper.title, slides, self.keys.clone(), move || {
                let _ = tx.send(AppEvent::DeckClosed);
            })
            .with_reopen(self.settings.deck_reopen)
        });
        if let Some(index) = self.catalog.position(id) {
            self.catalog_state.select(Some(index));
        }

        self.nav.push(Page::Paper {
            id: paper.id.to_string(),
            title: paper.title.to_string(),
        });
        self.status = None;
        log::info!("Opened paper '{}' with {} diagrams", paper.id, self.diagrams.len());
        Ok(())
    }

    /// Return to the catalog. Returns false if already there.
    pub fn go_back(&mut self) -> bool {
        if !self.nav.can_go_back() {
            return false;
        }
        self.unmount();
        self.nav.pop();
        log::info!("Returned to {}", self.nav.current().title());
        true
    }

    fn unmount(&mut self) {
        // Dropping the widgets aborts their timers; dropping the deck releases its binding
        self.diagrams.clear();
        self.deck = None;
        self.backdrop = None;
        self.focus = 0;
    }

    /// Open the slide deck of the current paper. Returns false when it has none.
    pub fn open_slides(&mut self) -> bool {
        match self.deck.as_mut() {
            Some(deck) => {
                deck.open();
                true
            }
            None => {
                self.status = Some("This paper has no slides".to_string());
                false
            }
        }
    }

    pub fn deck_is_open(&self) -> bool {
        self.deck.as_ref().is_some_and(SlideNavigator::is_open)
    }

    fn focus_next(&mut self) {
        if !self.diagrams.is_empty() {
            self.focus = (self.focus + 1) % self.diagrams.len();
        }
    }

    fn focus_prev(&mut self) {
        if !self.diagrams.is_empty() {
            self.focus = (self.focus + self.diagrams.len() - 1) % self.diagrams.len();
        }
    }

    fn select_next(&mut self) {
        if self.catalog.is_empty() {
            return;
        }
        let i = match self.catalog_state.selected() {
            Some(i) if i + 1 < self.catalog.len() => i + 1,
            Some(i) => i, // Stay at end
            None => 0,
        };
        self.catalog_state.select(Some(i));
    }

    fn select_prev(&mut self) {
        if self.catalog.is_empty() {
            return;
        }
        let i = self.catalog_state.selected().map_or(0, |i| i.saturating_sub(1));
        self.catalog_state.select(Some(i));
    }

    fn open_selected(&mut self) {
        let Some(id) = self
            .catalog_state
            .selected()
            .and_then(|i| self.catalog.get(i))
            .map(|p| p.id)
        else {
            return;
        };
        if let Err(e) = self.open_paper(id) {
            log::error!("Failed to open paper '{}': {}", id, e);
            self.status = Some(e.to_string());
        }
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.show_help {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
                self.show_help = false;
            }
            return;
        }

        // The open deck owns the keyboard
        if let Some(deck) = self.deck.as_mut().filter(|d| d.is_listening()) {
            if !deck.handle_key(key.code) && key.code == KeyCode::Char('q') {
                self.should_quit = true;
            }
            self.drain_events();
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = true,
            _ => match self.nav.current() {
                Page::Catalog => self.handle_catalog_key(key.code),
                Page::Paper { .. } => self.handle_paper_key(key.code),
            },
        }
    }

    fn handle_catalog_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Enter => self.open_selected(),
            _ => {}
        }
    }

    fn handle_paper_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc | KeyCode::Backspace => {
                self.go_back();
            }
            KeyCode::Char('s') => {
                self.open_slides();
            }
            KeyCode::Tab => self.focus_next(),
            KeyCode::BackTab => self.focus_prev(),
            KeyCode::Up | KeyCode::Char('k') => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll = self.scroll.saturating_add(1),
            KeyCode::PageUp => self.scroll = self.scroll.saturating_sub(10),
            KeyCode::PageDown => self.scroll = self.scroll.saturating_add(10),
            KeyCode::Home | KeyCode::Char('g') => self.scroll = 0,
            code => {
                if let Some(diagram) = self.diagrams.get_mut(self.focus) {
                    diagram.handle_key(code);
                }
            }
        }
    }

    /// Handle a mouse event using the regions from the last draw.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        // The help overlay covers the page
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) || self.show_help {
            return;
        }
        let (column, row) = (mouse.column, mouse.row);

        if self.deck_is_open() {
            let index = hit(&self.hit_map.index_rows, column, row);
            let outside = self
                .hit_map
                .modal
                .is_some_and(|modal| !modal.contains(Position::new(column, row)));
            if let Some(deck) = self.deck.as_mut() {
                if let Some(index) = index {
                    deck.jump_to(index);
                } else if outside {
                    deck.close();
                }
            }
            self.drain_events();
            return;
        }

        match self.nav.current() {
            Page::Catalog => {
                if let Some(index) = hit(&self.hit_map.catalog_rows, column, row) {
                    self.catalog_state.select(Some(index));
                    self.open_selected();
                }
            }
            Page::Paper { .. } => {
                let control = hit(&self.hit_map.diagram_buttons, column, row);
                if let (Some(control), Some(diagram)) =
                    (control, self.diagrams.get_mut(self.focus))
                {
                    diagram.click(control);
                }
            }
        }
    }

    fn handle_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::DeckClosed => {
                self.status = Some("Slides closed".to_string());
            }
        }
    }

    fn drain_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle_app_event(event);
        }
    }

    /// Frame tick: deliver timer events to the mounted widgets.
    pub fn tick(&mut self) {
        self.drain_events();
        for diagram in &mut self.diagrams {
            diagram.poll();
        }
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
    }

    /// Main event loop.
    pub async fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> Result<()> {
        let mut input = spawn_input_reader();
        let mut ticker = tokio::time::interval(self.settings.tick_rate());
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        while !self.should_quit {
            self.hit_map.clear();
            terminal.draw(|frame| ui::draw(frame, self))?;

            tokio::select! {
                maybe_event = input.recv() => match maybe_event {
                    Some(event) => self.handle_event(event),
                    None => {
                        log::warn!("Input reader stopped");
                        self.should_quit = true;
                    }
                },
                _ = ticker.tick() => self.tick(),
                _ = tokio::signal::ctrl_c() => self.should_quit = true,
            }
        }

        log::info!("Shutting down");
        Ok(())
    }
}

/// Read terminal events on a blocking thread and forward them to the loop.
fn spawn_input_reader() -> UnboundedReceiver<Event> {
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        while !tx.is_closed() {
            match event::poll(std::time::Duration::from_millis(100)) {
                Ok(true) => match event::read() {
                    Ok(event) => {
                        if tx.send(event).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        log::error!("Failed to read terminal event: {}", e);
                        break;
                    }
                },
                Ok(false) => {}
                Err(e) => {
                    log::error!("Failed to poll terminal events: {}", e);
                    break;
                }
            }
        }
    });
    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ReopenPolicy;

    fn app() -> App {
        App::new(Catalog::builtin().unwrap(), Settings::default())
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn click(app: &mut App, column: u16, row: u16) {
        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        });
    }

    #[tokio::test]
    async fn test_enter_opens_selected_paper() {
        let mut app = app();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.nav.current().paper_id(), Some("zep"));
        assert_eq!(app.diagrams.len(), 2);
        assert!(app.deck.is_some());
        assert!(app.backdrop.is_some());
        assert_eq!(app.nav.breadcrumbs().len(), 2);
    }

    #[tokio::test]
    async fn test_escape_returns_to_catalog_and_unmounts() {
        let mut app = app();
        app.open_paper("alphaqubit").unwrap();
        assert_eq!(app.diagrams.len(), 3);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.nav.current(), &Page::Catalog);
        assert!(app.diagrams.is_empty());
        assert!(!app.go_back());
    }

    #[tokio::test]
    async fn test_unknown_paper_is_error() {
        let mut app = app();
        assert!(app.open_paper("missing").is_err());
        assert_eq!(app.nav.current(), &Page::Catalog);
    }

    #[tokio::test]
    async fn test_deck_keys_then_escape_notifies_host() {
        let mut app = app();
        app.open_paper("zep").unwrap();

        press(&mut app, KeyCode::Char('s'));
        assert!(app.deck_is_open());
        assert_eq!(app.keys.len(), 1);

        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.deck.as_ref().and_then(|d| d.current_index()), Some(2));

        // Esc closes the deck, not the page
        press(&mut app, KeyCode::Esc);
        assert!(!app.deck_is_open());
        assert!(app.keys.is_empty());
        assert_eq!(app.status.as_deref(), Some("Slides closed"));
        assert_eq!(app.nav.current().paper_id(), Some("zep"));
    }

    #[tokio::test]
    async fn test_slides_on_paper_without_deck() {
        let mut app = app();
        app.open_paper("amem").unwrap();
        assert!(!app.open_slides());
        assert_eq!(app.status.as_deref(), Some("This paper has no slides"));
    }

    #[tokio::test]
    async fn test_leaving_page_releases_binding() {
        let mut app = app();
        app.open_paper("zep").unwrap();
        app.open_slides();
        assert_eq!(app.keys.len(), 1);

        app.unmount();
        app.nav.pop();
        assert!(app.keys.is_empty());
    }

    #[tokio::test]
    async fn test_reopen_setting_is_applied() {
        let settings = Settings {
            deck_reopen: ReopenPolicy::Resume,
            ..Settings::default()
        };
        let mut app = App::new(Catalog::builtin().unwrap(), settings);
        app.open_paper("zep").unwrap();
        app.open_slides();
        press(&mut app, KeyCode::Char('4'));
        press(&mut app, KeyCode::Esc);
        app.open_slides();

        assert_eq!(app.deck.as_ref().and_then(|d| d.current_index()), Some(3));
    }

    #[tokio::test]
    async fn test_mouse_index_jump_and_outside_close() {
        let mut app = app();
        app.open_paper("zep").unwrap();
        app.open_slides();

        app.hit_map.modal = Some(Rect::new(10, 5, 60, 20));
        app.hit_map.index_rows = (0..6).map(|i| (Rect::new(12, 8 + i as u16, 20, 1), i)).collect();

        click(&mut app, 15, 12);
        assert_eq!(app.deck.as_ref().and_then(|d| d.current_index()), Some(4));

        // Inside the modal but not on a row
        click(&mut app, 50, 10);
        assert!(app.deck_is_open());

        click(&mut app, 1, 1);
        assert!(!app.deck_is_open());
    }

    #[test]
    fn test_clicks_ignored_under_help_overlay() {
        let mut app = app();
        app.hit_map.catalog_rows = (0..5).map(|i| (Rect::new(1, 4 + 3 * i as u16, 78, 3), i)).collect();
        press(&mut app, KeyCode::Char('?'));

        click(&mut app, 10, 8);
        assert_eq!(app.nav.current(), &Page::Catalog);
        assert_eq!(app.catalog_state.selected(), Some(0));
        assert!(app.show_help);
    }

    #[tokio::test]
    async fn test_diagram_buttons_are_clickable() {
        let mut app = app();
        app.open_paper("alphaqubit").unwrap();
        app.hit_map.diagram_buttons = vec![
            (Rect::new(40, 30, 4, 1), Control::Select(0)),
            (Rect::new(45, 30, 4, 1), Control::Select(1)),
            (Rect::new(50, 30, 7, 1), Control::Action),
        ];

        click(&mut app, 41, 30);
        click(&mut app, 46, 30);
        let Some(Diagram::SurfaceCode(parity)) = app.diagrams.first() else {
            panic!("surface code should be mounted first");
        };
        assert!(parity.has_error(0) && parity.has_error(1));

        // Reset clears the injected errors
        click(&mut app, 52, 30);
        let Some(Diagram::SurfaceCode(parity)) = app.diagrams.first() else {
            panic!("surface code should be mounted first");
        };
        assert!(!parity.has_error(0) && !parity.has_error(1));
    }

    #[tokio::test]
    async fn test_tab_cycles_focus_and_routes_keys() {
        let mut app = app();
        app.open_paper("alphaqubit").unwrap();

        press(&mut app, KeyCode::Char('1'));
        let Some(Diagram::SurfaceCode(parity)) = app.diagrams.first() else {
            panic!("surface code should be mounted first");
        };
        assert!(parity.has_error(0));

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, 2);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, 0);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focus, 2);
    }

    #[test]
    fn test_help_overlay_swallows_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);

        press(&mut app, KeyCode::Down);
        assert_eq!(app.catalog_state.selected(), Some(0));

        press(&mut app, KeyCode::Esc);
        assert!(!app.show_help);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_catalog_selection_clamps() {
        let mut app = app();
        press(&mut app, KeyCode::Up);
        assert_eq!(app.catalog_state.selected(), Some(0));
        for _ in 0..10 {
            press(&mut app, KeyCode::Char('j'));
        }
        assert_eq!(app.catalog_state.selected(), Some(4));
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);

        let mut app = self::app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }
}

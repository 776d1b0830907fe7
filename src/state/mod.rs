// State management module.
// Handles page navigation, the slide deck, key listeners, timers and visual descriptions.

pub mod cycle;
pub mod deck;
pub mod input;
pub mod navigation;
pub mod timer;
pub mod visual;

pub use deck::{ReopenPolicy, SlideNavigator};
pub use input::KeyListeners;
pub use navigation::{NavigationStack, Page};
pub use visual::Emphasis;

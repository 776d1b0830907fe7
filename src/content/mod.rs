// Built-in content.
// Paper records, article prose and the slide decks that ship with the app.

pub mod catalog;
pub mod types;

pub use catalog::Catalog;
pub use types::{Paper, Slide, SlideDeck, SlideTheme};

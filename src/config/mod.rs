// Configuration module.
// Settings file location, loading and atomic writes.

pub mod paths;
pub mod store;

pub use store::{Settings, load, save};

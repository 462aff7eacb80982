//! Terminal user interface

pub mod app;
pub mod render;
pub mod screen;
pub mod terminal;
pub mod theme;

pub use app::{App, Focus};
pub use terminal::{detect_capabilities, Palette, TerminalCapabilities, TerminalGuard};

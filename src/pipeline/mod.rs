//! Runtime: terminal setup, event plumbing, and the reactive render loop.

pub mod app;
pub mod events;
pub mod terminal;

pub use app::{run, run_headless, App, ScreenFrame};
pub use events::{AppEvent, EventChannel, InputThread};
pub use terminal::{terminal_size, TerminalGuard};

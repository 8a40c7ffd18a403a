//! User interface (TUI) subsystem for restdeck.
//! Provides the screen shell, rendering, event handling, and the toast
//! notification overlay.

/// TUI application and main event loop.
pub mod app;
/// Input event source abstraction (public so tests can inject events).
pub mod event_source;
/// Single-line field editing.
pub mod input;
/// Rendering components.
pub mod render;
/// Routing and screen state.
pub mod state;
/// Theme definitions.
pub mod theme;
/// Toast notification stack.
pub mod toast;

pub use app::TuiApp;

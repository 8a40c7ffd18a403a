use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};

/// Abstraction over the input event source used by the TUI.
///
/// Implementations mirror crossterm's semantics:
/// - `poll(timeout)` waits up to timeout for an event and returns whether one is available.
/// - `read()` blocks until an event is available and returns it.
///
/// Scripted sources additionally report exhaustion so test-driven event
/// loops terminate once the script runs out.
pub trait InputEventSource: Send {
    /// Wait up to `timeout` for an event to become available.
    ///
    /// # Errors
    /// Returns an error if the event polling operation fails.
    fn poll(&mut self, timeout: Duration) -> io::Result<bool>;

    /// Block until an input `Event` is available and return it.
    ///
    /// # Errors
    /// Returns an error if reading the event fails.
    fn read(&mut self) -> io::Result<Event>;

    /// Whether this source can never produce another event. Always false
    /// for real terminal input.
    fn exhausted(&self) -> bool {
        false
    }
}

/// Default event source backed by crossterm.
pub struct CrosstermEventSource;

impl InputEventSource for CrosstermEventSource {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool> {
        event::poll(timeout)
    }

    fn read(&mut self) -> io::Result<Event> {
        event::read()
    }
}

/// Scripted event source that replays a fixed sequence of events, for tests.
#[derive(Default)]
pub struct ScriptedEventSource {
    /// Remaining events, consumed front to back.
    queue: VecDeque<Event>,
}

impl ScriptedEventSource {
    /// Creates a source that will replay the given events in order.
    #[must_use]
    pub fn new(events: Vec<Event>) -> Self {
        Self {
            queue: events.into(),
        }
    }

    /// Convenience: a plain key press event.
    #[must_use]
    pub fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    /// Convenience: one key press event per character.
    #[must_use]
    pub fn typed(text: &str) -> Vec<Event> {
        text.chars().map(|ch| Self::key(KeyCode::Char(ch))).collect()
    }
}

impl InputEventSource for ScriptedEventSource {
    fn poll(&mut self, _timeout: Duration) -> io::Result<bool> {
        Ok(!self.queue.is_empty())
    }

    fn read(&mut self) -> io::Result<Event> {
        self.queue
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "event script exhausted"))
    }

    fn exhausted(&self) -> bool {
        self.queue.is_empty()
    }
}

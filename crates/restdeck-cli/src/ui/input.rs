//! Single-line field editing.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::style::Style;
use tui_textarea::TextArea;

/// Single-line text editor backing the search bar and form fields.
///
/// One editor instance is reused across fields: the shell loads the focused
/// field's current value into it and writes the text back into the draft on
/// every keystroke.
pub struct FieldEditor {
    /// Underlying text area, kept to a single line.
    area: TextArea<'static>,
}

impl FieldEditor {
    /// Creates an empty editor.
    #[must_use]
    pub fn new() -> Self {
        let mut editor = Self {
            area: TextArea::default(),
        };
        editor.set_text("");
        editor
    }

    /// Replaces the content and moves the cursor to the end.
    pub fn set_text(&mut self, text: &str) {
        let mut area = TextArea::new(vec![text.to_owned()]);
        area.set_cursor_line_style(Style::default());
        area.move_cursor(tui_textarea::CursorMove::End);
        self.area = area;
    }

    /// Current content.
    #[must_use]
    pub fn text(&self) -> String {
        self.area.lines().first().cloned().unwrap_or_default()
    }

    /// Feeds a key event into the editor, returning whether the content
    /// changed. Enter is swallowed to keep the content single-line.
    pub fn input(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Enter {
            return false;
        }
        self.area.input(key)
    }
}

impl Default for FieldEditor {
    fn default() -> Self {
        Self::new()
    }
}

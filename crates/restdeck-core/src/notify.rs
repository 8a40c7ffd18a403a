use serde::{Deserialize, Serialize};

/// Severity of a user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    /// Something completed as expected.
    Success,
    /// The operation was refused or skipped, input needed.
    Warning,
    /// A remote call or internal operation failed.
    Error,
}

/// Where a notice should appear in the notification area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Position {
    /// Centered along the top edge.
    TopCenter,
    /// Top-right corner.
    #[default]
    TopRight,
}

/// A transient, fire-and-forget message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Message text.
    pub text: String,
    /// Severity, which drives styling.
    pub severity: Severity,
    /// Placement of the notice.
    pub position: Position,
}

impl Notice {
    /// Creates a success notice at the default position.
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            severity: Severity::Success,
            position: Position::default(),
        }
    }

    /// Creates a warning notice, top-centered.
    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            severity: Severity::Warning,
            position: Position::TopCenter,
        }
    }

    /// Creates an error notice at the default position.
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            severity: Severity::Error,
            position: Position::default(),
        }
    }
}

/// Sink for transient notices. Fire-and-forget: callers never consume a
/// return value and no delivery guarantee exists beyond whatever the
/// underlying display stack provides. Multiple notices may stack.
pub trait NotificationSink {
    /// Displays a notice.
    fn notify(&mut self, notice: Notice);
}

/// Recording sink for tests: stores every notice it receives.
#[derive(Debug, Default)]
pub struct RecordingSink {
    /// Notices received, oldest first.
    pub notices: Vec<Notice>,
}

impl NotificationSink for RecordingSink {
    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_constructors() {
        let notice = Notice::success("Welcome!");
        assert_eq!(notice.severity, Severity::Success);
        assert_eq!(notice.position, Position::TopRight);

        let notice = Notice::warning("Please fill in all fields!");
        assert_eq!(notice.severity, Severity::Warning);
        assert_eq!(notice.position, Position::TopCenter);

        let notice = Notice::error("request failed");
        assert_eq!(notice.severity, Severity::Error);
    }

    #[test]
    fn test_recording_sink_stacks_notices() {
        let mut sink = RecordingSink::default();
        sink.notify(Notice::success("one"));
        sink.notify(Notice::warning("two"));

        assert_eq!(sink.notices.len(), 2);
        assert_eq!(sink.notices[0].text, "one");
        assert_eq!(sink.notices[1].severity, Severity::Warning);
    }
}

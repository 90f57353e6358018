//! Message center: ordered, severity-tagged notifications
//!
//! The message list is process-scoped state with a single writer (the event
//! loop). Appends are strictly additive; identical messages are not merged.

use chrono::{DateTime, Local};

/// Severity classification for a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Warning,
    Error,
    Information,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Success => "Success",
            Severity::Warning => "Warning",
            Severity::Error => "Error",
            Severity::Information => "Info",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Message {
    pub severity: Severity,
    pub title: String,
    pub description: String,
    pub subtitle: String,
    /// Occurrence count; always 1 for now since appends never merge.
    pub counter: u32,
    pub timestamp: DateTime<Local>,
}

impl Message {
    pub fn new(
        severity: Severity,
        title: impl Into<String>,
        description: impl Into<String>,
        subtitle: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            title: title.into(),
            description: description.into(),
            subtitle: subtitle.into(),
            counter: 1,
            timestamp: Local::now(),
        }
    }
}

/// Owner of the ordered message sequence shown in the notification panel.
#[derive(Debug)]
pub struct MessageCenter {
    messages: Vec<Message>,
}

impl Default for MessageCenter {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageCenter {
    /// Starts with exactly one readiness message.
    pub fn new() -> Self {
        Self {
            messages: vec![Message::new(
                Severity::Success,
                "System Information",
                "Reference data loaded, employee form ready",
                "Startup complete",
            )],
        }
    }

    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn list(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_single_success_message() {
        let center = MessageCenter::new();
        assert_eq!(center.len(), 1);
        assert_eq!(center.list()[0].severity, Severity::Success);
    }

    #[test]
    fn test_append_preserves_order_and_grows_by_one() {
        let mut center = MessageCenter::new();
        let before = center.len();

        center.append(Message::new(Severity::Error, "first", "", ""));
        assert_eq!(center.len(), before + 1);

        center.append(Message::new(Severity::Warning, "second", "", ""));
        assert_eq!(center.len(), before + 2);

        let titles: Vec<&str> = center.list().iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles[before..], ["first", "second"]);
    }

    #[test]
    fn test_identical_appends_are_not_merged() {
        let mut center = MessageCenter::new();
        center.append(Message::new(Severity::Information, "dup", "same", "x"));
        center.append(Message::new(Severity::Information, "dup", "same", "x"));
        assert_eq!(center.len(), 3);
        assert_eq!(center.list()[1].counter, 1);
        assert_eq!(center.list()[2].counter, 1);
    }

    #[test]
    fn test_clear_empties_the_list() {
        let mut center = MessageCenter::new();
        center.append(Message::new(Severity::Error, "x", "", ""));
        center.clear();
        assert!(center.is_empty());
    }
}

//! NPC conversations.

/// One line of a conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Who says it (`"player"`, an NPC name).
    pub speaker: String,
    /// What is said. May contain line breaks.
    pub text: String,
}

impl Message {
    /// Creates a message.
    pub fn new(speaker: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            speaker: speaker.into(),
            text: text.into(),
        }
    }
}

/// Scripted conversation with a cursor.
///
/// A fresh dialog has no current message; the first [`Dialog::advance`]
/// shows the first line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    messages: Vec<Message>,
    /// Index of the next message to show.
    next: usize,
}

impl Dialog {
    /// Creates a dialog positioned before the first message.
    #[must_use]
    pub fn new(messages: Vec<Message>) -> Self {
        Self { messages, next: 0 }
    }

    /// Moves to the next message. `None` once the conversation is over.
    pub fn advance(&mut self) -> Option<&Message> {
        if self.next <= self.messages.len() {
            self.next += 1;
        }
        self.current()
    }

    /// Message being shown, if any.
    #[must_use]
    pub fn current(&self) -> Option<&Message> {
        self.next.checked_sub(1).and_then(|i| self.messages.get(i))
    }

    /// Current text if `speaker` is the one talking.
    #[must_use]
    pub fn line_for(&self, speaker: &str) -> Option<&str> {
        self.current()
            .filter(|message| message.speaker == speaker)
            .map(|message| message.text.as_str())
    }

    /// `true` once every message was shown and advanced past.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.next > self.messages.len()
    }
}

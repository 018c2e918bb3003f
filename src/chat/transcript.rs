use super::directive::{ParsedDirective, ParsedReply};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender: Sender,
    pub raw_text: String,
    pub display_text: String,
    pub directives: Vec<ParsedDirective>,
    pub timestamp: DateTime<Local>,
}

impl ChatMessage {
    /// What the visitor typed or said. Shown as-is; user text never carries
    /// executable directives.
    pub fn user(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            sender: Sender::User,
            display_text: text.clone(),
            raw_text: text,
            directives: Vec::new(),
            timestamp: Local::now(),
        }
    }

    /// Bot message for an already parsed backend reply.
    pub fn bot_reply(raw_text: impl Into<String>, parsed: ParsedReply) -> Self {
        Self {
            sender: Sender::Bot,
            raw_text: raw_text.into(),
            display_text: parsed.display_text,
            directives: parsed.directives,
            timestamp: Local::now(),
        }
    }

    /// Locally generated bot text (greetings, offline replies). Stored
    /// verbatim: it may quote the visitor, so it is never scanned for
    /// directives.
    pub fn bot(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            sender: Sender::Bot,
            display_text: text.clone(),
            raw_text: text,
            directives: Vec::new(),
            timestamp: Local::now(),
        }
    }

    /// `HH:MM`, the way the widget shows it under each bubble.
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}

/// Ordered chat history for one widget.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    /// Seed the greeting when the transcript is empty. Returns whether a
    /// greeting was added.
    pub fn greet(&mut self, greeting: &str) -> bool {
        if !self.messages.is_empty() {
            return false;
        }
        self.messages.push(ChatMessage::bot(greeting));
        true
    }

    /// Drop every message and start over with `greeting`.
    pub fn clear(&mut self, greeting: &str) {
        self.messages.clear();
        self.messages.push(ChatMessage::bot(greeting));
    }
}

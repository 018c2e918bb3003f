use super::backend::ChatBackend;
use super::directive::{ParsedDirective, parse_reply};
use super::fallback::offline_reply;
use super::transcript::{ChatMessage, Transcript};
use crate::api::Catalog;
use crate::config::ChatbotConfig;
use crate::navigation::{NavigateMode, Navigator};
use crate::theme::{Theme, ThemeStore, apply_ui_action};
use crate::voice::{Speaker, speech_text};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// A canned prompt offered under the widget header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suggestion {
    pub label: &'static str,
    pub text: &'static str,
}

pub const SUGGESTIONS: [Suggestion; 4] = [
    Suggestion {
        label: "📦 Products",
        text: "Show me your products",
    },
    Suggestion {
        label: "📞 Contact",
        text: "How can I contact SD Herbs?",
    },
    Suggestion {
        label: "🌿 About",
        text: "Tell me about SD Herbs",
    },
    Suggestion {
        label: "💊 Best Sellers",
        text: "What are your best selling products?",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOrigin {
    /// Typed text or a suggestion chip. Leaves voice mode.
    Typed,
    /// A speech transcript. Enters voice mode.
    Voice,
}

/// What one exchange did besides appending messages.
#[derive(Debug, Clone)]
pub struct TurnOutcome {
    pub reply: ChatMessage,
    pub navigated_to: Option<String>,
    pub theme_changed: bool,
    /// The reply came from the local offline responder.
    pub offline: bool,
    pub audio: Option<PathBuf>,
}

pub struct ChatWidget {
    backend: Arc<dyn ChatBackend>,
    catalog: Arc<dyn Catalog>,
    navigator: Arc<dyn Navigator>,
    theme: ThemeStore,
    speaker: Option<Speaker>,
    settings: ChatbotConfig,
    transcript: Transcript,
    voice_mode: bool,
    muted: bool,
}

impl ChatWidget {
    pub fn new(
        backend: Arc<dyn ChatBackend>,
        catalog: Arc<dyn Catalog>,
        navigator: Arc<dyn Navigator>,
        theme: ThemeStore,
        settings: ChatbotConfig,
    ) -> Self {
        Self {
            backend,
            catalog,
            navigator,
            theme,
            speaker: None,
            settings,
            transcript: Transcript::default(),
            voice_mode: false,
            muted: false,
        }
    }

    pub fn with_speaker(mut self, speaker: Option<Speaker>) -> Self {
        self.speaker = speaker;
        self
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn is_voice_mode(&self) -> bool {
        self.voice_mode
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Open the widget; greets on an empty transcript.
    pub fn open(&mut self) -> Option<&ChatMessage> {
        if self.transcript.greet(&self.settings.greeting) {
            self.transcript.last()
        } else {
            None
        }
    }

    pub fn clear(&mut self) -> Option<&ChatMessage> {
        self.transcript.clear(&self.settings.cleared_greeting);
        self.transcript.last()
    }

    /// Flip mute and return the new state.
    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }

    /// The explicit theme control. Shares the cell directives write to.
    pub fn toggle_theme(&self) -> Theme {
        self.theme.toggle()
    }

    /// Run one exchange.
    ///
    /// Returns `None` for blank input. Directives in the reply are applied
    /// before the bot message joins the transcript, and speech (voice mode,
    /// not muted) only ever sees the stripped and sanitized text.
    pub async fn send(&mut self, text: &str, origin: InputOrigin) -> Option<TurnOutcome> {
        self.voice_mode = origin == InputOrigin::Voice;

        if text.trim().is_empty() {
            debug!("empty message, not sending");
            return None;
        }

        self.transcript.push(ChatMessage::user(text));

        let mut navigated_to = None;
        let mut theme_changed = false;
        let mut offline = false;

        let reply = match self.backend.reply(text).await {
            Ok(raw) => {
                let parsed = parse_reply(&raw);
                for directive in &parsed.directives {
                    match directive {
                        ParsedDirective::Navigate { target_path } => {
                            info!(target = %target_path, "chatbot navigating");
                            self.navigator.navigate(target_path, NavigateMode::Push);
                            navigated_to = Some(target_path.clone());
                        }
                        ParsedDirective::UiAction { action_name } => {
                            info!(action = %action_name, "chatbot ui action");
                            theme_changed |= apply_ui_action(&self.theme, action_name);
                        }
                    }
                }

                if parsed.display_text.is_empty() {
                    offline = true;
                    ChatMessage::bot(self.offline_text(text).await)
                } else {
                    ChatMessage::bot_reply(raw, parsed)
                }
            }
            Err(e) => {
                warn!("chatbot backend unreachable, answering offline: {e}");
                offline = true;
                ChatMessage::bot(self.offline_text(text).await)
            }
        };

        self.transcript.push(reply.clone());

        let audio = if self.voice_mode && !self.muted {
            self.speak(&reply.display_text).await
        } else {
            None
        };

        Some(TurnOutcome {
            reply,
            navigated_to,
            theme_changed,
            offline,
            audio,
        })
    }

    async fn offline_text(&self, user_text: &str) -> String {
        offline_reply(self.catalog.as_ref(), &self.settings.contact, user_text).await
    }

    async fn speak(&self, display_text: &str) -> Option<PathBuf> {
        let speaker = self.speaker.as_ref()?;
        let spoken = speech_text(display_text);
        if spoken.trim().is_empty() {
            return None;
        }
        match speaker.speak(&spoken).await {
            Ok(path) => Some(path),
            Err(e) => {
                warn!("speech output failed: {e}");
                None
            }
        }
    }
}

mod api;
mod chatbot;
pub mod core;
mod voice;

pub use api::ApiConfig;
pub use chatbot::{ChatbotConfig, ContactConfig};
pub use core::{AdminConfig, Config, LoggingConfig};
pub use voice::{VoiceConfig, VoiceProvider};

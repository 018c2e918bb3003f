pub mod schema;

pub use schema::{
    AdminConfig, ApiConfig, ChatbotConfig, Config, ContactConfig, LoggingConfig, VoiceConfig,
    VoiceProvider,
};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatbotConfig {
    /// Chat endpoint, relative to `api.base_url`
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Catalog endpoint consulted by the offline reply
    #[serde(default = "default_products_endpoint")]
    pub products_endpoint: String,
    /// First bot message when the widget opens on an empty transcript
    #[serde(default = "default_greeting")]
    pub greeting: String,
    /// Bot message seeded after the transcript is cleared
    #[serde(default = "default_cleared_greeting")]
    pub cleared_greeting: String,
    #[serde(default)]
    pub contact: ContactConfig,
}

fn default_endpoint() -> String {
    "/chatbot".into()
}

fn default_products_endpoint() -> String {
    "/products".into()
}

fn default_greeting() -> String {
    "Hello 👋, I’m your SD Herbs Assistant. How can I help you today?".into()
}

fn default_cleared_greeting() -> String {
    "Chat cleared! 🧹 How can I help you now?".into()
}

impl Default for ChatbotConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            products_endpoint: default_products_endpoint(),
            greeting: default_greeting(),
            cleared_greeting: default_cleared_greeting(),
            contact: ContactConfig::default(),
        }
    }
}

/// Contact details quoted by the offline reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactConfig {
    #[serde(default = "default_address")]
    pub address: String,
    #[serde(default = "default_phone")]
    pub phone: String,
    #[serde(default = "default_email")]
    pub email: String,
}

fn default_address() -> String {
    "Mandsaur, Madhya Pradesh, India".into()
}

fn default_phone() -> String {
    "+91 98931 56792".into()
}

fn default_email() -> String {
    "info@sdherbs.com".into()
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            phone: default_phone(),
            email: default_email(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_chatbot_config() {
        let config = ChatbotConfig::default();
        assert_eq!(config.endpoint, "/chatbot");
        assert_eq!(config.products_endpoint, "/products");
        assert!(config.greeting.contains("SD Herbs Assistant"));
        assert_eq!(config.contact.email, "info@sdherbs.com");
    }

    #[test]
    fn contact_overrides_merge_with_defaults() {
        let config: ChatbotConfig = toml::from_str(
            r#"
            [contact]
            phone = "+91 00000 00000"
            "#,
        )
        .unwrap();
        assert_eq!(config.contact.phone, "+91 00000 00000");
        assert_eq!(config.contact.address, "Mandsaur, Madhya Pradesh, India");
        assert_eq!(config.endpoint, "/chatbot");
    }
}

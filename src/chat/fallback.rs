use crate::api::Catalog;
use crate::api::catalog::find_mentioned;
use crate::config::ContactConfig;
use tracing::warn;

const CONNECTION_ISSUE: &str =
    "I'm facing connection issues 😕. Please try again later or reach out via our Contact page.";

/// Reply composed locally when the chatbot service is unreachable or has
/// nothing to say.
pub async fn offline_reply(catalog: &dyn Catalog, contact: &ContactConfig, user_text: &str) -> String {
    let products = match catalog.products().await {
        Ok(products) => products,
        Err(e) => {
            warn!("catalog unavailable for offline reply: {e}");
            return CONNECTION_ISSUE.to_string();
        }
    };

    if let Some(product) = find_mentioned(&products, user_text) {
        return format!("🌿 *{}* — {}", product.name, product.description);
    }

    format!(
        "I'm sorry 🤔, I couldn’t find specific information for \"{user_text}\".\n\
         But you can reach out to us directly:\n\
         📍 {}\n\
         📞 {}\n\
         📧 {}\n\n\
         Or send your question via our Contact page — we’ll get back to you soon.",
        contact.address, contact.phone, contact.email
    )
}

use crate::api::ApiClient;
use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;

pub type ReplyFuture<'a> = Pin<Box<dyn Future<Output = Result<String, ApiError>> + Send + 'a>>;

/// The chatbot service. One request per visitor message.
pub trait ChatBackend: Send + Sync {
    fn reply<'a>(&'a self, message: &'a str) -> ReplyFuture<'a>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    reply: Option<String>,
}

/// `POST <endpoint> {message}` → `{reply}`. A missing `reply` reads as empty.
#[derive(Debug, Clone)]
pub struct HttpChatBackend {
    client: ApiClient,
    endpoint: String,
}

impl HttpChatBackend {
    pub fn new(client: ApiClient, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

impl ChatBackend for HttpChatBackend {
    fn reply<'a>(&'a self, message: &'a str) -> ReplyFuture<'a> {
        Box::pin(async move {
            let response: ChatResponse = self
                .client
                .post_json(&self.endpoint, &ChatRequest { message })
                .await?;
            Ok(response.reply.unwrap_or_default())
        })
    }
}

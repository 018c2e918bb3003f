pub mod catalog;
pub mod credentials;
pub mod http_client;
pub mod scrub;

use crate::config::ApiConfig;
use crate::error::ApiError;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

pub use catalog::{Catalog, HttpCatalog, Product, list_products};
pub use credentials::{Credentials, CredentialStore};
pub use http_client::build_client;

/// Thin wrapper over the storefront REST backend.
///
/// Every call is relative to `base_url`; a stored admin token, when present,
/// travels as a bearer header next to the session cookie.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    client: Client,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let parsed = url::Url::parse(&config.base_url)
            .map_err(|e| ApiError::InvalidBaseUrl(format!("{}: {e}", config.base_url)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ApiError::InvalidBaseUrl(config.base_url.clone()));
        }
        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client: build_client(config),
            token: None,
        })
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.client.request(method, self.endpoint(path));
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send(&self, path: &str, builder: RequestBuilder) -> Result<Response, ApiError> {
        let response = builder.send().await.map_err(|e| ApiError::Request {
            endpoint: path.to_string(),
            message: e.to_string(),
        })?;

        if !response.status().is_success() {
            return Err(api_error(path, response).await);
        }
        Ok(response)
    }

    /// `GET` whose body is irrelevant; only the status is checked.
    pub async fn get_status(&self, path: &str) -> Result<(), ApiError> {
        self.send(path, self.request(Method::GET, path)).await?;
        Ok(())
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send(path, self.request(Method::GET, path)).await?;
        decode(path, response).await
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .send(path, self.request(Method::POST, path).json(body))
            .await?;
        decode(path, response).await
    }

    /// `POST` without a body, ignoring the response payload.
    pub async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        self.send(path, self.request(Method::POST, path)).await?;
        Ok(())
    }

    /// `POST` a JSON body and return the status with the unscrubbed body.
    ///
    /// A non-2xx status is not an error here. Only transport failures and
    /// unreadable bodies are.
    pub async fn post_json_raw<B>(&self, path: &str, body: &B) -> Result<(u16, String), ApiError>
    where
        B: Serialize + ?Sized,
    {
        let response = self
            .request(Method::POST, path)
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Request {
                endpoint: path.to_string(),
                message: e.to_string(),
            })?;
        let status = response.status().as_u16();
        let text = response.text().await.map_err(|e| ApiError::Decode {
            endpoint: path.to_string(),
            message: e.to_string(),
        })?;
        Ok((status, text))
    }

    /// `POST` a JSON body and return the raw response bytes (audio).
    pub async fn post_for_bytes<B>(&self, path: &str, body: &B) -> Result<Vec<u8>, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let response = self
            .send(path, self.request(Method::POST, path).json(body))
            .await?;
        let bytes = response.bytes().await.map_err(|e| ApiError::Decode {
            endpoint: path.to_string(),
            message: e.to_string(),
        })?;
        Ok(bytes.to_vec())
    }
}

async fn decode<T: DeserializeOwned>(path: &str, response: Response) -> Result<T, ApiError> {
    response.json().await.map_err(|e| ApiError::Decode {
        endpoint: path.to_string(),
        message: e.to_string(),
    })
}

/// Turn a non-2xx response into an [`ApiError::Status`] with a scrubbed body.
pub async fn api_error(endpoint: &str, response: Response) -> ApiError {
    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "<failed to read response body>".to_string());
    ApiError::Status {
        endpoint: endpoint.to_string(),
        status,
        body: scrub::sanitize_api_error(&body),
    }
}

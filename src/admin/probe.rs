use crate::api::ApiClient;
use crate::error::ApiError;
use std::future::Future;
use std::pin::Pin;

pub type ProbeFuture<'a> = Pin<Box<dyn Future<Output = Result<(), ApiError>> + Send + 'a>>;

/// Asks the backend who the current caller is. Success means a confirmed
/// admin session; any error means there is none.
pub trait IdentityProbe: Send + Sync {
    fn whoami(&self) -> ProbeFuture<'_>;
}

/// `GET <identity_endpoint>`; 2xx is success, the body is not inspected.
#[derive(Debug, Clone)]
pub struct HttpIdentityProbe {
    client: ApiClient,
    endpoint: String,
}

impl HttpIdentityProbe {
    pub fn new(client: ApiClient, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

impl IdentityProbe for HttpIdentityProbe {
    fn whoami(&self) -> ProbeFuture<'_> {
        Box::pin(async move { self.client.get_status(&self.endpoint).await })
    }
}

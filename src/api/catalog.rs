use super::ApiClient;
use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;

/// A storefront product as the catalog endpoint returns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default, alias = "_id")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

pub async fn list_products(client: &ApiClient, endpoint: &str) -> Result<Vec<Product>, ApiError> {
    client.get_json(endpoint).await
}

pub type ProductsFuture<'a> =
    Pin<Box<dyn Future<Output = Result<Vec<Product>, ApiError>> + Send + 'a>>;

/// Source of the product list.
pub trait Catalog: Send + Sync {
    fn products(&self) -> ProductsFuture<'_>;
}

/// Catalog served by the storefront backend.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: ApiClient,
    endpoint: String,
}

impl HttpCatalog {
    pub fn new(client: ApiClient, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

impl Catalog for HttpCatalog {
    fn products(&self) -> ProductsFuture<'_> {
        Box::pin(list_products(&self.client, &self.endpoint))
    }
}

/// First product whose name occurs in `text`, ignoring case.
pub fn find_mentioned<'a>(products: &'a [Product], text: &str) -> Option<&'a Product> {
    let haystack = text.to_lowercase();
    products
        .iter()
        .filter(|p| !p.name.trim().is_empty())
        .find(|p| haystack.contains(&p.name.to_lowercase()))
}

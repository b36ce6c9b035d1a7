//! Core `adapters` crate for abstracting the portfolio page's external services.
//!
//! This crate defines the `PortfolioApi` trait, which outlines the comment and
//! account endpoints the page consumes, and the `MapAdapter` trait standing in
//! for the third-party mapping library. Concrete implementations live in
//! [`http`] (the backend over HTTP) and [`static_maps`] (Google Maps Static API).

pub mod errors;
pub mod http;
pub mod models;
pub mod static_maps;

use async_trait::async_trait;

pub use errors::AdapterError;
pub use http::{Endpoints, HttpPortfolioApi};
pub use models::*;
pub use static_maps::StaticMapsAdapter;

/// The backend endpoints the page talks to.
#[async_trait]
pub trait PortfolioApi: Send + Sync {
    /// Fetch at most `max_comments` comments in server order.
    async fn list_comments(&self, max_comments: usize) -> Result<Vec<Comment>, AdapterError>;

    /// Ask the server to drop every stored comment. The response body is ignored.
    async fn delete_comments(&self) -> Result<(), AdapterError>;

    async fn get_account(&self) -> Result<Credentials, AdapterError>;

    /// Submit a new comment through the same form endpoint the page posts to.
    async fn post_comment(&self, name: &str, body: &str) -> Result<(), AdapterError>;
}

/// The slice of a mapping library the page needs.
#[async_trait]
pub trait MapAdapter: Send + Sync {
    /// Load the provider's script with `api_key`. Must succeed before any map
    /// is created.
    async fn load(&self, api_key: &str) -> Result<(), AdapterError>;

    fn create_map(&self, options: MapOptions) -> Result<MapHandle, AdapterError>;

    fn add_marker(&self, map: MapHandle, marker: MarkerSpec) -> Result<(), AdapterError>;

    /// URL of the rendered map, for embedding in the page's map container.
    fn embed_url(&self, map: MapHandle) -> Result<String, AdapterError>;
}

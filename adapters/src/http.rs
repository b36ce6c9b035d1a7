//! HTTP implementation of `PortfolioApi` on top of `reqwest`.
//!
//! Requests carry no timeout or retry of their own; a failed call surfaces as
//! an `AdapterError` and the caller decides what to do with it.

use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, redirect, Client, Response};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::{AdapterError, Comment, Credentials, PortfolioApi};

/// Paths of the backend endpoints, relative to the API base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub list_comments: String,
    pub delete_comments: String,
    pub get_account: String,
    pub new_comment: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            list_comments: "/list-comments".into(),
            delete_comments: "/delete-comments".into(),
            get_account: "/get-account".into(),
            new_comment: "/new-comment".into(),
        }
    }
}

pub struct HttpPortfolioApi {
    client: Client,
    base: Url,
    endpoints: Endpoints,
}

impl HttpPortfolioApi {
    pub fn new(base_url: &str) -> Result<Self, AdapterError> {
        Self::with_endpoints(base_url, Endpoints::default())
    }

    pub fn with_endpoints(base_url: &str, endpoints: Endpoints) -> Result<Self, AdapterError> {
        // The comment form answers with a redirect back to the page; that is
        // the success signal, so it must not be followed.
        let client = Client::builder()
            .redirect(redirect::Policy::none())
            .build()
            .map_err(|err| AdapterError::Transport(err.to_string()))?;

        // Endpoint paths resolve below the base, so it must end in a slash.
        let mut base = Url::parse(base_url)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        Ok(Self {
            client,
            base,
            endpoints,
        })
    }

    fn url(&self, path: &str) -> Result<Url, AdapterError> {
        Ok(self.base.join(path.trim_start_matches('/'))?)
    }
}

fn check_status(endpoint: &str, response: Response) -> Result<Response, AdapterError> {
    let status = response.status();
    if status.is_success() || status.is_redirection() {
        Ok(response)
    } else {
        Err(AdapterError::Status {
            endpoint: endpoint.to_string(),
            status: status.as_u16(),
        })
    }
}

async fn read_json<T: DeserializeOwned>(endpoint: &str, response: Response) -> Result<T, AdapterError> {
    let text = response
        .text()
        .await
        .map_err(|err| AdapterError::Transport(err.to_string()))?;

    serde_json::from_str(&text).map_err(|err| AdapterError::MalformedResponse {
        endpoint: endpoint.to_string(),
        reason: err.to_string(),
    })
}

#[async_trait]
impl PortfolioApi for HttpPortfolioApi {
    async fn list_comments(&self, max_comments: usize) -> Result<Vec<Comment>, AdapterError> {
        let endpoint = &self.endpoints.list_comments;
        debug!(%endpoint, max_comments, "fetching comments");

        let response = self
            .client
            .get(self.url(endpoint)?)
            .query(&[("max-comments", max_comments)])
            .send()
            .await
            .map_err(|err| AdapterError::Transport(err.to_string()))?;

        read_json(endpoint, check_status(endpoint, response)?).await
    }

    async fn delete_comments(&self) -> Result<(), AdapterError> {
        let endpoint = &self.endpoints.delete_comments;
        debug!(%endpoint, "deleting all comments");

        let response = self
            .client
            .post(self.url(endpoint)?)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body("")
            .send()
            .await
            .map_err(|err| AdapterError::Transport(err.to_string()))?;

        check_status(endpoint, response)?;
        Ok(())
    }

    async fn get_account(&self) -> Result<Credentials, AdapterError> {
        let endpoint = &self.endpoints.get_account;
        debug!(%endpoint, "fetching account state");

        let response = self
            .client
            .get(self.url(endpoint)?)
            .send()
            .await
            .map_err(|err| AdapterError::Transport(err.to_string()))?;

        read_json(endpoint, check_status(endpoint, response)?).await
    }

    async fn post_comment(&self, name: &str, body: &str) -> Result<(), AdapterError> {
        let endpoint = &self.endpoints.new_comment;
        debug!(%endpoint, "posting comment");

        let response = self
            .client
            .post(self.url(endpoint)?)
            .form(&[("custom", name), ("text-input", body)])
            .send()
            .await
            .map_err(|err| AdapterError::Transport(err.to_string()))?;

        check_status(endpoint, response)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        extract::{Form, Query},
        http::{header::LOCATION, StatusCode},
        response::IntoResponse,
        routing::{get, post},
        Json, Router,
    };
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn list_comments_sends_the_limit_and_keeps_server_order() {
        let router = Router::new().route(
            "/list-comments",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                assert_eq!(params.get("max-comments").map(String::as_str), Some("2"));
                Json(serde_json::json!([
                    {"id": 1, "name": "B", "body": "yo", "timestamp": 2},
                    {"id": 2, "name": "A", "body": "hi", "timestamp": 1},
                ]))
            }),
        );
        let api = HttpPortfolioApi::new(&serve(router).await).unwrap();

        let comments = api.list_comments(2).await.unwrap();
        assert_eq!(comments, vec![Comment::new("B", "yo"), Comment::new("A", "hi")]);
    }

    #[tokio::test]
    async fn malformed_listing_is_reported() {
        let router = Router::new().route("/list-comments", get(|| async { "not json" }));
        let api = HttpPortfolioApi::new(&serve(router).await).unwrap();

        let err = api.list_comments(5).await.unwrap_err();
        assert!(matches!(err, AdapterError::MalformedResponse { .. }), "{err}");
    }

    #[tokio::test]
    async fn server_errors_surface_as_status() {
        let router = Router::new().route(
            "/get-account",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );
        let api = HttpPortfolioApi::new(&serve(router).await).unwrap();

        let err = api.get_account().await.unwrap_err();
        assert!(matches!(err, AdapterError::Status { status: 500, .. }), "{err}");
    }

    #[tokio::test]
    async fn get_account_decodes_credentials() {
        let router = Router::new().route(
            "/get-account",
            get(|| async {
                Json(serde_json::json!({
                    "nickname": "ada",
                    "authenticationUrl": "/_ah/logout?continue=/comments.html",
                    "isLoggedIn": true,
                }))
            }),
        );
        let api = HttpPortfolioApi::new(&serve(router).await).unwrap();

        let creds = api.get_account().await.unwrap();
        assert_eq!(creds.nickname, "ada");
        assert_eq!(creds.authentication_url, "/_ah/logout?continue=/comments.html");
        assert!(creds.is_logged_in);
    }

    #[tokio::test]
    async fn delete_ignores_the_response_body() {
        let router = Router::new().route("/delete-comments", post(|| async { "whatever" }));
        let api = HttpPortfolioApi::new(&serve(router).await).unwrap();

        api.delete_comments().await.unwrap();
    }

    #[tokio::test]
    async fn post_comment_sends_form_fields_and_accepts_redirect() {
        let router = Router::new().route(
            "/new-comment",
            post(|Form(fields): Form<HashMap<String, String>>| async move {
                assert_eq!(fields.get("custom").map(String::as_str), Some("ada"));
                assert_eq!(fields.get("text-input").map(String::as_str), Some("hello"));
                (StatusCode::SEE_OTHER, [(LOCATION, "/comments.html")]).into_response()
            }),
        );
        let api = HttpPortfolioApi::new(&serve(router).await).unwrap();

        api.post_comment("ada", "hello").await.unwrap();
    }

    #[test]
    fn endpoints_resolve_below_the_base_path() {
        for base in ["http://host/portfolio", "http://host/portfolio/"] {
            let api = HttpPortfolioApi::new(base).unwrap();
            assert_eq!(
                api.url("/list-comments").unwrap().as_str(),
                "http://host/portfolio/list-comments"
            );
        }

        let api = HttpPortfolioApi::new("http://host").unwrap();
        assert_eq!(
            api.url("/get-account").unwrap().as_str(),
            "http://host/get-account"
        );
    }

    #[tokio::test]
    async fn prefixed_backends_are_reachable() {
        let router = Router::new().route(
            "/portfolio/list-comments",
            get(|| async { Json(serde_json::json!([{"name": "A", "body": "hi"}])) }),
        );
        let api = HttpPortfolioApi::new(&format!("{}/portfolio", serve(router).await)).unwrap();

        assert_eq!(api.list_comments(5).await.unwrap(), vec![Comment::new("A", "hi")]);
    }

    #[tokio::test]
    async fn custom_endpoints_are_honoured() {
        let router = Router::new().route("/api/comments", get(|| async { Json(serde_json::json!([])) }));
        let endpoints = Endpoints {
            list_comments: "/api/comments".into(),
            ..Endpoints::default()
        };
        let api = HttpPortfolioApi::with_endpoints(&serve(router).await, endpoints).unwrap();

        assert!(api.list_comments(5).await.unwrap().is_empty());
    }
}

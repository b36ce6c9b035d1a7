//! Defines the HTTP routes for the comments API.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{delete_comments, list_comments, new_comment};
use crate::state::AppState;

pub fn comments_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/list-comments", get(list_comments))
        .route("/new-comment", post(new_comment))
        .route("/delete-comments", post(delete_comments))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::{app, config::Config, state::AppState};
    use axum::{
        body::{to_bytes, Body},
        http::{header::CONTENT_TYPE, header::LOCATION, Request, StatusCode},
        Router,
    };
    use pretty_assertions::assert_eq;
    use tower::ServiceExt;

    fn form(uri: &str, body: &str) -> Request<Body> {
        Request::post(uri)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Option<String>, String) {
        let response = router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, location, String::from_utf8(bytes.to_vec()).unwrap())
    }

    async fn listing(router: &Router, uri: &str) -> Vec<(String, String)> {
        let (status, _, body) = send(router, Request::get(uri).body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        let json: Vec<serde_json::Value> = serde_json::from_str(&body).unwrap();
        json.iter()
            .map(|c| {
                (
                    c["name"].as_str().unwrap().to_string(),
                    c["body"].as_str().unwrap().to_string(),
                )
            })
            .collect()
    }

    fn setup() -> (Arc<AppState>, Router) {
        let state = AppState::new(Config::default());
        (state.clone(), app(state))
    }

    #[tokio::test]
    async fn new_comment_redirects_back_to_the_page() {
        let (state, router) = setup();

        let (status, location, _) =
            send(&router, form("/new-comment", "custom=Ada&text-input=hello+there")).await;

        assert_eq!(status, StatusCode::SEE_OTHER);
        assert_eq!(location.as_deref(), Some("/comments.html"));
        let stored = state.comments.list(5).await;
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].name, "Ada");
        assert_eq!(stored[0].body, "hello there");
    }

    #[tokio::test]
    async fn nameless_comments_are_anonymous() {
        let (_, router) = setup();
        send(&router, form("/new-comment", "custom=&text-input=hi")).await;
        send(&router, form("/new-comment", "text-input=yo")).await;

        assert_eq!(
            listing(&router, "/list-comments?max-comments=5").await,
            vec![
                ("Anonymous".to_string(), "hi".to_string()),
                ("Anonymous".to_string(), "yo".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn empty_bodies_are_stored() {
        let (state, router) = setup();
        let (status, location, _) =
            send(&router, form("/new-comment", "custom=Ada&text-input=")).await;

        assert_eq!(status, StatusCode::SEE_OTHER);
        assert_eq!(location.as_deref(), Some("/comments.html"));
        let stored = state.comments.list(5).await;
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].name, "Ada");
        assert_eq!(stored[0].body, "");
    }

    #[tokio::test]
    async fn listing_honours_the_limit_and_default() {
        let (state, router) = setup();
        for (i, name) in ["a", "b", "c", "d", "e", "f"].into_iter().enumerate() {
            state.comments.insert(name, "x", i as i64).await;
        }

        assert_eq!(listing(&router, "/list-comments?max-comments=2").await.len(), 2);
        assert_eq!(listing(&router, "/list-comments?max-comments=0").await.len(), 0);
        assert_eq!(listing(&router, "/list-comments").await.len(), 5);
        assert_eq!(listing(&router, "/list-comments?max-comments=nope").await.len(), 5);
        assert_eq!(listing(&router, "/list-comments?max-comments=-1").await.len(), 6);
        assert_eq!(
            listing(&router, "/list-comments?max-comments=10").await[0].0,
            "a"
        );
    }

    #[tokio::test]
    async fn delete_clears_everything() {
        let (state, router) = setup();
        state.comments.add("a", "x").await;
        state.comments.add("b", "y").await;

        let (status, _, body) = send(&router, form("/delete-comments", "")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Deleted 2 comments");
        assert!(listing(&router, "/list-comments?max-comments=5").await.is_empty());
    }
}

//! Handler functions for the comments API.
//!
//! These functions parse the listing limit and the comment form, delegate to
//! `services::comment_store`, and format the responses.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Redirect,
    Form, Json,
};
use serde::Deserialize;
use tracing::{info, warn};

use crate::{auth::ANONYMOUS, services::StoredComment, state::AppState};

#[derive(Deserialize, Debug, Default)]
pub struct ListParams {
    #[serde(rename = "max-comments")]
    pub max_comments: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct NewComment {
    #[serde(default)]
    pub custom: String,
    #[serde(rename = "text-input", default)]
    pub text_input: String,
}

/// Missing or unparsable limits fall back to `default`; a negative limit
/// lists every comment.
pub fn parse_max_comments(raw: Option<&str>, default: usize) -> usize {
    let Some(raw) = raw else {
        return default;
    };
    match raw.trim().parse::<i64>() {
        Ok(limit) => usize::try_from(limit).unwrap_or(usize::MAX),
        Err(err) => {
            warn!("Could not convert max-comments {raw:?}: {err}, using {default}");
            default
        }
    }
}

pub async fn list_comments(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Json<Vec<StoredComment>> {
    let max = parse_max_comments(
        params.max_comments.as_deref(),
        state.config.default_max_comments,
    );
    Json(state.comments.list(max).await)
}

pub async fn new_comment(
    State(state): State<Arc<AppState>>,
    Form(form): Form<NewComment>,
) -> Redirect {
    let name = if form.custom.is_empty() {
        ANONYMOUS
    } else {
        form.custom.as_str()
    };
    let comment = state.comments.add(name, &form.text_input).await;
    info!(id = comment.id, "comment added");

    Redirect::to(&state.config.comments_page)
}

pub async fn delete_comments(State(state): State<Arc<AppState>>) -> (StatusCode, String) {
    let removed = state.comments.clear().await;
    info!(removed, "comments deleted");
    (StatusCode::OK, format!("Deleted {removed} comments"))
}

//! Defines the HTTP route for the account status.
//!
//! Designed to be merged into the main Axum router.

use std::sync::Arc;

use axum::{routing::get, Router};

use super::handlers::get_account;
use crate::state::AppState;

pub fn account_router() -> Router<Arc<AppState>> {
    Router::new().route("/get-account", get(get_account))
}

//! Handler functions for the account endpoint.

use std::sync::Arc;

use axum::{extract::State, http::HeaderMap, Json};
use portfolio_adapters::Credentials;
use tracing::debug;

use crate::{errors::AppError, state::AppState};

pub async fn get_account(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Credentials>, AppError> {
    let identity = headers
        .get(state.config.identity_header.as_str())
        .map(|value| {
            value
                .to_str()
                .map_err(|_| AppError::InvalidIdentity("header is not visible ASCII".into()))
        })
        .transpose()?;

    let credentials = state.accounts.credentials(identity)?;
    debug!(logged_in = credentials.is_logged_in, "resolved account");
    Ok(Json(credentials))
}

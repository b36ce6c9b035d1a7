//! Custom error types specific to the `adapters` crate.
//!
//! Every failure an adapter can hit while talking to the backend or to the
//! mapping service is folded into `AdapterError`, so callers see a single
//! result type regardless of which adapter produced it.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdapterError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Unexpected status {status} from {endpoint}")]
    Status { endpoint: String, status: u16 },

    #[error("Malformed response from {endpoint}: {reason}")]
    MalformedResponse { endpoint: String, reason: String },

    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Map script failed to load: {0}")]
    ScriptLoad(String),

    #[error("Unknown map handle {0}")]
    UnknownMap(u64),
}

//! Main entry point for the portfolio backend.
//!
//! Initializes logging and configuration, then serves the comments and
//! account routes until a shutdown signal arrives.

#[tokio::main]
async fn main() -> std::io::Result<()> {
    portfolio_backend::start_server().await
}

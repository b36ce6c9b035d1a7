//! Runs the page-load bootstrap headlessly against a live backend and prints
//! the resulting page as HTML.

use portfolio_adapters::{HttpPortfolioApi, StaticMapsAdapter};
use portfolio_frontend::{layout::portfolio_document, FrontendConfig, PageController, PageError};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), PageError> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = FrontendConfig::load();
    info!(api = %config.api_url, "rendering page");

    let api = HttpPortfolioApi::new(&config.api_url)?;
    let page = portfolio_document(&config.ids);
    let controller = PageController::new(page, api, StaticMapsAdapter::new(), config);

    controller.bootstrap().await;

    println!("{}", controller.into_page().to_html());
    Ok(())
}

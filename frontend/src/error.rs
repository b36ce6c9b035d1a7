use portfolio_adapters::AdapterError;
use thiserror::Error;

use crate::dom::DomError;

#[derive(Error, Debug)]
pub enum PageError {
    #[error(transparent)]
    Adapter(#[from] AdapterError),

    #[error(transparent)]
    Dom(#[from] DomError),

    #[error("No maps API key configured")]
    MissingMapKey,
}

//! Page controller for the portfolio comments page.
//!
//! Three independent behaviours share the page and nothing else:
//!
//! - comment sync: fetch the comment list, render it with a count label, and
//!   support deleting every comment;
//! - form gatekeeping: keep the submit control disabled while the comment
//!   field is empty;
//! - account and map bootstrap: show who is signed in with the matching
//!   login/logout link, and embed a themed map of favourite restaurants.
//!
//! The controller talks to the backend through `portfolio_adapters::PortfolioApi`
//! and to the mapping service through `portfolio_adapters::MapAdapter`, and
//! writes through the [`dom::Page`] trait.

pub mod account;
pub mod comments;
pub mod config;
pub mod controller;
pub mod dom;
pub mod error;
pub mod gatekeeping;
pub mod layout;
pub mod map;

pub use config::{ElementIds, FailurePolicy, FrontendConfig};
pub use controller::{BootstrapReport, PageController, SyncOutcome};
pub use dom::{Document, DomError, Element, Page};
pub use error::PageError;

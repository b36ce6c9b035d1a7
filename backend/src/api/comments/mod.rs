//! Module for the comments API.
//!
//! Listing, submitting and bulk-deleting the comments shown on the page.

pub mod handlers;
pub mod routes;

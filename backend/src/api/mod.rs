//! Central module for organizing the application's main API endpoints.
//!
//! Account status is served by the `auth` module and merged separately.

pub mod comments;

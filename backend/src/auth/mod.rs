//! Account module reporting who is signed in.
//!
//! Sign-in itself is handled by the proxy in front of the server; this module
//! reads the identity it forwards and turns it into the credentials the page
//! shows, with the matching login or logout link.

pub mod handlers;
pub mod routes;
pub mod service;

// Re-exports for convenience
pub use handlers::*;
pub use routes::*;
pub use service::*;

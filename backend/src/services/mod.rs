//! Module for core business logic services.
//!
//! This module encapsulates the services request handlers delegate to, such
//! as keeping the ordered list of submitted comments.

pub mod comment_store;

pub use comment_store::{CommentStore, StoredComment};

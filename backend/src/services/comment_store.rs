//! In-memory store of submitted comments.
//!
//! Comments are listed oldest first. Nothing survives a restart.

use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::{SystemTime, UNIX_EPOCH},
};

use serde::Serialize;
use tokio::sync::RwLock;
use tracing::debug;

/// A comment as the server keeps it and lists it.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct StoredComment {
    pub id: u64,
    pub name: String,
    pub body: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
}

#[derive(Default)]
pub struct CommentStore {
    comments: RwLock<Vec<StoredComment>>,
    next_id: AtomicU64,
}

fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or_default()
}

impl CommentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add(&self, name: &str, body: &str) -> StoredComment {
        self.insert(name, body, now_millis()).await
    }

    pub async fn insert(&self, name: &str, body: &str, timestamp: i64) -> StoredComment {
        let comment = StoredComment {
            id: self.next_id.fetch_add(1, Ordering::Relaxed) + 1,
            name: name.to_string(),
            body: body.to_string(),
            timestamp,
        };
        debug!(id = comment.id, "storing comment");
        self.comments.write().await.push(comment.clone());
        comment
    }

    /// At most `max` comments, ordered by timestamp ascending.
    pub async fn list(&self, max: usize) -> Vec<StoredComment> {
        let mut comments = self.comments.read().await.clone();
        comments.sort_by_key(|comment| (comment.timestamp, comment.id));
        comments.truncate(max);
        comments
    }

    /// Drops every comment, returning how many were removed.
    pub async fn clear(&self) -> usize {
        let mut comments = self.comments.write().await;
        let removed = comments.len();
        comments.clear();
        removed
    }
}

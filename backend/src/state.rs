use std::sync::Arc;

use super::{auth::AccountService, config::Config, services::CommentStore};

pub struct AppState {
    pub config: Config,
    pub comments: CommentStore,
    pub accounts: AccountService,
}

impl AppState {
    pub fn new(config: Config) -> Arc<Self> {
        let accounts = AccountService::new(&config);

        Arc::new(Self {
            config,
            comments: CommentStore::new(),
            accounts,
        })
    }
}

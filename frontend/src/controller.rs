//! The page controller: owns the page and the external adapters, and runs
//! the comment sync, form gatekeeping, account and map behaviours against
//! them.
//!
//! Every behaviour returns a `Result`. `bootstrap` and `settle` route
//! failures through the configured `FailurePolicy`; callers that want to
//! decide for themselves use the operations directly.

use std::sync::atomic::{AtomicU64, Ordering};

use portfolio_adapters::{Credentials, MapAdapter, MapHandle, PortfolioApi};
use tokio::sync::{Mutex, MutexGuard};
use tracing::{debug, info, warn};

use crate::{
    account::render_account,
    comments::render_comments,
    config::{FailurePolicy, FrontendConfig},
    dom::Page,
    error::PageError,
    gatekeeping::update_submit_state,
    map::{map_options, markers, render_legend, render_map, RESTAURANTS},
};

/// What a comment sync did to the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The list was replaced with this many comments.
    Rendered(usize),
    /// A newer sync was requested while this one was in flight; its response
    /// was discarded.
    Stale,
}

/// Results of the page-load behaviours, after the failure policy ran.
#[derive(Debug)]
pub struct BootstrapReport {
    pub account: Result<Credentials, PageError>,
    pub comments: Result<SyncOutcome, PageError>,
    /// `None` when no maps key is configured.
    pub map: Option<Result<MapHandle, PageError>>,
}

pub struct PageController<P, A, M> {
    page: Mutex<P>,
    api: A,
    maps: M,
    config: FrontendConfig,
    latest_sync: AtomicU64,
    map: Mutex<Option<MapHandle>>,
    /// Context whose failure notice is on the page.
    notice: Mutex<Option<String>>,
}

impl<P, A, M> PageController<P, A, M>
where
    P: Page,
    A: PortfolioApi,
    M: MapAdapter,
{
    pub fn new(page: P, api: A, maps: M, config: FrontendConfig) -> Self {
        Self {
            page: Mutex::new(page),
            api,
            maps,
            config,
            latest_sync: AtomicU64::new(0),
            map: Mutex::new(None),
            notice: Mutex::new(None),
        }
    }

    pub fn config(&self) -> &FrontendConfig {
        &self.config
    }

    pub async fn page(&self) -> MutexGuard<'_, P> {
        self.page.lock().await
    }

    pub fn into_page(self) -> P {
        self.page.into_inner()
    }

    /// Handle of the map created by `initialize_map`, if any.
    pub async fn map_handle(&self) -> Option<MapHandle> {
        *self.map.lock().await
    }

    /// Fetch up to `max_comments` comments and replace the rendered list.
    ///
    /// Only the most recently requested sync renders: a response that
    /// arrives after a newer request was issued is dropped, success or not.
    pub async fn refresh_comments(&self, max_comments: usize) -> Result<SyncOutcome, PageError> {
        let sequence = self.latest_sync.fetch_add(1, Ordering::SeqCst) + 1;
        let response = self.api.list_comments(max_comments).await;

        let mut page = self.page.lock().await;
        if sequence != self.latest_sync.load(Ordering::SeqCst) {
            debug!(sequence, "discarding stale comment sync");
            return Ok(SyncOutcome::Stale);
        }

        let comments = response?;
        render_comments(&mut *page, &self.config.ids, &comments)?;
        debug!(sequence, count = comments.len(), "rendered comments");
        Ok(SyncOutcome::Rendered(comments.len()))
    }

    /// Delete every comment server-side, then re-sync. The list is not
    /// touched until the server has answered.
    pub async fn delete_all_comments(&self) -> Result<SyncOutcome, PageError> {
        self.api.delete_comments().await?;
        info!("deleted all comments");
        self.refresh_comments(self.config.max_comments).await
    }

    /// Post a comment through the form endpoint, then re-sync.
    pub async fn submit_comment(&self, name: &str, body: &str) -> Result<SyncOutcome, PageError> {
        self.api.post_comment(name, body).await?;
        self.refresh_comments(self.config.max_comments).await
    }

    /// Input listener for the comment field. Returns whether the submit
    /// control is now disabled.
    pub async fn on_text_input(&self) -> Result<bool, PageError> {
        let mut page = self.page.lock().await;
        Ok(update_submit_state(&mut *page, &self.config.ids)?)
    }

    pub async fn load_account_state(&self) -> Result<Credentials, PageError> {
        let credentials = self.api.get_account().await?;
        render_account(&mut *self.page.lock().await, &self.config.ids, &credentials)?;
        Ok(credentials)
    }

    /// Load the map script, create the themed map, plot every restaurant and
    /// embed the result in the map container.
    pub async fn initialize_map(&self) -> Result<MapHandle, PageError> {
        let key = self
            .config
            .maps_key
            .as_deref()
            .ok_or(PageError::MissingMapKey)?;
        self.maps.load(key).await?;

        let handle = self.maps.create_map(map_options())?;
        let specs = markers(RESTAURANTS);
        for marker in &specs {
            self.maps.add_marker(handle, marker.clone())?;
        }
        let embed_url = self.maps.embed_url(handle)?;

        self.page.lock().await.replace_children(
            &self.config.ids.map,
            vec![render_map(&embed_url), render_legend(&specs)],
        )?;
        *self.map.lock().await = Some(handle);
        info!(markers = RESTAURANTS.len(), "map initialized");
        Ok(handle)
    }

    /// Page-load entry point: account state, first comment sync and the map
    /// run side by side; the submit control starts from the field's value.
    pub async fn bootstrap(&self) -> BootstrapReport {
        let map = async {
            if self.config.maps_key.is_some() {
                Some(self.initialize_map().await)
            } else {
                info!("no maps key configured, skipping map");
                None
            }
        };
        let (account, comments, map) = tokio::join!(
            self.load_account_state(),
            self.refresh_comments(self.config.max_comments),
            map,
        );

        self.resolve("account", account.as_ref().map(|_| ())).await;
        self.resolve("comments", comments.as_ref().map(|_| ())).await;
        if let Some(map) = &map {
            self.resolve("map", map.as_ref().map(|_| ())).await;
        }
        let gate = self.on_text_input().await;
        self.settle("form", gate).await;

        BootstrapReport {
            account,
            comments,
            map,
        }
    }

    /// Apply the failure policy to `result`, keeping the value on success. A
    /// success withdraws any notice left by an earlier failure of `context`.
    pub async fn settle<T>(&self, context: &str, result: Result<T, PageError>) -> Option<T> {
        self.resolve(context, result.as_ref().map(|_| ())).await;
        result.ok()
    }

    async fn resolve(&self, context: &str, result: Result<(), &PageError>) {
        match result {
            Ok(()) => self.clear_notice(context).await,
            Err(err) => self.report(context, err).await,
        }
    }

    async fn clear_notice(&self, context: &str) {
        let mut notice = self.notice.lock().await;
        if notice.as_deref() != Some(context) {
            return;
        }
        let mut page = self.page.lock().await;
        match page.set_text(&self.config.ids.status, "") {
            Ok(()) => *notice = None,
            Err(err) => warn!(context, "could not clear notice: {err}"),
        }
    }

    async fn report(&self, context: &str, err: &PageError) {
        match self.config.failure_policy {
            FailurePolicy::Silent => {}
            FailurePolicy::Log => warn!(context, "{err}"),
            FailurePolicy::Notice => {
                warn!(context, "{err}");
                let notice = format!("Could not load {context}. Please try again later.");
                let mut current = self.notice.lock().await;
                let mut page = self.page.lock().await;
                match page.set_text(&self.config.ids.status, &notice) {
                    Ok(()) => *current = Some(context.to_string()),
                    Err(dom_err) => warn!(context, "could not show notice: {dom_err}"),
                }
            }
        }
    }
}

//! Google Maps adapter rendering through the Static Maps API.
//!
//! `load` fetches the provider's script URL to confirm the key is usable; maps
//! and markers are then tracked locally and turned into a static image URL by
//! `embed_url`.

use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard, PoisonError},
};

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};
use url::Url;

use crate::{AdapterError, MapAdapter, MapHandle, MapOptions, MapStyleRule, MarkerSpec};

const SCRIPT_URL: &str = "https://maps.googleapis.com/maps/api/js";
const STATIC_URL: &str = "https://maps.googleapis.com/maps/api/staticmap";

struct MapState {
    options: MapOptions,
    markers: Vec<MarkerSpec>,
}

#[derive(Default)]
struct Inner {
    api_key: Option<String>,
    next_id: u64,
    maps: HashMap<u64, MapState>,
}

pub struct StaticMapsAdapter {
    client: Client,
    script_url: String,
    static_url: String,
    size: (u32, u32),
    inner: Mutex<Inner>,
}

impl Default for StaticMapsAdapter {
    fn default() -> Self {
        Self::with_base_urls(SCRIPT_URL, STATIC_URL)
    }
}

impl StaticMapsAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_urls(script_url: impl Into<String>, static_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            script_url: script_url.into(),
            static_url: static_url.into(),
            size: (640, 400),
            inner: Mutex::new(Inner::default()),
        }
    }

    /// Pixel size of the rendered image.
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }

    /// Markers of `map`, bottom-most first.
    pub fn markers(&self, map: MapHandle) -> Result<Vec<MarkerSpec>, AdapterError> {
        let inner = self.lock();
        let state = inner.maps.get(&map.0).ok_or(AdapterError::UnknownMap(map.0))?;
        let mut markers = state.markers.clone();
        markers.sort_by_key(|marker| marker.z_index);
        Ok(markers)
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn style_param(rule: &MapStyleRule) -> String {
    let mut parts = Vec::with_capacity(3);
    if let Some(feature) = rule.feature_type {
        parts.push(format!("feature:{feature}"));
    }
    if let Some(element) = rule.element_type {
        parts.push(format!("element:{element}"));
    }
    parts.push(format!("color:0x{}", rule.color.trim_start_matches('#')));
    parts.join("|")
}

/// Static markers only carry a single alphanumeric character as label.
fn marker_param(marker: &MarkerSpec) -> String {
    let label = marker
        .label
        .chars()
        .find(char::is_ascii_alphanumeric)
        .map(|c| format!("label:{}|", c.to_ascii_uppercase()))
        .unwrap_or_default();
    format!("{label}{},{}", marker.position.lat, marker.position.lng)
}

#[async_trait]
impl MapAdapter for StaticMapsAdapter {
    async fn load(&self, api_key: &str) -> Result<(), AdapterError> {
        let mut url = Url::parse(&self.script_url)?;
        url.query_pairs_mut().append_pair("key", api_key);
        debug!(script = %self.script_url, "loading maps script");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| AdapterError::ScriptLoad(err.to_string()))?;
        if !response.status().is_success() {
            return Err(AdapterError::ScriptLoad(format!(
                "script responded with {}",
                response.status()
            )));
        }

        self.lock().api_key = Some(api_key.to_string());
        info!("maps script loaded");
        Ok(())
    }

    fn create_map(&self, options: MapOptions) -> Result<MapHandle, AdapterError> {
        let mut inner = self.lock();
        if inner.api_key.is_none() {
            return Err(AdapterError::ScriptLoad("script not loaded".into()));
        }

        inner.next_id += 1;
        let id = inner.next_id;
        inner.maps.insert(
            id,
            MapState {
                options,
                markers: Vec::new(),
            },
        );
        Ok(MapHandle(id))
    }

    fn add_marker(&self, map: MapHandle, marker: MarkerSpec) -> Result<(), AdapterError> {
        let mut inner = self.lock();
        let state = inner
            .maps
            .get_mut(&map.0)
            .ok_or(AdapterError::UnknownMap(map.0))?;
        state.markers.push(marker);
        Ok(())
    }

    fn embed_url(&self, map: MapHandle) -> Result<String, AdapterError> {
        let markers = self.markers(map)?;
        let inner = self.lock();
        let state = inner.maps.get(&map.0).ok_or(AdapterError::UnknownMap(map.0))?;
        let options = &state.options;

        let mut url = Url::parse(&self.static_url)?;
        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair(
                    "center",
                    &format!("{},{}", options.center.lat, options.center.lng),
                )
                .append_pair("zoom", &options.zoom.to_string())
                .append_pair("size", &format!("{}x{}", self.size.0, self.size.1));
            for rule in &options.styles {
                query.append_pair("style", &style_param(rule));
            }
            // Later markers are drawn on top, so ascending z-order keeps the
            // stacking of the interactive map.
            for marker in &markers {
                query.append_pair("markers", &marker_param(marker));
            }
            if let Some(key) = &inner.api_key {
                query.append_pair("key", key);
            }
        }
        Ok(url.into())
    }
}

//! Generic data models for the `adapters` crate.
//!
//! These models define the wire representations exchanged with the portfolio
//! backend (comments, account credentials) and the abstract description of a
//! map (centre, zoom, style rules, markers) that any `MapAdapter`
//! implementation can consume.

use serde::{Deserialize, Serialize};

/// A single user comment as the page displays it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub name: String,
    pub body: String,
}

impl Comment {
    pub fn new(name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: body.into(),
        }
    }
}

/// Login state of the current visitor.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub nickname: String,
    #[serde(alias = "authUrl")]
    pub authentication_url: String,
    #[serde(alias = "loggedIn")]
    pub is_logged_in: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// A named point of interest plotted on the map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RestaurantMarker {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

/// One theme rule: paint `element_type` of `feature_type` with `color`.
///
/// `None` for either selector means "all", matching the map provider's
/// defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapStyleRule {
    pub feature_type: Option<&'static str>,
    pub element_type: Option<&'static str>,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapOptions {
    pub center: LatLng,
    pub zoom: u8,
    pub styles: Vec<MapStyleRule>,
}

/// Marker placement request handed to a map adapter.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSpec {
    pub label: String,
    pub position: LatLng,
    pub z_index: u32,
}

/// Opaque reference to a map created by a `MapAdapter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MapHandle(pub u64);

//! The restaurant map: fixed centre, zoom, night theme and markers.

use portfolio_adapters::{LatLng, MapOptions, MapStyleRule, MarkerSpec, RestaurantMarker};

use crate::dom::Element;

pub const CENTER: LatLng = LatLng::new(37.3945, -122.0790);
pub const ZOOM: u8 = 15;

pub const RESTAURANTS: &[RestaurantMarker] = &[
    RestaurantMarker { name: "Cascal", lat: 37.3943, lng: -122.0782 },
    RestaurantMarker { name: "Xanh", lat: 37.3929, lng: -122.0798 },
    RestaurantMarker { name: "Eureka!", lat: 37.3936, lng: -122.0794 },
    RestaurantMarker { name: "Ludwig's German Table", lat: 37.3962, lng: -122.0821 },
    RestaurantMarker { name: "Shoreline Amphitheatre Grill", lat: 37.4268, lng: -122.0806 },
];

const fn rule(
    feature_type: Option<&'static str>,
    element_type: Option<&'static str>,
    color: &'static str,
) -> MapStyleRule {
    MapStyleRule { feature_type, element_type, color }
}

pub const NIGHT_STYLE: &[MapStyleRule] = &[
    rule(None, Some("geometry"), "#242f3e"),
    rule(None, Some("labels.text.stroke"), "#242f3e"),
    rule(None, Some("labels.text.fill"), "#746855"),
    rule(Some("administrative.locality"), Some("labels.text.fill"), "#d59563"),
    rule(Some("poi"), Some("labels.text.fill"), "#d59563"),
    rule(Some("poi.park"), Some("geometry"), "#263c3f"),
    rule(Some("road"), Some("geometry"), "#38414e"),
    rule(Some("road"), Some("geometry.stroke"), "#212a37"),
    rule(Some("road.highway"), Some("geometry"), "#746855"),
    rule(Some("water"), Some("geometry"), "#17263c"),
    rule(Some("water"), Some("labels.text.fill"), "#515c6d"),
];

pub fn map_options() -> MapOptions {
    MapOptions {
        center: CENTER,
        zoom: ZOOM,
        styles: NIGHT_STYLE.to_vec(),
    }
}

/// One marker per restaurant, stacked by list position starting at 1.
pub fn markers(restaurants: &[RestaurantMarker]) -> Vec<MarkerSpec> {
    restaurants
        .iter()
        .zip(1..)
        .map(|(restaurant, z_index)| MarkerSpec {
            label: restaurant.name.to_string(),
            position: LatLng::new(restaurant.lat, restaurant.lng),
            z_index,
        })
        .collect()
}

pub fn render_map(embed_url: &str) -> Element {
    Element::new("img")
        .with_class("map-image")
        .with_attr("src", embed_url)
        .with_attr("alt", "Map of favourite restaurants")
}

/// Full marker names, in stacking order; the static image only fits one
/// character per pin.
pub fn render_legend(markers: &[MarkerSpec]) -> Element {
    markers.iter().fold(
        Element::new("ol").with_class("map-legend"),
        |legend, marker| {
            legend.with_child(
                Element::new("li")
                    .with_class("map-legend-entry")
                    .with_text(&marker.label),
            )
        },
    )
}

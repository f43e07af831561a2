use std::sync::LazyLock;

use reqwest::Url;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::{core::trip::TripInput, quantity::Kilometers};

static DIRECTIONS_BASE_URL: LazyLock<Url> =
    LazyLock::new(|| Url::parse("https://www.google.com/maps/dir/").unwrap());

/// Resolved route geometry and metadata.
#[must_use]
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteInfo {
    /// One-way distance as resolved, or the round-trip adjusted distance once quoted.
    pub distance_km: Kilometers,

    /// Advisory only.
    pub duration: String,

    pub summary: String,

    #[serde(default)]
    pub map_url: Option<String>,

    #[serde(default)]
    pub source_title: Option<String>,
}

impl RouteInfo {
    pub const DURATION_UNAVAILABLE: &'static str = "N/A";

    /// Route synthesized from a distance the user typed in, bypassing the resolver.
    pub fn manual(distance: Kilometers) -> Self {
        Self {
            distance_km: distance,
            duration: Self::DURATION_UNAVAILABLE.to_owned(),
            summary: format!("Manual distance: {} km", distance.0),
            map_url: None,
            source_title: None,
        }
    }
}

/// Driving directions link for the trip, with the intermediate stop as a waypoint.
pub fn directions_url(input: &TripInput) -> Url {
    let mut url = DIRECTIONS_BASE_URL.clone();
    {
        let mut query = url.query_pairs_mut();
        query.append_pair("api", "1").append_pair("origin", &input.origin);
        if let Some(waypoint) = input.waypoint() {
            query.append_pair("waypoints", waypoint);
        }
        query.append_pair("destination", &input.destination);
    }
    url
}

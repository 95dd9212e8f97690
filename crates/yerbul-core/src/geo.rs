//! The two-stage location-resolution pipeline: district name to coordinate,
//! coordinate to nearby places.

use crate::error::Result;
use crate::models::{Coordinate, PlaceRecord};
use crate::ports::GeoProvider;
use std::sync::Arc;

/// Country suffix appended to every geocoding query.
const COUNTRY: &str = "Türkiye";

/// Fixed geofence radius around the resolved district center, in meters.
pub const SEARCH_RADIUS_M: u32 = 5_000;

/// Maximum number of places requested per search.
pub const RESULT_LIMIT: usize = 50;

/// Resolves a (region, district) pair to its best-match coordinate.
#[derive(Clone)]
pub struct CoordinateResolver {
    provider: Arc<dyn GeoProvider>,
}

impl CoordinateResolver {
    pub fn new(provider: Arc<dyn GeoProvider>) -> Self {
        Self { provider }
    }

    /// Best-match coordinate for the district, or `None`. Provider and
    /// transport failures are collapsed into `None` as well: callers only
    /// see found-or-not and must treat either as "ask the user to retry".
    pub async fn resolve(&self, region: &str, sub_region: &str) -> Option<Coordinate> {
        let query = format!("{sub_region}, {region}, {COUNTRY}");
        match self.provider.forward_geocode(&query, 1).await {
            Ok(coords) => coords.into_iter().next(),
            Err(e) => {
                tracing::warn!(query = %query, error = %e, "forward geocoding failed");
                None
            }
        }
    }
}

/// Finds places of one category near a resolved coordinate.
#[derive(Clone)]
pub struct PlaceSearch {
    provider: Arc<dyn GeoProvider>,
}

impl PlaceSearch {
    pub fn new(provider: Arc<dyn GeoProvider>) -> Self {
        Self { provider }
    }

    /// Places near `center`, in provider order. An empty list is a valid
    /// result; an `Err` means the query itself failed.
    pub async fn search(&self, center: Coordinate, category_code: &str) -> Result<Vec<PlaceRecord>> {
        self.provider
            .places_search(category_code, center, SEARCH_RADIUS_M, RESULT_LIMIT)
            .await
    }
}

//! Geoapify adapter for the geo-provider port.
//!
//! Implements forward geocoding (`/v1/geocode/search`) and places search
//! (`/v2/places`) against the Geoapify HTTP API. Responses are GeoJSON-style
//! feature collections; only the coordinate pair and the optional place
//! name are mapped into the domain types.

use async_trait::async_trait;
use serde::Deserialize;
use yerbul_core::error::{Result, YerbulError};
use yerbul_core::models::{Coordinate, PlaceRecord};
use yerbul_core::ports::GeoProvider;

pub const DEFAULT_BASE_URL: &str = "https://api.geoapify.com";

/// HTTP client for the Geoapify geocoding and places endpoints.
pub struct GeoapifyClient {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl GeoapifyClient {
    /// Create a client against the production Geoapify API.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, api_key)
    }

    /// Create a client against a custom base URL (test servers).
    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            client: reqwest::Client::new(),
        }
    }

    async fn get_features(&self, url: &str, params: &[(&str, String)]) -> Result<Vec<Feature>> {
        let response = self
            .client
            .get(url)
            .query(params)
            .query(&[("apiKey", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| YerbulError::Provider {
                reason: format!("request to {url} failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(YerbulError::Provider {
                reason: format!("{url} returned {status}: {body}"),
            });
        }

        let collection: FeatureCollection =
            response.json().await.map_err(|e| YerbulError::Provider {
                reason: format!("malformed response from {url}: {e}"),
            })?;

        Ok(collection.features)
    }
}

#[async_trait]
impl GeoProvider for GeoapifyClient {
    async fn forward_geocode(&self, query: &str, limit: usize) -> Result<Vec<Coordinate>> {
        let url = format!("{}/v1/geocode/search", self.base_url);
        let params = [
            ("text", query.to_string()),
            ("limit", limit.to_string()),
        ];

        let features = self.get_features(&url, &params).await?;
        tracing::debug!(query = %query, hits = features.len(), "forward geocode");

        Ok(features.into_iter().map(|f| f.geometry.coordinate()).collect())
    }

    async fn places_search(
        &self,
        category_code: &str,
        center: Coordinate,
        radius_m: u32,
        limit: usize,
    ) -> Result<Vec<PlaceRecord>> {
        let url = format!("{}/v2/places", self.base_url);
        let params = [
            ("categories", category_code.to_string()),
            ("filter", circle_filter(center, radius_m)),
            ("bias", proximity_bias(center)),
            ("limit", limit.to_string()),
        ];

        let features = self.get_features(&url, &params).await?;
        tracing::debug!(
            category = %category_code,
            hits = features.len(),
            "places search"
        );

        Ok(features
            .into_iter()
            .map(|f| PlaceRecord::new(f.properties.name, f.geometry.coordinate()))
            .collect())
    }
}

/// Geoapify circle filter: `circle:lon,lat,radius_meters`.
fn circle_filter(center: Coordinate, radius_m: u32) -> String {
    format!("circle:{},{},{}", center.lon, center.lat, radius_m)
}

/// Geoapify proximity bias: `proximity:lon,lat`.
fn proximity_bias(center: Coordinate) -> String {
    format!("proximity:{},{}", center.lon, center.lat)
}

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    #[serde(default)]
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    geometry: Geometry,
    #[serde(default)]
    properties: Properties,
}

/// Point geometry with GeoJSON axis order: `[lon, lat]`.
#[derive(Debug, Deserialize)]
struct Geometry {
    coordinates: [f64; 2],
}

impl Geometry {
    fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.coordinates[1], self.coordinates[0])
    }
}

#[derive(Debug, Default, Deserialize)]
struct Properties {
    name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_filter_is_lon_lat_radius() {
        let filter = circle_filter(Coordinate::new(39.9208, 32.8541), 5_000);
        assert_eq!(filter, "circle:32.8541,39.9208,5000");
    }

    #[test]
    fn test_proximity_bias_is_lon_lat() {
        let bias = proximity_bias(Coordinate::new(39.9208, 32.8541));
        assert_eq!(bias, "proximity:32.8541,39.9208");
    }

    #[test]
    fn test_feature_collection_maps_names_and_axis_order() {
        let body = r#"{
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "properties": {"name": "Ankara Şehir Hastanesi", "city": "Ankara"},
                    "geometry": {"type": "Point", "coordinates": [32.8025, 39.8872]}
                },
                {
                    "type": "Feature",
                    "properties": {},
                    "geometry": {"type": "Point", "coordinates": [32.81, 39.89]}
                }
            ]
        }"#;

        let collection: FeatureCollection = serde_json::from_str(body).unwrap();
        assert_eq!(collection.features.len(), 2);

        let first = &collection.features[0];
        assert_eq!(first.properties.name.as_deref(), Some("Ankara Şehir Hastanesi"));
        assert_eq!(first.geometry.coordinate(), Coordinate::new(39.8872, 32.8025));

        let second = &collection.features[1];
        assert!(second.properties.name.is_none());
    }

    #[test]
    fn test_missing_features_array_is_empty_not_an_error() {
        let collection: FeatureCollection = serde_json::from_str("{}").unwrap();
        assert!(collection.features.is_empty());
    }
}

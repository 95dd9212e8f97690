//! Port trait definitions
//!
//! These traits define the interfaces that adapters must implement: the
//! outgoing side of the chat transport and the external geo-provider.

use crate::error::Result;
use crate::models::{ChatKey, Coordinate, PlaceRecord};
use crate::render::OutgoingMessage;
use async_trait::async_trait;

/// Port for sending messages back through the chat platform.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Deliver one message to one chat. Implementations must preserve the
    /// caller's send order within a chat.
    async fn send(&self, chat: ChatKey, message: OutgoingMessage) -> Result<()>;
}

/// Port for the external geocoding / places service.
#[async_trait]
pub trait GeoProvider: Send + Sync {
    /// Forward-geocode a free-text query, returning at most `limit`
    /// coordinates in the provider's relevance order.
    async fn forward_geocode(&self, query: &str, limit: usize) -> Result<Vec<Coordinate>>;

    /// Search places of one category inside a circle of `radius_m` meters
    /// around `center`, biased toward `center`, capped at `limit` results.
    async fn places_search(
        &self,
        category_code: &str,
        center: Coordinate,
        radius_m: u32,
        limit: usize,
    ) -> Result<Vec<PlaceRecord>>;
}

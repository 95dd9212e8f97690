//! Per-chat conversation state machine.
//!
//! Each incoming text is matched against an ordered list of candidate
//! transitions, evaluated top-down; the first match wins regardless of the
//! session's current stage:
//!
//! 1. a known region name (re)starts district selection, even mid-flow;
//! 2. a district of the stored region advances to category selection;
//! 3. a category name triggers the resolve-then-search pipeline, or a
//!    guidance message when no district has been chosen yet.
//!
//! Text matching nothing is dropped silently, as is any text for a chat
//! that never issued the start command. The loose gating is deliberate:
//! "jump back by typing a region name" is a feature of the flow, not an
//! accident.

use crate::categories::CategoryRegistry;
use crate::error::Result;
use crate::geo::{CoordinateResolver, PlaceSearch};
use crate::models::{ChatKey, ConversationSession};
use crate::ports::{ChatTransport, GeoProvider};
use crate::regions::GeographicIndex;
use crate::render;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Sessions keyed by chat identity. Cheap to clone; clones share state so
/// tests can inspect what the engine mutated. Lock poisoning is only
/// possible if a holder panicked, which is unrecoverable here.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    inner: Arc<Mutex<HashMap<ChatKey, ConversationSession>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create or reset the session for a chat. A repeated start command
    /// resets the existing entry rather than recreating it.
    pub fn reset(&self, chat: ChatKey) {
        self.inner
            .lock()
            .unwrap()
            .insert(chat, ConversationSession::new());
    }

    /// Snapshot of one session, if the chat has started the flow.
    pub fn get(&self, chat: ChatKey) -> Option<ConversationSession> {
        self.inner.lock().unwrap().get(&chat).cloned()
    }

    /// Mutate one session in place. Returns `None` when the chat has no
    /// session, without creating one.
    pub fn update<R>(
        &self,
        chat: ChatKey,
        f: impl FnOnce(&mut ConversationSession) -> R,
    ) -> Option<R> {
        self.inner.lock().unwrap().get_mut(&chat).map(f)
    }
}

/// The transition chosen for one incoming text. Computed under the session
/// lock; the side effects run after it is released.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogAction {
    PromptSubRegions { region: String },
    PromptCategories { sub_region: String },
    RunSearch {
        region: String,
        sub_region: String,
        category: String,
    },
    GuideSubRegionFirst,
    Ignore,
}

/// Drives the guided dialog for every chat: validates input, advances
/// sessions, runs the resolve-then-search pipeline, and sends the rendered
/// messages through the transport.
///
/// Known limitation: a category selection that is re-triggered while a
/// previous search is still in flight is not cancelled; the two result
/// sequences may interleave in the chat.
pub struct DialogEngine {
    index: GeographicIndex,
    categories: CategoryRegistry,
    sessions: SessionStore,
    resolver: CoordinateResolver,
    search: PlaceSearch,
    transport: Arc<dyn ChatTransport>,
}

impl DialogEngine {
    pub fn new(
        index: GeographicIndex,
        categories: CategoryRegistry,
        sessions: SessionStore,
        provider: Arc<dyn GeoProvider>,
        transport: Arc<dyn ChatTransport>,
    ) -> Self {
        Self {
            index,
            categories,
            sessions,
            resolver: CoordinateResolver::new(provider.clone()),
            search: PlaceSearch::new(provider),
            transport,
        }
    }

    /// Handle the start command: reset the session and prompt for a region.
    pub async fn start(&self, chat: ChatKey) -> Result<()> {
        self.sessions.reset(chat);
        tracing::info!(chat = %chat, "dialog started");
        self.transport
            .send(chat, render::region_prompt(self.index.region_names()))
            .await
    }

    /// Handle one free-text message.
    pub async fn handle_text(&self, chat: ChatKey, text: &str) -> Result<()> {
        match self.plan(chat, text) {
            DialogAction::Ignore => Ok(()),
            DialogAction::PromptSubRegions { region } => {
                let sub_regions = self.index.sub_regions(&region)?;
                self.transport
                    .send(chat, render::sub_region_prompt(&region, sub_regions))
                    .await
            }
            DialogAction::PromptCategories { sub_region } => {
                self.transport
                    .send(
                        chat,
                        render::category_prompt(&sub_region, self.categories.display_names()),
                    )
                    .await
            }
            DialogAction::GuideSubRegionFirst => {
                self.transport
                    .send(chat, render::pick_sub_region_first())
                    .await
            }
            DialogAction::RunSearch {
                region,
                sub_region,
                category,
            } => self.run_search(chat, &region, &sub_region, &category).await,
        }
    }

    /// Evaluate the candidate transitions top-down and apply the first
    /// match to the session. Pure apart from the session mutation, which
    /// keeps the lock scope free of awaits.
    pub fn plan(&self, chat: ChatKey, text: &str) -> DialogAction {
        let planned = self.sessions.update(chat, |session| {
            if self.index.contains_region(text) {
                session.select_region(text);
                return DialogAction::PromptSubRegions {
                    region: text.to_string(),
                };
            }

            if let Some(region) = session.region.clone() {
                if self.index.is_sub_region_of(&region, text) {
                    session.select_sub_region(text);
                    return DialogAction::PromptCategories {
                        sub_region: text.to_string(),
                    };
                }
            }

            if self.categories.contains(text) {
                return match (session.region.clone(), session.sub_region.clone()) {
                    (Some(region), Some(sub_region)) => DialogAction::RunSearch {
                        region,
                        sub_region,
                        category: text.to_string(),
                    },
                    _ => DialogAction::GuideSubRegionFirst,
                };
            }

            DialogAction::Ignore
        });

        // No session means the chat never issued the start command.
        planned.unwrap_or(DialogAction::Ignore)
    }

    /// Resolve the district, search the category, and stream the results.
    /// Sends are awaited one by one so message order matches provider order.
    async fn run_search(
        &self,
        chat: ChatKey,
        region: &str,
        sub_region: &str,
        category_name: &str,
    ) -> Result<()> {
        let category = self.categories.lookup(category_name)?;

        self.transport
            .send(chat, render::searching_notice(sub_region, category_name))
            .await?;

        let Some(center) = self.resolver.resolve(region, sub_region).await else {
            return self
                .transport
                .send(chat, render::location_not_found())
                .await;
        };

        match self.search.search(center, category.provider_code).await {
            Err(e) => {
                tracing::warn!(chat = %chat, error = %e, "places search failed");
                self.transport.send(chat, render::search_failed()).await
            }
            Ok(places) if places.is_empty() => {
                self.transport.send(chat, render::no_results()).await
            }
            Ok(places) => {
                for place in &places {
                    self.transport
                        .send(chat, render::place_message(category.glyph, place))
                        .await?;
                }
                self.transport.send(chat, render::summary(places.len())).await
            }
        }
    }
}

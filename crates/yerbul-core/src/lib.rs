//! Yerbul Core - Conversation state machine and location-resolution pipeline
//!
//! This crate contains the domain logic for the guided nearby-places dialog:
//! the geographic reference index, the category registry, the per-chat
//! conversation state machine, the resolve-then-search pipeline, message
//! rendering, and the port definitions for the chat transport and the
//! geo-provider.

pub mod categories;
pub mod dialog;
pub mod error;
pub mod geo;
pub mod models;
pub mod ports;
pub mod regions;
pub mod render;

pub use error::{Result, YerbulError};

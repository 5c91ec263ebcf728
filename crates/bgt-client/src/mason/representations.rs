//! Typed response shapes for the player API.
//!
//! Each response the server can produce (collection, item, error) gets its
//! own serde type; nothing indexes untyped JSON. Representations are
//! immutable once deserialized and are discarded on the next fetch.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Controls;

/// A Mason namespace declaration from `@namespaces`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Namespace {
    /// Identifier URI for the namespace's link relations.
    pub name: String,
}

/// One row of the player collection: the short representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub name: String,

    #[serde(rename = "@controls", default, skip_serializing_if = "Controls::is_empty")]
    pub controls: Controls,
}

/// The long representation of one player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(rename = "@controls", default, skip_serializing_if = "Controls::is_empty")]
    pub controls: Controls,
}

/// The player collection representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerCollection {
    pub items: Vec<PlayerSummary>,

    #[serde(rename = "@controls", default, skip_serializing_if = "Controls::is_empty")]
    pub controls: Controls,

    #[serde(
        rename = "@namespaces",
        default,
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub namespaces: BTreeMap<String, Namespace>,
}

/// The Mason error body: `{"@error": {"@message": ..., "@messages": [...]}}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(rename = "@error")]
    pub error: ErrorDetail,
}

/// The `@error` element itself.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorDetail {
    /// Short title for the error.
    #[serde(rename = "@message")]
    pub message: String,

    /// Longer human-readable descriptions.
    #[serde(rename = "@messages", default)]
    pub messages: Vec<String>,
}

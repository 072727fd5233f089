//! Event type model

use serde::{Deserialize, Serialize};

/// Event type entity (`GET /events`)
///
/// Some backends name the display field `type` instead of `name`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventType {
    pub id: String,
    #[serde(alias = "type")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

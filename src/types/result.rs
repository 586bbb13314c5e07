//! Remote result records.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

const SCORE_FIELD: &str = "score";

/// One enriched record returned by the recommendation service.
///
/// Only `objectId` is interpreted here. Every other field, `score` included,
/// is carried through untouched in [`ExternalResult::extra`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalResult {
    object_id: String,
    #[serde(flatten)]
    extra: serde_json::Map<String, serde_json::Value>,
}

impl ExternalResult {
    pub fn new(object_id: impl Into<String>) -> Self {
        Self {
            object_id: object_id.into(),
            extra: serde_json::Map::new(),
        }
    }

    pub fn with_score(mut self, score: f64) -> Self {
        self.extra.insert(SCORE_FIELD.to_string(), serde_json::json!(score));
        self
    }

    pub fn object_id(&self) -> &str {
        &self.object_id
    }

    /// The `score` field when the service sent it as a number.
    pub fn score(&self) -> Option<f64> {
        self.extra.get(SCORE_FIELD).and_then(|v| v.as_f64())
    }

    /// Fields the service sent beyond `objectId`.
    pub fn extra(&self) -> &serde_json::Map<String, serde_json::Value> {
        &self.extra
    }
}

/// Results keyed by object id, for lookup by the search pipeline.
pub type ResultMap = HashMap<String, ExternalResult>;

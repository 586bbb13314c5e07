//! Booster configuration.
//!
//! Two layers:
//! - [`BoosterSettings`]: deployment-level values (remote host, credentials, timeout),
//!   built once at startup and shared by every request.
//! - [`ReorderConfiguration`]: per-request values parsed from the search request's
//!   booster parameters. Immutable; passed explicitly into each reorder call.

mod settings;

pub use settings::{BoosterSettings, BoosterSettingsBuilder, Credentials};

use std::collections::HashMap;

/// Request parameter naming the recommendation context.
pub const TARGET_PARAM: &str = "target";
/// Request parameter naming the entity property ids are matched against.
pub const KEY_PROPERTY_PARAM: &str = "keyProperty";
/// Request parameter overriding the endpoint path.
pub const ENDPOINT_PARAM: &str = "neo4j.endpoint";
/// Request parameter carrying the pagination offset.
pub const FROM_PARAM: &str = "from";

pub const DEFAULT_KEY_PROPERTY: &str = "uuid";
pub const DEFAULT_ENDPOINT_PATH: &str = "/graphaware/recommendation/filter";

/// Per-request booster configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReorderConfiguration {
    target_id: Option<String>,
    key_property: String,
    booster_endpoint: Option<String>,
    from: usize,
}

impl ReorderConfiguration {
    pub fn new() -> Self {
        Self {
            target_id: None,
            key_property: DEFAULT_KEY_PROPERTY.to_string(),
            booster_endpoint: None,
            from: 0,
        }
    }

    pub fn with_target_id(mut self, target_id: impl Into<String>) -> Self {
        self.target_id = Some(target_id.into());
        self
    }

    pub fn with_key_property(mut self, key_property: impl Into<String>) -> Self {
        self.key_property = key_property.into();
        self
    }

    pub fn with_booster_endpoint(mut self, path: impl Into<String>) -> Self {
        self.booster_endpoint = Some(path.into());
        self
    }

    pub fn with_from(mut self, from: usize) -> Self {
        self.from = from;
        self
    }

    pub fn target_id(&self) -> Option<&str> {
        self.target_id.as_deref()
    }

    pub fn key_property(&self) -> &str {
        &self.key_property
    }

    /// The configured path override, if any.
    pub fn booster_endpoint(&self) -> Option<&str> {
        self.booster_endpoint.as_deref()
    }

    /// Path to call: the override when present, otherwise [`DEFAULT_ENDPOINT_PATH`].
    pub fn endpoint_path(&self) -> &str {
        self.booster_endpoint
            .as_deref()
            .unwrap_or(DEFAULT_ENDPOINT_PATH)
    }

    pub fn from(&self) -> usize {
        self.from
    }
}

impl Default for ReorderConfiguration {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract the booster configuration from a request's parameter map.
///
/// Never fails: absent keys resolve to defaults, and an unparsable `from`
/// is logged and treated as 0.
pub fn parse_configuration(params: &HashMap<String, String>) -> ReorderConfiguration {
    let mut config = ReorderConfiguration::new();

    if let Some(target) = params.get(TARGET_PARAM) {
        config.target_id = Some(target.clone());
    }
    if let Some(key_property) = params.get(KEY_PROPERTY_PARAM) {
        config.key_property = key_property.clone();
    }
    if let Some(endpoint) = params.get(ENDPOINT_PARAM) {
        config.booster_endpoint = Some(endpoint.clone());
    }
    if let Some(raw) = params.get(FROM_PARAM) {
        match raw.trim().parse::<usize>() {
            Ok(from) => config.from = from,
            Err(_) => tracing::warn!(value = %raw, "Ignoring invalid `from` parameter, using 0"),
        }
    }

    config
}

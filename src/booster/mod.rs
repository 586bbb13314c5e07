//! Search result boosters.
//!
//! A booster takes the keys produced by a search query and asks an external
//! service how to rank them. [`GraphBooster`] calls a graph-database
//! recommendation endpoint:
//!
//! ```text
//! parse_configuration (once per request)
//!   -> resolve_endpoint -> build_parameters -> post_and_decode -> index
//! ```

mod indexer;

pub use indexer::index;

use crate::config::{BoosterSettings, ReorderConfiguration};
use crate::endpoint::resolve_endpoint;
use crate::request::build_parameters;
use crate::transport::{post_and_decode, HttpTransport, Transport};
use crate::types::ResultMap;
use crate::Result;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

/// Name under which [`GraphBooster`] is registered.
pub const GRAPH_BOOSTER_NAME: &str = "SearchResultNeo4jBooster";

/// Reorders a set of result keys using signals outside the search index.
///
/// Implementations hold no per-request state, so one instance can serve
/// concurrent requests.
pub trait ReorderClient: Send + Sync {
    fn name(&self) -> &str;

    /// Rank `keys` for one search request.
    ///
    /// The returned map is keyed by the ids the remote service returned, which
    /// may differ from `keys`.
    fn reorder(&self, config: &ReorderConfiguration, keys: &HashSet<String>) -> Result<ResultMap>;
}

/// Booster backed by a graph-database recommendation endpoint.
pub struct GraphBooster {
    settings: BoosterSettings,
    transport: Arc<dyn Transport>,
}

impl GraphBooster {
    /// Booster using the blocking HTTP transport configured from `settings`.
    pub fn new(settings: BoosterSettings) -> Result<Self> {
        let transport = HttpTransport::new(&settings)?;
        Ok(Self::with_transport(settings, Arc::new(transport)))
    }

    pub fn with_transport(settings: BoosterSettings, transport: Arc<dyn Transport>) -> Self {
        Self {
            settings,
            transport,
        }
    }

    pub fn settings(&self) -> &BoosterSettings {
        &self.settings
    }
}

impl ReorderClient for GraphBooster {
    fn name(&self) -> &str {
        GRAPH_BOOSTER_NAME
    }

    fn reorder(&self, config: &ReorderConfiguration, keys: &HashSet<String>) -> Result<ResultMap> {
        let url = resolve_endpoint(
            self.settings.host(),
            config.endpoint_path(),
            config.target_id(),
        )?;
        debug!(keys = ?keys, "External graph booster");
        debug!(endpoint = %url, "Call");

        let params = build_parameters(keys, config.from(), config.key_property());
        let results = post_and_decode(
            self.transport.as_ref(),
            &url,
            &params,
            self.settings.credentials(),
        )?;
        debug!(count = results.len(), "Recommendation results decoded");

        Ok(index(results))
    }
}

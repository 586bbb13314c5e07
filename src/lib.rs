//! # graph-booster
//!
//! Search result booster that re-ranks result keys through a graph-database
//! recommendation endpoint.
//!
//! The search pipeline hands over the set of keys produced by a query; the
//! booster POSTs them to the remote service and returns the ranked records
//! indexed by object id. Ranking logic lives entirely in the remote service.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use graph_booster::{parse_configuration, BoosterSettings, GraphBooster, ReorderClient};
//! use std::collections::{HashMap, HashSet};
//!
//! fn main() -> graph_booster::Result<()> {
//!     let settings = BoosterSettings::builder()
//!         .host("http://localhost:7474")
//!         .credentials("neo4j", "password")
//!         .build()?;
//!     let booster = GraphBooster::new(settings)?;
//!
//!     let params = HashMap::from([("target".to_string(), "12".to_string())]);
//!     let config = parse_configuration(&params);
//!
//!     let keys: HashSet<String> = ["a", "b"].iter().map(|s| s.to_string()).collect();
//!     let ranked = booster.reorder(&config, &keys)?;
//!     for (id, result) in &ranked {
//!         println!("{id}: {:?}", result.score());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Deployment settings and per-request configuration |
//! | [`endpoint`] | Endpoint URL resolution |
//! | [`error`] | Error taxonomy and context |
//! | [`request`] | Form parameters sent to the remote service |
//! | [`transport`] | HTTP POST and response decoding |
//! | [`booster`] | The [`ReorderClient`] capability and [`GraphBooster`] |
//! | [`registry`] | Name-to-constructor booster registry |
//! | [`types`] | Result records |

pub mod booster;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod registry;
pub mod request;
pub mod transport;
pub mod types;

pub use booster::{index, GraphBooster, ReorderClient, GRAPH_BOOSTER_NAME};
pub use config::{parse_configuration, BoosterSettings, Credentials, ReorderConfiguration};
pub use endpoint::resolve_endpoint;
pub use error::{Error, ErrorContext, ErrorKind};
pub use registry::{get_booster_registry, BoosterRegistry};
pub use request::{build_parameters, RequestParameters};
pub use transport::{post_and_decode, HttpTransport, Transport};
pub use types::{ExternalResult, ResultMap};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

//! Types exchanged with the recommendation service and handed back to the search pipeline.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`ExternalResult`] | One ranked record returned by the remote service |
//! | [`ResultMap`] | Results indexed by object id |

pub mod result;

pub use result::{ExternalResult, ResultMap};

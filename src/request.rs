//! Form parameters sent to the recommendation endpoint.

use serde::Serialize;

/// Value sent as `limit`: "return every match".
pub const NO_LIMIT: i32 = i32::MAX;

/// Form-encoded POST body.
///
/// Serializes (in field order) to `limit`, `from`, `keyProperty`, `ids`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestParameters {
    limit: String,
    from: String,
    key_property: String,
    ids: String,
}

impl RequestParameters {
    pub fn limit(&self) -> &str {
        &self.limit
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn key_property(&self) -> &str {
        &self.key_property
    }

    /// Comma-joined ids; empty when the key set was empty.
    pub fn ids(&self) -> &str {
        &self.ids
    }

    /// The parameters as ordered key/value pairs.
    pub fn pairs(&self) -> [(&'static str, &str); 4] {
        [
            ("limit", self.limit.as_str()),
            ("from", self.from.as_str()),
            ("keyProperty", self.key_property.as_str()),
            ("ids", self.ids.as_str()),
        ]
    }
}

/// Build the POST parameters for one reorder call.
///
/// Ids are joined with `,` in the iteration order of `keys`; no escaping is
/// applied, so ids must not contain commas.
pub fn build_parameters<I, S>(keys: I, from: usize, key_property: &str) -> RequestParameters
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut ids = String::new();
    for (i, key) in keys.into_iter().enumerate() {
        if i > 0 {
            ids.push(',');
        }
        ids.push_str(key.as_ref());
    }

    RequestParameters {
        limit: NO_LIMIT.to_string(),
        from: from.to_string(),
        key_property: key_property.to_string(),
        ids,
    }
}

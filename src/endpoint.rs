//! Endpoint resolution: `{host}{path}{/target_id}` with normalized separators.

use crate::{Error, ErrorContext, Result};
use url::Url;

/// Join `host`, `path` and `target_id` into the URL of the recommendation endpoint.
///
/// Leading and trailing slashes on each part are collapsed so exactly one
/// separator sits between segments. An absent or empty `target_id` adds no
/// segment. Fails with a configuration error when `host` is empty or is not
/// an absolute `http`/`https` URL.
pub fn resolve_endpoint(host: &str, path: &str, target_id: Option<&str>) -> Result<Url> {
    let host = host.trim();
    if host.is_empty() {
        return Err(Error::configuration_with_context(
            "remote host must not be empty",
            ErrorContext::new()
                .with_field_path("settings.host")
                .with_source("endpoint"),
        ));
    }

    let base = Url::parse(host).map_err(|e| {
        Error::configuration_with_context(
            format!("invalid remote host: {}", e),
            ErrorContext::new()
                .with_field_path("settings.host")
                .with_details(host.to_string())
                .with_source("endpoint"),
        )
    })?;
    if !matches!(base.scheme(), "http" | "https") || base.host_str().is_none() {
        return Err(Error::configuration_with_context(
            "remote host must be an http(s) URL",
            ErrorContext::new()
                .with_field_path("settings.host")
                .with_details(host.to_string())
                .with_source("endpoint"),
        ));
    }

    let mut joined = host.trim_end_matches('/').to_string();
    for segment in [Some(path), target_id].into_iter().flatten() {
        let segment = segment.trim_matches('/');
        if !segment.is_empty() {
            joined.push('/');
            joined.push_str(segment);
        }
    }

    Url::parse(&joined).map_err(|e| {
        Error::configuration_with_context(
            format!("invalid endpoint URL: {}", e),
            ErrorContext::new()
                .with_details(joined.clone())
                .with_source("endpoint"),
        )
    })
}

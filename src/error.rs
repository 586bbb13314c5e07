use thiserror::Error;

/// Where a booster error came from: which setting, which endpoint, which stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Setting at fault, such as `settings.host` or `GRAPH_BOOSTER_TIMEOUT_SECS`
    pub field_path: Option<String>,
    /// Offending value or the endpoint URL being called
    pub details: Option<String>,
    /// Stage that failed: `endpoint`, `transport` or `registry`
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self {
            field_path: None,
            details: None,
            source: None,
        }
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Coarse classification of [`Error`], for callers that decide between
/// failing the search request and falling back to unboosted order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Configuration,
    RemoteUnavailable,
    EmptyResponse,
    Decode,
}

/// Unified error type for the booster.
///
/// Every variant is fatal for the reorder call that produced it; nothing is
/// retried inside the crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Missing or malformed endpoint configuration. Raised before any network call.
    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },

    /// The remote service could not be reached or answered with a failure status.
    #[error("Remote service unavailable: {message}{}", format_context(.context))]
    RemoteUnavailable {
        message: String,
        context: ErrorContext,
        #[source]
        source: Option<reqwest::Error>,
    },

    /// The remote service was reachable but returned no body (or JSON `null`).
    #[error("Empty response: {message}{}", format_context(.context))]
    EmptyResponse {
        message: String,
        context: ErrorContext,
    },

    /// The body was present but is not a JSON array of results.
    #[error("Decode error: {message}{}", format_context(.context))]
    Decode {
        message: String,
        context: ErrorContext,
        #[source]
        source: Option<serde_json::Error>,
    },
}

// Renders as ` (field: .., details: .., source: ..)`, or nothing when empty.
fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

impl Error {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::configuration_with_context(msg, ErrorContext::new())
    }

    /// Create a new configuration error with structured context
    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    /// Create a transport failure, keeping the underlying `reqwest` error as source when there is one
    pub fn remote_unavailable(
        msg: impl Into<String>,
        context: ErrorContext,
        source: Option<reqwest::Error>,
    ) -> Self {
        Error::RemoteUnavailable {
            message: msg.into(),
            context,
            source,
        }
    }

    pub fn empty_response(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::EmptyResponse {
            message: msg.into(),
            context,
        }
    }

    pub fn decode(
        msg: impl Into<String>,
        context: ErrorContext,
        source: Option<serde_json::Error>,
    ) -> Self {
        Error::Decode {
            message: msg.into(),
            context,
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Configuration { .. } => ErrorKind::Configuration,
            Error::RemoteUnavailable { .. } => ErrorKind::RemoteUnavailable,
            Error::EmptyResponse { .. } => ErrorKind::EmptyResponse,
            Error::Decode { .. } => ErrorKind::Decode,
        }
    }

    /// Extract error context
    pub fn context(&self) -> &ErrorContext {
        match self {
            Error::Configuration { context, .. }
            | Error::RemoteUnavailable { context, .. }
            | Error::EmptyResponse { context, .. }
            | Error::Decode { context, .. } => context,
        }
    }
}

//! HTTP client adapter.
//!
//! [`Transport`] performs the authenticated form POST; [`post_and_decode`]
//! turns whatever body comes back into [`ExternalResult`]s and classifies
//! failures. The response handle is owned by `post_and_decode` and dropped on
//! every exit path, which closes the underlying connection or returns it to
//! the pool.

mod http;

pub use http::HttpTransport;

use crate::config::Credentials;
use crate::request::RequestParameters;
use crate::types::ExternalResult;
use crate::{Error, ErrorContext, Result};
use std::io::Read;
use url::Url;

/// Readable response body. Dropping it releases the connection.
pub type ResponseBody = Box<dyn Read + Send>;

/// Sends the booster's form POST.
///
/// Implementations return the body of a successful (2xx) response and map
/// connection, timeout, protocol and status failures to
/// [`Error::RemoteUnavailable`].
pub trait Transport: Send + Sync {
    fn post_form(
        &self,
        url: &Url,
        params: &RequestParameters,
        credentials: Option<&Credentials>,
    ) -> Result<ResponseBody>;
}

/// POST `params` to `url` and decode the JSON array response.
pub fn post_and_decode(
    transport: &dyn Transport,
    url: &Url,
    params: &RequestParameters,
    credentials: Option<&Credentials>,
) -> Result<Vec<ExternalResult>> {
    let mut body = transport.post_form(url, params, credentials)?;
    let bytes = read_body(&mut body, url);
    drop(body);

    decode_results(&bytes?, url)
}

fn read_body(body: &mut ResponseBody, url: &Url) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    body.read_to_end(&mut bytes).map_err(|e| {
        Error::remote_unavailable(
            format!("Failed to read response body: {}", e),
            ErrorContext::new()
                .with_details(url.to_string())
                .with_source("transport"),
            None,
        )
    })?;
    Ok(bytes)
}

/// Decode a response body into results.
///
/// An empty body and a JSON `null` both count as an empty response. Bytes
/// that are not UTF-8 JSON are a decode error.
pub fn decode_results(body: &[u8], url: &Url) -> Result<Vec<ExternalResult>> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(empty_response(url));
    }

    let decoded: Option<Vec<ExternalResult>> = serde_json::from_slice(body).map_err(|e| {
        Error::decode(
            format!("Response is not a JSON array of results: {}", e),
            ErrorContext::new()
                .with_details(url.to_string())
                .with_source("transport"),
            Some(e),
        )
    })?;

    decoded.ok_or_else(|| empty_response(url))
}

fn empty_response(url: &Url) -> Error {
    tracing::error!(endpoint = %url, "Null results from recommendation endpoint");
    Error::empty_response(
        "No results returned by recommendation endpoint",
        ErrorContext::new()
            .with_details(url.to_string())
            .with_source("transport"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::build_parameters;
    use crate::ErrorKind;
    use std::io::{self, Cursor};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Body that counts how often it is dropped.
    struct CountingBody {
        inner: Cursor<Vec<u8>>,
        fail_read: bool,
        closed: Arc<AtomicUsize>,
    }

    impl Read for CountingBody {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.fail_read {
                return Err(io::Error::new(io::ErrorKind::ConnectionReset, "reset"));
            }
            self.inner.read(buf)
        }
    }

    impl Drop for CountingBody {
        fn drop(&mut self) {
            self.closed.fetch_add(1, Ordering::SeqCst);
        }
    }

    struct FakeTransport {
        body: &'static [u8],
        fail_read: bool,
        closed: Arc<AtomicUsize>,
    }

    impl FakeTransport {
        fn new(body: &'static str) -> Self {
            Self::from_bytes(body.as_bytes())
        }

        fn from_bytes(body: &'static [u8]) -> Self {
            Self {
                body,
                fail_read: false,
                closed: Arc::new(AtomicUsize::new(0)),
            }
        }

        fn closed(&self) -> usize {
            self.closed.load(Ordering::SeqCst)
        }
    }

    impl Transport for FakeTransport {
        fn post_form(
            &self,
            _url: &Url,
            _params: &RequestParameters,
            _credentials: Option<&Credentials>,
        ) -> Result<ResponseBody> {
            Ok(Box::new(CountingBody {
                inner: Cursor::new(self.body.to_vec()),
                fail_read: self.fail_read,
                closed: Arc::clone(&self.closed),
            }))
        }
    }

    fn call(transport: &FakeTransport) -> Result<Vec<ExternalResult>> {
        let url = Url::parse("http://localhost:7474/graphaware/recommendation/filter/1").unwrap();
        let params = build_parameters(["a", "b"], 0, "uuid");
        post_and_decode(transport, &url, &params, None)
    }

    #[test]
    fn test_decodes_array_and_releases_once() {
        let transport = FakeTransport::new(r#"[{"objectId":"a","score":2.0},{"objectId":"b"}]"#);
        let results = call(&transport).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].object_id(), "a");
        assert_eq!(results[1].object_id(), "b");
        assert_eq!(transport.closed(), 1);
    }

    #[test]
    fn test_null_body_is_empty_response() {
        let transport = FakeTransport::new("null");
        let err = call(&transport).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyResponse);
        assert_eq!(transport.closed(), 1);
    }

    #[test]
    fn test_blank_body_is_empty_response() {
        let transport = FakeTransport::new("  \n");
        let err = call(&transport).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyResponse);
        assert_eq!(transport.closed(), 1);
    }

    #[test]
    fn test_non_array_is_decode_error() {
        for body in [r#"{"objectId":"a"}"#, "not json", r#"[{"score":1.0}]"#] {
            let transport = FakeTransport::new(body);
            let err = call(&transport).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Decode, "body={body}");
            assert_eq!(transport.closed(), 1);
        }
    }

    #[test]
    fn test_invalid_utf8_is_decode_error() {
        let transport = FakeTransport::from_bytes(b"[\xff]");
        let err = call(&transport).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);
        assert_eq!(transport.closed(), 1);
    }

    #[test]
    fn test_non_numeric_score_passes_through() {
        let transport = FakeTransport::new(r#"[{"objectId":"a","score":"high"}]"#);
        let results = call(&transport).unwrap();
        assert_eq!(results[0].score(), None);
        assert_eq!(results[0].extra()["score"], "high");
    }

    #[test]
    fn test_empty_array_is_ok() {
        let transport = FakeTransport::new("[]");
        assert!(call(&transport).unwrap().is_empty());
    }

    #[test]
    fn test_read_failure_is_remote_unavailable() {
        let transport = FakeTransport {
            fail_read: true,
            ..FakeTransport::new("[]")
        };
        let err = call(&transport).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RemoteUnavailable);
        assert_eq!(transport.closed(), 1);
    }
}

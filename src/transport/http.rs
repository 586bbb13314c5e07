use super::{ResponseBody, Transport};
use crate::config::{BoosterSettings, Credentials};
use crate::request::RequestParameters;
use crate::{Error, ErrorContext, Result};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use url::Url;

/// Blocking `reqwest` transport. One client per booster; keep-alive is left to `reqwest`.
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new(settings: &BoosterSettings) -> Result<Self> {
        // `timeout(None)` lets a call block until the remote answers.
        let client = reqwest::blocking::Client::builder()
            .timeout(settings.timeout())
            .build()
            .map_err(|e| Error::configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn post_form(
        &self,
        url: &Url,
        params: &RequestParameters,
        credentials: Option<&Credentials>,
    ) -> Result<ResponseBody> {
        let mut request = self
            .client
            .post(url.clone())
            .header(ACCEPT, "application/json")
            .form(params);

        if let Some(credentials) = credentials {
            request = request.header(AUTHORIZATION, credentials.authorization_header());
        }

        let response = request.send().map_err(|e| {
            let reason = if e.is_timeout() {
                "timed out"
            } else if e.is_connect() {
                "connection failed"
            } else {
                "request failed"
            };
            Error::remote_unavailable(
                format!("Error while connecting to recommendation host: {}", reason),
                ErrorContext::new()
                    .with_details(url.to_string())
                    .with_source("transport"),
                Some(e),
            )
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::remote_unavailable(
                format!("Recommendation host answered HTTP {}", status),
                ErrorContext::new()
                    .with_details(url.to_string())
                    .with_source("transport"),
                None,
            ));
        }

        Ok(Box::new(response))
    }
}

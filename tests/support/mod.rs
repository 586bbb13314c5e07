//! Mock HTTP server setup for integration tests

use graph_booster::{BoosterSettings, GraphBooster};
use mockito::{Matcher, Mock, Server, ServerGuard};

pub const FILTER_PATH: &str = "/graphaware/recommendation/filter";

/// Test fixture that owns a mock recommendation service
pub struct MockServerFixture {
    pub server: ServerGuard,
    pub base_url: String,
}

impl MockServerFixture {
    pub fn new() -> Self {
        let server = Server::new();
        let base_url = server.url();
        Self { server, base_url }
    }

    /// Booster pointed at the mock server, unauthenticated
    pub fn booster(&self) -> GraphBooster {
        let settings = BoosterSettings::builder()
            .host(&self.base_url)
            .build()
            .expect("settings");
        GraphBooster::new(settings).expect("booster")
    }

    /// Booster pointed at the mock server with Basic credentials
    pub fn authenticated_booster(&self, username: &str, password: &str) -> GraphBooster {
        let settings = BoosterSettings::builder()
            .host(&self.base_url)
            .credentials(username, password)
            .build()
            .expect("settings");
        GraphBooster::new(settings).expect("booster")
    }

    /// Mock a JSON response for a POST to `path`
    pub fn mock_json_response(&mut self, path: &str, status: usize, body: &str) -> Mock {
        self.server
            .mock("POST", path)
            .match_header("accept", "application/json")
            .match_header("content-type", "application/x-www-form-urlencoded")
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create()
    }

    /// Mock expecting exactly these form parameters
    pub fn mock_with_form(&mut self, path: &str, form: &[(&str, &str)], body: &str) -> Mock {
        let matchers = form
            .iter()
            .map(|(k, v)| Matcher::UrlEncoded(k.to_string(), v.to_string()))
            .collect();
        self.server
            .mock("POST", path)
            .match_body(Matcher::AllOf(matchers))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create()
    }
}

use tracing::instrument;

use crate::config::Config;
use crate::error::Result;
use crate::model::PlayerRecord;
use crate::scraper;

/// The main entry point for looking up player ratings.
///
/// `RatingsClient` wraps a [`reqwest::Client`] and a [`Config`], and
/// fetches 2kratings.com pages through the render proxy.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> nba2k_ratings::Result<()> {
/// use nba2k_ratings::{Config, RatingsClient};
///
/// let client = RatingsClient::new(Config::from_env()?);
/// match client.search("Stephen Curry").await {
///     Some(player) => println!("{} is rated {:?}", player.name, player.overall_rating),
///     None => println!("No player found"),
/// }
/// # Ok(())
/// # }
/// ```
pub struct RatingsClient {
    http: reqwest::Client,
    config: Config,
}

impl RatingsClient {
    /// Create a new client with a default HTTP client.
    pub fn new(config: Config) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Create a new client using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure proxies, user agents, etc. The
    /// credential and timeout from `config` are applied to every request.
    pub fn with_client(client: reqwest::Client, config: Config) -> Self {
        Self {
            http: client,
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Fetch the markdown rendering of `url` through the render proxy.
    #[instrument(skip(self))]
    pub async fn fetch(&self, url: &str) -> Result<String> {
        scraper::get_markdown(&self.http, &self.config, url).await
    }

    /// Fetch and extract a single player page.
    #[instrument(skip(self))]
    pub async fn get_player(&self, url: &str) -> Result<PlayerRecord> {
        scraper::player::get_player(&self.http, &self.config, url).await
    }

    /// Look up a player by name.
    ///
    /// Candidate pages are tried in order and the first one that yields a
    /// usable record wins. Returns `None` once every candidate has failed.
    #[instrument(skip(self))]
    pub async fn search(&self, player_name: &str) -> Option<PlayerRecord> {
        scraper::player::search_player(&self.http, &self.config, player_name).await
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use wiremock::matchers::{header, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::error::RatingsError;

    #[tokio::test]
    async fn test_fetch_sends_bearer_credential() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(header("authorization", "Bearer s3cret"))
            .respond_with(ResponseTemplate::new(200).set_body_string("# Page"))
            .expect(1)
            .mount(&server)
            .await;

        let client = RatingsClient::new(Config::new("s3cret").with_proxy_base(server.uri()));
        let body = client
            .fetch("https://www.2kratings.com/stephen-curry")
            .await
            .unwrap();
        assert_eq!(body, "# Page");
    }

    #[tokio::test]
    async fn test_fetch_timeout_is_http_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("late")
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let config = Config::new("k")
            .with_proxy_base(server.uri())
            .with_request_timeout(Duration::from_millis(50));
        let err = RatingsClient::new(config)
            .fetch("https://www.2kratings.com/slow")
            .await
            .unwrap_err();
        assert!(matches!(err, RatingsError::Http { .. }));
        assert!(err.is_recoverable());
    }

    #[tokio::test]
    async fn test_get_player_empty_page() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("\n"))
            .mount(&server)
            .await;

        let client = RatingsClient::new(Config::new("k").with_proxy_base(server.uri()));
        let err = client
            .get_player("https://www.2kratings.com/blank")
            .await
            .unwrap_err();
        assert!(matches!(err, RatingsError::EmptyDocument { .. }));
    }
}

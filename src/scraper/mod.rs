pub(crate) mod attributes;
pub(crate) mod badges;
pub(crate) mod player;

use std::path::Path;

use tracing::debug;

use crate::config::Config;
use crate::error::{RatingsError, Result};

/// Maximum number of body characters kept in an error for a failed fetch.
const SNIPPET_LEN: usize = 500;

/// Fetch `target` through the render proxy and return its markdown rendering.
pub(crate) async fn get_markdown(
    client: &reqwest::Client,
    config: &Config,
    target: &str,
) -> Result<String> {
    let url = config.proxy_url(target);
    debug!(url = %url, "fetching page");

    let response = client
        .get(&url)
        .bearer_auth(config.api_key())
        .timeout(config.request_timeout())
        .send()
        .await
        .map_err(|e| RatingsError::Http {
            url: url.clone(),
            source: e,
        })?;

    let status = response.status();
    if status != reqwest::StatusCode::OK {
        // The status is what matters here; a body that fails to read just leaves no snippet
        let body = response.text().await.unwrap_or_default();
        return Err(RatingsError::UnexpectedStatus {
            url,
            status,
            snippet: body.chars().take(SNIPPET_LEN).collect(),
        });
    }

    response.text().await.map_err(|e| RatingsError::ResponseBody { url, source: e })
}

/// Read a previously saved page from disk.
pub fn read_local_document(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading local page");
    std::fs::read_to_string(path).map_err(|e| RatingsError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Normalize a player name into the slug used in page URLs.
pub(crate) fn player_slug(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "-")
}

/// Candidate page URLs for a player, in the order they are tried.
pub(crate) fn candidate_urls(site_base: &str, name: &str) -> Vec<String> {
    let slug = player_slug(name);
    ["", "player/", "players/"]
        .iter()
        .map(|prefix| format!("{site_base}/{prefix}{slug}"))
        .collect()
}

/// Parse the leading run of ASCII digits in `text`.
pub(crate) fn leading_number(text: &str) -> Option<u32> {
    let end = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    text[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_slug() {
        assert_eq!(player_slug("Stephen Curry"), "stephen-curry");
        assert_eq!(player_slug("  LeBron James "), "lebron-james");
        assert_eq!(player_slug("Shai Gilgeous-Alexander"), "shai-gilgeous-alexander");
    }

    #[test]
    fn test_candidate_urls_order() {
        let urls = candidate_urls("https://www.2kratings.com", "Nikola Jokic");
        assert_eq!(
            urls,
            [
                "https://www.2kratings.com/nikola-jokic",
                "https://www.2kratings.com/player/nikola-jokic",
                "https://www.2kratings.com/players/nikola-jokic",
            ]
        );
    }

    #[test]
    fn test_leading_number() {
        assert_eq!(leading_number("98+1"), Some(98));
        assert_eq!(leading_number("91-1"), Some(91));
        assert_eq!(leading_number("75"), Some(75));
        assert_eq!(leading_number("+1"), None);
    }

    #[test]
    fn test_read_local_document_missing_file() {
        let err = read_local_document("/definitely/not/here.md").unwrap_err();
        assert!(matches!(err, RatingsError::Io { .. }));
    }
}

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, info, instrument, warn};

use crate::config::Config;
use crate::error::{RatingsError, Result};
use crate::model::{PlayerDetails, PlayerRecord, UNKNOWN_PLAYER};
use crate::scraper::{self, attributes, badges, candidate_urls};

const TITLE_MARKER: &str = "Title:";
const TITLE_ANNOTATION: &str = " NBA 2K25 Rating";

static OVERALL_RATING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Overall 2K Rating of (\d+)").expect("valid overall pattern"));

/// Labels whose value is the text of the link that follows, e.g. `Team: [Golden State Warriors](...)`.
static POSITION: Lazy<Regex> = Lazy::new(|| link_label("Position"));
static TEAM: Lazy<Regex> = Lazy::new(|| link_label("Team"));

/// Labels whose value is the rest of the line.
static HEIGHT: Lazy<Regex> = Lazy::new(|| line_label("Height"));
static WEIGHT: Lazy<Regex> = Lazy::new(|| line_label("Weight"));
static WINGSPAN: Lazy<Regex> = Lazy::new(|| line_label("Wingspan"));
static ARCHETYPE: Lazy<Regex> = Lazy::new(|| line_label("Archetype"));

fn link_label(label: &str) -> Regex {
    Regex::new(&format!(r"{label}:\s*\[([^\]]+)\]")).expect("valid link label pattern")
}

fn line_label(label: &str) -> Regex {
    Regex::new(&format!(r"{label}:\s*([^\n\r]+)")).expect("valid line label pattern")
}

/// Try each candidate page for `player_name` and return the first usable record.
#[instrument(skip(client, config))]
pub(crate) async fn search_player(
    client: &reqwest::Client,
    config: &Config,
    player_name: &str,
) -> Option<PlayerRecord> {
    if player_name.trim().is_empty() {
        warn!("empty player name");
        return None;
    }

    for (attempt, url) in candidate_urls(config.site_base(), player_name)
        .iter()
        .enumerate()
    {
        if attempt > 0 {
            tokio::time::sleep(config.attempt_delay()).await;
        }

        debug!(url = %url, attempt, "trying candidate");
        match get_player(client, config, url).await {
            Ok(record) => {
                info!(url = %url, name = %record.name, "found player");
                return Some(record);
            }
            Err(err) => warn!(url = %url, error = %err, "candidate failed"),
        }
    }

    warn!("all candidate urls failed");
    None
}

/// Fetch one player page and extract its record.
pub(crate) async fn get_player(
    client: &reqwest::Client,
    config: &Config,
    url: &str,
) -> Result<PlayerRecord> {
    let markdown = scraper::get_markdown(client, config, url).await?;
    parse_player_page(&markdown, url)
}

/// Extract a [`PlayerRecord`] from the markdown rendering of a player page.
///
/// Each data group is parsed independently; a group missing from the page
/// is left empty. Fails with [`RatingsError::EmptyDocument`] when the page
/// is blank or has no name, rating, attributes, or badges at all.
///
/// # Examples
///
/// ```
/// let page = "Title: Nikola Jokic NBA 2K25 Rating (Current)\n\n\
///             Nikola Jokic has an Overall 2K Rating of 97.";
/// let record = nba2k_ratings::parse_player_page(page, "https://www.2kratings.com/nikola-jokic")?;
/// assert_eq!(record.name, "Nikola Jokic");
/// assert_eq!(record.overall_rating, Some(97));
/// # Ok::<(), nba2k_ratings::RatingsError>(())
/// ```
pub fn parse_player_page(markdown: &str, source_url: &str) -> Result<PlayerRecord> {
    if markdown.trim().is_empty() {
        return Err(RatingsError::EmptyDocument {
            url: source_url.to_owned(),
        });
    }

    let record = PlayerRecord {
        name: parse_name(markdown),
        source_url: source_url.to_owned(),
        overall_rating: parse_overall_rating(markdown),
        attributes: attributes::parse_attributes(markdown),
        badges: badges::parse_badges(markdown),
        details: parse_details(markdown),
    };

    if !record.is_usable() {
        return Err(RatingsError::EmptyDocument {
            url: source_url.to_owned(),
        });
    }

    debug!(
        name = %record.name,
        overall = ?record.overall_rating,
        attributes = record.attributes.len(),
        badges = record.badges.total(),
        "parsed player page"
    );
    Ok(record)
}

/// Player name from the page title, without the rating annotation.
fn parse_name(content: &str) -> String {
    let Some((_, after)) = content.split_once(TITLE_MARKER) else {
        return UNKNOWN_PLAYER.to_string();
    };

    let title = after.lines().next().unwrap_or_default().trim();
    let name = match title.find(TITLE_ANNOTATION) {
        Some(end) => &title[..end],
        None => strip_parenthetical(title),
    }
    .trim();

    if name.is_empty() {
        UNKNOWN_PLAYER.to_string()
    } else {
        name.to_string()
    }
}

/// Drop a trailing `(...)` group.
fn strip_parenthetical(title: &str) -> &str {
    match (title.ends_with(')'), title.rfind('(')) {
        (true, Some(open)) => &title[..open],
        _ => title,
    }
}

fn parse_overall_rating(content: &str) -> Option<u32> {
    let caps = OVERALL_RATING.captures(content)?;
    match caps[1].parse::<u32>() {
        Ok(rating) => Some(rating),
        Err(err) => {
            debug!(raw = &caps[1], error = %err, "unreadable overall rating");
            None
        }
    }
}

fn parse_details(content: &str) -> PlayerDetails {
    PlayerDetails {
        position: capture_label(&POSITION, content),
        team: capture_label(&TEAM, content),
        height: capture_label(&HEIGHT, content),
        weight: capture_label(&WEIGHT, content),
        wingspan: capture_label(&WINGSPAN, content),
        archetype: capture_label(&ARCHETYPE, content),
    }
}

fn capture_label(pattern: &Regex, content: &str) -> Option<String> {
    pattern
        .captures(content)
        .map(|caps| caps[1].trim().to_string())
}

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use strum::IntoEnumIterator;
use tracing::debug;

use crate::model::{AttributeCategory, AttributeGroup, SubAttributeValue, SubAttributes};
use crate::scraper::leading_number;

/// Heading for each category, e.g. `#### 91-1 Outside Scoring`.
static CATEGORY_HEADINGS: Lazy<Vec<(AttributeCategory, Regex)>> = Lazy::new(|| {
    AttributeCategory::iter()
        .map(|category| {
            let pattern = format!(
                r"#### (\d+)(?:[+-]\d+)? {}",
                regex::escape(&category.to_string())
            );
            let heading = Regex::new(&pattern).expect("valid attribute heading pattern");
            (category, heading)
        })
        .collect()
});

/// Any rated heading; bounds the sub-attribute list of the previous one.
static ANY_HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"#### \d+(?:[+-]\d+)? [A-Za-z\s]+").expect("valid heading pattern"));

/// List item such as `*   98+1 Mid-Range Shot`.
static SUB_ATTRIBUTE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\*\s*(\d+(?:[+-]\d+)?)\s+([^\n\r]+)").expect("valid sub-attribute pattern")
});

/// Parse every attribute category present in the page.
pub(crate) fn parse_attributes(content: &str) -> BTreeMap<AttributeCategory, AttributeGroup> {
    CATEGORY_HEADINGS
        .iter()
        .filter_map(|(category, heading)| {
            let caps = heading.captures(content)?;
            let rating = match caps[1].parse::<u32>() {
                Ok(rating) => rating,
                Err(err) => {
                    debug!(%category, raw = &caps[1], error = %err, "unreadable category rating");
                    return None;
                }
            };
            let body = section_body(content, caps.get(0)?.end());
            Some((
                *category,
                AttributeGroup {
                    rating,
                    sub_attributes: parse_sub_attributes(body),
                },
            ))
        })
        .collect()
}

/// Text from `start` up to the next rated heading or the end of the page.
fn section_body(content: &str, start: usize) -> &str {
    let rest = &content[start..];
    match ANY_HEADING.find(rest) {
        Some(next) => &rest[..next.start()],
        None => rest,
    }
}

fn parse_sub_attributes(body: &str) -> SubAttributes {
    SUB_ATTRIBUTE
        .captures_iter(body)
        .filter_map(|caps| {
            let raw_text = caps[1].to_string();
            let Some(value) = leading_number(&raw_text) else {
                debug!(raw = %raw_text, "unreadable sub-attribute value");
                return None;
            };
            let name = caps[2].trim().to_string();
            Some((name, SubAttributeValue { value, raw_text }))
        })
        .collect()
}

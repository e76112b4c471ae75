use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use strum::IntoEnumIterator;
use tracing::debug;

use crate::model::{Badge, BadgeCategory, BadgeSummary, BadgeTier, TierCounts};

const SECTION_START: &str = "[NBA 2K25 Badges]";
const SECTION_END: &str = "NBA 2K25 Hot Zones";

/// What may follow a badge description.
const BLOCK_TERMINATORS: [&str; 3] = ["\n\n#### ", "\n\n[View All Badges]", "\n\n![Image"];

/// Summary icon followed by its count, e.g. `hof-sum.png)2`.
static TIER_COUNTS: Lazy<Vec<(BadgeTier, Regex)>> = Lazy::new(|| {
    BadgeTier::RANKED
        .iter()
        .filter_map(|&tier| {
            let icon = tier.count_icon()?;
            let pattern = format!(r"{}\)\s*(\d+)", regex::escape(icon));
            Some((tier, Regex::new(&pattern).expect("valid tier count pattern")))
        })
        .collect()
});

/// Category total, e.g. `Inside Scoring (9)`.
static CATEGORY_COUNTS: Lazy<Vec<(BadgeCategory, Regex)>> = Lazy::new(|| {
    BadgeCategory::iter()
        .map(|category| {
            let pattern = format!(r"{} \((\d+)\)", regex::escape(&category.to_string()));
            (
                category,
                Regex::new(&pattern).expect("valid badge category pattern"),
            )
        })
        .collect()
});

/// Badge heading, category line and the first description line.
static BADGE_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"#### ([^\n]+)\n\n([^\n]+)\n([^\n]+)").expect("valid badge block pattern")
});

/// Parse tier counts, category totals, and the listed badges.
pub(crate) fn parse_badges(content: &str) -> BadgeSummary {
    let counts = parse_tier_counts(content);
    let breakdown = parse_category_breakdown(content);
    let badges = parse_individual_badges(content, &counts);
    debug!(
        total = counts.total(),
        listed = badges.len(),
        "parsed badge summary"
    );
    BadgeSummary::new(counts, breakdown, badges)
}

fn parse_tier_counts(content: &str) -> TierCounts {
    let mut counts = TierCounts::default();
    for (tier, pattern) in TIER_COUNTS.iter() {
        if let Some(count) = pattern
            .captures(content)
            .and_then(|caps| caps[1].parse().ok())
        {
            counts.set(*tier, count);
        }
    }
    counts
}

fn parse_category_breakdown(content: &str) -> BTreeMap<BadgeCategory, u32> {
    CATEGORY_COUNTS
        .iter()
        .filter_map(|(category, pattern)| {
            let count = pattern.captures(content)?[1].parse::<u32>().ok()?;
            Some((*category, count))
        })
        .collect()
}

/// Badges listed in the badge section, with tiers assigned by position.
///
/// The page lists badges best tier first, so the n-th badge gets the tier
/// whose cumulative count first exceeds n. Listing stops at the counted total.
fn parse_individual_badges(content: &str, counts: &TierCounts) -> Vec<Badge> {
    let Some(section) = badge_section(content) else {
        debug!("no badge section found");
        return Vec::new();
    };

    badge_blocks(section)
        .into_iter()
        .take(usize::try_from(counts.total()).unwrap_or(usize::MAX))
        .enumerate()
        .map(|(index, (name, category, description))| Badge {
            name: name.trim().to_string(),
            tier: counts.tier_at(index),
            category: category.trim().to_string(),
            description: description.replace('\n', " ").trim().to_string(),
        })
        .collect()
}

/// The text from the badge section marker up to the next section, if any.
fn badge_section(content: &str) -> Option<&str> {
    let start = content.find(SECTION_START)?;
    let section = &content[start..];
    Some(match section.find(SECTION_END) {
        Some(end) => &section[..end],
        None => section,
    })
}

/// `(name, category, description)` for every well-formed badge block.
fn badge_blocks(section: &str) -> Vec<(&str, &str, &str)> {
    let mut blocks = Vec::new();
    let mut pos = 0;

    while let Some(caps) = BADGE_BLOCK.captures_at(section, pos) {
        let (Some(block), Some(name), Some(category), Some(first_line)) =
            (caps.get(0), caps.get(1), caps.get(2), caps.get(3))
        else {
            break;
        };

        let end = description_end(section, first_line.end());
        if is_block_end(&section[end..]) {
            blocks.push((
                name.as_str(),
                category.as_str(),
                &section[first_line.start()..end],
            ));
            pos = end;
        } else {
            // Not a badge; look for the next heading after this one
            pos = block.start() + 1;
        }
    }

    blocks
}

/// Extend a description over the following non-blank lines.
fn description_end(section: &str, mut end: usize) -> usize {
    loop {
        match section[end..].strip_prefix('\n') {
            Some(next) if !next.is_empty() && !next.starts_with('\n') => {
                end += 1 + next.find('\n').unwrap_or(next.len());
            }
            _ => return end,
        }
    }
}

fn is_block_end(rest: &str) -> bool {
    rest.is_empty() || rest == "\n" || BLOCK_TERMINATORS.iter().any(|t| rest.starts_with(t))
}

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Quality tier of a badge, best first.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumIter,
)]
pub enum BadgeTier {
    Legendary,
    #[serde(rename = "Hall of Fame")]
    #[strum(serialize = "Hall of Fame")]
    HallOfFame,
    Gold,
    Silver,
    Bronze,
    /// A badge past the last counted tier slot.
    Unknown,
}

impl BadgeTier {
    /// The counted tiers, in the order badges are listed on a player page.
    pub const RANKED: [BadgeTier; 5] = [
        BadgeTier::Legendary,
        BadgeTier::HallOfFame,
        BadgeTier::Gold,
        BadgeTier::Silver,
        BadgeTier::Bronze,
    ];

    /// File name of the summary icon whose caption holds this tier's count.
    pub fn count_icon(self) -> Option<&'static str> {
        match self {
            BadgeTier::Legendary => Some("legendary-sum.png"),
            BadgeTier::HallOfFame => Some("hof-sum.png"),
            BadgeTier::Gold => Some("gold-sum.png"),
            BadgeTier::Silver => Some("silver-sum.png"),
            BadgeTier::Bronze => Some("bronze-sum.png"),
            BadgeTier::Unknown => None,
        }
    }
}

/// One of the seven badge categories.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumIter,
)]
pub enum BadgeCategory {
    #[serde(rename = "Outside Scoring")]
    #[strum(serialize = "Outside Scoring")]
    OutsideScoring,
    #[serde(rename = "Inside Scoring")]
    #[strum(serialize = "Inside Scoring")]
    InsideScoring,
    Playmaking,
    Defense,
    Rebounding,
    #[serde(rename = "General Offense")]
    #[strum(serialize = "General Offense")]
    GeneralOffense,
    #[serde(rename = "All Around")]
    #[strum(serialize = "All Around")]
    AllAround,
}

/// Number of badges a player holds in each counted tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierCounts {
    pub legendary: u32,
    pub hof: u32,
    pub gold: u32,
    pub silver: u32,
    pub bronze: u32,
}

impl TierCounts {
    pub fn get(&self, tier: BadgeTier) -> u32 {
        match tier {
            BadgeTier::Legendary => self.legendary,
            BadgeTier::HallOfFame => self.hof,
            BadgeTier::Gold => self.gold,
            BadgeTier::Silver => self.silver,
            BadgeTier::Bronze => self.bronze,
            BadgeTier::Unknown => 0,
        }
    }

    pub fn set(&mut self, tier: BadgeTier, count: u32) {
        match tier {
            BadgeTier::Legendary => self.legendary = count,
            BadgeTier::HallOfFame => self.hof = count,
            BadgeTier::Gold => self.gold = count,
            BadgeTier::Silver => self.silver = count,
            BadgeTier::Bronze => self.bronze = count,
            BadgeTier::Unknown => {}
        }
    }

    /// Sum of the tier counts, widened so counts near `u32::MAX` cannot overflow.
    pub fn total(&self) -> u64 {
        BadgeTier::RANKED
            .iter()
            .map(|&t| u64::from(self.get(t)))
            .sum()
    }

    /// Tier of the badge at `index` when badges are listed best tier first.
    ///
    /// The first `legendary` positions are Legendary, the next `hof` are
    /// Hall of Fame, and so on; positions past the total are Unknown.
    pub fn tier_at(&self, index: usize) -> BadgeTier {
        let index = index as u64;
        let mut threshold = 0u64;
        for tier in BadgeTier::RANKED {
            threshold += u64::from(self.get(tier));
            if index < threshold {
                return tier;
            }
        }
        BadgeTier::Unknown
    }
}

/// A single badge listed on a player page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub name: String,
    pub tier: BadgeTier,
    pub category: String,
    pub description: String,
}

/// Badge inventory of a player.
///
/// `total` is always the sum of the tier counts and `individual_badges`
/// never holds more than `total` entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "StoredBadgeSummary")]
pub struct BadgeSummary {
    #[serde(flatten)]
    counts: TierCounts,
    total: u64,
    category_breakdown: BTreeMap<BadgeCategory, u32>,
    individual_badges: Vec<Badge>,
}

impl BadgeSummary {
    pub fn new(
        counts: TierCounts,
        category_breakdown: BTreeMap<BadgeCategory, u32>,
        mut individual_badges: Vec<Badge>,
    ) -> Self {
        let total = counts.total();
        individual_badges.truncate(usize::try_from(total).unwrap_or(usize::MAX));
        Self {
            counts,
            total,
            category_breakdown,
            individual_badges,
        }
    }

    pub fn counts(&self) -> &TierCounts {
        &self.counts
    }

    pub fn count(&self, tier: BadgeTier) -> u32 {
        self.counts.get(tier)
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn category_breakdown(&self) -> &BTreeMap<BadgeCategory, u32> {
        &self.category_breakdown
    }

    pub fn individual_badges(&self) -> &[Badge] {
        &self.individual_badges
    }
}

/// On-disk shape of a [`BadgeSummary`]; the stored total is ignored and recomputed.
#[derive(Deserialize)]
struct StoredBadgeSummary {
    #[serde(flatten)]
    counts: TierCounts,
    #[serde(default)]
    category_breakdown: BTreeMap<BadgeCategory, u32>,
    #[serde(default)]
    individual_badges: Vec<Badge>,
}

impl From<StoredBadgeSummary> for BadgeSummary {
    fn from(stored: StoredBadgeSummary) -> Self {
        BadgeSummary::new(
            stored.counts,
            stored.category_breakdown,
            stored.individual_badges,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(legendary: u32, hof: u32, gold: u32, silver: u32, bronze: u32) -> TierCounts {
        TierCounts {
            legendary,
            hof,
            gold,
            silver,
            bronze,
        }
    }

    fn badge(name: &str) -> Badge {
        Badge {
            name: name.to_string(),
            tier: BadgeTier::Unknown,
            category: "Defense".to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn test_total_is_sum_of_tiers() {
        for (a, b, c, d, e) in [(0, 0, 0, 0, 0), (1, 2, 3, 4, 5), (0, 7, 0, 0, 1), (3, 0, 0, 9, 0)] {
            let summary = BadgeSummary::new(counts(a, b, c, d, e), BTreeMap::new(), vec![]);
            assert_eq!(summary.total(), u64::from(a + b + c + d + e));
        }
    }

    #[test]
    fn test_total_does_not_overflow() {
        let counts = counts(u32::MAX, 1, u32::MAX, 0, 2);
        let summary = BadgeSummary::new(counts, BTreeMap::new(), vec![badge("A"), badge("B")]);
        assert_eq!(summary.total(), 2 * u64::from(u32::MAX) + 3);
        assert_eq!(summary.individual_badges().len(), 2);
        assert_eq!(counts.tier_at(0), BadgeTier::Legendary);
        assert_eq!(counts.tier_at(u32::MAX as usize), BadgeTier::HallOfFame);
    }

    #[test]
    fn test_tier_at_thresholds() {
        let counts = counts(1, 2, 0, 1, 1);
        let tiers: Vec<_> = (0..7).map(|i| counts.tier_at(i)).collect();
        assert_eq!(
            tiers,
            [
                BadgeTier::Legendary,
                BadgeTier::HallOfFame,
                BadgeTier::HallOfFame,
                BadgeTier::Silver,
                BadgeTier::Bronze,
                BadgeTier::Unknown,
                BadgeTier::Unknown,
            ]
        );
    }

    #[test]
    fn test_badges_capped_at_total() {
        let badges = vec![badge("A"), badge("B"), badge("C")];
        let summary = BadgeSummary::new(counts(0, 0, 1, 1, 0), BTreeMap::new(), badges);
        assert_eq!(summary.individual_badges().len(), 2);
        assert_eq!(summary.individual_badges()[1].name, "B");
    }

    #[test]
    fn test_tier_labels() {
        let labels: Vec<String> = [
            BadgeTier::Legendary,
            BadgeTier::HallOfFame,
            BadgeTier::Gold,
            BadgeTier::Silver,
            BadgeTier::Bronze,
            BadgeTier::Unknown,
        ]
        .iter()
        .map(ToString::to_string)
        .collect();
        assert_eq!(
            labels,
            ["Legendary", "Hall of Fame", "Gold", "Silver", "Bronze", "Unknown"]
        );
        assert_eq!(
            serde_json::to_string(&BadgeTier::HallOfFame).unwrap(),
            "\"Hall of Fame\""
        );
    }

    #[test]
    fn test_deserialize_recomputes_total() {
        let json = r#"{"legendary":1,"hof":2,"gold":0,"silver":0,"bronze":0,"total":99}"#;
        let summary: BadgeSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.total(), 3);
        assert!(summary.category_breakdown().is_empty());
    }
}

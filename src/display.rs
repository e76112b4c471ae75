use std::fmt::{self, Display, Formatter};

use itertools::Itertools;

use crate::model::{BadgeTier, PlayerRecord};

const MISSING: &str = "N/A";

impl Display for PlayerRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f, "  URL: {}", self.source_url)?;
        match self.overall_rating {
            Some(rating) => writeln!(f, "  Overall Rating: {rating}")?,
            None => writeln!(f, "  Overall Rating: {MISSING}")?,
        }

        let details = &self.details;
        for (label, value) in [
            ("Position", &details.position),
            ("Team", &details.team),
            ("Height", &details.height),
            ("Weight", &details.weight),
            ("Wingspan", &details.wingspan),
            ("Archetype", &details.archetype),
        ] {
            writeln!(f, "  {label}: {}", value.as_deref().unwrap_or(MISSING))?;
        }

        if !self.attributes.is_empty() {
            writeln!(f, "  Attributes:")?;
            for (category, group) in &self.attributes {
                writeln!(f, "    {category}: {}", group.rating)?;
                for (name, sub) in group.sub_attributes.iter() {
                    writeln!(f, "      {name}: {} ({})", sub.value, sub.raw_text)?;
                }
            }
        }

        let badges = &self.badges;
        writeln!(f, "  Badges: {} total", badges.total())?;
        writeln!(
            f,
            "    {}",
            BadgeTier::RANKED
                .iter()
                .map(|&tier| format!("{tier}: {}", badges.count(tier)))
                .join(", ")
        )?;

        if !badges.category_breakdown().is_empty() {
            writeln!(f, "    Breakdown by category:")?;
            for (category, count) in badges.category_breakdown() {
                writeln!(f, "      {category}: {count}")?;
            }
        }

        if !badges.individual_badges().is_empty() {
            writeln!(f, "    Individual Badges:")?;
            for badge in badges.individual_badges() {
                writeln!(f, "      {} {} ({})", badge.tier, badge.name, badge.category)?;
                writeln!(f, "        {}", badge.description)?;
            }
        }

        Ok(())
    }
}

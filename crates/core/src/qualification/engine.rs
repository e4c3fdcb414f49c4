//! Lead classification engine.
//!
//! Maps a lead's intake attributes — lodging type, revenue bracket,
//! acquisition source — to a qualification tier and board column. Pure and
//! total: every input resolves to a tier, no I/O, no state, so every view
//! (cards, filters, dashboards) recomputes it and agrees.
//!
//! Priority order, first match wins:
//! 1. a community acquisition source wins outright, regardless of lodging
//!    type or revenue;
//! 2. cabins/chalets and "other" lodging use the lower threshold ladder
//!    (community reachable below the bottom cutoff);
//! 3. hotels/inns/resorts use a higher ladder (community unreachable);
//! 4. unrecognized lodging falls back to a per-label table.

use rust_decimal::Decimal;

use crate::qualification::revenue::{representative_revenue, RevenueBracket};
use crate::qualification::{Classification, QualificationTier};

/// Acquisition source that always routes to the community column.
pub const COMMUNITY_SOURCE: &str = "comunidade";

/// Lodging-type strings as stored by the intake forms. Matching is exact
/// and case-sensitive; anything else takes the fallback path.
pub const LODGING_CABINS: &str = "Cabanas e Chalés";
pub const LODGING_OTHER: &str = "Outros";
pub const LODGING_HOTEL: &str = "Hotel, Pousada ou Resort";

/// Read-only view of the lead fields classification depends on. Derived
/// from a stored lead row each time a column is needed; never persisted.
#[derive(Clone, Copy, Debug, Default)]
pub struct LeadAttributes<'a> {
    pub lodging_type: Option<&'a str>,
    pub revenue_bracket: Option<&'a str>,
    pub source: Option<&'a str>,
}

pub trait QualificationEngine: Send + Sync {
    fn classify(&self, attributes: LeadAttributes<'_>) -> Classification;
}

#[derive(Default)]
pub struct DeterministicQualificationEngine;

impl QualificationEngine for DeterministicQualificationEngine {
    fn classify(&self, attributes: LeadAttributes<'_>) -> Classification {
        classify_lead(attributes)
    }
}

fn is_community_source(source: Option<&str>) -> bool {
    source.is_some_and(|source| source.eq_ignore_ascii_case(COMMUNITY_SOURCE))
}

/// Classify a lead. Total: never errors, worst case is the lowest general
/// tier.
pub fn classify_lead(attributes: LeadAttributes<'_>) -> Classification {
    // The acquisition source outranks every revenue/lodging rule.
    if is_community_source(attributes.source) {
        return Classification::of(QualificationTier::Community);
    }

    let label = attributes.revenue_bracket.map(str::trim).unwrap_or("");
    let value = representative_revenue(label);

    let tier = match attributes.lodging_type.map(str::trim).unwrap_or("") {
        LODGING_CABINS | LODGING_OTHER => cabins_and_other_tier(value),
        LODGING_HOTEL => hotel_tier(value),
        other => {
            if !other.is_empty() {
                tracing::debug!(lodging_type = other, "unrecognized lodging type, using label fallback");
            }
            fallback_tier(label)
        }
    };

    // Invariant: the early return above is the only path for a community
    // source; no branch below it may produce a different answer for one.
    debug_assert!(!is_community_source(attributes.source));

    Classification::of(tier)
}

/// Ladder for "Cabanas e Chalés" and "Outros". Cutoffs are inclusive
/// upward: a value exactly at a cutoff belongs to the higher tier.
fn cabins_and_other_tier(value: Decimal) -> QualificationTier {
    if value < Decimal::from(15_000u32) {
        QualificationTier::Community
    } else if value < Decimal::from(30_000u32) {
        QualificationTier::Low
    } else if value < Decimal::from(50_000u32) {
        QualificationTier::Medium
    } else if value < Decimal::from(100_000u32) {
        QualificationTier::Qualified
    } else {
        QualificationTier::Ultra
    }
}

/// Ladder for "Hotel, Pousada ou Resort". Every cutoff sits above the
/// cabins ladder's, and community is not reachable here.
fn hotel_tier(value: Decimal) -> QualificationTier {
    if value < Decimal::from(50_000u32) {
        QualificationTier::Low
    } else if value < Decimal::from(100_000u32) {
        QualificationTier::Medium
    } else if value < Decimal::from(300_000u32) {
        QualificationTier::Qualified
    } else {
        QualificationTier::Ultra
    }
}

/// Fallback for absent or unrecognized lodging types: keyed on the label
/// itself rather than the parsed value. The lowest label forces community;
/// labels outside the vocabulary read as the lowest general tier.
fn fallback_tier(label: &str) -> QualificationTier {
    match RevenueBracket::from_label(label) {
        Some(RevenueBracket::UnderFiveThousand) => QualificationTier::Community,
        Some(RevenueBracket::FiveToTwentyThousand | RevenueBracket::UnderTwentyThousand) => {
            QualificationTier::Low
        }
        Some(RevenueBracket::TwentyToFiftyThousand) => QualificationTier::Medium,
        Some(RevenueBracket::FiftyToHundredThousand) => QualificationTier::Qualified,
        Some(
            RevenueBracket::HundredToFiveHundredThousand
            | RevenueBracket::OverFiveHundredThousand
            | RevenueBracket::OverHundredThousand,
        ) => QualificationTier::Ultra,
        None => {
            if !label.is_empty() {
                tracing::warn!(label, "revenue bracket outside the vocabulary, reading as lowest tier");
            }
            QualificationTier::Low
        }
    }
}

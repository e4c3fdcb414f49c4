//! Revenue-bracket vocabulary and parsing.
//!
//! Intake forms capture average monthly revenue as free-text labels
//! ("Menos de R$ 5 mil", "Entre R$ 20 a R$ 50 mil", ...). The closed
//! [`RevenueBracket`] enum is the boundary type for that vocabulary, and
//! [`representative_revenue`] turns any label into a single number the
//! threshold tables can compare against.
//!
//! This is not a generic range parser: only the known label combinations
//! resolve, and everything else reads as zero, i.e. the lowest bucket.
//! Adding a bracket option to an intake form means adding it here first,
//! otherwise those leads silently land in the lowest tier.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// The closed set of revenue-bracket labels the backend stores. The last
/// two are legacy labels that no longer appear on intake forms but still
/// exist on older lead rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RevenueBracket {
    #[serde(rename = "Menos de R$ 5 mil")]
    UnderFiveThousand,
    #[serde(rename = "Entre R$ 5 a R$ 20 mil")]
    FiveToTwentyThousand,
    #[serde(rename = "Entre R$ 20 a R$ 50 mil")]
    TwentyToFiftyThousand,
    #[serde(rename = "Entre R$ 50 a R$ 100 mil")]
    FiftyToHundredThousand,
    #[serde(rename = "Entre R$ 100 a R$ 500 mil")]
    HundredToFiveHundredThousand,
    #[serde(rename = "Mais de R$ 500 mil")]
    OverFiveHundredThousand,
    #[serde(rename = "Menos de R$ 20 mil")]
    UnderTwentyThousand,
    #[serde(rename = "Mais de R$ 100 mil")]
    OverHundredThousand,
}

impl RevenueBracket {
    pub const ALL: [RevenueBracket; 8] = [
        RevenueBracket::UnderFiveThousand,
        RevenueBracket::FiveToTwentyThousand,
        RevenueBracket::TwentyToFiftyThousand,
        RevenueBracket::FiftyToHundredThousand,
        RevenueBracket::HundredToFiveHundredThousand,
        RevenueBracket::OverFiveHundredThousand,
        RevenueBracket::UnderTwentyThousand,
        RevenueBracket::OverHundredThousand,
    ];

    /// The exact label as stored on lead rows and shown on intake forms.
    pub fn label(self) -> &'static str {
        match self {
            RevenueBracket::UnderFiveThousand => "Menos de R$ 5 mil",
            RevenueBracket::FiveToTwentyThousand => "Entre R$ 5 a R$ 20 mil",
            RevenueBracket::TwentyToFiftyThousand => "Entre R$ 20 a R$ 50 mil",
            RevenueBracket::FiftyToHundredThousand => "Entre R$ 50 a R$ 100 mil",
            RevenueBracket::HundredToFiveHundredThousand => "Entre R$ 100 a R$ 500 mil",
            RevenueBracket::OverFiveHundredThousand => "Mais de R$ 500 mil",
            RevenueBracket::UnderTwentyThousand => "Menos de R$ 20 mil",
            RevenueBracket::OverHundredThousand => "Mais de R$ 100 mil",
        }
    }

    /// Adapter from legacy free text. Tolerates surrounding whitespace but
    /// is otherwise exact; returns `None` for anything outside the
    /// vocabulary.
    pub fn from_label(label: &str) -> Option<RevenueBracket> {
        let trimmed = label.trim();
        RevenueBracket::ALL.into_iter().find(|bracket| bracket.label() == trimmed)
    }
}

impl FromStr for RevenueBracket {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RevenueBracket::from_label(s).ok_or_else(|| DomainError::UnknownRevenueBracket(s.to_owned()))
    }
}

/// Converts a revenue-bracket label into a representative value for
/// threshold comparison.
///
/// Normalizes the label (case fold, strip whitespace and the currency
/// marker, expand "k"/"mil" to thousands and "MM" to millions), recognizes
/// the three known shapes — "menos de N", "entre N a M", "mais de N" — and
/// resolves through a table keyed by the specific bounds in use. Unknown
/// labels, unknown bounds, and empty input all read as zero.
pub fn representative_revenue(label: &str) -> Decimal {
    if label.trim().is_empty() {
        return Decimal::ZERO;
    }

    let normalized = normalize(label);
    let bounds = amounts(&normalized);

    let value = if normalized.starts_with("menosde") {
        match bounds.as_slice() {
            [bound] => less_than_value(*bound),
            _ => None,
        }
    } else if normalized.starts_with("entre") {
        match bounds.as_slice() {
            [low, high] => between_value(scale_lower_bound(*low, *high), *high),
            _ => None,
        }
    } else if normalized.starts_with("maisde") {
        match bounds.as_slice() {
            [bound] => more_than_value(*bound),
            _ => None,
        }
    } else {
        None
    };

    match value {
        Some(value) => Decimal::from(value),
        None => {
            tracing::warn!(label, "unrecognized revenue bracket label, reading as zero");
            Decimal::ZERO
        }
    }
}

/// Lowercase, drop whitespace and "r$", and expand the shorthand suffixes
/// so every amount is a plain digit run.
fn normalize(label: &str) -> String {
    let folded: String = label.to_lowercase().chars().filter(|c| !c.is_whitespace()).collect();
    folded.replace("r$", "").replace("mil", "000").replace("mm", "000000").replace('k', "000")
}

/// Digit runs of the normalized label, in order.
fn amounts(normalized: &str) -> Vec<u64> {
    let mut out = Vec::new();
    let mut run = String::new();
    for c in normalized.chars() {
        if c.is_ascii_digit() {
            run.push(c);
        } else if !run.is_empty() {
            out.extend(run.parse::<u64>().ok());
            run.clear();
        }
    }
    if !run.is_empty() {
        out.extend(run.parse::<u64>().ok());
    }
    out
}

/// In "entre" labels the thousand suffix is written once, after the upper
/// bound ("Entre R$ 50 a R$ 100 mil"), but applies to both bounds.
fn scale_lower_bound(low: u64, high: u64) -> u64 {
    if low < 1_000 && high >= 1_000 {
        low * 1_000
    } else {
        low
    }
}

// The representative values below are business constants, not derived
// midpoints. Several are intentionally approximate (both "menos de 15 mil"
// and "menos de 20 mil" read as 10 000, and some "entre" ranges overlap
// across the lodging tables); do not re-derive them.

fn less_than_value(bound: u64) -> Option<u64> {
    match bound {
        5_000 => Some(2_500),
        15_000 => Some(10_000),
        20_000 => Some(10_000),
        50_000 => Some(25_000),
        _ => None,
    }
}

fn between_value(low: u64, high: u64) -> Option<u64> {
    match (low, high) {
        (5_000, 20_000) => Some(12_500),
        (15_000, 30_000) => Some(22_500),
        (20_000, 50_000) => Some(35_000),
        (30_000, 50_000) => Some(40_000),
        (50_000, 100_000) => Some(75_000),
        (100_000, 300_000) => Some(200_000),
        (100_000, 500_000) => Some(300_000),
        (300_000, 800_000) => Some(550_000),
        (800_000, 2_000_000) => Some(1_400_000),
        _ => None,
    }
}

fn more_than_value(bound: u64) -> Option<u64> {
    match bound {
        100_000 => Some(150_000),
        300_000 => Some(400_000),
        500_000 => Some(600_000),
        2_000_000 => Some(3_000_000),
        _ => None,
    }
}

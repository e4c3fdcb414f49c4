//! Lead-list filtering.
//!
//! Mirrors the dashboard's filter bar: every criterion is optional and all
//! set criteria must match. The column criterion reuses the classification
//! engine, so filtering and the board always agree on where a lead sits.

use chrono::NaiveDate;

use crate::domain::lead::Lead;
use crate::qualification::board::Classifiable;
use crate::qualification::engine::classify_lead;
use crate::qualification::BoardColumn;

#[derive(Clone, Debug, Default)]
pub struct LeadFilter {
    /// Case-insensitive substring match on the lead name.
    pub search_term: Option<String>,
    /// Exact match on the stored lodging type.
    pub lodging_type: Option<String>,
    /// Case-insensitive match on the origin country.
    pub origin: Option<String>,
    /// Case-insensitive match on the acquisition source.
    pub source: Option<String>,
    /// Match on the computed board column.
    pub column: Option<BoardColumn>,
    /// Inclusive creation-date bounds, by calendar date (UTC).
    pub created_from: Option<NaiveDate>,
    pub created_to: Option<NaiveDate>,
}

impl LeadFilter {
    pub fn matches(&self, lead: &Lead) -> bool {
        if let Some(term) = &self.search_term {
            if !lead.name.to_lowercase().contains(&term.to_lowercase()) {
                return false;
            }
        }

        if let Some(lodging) = &self.lodging_type {
            if lead.lodging_type.as_deref() != Some(lodging.as_str()) {
                return false;
            }
        }

        if let Some(origin) = &self.origin {
            let matches = lead
                .origin
                .as_deref()
                .is_some_and(|value| value.eq_ignore_ascii_case(origin));
            if !matches {
                return false;
            }
        }

        if let Some(source) = &self.source {
            let matches = lead
                .source
                .as_deref()
                .is_some_and(|value| value.eq_ignore_ascii_case(source));
            if !matches {
                return false;
            }
        }

        if let Some(column) = self.column {
            if classify_lead(lead.attributes()).column != column {
                return false;
            }
        }

        let created = lead.created_at.date_naive();
        if let Some(from) = self.created_from {
            if created < from {
                return false;
            }
        }
        if let Some(to) = self.created_to {
            if created > to {
                return false;
            }
        }

        true
    }

    /// Filters a lead list, preserving input order.
    pub fn apply<'a>(&self, leads: &'a [Lead]) -> Vec<&'a Lead> {
        leads.iter().filter(|lead| self.matches(lead)).collect()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone, Utc};

    use super::LeadFilter;
    use crate::domain::lead::{Lead, LeadId};
    use crate::qualification::BoardColumn;

    fn lead(id: i64, name: &str, source: &str, day: u32) -> Lead {
        Lead {
            id: LeadId(id),
            name: name.to_owned(),
            whatsapp: None,
            lodging_type: Some("Hotel, Pousada ou Resort".to_owned()),
            lodging_detail: None,
            revenue_bracket: Some("Entre R$ 50 a R$ 100 mil".to_owned()),
            instagram: None,
            room_count: None,
            owner_sdr_id: None,
            pipeline_status: None,
            source: Some(source.to_owned()),
            origin: Some("Brasil".to_owned()),
            email: None,
            property_name: None,
            created_at: Utc.with_ymd_and_hms(2026, 3, day, 12, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2026, 3, day, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn empty_filter_keeps_everything_in_order() {
        let leads = vec![lead(1, "Alfa", "site", 1), lead(2, "Beta", "quiz", 2)];
        let kept = LeadFilter::default().apply(&leads);
        let names: Vec<&str> = kept.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["Alfa", "Beta"]);
    }

    #[test]
    fn search_term_is_a_case_insensitive_substring() {
        let leads = vec![lead(1, "Pousada Recanto", "site", 1), lead(2, "Chalé Azul", "site", 1)];
        let filter = LeadFilter { search_term: Some("recanto".to_owned()), ..Default::default() };
        assert_eq!(filter.apply(&leads).len(), 1);
    }

    #[test]
    fn source_matches_ignore_case() {
        let leads = vec![lead(1, "Alfa", "VSL", 1)];
        let filter = LeadFilter { source: Some("vsl".to_owned()), ..Default::default() };
        assert_eq!(filter.apply(&leads).len(), 1);
    }

    #[test]
    fn column_filter_uses_the_classification_engine() {
        // Hotel at 50-100k classifies into Nível 2.
        let leads = vec![lead(1, "Alfa", "site", 1)];
        let level2 = LeadFilter { column: Some(BoardColumn::Level2), ..Default::default() };
        assert_eq!(level2.apply(&leads).len(), 1);
        let level4 = LeadFilter { column: Some(BoardColumn::Level4), ..Default::default() };
        assert!(level4.apply(&leads).is_empty());
    }

    #[test]
    fn date_bounds_are_inclusive() {
        let leads = vec![lead(1, "Alfa", "site", 1), lead(2, "Beta", "site", 5), lead(3, "Gama", "site", 9)];
        let filter = LeadFilter {
            created_from: NaiveDate::from_ymd_opt(2026, 3, 1),
            created_to: NaiveDate::from_ymd_opt(2026, 3, 5),
            ..Default::default()
        };
        let names: Vec<&str> = filter.apply(&leads).iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["Alfa", "Beta"]);
    }

    #[test]
    fn all_criteria_are_conjunctive() {
        let leads = vec![lead(1, "Alfa", "site", 1), lead(2, "Alfa Beta", "quiz", 1)];
        let filter = LeadFilter {
            search_term: Some("alfa".to_owned()),
            source: Some("quiz".to_owned()),
            ..Default::default()
        };
        let names: Vec<&str> = filter.apply(&leads).iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["Alfa Beta"]);
    }

    #[test]
    fn missing_fields_never_match_a_set_criterion() {
        let mut no_origin = lead(1, "Alfa", "site", 1);
        no_origin.origin = None;
        let filter = LeadFilter { origin: Some("Brasil".to_owned()), ..Default::default() };
        assert!(!filter.matches(&no_origin));
    }
}

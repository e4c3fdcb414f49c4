//! Board grouping and column visibility.

use std::collections::BTreeMap;

use crate::qualification::engine::{classify_lead, LeadAttributes};
use crate::qualification::{BoardColumn, QualificationTier};

/// Anything carrying the three intake attributes classification reads.
/// The board and filter helpers stay generic over the concrete record.
pub trait Classifiable {
    fn lodging_type(&self) -> Option<&str>;
    fn revenue_bracket(&self) -> Option<&str>;
    fn source(&self) -> Option<&str>;

    fn attributes(&self) -> LeadAttributes<'_> {
        LeadAttributes {
            lodging_type: self.lodging_type(),
            revenue_bracket: self.revenue_bracket(),
            source: self.source(),
        }
    }
}

/// Buckets leads by their computed board column. All five columns are
/// present as keys even when empty, relative input order is preserved
/// within each bucket, and iteration runs in render order (`BoardColumn`'s
/// `Ord` is its render order).
pub fn group_by_column<T: Classifiable>(leads: Vec<T>) -> BTreeMap<BoardColumn, Vec<T>> {
    let mut groups: BTreeMap<BoardColumn, Vec<T>> =
        BoardColumn::RENDER_ORDER.into_iter().map(|column| (column, Vec::new())).collect();

    for lead in leads {
        let column = classify_lead(lead.attributes()).column;
        groups.entry(column).or_default().push(lead);
    }

    groups
}

/// Whether a viewer whose permitted tiers are `permitted` may see leads in
/// `column`. Reverse-maps the column to its tier and tests membership;
/// never errors.
pub fn can_view_column(permitted: &[QualificationTier], column: BoardColumn) -> bool {
    permitted.contains(&column.tier())
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::qualification::{BoardColumn, QualificationTier};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "admin")]
    Admin,
    #[serde(rename = "sdr")]
    Sdr,
}

/// A dashboard user. Admins see every column; reps see only the columns
/// whose tiers an admin granted them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub name: String,
    pub email: Option<String>,
    pub role: Role,
    pub visible_qualifications: Vec<QualificationTier>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    pub fn can_view_column(&self, column: BoardColumn) -> bool {
        crate::qualification::board::can_view_column(&self.visible_qualifications, column)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::{Profile, Role};
    use crate::qualification::{BoardColumn, QualificationTier};

    fn rep(visible: Vec<QualificationTier>) -> Profile {
        Profile {
            id: Uuid::new_v4(),
            name: "Ana".to_owned(),
            email: Some("ana@example.com".to_owned()),
            role: Role::Sdr,
            visible_qualifications: visible,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn rep_sees_only_granted_columns() {
        let profile = rep(vec![QualificationTier::Qualified, QualificationTier::Ultra]);
        assert!(profile.can_view_column(BoardColumn::Level3));
        assert!(profile.can_view_column(BoardColumn::Level4));
        assert!(!profile.can_view_column(BoardColumn::Level1));
        assert!(!profile.can_view_column(BoardColumn::Community));
    }

    #[test]
    fn role_serializes_to_backend_values() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        assert_eq!(serde_json::from_str::<Role>("\"sdr\"").unwrap(), Role::Sdr);
    }

    #[test]
    fn visible_qualifications_round_trip_wire_values() {
        let profile = rep(vec![QualificationTier::Community]);
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["visible_qualifications"][0], "COMUNIDADE");
    }
}

//! Lead qualification model.
//!
//! A lead's intake attributes resolve to a [`QualificationTier`], an internal
//! rank used to route the lead to a rep queue. Each tier corresponds to
//! exactly one [`BoardColumn`], the user-facing Kanban column. The mapping is
//! total and bijective, so anything that can name a column can recover its
//! tier and vice versa.

pub mod board;
pub mod engine;
pub mod revenue;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Internal qualification rank. Wire values match the backend's
/// `visible_qualifications` column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum QualificationTier {
    /// Lowest general tier.
    #[serde(rename = "RUIM")]
    Low,
    #[serde(rename = "MEDIO")]
    Medium,
    #[serde(rename = "QUALIFICADO")]
    Qualified,
    /// Highest general tier.
    #[serde(rename = "ULTRA")]
    Ultra,
    /// Community-sourced or below-threshold leads; routed outside the
    /// general rep queues.
    #[serde(rename = "COMUNIDADE")]
    Community,
}

impl QualificationTier {
    pub const ALL: [QualificationTier; 5] = [
        QualificationTier::Low,
        QualificationTier::Medium,
        QualificationTier::Qualified,
        QualificationTier::Ultra,
        QualificationTier::Community,
    ];

    /// The Kanban column this tier renders into.
    pub fn column(self) -> BoardColumn {
        match self {
            QualificationTier::Low => BoardColumn::Level1,
            QualificationTier::Medium => BoardColumn::Level2,
            QualificationTier::Qualified => BoardColumn::Level3,
            QualificationTier::Ultra => BoardColumn::Level4,
            QualificationTier::Community => BoardColumn::Community,
        }
    }
}

/// User-facing Kanban column. Variant order is render order, which `Ord`
/// relies on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BoardColumn {
    #[serde(rename = "Nível 1")]
    Level1,
    #[serde(rename = "Nível 2")]
    Level2,
    #[serde(rename = "Nível 3")]
    Level3,
    #[serde(rename = "Nível 4")]
    Level4,
    #[serde(rename = "Comunidade")]
    Community,
}

impl BoardColumn {
    pub const RENDER_ORDER: [BoardColumn; 5] = [
        BoardColumn::Level1,
        BoardColumn::Level2,
        BoardColumn::Level3,
        BoardColumn::Level4,
        BoardColumn::Community,
    ];

    /// Inverse of [`QualificationTier::column`].
    pub fn tier(self) -> QualificationTier {
        match self {
            BoardColumn::Level1 => QualificationTier::Low,
            BoardColumn::Level2 => QualificationTier::Medium,
            BoardColumn::Level3 => QualificationTier::Qualified,
            BoardColumn::Level4 => QualificationTier::Ultra,
            BoardColumn::Community => QualificationTier::Community,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BoardColumn::Level1 => "Nível 1",
            BoardColumn::Level2 => "Nível 2",
            BoardColumn::Level3 => "Nível 3",
            BoardColumn::Level4 => "Nível 4",
            BoardColumn::Community => "Comunidade",
        }
    }

    /// Header accent color used by the board renderer.
    pub fn color(self) -> &'static str {
        match self {
            BoardColumn::Level1 => "#dc2626",
            BoardColumn::Level2 => "#f59e0b",
            BoardColumn::Level3 => "#10b981",
            BoardColumn::Level4 => "#8b5cf6",
            BoardColumn::Community => "#0ea5e9",
        }
    }
}

impl fmt::Display for BoardColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BoardColumn {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BoardColumn::RENDER_ORDER
            .into_iter()
            .find(|column| column.label() == s.trim())
            .ok_or_else(|| DomainError::UnknownBoardColumn(s.to_owned()))
    }
}

/// Result of classifying a lead: the tier and the column it renders in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub tier: QualificationTier,
    pub column: BoardColumn,
}

impl Classification {
    pub fn of(tier: QualificationTier) -> Self {
        Self { tier, column: tier.column() }
    }
}

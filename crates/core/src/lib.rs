pub mod domain;
pub mod errors;
pub mod filters;
pub mod qualification;

pub use domain::lead::{Lead, LeadId, PipelineStatus};
pub use domain::profile::{Profile, Role};
pub use errors::DomainError;
pub use filters::LeadFilter;
pub use qualification::board::{can_view_column, group_by_column, Classifiable};
pub use qualification::engine::{
    classify_lead, DeterministicQualificationEngine, LeadAttributes, QualificationEngine,
};
pub use qualification::revenue::{representative_revenue, RevenueBracket};
pub use qualification::{BoardColumn, Classification, QualificationTier};

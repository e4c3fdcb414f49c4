use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::qualification::board::Classifiable;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeadId(pub i64);

/// A rep's personal pipeline stage. Wire values match the backend's
/// `status_sdr` column; `None` on a lead means it still sits in the global
/// pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PipelineStatus {
    #[serde(rename = "MEUS_LEADS")]
    MyLeads,
    #[serde(rename = "QUALIFICACAO")]
    Qualifying,
    #[serde(rename = "PERTO_REUNIAO")]
    NearMeeting,
    #[serde(rename = "ENCAMINHADO_REUNIAO")]
    MeetingForwarded,
    #[serde(rename = "VENDEU")]
    Won,
    #[serde(rename = "LEAD_PERDIDO")]
    Lost,
}

impl PipelineStatus {
    /// Column title on the rep's personal board.
    pub fn label(self) -> &'static str {
        match self {
            PipelineStatus::MyLeads => "Meus leads",
            PipelineStatus::Qualifying => "Qualificação",
            PipelineStatus::NearMeeting => "Perto de marcar reunião",
            PipelineStatus::MeetingForwarded => "Encaminhados para reunião",
            PipelineStatus::Won => "Vendeu",
            PipelineStatus::Lost => "Lead perdido",
        }
    }

    /// Next stage when a rep forwards a lead; terminal stages return
    /// `None`.
    pub fn advanced(self) -> Option<PipelineStatus> {
        match self {
            PipelineStatus::MyLeads => Some(PipelineStatus::Qualifying),
            PipelineStatus::Qualifying => Some(PipelineStatus::NearMeeting),
            PipelineStatus::NearMeeting => Some(PipelineStatus::MeetingForwarded),
            PipelineStatus::MeetingForwarded
            | PipelineStatus::Won
            | PipelineStatus::Lost => None,
        }
    }

    /// Previous stage when a rep sends a lead back.
    pub fn returned(self) -> Option<PipelineStatus> {
        match self {
            PipelineStatus::MeetingForwarded => Some(PipelineStatus::NearMeeting),
            PipelineStatus::NearMeeting => Some(PipelineStatus::Qualifying),
            PipelineStatus::Qualifying => Some(PipelineStatus::MyLeads),
            PipelineStatus::MyLeads | PipelineStatus::Won | PipelineStatus::Lost => None,
        }
    }
}

/// A stored lead row. Field renames track the backend's column names so
/// rows deserialize unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    pub id: LeadId,
    #[serde(rename = "nome")]
    pub name: String,
    pub whatsapp: Option<String>,
    #[serde(rename = "tipo_hospedagem")]
    pub lodging_type: Option<String>,
    #[serde(rename = "outros_hospedagem")]
    pub lodging_detail: Option<String>,
    #[serde(rename = "faturamento_medio")]
    pub revenue_bracket: Option<String>,
    pub instagram: Option<String>,
    #[serde(rename = "qtd_quartos_hospedagens")]
    pub room_count: Option<String>,
    pub owner_sdr_id: Option<Uuid>,
    #[serde(rename = "status_sdr")]
    pub pipeline_status: Option<PipelineStatus>,
    #[serde(rename = "fonte")]
    pub source: Option<String>,
    #[serde(rename = "origem")]
    pub origin: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "nome_hospedagem")]
    pub property_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Classifiable for Lead {
    fn lodging_type(&self) -> Option<&str> {
        self.lodging_type.as_deref()
    }

    fn revenue_bracket(&self) -> Option<&str> {
        self.revenue_bracket.as_deref()
    }

    fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}

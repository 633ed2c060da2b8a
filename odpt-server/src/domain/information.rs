//! Service disruption notices.

use chrono::{DateTime, FixedOffset};

use crate::odpt::TrainInformationDto;

/// Current operating status of one railway, as published by its operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainInformation {
    pub id: String,
    /// When the notice was issued. Absent if missing or not RFC 3339.
    pub date: Option<DateTime<FixedOffset>>,
    pub operator: String,
    pub railway: Option<String>,
    pub information_text: String,
}

impl From<TrainInformationDto> for TrainInformation {
    fn from(dto: TrainInformationDto) -> Self {
        let date = dto
            .date
            .as_deref()
            .and_then(|d| DateTime::parse_from_rfc3339(d).ok());
        let information_text = dto
            .information_text
            .as_ref()
            .and_then(|t| t.preferred())
            .unwrap_or_default()
            .to_string();

        Self {
            id: dto.id,
            date,
            operator: dto.operator,
            railway: dto.railway,
            information_text,
        }
    }
}

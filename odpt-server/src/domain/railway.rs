//! Railway lines.

use crate::odpt::RailwayDto;

/// A rail line (not a vehicle), operated by exactly one operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Railway {
    pub id: String,
    pub name: String,
    pub same_as: String,
    /// `same_as` of the operating [`Operator`](super::Operator).
    pub operator: String,
}

impl From<RailwayDto> for Railway {
    fn from(dto: RailwayDto) -> Self {
        Self {
            id: dto.id,
            name: dto.title,
            same_as: dto.same_as,
            operator: dto.operator,
        }
    }
}

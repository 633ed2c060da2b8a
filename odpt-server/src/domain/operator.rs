//! Railway operators.

use crate::odpt::OperatorDto;

/// A company or authority running one or more railways.
///
/// `same_as` is the cross-catalog identifier that stations and railways
/// use to refer back to their operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operator {
    pub id: String,
    pub name: String,
    pub same_as: String,
}

impl From<OperatorDto> for Operator {
    fn from(dto: OperatorDto) -> Self {
        Self {
            id: dto.id,
            name: dto.title,
            same_as: dto.same_as,
        }
    }
}

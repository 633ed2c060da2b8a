//! Ticket fares between two stations.

use crate::odpt::RailwayFareDto;

/// Fare for one journey between two stations on the same operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainFare {
    pub id: String,
    pub same_as: String,
    pub operator: String,
    /// Composite fare key of the origin station.
    pub from_station: String,
    /// Composite fare key of the destination station.
    pub to_station: String,
    /// Paper ticket fare in yen.
    pub ticket_fare: Option<u32>,
    /// IC card fare in yen, where the operator publishes one.
    pub ic_card_fare: Option<u32>,
}

impl From<RailwayFareDto> for TrainFare {
    fn from(dto: RailwayFareDto) -> Self {
        Self {
            id: dto.id,
            same_as: dto.same_as,
            operator: dto.operator,
            from_station: dto.from_station,
            to_station: dto.to_station,
            ticket_fare: dto.ticket_fare,
            ic_card_fare: dto.ic_card_fare,
        }
    }
}

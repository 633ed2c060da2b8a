//! Wire types for ODPT API responses.
//!
//! The catalog speaks JSON-LD, so every field is renamed from its
//! vocabulary-prefixed key. Fields default when absent: a record with a
//! missing field is a data-quality issue, not a parse failure.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// `odpt:Station` record. One per (station, railway) pairing.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StationDto {
    #[serde(rename = "@id", default)]
    pub id: String,

    #[serde(rename = "dc:title", default)]
    pub title: String,

    #[serde(rename = "owl:sameAs", default)]
    pub same_as: String,

    #[serde(rename = "odpt:operator", default)]
    pub operator: String,

    #[serde(rename = "odpt:railway", default)]
    pub railway: String,
}

/// `odpt:Operator` record.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OperatorDto {
    #[serde(rename = "@id", default)]
    pub id: String,

    #[serde(rename = "dc:title", default)]
    pub title: String,

    #[serde(rename = "owl:sameAs", default)]
    pub same_as: String,
}

/// `odpt:Railway` record.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RailwayDto {
    #[serde(rename = "@id", default)]
    pub id: String,

    #[serde(rename = "dc:title", default)]
    pub title: String,

    #[serde(rename = "owl:sameAs", default)]
    pub same_as: String,

    #[serde(rename = "odpt:operator", default)]
    pub operator: String,
}

/// `odpt:TrainInformation` record.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TrainInformationDto {
    #[serde(rename = "@id", default)]
    pub id: String,

    #[serde(rename = "dc:date", default)]
    pub date: Option<String>,

    #[serde(rename = "odpt:operator", default)]
    pub operator: String,

    #[serde(rename = "odpt:railway", default)]
    pub railway: Option<String>,

    #[serde(rename = "odpt:trainInformationText", default)]
    pub information_text: Option<LocalizedText>,
}

/// `odpt:RailwayFare` record.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RailwayFareDto {
    #[serde(rename = "@id", default)]
    pub id: String,

    #[serde(rename = "owl:sameAs", default)]
    pub same_as: String,

    #[serde(rename = "odpt:operator", default)]
    pub operator: String,

    #[serde(rename = "odpt:fromStation", default)]
    pub from_station: String,

    #[serde(rename = "odpt:toStation", default)]
    pub to_station: String,

    #[serde(rename = "odpt:ticketFare", default)]
    pub ticket_fare: Option<u32>,

    #[serde(rename = "odpt:icCardFare", default)]
    pub ic_card_fare: Option<u32>,
}

/// Text that is either a plain string or a language map (`{"ja": .., "en": ..}`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum LocalizedText {
    Plain(String),
    Languages(BTreeMap<String, String>),
}

impl LocalizedText {
    /// Best text for display: Japanese, then English, then the smallest
    /// language code present.
    pub fn preferred(&self) -> Option<&str> {
        match self {
            LocalizedText::Plain(s) => Some(s.as_str()),
            LocalizedText::Languages(map) => map
                .get("ja")
                .or_else(|| map.get("en"))
                .or_else(|| map.values().next())
                .map(String::as_str),
        }
    }
}

//! Askama templates for the web frontend.

use askama::Template;

use crate::catalog::{Candidates, Catalog, Selection};
use crate::domain::{Railway, Station};
use crate::search::SearchedCombination;

/// Shown when a search found no disruption notice.
pub const NORMAL_SERVICE: &str = "平常運転";

/// Shown when a search found no fare.
pub const FARE_UNKNOWN: &str = "運賃不明";

/// Search page: three pickers and the last result.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub departures: Vec<OptionView>,
    pub arrivals: Vec<OptionView>,
    pub railways: Vec<OptionView>,
    pub can_search: bool,
    pub result: Option<ResultView>,
    pub error: Option<String>,
}

impl IndexTemplate {
    pub fn new(catalog: &Catalog, selection: &Selection, candidates: &Candidates<'_>) -> Self {
        let stations = |list: &[&Station], selected: &Option<String>| -> Vec<OptionView> {
            list.iter()
                .map(|s| OptionView::station(s, catalog, selected))
                .collect()
        };

        Self {
            departures: stations(&candidates.departures, &selection.departure),
            arrivals: stations(&candidates.arrivals, &selection.arrival),
            railways: candidates
                .railways
                .iter()
                .map(|r| OptionView::railway(r, catalog, &selection.railway))
                .collect(),
            can_search: selection.is_complete(),
            result: None,
            error: None,
        }
    }

    pub fn with_result(mut self, result: ResultView) -> Self {
        self.result = Some(result);
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// One `<option>` of a picker.
#[derive(Debug, Clone)]
pub struct OptionView {
    pub id: String,
    pub label: String,
    pub selected: bool,
}

impl OptionView {
    fn station(station: &Station, catalog: &Catalog, selected: &Option<String>) -> Self {
        Self {
            id: station.id.clone(),
            label: format!(
                "{} ({})",
                station.name,
                catalog.operator_name(&station.operator)
            ),
            selected: selected.as_deref() == Some(station.id.as_str()),
        }
    }

    fn railway(railway: &Railway, catalog: &Catalog, selected: &Option<String>) -> Self {
        Self {
            id: railway.id.clone(),
            label: format!(
                "{} ({})",
                railway.name,
                catalog.operator_name(&railway.operator)
            ),
            selected: selected.as_deref() == Some(railway.id.as_str()),
        }
    }
}

/// Search result view model.
#[derive(Debug, Clone)]
pub struct ResultView {
    pub departure: String,
    pub arrival: String,
    pub railway: String,
    pub information: String,
    pub fare: String,
    pub searched_at: String,
}

impl ResultView {
    pub fn from_result(result: &SearchedCombination, catalog: &Catalog) -> Self {
        let information = result
            .information
            .as_ref()
            .map(|i| i.information_text.as_str())
            .filter(|text| !text.is_empty())
            .unwrap_or(NORMAL_SERVICE)
            .to_string();

        Self {
            departure: format!(
                "{} ({})",
                result.departure.name,
                catalog.operator_name(&result.departure.operator)
            ),
            arrival: format!(
                "{} ({})",
                result.arrival.name,
                catalog.operator_name(&result.arrival.operator)
            ),
            railway: format!(
                "{} ({})",
                result.railway.name,
                catalog.operator_name(&result.railway.operator)
            ),
            information,
            fare: format_fare(result),
            searched_at: result.searched_at.format("%Y/%m/%d %H:%M:%S").to_string(),
        }
    }
}

fn format_fare(result: &SearchedCombination) -> String {
    let Some(fare) = &result.fare else {
        return FARE_UNKNOWN.to_string();
    };

    match (fare.ticket_fare, fare.ic_card_fare) {
        (Some(ticket), Some(ic)) => format!("{ticket}円 (IC {ic}円)"),
        (Some(ticket), None) => format!("{ticket}円"),
        (None, Some(ic)) => format!("IC {ic}円"),
        (None, None) => FARE_UNKNOWN.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{TrainFare, TrainInformation};
    use crate::fare_key::FareKeys;
    use chrono::{Local, TimeZone};

    fn result() -> SearchedCombination {
        let station = |id: &str, name: &str| Station {
            id: id.to_string(),
            name: name.to_string(),
            same_as: format!("odpt.Station:TokyoMetro.Ginza.{name}"),
            operator: "odpt.Operator:TokyoMetro".to_string(),
            railways: vec!["odpt.Railway:TokyoMetro.Ginza".to_string()],
        };

        SearchedCombination {
            departure: station("a", "渋谷"),
            arrival: station("b", "上野"),
            railway: Railway {
                id: "ginza".to_string(),
                name: "銀座線".to_string(),
                same_as: "odpt.Railway:TokyoMetro.Ginza".to_string(),
                operator: "odpt.Operator:TokyoMetro".to_string(),
            },
            information: None,
            fare: None,
            fare_keys: FareKeys {
                from_station: "odpt.Station:TokyoMetro.Ginza.Shibuya".to_string(),
                to_station: "odpt.Station:TokyoMetro.Ginza.Ueno".to_string(),
            },
            searched_at: Local.with_ymd_and_hms(2024, 5, 1, 10, 15, 0).unwrap(),
        }
    }

    #[test]
    fn absent_fields_render_neutral_defaults() {
        let view = ResultView::from_result(&result(), &Catalog::default());

        assert_eq!(view.information, NORMAL_SERVICE);
        assert_eq!(view.fare, FARE_UNKNOWN);
        assert_eq!(view.departure, "渋谷 (不明)");
        assert_eq!(view.searched_at, "2024/05/01 10:15:00");
    }

    #[test]
    fn present_fields_render() {
        let mut result = result();
        result.information = Some(TrainInformation {
            id: "i".to_string(),
            date: None,
            operator: "odpt.Operator:TokyoMetro".to_string(),
            railway: None,
            information_text: "遅延しています。".to_string(),
        });
        result.fare = Some(TrainFare {
            id: "f".to_string(),
            same_as: String::new(),
            operator: String::new(),
            from_station: String::new(),
            to_station: String::new(),
            ticket_fare: Some(260),
            ic_card_fare: Some(252),
        });

        let view = ResultView::from_result(&result, &Catalog::default());
        assert_eq!(view.information, "遅延しています。");
        assert_eq!(view.fare, "260円 (IC 252円)");
    }

    #[test]
    fn renders_page() {
        let catalog = Catalog::default();
        let selection = Selection::default();
        let candidates = crate::catalog::candidates(&catalog, &selection);

        let html = IndexTemplate::new(&catalog, &selection, &candidates)
            .with_result(ResultView::from_result(&result(), &catalog))
            .render()
            .unwrap();

        assert!(html.contains("渋谷"));
        assert!(html.contains(NORMAL_SERVICE));
    }
}

//! Record normalization.
//!
//! The catalog returns one station record per (station, railway) pairing.
//! Normalization folds those into one [`Station`] per name that knows every
//! railway it sits on. Operators and railways map one-to-one.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

use icu_collator::{Collator, CollatorOptions, Strength};
use icu_locid::locale;
use tracing::warn;

use crate::domain::{Operator, Railway, Station};
use crate::odpt::{OperatorDto, RailwayDto, StationDto};

/// Merge raw station records into one station per distinct name.
///
/// Railway memberships keep input order. A repeated (name, railway) pair
/// yields a repeated membership rather than an error. The result is sorted
/// by [`NameCollator::japanese`].
pub fn normalize_stations(records: Vec<StationDto>) -> Vec<Station> {
    let mut by_name: HashMap<String, usize> = HashMap::new();
    let mut stations: Vec<Station> = Vec::new();

    for record in records {
        match by_name.entry(record.title.clone()) {
            Entry::Occupied(slot) => {
                stations[*slot.get()].railways.push(record.railway);
            }
            Entry::Vacant(slot) => {
                slot.insert(stations.len());
                stations.push(Station {
                    id: record.id,
                    name: record.title,
                    same_as: record.same_as,
                    operator: record.operator,
                    railways: vec![record.railway],
                });
            }
        }
    }

    let collator = NameCollator::japanese();
    stations.sort_by(|a, b| collator.compare(&a.name, &b.name));
    stations
}

pub fn normalize_operators(records: Vec<OperatorDto>) -> Vec<Operator> {
    records.into_iter().map(Operator::from).collect()
}

pub fn normalize_railways(records: Vec<RailwayDto>) -> Vec<Railway> {
    records.into_iter().map(Railway::from).collect()
}

/// Display ordering for station names.
///
/// Japanese collation: Latin before kana, kana in gojūon order regardless of
/// script, full-width Latin next to its ASCII form. Names the collator ranks
/// equal fall back to code-point order so sorting stays deterministic.
pub struct NameCollator {
    collator: Option<Collator>,
}

impl NameCollator {
    pub fn japanese() -> Self {
        let mut options = CollatorOptions::new();
        options.strength = Some(Strength::Tertiary);

        let collator = match Collator::try_new(&locale!("ja").into(), options) {
            Ok(collator) => Some(collator),
            Err(e) => {
                warn!(error = %e, "ja collation unavailable, sorting by code point");
                None
            }
        };

        Self { collator }
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match &self.collator {
            Some(collator) => collator.compare(a, b).then_with(|| a.cmp(b)),
            None => a.cmp(b),
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn raw_records() -> impl Strategy<Value = Vec<(String, String)>> {
        prop::collection::vec(("[A-E]", "[a-d]"), 0..40)
    }

    proptest! {
        /// Exactly one station per distinct name.
        #[test]
        fn one_station_per_name(records in raw_records()) {
            let dtos = records.iter().map(|(name, railway)| StationDto {
                title: name.clone(),
                railway: railway.clone(),
                ..Default::default()
            }).collect();

            let stations = normalize_stations(dtos);

            let mut distinct: Vec<&String> = records.iter().map(|(n, _)| n).collect();
            distinct.sort();
            distinct.dedup();
            prop_assert_eq!(stations.len(), distinct.len());
        }

        /// Memberships are exactly the railways of the records sharing the name, in order.
        #[test]
        fn memberships_match_input(records in raw_records()) {
            let dtos = records.iter().map(|(name, railway)| StationDto {
                title: name.clone(),
                railway: railway.clone(),
                ..Default::default()
            }).collect();

            let stations = normalize_stations(dtos);

            for station in &stations {
                let expected: Vec<&String> = records
                    .iter()
                    .filter(|(n, _)| *n == station.name)
                    .map(|(_, r)| r)
                    .collect();
                let actual: Vec<&String> = station.railways.iter().collect();
                prop_assert_eq!(actual, expected);
            }
        }

        /// Output is ordered by the name collator.
        #[test]
        fn output_is_sorted(records in raw_records()) {
            let dtos = records.iter().map(|(name, railway)| StationDto {
                title: name.clone(),
                railway: railway.clone(),
                ..Default::default()
            }).collect();

            let stations = normalize_stations(dtos);
            let collator = NameCollator::japanese();

            for pair in stations.windows(2) {
                prop_assert_ne!(collator.compare(&pair[0].name, &pair[1].name), Ordering::Greater);
            }
        }
    }
}

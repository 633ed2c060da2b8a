//! Station entities.

/// A physical station together with every railway passing through it.
///
/// The catalog returns one record per (station, railway) pairing; a
/// `Station` is the merge of all records sharing a name. `id`, `same_as`
/// and `operator` come from the first record seen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    pub id: String,
    pub name: String,
    pub same_as: String,
    pub operator: String,
    /// Railway `same_as` values, in first-seen order.
    pub railways: Vec<String>,
}

impl Station {
    /// Whether the railway with the given `same_as` calls here.
    pub fn is_on(&self, railway_same_as: &str) -> bool {
        self.railways.iter().any(|r| r == railway_same_as)
    }
}

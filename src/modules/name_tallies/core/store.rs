// NameTallyStore holds the canonical list of name/tally records and tells observers
// about every change.
//
// Responsibilities
// - Start from a single placeholder record.
// - Grow only by appending; records are never removed or edited.
// - Push the full list to observers on subscribe and after every append.
//
// Boundaries
// - No validation, no deduplication, no persistence.
// - Owned by the composition root and shared by `Arc`; there is no global instance.

use crate::modules::name_tallies::core::record::NameTally;
use crate::shared::infrastructure::writable::{Unsubscriber, Writable};

pub type NameTallyUnsubscriber = Unsubscriber<Vec<NameTally>>;

pub struct NameTallyStore {
    records: Writable<Vec<NameTally>>,
}

impl Default for NameTallyStore {
    fn default() -> Self {
        Self::initialize()
    }
}

impl NameTallyStore {
    pub fn initialize() -> Self {
        Self {
            records: Writable::new(vec![NameTally::placeholder()]),
        }
    }

    /// Calls `observer` with the current records now and again after every append.
    pub fn subscribe<F>(&self, mut observer: F) -> NameTallyUnsubscriber
    where
        F: FnMut(&[NameTally]) + Send + 'static,
    {
        self.records
            .subscribe(move |records: &Vec<NameTally>| observer(records.as_slice()))
    }

    /// Pushes a new record onto the held list and notifies observers before returning.
    /// Returns the length of the list after the append.
    pub fn append(&self, name: impl Into<String>, tally: i64) -> usize {
        let record = NameTally::new(name, tally);
        self.records.update(|records| {
            records.push(record);
            records.len()
        })
    }

    pub fn current(&self) -> Vec<NameTally> {
        self.records.get()
    }

    pub fn len(&self) -> usize {
        self.records.with(Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.records.with(Vec::is_empty)
    }

    pub fn subscriber_count(&self) -> usize {
        self.records.subscriber_count()
    }
}

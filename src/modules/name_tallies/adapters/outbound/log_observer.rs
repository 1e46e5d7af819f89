use crate::modules::name_tallies::core::record::NameTally;
use crate::modules::name_tallies::core::store::{NameTallyStore, NameTallyUnsubscriber};

/// Subscribes an observer that logs every change to the list.
pub fn attach(store: &NameTallyStore) -> NameTallyUnsubscriber {
    store.subscribe(|records: &[NameTally]| {
        if let Some(last) = records.last() {
            tracing::info!(
                count = records.len(),
                name = %last.name,
                tally = last.tally,
                "name tallies changed"
            );
        }
    })
}

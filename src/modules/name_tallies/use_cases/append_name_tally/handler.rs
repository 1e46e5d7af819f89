use crate::modules::name_tallies::core::store::NameTallyStore;
use crate::modules::name_tallies::use_cases::append_name_tally::command::AppendNameTally;
use std::sync::Arc;

pub struct AppendNameTallyHandler {
    store: Arc<NameTallyStore>,
}

impl AppendNameTallyHandler {
    pub fn new(store: Arc<NameTallyStore>) -> Self {
        Self { store }
    }

    /// Appends the record and returns the list length afterwards. Observers have
    /// already been notified when this returns.
    pub fn handle(&self, command: AppendNameTally) -> usize {
        let AppendNameTally { name, tally } = command;
        tracing::debug!(%name, tally, "appending name tally");
        self.store.append(name, tally)
    }
}

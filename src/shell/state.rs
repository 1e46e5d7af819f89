use crate::modules::name_tallies::core::store::NameTallyStore;
use crate::modules::name_tallies::use_cases::append_name_tally::handler::AppendNameTallyHandler;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<NameTallyStore>,
    pub append_handler: Arc<AppendNameTallyHandler>,
}

impl AppState {
    pub fn new(store: Arc<NameTallyStore>) -> Self {
        Self {
            append_handler: Arc::new(AppendNameTallyHandler::new(store.clone())),
            store,
        }
    }
}

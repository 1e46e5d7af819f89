use async_graphql::{Context, Object};

use crate::modules::name_tallies::use_cases::append_name_tally::command::AppendNameTally;
use crate::shell::state::AppState;

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Appends a record and returns how many records the list holds afterwards.
    async fn append_name_tally(&self, context: &Context<'_>, name: String, tally: i64) -> u64 {
        let state = context.data_unchecked::<AppState>();
        state.append_handler.handle(AppendNameTally { name, tally }) as u64
    }
}

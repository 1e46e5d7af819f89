use async_graphql::{Context, Subscription};
use futures::{Stream, StreamExt};

use crate::modules::name_tallies::use_cases::list_name_tallies::inbound::graphql::GqlNameTally;
use crate::modules::name_tallies::use_cases::watch_name_tallies::stream::NameTallyWatch;
use crate::shell::state::AppState;

pub struct SubscriptionRoot;

#[Subscription]
impl SubscriptionRoot {
    /// Streams the full list now and after every append.
    async fn name_tallies(&self, context: &Context<'_>) -> impl Stream<Item = Vec<GqlNameTally>> {
        let state = context.data_unchecked::<AppState>();
        NameTallyWatch::open(&state.store)
            .map(|records| records.into_iter().map(Into::into).collect::<Vec<GqlNameTally>>())
    }
}

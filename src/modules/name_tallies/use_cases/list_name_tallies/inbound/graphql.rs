use async_graphql::{Context, Object};

use crate::modules::name_tallies::core::record::NameTally;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone, Debug, PartialEq, Eq)]
#[graphql(name = "NameTally")]
pub struct GqlNameTally {
    pub name: String,
    pub tally: i64,
}

impl From<NameTally> for GqlNameTally {
    fn from(v: NameTally) -> Self {
        Self {
            name: v.name,
            tally: v.tally,
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn name_tallies(&self, context: &Context<'_>) -> Vec<GqlNameTally> {
        let state = context.data_unchecked::<AppState>();
        state.store.current().into_iter().map(Into::into).collect()
    }
}

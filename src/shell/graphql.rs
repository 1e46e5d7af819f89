use async_graphql::Schema;
use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, response::Html};

pub use crate::modules::name_tallies::use_cases::append_name_tally::inbound::graphql::MutationRoot;
pub use crate::modules::name_tallies::use_cases::list_name_tallies::inbound::graphql::QueryRoot;
pub use crate::modules::name_tallies::use_cases::watch_name_tallies::inbound::graphql::SubscriptionRoot;
pub use crate::shell::state::AppState;

pub const ENDPOINT: &str = "/gql";
pub const SUBSCRIPTION_ENDPOINT: &str = "/gql/ws";

pub type AppSchema = Schema<QueryRoot, MutationRoot, SubscriptionRoot>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot, SubscriptionRoot)
        .data(state)
        .finish()
}

pub async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

pub async fn graphiql() -> Html<String> {
    Html(
        GraphiQLSource::build()
            .endpoint(ENDPOINT)
            .subscription_endpoint(SUBSCRIPTION_ENDPOINT)
            .finish(),
    )
}

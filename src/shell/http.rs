use async_graphql_axum::GraphQLSubscription;
use axum::{Extension, Router, routing::get};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::name_tallies::use_cases::append_name_tally::inbound::http as append_http;
use crate::modules::name_tallies::use_cases::list_name_tallies::inbound::http as list_http;
use crate::shell::graphql::{self, ENDPOINT, SUBSCRIPTION_ENDPOINT, build_schema};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let schema = build_schema(state.clone());

    Router::new()
        .route(
            "/name-tallies",
            get(list_http::handle).post(append_http::handle),
        )
        .route(ENDPOINT, get(graphql::graphiql).post(graphql::graphql))
        .route_service(SUBSCRIPTION_ENDPOINT, GraphQLSubscription::new(schema.clone()))
        .layer(Extension(schema))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

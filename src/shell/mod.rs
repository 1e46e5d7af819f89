// Composition root for the name_tallies module.
//
// Responsibilities
// - Read config from environment.
// - Build the single NameTallyStore and share it through AppState.
// - Wire inbound adapters (HTTP and GraphQL) onto one router.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;

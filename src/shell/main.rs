use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use name_tally::modules::name_tallies::adapters::outbound::log_observer;
use name_tally::modules::name_tallies::core::store::NameTallyStore;
use name_tally::shell::config::Config;
use name_tally::shell::http::router;
use name_tally::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let config = Config::from_env()?;
    let addr = config.socket_addr()?;

    let store = Arc::new(NameTallyStore::initialize());
    // Lives as long as the process.
    let _log_observer = log_observer::attach(&store);

    let app = router(AppState::new(store));

    tracing::info!("name tallies: http://{}/name-tallies", addr);
    tracing::info!("GraphQL endpoint: http://{}/gql", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

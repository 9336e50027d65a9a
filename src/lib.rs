pub mod cli;
pub mod config;
pub mod error;
pub mod locations;
pub mod middleware;
pub mod observability;
pub mod routes;

pub use config::Config;
pub use routes::AppState;

/// Create app router for testing
///
/// This function creates the Axum router with all routes configured,
/// useful for integration testing without starting the full server.
pub fn create_app(config: Config) -> anyhow::Result<axum::Router> {
    let locations = locations::LocationRegistry::from_config(&config)?;
    Ok(routes::router(AppState::new(config, locations)))
}

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};

use crate::{config::Config, locations::LocationRegistry};

mod calendar;
mod health;
mod locations;

pub use calendar::GenerateRequest;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub locations: Arc<LocationRegistry>,
}

impl AppState {
    pub fn new(config: Config, locations: LocationRegistry) -> Self {
        Self {
            config: Arc::new(config),
            locations: Arc::new(locations),
        }
    }
}

pub fn router(app_state: AppState) -> Router {
    // Feeds are polled by calendar clients and must never be served stale
    let subscriptions = Router::new()
        .route("/subscribe", get(calendar::subscribe))
        .route("/api/subscribe.ics", get(calendar::subscribe))
        .route_layer(axum::middleware::from_fn(
            crate::middleware::no_cache_middleware,
        ));

    Router::new()
        .route("/ping", get(health::ping))
        .route("/locations", get(locations::list))
        .route("/generate", post(calendar::generate))
        .route("/api/generate-ics", post(calendar::generate))
        .merge(subscriptions)
        .with_state(app_state)
}

use axum::Router;
use luach::config::{CalendarConfig, Config, ObservabilityConfig, ServerConfig};

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        observability: ObservabilityConfig::default(),
        calendar: CalendarConfig::default(),
        locations: Vec::new(),
    }
}

pub fn create_test_app() -> Router {
    luach::create_app(test_config()).expect("test app")
}

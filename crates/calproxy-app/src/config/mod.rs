use std::sync::Arc;

use salvo::async_trait;

pub use calproxy_core::config::*;

use crate::error::{AppError, AppResult};

pub struct ConfigHandler {
    pub settings: Settings,
}

#[async_trait]
impl salvo::Handler for ConfigHandler {
    #[tracing::instrument(skip(self, _req, depot, _res, _ctrl))]
    async fn handle(
        &self,
        _req: &mut salvo::Request,
        depot: &mut salvo::Depot,
        _res: &mut salvo::Response,
        _ctrl: &mut salvo::FlowCtrl,
    ) {
        let settings: Arc<Settings> = Arc::new(self.settings.clone());
        depot.inject(settings);
    }
}

/// ## Summary
/// Retrieves the application configuration from the depot.
///
/// ## Errors
/// Returns an error if the configuration is not found in the depot.
pub fn get_config_from_depot(depot: &salvo::Depot) -> AppResult<Arc<Settings>> {
    depot.obtain::<Arc<Settings>>().cloned().map_err(|_err| {
        AppError::CoreError(calproxy_core::error::CoreError::InvariantViolation(
            "Configuration not found in depot",
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_settings() -> Settings {
        Settings {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            upstream: UpstreamConfig {
                origin: "https://calendars.example.com".to_string(),
            },
            logging: LoggingConfig {
                level: "debug".to_string(),
            },
        }
    }

    #[test_log::test]
    fn config_round_trips_through_the_depot() {
        let mut depot = salvo::Depot::new();
        depot.inject(Arc::new(test_settings()));

        let settings = get_config_from_depot(&depot).expect("config was injected");
        assert_eq!(settings.upstream.origin, "https://calendars.example.com");
    }

    #[test_log::test]
    fn missing_config_is_an_invariant_violation() {
        let depot = salvo::Depot::new();
        assert!(get_config_from_depot(&depot).is_err());
    }
}

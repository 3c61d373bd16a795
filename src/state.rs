use crate::backend::BackendClient;
use crate::config::{Config, SeriesGranularity};

#[derive(Clone)]
pub struct AppState {
    pub backend: BackendClient,
    pub granularity: SeriesGranularity,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            backend: BackendClient::new(config.backend_url.clone()),
            granularity: config.granularity,
        }
    }
}

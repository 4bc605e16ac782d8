pub mod client;
pub mod constants;
pub mod template;

/// Upstream endpoint override, carried as app state. `None` means the
/// production base URL.
#[derive(Debug, Clone, Default)]
pub struct UpstreamConfig {
    pub endpoint: Option<String>,
}

impl UpstreamConfig {
    pub fn from_env() -> Self {
        UpstreamConfig {
            endpoint: std::env::var("IMPFTERMIN_ENDPOINT").ok(),
        }
    }
}

use {
    crate::config::ProviderApiConfig,
    anyhow::{Context, Result},
    std::time::Duration,
};

/// Build the HTTP client shared by the geocoder and the distance-matrix client.
pub fn build_http_client(config: &ProviderApiConfig) -> Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder().user_agent(config.user_agent);
    if let Some(secs) = config.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    builder.build().context("Failed to create HTTP client")
}

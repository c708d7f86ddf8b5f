use reqwest::Client;
use serde::de::DeserializeOwned;

#[cfg(not(target_arch = "wasm32"))]
use {crate::config::API, std::time::Duration};

use crate::data::FetchError;

/// One shared client for every remote service.
pub(crate) fn build_client() -> Client {
    #[allow(unused_mut)]
    let mut builder = Client::builder();
    #[cfg(not(target_arch = "wasm32"))]
    {
        builder = builder.timeout(Duration::from_millis(API.client.timeout_ms));
    }
    builder.build().unwrap_or_else(|e| {
        log::error!("Failed to build HTTP client ({}). Falling back to defaults.", e);
        Client::new()
    })
}

/// GET `url` and decode a JSON body. Non-2xx statuses are errors.
pub(crate) async fn get_json<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T, FetchError> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}

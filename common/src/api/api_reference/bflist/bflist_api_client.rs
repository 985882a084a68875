use std::time::Duration;

use crate::api::api_reference::bflist::{BflistApiError, FetchError};
use crate::api::api_reference::ApiClient;
use crate::models::bflist::BflistServer;
use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct BflistApiClient {
    client: Client,
    url: Url,
}

impl BflistApiClient {
    pub const API_SERVERS_ENDPOINT: &'static str = "/bf2/v1/servers/";

    pub fn new(api_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let url = Url::parse(api_url)?;
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self { client, url })
    }

    /// Fetches the current state of the server listening on `address` (`ip:port`).
    pub async fn get_server(&self, address: &str) -> Result<BflistServer, FetchError> {
        let server_url = self
            .url
            .join(&format!("{}{}", Self::API_SERVERS_ENDPOINT, address))?;
        debug!(server = address, "Fetching server status from bflist");

        let request = self
            .client
            .request(reqwest::Method::GET, server_url)
            .header(reqwest::header::ACCEPT, "application/json")
            .build()?;

        self.execute_request(request).await
    }
}

#[async_trait]
impl ApiClient for BflistApiClient {
    const API_TYPE: &'static str = "Bflist";
    type ErrorMessage = BflistApiError;

    fn url(&self) -> &Url {
        &self.url
    }

    fn client(&self) -> &Client {
        &self.client
    }
}

use common::api::api_reference::bflist::{BflistApiClient, FetchError};
use common::async_trait::async_trait;
use common::models::bflist::BflistServer;
use std::sync::Arc;

/// Where the synchronizer gets the server state from each cycle.
#[async_trait]
pub trait StatusSource: Send + Sync {
    async fn server_status(&self, address: &str) -> Result<BflistServer, FetchError>;
}

#[async_trait]
impl StatusSource for BflistApiClient {
    async fn server_status(&self, address: &str) -> Result<BflistServer, FetchError> {
        self.get_server(address).await
    }
}

#[async_trait]
impl<T: StatusSource + ?Sized> StatusSource for Arc<T> {
    async fn server_status(&self, address: &str) -> Result<BflistServer, FetchError> {
        (**self).server_status(address).await
    }
}

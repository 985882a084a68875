use crate::api::api_reference::ApiError;

pub mod bflist_api_client;
pub mod errors;

pub use bflist_api_client::BflistApiClient;
pub use errors::BflistApiError;

/// Anything that can go wrong while reaching the bflist status API.
pub type FetchError = ApiError<BflistApiError>;

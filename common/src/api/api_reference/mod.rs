use async_trait::async_trait;
use reqwest::{Client, Request, Url};
use serde::de::DeserializeOwned;
use std::fmt::{Debug, Display};
use std::{error, fmt};
use tracing::error;

pub mod bflist;

#[async_trait]
pub trait ApiClient {
    const API_TYPE: &'static str;

    /// Body the upstream returns alongside a client or server error status.
    type ErrorMessage: DeserializeOwned + Debug + Send;

    fn url(&self) -> &Url;
    fn client(&self) -> &Client;

    async fn execute_request<T>(&self, request: Request) -> Result<T, ApiError<Self::ErrorMessage>>
    where
        T: DeserializeOwned,
    {
        tracing::debug!(
            api = Self::API_TYPE,
            url = request.url().as_str(),
            "Executing request"
        );
        let response = self.client().execute(request).await?;

        let status = response.status();
        let content = response.text().await?;

        if !status.is_client_error() && !status.is_server_error() {
            match serde_json::from_str::<T>(&content).map_err(ApiError::from) {
                Err(e) => {
                    error!("{}", e);
                    tracing::debug!("{}", &content);
                    Err(e)
                }
                e => e,
            }
        } else {
            match serde_json::from_str::<Self::ErrorMessage>(&content).map_err(ApiError::<Self::ErrorMessage>::from) {
                Ok(api_error_message) => {
                    let error = ResponseContent {
                        status,
                        api_error_message,
                    };
                    let err = ApiError::ResponseError(error);
                    error!("{:?}", err);
                    Err(err)
                }
                Err(e) => {
                    error!("status={},error{}", status, e);
                    tracing::debug!("{}", &content);
                    Err(ApiError::UnexpectedStatus(status))
                }
            }
        }
    }
}

#[derive(Debug)]
pub enum ApiError<T> {
    Reqwest(reqwest::Error),
    Url(url::ParseError),
    Serde(serde_json::Error),
    ResponseError(ResponseContent<T>),
    UnexpectedStatus(reqwest::StatusCode),
}

impl<T> ApiError<T> {
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Reqwest(e) if e.is_timeout())
    }
}

impl<T> Display for ApiError<T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (module, e) = match self {
            Self::Reqwest(e) => ("reqwest", e.to_string()),
            Self::Serde(e) => ("serde", e.to_string()),
            Self::ResponseError(e) => (
                "response",
                format!("status code {}\nError:{:?}", e.status, e.api_error_message),
            ),
            Self::UnexpectedStatus(status) => ("response", format!("status code {status}")),
            Self::Url(e) => ("url", e.to_string()),
        };
        write!(f, "error in {module}: {e}")
    }
}

impl<T> error::Error for ApiError<T>
where
    T: Debug,
{
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        Some(match self {
            Self::Reqwest(e) => e,
            Self::Serde(e) => e,
            Self::Url(e) => e,
            Self::ResponseError(_) | Self::UnexpectedStatus(_) => return None,
        })
    }
}

impl<T> From<reqwest::Error> for ApiError<T> {
    fn from(e: reqwest::Error) -> Self {
        Self::Reqwest(e)
    }
}

impl<T> From<serde_json::Error> for ApiError<T> {
    fn from(e: serde_json::Error) -> Self {
        Self::Serde(e)
    }
}

impl<T> From<url::ParseError> for ApiError<T> {
    fn from(e: url::ParseError) -> Self {
        Self::Url(e)
    }
}

#[derive(Debug, Clone)]
pub struct ResponseContent<T> {
    pub status: reqwest::StatusCode,
    pub api_error_message: T,
}

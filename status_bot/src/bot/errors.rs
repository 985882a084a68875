use common::api::api_reference::bflist::FetchError;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum BotError {
    /// The status API client could not be built from the configuration.
    StatusApi(FetchError),
    /// Logging into Discord or running the gateway connection failed.
    Login(serenity::Error),
}

impl Display for BotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StatusApi(e) => write!(f, "Could not create status API client: {e}"),
            Self::Login(e) => write!(f, "Discord login failed: {e}"),
        }
    }
}

impl std::error::Error for BotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::StatusApi(e) => Some(e),
            Self::Login(e) => Some(e),
        }
    }
}

impl From<serenity::Error> for BotError {
    fn from(e: serenity::Error) -> Self {
        Self::Login(e)
    }
}

impl From<FetchError> for BotError {
    fn from(e: FetchError) -> Self {
        Self::StatusApi(e)
    }
}

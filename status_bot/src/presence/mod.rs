use common::async_trait::async_trait;
use std::sync::Arc;

pub mod errors;
pub mod indicator;
pub mod synchronizer;

pub use errors::PresenceUpdateError;
pub use synchronizer::{SyncSettings, Synchronizer};

/// The parts of the chat platform's bot user that the synchronizer writes to.
#[async_trait]
pub trait PresenceClient: Send + Sync {
    /// Shows `text` as the bot's "Playing" activity.
    async fn set_activity(&self, text: &str) -> Result<(), PresenceUpdateError>;

    /// Username the platform currently reports for the bot, if known.
    fn current_username(&self) -> Option<String>;

    async fn set_username(&self, username: &str) -> Result<(), PresenceUpdateError>;

    /// Replaces the avatar with the image found at `image_url`.
    async fn set_avatar(&self, image_url: &str) -> Result<(), PresenceUpdateError>;
}

#[async_trait]
impl<T: PresenceClient + ?Sized> PresenceClient for Arc<T> {
    async fn set_activity(&self, text: &str) -> Result<(), PresenceUpdateError> {
        (**self).set_activity(text).await
    }

    fn current_username(&self) -> Option<String> {
        (**self).current_username()
    }

    async fn set_username(&self, username: &str) -> Result<(), PresenceUpdateError> {
        (**self).set_username(username).await
    }

    async fn set_avatar(&self, image_url: &str) -> Result<(), PresenceUpdateError> {
        (**self).set_avatar(image_url).await
    }
}

use crate::presence::{PresenceClient, PresenceUpdateError};
use common::async_trait::async_trait;
use serenity::all::{ActivityData, Context, CreateAttachment, EditProfile};

/// Discord drops presence updates whose activity name is longer than this.
const MAX_ACTIVITY_LENGTH: usize = 128;

/// [`PresenceClient`] backed by a connected serenity session.
pub struct DiscordPresence {
    ctx: Context,
}

impl DiscordPresence {
    pub fn new(ctx: Context) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl PresenceClient for DiscordPresence {
    async fn set_activity(&self, text: &str) -> Result<(), PresenceUpdateError> {
        if text.chars().count() > MAX_ACTIVITY_LENGTH {
            return Err(PresenceUpdateError::Activity(anyhow::anyhow!(
                "activity text is longer than {MAX_ACTIVITY_LENGTH} characters"
            )));
        }

        // queued on the shard runner, the gateway never acknowledges it
        self.ctx.set_activity(Some(ActivityData::playing(text)));
        Ok(())
    }

    fn current_username(&self) -> Option<String> {
        Some(self.ctx.cache.current_user().name.clone())
    }

    async fn set_username(&self, username: &str) -> Result<(), PresenceUpdateError> {
        let mut user = self.ctx.cache.current_user().clone();
        user.edit(&self.ctx, EditProfile::new().username(username))
            .await
            .map_err(|e| PresenceUpdateError::Username(e.into()))
    }

    async fn set_avatar(&self, image_url: &str) -> Result<(), PresenceUpdateError> {
        let avatar = CreateAttachment::url(&self.ctx.http, image_url)
            .await
            .map_err(|e| {
                PresenceUpdateError::Avatar(
                    anyhow::Error::new(e).context(format!("could not download {image_url}")),
                )
            })?;

        let mut user = self.ctx.cache.current_user().clone();
        user.edit(&self.ctx, EditProfile::new().avatar(&avatar))
            .await
            .map_err(|e| PresenceUpdateError::Avatar(e.into()))
    }
}

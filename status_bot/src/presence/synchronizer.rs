use crate::presence::indicator;
use crate::presence::PresenceClient;
use crate::status_source::StatusSource;
use common::api::api_reference::bflist::FetchError;
use common::configuration::bot_config::{BotConfig, BotTreatment};
use futures_util::future::join3;
use tracing::{debug, error, instrument};

#[derive(Debug, Clone)]
pub struct SyncSettings {
    pub server_address: String,
    pub bot_treatment: BotTreatment,
    pub update_username: bool,
    pub map_image_url: String,
}

impl From<&BotConfig> for SyncSettings {
    fn from(settings: &BotConfig) -> Self {
        Self {
            server_address: settings.server_address(),
            bot_treatment: settings.bot_treatment,
            update_username: settings.update_username,
            map_image_url: settings.map_image_url.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Computed value matches what the platform already shows.
    Unchanged,
    Updated,
    Failed,
    /// Disabled by configuration.
    Skipped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleReport {
    pub activity: UpdateOutcome,
    pub username: UpdateOutcome,
    pub avatar: UpdateOutcome,
}

/// Mirrors one game server's status into the bot's presence.
///
/// `current_activity` and `current_avatar_url` only ever hold values the
/// platform accepted, so a failed push is retried on the next cycle. The
/// username needs no cache because the platform client reports it.
pub struct Synchronizer<S, P> {
    source: S,
    client: P,
    settings: SyncSettings,
    current_activity: String,
    current_avatar_url: String,
}

impl<S: StatusSource, P: PresenceClient> Synchronizer<S, P> {
    pub fn new(source: S, client: P, settings: SyncSettings) -> Self {
        Self {
            source,
            client,
            settings,
            current_activity: String::new(),
            current_avatar_url: String::new(),
        }
    }

    pub fn current_activity(&self) -> &str {
        &self.current_activity
    }

    pub fn current_avatar_url(&self) -> &str {
        &self.current_avatar_url
    }

    /// Runs one synchronization cycle.
    ///
    /// A failed fetch aborts the cycle before any update is attempted. After
    /// that the activity, username and avatar updates run concurrently and
    /// fail independently; their failures are logged and reported, never
    /// returned.
    #[instrument(skip(self), fields(server = %self.settings.server_address))]
    pub async fn sync(&mut self) -> Result<CycleReport, FetchError> {
        let server = self
            .source
            .server_status(&self.settings.server_address)
            .await?;

        debug!("Filtering out bots to determine player count");
        let activity = indicator::activity_text(self.settings.bot_treatment, &server);
        let username = self
            .settings
            .update_username
            .then(|| indicator::username_candidate(&server.name));
        let avatar_url = indicator::avatar_url(&self.settings.map_image_url, &server.map_name);

        let client = &self.client;
        let (activity, username, avatar) = join3(
            update_activity(client, &mut self.current_activity, activity),
            update_username(client, username),
            update_avatar(client, &mut self.current_avatar_url, avatar_url),
        )
        .await;

        Ok(CycleReport {
            activity,
            username,
            avatar,
        })
    }
}

async fn update_activity<P: PresenceClient>(
    client: &P,
    current_activity: &mut String,
    activity: String,
) -> UpdateOutcome {
    if activity == *current_activity {
        debug!("Activity name is unchanged, no update required");
        return UpdateOutcome::Unchanged;
    }

    debug!(activity = activity.as_str(), "Updating user activity");
    match client.set_activity(&activity).await {
        Ok(()) => {
            *current_activity = activity;
            UpdateOutcome::Updated
        }
        Err(e) => {
            error!("{}", e);
            UpdateOutcome::Failed
        }
    }
}

async fn update_username<P: PresenceClient>(
    client: &P,
    username: Option<String>,
) -> UpdateOutcome {
    let Some(username) = username else {
        return UpdateOutcome::Skipped;
    };

    if client.current_username().as_deref() == Some(username.as_str()) {
        debug!("Username matches server name, no update required");
        return UpdateOutcome::Unchanged;
    }

    debug!(
        username = username.as_str(),
        "Updating username to match server name"
    );
    match client.set_username(&username).await {
        Ok(()) => UpdateOutcome::Updated,
        Err(e) => {
            error!("{}", e);
            UpdateOutcome::Failed
        }
    }
}

async fn update_avatar<P: PresenceClient>(
    client: &P,
    current_avatar_url: &mut String,
    avatar_url: String,
) -> UpdateOutcome {
    if avatar_url == *current_avatar_url {
        debug!("Avatar is unchanged, no update required");
        return UpdateOutcome::Unchanged;
    }

    debug!(url = avatar_url.as_str(), "Updating user avatar");
    match client.set_avatar(&avatar_url).await {
        Ok(()) => {
            *current_avatar_url = avatar_url;
            UpdateOutcome::Updated
        }
        Err(e) => {
            error!("{}", e);
            UpdateOutcome::Failed
        }
    }
}

use crate::presence::{SyncSettings, Synchronizer};
use crate::update_scheduler::run_update_task;
use common::api::api_reference::bflist::BflistApiClient;
use common::configuration::bot_config::BotConfig;
use parking_lot::Mutex;
use serenity::all::{Context, EventHandler, GatewayIntents, Ready};
use serenity::Client;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, info};

mod discord_presence;
mod errors;

pub use discord_presence::DiscordPresence;
pub use errors::BotError;

type UpdateTask = Arc<Mutex<Option<JoinHandle<()>>>>;

pub struct StatusBot {
    settings: BotConfig,
}

impl StatusBot {
    pub fn new(settings: BotConfig) -> Self {
        Self { settings }
    }

    /// Logs into Discord and keeps the gateway connection open until it fails or
    /// `shutdown` resolves. The update task starts once the session is ready.
    pub async fn run(&self, shutdown: impl Future<Output = ()>) -> Result<(), BotError> {
        let api_client =
            BflistApiClient::new(&self.settings.status_api_url, self.settings.request_timeout())?;
        let update_task = UpdateTask::default();
        let handler = Handler {
            api_client,
            sync_settings: SyncSettings::from(&self.settings),
            interval: self.settings.update_interval(),
            update_task: update_task.clone(),
        };

        info!("Logging into Discord using token");
        let mut client = Client::builder(&self.settings.token, GatewayIntents::GUILDS)
            .event_handler(handler)
            .await?;
        let shard_manager = client.shard_manager.clone();

        let result = tokio::select! {
            res = client.start() => res.map_err(BotError::from),
            _ = shutdown => {
                info!("Shutting down Discord connection");
                shard_manager.shutdown_all().await;
                Ok(())
            }
        };

        if let Some(task) = update_task.lock().take() {
            task.abort();
        }
        result
    }
}

struct Handler {
    api_client: BflistApiClient,
    sync_settings: SyncSettings,
    interval: Duration,
    update_task: UpdateTask,
}

#[serenity::async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        let mut update_task = self.update_task.lock();
        // ready fires again after a gateway reconnect
        if update_task.is_some() {
            debug!(user = ready.user.name.as_str(), "Client is ready again");
            return;
        }

        info!(
            user = ready.user.name.as_str(),
            "Client is ready, starting update task"
        );
        let synchronizer = Synchronizer::new(
            self.api_client.clone(),
            DiscordPresence::new(ctx),
            self.sync_settings.clone(),
        );
        *update_task = Some(tokio::spawn(run_update_task(synchronizer, self.interval)));
    }
}

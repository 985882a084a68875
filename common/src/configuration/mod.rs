pub mod bot_config;

use crate::configuration::bot_config::BotConfig;
use config::{Config, ConfigError, FileFormat};

/// Layers `default_config`, optional config files in the working directory and
/// `{prefix}_*` environment variables, later sources winning.
pub fn load_bot_config(default_config: &str, prefix: &str) -> Result<BotConfig, ConfigError> {
    let settings = Config::builder()
        .add_source(config::File::from_str(default_config, FileFormat::Toml).required(true))
        .add_source(config::File::new("config.toml", FileFormat::Toml).required(false))
        .add_source(config::File::new("config.json", FileFormat::Json).required(false))
        .add_source(config::File::new("config.yaml", FileFormat::Yaml).required(false))
        .add_source(config::Environment::with_prefix(prefix))
        .build()?
        .try_deserialize::<BotConfig>()?;

    settings.validate()?;
    Ok(settings)
}

use config::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::time::Duration;

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct BotConfig {
    #[serde(skip_serializing)] // Never write the Discord token anywhere
    pub token: String,
    pub server_ip: String,
    pub server_port: u16,
    pub bot_treatment: BotTreatment,
    pub update_username: bool,
    pub update_interval_seconds: u64,
    pub request_timeout_seconds: u64,
    pub status_api_url: String,
    pub map_image_url: String,
    pub logging_level: String,
    pub log_root: String,
}

impl BotConfig {
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_ip, self.server_port)
    }

    pub fn update_interval(&self) -> Duration {
        Duration::from_secs(self.update_interval_seconds)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let missing = if self.token.trim().is_empty() {
            Some("token")
        } else if self.server_ip.trim().is_empty() {
            Some("server_ip")
        } else if self.server_port == 0 {
            Some("server_port")
        } else if self.update_interval_seconds == 0 {
            Some("update_interval_seconds")
        } else if self.request_timeout_seconds == 0 {
            Some("request_timeout_seconds")
        } else {
            None
        };

        match missing {
            Some(key) => Err(ConfigError::Message(format!(
                "configuration value `{key}` must be set"
            ))),
            None => Ok(()),
        }
    }
}

/// How player slots that do not belong to an active human are folded into the
/// displayed player count.
#[derive(Debug, Copy, Clone, Serialize, Deserialize, Eq, PartialEq, Default)]
#[serde(from = "String", rename_all = "kebab-case")]
pub enum BotTreatment {
    Ignore,
    Separate,
    SubtractSlots,
    #[default]
    Include,
}

impl From<&str> for BotTreatment {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "ignore" => Self::Ignore,
            "separate" => Self::Separate,
            "subtract-slots" => Self::SubtractSlots,
            _ => Self::Include,
        }
    }
}

impl From<String> for BotTreatment {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl Display for BotTreatment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Ignore => "ignore",
            Self::Separate => "separate",
            Self::SubtractSlots => "subtract-slots",
            Self::Include => "include",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use crate::configuration::bot_config::{BotConfig, BotTreatment};

    fn bot_config() -> BotConfig {
        BotConfig {
            token: "123".to_string(),
            server_ip: "127.0.0.1".to_string(),
            server_port: 16567,
            bot_treatment: BotTreatment::Separate,
            update_username: true,
            update_interval_seconds: 120,
            request_timeout_seconds: 15,
            status_api_url: "https://api.bflist.io".to_string(),
            map_image_url: "https://cdn.gametools.network".to_string(),
            logging_level: "debug".to_string(),
            log_root: String::new(),
        }
    }

    #[test]
    fn test_token_obfuscation() {
        let bot_config = bot_config();
        let serialized = serde_json::to_value(&bot_config).expect("Could not serialize bot_config");

        assert!(serialized.get("token").is_none());
        assert_eq!(serialized["bot_treatment"], "separate");
    }

    #[test]
    fn test_server_address() {
        assert_eq!(bot_config().server_address(), "127.0.0.1:16567");
    }

    #[test]
    fn test_bot_treatment_parsing() {
        assert_eq!(BotTreatment::from("ignore"), BotTreatment::Ignore);
        assert_eq!(BotTreatment::from("separate"), BotTreatment::Separate);
        assert_eq!(BotTreatment::from("Subtract-Slots"), BotTreatment::SubtractSlots);
        assert_eq!(BotTreatment::from("include"), BotTreatment::Include);
        assert_eq!(BotTreatment::from("something-else"), BotTreatment::Include);
        assert_eq!(BotTreatment::from(""), BotTreatment::Include);
    }

    #[test]
    fn test_bot_treatment_deserialize_unrecognized() {
        let treatment: BotTreatment =
            serde_json::from_str("\"bots-only\"").expect("Could not deserialize BotTreatment");
        assert_eq!(treatment, BotTreatment::Include);
    }

    #[test]
    fn test_bot_treatment_display_round_trip() {
        for treatment in [
            BotTreatment::Ignore,
            BotTreatment::Separate,
            BotTreatment::SubtractSlots,
            BotTreatment::Include,
        ] {
            assert_eq!(BotTreatment::from(treatment.to_string()), treatment);
        }
    }

    #[test]
    fn test_validate_rejects_missing_token() {
        let mut bot_config = bot_config();
        bot_config.token = " ".to_string();
        let err = bot_config.validate().expect_err("Empty token must be rejected");
        assert!(err.to_string().contains("token"));
    }

    #[test]
    fn test_validate_rejects_zero_interval() {
        let mut bot_config = bot_config();
        bot_config.update_interval_seconds = 0;
        assert!(bot_config.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_complete_config() {
        assert!(bot_config().validate().is_ok());
    }
}

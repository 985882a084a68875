use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum PresenceUpdateError {
    Activity(anyhow::Error),
    Username(anyhow::Error),
    Avatar(anyhow::Error),
}

impl Display for PresenceUpdateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let (explanation, error) = match self {
            Self::Activity(e) => ("Failed to update user activity", e),
            Self::Username(e) => ("Failed to update username", e),
            Self::Avatar(e) => ("Failed to update user avatar", e),
        };
        write!(f, "{explanation}: {error:#}")
    }
}

impl std::error::Error for PresenceUpdateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Activity(e) | Self::Username(e) | Self::Avatar(e) => Some(&**e),
        }
    }
}

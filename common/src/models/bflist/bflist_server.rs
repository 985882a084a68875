use crate::models::bflist::BflistPlayer;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct BflistServer {
    pub name: String,
    pub map_name: String,
    pub num_players: i64,
    pub max_players: i64,
    #[serde(default)]
    pub players: Option<Vec<BflistPlayer>>,
}

impl BflistServer {
    pub fn players(&self) -> &[BflistPlayer] {
        self.players.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::BflistServer;

    #[test]
    fn test_null_players_deserialize_to_empty() {
        let server: BflistServer = serde_json::from_str(
            r#"{"name":"a","mapName":"Gulf of Oman","numPlayers":0,"maxPlayers":32,"players":null}"#,
        )
        .expect("Could not deserialize BflistServer");
        assert!(server.players().is_empty());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let server: BflistServer = serde_json::from_str(
            r#"{"name":"a","mapName":"Sharqi Peninsula","numPlayers":1,"maxPlayers":16,
                "gameType":"gpm_cq","password":false,
                "players":[{"name":"x","ping":20,"aibot":false,"rank":3}]}"#,
        )
        .expect("Could not deserialize BflistServer");
        assert_eq!(server.players().len(), 1);
        assert!(server.players()[0].is_active_human());
    }
}

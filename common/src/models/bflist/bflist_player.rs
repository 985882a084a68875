use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BflistPlayer {
    #[serde(default)]
    pub pid: Option<i64>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub tag: String,
    #[serde(default)]
    pub score: i64,
    #[serde(default)]
    pub kills: i64,
    #[serde(default)]
    pub deaths: i64,
    #[serde(default)]
    pub ping: i64,
    #[serde(default)]
    pub team: Option<i64>,
    #[serde(default)]
    pub team_label: Option<String>,
    #[serde(default)]
    pub aibot: bool,
}

impl BflistPlayer {
    /// A human who is actually connected. bflist keeps reporting stale slots with
    /// no ping, score, kills or deaths for a while after a player leaves.
    pub fn is_active_human(&self) -> bool {
        !self.aibot && (self.ping > 0 || self.score != 0 || self.kills != 0 || self.deaths != 0)
    }
}

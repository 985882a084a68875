use common::configuration::bot_config::BotTreatment;
use common::models::bflist::BflistServer;

/// Discord rejects usernames longer than this.
pub const MAX_USERNAME_LENGTH: usize = 32;

/// Player numbers derived from one bflist response.
///
/// `bots` counts every reported slot that is not an active human, so stale
/// slots of players who already left are shown as bots too.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerCounts {
    pub active: i64,
    pub bots: i64,
    pub max: i64,
    pub reported: i64,
}

impl From<&BflistServer> for PlayerCounts {
    fn from(server: &BflistServer) -> Self {
        let players = server.players();
        let active = players.iter().filter(|p| p.is_active_human()).count() as i64;

        Self {
            active,
            bots: players.len() as i64 - active,
            max: server.max_players,
            reported: server.num_players,
        }
    }
}

pub fn player_indicator(treatment: BotTreatment, counts: PlayerCounts) -> String {
    let PlayerCounts {
        active,
        bots,
        max,
        reported,
    } = counts;

    match treatment {
        BotTreatment::Ignore => format!("{active}/{max}"),
        BotTreatment::Separate => format!("{active}({bots})/{max}"),
        // not clamped, more bots than slots yields a negative denominator
        BotTreatment::SubtractSlots => format!("{active}/{}", max - bots),
        BotTreatment::Include => format!("{reported}/{max}"),
    }
}

pub fn activity_text(treatment: BotTreatment, server: &BflistServer) -> String {
    let indicator = player_indicator(treatment, PlayerCounts::from(server));
    format!("{indicator} - {}", server.map_name)
}

/// Truncates to [`MAX_USERNAME_LENGTH`] characters, never splitting a character.
pub fn username_candidate(server_name: &str) -> String {
    server_name.chars().take(MAX_USERNAME_LENGTH).collect()
}

pub fn map_slug(map_name: &str) -> String {
    map_name.to_lowercase().replace(' ', "_")
}

pub fn avatar_url(map_image_url: &str, map_name: &str) -> String {
    format!(
        "{}/maps/bf2/{}.jpg",
        map_image_url.trim_end_matches('/'),
        map_slug(map_name)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::models::bflist::BflistPlayer;
    use proptest::prelude::*;

    fn active_player() -> BflistPlayer {
        BflistPlayer {
            ping: 50,
            score: 10,
            ..Default::default()
        }
    }

    fn flagged_bot() -> BflistPlayer {
        BflistPlayer {
            aibot: true,
            ping: 0,
            score: 4,
            ..Default::default()
        }
    }

    fn karkand(active: usize, bots: usize) -> BflistServer {
        let mut players = vec![active_player(); active];
        players.extend(vec![flagged_bot(); bots]);
        BflistServer {
            name: "Karkand 24/7".to_string(),
            map_name: "Strike at Karkand".to_string(),
            num_players: (active + bots) as i64,
            max_players: 32,
            players: Some(players),
        }
    }

    #[test]
    fn test_counts_from_server() {
        let mut server = karkand(10, 3);
        server.players.as_mut().unwrap().push(BflistPlayer::default());
        let counts = PlayerCounts::from(&server);
        assert_eq!(
            counts,
            PlayerCounts {
                active: 10,
                bots: 4,
                max: 32,
                reported: 13,
            }
        );
    }

    #[test]
    fn test_counts_without_players() {
        let mut server = karkand(0, 0);
        server.players = None;
        server.num_players = 5;
        let counts = PlayerCounts::from(&server);
        assert_eq!(counts.active, 0);
        assert_eq!(counts.bots, 0);
        assert_eq!(counts.reported, 5);
    }

    #[test]
    fn test_activity_text_separate() {
        assert_eq!(
            activity_text(BotTreatment::Separate, &karkand(10, 3)),
            "10(3)/32 - Strike at Karkand"
        );
    }

    #[test]
    fn test_activity_text_per_treatment() {
        let server = karkand(10, 3);
        assert_eq!(
            activity_text(BotTreatment::Ignore, &server),
            "10/32 - Strike at Karkand"
        );
        assert_eq!(
            activity_text(BotTreatment::SubtractSlots, &server),
            "10/29 - Strike at Karkand"
        );
        assert_eq!(
            activity_text(BotTreatment::Include, &server),
            "13/32 - Strike at Karkand"
        );
    }

    #[test]
    fn test_subtract_slots_keeps_negative_denominator() {
        let counts = PlayerCounts {
            active: 1,
            bots: 40,
            max: 32,
            reported: 41,
        };
        assert_eq!(player_indicator(BotTreatment::SubtractSlots, counts), "1/-8");
    }

    #[test]
    fn test_username_truncation() {
        let name = "a".repeat(40);
        let username = username_candidate(&name);
        assert_eq!(username.chars().count(), 32);
        assert_eq!(username, "a".repeat(32));
    }

    #[test]
    fn test_username_short_name_untouched() {
        assert_eq!(username_candidate("=DOG= Karkand"), "=DOG= Karkand");
    }

    #[test]
    fn test_username_truncation_multibyte() {
        let name = "ü".repeat(33);
        assert_eq!(username_candidate(&name), "ü".repeat(32));
    }

    #[test]
    fn test_avatar_url() {
        assert_eq!(
            avatar_url("https://cdn.gametools.network", "Dalian Plant"),
            "https://cdn.gametools.network/maps/bf2/dalian_plant.jpg"
        );
        assert_eq!(
            avatar_url("https://cdn.gametools.network/", "Strike at Karkand"),
            "https://cdn.gametools.network/maps/bf2/strike_at_karkand.jpg"
        );
    }

    #[test]
    fn test_map_slug_replaces_every_space() {
        assert_eq!(map_slug("Road  to Jalalabad"), "road__to_jalalabad");
    }

    proptest! {
        #[test]
        fn prop_indicator_formulas(
            active in 0i64..10_000,
            bots in 0i64..10_000,
            max in 0i64..10_000,
            reported in 0i64..10_000,
        ) {
            let counts = PlayerCounts { active, bots, max, reported };
            prop_assert_eq!(
                player_indicator(BotTreatment::Ignore, counts),
                format!("{}/{}", active, max)
            );
            prop_assert_eq!(
                player_indicator(BotTreatment::Separate, counts),
                format!("{}({})/{}", active, bots, max)
            );
            prop_assert_eq!(
                player_indicator(BotTreatment::SubtractSlots, counts),
                format!("{}/{}", active, max - bots)
            );
            prop_assert_eq!(
                player_indicator(BotTreatment::Include, counts),
                format!("{}/{}", reported, max)
            );
        }

        #[test]
        fn prop_username_never_exceeds_limit(name in ".{0,80}") {
            let username = username_candidate(&name);
            prop_assert!(username.chars().count() <= MAX_USERNAME_LENGTH);
            prop_assert!(name.starts_with(&username));
        }
    }
}

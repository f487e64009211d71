use serde::{Deserialize, Deserializer};

pub use crate::required_for_upgrade::RequiredForUpgrade;

/// A type alias for a player's battle log, the top-level response of the battles endpoint.
pub type BattleLog = Vec<PlayerBattle>;

/// Reads `null` as the field's default, the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A player's profile with basic stats and card collection.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Player {
    /// The player's unique tag, including the leading '#'.
    #[serde(deserialize_with = "null_as_default")]
    pub tag: String,
    /// The player's in-game name.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub trophies: i32,
    /// The player's global ranking. Zero when unranked.
    pub rank: i32,
    pub arena: Arena,
    /// The clan the player belongs to. `None` when the player is clanless.
    pub clan: Option<PlayerClan>,
    pub stats: PlayerStats,
    pub games: PlayerGames,
    pub league_statistics: LeagueStatistics,
    /// Link that copies the player's deck in-game.
    #[serde(deserialize_with = "null_as_default")]
    pub deck_link: String,
    /// The deck in slot order.
    #[serde(deserialize_with = "null_as_default")]
    pub current_deck: Vec<Card>,
    #[serde(deserialize_with = "null_as_default")]
    pub achievements: Vec<Achievement>,
}

impl Player {
    pub fn clan_tag(&self) -> Option<&str> {
        self.clan.as_ref().map(|clan| clan.tag.as_str())
    }

    /// Mean elixir cost of the current deck, or `None` for an empty deck.
    pub fn deck_elixir_average(&self) -> Option<f64> {
        if self.current_deck.is_empty() {
            return None;
        }
        let total: i64 = self.current_deck.iter().map(|card| i64::from(card.elixir)).sum();
        Some(total as f64 / self.current_deck.len() as f64)
    }

    pub fn maxed_cards(&self) -> impl Iterator<Item = &Card> {
        self.current_deck.iter().filter(|card| card.is_maxed())
    }
}

/// A trophy range.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Arena {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// The arena's level within a league, e.g. "League 3".
    #[serde(deserialize_with = "null_as_default")]
    pub arena: String,
    /// The arena's number in the hierarchy of arenas.
    #[serde(rename = "arenaID", alias = "arenaId")]
    pub arena_id: i32,
    /// Upper boundary of the arena's trophy range.
    pub trophy_limit: i32,
}

/// A player's standing within their clan.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerClan {
    #[serde(deserialize_with = "null_as_default")]
    pub tag: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// "member", "elder", "coLeader" or "leader".
    #[serde(deserialize_with = "null_as_default")]
    pub role: String,
    pub donations: i32,
    pub donations_received: i32,
    pub donations_delta: i32,
    pub badge: Badge,
}

/// A clan's badge.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Badge {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
    pub id: i32,
    /// Link to the badge image.
    #[serde(deserialize_with = "null_as_default")]
    pub image: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerStats {
    pub tournament_cards_won: i32,
    pub max_trophies: i32,
    pub three_crown_wins: i32,
    pub cards_found: i32,
    pub favorite_card: FavoriteCard,
    pub total_donations: i32,
    pub challenge_max_wins: i32,
    pub challenge_cards_won: i32,
    /// King tower level.
    pub level: i32,
}

/// Card reference embedded in [`PlayerStats`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FavoriteCard {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub id: i32,
    pub max_level: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub icon: String,
    #[serde(deserialize_with = "null_as_default")]
    pub key: String,
    pub elixir: i32,
    #[serde(rename = "type")]
    #[serde(deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_as_default")]
    pub rarity: String,
    pub arena: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
}

/// Totals over every game the player has played.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerGames {
    pub total: i32,
    pub tournament_games: i32,
    pub wins: i32,
    pub wins_percent: f64,
    pub losses: i32,
    pub losses_percent: f64,
    pub draws: i32,
    pub draws_percent: f64,
}

/// A player's ladder season results.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeagueStatistics {
    pub current_season: CurrentSeason,
    pub previous_season: PreviousSeason,
    pub best_season: BestSeason,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CurrentSeason {
    pub rank: i32,
    pub trophies: i32,
    pub best_trophies: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PreviousSeason {
    /// Season identifier, e.g. "2018-06".
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    pub trophies: i32,
    pub best_trophies: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BestSeason {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    pub rank: i32,
    pub trophies: i32,
}

/// A card as owned by a player or played in a battle.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Card {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub level: i32,
    pub max_level: i32,
    /// Copies of the card currently held.
    pub count: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub rarity: String,
    /// Copies needed for the next level, [`RequiredForUpgrade::MAXED`] at max level.
    pub required_for_upgrade: RequiredForUpgrade,
    #[serde(deserialize_with = "null_as_default")]
    pub icon: String,
    #[serde(deserialize_with = "null_as_default")]
    pub key: String,
    pub elixir: i32,
    #[serde(rename = "type")]
    #[serde(deserialize_with = "null_as_default")]
    pub kind: String,
    /// Arena in which the card unlocks.
    pub arena: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    pub id: i32,
}

impl Card {
    pub fn is_maxed(&self) -> bool {
        self.required_for_upgrade.is_maxed()
    }
}

/// A player's progress on an achievement.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Achievement {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub stars: i32,
    pub value: i32,
    /// Value needed to complete the achievement.
    pub target: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub info: String,
}

impl Achievement {
    pub fn is_complete(&self) -> bool {
        self.value >= self.target
    }
}

/// Who took the battle, read from the sign of [`PlayerBattle::winner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BattleOutcome {
    Victory,
    Defeat,
    Draw,
}

/// A match the player took part in.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerBattle {
    /// "PvP", "clanMate", "tournament", "challenge", ...
    #[serde(rename = "type")]
    #[serde(deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_as_default")]
    pub challenge_type: String,
    pub mode: BattleMode,
    pub win_count_before: i32,
    /// Unix timestamp, in seconds.
    pub utc_time: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub deck_type: String,
    pub team_size: i32,
    /// `team_crowns - opponent_crowns`: positive when the player won, negative
    /// when the opponent won, zero for a draw.
    pub winner: i32,
    pub team_crowns: i32,
    pub opponent_crowns: i32,
    /// The player's side, in API order.
    #[serde(deserialize_with = "null_as_default")]
    pub team: Vec<TeamMember>,
    #[serde(deserialize_with = "null_as_default")]
    pub opponent: Vec<TeamMember>,
    pub arena: Arena,
}

impl PlayerBattle {
    pub fn outcome(&self) -> BattleOutcome {
        match self.winner.signum() {
            1 => BattleOutcome::Victory,
            -1 => BattleOutcome::Defeat,
            _ => BattleOutcome::Draw,
        }
    }

    pub fn crown_differential(&self) -> i64 {
        i64::from(self.team_crowns) - i64::from(self.opponent_crowns)
    }

    /// Whether the reported `winner` agrees with the crown counts.
    pub fn is_consistent(&self) -> bool {
        i64::from(self.winner) == self.crown_differential()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BattleMode {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub deck: String,
    #[serde(deserialize_with = "null_as_default")]
    pub card_levels: String,
    pub overtime_seconds: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub players: String,
    pub same_deck: bool,
}

/// One participant on either side of a [`PlayerBattle`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamMember {
    #[serde(deserialize_with = "null_as_default")]
    pub tag: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub crowns_earned: i32,
    pub trophy_change: i32,
    pub start_trophies: i32,
    pub clan: Option<TeamClan>,
    #[serde(deserialize_with = "null_as_default")]
    pub deck_link: String,
    #[serde(deserialize_with = "null_as_default")]
    pub deck: Vec<Card>,
}

/// Basic info on a clan, as seen from a battle.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamClan {
    #[serde(deserialize_with = "null_as_default")]
    pub tag: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub badge: Badge,
}

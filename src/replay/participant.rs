//! Typed access to participant stat records.
//!
//! Stat records store every value as a string (`"CHAMPIONS_KILLED": "4"`).
//! [`Participant`] borrows one record and exposes the commonly used stats as
//! numbers, treating missing or non-numeric values as zero.

use serde::Serialize;

use crate::replay::metadata::StatRecord;

// Stat keys
pub const KEY_RIOT_ID_GAME_NAME: &str = "RIOT_ID_GAME_NAME";
pub const KEY_NAME: &str = "NAME";
pub const KEY_SUMMONER_NAME: &str = "SUMMONER_NAME";
pub const KEY_CHAMPION: &str = "SKIN";
pub const KEY_TEAM: &str = "TEAM";
pub const KEY_KILLS: &str = "CHAMPIONS_KILLED";
pub const KEY_DEATHS: &str = "NUM_DEATHS";
pub const KEY_ASSISTS: &str = "ASSISTS";
pub const KEY_MINIONS_KILLED: &str = "MINIONS_KILLED";
pub const KEY_NEUTRAL_MINIONS_KILLED: &str = "NEUTRAL_MINIONS_KILLED";
pub const KEY_CHAMPION_DAMAGE: &str = "TOTAL_DAMAGE_DEALT_TO_CHAMPIONS";
pub const KEY_VISION_SCORE: &str = "VISION_SCORE";
pub const KEY_WIN: &str = "WIN";

pub const UNKNOWN_NAME: &str = "Unknown";
pub const MAX_PERFORMANCE_SCORE: f64 = 100.0;

/// Borrowed view over one participant's stat record.
#[derive(Debug, Clone, Copy)]
pub struct Participant<'a> {
    stats: &'a StatRecord,
}

/// Owned per-participant summary, suitable for JSON output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParticipantSummary {
    pub name: String,
    pub champion: String,
    pub team: String,
    pub kills: u64,
    pub deaths: u64,
    pub assists: u64,
    pub creep_score: u64,
    pub win: bool,
    pub performance_score: f64,
}

impl<'a> Participant<'a> {
    pub fn new(stats: &'a StatRecord) -> Self {
        Participant { stats }
    }

    /// Raw string value of a stat.
    pub fn get(&self, key: &str) -> Option<&'a str> {
        self.stats.get(key).map(String::as_str)
    }

    /// Stat parsed as a non-negative integer, 0 if missing or malformed.
    pub fn count(&self, key: &str) -> u64 {
        self.get(key)
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(0)
    }

    /// Display name: Riot ID game name, then legacy name fields.
    pub fn name(&self) -> &'a str {
        [KEY_RIOT_ID_GAME_NAME, KEY_NAME, KEY_SUMMONER_NAME]
            .iter()
            .filter_map(|k| self.get(k))
            .find(|v| !v.is_empty())
            .unwrap_or(UNKNOWN_NAME)
    }

    pub fn champion(&self) -> &'a str {
        self.get(KEY_CHAMPION).unwrap_or(UNKNOWN_NAME)
    }

    /// Team id as stored (`"100"` blue, `"200"` red).
    pub fn team(&self) -> &'a str {
        self.get(KEY_TEAM).unwrap_or("")
    }

    pub fn kills(&self) -> u64 {
        self.count(KEY_KILLS)
    }

    pub fn deaths(&self) -> u64 {
        self.count(KEY_DEATHS)
    }

    pub fn assists(&self) -> u64 {
        self.count(KEY_ASSISTS)
    }

    /// Lane minions plus neutral monsters.
    pub fn creep_score(&self) -> u64 {
        self.count(KEY_MINIONS_KILLED)
            .saturating_add(self.count(KEY_NEUTRAL_MINIONS_KILLED))
    }

    pub fn champion_damage(&self) -> u64 {
        self.count(KEY_CHAMPION_DAMAGE)
    }

    pub fn vision_score(&self) -> u64 {
        self.count(KEY_VISION_SCORE)
    }

    pub fn win(&self) -> bool {
        self.get(KEY_WIN) == Some("Win")
    }

    /// (kills + assists) / deaths, with zero deaths counted as one.
    pub fn kda(&self) -> f64 {
        self.kills().saturating_add(self.assists()) as f64 / self.deaths().max(1) as f64
    }

    /// Weighted score of KDA, creep score, champion damage and vision,
    /// capped at 100 and rounded to two decimals.
    pub fn performance_score(&self) -> f64 {
        let score = self.kda() * 10.0
            + self.creep_score() as f64 / 10.0
            + self.champion_damage() as f64 / 1000.0
            + self.vision_score() as f64 / 5.0;
        (score.min(MAX_PERFORMANCE_SCORE) * 100.0).round() / 100.0
    }

    pub fn summary(&self) -> ParticipantSummary {
        ParticipantSummary {
            name: self.name().to_string(),
            champion: self.champion().to_string(),
            team: self.team().to_string(),
            kills: self.kills(),
            deaths: self.deaths(),
            assists: self.assists(),
            creep_score: self.creep_score(),
            win: self.win(),
            performance_score: self.performance_score(),
        }
    }
}

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    #[serde(rename = "W")]
    Win,
    #[serde(rename = "L")]
    Loss,
}

impl GameResult {
    pub fn as_str(self) -> &'static str {
        match self {
            GameResult::Win => "W",
            GameResult::Loss => "L",
        }
    }
}

/// One game as listed in a month response. `date` stays raw so a single bad
/// value only drops that record from the calendar. Only `date` decides
/// whether a record counts; the other fields fall back to empty values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSummary {
    pub date: String,
    #[serde(alias = "matchup", default, deserialize_with = "lenient")]
    pub opponent: String,
    #[serde(alias = "wl", default, deserialize_with = "lenient")]
    pub result: Option<GameResult>,
    #[serde(default, deserialize_with = "lenient")]
    pub points: u32,
    #[serde(default, deserialize_with = "lenient")]
    pub rebounds: u32,
    #[serde(default, deserialize_with = "lenient")]
    pub assists: u32,
}

/// Reads the field if it has the expected shape, otherwise `T::default()`.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let raw = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(raw).unwrap_or_default())
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoxScore {
    pub points: u32,
    pub rebounds: u32,
    pub assists: u32,
    pub steals: u32,
    pub blocks: u32,
    #[serde(alias = "minutes", default)]
    pub minutes_played: String,
    pub field_goals_made: u32,
    pub field_goals_attempted: u32,
    pub three_pointers_made: u32,
    pub three_pointers_attempted: u32,
    pub free_throws_made: u32,
    pub free_throws_attempted: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameDetail {
    pub date: String,
    pub matchup: String,
    #[serde(alias = "wl")]
    pub result: GameResult,
    pub stats: BoxScore,
}

/// Error body the backend attaches to non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub detail: Option<String>,
}

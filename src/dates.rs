use crate::models::GameSummary;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognised game date {raw:?}")]
pub struct DateParseError {
    pub raw: String,
}

/// Reduces a record's date to its calendar day.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps and offset-less ISO date-times.
/// The day is read in the timestamp's own frame: the offset is dropped, not
/// applied, so `2024-01-15T00:00:00Z` is January 15 in every local zone.
pub fn parse_game_date(raw: &str) -> Result<NaiveDate, DateParseError> {
    let raw = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(stamp) = DateTime::parse_from_rfc3339(raw) {
        return Ok(stamp.naive_local().date());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(stamp) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(stamp.date());
        }
    }

    Err(DateParseError {
        raw: raw.to_string(),
    })
}

/// Calendar days of every record whose date parses; the rest are logged and
/// skipped.
pub fn game_days<'a>(games: &'a [GameSummary]) -> impl Iterator<Item = NaiveDate> + 'a {
    games
        .iter()
        .map(|game| parse_game_date(&game.date))
        .filter_map(|parsed| match parsed {
            Ok(day) => Some(day),
            Err(err) => {
                warn!("skipping game record: {err}");
                None
            }
        })
}

pub fn has_game(day: NaiveDate, games: &[GameSummary]) -> bool {
    game_days(games).any(|game_day| game_day == day)
}

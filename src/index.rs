use crate::dates::game_days;
use crate::models::GameSummary;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeSet;

/// Days of the current month that have at least one game.
///
/// Built from the games of one resolved month fetch and replaced wholesale
/// by the next one. `contains(d)` agrees with [`crate::dates::has_game`] for
/// the games the index was built from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MonthGameIndex {
    days: BTreeSet<NaiveDate>,
}

impl MonthGameIndex {
    pub fn build(games: &[GameSummary]) -> Self {
        Self {
            days: game_days(games).collect(),
        }
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.days.contains(&day)
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.iter().copied()
    }
}

//! Navigation and data correlation between the month calendar and a single
//! game's detail view.
//!
//! The controller never performs I/O. Actions that need data return a
//! [`Command`]; whoever runs the command hands the outcome back through
//! [`ViewController::apply_month`] or [`ViewController::apply_game`], which
//! refuse anything but the latest request of their flow.

use crate::calendar::{MonthStep, YearMonth, date_key};
use crate::errors::{FetchError, GAME_FALLBACK, MONTH_FALLBACK};
use crate::fetch::{FetchSlot, FetchState, Ticket};
use crate::index::MonthGameIndex;
use crate::models::{GameDetail, GameSummary};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "view", content = "date", rename_all = "snake_case")]
pub enum Route {
    Month,
    Game(NaiveDate),
}

/// What the presentation layer renders from; a plain copy of the current
/// view state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewSnapshot {
    pub anchor: YearMonth,
    pub route: Route,
    pub month: FetchState<Vec<GameSummary>>,
    pub index: MonthGameIndex,
    pub detail: FetchState<GameDetail>,
}

/// A fetch the driver must run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    FetchMonth(Ticket<YearMonth>),
    FetchGame(Ticket<NaiveDate>),
}

#[derive(Debug, Clone)]
pub struct ViewController {
    anchor: YearMonth,
    route: Route,
    month: FetchSlot<YearMonth, Vec<GameSummary>>,
    index: MonthGameIndex,
    detail: FetchSlot<NaiveDate, GameDetail>,
}

impl ViewController {
    /// Starts on the month view around `today` together with the fetch for
    /// that month.
    pub fn new(today: NaiveDate) -> (Self, Command) {
        let mut controller = Self {
            anchor: YearMonth::of(today),
            route: Route::Month,
            month: FetchSlot::default(),
            index: MonthGameIndex::default(),
            detail: FetchSlot::default(),
        };
        let command = controller.load_month();
        (controller, command)
    }

    pub fn anchor(&self) -> YearMonth {
        self.anchor
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn month_state(&self) -> &FetchState<Vec<GameSummary>> {
        self.month.state()
    }

    pub fn detail_state(&self) -> &FetchState<GameDetail> {
        self.detail.state()
    }

    pub fn index(&self) -> &MonthGameIndex {
        &self.index
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            anchor: self.anchor,
            route: self.route,
            month: self.month.state().clone(),
            index: self.index.clone(),
            detail: self.detail.state().clone(),
        }
    }

    pub fn change_month(&mut self, step: MonthStep) -> Command {
        self.anchor = self.anchor.shift(step);
        info!("changing month to {}", self.anchor);
        self.load_month()
    }

    /// Re-issues the fetch for the current anchor, e.g. after an error.
    pub fn reload_month(&mut self) -> Command {
        self.load_month()
    }

    /// Opens the detail view when `day` has a game; otherwise nothing
    /// happens and `None` comes back.
    pub fn select_day(&mut self, day: NaiveDate) -> Option<Command> {
        if !self.index.contains(day) {
            debug!("clicked date without game: {}", date_key(day));
            return None;
        }

        info!("selected date {}", date_key(day));
        Some(self.open_game(day))
    }

    /// Shows the detail view for `date` and fetches it, without consulting
    /// the month index. Used for direct links to a game.
    pub fn open_game(&mut self, date: NaiveDate) -> Command {
        self.route = Route::Game(date);
        Command::FetchGame(self.detail.begin(date))
    }

    /// Returns to the month view. Month data is kept as is; a detail result
    /// still in flight is discarded when it lands.
    pub fn go_back(&mut self) {
        self.route = Route::Month;
        self.detail.reset();
    }

    /// Records a month outcome. Returns `false` for superseded requests,
    /// which leave the state untouched.
    pub fn apply_month(
        &mut self,
        ticket: Ticket<YearMonth>,
        outcome: Result<Vec<GameSummary>, FetchError>,
    ) -> bool {
        if !self.month.is_current(&ticket) || ticket.key != self.anchor {
            debug!("discarding stale month {} (seq {})", ticket.key, ticket.seq);
            return false;
        }

        let outcome = match outcome {
            Ok(games) => {
                self.index = MonthGameIndex::build(&games);
                Ok(games)
            }
            Err(err) => {
                error!("error fetching month {}: {err}", ticket.key);
                self.index = MonthGameIndex::default();
                Err(err.user_message(MONTH_FALLBACK))
            }
        };
        self.month.resolve(&ticket, outcome)
    }

    pub fn apply_game(
        &mut self,
        ticket: Ticket<NaiveDate>,
        outcome: Result<GameDetail, FetchError>,
    ) -> bool {
        if !self.detail.is_current(&ticket) || self.route != Route::Game(ticket.key) {
            debug!("discarding stale game {} (seq {})", ticket.key, ticket.seq);
            return false;
        }

        let outcome = outcome.map_err(|err| {
            error!("error fetching game {}: {err}", ticket.key);
            err.user_message(GAME_FALLBACK)
        });
        self.detail.resolve(&ticket, outcome)
    }

    fn load_month(&mut self) -> Command {
        Command::FetchMonth(self.month.begin(self.anchor))
    }
}

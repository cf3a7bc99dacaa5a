use crate::api::{HttpStatsApi, StatsApi};
use crate::calendar::MonthStep;
use crate::controller::{Command, Route, ViewController, ViewSnapshot};
use chrono::NaiveDate;
use std::sync::Arc;
use tokio::{sync::Mutex, task::JoinHandle};

/// Runs one fetch to completion; yields whether its result was applied.
pub type Pending = JoinHandle<bool>;

/// Async driver around a [`ViewController`].
///
/// Every action locks the controller, lets it decide what to fetch, and
/// spawns that fetch. The task re-enters the controller under the same lock
/// to apply the outcome, so all view-state mutation is serialised.
pub struct Session<A> {
    api: Arc<A>,
    controller: Arc<Mutex<ViewController>>,
}

impl<A> Clone for Session<A> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            controller: Arc::clone(&self.controller),
        }
    }
}

pub type AppState = Session<HttpStatsApi>;

impl<A: StatsApi> Session<A> {
    /// Must be called inside a Tokio runtime; the first month fetch is
    /// spawned immediately.
    pub fn start(api: A, today: NaiveDate) -> (Self, Pending) {
        let (controller, command) = ViewController::new(today);
        let session = Self {
            api: Arc::new(api),
            controller: Arc::new(Mutex::new(controller)),
        };
        let pending = session.dispatch(command);
        (session, pending)
    }

    pub async fn snapshot(&self) -> ViewSnapshot {
        self.controller.lock().await.snapshot()
    }

    pub async fn change_month(&self, step: MonthStep) -> Pending {
        let command = self.controller.lock().await.change_month(step);
        self.dispatch(command)
    }

    pub async fn reload_month(&self) -> Pending {
        let command = self.controller.lock().await.reload_month();
        self.dispatch(command)
    }

    /// `None` when the day has no game: nothing changed and nothing was
    /// fetched.
    pub async fn select_day(&self, day: NaiveDate) -> Option<Pending> {
        let command = self.controller.lock().await.select_day(day)?;
        Some(self.dispatch(command))
    }

    /// Opens the detail view for a linked date unless it is already the
    /// current route.
    pub async fn show_game(&self, date: NaiveDate) -> Option<Pending> {
        let command = {
            let mut controller = self.controller.lock().await;
            if controller.route() == Route::Game(date) {
                return None;
            }
            controller.open_game(date)
        };
        Some(self.dispatch(command))
    }

    pub async fn go_back(&self) {
        self.controller.lock().await.go_back();
    }

    fn dispatch(&self, command: Command) -> Pending {
        let api = Arc::clone(&self.api);
        let controller = Arc::clone(&self.controller);
        tokio::spawn(async move {
            match command {
                Command::FetchMonth(ticket) => {
                    let outcome = api.fetch_month(ticket.key).await;
                    controller.lock().await.apply_month(ticket, outcome)
                }
                Command::FetchGame(ticket) => {
                    let outcome = api.fetch_game(ticket.key).await;
                    controller.lock().await.apply_game(ticket, outcome)
                }
            }
        })
    }
}

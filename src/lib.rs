pub mod api;
pub mod app;
pub mod calendar;
pub mod config;
pub mod controller;
pub mod dates;
pub mod errors;
pub mod fetch;
pub mod handlers;
pub mod index;
pub mod models;
pub mod stats;
pub mod state;
pub mod ui;

pub use api::{HttpStatsApi, StatsApi};
pub use app::router;
pub use config::ClientConfig;
pub use controller::{Route, ViewController, ViewSnapshot};
pub use state::{AppState, Session};

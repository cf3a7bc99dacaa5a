use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/month/prev", post(handlers::previous_month))
        .route("/month/next", post(handlers::next_month))
        .route("/month/reload", post(handlers::reload_month))
        .route("/day/:date", post(handlers::select_day))
        .route("/game/:date", get(handlers::game))
        .route("/back", post(handlers::back))
        .route("/api/view", get(handlers::view))
        .with_state(state)
}

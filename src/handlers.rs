use crate::calendar::{MonthStep, date_key};
use crate::controller::ViewSnapshot;
use crate::errors::AppError;
use crate::state::AppState;
use crate::ui::{render_month, render_view};
use axum::{
    Json,
    extract::{Path, State},
    response::{Html, Redirect},
};
use chrono::NaiveDate;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    state.go_back().await;
    Html(render_month(&state.snapshot().await))
}

pub async fn previous_month(State(state): State<AppState>) -> Redirect {
    state.change_month(MonthStep::Previous).await;
    Redirect::to("/")
}

pub async fn next_month(State(state): State<AppState>) -> Redirect {
    state.change_month(MonthStep::Next).await;
    Redirect::to("/")
}

pub async fn reload_month(State(state): State<AppState>) -> Redirect {
    state.reload_month().await;
    Redirect::to("/")
}

pub async fn select_day(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Result<Redirect, AppError> {
    let day = parse_route_date(&raw)?;
    match state.select_day(day).await {
        Some(_) => Ok(Redirect::to(&format!("/game/{}", date_key(day)))),
        None => Ok(Redirect::to("/")),
    }
}

pub async fn game(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Result<Html<String>, AppError> {
    let date = parse_route_date(&raw)?;
    state.show_game(date).await;
    Ok(Html(render_view(&state.snapshot().await)))
}

pub async fn back(State(state): State<AppState>) -> Redirect {
    state.go_back().await;
    Redirect::to("/")
}

pub async fn view(State(state): State<AppState>) -> Json<ViewSnapshot> {
    Json(state.snapshot().await)
}

fn parse_route_date(raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| AppError::bad_request(format!("date must be YYYY-MM-DD, got {raw:?}")))
}

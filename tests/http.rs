use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::NaiveDate;
use game_calendar::calendar::{MonthStep, YearMonth, date_key};
use game_calendar::fetch::FetchState;
use game_calendar::stats::percentage;
use game_calendar::ui::render_view;
use game_calendar::{ClientConfig, HttpStatsApi, Route, Session};
use once_cell::sync::Lazy;
use reqwest::Client;
use serde_json::{Value, json};
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tokio::time::sleep;

static JANUARY: Lazy<Value> = Lazy::new(|| {
    json!({
        "games": [
            {
                "date": "2024-01-15T00:00:00Z",
                "opponent": "LAL vs MEM",
                "result": "W",
                "points": 35,
                "rebounds": 7,
                "assists": 9
            }
        ]
    })
});

static JANUARY_15: Lazy<Value> = Lazy::new(|| {
    json!({
        "date": "2024-01-15",
        "matchup": "LAL vs MEM",
        "wl": "W",
        "stats": {
            "points": 35,
            "rebounds": 7,
            "assists": 9,
            "steals": 1,
            "blocks": 2,
            "minutes": "37:45",
            "field_goals_made": 10,
            "field_goals_attempted": 20,
            "three_pointers_made": 3,
            "three_pointers_attempted": 6,
            "free_throws_made": 6,
            "free_throws_attempted": 7
        }
    })
});

/// Stand-in for the stats backend; records every path it serves.
#[derive(Clone, Default)]
struct Backend {
    hits: Arc<Mutex<Vec<String>>>,
}

impl Backend {
    fn hits(&self) -> Vec<String> {
        self.hits.lock().unwrap().clone()
    }
}

async fn month(State(backend): State<Backend>, Path(raw): Path<String>) -> Response {
    backend.hits.lock().unwrap().push(format!("/api/stats/{raw}"));
    let Ok(month) = raw.parse::<YearMonth>() else {
        return (StatusCode::UNPROCESSABLE_ENTITY, Json(json!({ "detail": "bad month" }))).into_response();
    };
    match month.to_string().as_str() {
        "2024-01" => Json(JANUARY.clone()).into_response(),
        "2024-03" => (StatusCode::NOT_FOUND, Json(json!({ "detail": "no data" }))).into_response(),
        "2024-04" => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        _ => Json(json!({ "games": [] })).into_response(),
    }
}

async fn game(State(backend): State<Backend>, Path(date): Path<String>) -> Response {
    backend.hits.lock().unwrap().push(format!("/api/game/{date}"));
    if date == "2024-01-15" {
        Json(JANUARY_15.clone()).into_response()
    } else {
        (StatusCode::NOT_FOUND, Json(json!({ "detail": "Game not found" }))).into_response()
    }
}

async fn spawn_backend() -> (String, Backend) {
    let backend = Backend::default();
    let app = Router::new()
        .route("/api/stats/:month", get(month))
        .route("/api/game/:date", get(game))
        .with_state(backend.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}/api"), backend)
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

async fn session_at(today: NaiveDate) -> (Session<HttpStatsApi>, Backend) {
    let (base_url, backend) = spawn_backend().await;
    let api = HttpStatsApi::new(ClientConfig::new(base_url));
    let (session, first) = Session::start(api, today);
    assert!(first.await.unwrap());
    (session, backend)
}

#[tokio::test]
async fn january_index_holds_only_the_15th() {
    let (session, backend) = session_at(ymd(2024, 1, 20)).await;

    let view = session.snapshot().await;
    assert_eq!(view.index.days().collect::<Vec<_>>(), vec![ymd(2024, 1, 15)]);
    assert_eq!(backend.hits(), vec!["/api/stats/2024-01".to_string()]);

    for day in YearMonth::new(2024, 1).unwrap().days() {
        if day != ymd(2024, 1, 15) {
            assert!(session.select_day(day).await.is_none(), "{day}");
        }
    }
    assert_eq!(session.snapshot().await.route, Route::Month);
    assert_eq!(backend.hits().len(), 1);
}

#[tokio::test]
async fn selecting_the_15th_fetches_detail_and_renders_percentage() {
    let (session, backend) = session_at(ymd(2024, 1, 20)).await;

    let pending = session.select_day(ymd(2024, 1, 15)).await.unwrap();
    assert!(pending.await.unwrap());
    assert_eq!(backend.hits().last().unwrap(), "/api/game/2024-01-15");

    let view = session.snapshot().await;
    assert_eq!(view.route, Route::Game(ymd(2024, 1, 15)));
    let detail = view.detail.data().unwrap();
    assert_eq!(
        percentage(detail.stats.field_goals_made, detail.stats.field_goals_attempted),
        "50.0"
    );
    assert!(render_view(&view).contains("10/20 (50.0%)"));

    session.go_back().await;
    assert_eq!(session.snapshot().await.route, Route::Month);
    assert_eq!(backend.hits().len(), 2);
}

#[tokio::test]
async fn month_error_with_detail_empties_the_index() {
    let (session, _backend) = session_at(ymd(2024, 1, 20)).await;
    session.change_month(MonthStep::Next).await.await.unwrap();
    let pending = session.change_month(MonthStep::Next).await;
    assert!(pending.await.unwrap());

    let view = session.snapshot().await;
    assert_eq!(view.anchor.to_string(), "2024-03");
    assert_eq!(view.month, FetchState::Error("no data".to_string()));
    assert!(view.index.is_empty());
    assert!(!render_view(&view).contains(r#"class="day has-game""#));
}

#[tokio::test]
async fn month_error_without_detail_uses_fallback() {
    let (session, _backend) = session_at(ymd(2024, 4, 2)).await;
    let view = session.snapshot().await;
    assert_eq!(view.month.error(), Some("Failed to load month data"));
}

#[tokio::test]
async fn missing_game_surfaces_backend_detail() {
    let (session, _backend) = session_at(ymd(2024, 1, 20)).await;
    let pending = session.show_game(ymd(2024, 1, 16)).await.unwrap();
    assert!(pending.await.unwrap());

    let view = session.snapshot().await;
    assert_eq!(view.detail.error(), Some("Game not found"));
    assert!(!render_view(&view).contains(r#"class="card""#));
}

#[tokio::test]
async fn unreachable_backend_is_an_error_not_a_crash() {
    let port = pick_free_port();
    let api = HttpStatsApi::new(ClientConfig::new(format!("http://127.0.0.1:{port}/api")));
    let (session, first) = Session::start(api, ymd(2024, 1, 20));
    assert!(first.await.unwrap());

    let view = session.snapshot().await;
    assert_eq!(view.month.error(), Some("Failed to load month data"));
    assert!(view.index.is_empty());
}

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/view")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_app(api_base_url: &str) -> TestServer {
    let port = pick_free_port();
    let child = Command::new(env!("CARGO_BIN_EXE_game_calendar"))
        .env("PORT", port.to_string())
        .env("GAME_API_BASE_URL", api_base_url)
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn wait_for_detail(client: &Client, base_url: &str) -> Value {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        let view: Value = client
            .get(format!("{base_url}/api/view"))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        if view["detail"]["status"] != "loading" {
            return view;
        }
        if Instant::now() > deadline {
            panic!("detail never resolved");
        }
        sleep(Duration::from_millis(50)).await;
    }
}

#[tokio::test]
async fn binary_serves_calendar_and_game_pages() {
    let (api_base_url, backend) = spawn_backend().await;
    let server = spawn_app(&api_base_url).await;
    let client = Client::new();

    let page = client.get(format!("{}/", server.base_url)).send().await.unwrap();
    assert!(page.status().is_success());
    let html = page.text().await.unwrap();
    assert!(html.contains("LeBron James Game Stats"));
    assert!(html.contains(r#"action="/month/next""#));

    let bad = client
        .get(format!("{}/game/not-a-date", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(bad.status(), reqwest::StatusCode::BAD_REQUEST);

    let date = date_key(ymd(2024, 1, 15));
    let page = client
        .get(format!("{}/game/{date}", server.base_url))
        .send()
        .await
        .unwrap();
    assert!(page.status().is_success());
    assert!(page.text().await.unwrap().contains("Game Details - 2024-01-15"));

    let view = wait_for_detail(&client, &server.base_url).await;
    assert_eq!(view["route"]["view"], "game");
    assert_eq!(view["detail"]["status"], "success");
    assert_eq!(view["detail"]["data"]["stats"]["field_goals_made"], 10);

    let html = client
        .get(format!("{}/game/{date}", server.base_url))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(html.contains("10/20 (50.0%)"));
    assert_eq!(
        backend.hits().iter().filter(|hit| hit.starts_with("/api/game/")).count(),
        1
    );

    let back = client.post(format!("{}/back", server.base_url)).send().await.unwrap();
    assert!(back.status().is_success());
    let view: Value = client
        .get(format!("{}/api/view", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(view["route"]["view"], "month");
    assert_eq!(view["detail"]["status"], "idle");
}

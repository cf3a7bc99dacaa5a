use crate::calendar::{WEEKDAY_LABELS, date_key};
use crate::controller::{Route, ViewSnapshot};
use crate::fetch::FetchState;
use crate::models::GameDetail;
use crate::stats::shooting_lines;
use std::fmt::Write;

const APP_TITLE: &str = "LeBron James Game Stats";

/// Renders whichever view the route points at. Pure projection of the
/// snapshot; nothing here decides what has a game or what is loading.
pub fn render_view(view: &ViewSnapshot) -> String {
    match view.route {
        Route::Month => render_month(view),
        Route::Game(date) => render_game(&date_key(date), &view.detail),
    }
}

pub fn render_month(view: &ViewSnapshot) -> String {
    let mut grid = String::new();
    for label in WEEKDAY_LABELS {
        let _ = write!(grid, r#"<div class="weekday">{label}</div>"#);
    }
    for week in view.anchor.weeks() {
        for cell in week {
            let Some(day) = cell else {
                grid.push_str(r#"<div class="day blank"></div>"#);
                continue;
            };
            let key = date_key(day);
            let number = day.format("%-d");
            if view.index.contains(day) {
                let _ = write!(
                    grid,
                    r#"<form method="post" action="/day/{key}"><button class="day has-game" type="submit" data-date="{key}">{number}<span class="dot"></span></button></form>"#
                );
            } else {
                let _ = write!(
                    grid,
                    r#"<button class="day" type="button" data-date="{key}" disabled>{number}</button>"#
                );
            }
        }
    }

    let body = MONTH_BODY
        .replace("{{TITLE}}", APP_TITLE)
        .replace("{{MONTH}}", &view.anchor.title())
        .replace("{{GRID}}", &grid)
        .replace("{{LOADING}}", loading(view.month.is_loading()))
        .replace("{{BANNER}}", &banner(view.month.error(), Some("/month/reload")));
    page(APP_TITLE, &body)
}

pub fn render_game(date: &str, detail: &FetchState<GameDetail>) -> String {
    let card = match detail {
        FetchState::Success(game) => game_card(game),
        _ => String::new(),
    };

    let body = GAME_BODY
        .replace("{{DATE}}", &escape(date))
        .replace("{{LOADING}}", loading(detail.is_loading()))
        .replace("{{CARD}}", &card)
        .replace("{{BANNER}}", &banner(detail.error(), None));
    page(&format!("Game Details - {}", escape(date)), &body)
}

fn game_card(game: &GameDetail) -> String {
    let stats = &game.stats;
    let mut lines = String::new();
    for line in shooting_lines(stats) {
        let _ = write!(
            lines,
            r#"<div class="shooting"><div class="shooting-row"><span>{label}</span><span>{made}/{attempted} ({pct}%)</span></div><div class="bar"><div class="fill" style="width: {pct}%"></div></div></div>"#,
            label = line.label,
            made = line.made,
            attempted = line.attempted,
            pct = line.pct,
        );
    }

    let result = game.result.as_str();
    CARD
        .replace("{{MATCHUP}}", &escape(&game.matchup))
        .replace("{{GAME_DATE}}", &escape(&game.date))
        .replace("{{RESULT_CLASS}}", if result == "W" { "win" } else { "loss" })
        .replace("{{RESULT}}", result)
        .replace("{{POINTS}}", &stats.points.to_string())
        .replace("{{MINUTES}}", &escape(&stats.minutes_played))
        .replace("{{REBOUNDS}}", &stats.rebounds.to_string())
        .replace("{{ASSISTS}}", &stats.assists.to_string())
        .replace("{{BLOCKS}}", &stats.blocks.to_string())
        .replace("{{SHOOTING}}", &lines)
}

fn banner(message: Option<&str>, retry: Option<&str>) -> String {
    let Some(message) = message else {
        return String::new();
    };
    let retry = retry
        .map(|action| {
            format!(r#"<form method="post" action="{action}"><button class="back" type="submit">Retry</button></form>"#)
        })
        .unwrap_or_default();
    format!(
        r#"<div class="banner" role="alert"><strong>Error: </strong><span>{}</span>{retry}</div>"#,
        escape(message)
    )
}

fn loading(active: bool) -> &'static str {
    if active {
        r#"<div class="loading" aria-busy="true"><div class="spinner"></div></div>"#
    } else {
        ""
    }
}

fn page(title: &str, body: &str) -> String {
    PAGE.replace("{{PAGE_TITLE}}", title).replace("{{BODY}}", body)
}

/// Braces are escaped too, so backend text never completes a `{{...}}`
/// placeholder.
fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '{' => out.push_str("&#123;"),
            '}' => out.push_str("&#125;"),
            _ => out.push(ch),
        }
    }
    out
}

const MONTH_BODY: &str = r#"<header>
      <h1>{{TITLE}}</h1>
    </header>
    {{BANNER}}
    <section class="calendar">
      <div class="month-nav">
        <form method="post" action="/month/prev"><button class="nav" type="submit" aria-label="Previous month">&larr;</button></form>
        <h2 id="month">{{MONTH}}</h2>
        <form method="post" action="/month/next"><button class="nav" type="submit" aria-label="Next month">&rarr;</button></form>
      </div>
      <div class="grid">{{GRID}}</div>
    </section>
    {{LOADING}}"#;

const GAME_BODY: &str = r#"<header class="detail-header">
      <h1>Game Details - {{DATE}}</h1>
      <form method="post" action="/back"><button class="back" type="submit">Back to Calendar</button></form>
    </header>
    {{LOADING}}
    {{BANNER}}
    {{CARD}}"#;

const CARD: &str = r#"<article class="card">
      <div class="card-head">
        <div>
          <h2>{{MATCHUP}}</h2>
          <p class="subtitle">Date: {{GAME_DATE}}</p>
        </div>
        <span class="result {{RESULT_CLASS}}">{{RESULT}}</span>
      </div>
      <div class="headline">
        <div class="stat"><span class="value">{{POINTS}}</span><span class="label">Points</span></div>
        <div class="stat"><span class="value">{{MINUTES}}</span><span class="label">Minutes</span></div>
      </div>
      <div class="secondary">
        <div class="stat"><span class="value">{{REBOUNDS}}</span><span class="label">Rebounds</span></div>
        <div class="stat"><span class="value">{{ASSISTS}}</span><span class="label">Assists</span></div>
        <div class="stat"><span class="value">{{BLOCKS}}</span><span class="label">Blocks</span></div>
      </div>
      {{SHOOTING}}
    </article>"#;

const PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{{PAGE_TITLE}}</title>
  <style>
    :root {
      --bg: #f3f4f6;
      --ink: #1f2937;
      --muted: #6b7280;
      --accent: #4f46e5;
      --accent-soft: #eef2ff;
      --card: #ffffff;
      --shadow: 0 24px 60px rgba(31, 41, 55, 0.12);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Inter", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(480px, 100%);
      background: var(--card);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 20px;
    }

    h1 {
      margin: 0;
      color: var(--accent);
      font-size: 1.6rem;
      text-align: center;
    }

    .detail-header {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
    }

    .detail-header h1 {
      text-align: left;
      font-size: 1.3rem;
    }

    button {
      appearance: none;
      border: none;
      background: transparent;
      font: inherit;
      cursor: pointer;
    }

    .back {
      padding: 8px 14px;
      border-radius: 8px;
      color: var(--accent);
      background: var(--accent-soft);
    }

    .banner {
      background: #fee2e2;
      border: 1px solid #f87171;
      color: #b91c1c;
      padding: 12px 16px;
      border-radius: 8px;
    }

    .month-nav {
      display: flex;
      align-items: center;
      justify-content: space-between;
      margin-bottom: 12px;
    }

    .month-nav h2 {
      margin: 0;
      font-size: 1.2rem;
    }

    .nav {
      padding: 8px;
      color: var(--muted);
    }

    .grid {
      display: grid;
      grid-template-columns: repeat(7, 1fr);
      gap: 4px;
    }

    .grid form {
      margin: 0;
    }

    .weekday {
      text-align: center;
      font-size: 0.85rem;
      font-weight: 600;
      color: var(--muted);
      padding: 8px 0;
    }

    .day {
      position: relative;
      width: 100%;
      padding: 8px 0 12px;
      text-align: center;
      color: var(--ink);
      cursor: default;
    }

    .day.has-game {
      cursor: pointer;
    }

    .day.has-game:hover {
      background: var(--accent-soft);
      border-radius: 8px;
    }

    .dot {
      position: absolute;
      bottom: 4px;
      left: 50%;
      width: 6px;
      height: 6px;
      margin-left: -3px;
      border-radius: 50%;
      background: var(--accent);
    }

    .loading {
      display: flex;
      justify-content: center;
      padding: 16px 0;
    }

    .spinner {
      width: 32px;
      height: 32px;
      border-radius: 50%;
      border-bottom: 2px solid var(--accent);
      animation: spin 900ms linear infinite;
    }

    .card {
      display: grid;
      gap: 20px;
    }

    .card-head {
      display: flex;
      justify-content: space-between;
      align-items: center;
    }

    .card-head h2 {
      margin: 0;
      font-size: 1.2rem;
    }

    .subtitle {
      margin: 4px 0 0;
      color: var(--muted);
      font-size: 0.9rem;
    }

    .result {
      padding: 4px 12px;
      border-radius: 999px;
    }

    .result.win {
      background: #dcfce7;
      color: #166534;
    }

    .result.loss {
      background: #fee2e2;
      color: #991b1b;
    }

    .headline,
    .secondary {
      display: grid;
      gap: 16px;
    }

    .headline {
      grid-template-columns: repeat(2, 1fr);
    }

    .secondary {
      grid-template-columns: repeat(3, 1fr);
    }

    .stat {
      display: grid;
      text-align: center;
      padding: 12px;
      border-radius: 12px;
    }

    .headline .stat {
      background: var(--accent-soft);
    }

    .stat .value {
      font-size: 1.6rem;
      font-weight: 700;
    }

    .stat .label {
      font-size: 0.85rem;
      color: var(--muted);
    }

    .shooting-row {
      display: flex;
      justify-content: space-between;
      font-size: 0.9rem;
      color: var(--muted);
      margin-bottom: 4px;
    }

    .bar {
      height: 8px;
      border-radius: 999px;
      background: #e5e7eb;
    }

    .fill {
      height: 8px;
      border-radius: 999px;
      background: var(--accent);
    }

    @keyframes spin {
      to {
        transform: rotate(360deg);
      }
    }

    @media (max-width: 600px) {
      .app {
        padding: 28px 22px;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    {{BODY}}
  </main>
</body>
</html>
"#;

use crate::calendar::{YearMonth, date_key};
use crate::config::ClientConfig;
use crate::errors::FetchError;
use crate::models::{ErrorBody, GameDetail, GameSummary};
use chrono::NaiveDate;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::future::Future;
use tracing::{error, info, warn};

/// The two read-only endpoints of the stats backend.
pub trait StatsApi: Send + Sync + 'static {
    fn fetch_month(
        &self,
        month: YearMonth,
    ) -> impl Future<Output = Result<Vec<GameSummary>, FetchError>> + Send;

    fn fetch_game(
        &self,
        date: NaiveDate,
    ) -> impl Future<Output = Result<GameDetail, FetchError>> + Send;
}

#[derive(Debug, Clone)]
pub struct HttpStatsApi {
    client: Client,
    config: ClientConfig,
}

impl HttpStatsApi {
    pub fn new(config: ClientConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: ClientConfig) -> Self {
        Self { client, config }
    }
}

impl StatsApi for HttpStatsApi {
    async fn fetch_month(&self, month: YearMonth) -> Result<Vec<GameSummary>, FetchError> {
        let url = self.config.month_url(&month.to_string());
        info!("fetching month {month}");
        let response = self.client.get(&url).send().await?;
        let body: Value = read_json(response).await?;
        Ok(month_games(body))
    }

    async fn fetch_game(&self, date: NaiveDate) -> Result<GameDetail, FetchError> {
        let date = date_key(date);
        let url = self.config.game_url(&date);
        info!("fetching game {date}");
        let response = self.client.get(&url).send().await?;
        read_json(response).await
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, FetchError> {
    let status = response.status();
    if !status.is_success() {
        let bytes = response.bytes().await.unwrap_or_default();
        let detail = serde_json::from_slice::<ErrorBody>(&bytes)
            .ok()
            .and_then(|body| body.detail);
        return Err(FetchError::Status {
            status: status.as_u16(),
            detail,
        });
    }

    Ok(response.json::<T>().await?)
}

/// Pulls the `games` array out of a month body. A body without one reads as
/// an empty month and records that fail to decode are dropped one by one.
fn month_games(body: Value) -> Vec<GameSummary> {
    let games = match body {
        Value::Object(mut map) => map.remove("games"),
        _ => None,
    };

    let Some(Value::Array(items)) = games else {
        error!("month response has no games array");
        return Vec::new();
    };

    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<GameSummary>(item) {
            Ok(game) => Some(game),
            Err(err) => {
                warn!("skipping undecodable game record: {err}");
                None
            }
        })
        .collect()
}

use std::env;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_PORT: u16 = 8080;

/// Where the stats backend lives and where the web shell listens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub port: u16,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ClientConfig {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: normalize_base_url(&api_base_url.into()),
            ..Self::default()
        }
    }

    /// Reads `GAME_API_BASE_URL` and `PORT`, keeping defaults for anything
    /// unset or unparsable.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_base_url = lookup("GAME_API_BASE_URL")
            .filter(|value| !value.trim().is_empty())
            .map(|value| normalize_base_url(&value))
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        let port = lookup("PORT")
            .and_then(|value| value.trim().parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        Self { api_base_url, port }
    }

    pub fn month_url(&self, month: &str) -> String {
        format!("{}/stats/{month}", self.api_base_url)
    }

    pub fn game_url(&self, date: &str) -> String {
        format!("{}/game/{date}", self.api_base_url)
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

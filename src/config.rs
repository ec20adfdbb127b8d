use std::{env, net::SocketAddr, path::PathBuf};

pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_DATABASE_PATH: &str = "data/journal.db";
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3001";
pub const DEFAULT_PREFERENCES_PATH: &str = "data/preferences.json";

/// Server settings, read from `PORT` and `DATABASE_PATH`.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub database_path: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        let database_path = env::var("DATABASE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATABASE_PATH));

        Self { port, database_path }
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

/// Client settings, read from `API_BASE_URL` and `PREFERENCES_PATH`.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub preferences_path: PathBuf,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        let api_base_url = env::var("API_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());
        let preferences_path = env::var("PREFERENCES_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_PREFERENCES_PATH));

        Self {
            api_base_url,
            preferences_path,
        }
    }
}

use std::env;
use std::path::PathBuf;

use anyhow::Context;
use dotenvy::dotenv;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_DATA_FILE: &str = "bookmarks.json";

#[derive(Debug, Clone)]
pub struct Config {
    /// Listen port, from `PORT`.
    pub port: u16,
    /// Snapshot file location, from `BOOKMARKS_FILE`.
    pub data_file: PathBuf,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv().ok();

        let port = match env::var("PORT") {
            Ok(v) => v
                .parse()
                .with_context(|| format!("invalid PORT value: {v:?}"))?,
            Err(_) => DEFAULT_PORT,
        };
        let data_file = env::var("BOOKMARKS_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_FILE));

        Ok(Self { port, data_file })
    }
}

// src/config.rs

use dotenvy::dotenv;
use std::env;

/// Default port when `PORT` is missing or unparsable.
pub const DEFAULT_PORT: u16 = 3000;

/// Upper bound for submitted source text, in bytes.
pub const MAX_CODE_LENGTH: u64 = 50_000;

/// Upper bound for simulated stdin, in bytes.
pub const MAX_INPUT_LENGTH: u64 = 10_000;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub log_dir: String,

    /// Optional JSON file replacing the built-in lesson catalog.
    pub catalog_path: Option<String>,

    /// Optional directory with the compiled frontend bundle.
    pub static_dir: Option<String>,

    /// Credentials of the single learner whose progress the API tracks.
    pub learner_username: String,
    pub learner_password: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        let log_dir = env::var("LOG_DIR").unwrap_or_else(|_| "logs".to_string());

        let catalog_path = env::var("CATALOG_PATH").ok().filter(|p| !p.is_empty());

        let static_dir = env::var("STATIC_DIR").ok().filter(|p| !p.is_empty());

        let learner_username =
            env::var("LEARNER_USERNAME").unwrap_or_else(|_| "estudiante".to_string());

        let learner_password =
            env::var("LEARNER_PASSWORD").unwrap_or_else(|_| "password".to_string());

        Self {
            port,
            rust_log,
            log_dir,
            catalog_path,
            static_dir,
            learner_username,
            learner_password,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            rust_log: "info".to_string(),
            log_dir: "logs".to_string(),
            catalog_path: None,
            static_dir: None,
            learner_username: "estudiante".to_string(),
            learner_password: "password".to_string(),
        }
    }
}

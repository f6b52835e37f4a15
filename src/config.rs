use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::sync::OnceLock;

/// Port the voice-calling backend listens on when its address is inferred
/// from the inbound request's host.
pub const VOICE_BACKEND_PORT: u16 = 5000;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub data_file: String,
    /// Explicit voice-backend base URL. When unset the URL is inferred per
    /// request from the host header, falling back to localhost.
    pub voice_backend_url: Option<String>,
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            server_address: get_env_or("SERVER_ADDRESS", "0.0.0.0:3000"),
            data_file: get_env_or("DATA_FILE", "data/candidates.json"),
            voice_backend_url: env::var("VOICE_BACKEND_URL")
                .ok()
                .filter(|v| !v.is_empty()),
        })
    }
}

fn get_env_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> &'static Config {
    CONFIG
        .get()
        .expect("Configuration has not been initialized")
}

//! Configuration management

use anyhow::Result;
use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding the built web bundle (index.html + wasm)
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,

    #[serde(default)]
    pub tmdb: TmdbConfig,
}

fn default_port() -> u16 {
    8080
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("dist")
}

#[derive(Clone, Debug, Deserialize)]
pub struct TmdbConfig {
    #[serde(default = "default_tmdb_base_url")]
    pub base_url: String,
    /// v4 read access token (preferred)
    pub access_token: Option<String>,
    /// v3 api key
    pub api_key: Option<String>,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            base_url: default_tmdb_base_url(),
            access_token: None,
            api_key: None,
            language: default_language(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_tmdb_base_url() -> String {
    DEFAULT_TMDB_BASE_URL.to_string()
}

fn default_language() -> String {
    "en-US".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

/// Get config directory (MOVIE_FINDER_CONFIG_DIR, XDG_CONFIG_HOME or platform default)
pub fn get_config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("MOVIE_FINDER_CONFIG_DIR") {
        return PathBuf::from(dir);
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join("Library/Application Support/movie-finder");
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("movie-finder");
        }
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join(".config/movie-finder");
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("APPDATA") {
            return PathBuf::from(appdata).join("movie-finder");
        }
    }

    PathBuf::from(".")
}

pub fn load_config() -> Result<Config> {
    let config_dir = get_config_dir();

    let mut builder = ::config::Config::builder()
        .set_default("port", default_port() as i64)?
        .set_default("static_dir", "dist")?
        .set_default("tmdb.base_url", DEFAULT_TMDB_BASE_URL)?
        .set_default("tmdb.language", default_language())?
        .set_default("tmdb.timeout_secs", default_timeout_secs() as i64)?
        // config.toml / config.json / ... if present
        .add_source(
            ::config::File::with_name(&config_dir.join("config").to_string_lossy()).required(false),
        )
        // MOVIE_FINDER_PORT, MOVIE_FINDER_TMDB__ACCESS_TOKEN, ...
        .add_source(
            ::config::Environment::with_prefix("MOVIE_FINDER")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

    // Precedence: MOVIE_FINDER_PORT > PORT > config > default
    if std::env::var("MOVIE_FINDER_PORT").is_err() {
        if let Ok(port) = std::env::var("PORT") {
            if let Ok(port_num) = port.parse::<u16>() {
                builder = builder.set_override("port", port_num as i64)?;
            }
        }
    }

    // Plain TMDB_ACCESS_TOKEN is what most TMDB tooling documents
    if std::env::var("MOVIE_FINDER_TMDB__ACCESS_TOKEN").is_err() {
        if let Ok(token) = std::env::var("TMDB_ACCESS_TOKEN") {
            builder = builder.set_override("tmdb.access_token", token)?;
        }
    }

    let config = builder.build()?;

    Ok(config.try_deserialize()?)
}

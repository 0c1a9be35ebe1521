//! Server settings read from the environment at start-up.
//!
//! | Variable | Default |
//! |---|---|
//! | `TEMPLATE_SERVER_HOST` | `127.0.0.1` |
//! | `TEMPLATE_SERVER_PORT` | `8000` |
//! | `TEMPLATE_ALLOWED_ORIGINS` | `http://localhost:3000,http://localhost:5173` |
//! | `TEMPLATE_JSON_LIMIT` | `10485760` (bytes) |
//! | `TEMPLATE_OPEN_BROWSER` | `false` |
//!
//! A value that cannot be parsed is reported and replaced by its default.

use log::warn;
use std::str::FromStr;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://localhost:5173"];
const DEFAULT_JSON_LIMIT: usize = 10 * 1024 * 1024; // 10 MB

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Browser origins allowed to call the API cross-origin.
    pub allowed_origins: Vec<String>,
    /// Largest accepted JSON body, in bytes.
    pub json_limit: usize,
    /// Open the embedded frontend in the default browser once the server is up.
    pub open_browser: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            allowed_origins: DEFAULT_ORIGINS.iter().map(|o| o.to_string()).collect(),
            json_limit: DEFAULT_JSON_LIMIT,
            open_browser: false,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let host = lookup("TEMPLATE_SERVER_HOST")
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
            .unwrap_or(defaults.host);
        let port = parse_or("TEMPLATE_SERVER_PORT", lookup("TEMPLATE_SERVER_PORT"), defaults.port);
        let json_limit = parse_or(
            "TEMPLATE_JSON_LIMIT",
            lookup("TEMPLATE_JSON_LIMIT"),
            defaults.json_limit,
        );
        let open_browser = lookup("TEMPLATE_OPEN_BROWSER")
            .map(|raw| parse_flag("TEMPLATE_OPEN_BROWSER", &raw))
            .unwrap_or(defaults.open_browser);
        let allowed_origins = lookup("TEMPLATE_ALLOWED_ORIGINS")
            .map(|raw| parse_origins(&raw))
            .unwrap_or(defaults.allowed_origins);

        Self {
            host,
            port,
            allowed_origins,
            json_limit,
            open_browser,
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn parse_or<T: FromStr>(name: &str, raw: Option<String>, default: T) -> T {
    match raw {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("Ignoring invalid {}={:?}, using the default", name, raw);
            default
        }),
        None => default,
    }
}

fn parse_flag(name: &str, raw: &str) -> bool {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" | "" => false,
        _ => {
            warn!("Ignoring invalid {}={:?}, using false", name, raw);
            false
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .filter(|origin| {
            let valid = origin.starts_with("http://") || origin.starts_with("https://");
            if !valid {
                warn!("Ignoring allowed origin {:?}: not an http(s) origin", origin);
            }
            valid
        })
        .map(|origin| origin.trim_end_matches('/').to_string())
        .collect()
}

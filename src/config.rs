// src/config.rs
use std::{env, net::SocketAddr};
use thiserror::Error;

/// Site identity stamped into feed links, sitemap locations and channel
/// metadata.
#[derive(Clone, Debug)]
pub struct SiteConfig {
    pub base_url: String,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: SocketAddr,
    site: SiteConfig,
    allowed_origins: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_site_url() -> String {
    "http://localhost:8080".into()
}

fn default_site_title() -> String {
    "Newsroom".into()
}

fn default_site_description() -> String {
    "Latest news and stories".into()
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".into()]
}

impl AppConfig {
    /// Build configuration from environment variables. Uses sensible defaults
    /// for optional values and validates the rest.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();

        let listen_addr = env::var("LISTEN_ADDR").unwrap_or_else(|_| default_listen_addr());
        let listen_addr = listen_addr.parse::<SocketAddr>().map_err(|_| {
            ConfigError::Invalid(format!("LISTEN_ADDR is not a socket address: {listen_addr}"))
        })?;

        let base_url =
            normalize_site_url(&env::var("SITE_URL").unwrap_or_else(|_| default_site_url()))?;

        let site = SiteConfig {
            base_url,
            title: env::var("SITE_TITLE").unwrap_or_else(|_| default_site_title()),
            description: env::var("SITE_DESCRIPTION")
                .unwrap_or_else(|_| default_site_description()),
        };

        Ok(Self {
            listen_addr,
            site,
            allowed_origins: Self::allowed_origins_from_env(),
        })
    }

    pub fn listen_addr(&self) -> SocketAddr {
        self.listen_addr
    }

    pub fn site(&self) -> &SiteConfig {
        &self.site
    }

    /// Return the allowed CORS origins as configured (cached on AppConfig).
    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    /// Helper used by router construction in places where creating a full
    /// `AppConfig` is unnecessary.
    pub fn allowed_origins_from_env() -> Vec<String> {
        env::var("ALLOWED_ORIGINS")
            .ok()
            .map(|s| s.split(',').map(|p| p.trim().to_string()).collect())
            .unwrap_or_else(default_allowed_origins)
    }
}

/// Strip trailing slashes and insist on an http(s) scheme so feed links and
/// sitemap locations concatenate cleanly.
fn normalize_site_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ConfigError::Invalid(format!(
            "SITE_URL must start with http:// or https://: {raw}"
        )));
    }
    Ok(trimmed.to_string())
}

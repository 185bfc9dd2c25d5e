use serde::Serialize;

use crate::endpoints::Endpoints;
use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub base_url: &'static str,
    pub endpoints: Endpoints,
}

impl Config {
    pub const fn new() -> Self {
        Self {
            base_url: "https://onlineartgallery-project.onrender.com",
            endpoints: Endpoints::new(),
        }
    }

    /// Same endpoint table against another origin (staging, local backend).
    pub fn with_base_url(base_url: &'static str) -> Result<Self, ConfigError> {
        let config = Self { base_url, ..Self::new() };
        config.validate()?;
        Ok(config)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Lookup by the serialized (camelCase) key names, e.g.
    /// `["endpoints", "auth", "login"]`.
    pub fn get(&self, keys: &[&str]) -> Result<&'static str, ConfigError> {
        let e = &self.endpoints;
        match keys {
            ["baseUrl"] => Ok(self.base_url),
            ["endpoints", "auth", "login"] => Ok(e.auth.login),
            ["endpoints", "auth", "signup"] => Ok(e.auth.signup),
            ["endpoints", "auth", "me"] => Ok(e.auth.me),
            ["endpoints", "artwork", "base"] => Ok(e.artwork.base),
            ["endpoints", "artwork", "list"] => Ok(e.artwork.list),
            ["endpoints", "artwork", "create"] => Ok(e.artwork.create),
            ["endpoints", "artwork", "update"] => Ok(e.artwork.update),
            ["endpoints", "artwork", "delete"] => Ok(e.artwork.delete),
            ["endpoints", "artist", "dashboard"] => Ok(e.artist.dashboard),
            ["endpoints", "customer", "dashboard"] => Ok(e.customer.dashboard),
            ["endpoints", "payments", "createOrder"] => Ok(e.payments.create_order),
            ["endpoints", "payments", "verify"] => Ok(e.payments.verify),
            _ => Err(ConfigError::KeyNotFound(keys.join("."))),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.ends_with('/') {
            return Err(ConfigError::TrailingSlash(self.base_url.to_string()));
        }
        for path in self.endpoints.paths() {
            if !path.starts_with('/') || path.contains("://") {
                return Err(ConfigError::InvalidPath(path.to_string()));
            }
        }
        Ok(())
    }
}

pub const CONFIG: Config = Config::new();

pub fn build_url(path: &str) -> String {
    CONFIG.url(path)
}

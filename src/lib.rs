pub mod config;
pub mod endpoints;
pub mod error;

pub use config::{build_url, Config, CONFIG};
pub use endpoints::*;
pub use error::ConfigError;

pub mod config;
pub mod error;
pub mod preamble;
pub mod templates;

pub use config::{Config, PreambleConfig};
pub use error::ConfigError;

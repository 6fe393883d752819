pub mod config;
pub mod router;

pub use config::{ConfigError, Environment, ServerConfig};
pub use router::router;

//! Layered configuration library.
//!
//! Loads JSON and YAML files, deep-merges them into one tree, and resolves
//! dotted keys against the result.
//!
//! ```no_run
//! use layered_config::Config;
//!
//! let mut config = Config::new("/etc/myapp");
//! config.load(["config.json", "config.local.yaml"])?;
//! let host = config.get("database.host")?;
//! # Ok::<(), layered_config::ConfigError>(())
//! ```

pub mod config;
pub mod error;

pub use config::{Config, Format, Node, ParserRegistry};
pub use error::{ConfigError, ConfigResult, ErrorCode};

//! Configuration system for origin.
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`), which is
//!    where command-line flags land
//! 2. Environment variables (`ORIGIN_*`)
//! 3. User config (`~/.origin/config.yaml`, or `ORIGIN_CONFIG`)
//! 4. `SHELL` and `PATH`, for the shell and search path only
//! 5. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use origin::config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new().build().unwrap();
//! println!("shell: {:?}", config.shell);
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::Config;

//! Configuration loading
//!
//! Settings come from an `envsplit.toml`/`.yml` file and `ENVSPLIT_*`
//! environment variables; CLI arguments take precedence over both.

pub mod loader;

pub use loader::{load_config, ENV_PREFIX};

//! Library surface for envsplit.
//!
//! The pipeline is [`table::read_records`] → [`group::group_records`] →
//! [`emit::generate_env_files`]; the `cli` module wires it to the command line.

pub mod cli;
pub mod config;
pub mod domain;
pub mod emit;
pub mod error;
pub mod group;
pub mod table;
pub mod utils;

pub use domain::{DelimiterStrategy, MergedEnv, Pair, Record, BASE_GROUP};
pub use error::EnvSplitError;
pub use group::GroupedTable;

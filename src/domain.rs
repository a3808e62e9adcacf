//! Core types shared by the reader, grouper and emitter.

use clap::ValueEnum;
use serde::Deserialize;
use std::path::PathBuf;

use crate::utils::OrderedMap;

/// Group whose pairs seed every other group before overlay.
pub const BASE_GROUP: &str = ".env";

/// One data row of the input table.
///
/// `file` and `key` are always non-empty; rows without them never become a `Record`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub file: String,
    pub key: String,
    pub value: String,
}

/// A key/value pair inside one group, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    pub key: String,
    pub value: String,
}

impl From<Record> for Pair {
    fn from(record: Record) -> Self {
        Self { key: record.key, value: record.value }
    }
}

/// Final key → value mapping for one output file.
pub type MergedEnv = OrderedMap<String, String>;

/// How the input table is split into columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DelimiterStrategy {
    /// Always split on `,`. Content is used as read.
    #[serde(alias = "csv")]
    #[value(alias = "csv")]
    Comma,
    /// Line endings normalized; split on `\t` when
    /// the header has one, otherwise on runs of two or more spaces.
    #[serde(rename = "tab", alias = "tsv")]
    #[value(name = "tab", alias = "tsv")]
    TabOrSpaces,
}

/// Settings read from config files and `ENVSPLIT_*` environment variables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub delimiter: Option<DelimiterStrategy>,
    pub output_dir: Option<PathBuf>,
}

//! envsplit: Generate per-environment .env files from a variable table
//!
//! Reads a CSV or TSV table with `file`, `key` and `value` columns and writes
//! one `KEY=VALUE` file per distinct `file`, layered over the `.env` base group.

use anyhow::Result;

fn main() -> Result<()> {
    envsplit::cli::run()
}

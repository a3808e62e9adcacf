//! Generate command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use crate::config::load_config;
use crate::domain::{Config, DelimiterStrategy};
use crate::emit::{generate_env_files, merge_all, render_env, target_path};
use crate::group::group_records;
use crate::table::read_records;

#[derive(Args)]
pub struct GenerateArgs {
    /// Input table with `file`, `key` and `value` columns
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Directory for generated env files [default: .]
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Column delimiter; inferred from the input extension when omitted
    #[arg(short, long, value_enum, value_name = "DELIMITER")]
    pub delimiter: Option<DelimiterStrategy>,

    /// Path to config file (envsplit.toml or envsplit.yml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the generated files instead of writing them
    #[arg(long)]
    pub dry_run: bool,
}

/// Effective settings after CLI > env > file > defaults.
#[derive(Debug, PartialEq, Eq)]
struct Resolved {
    strategy: DelimiterStrategy,
    output_dir: PathBuf,
}

fn resolve(args: &GenerateArgs, config: Config) -> Resolved {
    let strategy = args
        .delimiter
        .or(config.delimiter)
        .unwrap_or_else(|| DelimiterStrategy::for_path(&args.input));
    let output_dir = args
        .output_dir
        .clone()
        .or(config.output_dir)
        .unwrap_or_else(|| PathBuf::from("."));
    Resolved { strategy, output_dir }
}

pub fn run(args: GenerateArgs) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to resolve current directory")?;
    let config = load_config(&cwd, args.config.as_deref())?;
    let Resolved { strategy, output_dir } = resolve(&args, config);

    println!("Parsing {}", args.input.display());
    let records = read_records(&args.input, strategy)?;
    println!("✓ Extracted {} variables", records.len());

    let table = group_records(records);
    println!("✓ Grouped into {} files", table.len());

    if args.dry_run {
        for (name, env) in merge_all(&table) {
            println!("\n# {}", target_path(&output_dir, &name).display());
            print!("{}", render_env(&env));
        }
        println!("\n✓ Dry run: nothing written to {}", output_dir.display());
        return Ok(());
    }

    generate_env_files(&table, &output_dir, |path| println!("✓ Wrote {}", path.display()))?;
    println!("\n✓ Generated all env files");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(input: &str) -> GenerateArgs {
        GenerateArgs {
            input: PathBuf::from(input),
            output_dir: None,
            delimiter: None,
            config: None,
            dry_run: false,
        }
    }

    #[test]
    fn resolve_defaults_follow_extension() {
        let resolved = resolve(&args("vars.csv"), Config::default());
        assert_eq!(
            resolved,
            Resolved { strategy: DelimiterStrategy::Comma, output_dir: PathBuf::from(".") }
        );
        assert_eq!(
            resolve(&args("vars.tsv"), Config::default()).strategy,
            DelimiterStrategy::TabOrSpaces
        );
    }

    #[test]
    fn resolve_config_beats_extension() {
        let config = Config {
            delimiter: Some(DelimiterStrategy::TabOrSpaces),
            output_dir: Some(PathBuf::from("env")),
        };
        let resolved = resolve(&args("vars.csv"), config);
        assert_eq!(resolved.strategy, DelimiterStrategy::TabOrSpaces);
        assert_eq!(resolved.output_dir, PathBuf::from("env"));
    }

    #[test]
    fn resolve_cli_beats_config() {
        let mut cli = args("vars.tsv");
        cli.delimiter = Some(DelimiterStrategy::Comma);
        cli.output_dir = Some(PathBuf::from("cli-out"));
        let config = Config {
            delimiter: Some(DelimiterStrategy::TabOrSpaces),
            output_dir: Some(PathBuf::from("cfg-out")),
        };
        let resolved = resolve(&cli, config);
        assert_eq!(resolved.strategy, DelimiterStrategy::Comma);
        assert_eq!(resolved.output_dir, PathBuf::from("cli-out"));
    }
}

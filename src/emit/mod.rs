//! Merging groups over the `.env` base and writing the results.

use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::domain::{MergedEnv, Pair};
use crate::error::EnvSplitError;
use crate::group::GroupedTable;

/// Last-write-wins mapping of the base group; empty when there is no `.env` group.
pub fn base_env(table: &GroupedTable) -> MergedEnv {
    merge_group(&MergedEnv::new(), table.base().unwrap_or_default())
}

/// Copy `base` and overlay `pairs` in order.
pub fn merge_group(base: &MergedEnv, pairs: &[Pair]) -> MergedEnv {
    let mut env = base.clone();
    for pair in pairs {
        env.insert(pair.key.clone(), pair.value.clone());
    }
    env
}

/// One merged env per group, in group order. The base group is merged over itself.
pub fn merge_all(table: &GroupedTable) -> Vec<(String, MergedEnv)> {
    let base = base_env(table);
    table.iter().map(|(name, pairs)| (name.to_string(), merge_group(&base, pairs))).collect()
}

/// `KEY=VALUE` lines with a single trailing newline.
pub fn render_env(env: &MergedEnv) -> String {
    let body = env.iter().map(|(key, value)| format!("{key}={value}")).collect::<Vec<_>>();
    format!("{}\n", body.join("\n"))
}

/// `<output_dir>/<name>`; root and drive prefixes in `name` are dropped so it stays inside.
pub fn target_path(output_dir: &Path, name: &str) -> PathBuf {
    let relative = Path::new(name)
        .components()
        .filter(|c| !matches!(c, Component::RootDir | Component::Prefix(_)));
    let mut path = output_dir.to_path_buf();
    path.extend(relative);
    path
}

/// Writes rendered env files into one output directory.
#[derive(Debug)]
pub struct EnvWriter {
    output_dir: PathBuf,
}

impl EnvWriter {
    /// Create `output_dir` (and parents) if needed.
    pub fn create(output_dir: &Path) -> Result<Self, EnvSplitError> {
        fs::create_dir_all(output_dir).map_err(|source| EnvSplitError::DirectoryCreate {
            path: output_dir.to_path_buf(),
            source,
        })?;
        Ok(Self { output_dir: output_dir.to_path_buf() })
    }

    /// Write `env` to `<output_dir>/<name>`, replacing any existing file.
    pub fn write(&self, name: &str, env: &MergedEnv) -> Result<PathBuf, EnvSplitError> {
        let path = target_path(&self.output_dir, name);
        fs::write(&path, render_env(env))
            .map_err(|source| EnvSplitError::Write { path: path.clone(), source })?;
        tracing::info!("Wrote {} ({} variables)", path.display(), env.len());
        Ok(path)
    }
}

/// Merge and write every group, stopping at the first failure.
///
/// `on_write` is called with each path right after it is written.
pub fn generate_env_files(
    table: &GroupedTable,
    output_dir: &Path,
    mut on_write: impl FnMut(&Path),
) -> Result<Vec<PathBuf>, EnvSplitError> {
    let writer = EnvWriter::create(output_dir)?;
    let mut written = Vec::with_capacity(table.len());
    for (name, env) in merge_all(table) {
        let path = writer.write(&name, &env)?;
        on_write(&path);
        written.push(path);
    }
    Ok(written)
}

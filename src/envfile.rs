//! Environment file derivation for rendered projects.
//! After rendering, every `*.env.example` file in the destination is merged
//! against a per-path override map and written next to itself with the
//! `.example` suffix stripped, so the generated project starts with a usable
//! `.env` out of the box.

use crate::constants::ENV_EXAMPLE_SUFFIX;
use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::debug;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Override values keyed by rendered-tree-relative file path, each value a
/// map of environment variable key to literal replacement string.
pub type EnvOverrides = IndexMap<String, IndexMap<String, String>>;

/// Merges the content of an env example file with override values.
///
/// Blank lines, comment lines and lines without a `=` pass through verbatim
/// in their original order. `KEY=VALUE` lines take the override value when
/// one exists for the key; override keys not present in the input are
/// appended at the end in map order. The result always ends with a single
/// trailing newline, which keeps the merge idempotent.
pub fn merge_env_example(input: &str, overrides: &IndexMap<String, String>) -> String {
    let mut seen: Vec<&str> = Vec::new();
    let mut out: Vec<String> = Vec::new();

    for line in input.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || !line.contains('=') {
            out.push(line.to_string());
            continue;
        }
        let (raw_key, raw_value) = line.split_once('=').unwrap_or((line, ""));
        let key = raw_key.trim();
        let value = match overrides.get(key) {
            Some(override_value) => {
                seen.push(key);
                override_value.as_str()
            }
            None => raw_value,
        };
        out.push(format!("{}={}", key, value));
    }

    for (key, value) in overrides {
        if !seen.contains(&key.as_str()) {
            out.push(format!("{}={}", key, value));
        }
    }

    out.join("\n") + "\n"
}

/// Walks the rendered destination tree and materializes a `.env` target for
/// every `.env.example` file, applying the override entry registered under
/// the file's destination-relative path. Files without an entry still get
/// the pass-through merge and the stripped-suffix target.
pub fn generate_env_files(root: &Path, overrides: &EnvOverrides) -> Result<()> {
    let empty = IndexMap::new();

    for dir_entry in WalkDir::new(root) {
        let dir_entry = dir_entry.map_err(|e| Error::IoError(e.into()))?;
        if !dir_entry.file_type().is_file() {
            continue;
        }
        let name = dir_entry.file_name().to_string_lossy();
        if !name.ends_with(ENV_EXAMPLE_SUFFIX) {
            continue;
        }

        let path = dir_entry.path();
        let relative = path
            .strip_prefix(root)
            .map_err(|e| Error::ConfigError(e.to_string()))?
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join("/");

        let content = fs::read_to_string(path)?;
        let file_overrides = overrides.get(&relative).unwrap_or(&empty);
        let merged = merge_env_example(&content, file_overrides);

        let target_name = name.strip_suffix(".example").unwrap_or(&name);
        let target = path.with_file_name(target_name);
        debug!("Materializing env file {}", target.display());
        fs::write(&target, merged)?;

        let permissions = fs::metadata(path)?.permissions();
        fs::set_permissions(&target, permissions)?;
    }
    Ok(())
}

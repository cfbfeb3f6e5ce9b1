//! Input validation for Kickstart.
//! Validates the caller-supplied project name and module path, and resolves
//! the destination directory the project is generated into.

use crate::error::{Error, Result};
use regex::Regex;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

fn module_path_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9_.-]+(/[a-zA-Z0-9_.-]+)+$").expect("module path pattern")
    })
}

/// Validates a project name: non-blank, no path separators, no control
/// characters.
pub fn project_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::ValidationError("project name is required".to_string()));
    }
    if name.contains(['/', '\\']) || name.contains(['\t', '\r', '\n']) {
        return Err(Error::ValidationError(
            "project name must not contain path separators".to_string(),
        ));
    }
    Ok(())
}

/// Validates a Go module path of the `domain.com/owner/name` shape.
pub fn module_path(path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(Error::ValidationError("module path is required".to_string()));
    }
    if !module_path_re().is_match(path) {
        return Err(Error::ValidationError(
            "module path must look like domain.com/owner/name".to_string(),
        ));
    }
    Ok(())
}

/// Directory name derived from a project name: trimmed and kebab-cased, so
/// "My App" and "MyApp" both land in `my-app/`.
pub fn project_dir_name(name: &str) -> String {
    cruet::to_kebab_case(name.trim())
}

fn resolve_base(arg: &str) -> Result<PathBuf> {
    let cwd = env::current_dir()?;
    if arg.is_empty() {
        return Ok(cwd);
    }
    let path = Path::new(arg);
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(cwd.join(path))
    }
}

/// Resolves the absolute destination directory for a project: the base path
/// with the project directory name appended, unless the base already ends
/// with it.
pub fn resolve_project_destination(base_arg: &str, name: &str) -> Result<PathBuf> {
    let base = resolve_base(base_arg)?;
    let dir_name = project_dir_name(name);
    match base.file_name() {
        Some(last) if last == dir_name.as_str() => Ok(base),
        _ => Ok(base.join(dir_name)),
    }
}

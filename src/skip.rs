//! Path-based skip rules for Kickstart templates.
//! Each rule is an independent predicate over a relative forward-slash path;
//! a render combines them with a logical OR. Returning true for a directory
//! prunes its whole subtree, returning true for a file omits only that file.

use crate::config::ScaffoldConfig;
use crate::constants::{DEFAULT_IGNORE_GLOBS, ENV_EXAMPLE_SUFFIX};
use crate::error::{Error, Result};
use globset::{Glob, GlobSetBuilder};
use log::debug;

/// A single skip predicate over a tree-relative path.
pub type SkipRule = Box<dyn Fn(&str) -> bool>;

fn basename(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Builds the fixed ignore rule from [`DEFAULT_IGNORE_GLOBS`].
///
/// # Notes
/// - Patterns are compiled once into a `GlobSet`
/// - Basenames beginning with `.env.example` are never skipped, the env-file
///   materializer depends on them surviving to the rendered tree
///
/// # Errors
/// * `Error::IgnorePatternError` if a pattern fails to compile
pub fn default_skip_rule() -> Result<SkipRule> {
    let mut builder = GlobSetBuilder::new();
    for pattern in DEFAULT_IGNORE_GLOBS {
        builder.add(Glob::new(pattern).map_err(|e| {
            Error::IgnorePatternError(format!("invalid ignore pattern '{}': {}", pattern, e))
        })?);
    }
    let glob_set = builder
        .build()
        .map_err(|e| Error::IgnorePatternError(format!("ignore pattern set failed: {}", e)))?;

    Ok(Box::new(move |path: &str| {
        if basename(path).starts_with(ENV_EXAMPLE_SUFFIX) {
            return false;
        }
        glob_set.is_match(path)
    }))
}

/// Builds the feature-flag rule for a configuration: excludes the web app
/// and the shared UI package when the web flag is off, and compose files
/// when the docker flag is off.
pub fn config_skip_rule(cfg: &ScaffoldConfig) -> SkipRule {
    let include_web = cfg.include_web;
    let include_docker = cfg.include_docker;
    Box::new(move |path: &str| {
        if !include_web && (path == "apps/web" || path.starts_with("apps/web/")) {
            return true;
        }
        if !include_web && (path == "packages/ui" || path.starts_with("packages/ui/")) {
            return true;
        }
        if !include_docker && basename(path).starts_with("docker-compose") {
            return true;
        }
        false
    })
}

/// Combines independent rules into one predicate with a logical OR.
pub fn combine_rules(rules: Vec<SkipRule>) -> SkipRule {
    Box::new(move |path: &str| {
        for rule in &rules {
            if rule(path) {
                debug!("Skipping path {}", path);
                return true;
            }
        }
        false
    })
}

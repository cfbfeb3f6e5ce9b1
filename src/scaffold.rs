//! Scaffolding orchestration for Kickstart.
//! Sequences the pipeline: safety gate, replacement map, skip rules, content
//! transform (conditional expansion, then token substitution), tree render,
//! env-file materialization and the optional git step. Data flows one way;
//! only the env materializer re-reads what the renderer wrote.

use crate::conditions::{apply_conditions, ConditionSet};
use crate::config::{ScaffoldConfig, StorageProvider};
use crate::envfile::{generate_env_files, EnvOverrides};
use crate::error::Result;
use crate::git::init_git_repo;
use crate::renderer::render_tree;
use crate::safety::ensure_safe_destination;
use crate::skip::{combine_rules, config_skip_rule, default_skip_rule};
use crate::source::{EmbeddedTree, SourceTree};
use crate::tokens::{replace_tokens, replacements_from_config};
use indexmap::IndexMap;
use log::debug;
use rust_embed::RustEmbed;
use std::path::Path;

/// The monorepo template bundle compiled into the binary.
#[derive(RustEmbed)]
#[folder = "templates/monorepo"]
pub struct MonorepoTemplates;

/// Scaffolds a project from the embedded monorepo template.
pub fn scaffold_project(cfg: &ScaffoldConfig, allow_overwrite: bool) -> Result<()> {
    let source = EmbeddedTree::<MonorepoTemplates>::new();
    scaffold_from_tree(cfg, allow_overwrite, &source, None)
}

/// Scaffolds a project from an arbitrary source tree.
///
/// # Arguments
/// * `cfg` - Configuration of this run; the engine only reads it
/// * `allow_overwrite` - Explicit consent to write into a populated
///   destination
/// * `source` - Template tree (embedded bundle, directory, or fixture)
/// * `env_overrides` - Per-path env overrides; derived from `cfg` when
///   `None`
///
/// # Flow
/// 1. Safety gate on the destination
/// 2. Replacement map and skip predicate from the configuration
/// 3. Tree render with conditional expansion, then token substitution
/// 4. Env-file materialization over the rendered tree
/// 5. Optional git init with a single initial commit
pub fn scaffold_from_tree(
    cfg: &ScaffoldConfig,
    allow_overwrite: bool,
    source: &dyn SourceTree,
    env_overrides: Option<EnvOverrides>,
) -> Result<()> {
    let destination = Path::new(&cfg.destination);
    ensure_safe_destination(destination, allow_overwrite)?;

    let replacements = replacements_from_config(cfg);
    let conditions = ConditionSet::from_config(cfg);
    let should_skip = combine_rules(vec![default_skip_rule()?, config_skip_rule(cfg)]);
    let transform = |_path: &str, content: &str| -> Result<String> {
        let expanded = apply_conditions(content, &conditions);
        Ok(replace_tokens(&expanded, &replacements))
    };

    debug!("Rendering template into {}", destination.display());
    render_tree(source, destination, &should_skip, &transform)?;

    let overrides = match env_overrides {
        Some(overrides) => overrides,
        None => env_overrides_from_config(cfg),
    };
    generate_env_files(destination, &overrides)?;

    if cfg.init_git {
        debug!("Initializing git repository in {}", destination.display());
        init_git_repo(destination)?;
    }
    Ok(())
}

fn quoted(value: &str) -> String {
    format!("\"{}\"", value)
}

/// Derives the env override set for the API app from the configuration.
/// One entry per templated env file; `apps/api/.env.example` is the only
/// one in the current bundle.
pub fn env_overrides_from_config(cfg: &ScaffoldConfig) -> EnvOverrides {
    let mut api = IndexMap::new();
    api.insert("API_PRIMARY.APP_NAME".to_string(), quoted(&cfg.project_name));
    api.insert("API_DATABASE.HOST".to_string(), quoted(&cfg.db.host));
    api.insert("API_DATABASE.PORT".to_string(), quoted(&cfg.db.port));
    api.insert("API_DATABASE.USER".to_string(), quoted(&cfg.db.user));
    api.insert("API_DATABASE.PASSWORD".to_string(), quoted(&cfg.db.password));
    api.insert("API_DATABASE.NAME".to_string(), quoted(&cfg.db.name));
    api.insert("API_DATABASE.SSL_MODE".to_string(), quoted(&cfg.db.ssl_mode));

    api.insert(
        "API_FILE_STORAGE.PROVIDER".to_string(),
        quoted(cfg.storage.provider.as_str()),
    );
    if cfg.storage.provider == StorageProvider::Local {
        if let Some(local) = &cfg.storage.local {
            api.insert("API_FILE_STORAGE.LOCAL.BASE_DIR".to_string(), quoted(&local.path));
        }
    }
    if cfg.storage.provider == StorageProvider::S3 {
        if let Some(s3) = &cfg.storage.s3 {
            api.insert("API_FILE_STORAGE.S3.BUCKET".to_string(), quoted(&s3.bucket));
            api.insert("API_FILE_STORAGE.S3.REGION".to_string(), quoted(&s3.region));
            api.insert("API_FILE_STORAGE.S3.ENDPOINT".to_string(), quoted(&s3.endpoint));
            api.insert("API_FILE_STORAGE.S3.ACCESS_KEY_ID".to_string(), quoted(&s3.access_key));
            api.insert(
                "API_FILE_STORAGE.S3.SECRET_ACCESS_KEY".to_string(),
                quoted(&s3.secret_key),
            );
        }
    }

    let mut overrides = IndexMap::new();
    overrides.insert("apps/api/.env.example".to_string(), api);
    overrides
}

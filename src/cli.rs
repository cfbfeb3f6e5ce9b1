//! Command-line interface implementation for Kickstart.
//! Provides argument parsing with clap and the mapping from parsed flags to
//! a finished scaffold configuration.

use crate::config::{
    DatabaseType, LocalStorage, PackageManager, S3Storage, ScaffoldConfig, StorageProvider,
};
use crate::error::{Error, Result};
use crate::validate;
use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

/// Command-line arguments structure for Kickstart.
#[derive(Parser, Debug)]
#[command(author, version, about = "Kickstart: full-stack monorepo project scaffolding tool", long_about = None)]
pub struct Args {
    /// Name of the project to generate
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Base directory the project directory is created under
    #[arg(value_name = "DEST")]
    pub dest: Option<String>,

    /// Go module path of the generated API (e.g. github.com/acme/demo)
    #[arg(long, value_name = "MODULE")]
    pub module: String,

    /// Exclude the web app and the shared UI package
    #[arg(long)]
    pub no_web: bool,

    /// Exclude container orchestration files
    #[arg(long)]
    pub no_docker: bool,

    /// Do not initialize a git repository
    #[arg(long)]
    pub no_git: bool,

    /// Database type (postgres)
    #[arg(long, default_value = "postgres")]
    pub db: String,

    /// Database host
    #[arg(long, value_name = "HOST")]
    pub db_host: Option<String>,

    /// Database port
    #[arg(long, value_name = "PORT")]
    pub db_port: Option<String>,

    /// Database user
    #[arg(long, value_name = "USER")]
    pub db_user: Option<String>,

    /// Database password
    #[arg(long, value_name = "PASSWORD")]
    pub db_password: Option<String>,

    /// Database name
    #[arg(long, value_name = "NAME")]
    pub db_name: Option<String>,

    /// Database ssl mode
    #[arg(long, value_name = "MODE")]
    pub db_ssl_mode: Option<String>,

    /// Package manager (bun)
    #[arg(long, default_value = "bun")]
    pub pkg: String,

    /// Storage provider (local|s3)
    #[arg(long, default_value = "local")]
    pub storage: String,

    /// S3 endpoint
    #[arg(long, value_name = "URL")]
    pub s3_endpoint: Option<String>,

    /// S3 region
    #[arg(long, value_name = "REGION")]
    pub s3_region: Option<String>,

    /// S3 bucket
    #[arg(long, value_name = "BUCKET")]
    pub s3_bucket: Option<String>,

    /// S3 access key
    #[arg(long, value_name = "KEY")]
    pub s3_access_key: Option<String>,

    /// S3 secret key
    #[arg(long, value_name = "KEY")]
    pub s3_secret_key: Option<String>,

    /// Scaffold from a local template directory instead of the embedded
    /// bundle
    #[arg(long, value_name = "DIR")]
    pub template: Option<PathBuf>,

    /// Overwrite a non-empty destination without asking
    #[arg(short, long)]
    pub force: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help()
                    .unwrap();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}

/// Maps parsed arguments onto a finished scaffold configuration.
///
/// # Errors
/// * `Error::ValidationError` for an invalid name or module path
/// * `Error::ConfigError` for unsupported database/storage selections or
///   incomplete S3 settings
pub fn config_from_args(args: &Args) -> Result<ScaffoldConfig> {
    let mut cfg = ScaffoldConfig { use_defaults: false, ..ScaffoldConfig::default() };

    cfg.project_name = args.name.clone();
    validate::project_name(&cfg.project_name)?;

    cfg.module_path = args.module.clone();
    validate::module_path(&cfg.module_path)?;

    cfg.include_web = !args.no_web;
    cfg.include_docker = !args.no_docker;
    cfg.init_git = !args.no_git;

    cfg.database = match args.db.as_str() {
        "postgres" => DatabaseType::Postgres,
        other => {
            return Err(Error::ConfigError(format!("unsupported database type: {}", other)))
        }
    };
    cfg.package_manager = match args.pkg.as_str() {
        "bun" => PackageManager::Bun,
        other => {
            return Err(Error::ConfigError(format!("unsupported package manager: {}", other)))
        }
    };

    if let Some(host) = &args.db_host {
        cfg.db.host = host.clone();
    }
    if let Some(port) = &args.db_port {
        cfg.db.port = port.clone();
    }
    if let Some(user) = &args.db_user {
        cfg.db.user = user.clone();
    }
    if let Some(password) = &args.db_password {
        cfg.db.password = password.clone();
    }
    if let Some(name) = &args.db_name {
        cfg.db.name = name.clone();
    }
    if let Some(ssl_mode) = &args.db_ssl_mode {
        cfg.db.ssl_mode = ssl_mode.clone();
    }

    cfg.storage.provider = match args.storage.as_str() {
        "local" => StorageProvider::Local,
        "s3" => StorageProvider::S3,
        other => {
            return Err(Error::ConfigError(format!("unsupported storage type: {}", other)))
        }
    };
    match cfg.storage.provider {
        StorageProvider::S3 => {
            let (endpoint, region, bucket, access_key, secret_key) = match (
                &args.s3_endpoint,
                &args.s3_region,
                &args.s3_bucket,
                &args.s3_access_key,
                &args.s3_secret_key,
            ) {
                (Some(e), Some(r), Some(b), Some(a), Some(s)) => (e, r, b, a, s),
                _ => {
                    return Err(Error::ConfigError(
                        "s3 storage selected: all s3 connection details are required".to_string(),
                    ))
                }
            };
            cfg.storage.s3 = Some(S3Storage {
                endpoint: endpoint.clone(),
                region: region.clone(),
                bucket: bucket.clone(),
                access_key: access_key.clone(),
                secret_key: secret_key.clone(),
            });
            cfg.storage.local = None;
        }
        StorageProvider::Local => {
            if cfg.storage.local.is_none() {
                cfg.storage.local = Some(LocalStorage { path: "storage".to_string() });
            }
            cfg.storage.s3 = None;
        }
    }

    let dest_arg = args.dest.clone().unwrap_or_default();
    let destination = validate::resolve_project_destination(&dest_arg, &cfg.project_name)?;
    cfg.destination = destination.display().to_string();

    Ok(cfg)
}

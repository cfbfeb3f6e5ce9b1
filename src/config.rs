//! Scaffold configuration for Kickstart.
//! The configuration is assembled by the CLI layer and treated as immutable
//! by the engine; every scaffolding run reads one value of this type.

use serde::{Deserialize, Serialize};

/// Database engine provisioned for the generated API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseType {
    Postgres,
}

impl DatabaseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DatabaseType::Postgres => "postgres",
        }
    }
}

/// Package manager wired into the generated workspace scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    Bun,
}

/// File storage backend for the generated API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageProvider {
    Local,
    S3,
}

impl StorageProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageProvider::Local => "local",
            StorageProvider::S3 => "s3",
        }
    }
}

/// Database connection parameters written into the generated env file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DbConnection {
    pub host: String,
    pub port: String,
    pub user: String,
    pub password: String,
    pub name: String,
    pub ssl_mode: String,
}

/// S3-compatible storage settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct S3Storage {
    pub endpoint: String,
    pub region: String,
    pub bucket: String,
    pub access_key: String,
    pub secret_key: String,
}

/// Local filesystem storage settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalStorage {
    pub path: String,
}

/// Storage provider selection plus its provider-specific settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub provider: StorageProvider,
    pub s3: Option<S3Storage>,
    pub local: Option<LocalStorage>,
}

/// Complete configuration of one scaffolding run.
///
/// Produced by the CLI flag mapping (or any other caller); the engine only
/// reads it. `use_defaults` records whether the user accepted the default
/// answers wholesale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScaffoldConfig {
    pub project_name: String,
    pub destination: String,
    pub module_path: String,
    pub include_web: bool,
    pub database: DatabaseType,
    pub db: DbConnection,
    pub package_manager: PackageManager,
    pub include_docker: bool,
    pub init_git: bool,
    pub storage: StorageConfig,
    pub use_defaults: bool,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        ScaffoldConfig {
            project_name: "my-app".to_string(),
            destination: String::new(),
            module_path: "github.com/yourorg/my-app".to_string(),
            include_web: true,
            database: DatabaseType::Postgres,
            db: DbConnection {
                host: "localhost".to_string(),
                port: "5432".to_string(),
                user: "postgres".to_string(),
                password: "postgres".to_string(),
                name: "app".to_string(),
                ssl_mode: "disable".to_string(),
            },
            package_manager: PackageManager::Bun,
            include_docker: true,
            init_git: true,
            storage: StorageConfig {
                provider: StorageProvider::Local,
                s3: None,
                local: Some(LocalStorage { path: "storage".to_string() }),
            },
            use_defaults: true,
        }
    }
}

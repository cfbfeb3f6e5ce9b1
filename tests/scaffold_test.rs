use kickstart::config::{S3Storage, ScaffoldConfig, StorageProvider};
use kickstart::error::Error;
use kickstart::scaffold::{env_overrides_from_config, scaffold_from_tree};
use kickstart::source::MemoryTree;
use std::fs;
use tempfile::TempDir;

fn demo_config(destination: &std::path::Path) -> ScaffoldConfig {
    ScaffoldConfig {
        project_name: "demo".to_string(),
        module_path: "github.com/acme/demo".to_string(),
        destination: destination.display().to_string(),
        init_git: false,
        ..ScaffoldConfig::default()
    }
}

fn monorepo_fixture() -> MemoryTree {
    MemoryTree::new()
        .file(
            "README.md.tmpl",
            "intro\n{{IF_INCLUDE_WEB}}apps/web\n## Web (apps/web)\n{{END_IF_INCLUDE_WEB}}",
        )
        .file(
            "AGENTS.md.tmpl",
            "ctx\n{{IF_INCLUDE_WEB}}App #2: Web (apps/web)\n{{END_IF_INCLUDE_WEB}}",
        )
        .file(
            "package.json.tmpl",
            "{\n\"scripts\": {\n\"api:test\": \"x\",\n{{IF_INCLUDE_WEB}}\"ui:shadcn:add\": \"z\",\n\"web:test\": \"y\",\n{{END_IF_INCLUDE_WEB}}\"ui\": \"z\"\n}\n}",
        )
        .file(
            "docker-compose.yml.tmpl",
            "services:\n  api: {}\n{{IF_INCLUDE_WEB}}  web: {}\n{{END_IF_INCLUDE_WEB}}",
        )
        .file("apps/web/index.html.tmpl", "web")
        .file("packages/ui/package.json", "ui")
        .file("apps/api/main.go", "api")
}

#[test]
fn test_scaffold_without_web() {
    let tmp = TempDir::new().unwrap();
    let mut cfg = demo_config(tmp.path());
    cfg.include_web = false;
    cfg.include_docker = true;

    scaffold_from_tree(&cfg, true, &monorepo_fixture(), None).unwrap();

    assert!(!tmp.path().join("apps/web").exists());
    assert!(!tmp.path().join("packages/ui").exists());

    let readme = fs::read_to_string(tmp.path().join("README.md")).unwrap();
    assert!(!readme.contains("apps/web"));

    let agents = fs::read_to_string(tmp.path().join("AGENTS.md")).unwrap();
    assert!(!agents.contains("apps/web"));

    let pkg = fs::read_to_string(tmp.path().join("package.json")).unwrap();
    assert!(!pkg.contains("web:"));
    assert!(!pkg.contains("ui:shadcn:add"));

    let compose = fs::read_to_string(tmp.path().join("docker-compose.yml")).unwrap();
    assert!(!compose.contains("\n  web:"));
}

#[test]
fn test_scaffold_with_web() {
    let tmp = TempDir::new().unwrap();
    let mut cfg = demo_config(tmp.path());
    cfg.include_web = true;
    cfg.include_docker = true;

    scaffold_from_tree(&cfg, true, &monorepo_fixture(), None).unwrap();

    assert!(tmp.path().join("apps/web").exists());
    assert!(tmp.path().join("packages/ui").exists());

    let readme = fs::read_to_string(tmp.path().join("README.md")).unwrap();
    assert!(readme.contains("apps/web"));

    let pkg = fs::read_to_string(tmp.path().join("package.json")).unwrap();
    assert!(pkg.contains("web:test"));
    assert!(pkg.contains("ui:shadcn:add"));

    let compose = fs::read_to_string(tmp.path().join("docker-compose.yml")).unwrap();
    assert!(compose.contains("\n  web:"));
}

#[test]
fn test_scaffold_without_docker() {
    let tmp = TempDir::new().unwrap();
    let mut cfg = demo_config(tmp.path());
    cfg.include_docker = false;

    scaffold_from_tree(&cfg, true, &monorepo_fixture(), None).unwrap();

    assert!(!tmp.path().join("docker-compose.yml").exists());
    assert!(tmp.path().join("apps/api/main.go").exists());
}

#[test]
fn test_scaffold_strict_templates() {
    let tmp = TempDir::new().unwrap();
    let cfg = demo_config(tmp.path());

    let source = MemoryTree::new()
        // Should NOT be templated (no .tmpl suffix)
        .file("plain.txt", "{{PROJECT_NAME}}")
        // Should be templated + suffix stripped
        .file("templated.txt.tmpl", "{{PROJECT_NAME}}");

    scaffold_from_tree(&cfg, true, &source, None).unwrap();

    assert_eq!(fs::read_to_string(tmp.path().join("plain.txt")).unwrap(), "{{PROJECT_NAME}}");
    assert_eq!(fs::read_to_string(tmp.path().join("templated.txt")).unwrap(), "demo");
}

#[test]
fn test_scaffold_readme_scenario() {
    let tmp = TempDir::new().unwrap();
    let cfg = demo_config(tmp.path());

    let source = MemoryTree::new().file("README.md.tmpl", "{{PROJECT_NAME}}");
    scaffold_from_tree(&cfg, true, &source, None).unwrap();

    assert_eq!(fs::read_to_string(tmp.path().join("README.md")).unwrap(), "demo");
}

#[test]
fn test_scaffold_derives_env_file_from_config() {
    let tmp = TempDir::new().unwrap();
    let mut cfg = demo_config(tmp.path());
    cfg.db.host = "db.internal".to_string();

    let source = MemoryTree::new().file(
        "apps/api/.env.example.tmpl",
        "API_PRIMARY.APP_NAME=\"kickstart\"\nAPI_DATABASE.HOST=\"localhost\"\n",
    );
    scaffold_from_tree(&cfg, true, &source, None).unwrap();

    let env = fs::read_to_string(tmp.path().join("apps/api/.env")).unwrap();
    assert!(env.contains("API_PRIMARY.APP_NAME=\"demo\""));
    assert!(env.contains("API_DATABASE.HOST=\"db.internal\""));

    // Appended keys come from the derived override set.
    assert!(env.contains("API_FILE_STORAGE.PROVIDER=\"local\""));
}

#[test]
fn test_scaffold_refuses_populated_destination() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("existing.txt"), "data").unwrap();
    let cfg = demo_config(tmp.path());

    let source = MemoryTree::new().file("README.md.tmpl", "{{PROJECT_NAME}}");
    match scaffold_from_tree(&cfg, false, &source, None) {
        Err(Error::DestinationNotEmpty { .. }) => {}
        other => panic!("expected DestinationNotEmpty, got {:?}", other),
    }

    // Nothing was written before the gate fired.
    let entries: Vec<_> = fs::read_dir(tmp.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
    assert!(!tmp.path().join("README.md").exists());
}

#[test]
fn test_scaffold_does_not_init_git_when_disabled() {
    let tmp = TempDir::new().unwrap();
    let cfg = demo_config(tmp.path());

    let source = MemoryTree::new().file("README.md", "hello");
    scaffold_from_tree(&cfg, true, &source, None).unwrap();

    assert!(!tmp.path().join(".git").exists());
}

#[test]
fn test_env_overrides_from_config_local_storage() {
    let cfg = ScaffoldConfig {
        project_name: "demo".to_string(),
        ..ScaffoldConfig::default()
    };
    let overrides = env_overrides_from_config(&cfg);
    let api = overrides.get("apps/api/.env.example").unwrap();

    assert_eq!(api.get("API_PRIMARY.APP_NAME").unwrap(), "\"demo\"");
    assert_eq!(api.get("API_DATABASE.HOST").unwrap(), "\"localhost\"");
    assert_eq!(api.get("API_FILE_STORAGE.PROVIDER").unwrap(), "\"local\"");
    assert_eq!(api.get("API_FILE_STORAGE.LOCAL.BASE_DIR").unwrap(), "\"storage\"");
    assert!(api.get("API_FILE_STORAGE.S3.BUCKET").is_none());
}

#[test]
fn test_env_overrides_from_config_s3_storage() {
    let mut cfg = ScaffoldConfig::default();
    cfg.storage.provider = StorageProvider::S3;
    cfg.storage.local = None;
    cfg.storage.s3 = Some(S3Storage {
        endpoint: "https://s3.example.com".to_string(),
        region: "us-east-1".to_string(),
        bucket: "assets".to_string(),
        access_key: "AKIA123".to_string(),
        secret_key: "secret".to_string(),
    });

    let overrides = env_overrides_from_config(&cfg);
    let api = overrides.get("apps/api/.env.example").unwrap();

    assert_eq!(api.get("API_FILE_STORAGE.PROVIDER").unwrap(), "\"s3\"");
    assert_eq!(api.get("API_FILE_STORAGE.S3.BUCKET").unwrap(), "\"assets\"");
    assert_eq!(api.get("API_FILE_STORAGE.S3.REGION").unwrap(), "\"us-east-1\"");
    assert!(api.get("API_FILE_STORAGE.LOCAL.BASE_DIR").is_none());
}

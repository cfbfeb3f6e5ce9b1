use clap::Parser;
use kickstart::cli::{config_from_args, Args};
use kickstart::config::StorageProvider;
use std::ffi::OsString;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("kickstart")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_basic_args() {
    let args = make_args(&["demo", "--module", "github.com/acme/demo"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.name, "demo");
    assert_eq!(parsed.module, "github.com/acme/demo");
    assert!(parsed.dest.is_none());
    assert!(!parsed.no_web);
    assert!(!parsed.force);
    assert!(!parsed.verbose);
}

#[test]
fn test_all_flags() {
    let args = make_args(&[
        "demo",
        "./projects",
        "--module",
        "github.com/acme/demo",
        "--no-web",
        "--no-docker",
        "--no-git",
        "--force",
        "--verbose",
    ]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.dest.as_deref(), Some("./projects"));
    assert!(parsed.no_web);
    assert!(parsed.no_docker);
    assert!(parsed.no_git);
    assert!(parsed.force);
    assert!(parsed.verbose);
}

#[test]
fn test_short_flags() {
    let args = make_args(&["demo", "--module", "github.com/acme/demo", "-f", "-v"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert!(parsed.force);
    assert!(parsed.verbose);
}

#[test]
fn test_missing_name() {
    let args = make_args(&["--module", "github.com/acme/demo"]);
    assert!(Args::try_parse_from(args).is_err());
}

#[test]
fn test_config_from_args_maps_flags() {
    let args = make_args(&[
        "demo",
        "--module",
        "github.com/acme/demo",
        "--no-web",
        "--db-host",
        "db.internal",
        "--db-password",
        "hunter2",
    ]);
    let parsed = Args::try_parse_from(args).unwrap();
    let cfg = config_from_args(&parsed).unwrap();

    assert_eq!(cfg.project_name, "demo");
    assert_eq!(cfg.module_path, "github.com/acme/demo");
    assert!(!cfg.include_web);
    assert!(cfg.include_docker);
    assert!(cfg.init_git);
    assert!(!cfg.use_defaults);
    assert_eq!(cfg.db.host, "db.internal");
    assert_eq!(cfg.db.password, "hunter2");
    assert_eq!(cfg.db.port, "5432");
    assert!(cfg.destination.ends_with("demo"));
}

#[test]
fn test_config_from_args_rejects_invalid_module() {
    let args = make_args(&["demo", "--module", "not-a-module"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert!(config_from_args(&parsed).is_err());
}

#[test]
fn test_config_from_args_requires_complete_s3() {
    let args = make_args(&[
        "demo",
        "--module",
        "github.com/acme/demo",
        "--storage",
        "s3",
        "--s3-bucket",
        "assets",
    ]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert!(config_from_args(&parsed).is_err());
}

#[test]
fn test_config_from_args_accepts_complete_s3() {
    let args = make_args(&[
        "demo",
        "--module",
        "github.com/acme/demo",
        "--storage",
        "s3",
        "--s3-endpoint",
        "https://s3.example.com",
        "--s3-region",
        "us-east-1",
        "--s3-bucket",
        "assets",
        "--s3-access-key",
        "AKIA123",
        "--s3-secret-key",
        "secret",
    ]);
    let parsed = Args::try_parse_from(args).unwrap();
    let cfg = config_from_args(&parsed).unwrap();

    assert_eq!(cfg.storage.provider, StorageProvider::S3);
    let s3 = cfg.storage.s3.unwrap();
    assert_eq!(s3.bucket, "assets");
    assert!(cfg.storage.local.is_none());
}

#[test]
fn test_config_from_args_rejects_unknown_storage() {
    let args = make_args(&["demo", "--module", "github.com/acme/demo", "--storage", "ftp"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert!(config_from_args(&parsed).is_err());
}

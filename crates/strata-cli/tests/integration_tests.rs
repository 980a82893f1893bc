//! Integration tests for the strata binary.

use std::fs;
use std::path::Path;

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

/// A `strata` command isolated from the user's config and environment.
fn strata(cwd: &Path) -> assert_cmd::Command {
    let mut cmd = cargo::cargo_bin_cmd!("strata");
    cmd.current_dir(cwd)
        .env("HOME", cwd)
        .env("XDG_CONFIG_HOME", cwd.join(".config"))
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

fn project() -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("settings.gradle.kts"), "rootProject.name = \"app\"\n").unwrap();
    tmp
}

fn generate_catalog(root: &Path) {
    strata(root)
        .args(["feature", "catalog", "--all", "--org", "acme"])
        .assert()
        .success();
}

#[test]
fn test_help_flag() {
    let tmp = TempDir::new().unwrap();
    strata(tmp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("feature"))
        .stdout(predicate::str::contains("usecase"));
}

#[test]
fn test_version_flag() {
    let tmp = TempDir::new().unwrap();
    strata(tmp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_feature_command_help() {
    let tmp = TempDir::new().unwrap();
    strata(tmp.path())
        .args(["feature", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--root-folder"))
        .stdout(predicate::str::contains("--remote-datasource"))
        .stdout(predicate::str::contains("--build-logic"));
}

#[test]
fn test_feature_creates_modules_and_manifest() {
    let tmp = project();
    strata(tmp.path())
        .args(["feature", "catalog", "--all", "--org", "acme"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Created modules: domain, data, di, presentation, dataSource under feature 'catalog'",
        ));

    let feature = tmp.path().join("features/catalog");
    for kind in ["domain", "data", "di", "presentation", "dataSource"] {
        assert!(feature.join(kind).join("build.gradle.kts").is_file(), "{kind}");
    }
    let manifest = fs::read_to_string(tmp.path().join("settings.gradle.kts")).unwrap();
    assert!(manifest.starts_with("rootProject.name = \"app\"\n"));
    assert!(manifest.contains("include(\":features:catalog:data\")"));
}

#[test]
fn test_feature_json_report() {
    let tmp = project();
    let out = strata(tmp.path())
        .args(["--output-format", "json", "feature", "orders", "--org", "acme"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let report: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(report["created"], serde_json::json!(["domain", "data"]));
    assert_eq!(report["manifest_updated"], serde_json::json!(true));
    assert!(report["summary"].as_str().unwrap().contains("'orders'"));
}

#[test]
fn test_second_run_reports_nothing_created() {
    let tmp = project();
    generate_catalog(tmp.path());
    let manifest = fs::read_to_string(tmp.path().join("settings.gradle.kts")).unwrap();

    strata(tmp.path())
        .args(["feature", "catalog", "--all", "--org", "acme"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No modules were created because all exist for feature 'catalog'",
        ));
    assert_eq!(
        fs::read_to_string(tmp.path().join("settings.gradle.kts")).unwrap(),
        manifest
    );
}

#[test]
fn test_project_flag_targets_other_directory() {
    let tmp = project();
    let elsewhere = TempDir::new().unwrap();
    strata(elsewhere.path())
        .args(["feature", "catalog", "--project"])
        .arg(tmp.path())
        .assert()
        .success();
    assert!(tmp.path().join("features/catalog/domain").is_dir());
    assert!(!elsewhere.path().join("features").exists());
}

#[test]
fn test_artifact_generators_on_generated_feature() {
    let tmp = project();
    generate_catalog(tmp.path());

    strata(tmp.path())
        .args(["repository", "Items", "--module", "features/catalog/data", "--di", "hilt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Repository 'Items' generated"));

    strata(tmp.path())
        .args([
            "usecase",
            "GetItems",
            "--module",
            "features/catalog/domain",
            "--repository",
            "Items",
        ])
        .assert()
        .success();

    strata(tmp.path())
        .args([
            "screen",
            "ItemList",
            "--module",
            "features/catalog/presentation",
            "--navigation",
            "--use-case",
            "GetItems",
        ])
        .assert()
        .success();

    let src = "src/main/kotlin/com/acme/features/catalog";
    let feature = tmp.path().join("features/catalog");
    assert!(feature.join("domain").join(src).join("domain/repository/Items.kt").is_file());
    assert!(feature.join("domain").join(src).join("domain/usecase/GetItems.kt").is_file());
    assert!(feature.join("presentation").join(src).join("presentation/itemList/ItemListScreen.kt").is_file());
}

#[test]
fn test_config_file_sets_defaults() {
    let tmp = project();
    let cfg = tmp.path().join("custom.toml");
    fs::write(&cfg, "[defaults]\norg = \"shop\"\nroot_folder = \"modules\"\n").unwrap();

    strata(tmp.path())
        .args(["--config", "custom.toml", "feature", "cart"])
        .assert()
        .success();

    assert!(
        tmp.path()
            .join("modules/cart/domain/src/main/kotlin/com/shop/modules/cart/domain")
            .is_dir()
    );
}

#[test]
fn test_templates_command() {
    let tmp = TempDir::new().unwrap();
    strata(tmp.path())
        .args(["templates", "--format", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("usecaseGenerator/UseCase.kt"))
        .stdout(predicate::str::contains("presentationScreen/Screen.kt"));
}

#[test]
fn test_init_local_then_config_get() {
    let tmp = TempDir::new().unwrap();
    strata(tmp.path())
        .args(["init", "--local"])
        .assert()
        .success();
    assert!(tmp.path().join(".strata.toml").is_file());

    strata(tmp.path())
        .args(["config", "get", "defaults.org"])
        .assert()
        .success()
        .stdout(predicate::str::diff("example\n"));

    strata(tmp.path())
        .env("STRATA_DEFAULTS__ORG", "acme")
        .args(["config", "get", "defaults.org"])
        .assert()
        .success()
        .stdout(predicate::str::diff("acme\n"));
}

#[test]
fn test_quiet_flag() {
    let tmp = project();
    strata(tmp.path())
        .args(["--quiet", "feature", "catalog"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    assert!(tmp.path().join("features/catalog/data").is_dir());
}

#[test]
fn test_shell_completions() {
    let tmp = TempDir::new().unwrap();
    strata(tmp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("strata"));
}

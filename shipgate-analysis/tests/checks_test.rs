//! Per-check coverage over synthetic project trees.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use shipgate_analysis::checks::{CheckId, CheckStatus};
use shipgate_analysis::gate::{GateReport, GateRunner};
use shipgate_analysis::scanner::ProjectTree;
use shipgate_analysis::tools::ToolAdapter;
use shipgate_core::config::GateConfig;

// ---- Helpers ----

fn project(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().expect("create temp dir");
    for (path, content) in files {
        let full = dir.path().join(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).expect("create parent dirs");
        }
        fs::write(full, content).expect("write file");
    }
    dir
}

fn run(root: &Path) -> GateReport {
    let config = GateConfig::load(root).expect("load config");
    let tree = ProjectTree::scan(root, &config).expect("scan");
    GateRunner::new().run(&tree, &ToolAdapter::with_path(""))
}

fn statuses_of(report: &GateReport, id: CheckId) -> Vec<CheckStatus> {
    report
        .results
        .iter()
        .filter(|r| r.check_id == id)
        .map(|r| r.status)
        .collect()
}

fn single_status(report: &GateReport, id: CheckId) -> CheckStatus {
    let statuses = statuses_of(report, id);
    assert_eq!(statuses.len(), 1, "{id} should emit exactly one result");
    statuses[0]
}

// ---- Dockerfile checks ----

#[test]
fn missing_dockerfile_fails_presence_and_mutes_content_rules() {
    let dir = project(&[("k8s/app.yaml", "kind: Service\n")]);
    let report = run(dir.path());

    assert_eq!(
        single_status(&report, CheckId::DockerfilePresence),
        CheckStatus::Fail
    );
    for id in [
        CheckId::DockerfileRootUser,
        CheckId::DockerfileTagPinning,
        CheckId::DockerfileSecretLiterals,
        CheckId::DockerfileLint,
        CheckId::DockerfileMinimalBase,
    ] {
        assert!(statuses_of(&report, id).is_empty(), "{id}");
    }
}

#[test]
fn root_user_directive_warns() {
    let dir = project(&[("Dockerfile", "FROM nginx:1.25\nUSER root\n")]);
    let report = run(dir.path());

    assert_eq!(
        single_status(&report, CheckId::DockerfileRootUser),
        CheckStatus::Warn
    );
}

#[test]
fn latest_tag_warns_on_pinning() {
    let dir = project(&[("Dockerfile", "FROM nginx:latest\n")]);
    let report = run(dir.path());

    assert_eq!(
        single_status(&report, CheckId::DockerfileTagPinning),
        CheckStatus::Warn
    );
}

#[test]
fn untagged_base_warns_on_pinning() {
    let dir = project(&[("Dockerfile", "FROM nginx\n")]);
    let report = run(dir.path());

    assert_eq!(
        single_status(&report, CheckId::DockerfileTagPinning),
        CheckStatus::Warn
    );
}

#[test]
fn multi_stage_build_is_pinned_when_every_stage_is() {
    let dir = project(&[(
        "Dockerfile",
        "FROM composer:2.6 AS deps\nFROM php:8.1-alpine\n",
    )]);
    let report = run(dir.path());

    assert_eq!(
        single_status(&report, CheckId::DockerfileTagPinning),
        CheckStatus::Pass
    );
    assert_eq!(
        single_status(&report, CheckId::DockerfileMinimalBase),
        CheckStatus::Pass
    );
}

// ---- Manifest checks ----

#[test]
fn hardcoded_manifest_password_fails() {
    let dir = project(&[(
        "k8s/config.yaml",
        "kind: ConfigMap\ndata:\n  password: hunter2\n",
    )]);
    let report = run(dir.path());

    assert_eq!(
        single_status(&report, CheckId::ManifestPasswords),
        CheckStatus::Fail
    );
}

#[test]
fn key_reference_password_does_not_fail() {
    let dir = project(&[(
        "k8s/deployment.yaml",
        "kind: Deployment\nspec:\n  env:\n    - name: DB_PASS\n      valueFrom:\n        secretKeyRef:\n          name: app-secrets\n          key: password\n",
    )]);
    let report = run(dir.path());

    assert_eq!(
        single_status(&report, CheckId::ManifestPasswords),
        CheckStatus::Pass
    );
    assert_eq!(
        single_status(&report, CheckId::ManifestSecretReferences),
        CheckStatus::Pass
    );
}

#[test]
fn workloads_without_limits_warn_with_count() {
    let dir = project(&[
        ("k8s/a.yaml", "kind: Deployment\nspec: {}\n"),
        ("k8s/b.yaml", "kind: StatefulSet\nspec: {}\n"),
        (
            "k8s/c.yaml",
            "kind: Deployment\nspec:\n  resources:\n    limits:\n      memory: 128Mi\n",
        ),
    ]);
    let report = run(dir.path());

    let result = report
        .results
        .iter()
        .find(|r| r.check_id == CheckId::ManifestResourceLimits)
        .expect("limits result");
    assert_eq!(result.status, CheckStatus::Warn);
    assert!(result.message.contains('2'), "{}", result.message);
}

#[test]
fn workloads_without_security_context_warn() {
    let dir = project(&[("k8s/a.yaml", "kind: Deployment\nspec: {}\n")]);
    let report = run(dir.path());

    assert_eq!(
        single_status(&report, CheckId::ManifestSecurityContext),
        CheckStatus::Warn
    );
}

#[test]
fn non_workload_manifests_pass_limits_vacuously() {
    let dir = project(&[("k8s/svc.yaml", "kind: Service\nspec: {}\n")]);
    let report = run(dir.path());

    assert_eq!(
        single_status(&report, CheckId::ManifestResourceLimits),
        CheckStatus::Pass
    );
}

#[test]
fn pinned_datastore_image_passes() {
    let dir = project(&[(
        "k8s/db.yaml",
        "kind: StatefulSet\nspec:\n  containers:\n    - image: mysql:8.0\n",
    )]);
    let report = run(dir.path());

    assert_eq!(
        single_status(&report, CheckId::ManifestDbImagePinning),
        CheckStatus::Pass
    );
}

#[test]
fn unpinned_datastore_image_warns() {
    for image in ["mysql", "mysql:latest", "redis:alpine"] {
        let content = format!("kind: StatefulSet\nspec:\n  containers:\n    - image: {image}\n");
        let dir = project(&[("k8s/db.yaml", content.as_str())]);
        let report = run(dir.path());

        assert_eq!(
            single_status(&report, CheckId::ManifestDbImagePinning),
            CheckStatus::Warn,
            "{image}"
        );
    }
}

#[test]
fn no_datastore_images_passes() {
    let dir = project(&[(
        "k8s/app.yaml",
        "kind: Deployment\nspec:\n  containers:\n    - image: app:1.0\n",
    )]);
    let report = run(dir.path());

    assert_eq!(
        single_status(&report, CheckId::ManifestDbImagePinning),
        CheckStatus::Pass
    );
}

#[test]
fn secret_file_naming_convention_is_detected() {
    let with = project(&[("k8s/app-secrets.yaml", "kind: Secret\n")]);
    assert_eq!(
        single_status(&run(with.path()), CheckId::ManifestSecretExternalization),
        CheckStatus::Pass
    );

    let without = project(&[("k8s/app.yaml", "kind: Service\n")]);
    assert_eq!(
        single_status(
            &run(without.path()),
            CheckId::ManifestSecretExternalization
        ),
        CheckStatus::Warn
    );
}

#[test]
fn config_map_references_are_detected() {
    let dir = project(&[(
        "k8s/deployment.yaml",
        "kind: Deployment\nspec:\n  env:\n    - name: DB_HOST\n      valueFrom:\n        configMapKeyRef:\n          name: app-config\n          key: db-host\n",
    )]);
    let report = run(dir.path());

    assert_eq!(
        single_status(&report, CheckId::ManifestConfigReferences),
        CheckStatus::Pass
    );
}

// ---- Secret pattern scan ----

#[test]
fn credential_assignment_in_script_warns_per_pattern() {
    let dir = project(&[
        ("Dockerfile", "FROM php:8.1-alpine\n"),
        (
            "scripts/deploy.sh",
            "#!/bin/sh\nexport DB_PASSWORD=hunter2\nexport API_KEY=abc123\n",
        ),
    ]);
    let report = run(dir.path());

    let warns = statuses_of(&report, CheckId::SecretPatterns);
    assert!(warns.len() >= 2, "one warning per matched pattern class");
    assert!(warns.iter().all(|s| *s == CheckStatus::Warn));
}

#[test]
fn clean_sources_pass_the_pattern_scan() {
    let dir = project(&[
        ("Dockerfile", "FROM php:8.1-alpine\n"),
        ("scripts/deploy.sh", "#!/bin/sh\nkubectl apply -f k8s/\n"),
    ]);
    let report = run(dir.path());

    assert_eq!(
        statuses_of(&report, CheckId::SecretPatterns),
        vec![CheckStatus::Pass]
    );
}

#[test]
fn long_base64_like_runs_warn() {
    let content = format!("#!/bin/sh\nCERT={}\n", "QUJD".repeat(12));
    let dir = project(&[("scripts/cert.sh", content.as_str())]);
    let report = run(dir.path());

    let warns = statuses_of(&report, CheckId::SecretPatterns);
    assert!(warns.contains(&CheckStatus::Warn));
}

// ---- Syntax checks ----

#[test]
fn invalid_yaml_fails_per_file() {
    let dir = project(&[
        ("k8s/good.yaml", "kind: Service\n"),
        ("k8s/bad.yaml", "kind: Service\n spec: [unclosed\n"),
    ]);
    let report = run(dir.path());

    let statuses = statuses_of(&report, CheckId::YamlSyntax);
    assert_eq!(statuses, vec![CheckStatus::Fail]);
    let result = report
        .results
        .iter()
        .find(|r| r.check_id == CheckId::YamlSyntax)
        .unwrap();
    assert!(result.message.contains("bad.yaml"), "{}", result.message);
}

#[test]
fn valid_yaml_passes_with_count() {
    let dir = project(&[("k8s/good.yaml", "kind: Service\n")]);
    let report = run(dir.path());

    assert_eq!(
        statuses_of(&report, CheckId::YamlSyntax),
        vec![CheckStatus::Pass]
    );
}

// ---- Scanner behavior visible through checks ----

#[test]
fn vendor_and_hidden_dirs_are_not_scanned() {
    let dir = project(&[
        ("Dockerfile", "FROM php:8.1-alpine\n"),
        ("vendor/lib/install.sh", "export SECRET=topsecret\n"),
        (".git/hooks/pre-push.sh", "export TOKEN=abc\n"),
    ]);
    let report = run(dir.path());

    assert_eq!(
        statuses_of(&report, CheckId::SecretPatterns),
        vec![CheckStatus::Pass]
    );
}

#[test]
fn configured_manifests_dir_overrides_default() {
    let dir = project(&[
        ("shipgate.toml", "manifests_dir = \"deploy\"\n"),
        ("deploy/app.yaml", "kind: Service\n"),
    ]);
    let report = run(dir.path());

    assert_eq!(
        single_status(&report, CheckId::ManifestsPresence),
        CheckStatus::Pass
    );
}

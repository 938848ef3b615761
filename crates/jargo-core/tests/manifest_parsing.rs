use jargo_core::manifest::{Manifest, RepositoryEntry};
use std::path::PathBuf;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("tests/fixtures")
}

#[test]
fn test_parse_simple_app_fixture() {
    let path = fixtures_dir().join("simple-app.toml");
    let manifest = Manifest::from_path(&path).unwrap();
    assert_eq!(manifest.package.name, "MyApp");
    assert_eq!(manifest.package.version, "1.2.3-SNAPSHOT");
    assert_eq!(manifest.package.group.as_deref(), Some("com.example"));
    assert_eq!(
        manifest.package.description.as_deref(),
        Some("An example application")
    );
    assert_eq!(manifest.package.license.as_deref(), Some("Apache-2.0"));
    assert_eq!(manifest.dependencies.len(), 1);
    assert_eq!(manifest.dev_dependencies.len(), 1);
    assert_eq!(manifest.repositories.len(), 3);
    assert!(matches!(
        manifest.repositories["central"],
        RepositoryEntry::Url(_)
    ));
    assert!(matches!(
        manifest.repositories["local"],
        RepositoryEntry::Url(_)
    ));

    let publish = manifest.publish.as_ref().unwrap();
    assert_eq!(publish.repository.as_deref(), Some("internal"));
    assert_eq!(publish.artifacts.len(), 1);

    let test = manifest.test.as_ref().unwrap();
    assert_eq!(test.main_class.as_deref(), Some("com.example.MyAppTest"));
    assert_eq!(test.java_options, vec!["-Xmx512m"]);
    assert_eq!(test.classpath.len(), 3);
    assert_eq!(test.options, vec!["--details=verbose"]);
}

#[test]
fn test_parse_publish_full_fixture() {
    let path = fixtures_dir().join("publish-full.toml");
    let manifest = Manifest::from_path(&path).unwrap();
    let publish = manifest.publish.as_ref().unwrap();
    assert_eq!(publish.name.as_deref(), Some("Released Thing"));
    assert_eq!(publish.licenses.len(), 1);
    assert_eq!(publish.licenses[0].name, "Apache License, Version 2.0");
    assert_eq!(publish.developers.len(), 1);
    assert_eq!(publish.developers[0].id, "jdoe");
    let scm = publish.scm.as_ref().unwrap();
    assert_eq!(
        scm.developer_connection.as_deref(),
        Some("scm:git:git@github.com:acme/released-thing.git")
    );
    assert_eq!(publish.artifacts.len(), 3);
}

#[test]
fn test_parse_invalid_missing_name_fixture() {
    let path = fixtures_dir().join("invalid-missing-name.toml");
    let result = Manifest::from_path(&path);
    assert!(result.is_err(), "Manifest without name should fail to parse");
}

#[test]
fn test_parse_nonexistent_fixture() {
    let path = fixtures_dir().join("does-not-exist.toml");
    let result = Manifest::from_path(&path);
    assert!(result.is_err());
}

#[test]
fn test_env_interpolation_from_jargo_env() {
    let tmp = tempfile::TempDir::new().unwrap();
    std::fs::write(tmp.path().join(".jargo.env"), "REPO_PASSWORD=s3cret\n").unwrap();
    std::fs::write(
        tmp.path().join("Jargo.toml"),
        r#"
[package]
name = "env-app"
version = "0.1.0"

[repositories]
internal = { url = "https://repo.example.com", username = "ci", password = "${env:REPO_PASSWORD}" }
"#,
    )
    .unwrap();

    let manifest = Manifest::from_path(&tmp.path().join("Jargo.toml")).unwrap();
    match &manifest.repositories["internal"] {
        RepositoryEntry::Detailed { password, .. } => {
            assert_eq!(password.as_deref(), Some("s3cret"));
        }
        other => panic!("expected detailed entry, got {other:?}"),
    }
}

#[test]
fn test_parse_toml_dependency_forms() {
    let manifest = Manifest::parse_toml(
        r#"
[package]
name = "forms"
version = "0.1.0"

[dependencies]
short = "com.example:short:1.0"
long = { group = "com.example", artifact = "long", version = "2.0", optional = true }
"#,
    )
    .unwrap();
    assert_eq!(manifest.dependencies.len(), 2);
    let long = manifest.dependencies["long"].to_detailed().unwrap();
    assert!(long.optional);
    let short = manifest.dependencies["short"].to_detailed().unwrap();
    assert_eq!(short.version, "1.0");
}

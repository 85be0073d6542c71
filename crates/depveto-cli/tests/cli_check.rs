use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn depveto_cmd() -> Command {
    Command::cargo_bin("depveto").unwrap()
}

const POM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0">
    <groupId>org.example</groupId>
    <artifactId>my-app</artifactId>
    <version>1.0.0</version>
    <dependencies>
        <dependency>
            <groupId>org.apache.logging.log4j</groupId>
            <artifactId>log4j-core</artifactId>
            <version>2.14.1</version>
        </dependency>
        <dependency>
            <groupId>com.google.guava</groupId>
            <artifactId>guava</artifactId>
            <version>32.0-jre</version>
        </dependency>
    </dependencies>
</project>
"#;

const RULESET: &str = r#"
[[rules]]
key = "no-vulnerable-log4j"
dependency = "org.apache.logging.log4j:log4j-core"
version = "2.0-2.16"
"#;

#[test]
fn check_reports_findings_and_fails() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("pom.xml"), POM).unwrap();
    fs::write(tmp.path().join("depveto.toml"), RULESET).unwrap();

    depveto_cmd()
        .current_dir(tmp.path())
        .args(["check", "--rules", "depveto.toml"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Forbidden dependencies (1):"))
        .stdout(predicate::str::contains(
            "line 7: org.apache.logging.log4j:log4j-core:2.14.1 [no-vulnerable-log4j]",
        ))
        .stdout(predicate::str::contains("guava").not())
        .stderr(predicate::str::contains("1 forbidden dependency found"));
}

#[test]
fn check_clean_pom_succeeds() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("pom.xml"), POM).unwrap();
    fs::write(
        tmp.path().join("depveto.toml"),
        "[[rules]]\nkey = \"no-junit4\"\ndependency = \"junit:junit\"\nversion = \"4.*\"\n",
    )
    .unwrap();

    depveto_cmd()
        .current_dir(tmp.path())
        .args(["check", "--rules", "depveto.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No forbidden dependencies."));
}

#[test]
fn check_with_adhoc_deny_rule() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("pom.xml"), POM).unwrap();

    depveto_cmd()
        .current_dir(tmp.path())
        .args(["check", "--deny", "com.google.guava:*", "--versions", "32.0-*"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("com.google.guava:guava:32.0-jre [deny]"));
}

#[test]
fn check_json_output() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("pom.xml"), POM).unwrap();

    depveto_cmd()
        .current_dir(tmp.path())
        .args(["check", "--deny", "*:log4j-core", "--format", "json"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"findings\""))
        .stdout(predicate::str::contains("\"artifact_id\": \"log4j-core\""))
        .stdout(predicate::str::contains("\"line\": 7"));
}

#[test]
fn check_without_descriptor_fails() {
    let tmp = TempDir::new().unwrap();

    depveto_cmd()
        .current_dir(tmp.path())
        .args(["check", "--deny", "*:*"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No descriptor found"));
}

#[test]
fn check_with_broken_rule_names_it() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("pom.xml"), POM).unwrap();
    fs::write(
        tmp.path().join("depveto.toml"),
        "[[rules]]\nkey = \"bad\"\ndependency = \"missing-separator\"\n",
    )
    .unwrap();

    depveto_cmd()
        .current_dir(tmp.path())
        .args(["check", "--rules", "depveto.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("[bad]"));
}

#[test]
fn rules_and_deny_conflict() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("pom.xml"), POM).unwrap();

    depveto_cmd()
        .current_dir(tmp.path())
        .args(["check", "--rules", "x.toml", "--deny", "a:b"])
        .assert()
        .failure();
}

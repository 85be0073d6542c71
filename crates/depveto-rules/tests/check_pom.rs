use depveto_rules::collector::scan_pom;
use depveto_rules::disallowed::DisallowedDependencies;
use depveto_rules::finding::FindingReport;
use depveto_rules::ruleset::RuleSet;

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
            <groupId>junit</groupId>
            <artifactId>junit</artifactId>
            <version>4.12</version>
        </dependency>
        <dependency>
            <groupId>com.google.guava</groupId>
            <artifactId>guava</artifactId>
            <version>31.0-jre</version>
        </dependency>
    </dependencies>
</project>
"#;

const RULESET: &str = r#"
[[rules]]
key = "no-vulnerable-log4j"
dependency = "org.apache.logging.log4j:log4j-core"
version = "2.0-2.16"

[[rules]]
key = "no-junit4"
dependency = "junit:junit"
version = "4.*"
message = "Migrate to JUnit 5."
"#;

#[test]
fn end_to_end_findings() {
    let dependencies = scan_pom(POM).unwrap();
    let ruleset = RuleSet::from_str(RULESET).unwrap();

    let mut report = FindingReport::new();
    for config in ruleset.rules {
        let rule = DisallowedDependencies::new(config);
        report.extend(rule.check(&dependencies).unwrap());
    }

    assert_eq!(report.len(), 2);
    let rendered = report.to_string();
    assert!(rendered.contains("line 7: org.apache.logging.log4j:log4j-core:2.14.1"));
    assert!(rendered.contains("Remove this forbidden dependency."));
    assert!(rendered.contains("line 12: junit:junit:4.12 [no-junit4] Migrate to JUnit 5."));
    assert!(!rendered.contains("guava"));
}

#[test]
fn ruleset_loads_from_file() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("depveto.toml");
    std::fs::write(&path, RULESET).unwrap();

    let ruleset = RuleSet::from_path(&path).unwrap();
    assert_eq!(ruleset.rules.len(), 2);

    let missing = RuleSet::from_path(&tmp.path().join("nope.toml"));
    assert!(missing.is_err());
}

#[test]
fn broken_rule_fails_without_touching_good_rules() {
    let dependencies = scan_pom(POM).unwrap();
    let ruleset = RuleSet::from_str(
        r#"
        [[rules]]
        key = "bad"
        dependency = "missing-separator"
        "#,
    )
    .unwrap();

    let rule = DisallowedDependencies::new(ruleset.rules[0].clone());
    let err = rule.check(&dependencies).unwrap_err();
    assert!(err.to_string().contains("[bad]"));
}

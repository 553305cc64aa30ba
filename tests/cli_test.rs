//! Integration tests for the shipcheck binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn setup_project(files: &[(&str, &str)]) -> TempDir {
    let temp = TempDir::new().unwrap();
    for (rel, content) in files {
        let path = temp.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }
    temp
}

const APP_PY: &str = r#"import os
from flask import Flask

app = Flask(__name__)
app.secret_key = os.getenv("FLASK_SECRET_KEY")

if __name__ == "__main__":
    app.run(debug=os.getenv("FLASK_ENV") == "development")
"#;

const DOCKERFILE: &str = r#"FROM python:3.12-slim
RUN apt-get update && apt-get install -y curl && apt-get clean
RUN useradd --create-home app
USER app
HEALTHCHECK CMD curl -f http://localhost:5000/ || exit 1
"#;

const NGINX_CONF: &str = r#"server {
    add_header X-Frame-Options "SAMEORIGIN";
    add_header X-Content-Type-Options "nosniff";
    add_header X-XSS-Protection "1; mode=block";
}
"#;

fn ideal_project() -> TempDir {
    setup_project(&[
        ("app/app.py", APP_PY),
        (".env", "FLASK_SECRET_KEY=9f8e7d6c5b4a\nMYSQL_USER=app\n"),
        (".gitignore", ".env\n*.pem\n*.key\n*.sql\nlogs/\n"),
        ("requirements.txt", "flask==3.0.0\npymysql==1.1.0\n"),
        ("Dockerfile", DOCKERFILE),
        ("nginx.conf", NGINX_CONF),
        (
            "docker-compose.yml",
            "services:\n  db:\n    environment:\n      MYSQL_ROOT_PASSWORD: ${MYSQL_ROOT_PASSWORD}\n",
        ),
        ("backup.sh", "#!/bin/sh\nmysqldump app > backup.sql\n"),
    ])
}

fn shipcheck(project: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("shipcheck"));
    cmd.arg("--project").arg(project.path()).arg("--no-color");
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("shipcheck"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("security posture checks"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("shipcheck"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn empty_project_fails_with_findings_from_every_rule() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(&[]);
    shipcheck(&temp)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("shipcheck - Security Check"))
        .stdout(predicate::str::contains("ISSUES (1):"))
        .stdout(predicate::str::contains(".gitignore not found"))
        .stdout(predicate::str::contains("WARNINGS (9):"))
        .stdout(predicate::str::contains("RESULT: FAILED"));
    Ok(())
}

#[test]
fn ideal_project_passes() -> Result<(), Box<dyn std::error::Error>> {
    let temp = ideal_project();
    shipcheck(&temp)
        .arg("scan")
        .assert()
        .success()
        .stdout(predicate::str::contains("PASSED ("))
        .stdout(predicate::str::contains("WARNINGS").not())
        .stdout(predicate::str::contains("ISSUES").not())
        .stdout(predicate::str::contains("RESULT: PASSED - ready to deploy"));
    Ok(())
}

#[test]
fn warnings_only_exit_two() -> Result<(), Box<dyn std::error::Error>> {
    let temp = ideal_project();
    fs::remove_file(temp.path().join("backup.sh"))?;
    fs::write(temp.path().join("requirements.txt"), "flask\n")?;

    shipcheck(&temp)
        .assert()
        .code(2)
        .stdout(predicate::str::contains("WARNINGS (2):"))
        .stdout(predicate::str::contains("Unpinned dependencies (use ==): flask"))
        .stdout(predicate::str::contains("No automated backup script found"))
        .stdout(predicate::str::contains("RESULT: WARNINGS"));
    Ok(())
}

#[test]
fn hardcoded_password_is_an_issue_with_location() -> Result<(), Box<dyn std::error::Error>> {
    let temp = ideal_project();
    fs::write(
        temp.path().join("config.py"),
        "DEBUG = False\npassword = \"SuperSecret123\"\n",
    )?;

    shipcheck(&temp)
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "config.py:2 - Possible hardcoded password",
        ));
    Ok(())
}

#[test]
fn sql_injection_reported_per_line() -> Result<(), Box<dyn std::error::Error>> {
    let temp = ideal_project();
    fs::write(
        temp.path().join("app/users.py"),
        "def find(cursor, name):\n    cursor.execute(f\"SELECT * FROM users WHERE name='{name}'\")\n",
    )?;

    shipcheck(&temp)
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "users.py:2 - Possible SQL injection via f-string",
        ));
    Ok(())
}

#[test]
fn json_format_reports_verdict() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(&[]);
    let output = shipcheck(&temp).args(["scan", "--format", "json"]).output()?;

    assert_eq!(output.status.code(), Some(1));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["verdict"], "fail");
    assert_eq!(value["exit_code"], 1);
    assert_eq!(value["summary"]["issues"], 1);
    assert_eq!(value["summary"]["warnings"], 9);
    Ok(())
}

#[test]
fn scan_is_idempotent() -> Result<(), Box<dyn std::error::Error>> {
    let temp = ideal_project();
    fs::write(temp.path().join(".env"), "FLASK_SECRET_KEY=your_key_here\n")?;

    let first = shipcheck(&temp).output()?;
    let second = shipcheck(&temp).output()?;

    assert_eq!(first.status.code(), second.status.code());
    assert_eq!(first.stdout, second.stdout);
    Ok(())
}

#[test]
fn config_file_redirects_artifacts() -> Result<(), Box<dyn std::error::Error>> {
    let temp = ideal_project();
    fs::rename(temp.path().join("Dockerfile"), temp.path().join("Containerfile"))?;
    fs::write(temp.path().join(".shipcheck.yml"), "dockerfile: Containerfile\n")?;

    shipcheck(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("Dockerfile not found").not());
    Ok(())
}

#[test]
fn invalid_config_is_tool_error() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(&[(".shipcheck.yml", "app_directory: src\n")]);

    shipcheck(&temp)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Failed to parse config"));
    Ok(())
}

#[test]
fn missing_explicit_config_is_tool_error() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(&[]);

    shipcheck(&temp)
        .args(["--config", "missing.yml"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Configuration not found"));
    Ok(())
}

#[test]
fn rules_lists_every_rule() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(&[]);

    shipcheck(&temp)
        .arg("rules")
        .assert()
        .success()
        .stdout(predicate::str::contains("env-file"))
        .stdout(predicate::str::contains("hardcoded-credentials"))
        .stdout(predicate::str::contains("sql-injection"))
        .stdout(predicate::str::contains("backup"));
    Ok(())
}

#[test]
fn stage_production_requires_credentials() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(&[]);

    shipcheck(&temp)
        .args(["stage", "--stage", "production"])
        .env_remove("MYSQL_USER")
        .env_remove("MYSQL_PASSWORD")
        .env_remove("MYSQL_DB")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("MYSQL_USER"));
    Ok(())
}

#[test]
fn stage_defaults_to_flask_env() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(&[]);

    shipcheck(&temp)
        .arg("stage")
        .env("FLASK_ENV", "Staging")
        .env_remove("FLASK_SECRET_KEY")
        .assert()
        .success()
        .stdout(predicate::str::contains("Stage configuration valid: staging"))
        .stdout(predicate::str::contains("FLASK_SECRET_KEY is the built-in default"));
    Ok(())
}

#[test]
fn completions_generate_for_bash() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("shipcheck"));
    cmd.args(["completions", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("shipcheck"));
    Ok(())
}

#[test]
fn logs_stay_off_stdout() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(&[]);
    let output = shipcheck(&temp)
        .args(["--verbose", "scan", "--format", "json"])
        .output()?;

    serde_json::from_slice::<serde_json::Value>(&output.stdout)?;
    assert!(String::from_utf8_lossy(&output.stderr).contains("Checking"));
    Ok(())
}

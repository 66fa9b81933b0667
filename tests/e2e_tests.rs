//! End-to-end tests for the tfridge CLI
//!
//! These tests verify:
//! - Argument validation messages and exit codes
//! - Text report layout against a mock registry
//! - JSON output schema

use assert_cmd::Command;
use mockito::Server;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Command for the compiled binary with a clean environment
#[allow(deprecated)]
fn tfridge() -> Command {
    let mut cmd = Command::cargo_bin("tfridge").expect("binary should be built");
    cmd.env_remove("TFRIDGE_REGISTRY_URL").env_remove("RUST_LOG");
    cmd
}

/// Create a test directory with a single Terraform file
fn create_test_project() -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    fs::write(
        dir.path().join("main.tf"),
        r#"
provider "aws" {
  region = "us-east-1"
}

module "vpc" {
  source  = "terraform-aws-modules/vpc/aws"
  version = "5.0.0"
}
"#,
    )
    .unwrap();
    dir
}

fn mock_server() -> mockito::ServerGuard {
    let mut server = Server::new();
    server
        .mock("GET", "/v1/modules/terraform-aws-modules/vpc/aws")
        .with_status(200)
        .with_body(r#"{"versions": ["5.0.0", "5.1.0"]}"#)
        .create();
    server
        .mock("GET", "/v1/providers/hashicorp/aws")
        .with_status(200)
        .with_body(r#"{"versions": ["5.31.0", "5.30.0"]}"#)
        .create();
    server
}

mod cli_arguments {
    use super::*;

    #[test]
    fn test_missing_path_exits_with_error() {
        tfridge()
            .assert()
            .code(1)
            .stderr(predicate::str::contains(
                "Please specify a path to the directory you want to scan",
            ));
    }

    #[test]
    fn test_nonexistent_path_exits_with_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nowhere");

        tfridge()
            .arg(&missing)
            .assert()
            .code(1)
            .stderr(predicate::str::contains("does not exist."));
    }

    #[test]
    fn test_version_flag() {
        tfridge()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::starts_with("tfridge "));
    }

    #[test]
    fn test_quiet_and_verbose_conflict() {
        let dir = create_test_project();
        tfridge()
            .args(["-q", "--verbose"])
            .arg(dir.path())
            .assert()
            .failure();
    }

    #[cfg(unix)]
    #[test]
    fn test_walk_failure_exits_with_error_and_no_report() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.tf"), "provider \"aws\"\n").unwrap();
        std::os::unix::fs::symlink(dir.path().join("nowhere"), dir.path().join("b.tf")).unwrap();

        tfridge()
            .args(["--no-progress", "--registry-url", "http://127.0.0.1:1"])
            .arg(dir.path())
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Error: IO error at"))
            .stderr(predicate::str::contains("b.tf"))
            .stdout(predicate::str::contains("Provider source:").not());
    }

    #[test]
    fn test_invalid_registry_url() {
        let dir = create_test_project();
        tfridge()
            .args(["--registry-url", "registry.example"])
            .arg(dir.path())
            .assert()
            .code(1)
            .stderr(predicate::str::contains("invalid registry URL"));
    }
}

mod report_output {
    use super::*;

    #[test]
    fn test_text_report() {
        let dir = create_test_project();
        let server = mock_server();

        let expected = format!(
            "Scanning directory: {}\n\n\
             Module source: terraform-aws-modules/vpc/aws\n\
             Current version: 5.0.0\n\
             Latest version: 5.1.0 [minor]\n\n\
             Provider source: aws\n\
             Current version: \n\
             Latest version: 5.31.0\n\n",
            dir.path().display()
        );

        tfridge()
            .args(["--no-color", "--no-progress", "--registry-url"])
            .arg(server.url())
            .arg(dir.path())
            .assert()
            .success()
            .stdout(expected);
    }

    #[test]
    fn test_registry_url_from_env() {
        let dir = create_test_project();
        let server = mock_server();

        tfridge()
            .env("TFRIDGE_REGISTRY_URL", server.url())
            .args(["--no-progress"])
            .arg(dir.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("Latest version: 5.31.0"));
    }

    #[test]
    fn test_lookup_error_still_exits_zero() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("main.tf"), "provider \"gone\"\n").unwrap();
        let mut server = Server::new();
        server
            .mock("GET", "/v1/providers/hashicorp/gone")
            .with_status(404)
            .create();

        tfridge()
            .args(["--no-progress", "--registry-url"])
            .arg(server.url())
            .arg(dir.path())
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "Error fetching latest version for provider gone: ",
            ))
            .stdout(predicate::str::contains("status code: 404"));
    }

    #[test]
    fn test_quiet_hides_up_to_date_entries() {
        let dir = create_test_project();
        let server = mock_server();

        tfridge()
            .args(["-q", "--registry-url"])
            .arg(server.url())
            .arg(dir.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("Scanning directory").not())
            .stdout(predicate::str::contains("Module source: terraform-aws-modules/vpc/aws"))
            .stdout(predicate::str::contains("Provider source").not());
    }

    #[test]
    fn test_json_output() {
        let dir = create_test_project();
        let server = mock_server();

        let output = tfridge()
            .args(["--json", "--registry-url"])
            .arg(server.url())
            .arg(dir.path())
            .output()
            .unwrap();

        assert!(output.status.success());
        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(json["files_scanned"], 1);
        assert_eq!(json["modules"][0]["source"], "terraform-aws-modules/vpc/aws");
        assert_eq!(json["modules"][0]["latest"], "5.1.0");
        assert_eq!(json["modules"][0]["change"], "minor");
        assert_eq!(json["providers"][0]["source"], "aws");
        assert_eq!(json["providers"][0]["status"], "unknown");
    }

    #[test]
    fn test_empty_directory_prints_only_header() {
        let dir = TempDir::new().unwrap();

        tfridge()
            .args(["--no-progress", "--registry-url", "http://127.0.0.1:1"])
            .arg(dir.path())
            .assert()
            .success()
            .stdout(format!("Scanning directory: {}\n\n", dir.path().display()));
    }
}

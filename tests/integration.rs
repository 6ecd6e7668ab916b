use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn cmd() -> assert_cmd::Command {
    let mut c = cargo_bin_cmd!("cookies-exposed");
    c.arg("--ci");
    c
}

mod cookie_strings {
    use super::*;

    #[test]
    fn test_empty_page_passes() {
        cmd()
            .assert()
            .success()
            .code(0)
            .stdout(predicate::str::contains("No cookies found"))
            .stdout(predicate::str::contains("PASS"));
    }

    #[test]
    fn test_sensitive_cookie_on_insecure_page() {
        cmd()
            .args(["--url", "http://shop.example.com/", "--cookies", "auth_token=abc"])
            .assert()
            .success()
            .stdout(predicate::str::contains("shop.example.com"))
            .stdout(predicate::str::contains("insecure context"))
            .stdout(predicate::str::contains("[HIGH]"))
            .stdout(predicate::str::contains("Contains authentication/session data"));
    }

    #[test]
    fn test_values_with_equals_are_kept() {
        let output = cmd()
            .args(["--format", "json", "--cookies", "token=abc=def; id=1; id=2"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
        let cookies = json["cookies"].as_array().unwrap();
        assert_eq!(cookies.len(), 3);
        assert_eq!(cookies[0]["name"], "token");
        assert_eq!(cookies[0]["value"], "abc=def");
        assert_eq!(cookies[1]["value"], "1");
        assert_eq!(cookies[2]["value"], "2");
        assert!(cookies.iter().all(|c| c["httpOnly"] == false));
    }

    #[test]
    fn test_cookie_file() {
        cmd()
            .arg("--cookie-file")
            .arg(fixtures_path().join("cookies.txt"))
            .assert()
            .success()
            .stdout(predicate::str::contains("_ga"))
            .stdout(predicate::str::contains("theme"))
            .stdout(predicate::str::contains("2 cookie(s)"));
    }

    #[test]
    fn test_cookie_string_from_stdin() {
        cmd()
            .args(["--cookie-file", "-", "--format", "text"])
            .write_stdin("session=abcdefghijkl; lang=en\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("Total Cookies: 2"))
            .stdout(predicate::str::contains("Value: abcdefgh****"));
    }
}

mod records {
    use super::*;

    #[test]
    fn test_records_json_output() {
        let output = cmd()
            .arg("--records")
            .arg(fixtures_path().join("records.json"))
            .args(["--url", "https://example.com/", "--format", "json"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
        assert_eq!(json["origin"], "supplied");
        assert_eq!(json["cookies"][0]["assessment"]["score"], 10);
        assert_eq!(json["cookies"][0]["assessment"]["tier"], "critical");
        assert_eq!(
            json["cookies"][0]["assessment"]["reasons"]
                .as_array()
                .unwrap()
                .len(),
            5
        );
        assert_eq!(json["cookies"][1]["assessment"]["score"], 0);
        assert_eq!(json["cookies"][1]["assessment"]["tier"], "low");
        assert!(!json["summary"]["passed"].as_bool().unwrap());
    }

    #[test]
    fn test_records_text_report() {
        cmd()
            .arg("--records")
            .arg(fixtures_path().join("records.json"))
            .args(["--format", "text"])
            .assert()
            .success()
            .stdout(predicate::str::contains("COOKIE SECURITY ANALYSIS REPORT"))
            .stdout(predicate::str::contains("Expires: Jan 5, 2026, 03:04 PM"))
            .stdout(predicate::str::contains("Risk Level: CRITICAL"))
            .stdout(predicate::str::contains("- Standard cookie with basic security"));
    }

    #[test]
    fn test_records_browser_export() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("export.json");
        std::fs::write(
            &path,
            r#"[
                {"name": "  ", "value": "orphan"},
                {"name": " sid ", "secure": true, "httpOnly": true, "sameSite": "strict"},
                {"name": "ad", "secure": true, "httpOnly": true, "sameSite": "no_restriction"}
            ]"#,
        )
        .unwrap();

        let output = cmd()
            .arg("--records")
            .arg(&path)
            .args(["--url", "https://shop.test/", "--format", "json"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
        let cookies = json["cookies"].as_array().unwrap();
        assert_eq!(cookies.len(), 2);
        assert_eq!(cookies[0]["name"], "sid");
        assert_eq!(cookies[0]["domain"], "shop.test");
        assert_eq!(cookies[0]["sameSite"], "Strict");
        assert_eq!(cookies[1]["sameSite"], "None");
        assert_eq!(cookies[1]["assessment"]["score"], 2);
    }

    #[test]
    fn test_malformed_records_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "[{\"value\": \"no name\"}]").unwrap();

        cmd()
            .arg("--records")
            .arg(&path)
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("Failed to parse cookie records"));
    }
}

mod cli_options {
    use super::*;

    #[test]
    fn test_strict_mode_fails_on_high_risk() {
        cmd()
            .args(["--strict", "--cookies", "session_auth=1"])
            .assert()
            .failure()
            .code(1)
            .stdout(predicate::str::contains("FAIL"));
    }

    #[test]
    fn test_strict_mode_passes_low_risk() {
        cmd()
            .args(["--strict", "--cookies", "theme=dark"])
            .assert()
            .success();
    }

    #[test]
    fn test_config_file_changes_policy() {
        cmd()
            .arg("--config")
            .arg(fixtures_path().join("lenient.yaml"))
            .args(["--strict", "--cookies", "session_auth=1", "--format", "json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"score\": 2"));
    }

    #[test]
    fn test_missing_config_file() {
        cmd()
            .args(["--config", "/nonexistent/policy.yaml"])
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("Failed to read config file"));
    }

    #[test]
    fn test_invalid_url() {
        cmd()
            .args(["--url", "not a url"])
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("Invalid page URL"));
    }

    #[test]
    fn test_output_file() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("report.json");

        cmd()
            .args(["--cookies", "a=1", "--format", "json", "--output"])
            .arg(&out)
            .assert()
            .success()
            .stderr(predicate::str::contains("Output written to"));

        let written = fs::read_to_string(&out).unwrap();
        let json: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(json["summary"]["total"], 1);
    }

    #[test]
    fn test_verbose_shows_metadata() {
        cmd()
            .args(["-v", "--cookies", "a=1"])
            .assert()
            .success()
            .stdout(predicate::str::contains("sameSite: Lax"))
            .stdout(predicate::str::contains("expires: Session"));
    }

    #[test]
    fn test_conflicting_inputs_rejected() {
        cmd()
            .args(["--cookies", "a=1", "--cookie-file", "-"])
            .assert()
            .failure()
            .code(2);
    }
}

/// End-to-end tests for config file loading and CLI option merging.
///
/// These tests exercise the full flow from config file on disk through CLI
/// invocation, using `assert_cmd` and `tempfile` for isolated test
/// environments. None of them reach a real server: the base URLs point at
/// discard ports, so a connection failure after config handling proves the
/// config took effect.
use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use tempfile::TempDir;

fn write_config(dir: &std::path::Path, content: &str) -> std::path::PathBuf {
    let path = dir.join("errata-roundtrip.toml");
    fs::write(&path, content).unwrap();
    path
}

mod auto_discovery_tests {
    use super::*;

    #[test]
    fn test_discovered_config_supplies_base_url() {
        let dir = TempDir::new().unwrap();
        write_config(dir.path(), "base_url = \"http://127.0.0.1:9\"\n");

        let output = cargo_bin_cmd!("errata-roundtrip")
            .current_dir(dir.path())
            .output()
            .unwrap();

        // The URL came from the discovered file, so the run got past argument
        // validation and failed at the network layer instead.
        assert_eq!(output.status.code(), Some(3));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("127.0.0.1:9"));
    }

    #[test]
    fn test_cli_base_url_overrides_config() {
        let dir = TempDir::new().unwrap();
        write_config(dir.path(), "base_url = \"http://127.0.0.1:9\"\n");

        let output = cargo_bin_cmd!("errata-roundtrip")
            .current_dir(dir.path())
            .args(["--base-url", "http://127.0.0.1:7"])
            .output()
            .unwrap();

        assert_eq!(output.status.code(), Some(3));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("127.0.0.1:7"));
    }
}

mod validation_tests {
    use super::*;

    #[test]
    fn test_base_url_without_scheme_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(dir.path(), "base_url = \"pulp.example.com\"\n");

        let output = cargo_bin_cmd!("errata-roundtrip")
            .args(["-c", path.to_str().unwrap()])
            .output()
            .unwrap();

        assert_eq!(output.status.code(), Some(3));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("http://"));
    }

    #[test]
    fn test_username_without_password_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            dir.path(),
            "base_url = \"http://127.0.0.1:9\"\nusername = \"admin\"\n",
        );

        let output = cargo_bin_cmd!("errata-roundtrip")
            .args(["-c", path.to_str().unwrap()])
            .output()
            .unwrap();

        assert_eq!(output.status.code(), Some(3));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("together"));
    }

    #[test]
    fn test_malformed_config_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(dir.path(), "base_url = [[[broken\n");

        let output = cargo_bin_cmd!("errata-roundtrip")
            .args(["-c", path.to_str().unwrap()])
            .output()
            .unwrap();

        assert_eq!(output.status.code(), Some(3));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Failed to parse"));
    }

    #[test]
    fn test_unknown_config_field_warns_but_runs() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            dir.path(),
            "base_url = \"http://127.0.0.1:9\"\nmystery = true\n",
        );

        let output = cargo_bin_cmd!("errata-roundtrip")
            .args(["-c", path.to_str().unwrap()])
            .output()
            .unwrap();

        let stderr = String::from_utf8_lossy(&output.stderr);
        // The unknown field is reported but does not stop the run; failure
        // comes later, from the unreachable server.
        assert!(stderr.contains("Unknown config field 'mystery'"));
        assert_eq!(output.status.code(), Some(3));
    }
}

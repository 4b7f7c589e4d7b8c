//! Integration tests for layered configuration.
//!
//! Tests that modify environment variables are marked with `#[serial]`,
//! since the environment is process-global.

use serial_test::serial;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use origin::config::{Config, ConfigBuilder};
use origin::OutputFormat;

const ORIGIN_VARS: [&str; 6] = [
    "ORIGIN_SHELL",
    "ORIGIN_TABLES",
    "ORIGIN_PATH",
    "ORIGIN_INTROSPECT",
    "ORIGIN_FORMAT",
    "ORIGIN_CONFIG",
];

/// RAII guard for setting and restoring environment variables.
struct EnvGuard {
    saved: Vec<(String, Option<String>)>,
}

impl EnvGuard {
    /// Clear every `ORIGIN_*` variable and pin `SHELL` and `PATH`.
    fn isolated() -> Self {
        let mut guard = Self { saved: Vec::new() };
        for key in ORIGIN_VARS {
            guard.remove(key);
        }
        guard.set("SHELL", "/bin/bash");
        guard.set("PATH", "/usr/bin:/bin");
        guard
    }

    fn save(&mut self, key: &str) {
        self.saved.push((key.to_string(), env::var(key).ok()));
    }

    fn set(&mut self, key: &str, value: &str) {
        self.save(key);
        env::set_var(key, value);
    }

    fn remove(&mut self, key: &str) {
        self.save(key);
        env::remove_var(key);
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in self.saved.drain(..).rev() {
            match value {
                Some(value) => env::set_var(&key, value),
                None => env::remove_var(&key),
            }
        }
    }
}

fn create_temp_config(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("config.yaml");
    fs::write(&path, content).unwrap();
    path
}

#[test]
#[serial]
fn test_shell_and_path_fill_in_defaults() {
    let mut guard = EnvGuard::isolated();
    let temp_dir = TempDir::new().unwrap();
    // No ~/.origin/config.yaml under this home.
    guard.set("HOME", &temp_dir.path().to_string_lossy());

    let config = ConfigBuilder::new().build().unwrap();
    assert_eq!(config.shell, Some(PathBuf::from("/bin/bash")));
    assert_eq!(
        config.search_directories(),
        vec![PathBuf::from("/usr/bin"), PathBuf::from("/bin")]
    );
    assert!(config.introspect_enabled());
    assert_eq!(config.format(), OutputFormat::Human);
}

#[test]
#[serial]
fn test_file_beats_shell_and_path() {
    let _guard = EnvGuard::isolated();
    let temp_dir = TempDir::new().unwrap();
    let path = create_temp_config(
        temp_dir.path(),
        "shell: /bin/zsh\nsearch_path: [/opt/bin]\noutput_format: terse\n",
    );

    let config = ConfigBuilder::new().with_config_file(&path).build().unwrap();
    assert_eq!(config.shell, Some(PathBuf::from("/bin/zsh")));
    assert_eq!(config.search_directories(), vec![PathBuf::from("/opt/bin")]);
    assert_eq!(config.format(), OutputFormat::Terse);
}

#[test]
#[serial]
fn test_environment_beats_file() {
    let mut guard = EnvGuard::isolated();
    let temp_dir = TempDir::new().unwrap();
    let path = create_temp_config(temp_dir.path(), "shell: /bin/zsh\nintrospect: true\n");
    guard.set("ORIGIN_SHELL", "/usr/local/bin/bash");
    guard.set("ORIGIN_INTROSPECT", "off");
    guard.set("ORIGIN_FORMAT", "json");

    let config = ConfigBuilder::new().with_config_file(&path).build().unwrap();
    assert_eq!(config.shell, Some(PathBuf::from("/usr/local/bin/bash")));
    assert!(!config.introspect_enabled());
    assert_eq!(config.format(), OutputFormat::Json);
}

#[test]
#[serial]
fn test_overrides_beat_environment() {
    let mut guard = EnvGuard::isolated();
    let temp_dir = TempDir::new().unwrap();
    guard.set("HOME", &temp_dir.path().to_string_lossy());
    guard.set("ORIGIN_SHELL", "/usr/local/bin/bash");
    guard.set("ORIGIN_PATH", "/env/bin");

    let config = ConfigBuilder::new()
        .with_config(Config {
            shell: Some(PathBuf::from("/bin/zsh")),
            ..Config::default()
        })
        .build()
        .unwrap();
    assert_eq!(config.shell, Some(PathBuf::from("/bin/zsh")));
    assert_eq!(config.search_directories(), vec![PathBuf::from("/env/bin")]);
}

#[test]
#[serial]
fn test_config_path_from_environment() {
    let mut guard = EnvGuard::isolated();
    let temp_dir = TempDir::new().unwrap();
    let path = create_temp_config(temp_dir.path(), "tables: /etc/origin/tables.yaml\n");
    guard.set("ORIGIN_CONFIG", &path.to_string_lossy());

    let config = ConfigBuilder::new().build().unwrap();
    assert_eq!(config.tables, Some(PathBuf::from("/etc/origin/tables.yaml")));
}

#[test]
#[serial]
fn test_missing_named_config_file_fails() {
    let mut guard = EnvGuard::isolated();
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("absent.yaml");

    let err = ConfigBuilder::new()
        .with_config_file(&missing)
        .build()
        .unwrap_err();
    assert!(err.is_configuration());
    assert!(err.to_string().contains("absent.yaml"));

    guard.set("ORIGIN_CONFIG", &missing.to_string_lossy());
    let err = ConfigBuilder::new().build().unwrap_err();
    assert!(err.is_configuration());
}

#[test]
#[serial]
fn test_invalid_environment_value_fails() {
    let mut guard = EnvGuard::isolated();
    guard.set("ORIGIN_FORMAT", "yaml");

    let err = ConfigBuilder::new().skip_files().build().unwrap_err();
    assert!(err.is_configuration());
    assert!(err.to_string().contains("ORIGIN_FORMAT"));
}

#[test]
fn test_unknown_field_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = create_temp_config(temp_dir.path(), "ports: { min: 5000 }\n");

    let err = ConfigBuilder::new()
        .skip_env()
        .with_config_file(&path)
        .build()
        .unwrap_err();
    assert!(err.is_configuration());
}

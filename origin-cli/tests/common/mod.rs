//! Common test utilities for CLI integration tests.
//!
//! This module provides an isolated environment for running the `origin`
//! binary:
//! - A temporary search path with executables and symlinks
//! - A table snapshot so no real shell is ever started
//! - A home directory without a configuration file

use assert_cmd::Command;
use std::fs;
use std::os::unix::fs::{symlink, PermissionsExt};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Table snapshot shared by every test.
pub const TABLES: &str = r#"shell: /bin/bash
aliases:
  ll: ls -alF
  ls: ls -l
builtins: [type, cd, echo]
keywords: [if, then]
functions:
  afunction: |-
    afunction ()
    {
        echo "I am a function"
    }
"#;

/// Test environment with an isolated search path and shell tables.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// The single search directory
    pub bin: PathBuf,
    /// The table snapshot file
    pub tables: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// This creates:
    /// - `bin/` containing executables `ls` and `uname`, and `sh -> dash`
    /// - `tables.yaml` holding [`TABLES`]
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let bin = temp_path.join("bin");
        fs::create_dir_all(&bin).expect("Failed to create bin directory");
        let tables = temp_path.join("tables.yaml");
        fs::write(&tables, TABLES).expect("Failed to write tables");

        let env = Self {
            temp_dir,
            temp_path,
            bin,
            tables,
        };
        env.executable("ls");
        env.executable("uname");
        env.executable("dash");
        symlink("dash", env.bin.join("sh")).expect("Failed to create symlink");
        env
    }

    /// Get a bare command builder with a scrubbed environment.
    ///
    /// Only `PATH`, `SHELL` and `HOME` (the temp directory, which holds no
    /// configuration file) are set; tests add the rest.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("origin").expect("Failed to find origin binary");
        cmd.env_clear()
            .env("PATH", &self.bin)
            .env("SHELL", "/bin/bash")
            .env("HOME", &self.temp_path);
        cmd
    }

    /// Get a command builder that reads the fixture's table snapshot.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.env("ORIGIN_TABLES", &self.tables);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write an executable script into `bin/`.
    pub fn executable(&self, name: &str) -> PathBuf {
        let path = self.bin.join(name);
        fs::write(&path, "#!/bin/sh\n").expect("Failed to write executable");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("Failed to set permissions");
        path
    }

    /// Write a file under the temp directory.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        fs::write(&path, contents).expect("Failed to write file");
        path
    }
}

/// Run a command and return stdout as a String.
#[allow(dead_code)]
pub fn stdout_of(mut cmd: Command) -> String {
    let output = cmd.output().expect("Failed to run command");
    String::from_utf8(output.stdout).expect("Invalid UTF-8 in stdout")
}

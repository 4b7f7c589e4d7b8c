//! Common test utilities for integration tests.
//!
//! This module provides a throwaway filesystem with search directories,
//! executables and symlinks, plus the shell tables used by the scenarios.

use std::fs;
use std::os::unix::fs::{symlink, PermissionsExt};
use std::path::{Path, PathBuf};

use origin::ShellContext;
use tempfile::TempDir;

/// Shell path recorded in the fixture tables.
pub const BASH: &str = "/bin/bash";

/// Body of the `afunction` fixture, as bash prints it.
pub const AFUNCTION: &str = "afunction () \n{ \n    echo \"I am a function\"\n}";

/// An isolated directory tree that serves as a search path.
///
/// The directory is removed when the fixture is dropped.
pub struct Fixture {
    temp_dir: TempDir,
}

#[allow(dead_code)]
impl Fixture {
    /// Create an empty fixture.
    pub fn new() -> Self {
        Self {
            temp_dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    /// Root of the fixture.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create (if needed) and return the directory `name` under the root.
    pub fn dir(&self, name: &str) -> PathBuf {
        let path = self.root().join(name);
        fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Write an executable script at `dir/name`.
    pub fn executable(&self, dir: &str, name: &str) -> PathBuf {
        let path = self.dir(dir).join(name);
        fs::write(&path, "#!/bin/sh\n").expect("Failed to write executable");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("Failed to set permissions");
        path
    }

    /// Write a non-executable file at `dir/name`.
    pub fn file(&self, dir: &str, name: &str) -> PathBuf {
        let path = self.dir(dir).join(name);
        fs::write(&path, "data\n").expect("Failed to write file");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644))
            .expect("Failed to set permissions");
        path
    }

    /// Create a symlink at `dir/name` pointing at `target`.
    pub fn link(&self, dir: &str, name: &str, target: impl AsRef<Path>) -> PathBuf {
        let path = self.dir(dir).join(name);
        symlink(target, &path).expect("Failed to create symlink");
        path
    }
}

/// Tables shaped like an interactive bash with a few aliases and a function.
#[allow(dead_code)]
pub fn bash_tables() -> ShellContext {
    ShellContext::new(BASH)
        .with_alias("ll", "ls -alF")
        .with_alias("ls", "ls -l")
        .with_alias("a", "b")
        .with_alias("b", "a")
        .with_builtin("type")
        .with_builtin("cd")
        .with_keyword("if")
        .with_function("afunction", AFUNCTION)
}

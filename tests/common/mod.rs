//! Shared testing utilities for cmsfan CLI tests.

use assert_cmd::Command;
use std::env;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated working directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Path to the working directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `cmsfan` binary within the
    /// working directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("cmsfan").expect("Failed to locate cmsfan binary");
        cmd.current_dir(&self.work_dir);

        // Resolve stub executables from the working directory first.
        let mut paths = vec![self.work_dir.clone()];
        paths.extend(env::split_paths(&env::var_os("PATH").unwrap_or_default()));
        cmd.env("PATH", env::join_paths(paths).expect("Failed to build test PATH"));
        cmd
    }

    /// Install a stub `cmsRun` in the working directory that echoes its
    /// argument vector to stdout.
    pub fn install_stub_cmsrun(&self) {
        let script = self.work_dir.join("cmsRun");
        fs::write(&script, "#!/bin/sh\necho \"stub cmsRun $@\"\n")
            .expect("Failed to write stub cmsRun");

        let mut perms =
            fs::metadata(&script).expect("Failed to stat stub cmsRun").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&script, perms).expect("Failed to mark stub cmsRun executable");
    }

    /// Populate `Herwig-scratch/Build` with `count` integration-job entries,
    /// the way a completed build step would.
    pub fn scratch_with_jobs(&self, count: usize) {
        let build_dir = self.work_dir.join("Herwig-scratch/Build");
        fs::create_dir_all(&build_dir).expect("Failed to create scratch build directory");
        for index in 0..count {
            fs::create_dir(build_dir.join(format!("integrationJob{index}")))
                .expect("Failed to create integration job entry");
        }
    }
}

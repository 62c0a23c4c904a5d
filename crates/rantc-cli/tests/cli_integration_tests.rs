//! Integration tests for the `rant` binary.
//!
//! Runs the compiled binary against temporary project trees.

#![allow(non_snake_case)]

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Run `rant` with `args` from `dir`
fn rant(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_rant"))
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap()
}

fn write(path: &Path, contents: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

// =============================================================================
// msg build
// =============================================================================

mod build {
    use super::*;

    #[test]
    fn build___default_path___builds_tree_recursively() {
        let dir = TempDir::new().unwrap();
        write(&dir.path().join("top.msg"), "int32 a\n");
        write(&dir.path().join("msg").join("pose.msg"), "float64 x\n");

        let output = rant(dir.path(), &["msg", "build"]);

        assert!(output.status.success(), "{output:?}");
        assert!(dir.path().join("built").join("Top.cs").is_file());
        assert!(dir.path().join("msg").join("built").join("Pose.cs").is_file());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("2 compiled"), "{stdout}");
    }

    #[test]
    fn build___no_recursive___skips_subfolders() {
        let dir = TempDir::new().unwrap();
        write(&dir.path().join("top.msg"), "int32 a\n");
        write(&dir.path().join("msg").join("pose.msg"), "float64 x\n");

        let output = rant(dir.path(), &["msg", "build", ".", "--no-recursive"]);

        assert!(output.status.success(), "{output:?}");
        assert!(dir.path().join("built").join("Top.cs").is_file());
        assert!(!dir.path().join("msg").join("built").exists());
    }

    #[test]
    fn build___single_file___builds_it() {
        let dir = TempDir::new().unwrap();
        write(&dir.path().join("my message.msg"), "string data\n");

        let output = rant(dir.path(), &["msg", "build", "my message.msg", "--python"]);

        assert!(output.status.success(), "{output:?}");
        assert!(dir.path().join("built").join("MyMessage.cs").is_file());
        assert!(dir.path().join("built").join("MyMessage.py").is_file());
    }

    #[test]
    fn build___settings_file___enables_python() {
        let dir = TempDir::new().unwrap();
        write(&dir.path().join("rant.toml"), "[compiler.targets]\npython = true\n");
        write(&dir.path().join("pose.msg"), "float64 x\n");

        let output = rant(dir.path(), &["msg", "build", "-o", "out"]);

        assert!(output.status.success(), "{output:?}");
        assert!(dir.path().join("out").join("Pose.cs").is_file());
        assert!(dir.path().join("out").join("Pose.py").is_file());
    }

    #[test]
    fn build___error_diagnostic___exits_non_zero() {
        let dir = TempDir::new().unwrap();
        write(&dir.path().join("bad.msg"), "type enum\nint32 a\n");

        let output = rant(dir.path(), &["msg", "build"]);

        assert!(!output.status.success());
        // The file is still generated with the default kind
        assert!(dir.path().join("built").join("Bad.cs").is_file());
    }

    #[test]
    fn build___invalid_settings___exits_non_zero() {
        let dir = TempDir::new().unwrap();
        write(&dir.path().join("rant.toml"), "[runtime]\nworker_threads = 0\n");

        let output = rant(dir.path(), &["msg", "build"]);

        assert!(!output.status.success());
    }

    #[test]
    fn build___missing_path___is_no_op() {
        let dir = TempDir::new().unwrap();

        let output = rant(dir.path(), &["msg", "build", "absent"]);

        assert!(output.status.success(), "{output:?}");
        assert!(!dir.path().join("absent").exists());
    }
}

// =============================================================================
// msg check
// =============================================================================

mod check {
    use super::*;

    #[test]
    fn check___clean_file___succeeds_without_writing() {
        let dir = TempDir::new().unwrap();
        write(&dir.path().join("ping.msg"), "int32 seq\n");

        let output = rant(dir.path(), &["msg", "check", "ping.msg", "--print"]);

        assert!(output.status.success(), "{output:?}");
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("public int seq;"), "{stdout}");
        assert!(!dir.path().join("built").exists());
    }

    #[test]
    fn check___error_diagnostic___exits_non_zero() {
        let dir = TempDir::new().unwrap();
        write(&dir.path().join("bad.msg"), "type enum\n");

        let output = rant(dir.path(), &["msg", "check", "bad.msg"]);

        assert!(!output.status.success());
    }

    #[test]
    fn check___missing_file___exits_non_zero() {
        let dir = TempDir::new().unwrap();

        let output = rant(dir.path(), &["msg", "check", "absent.msg"]);

        assert!(!output.status.success());
    }
}

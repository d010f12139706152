//! Fixture-driven blog tree scenarios.
//!
//! Each case under `tests/fixtures/synthetic/<case>/` provides:
//! - `input/`    initial blog tree copied to a temp directory
//! - `scenario.toml` commands to run, with optional stdin and stdout checks
//! - `expected/` blog tree after all commands ran

use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Output, Stdio};
use walkdir::WalkDir;

#[derive(Debug, Deserialize)]
struct Scenario {
    #[serde(rename = "command")]
    commands: Vec<CommandSpec>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CommandSpec {
    args: Vec<String>,
    #[serde(default)]
    stdin: Option<String>,
    #[serde(default)]
    stdout_contains: Vec<String>,
    #[serde(default)]
    stdout_not_contains: Vec<String>,
}

#[test]
fn test_synthetic_fixtures() {
    let root = Path::new("tests").join("fixtures").join("synthetic");
    let mut case_dirs: Vec<PathBuf> = fs::read_dir(&root)
        .unwrap()
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();
    case_dirs.sort();
    assert!(!case_dirs.is_empty(), "No synthetic test cases found");

    for case_dir in case_dirs {
        run_case(&case_dir);
    }
}

fn run_case(case_dir: &Path) {
    let case_name = case_dir.file_name().unwrap().to_string_lossy();
    let scenario: Scenario =
        toml::from_str(&fs::read_to_string(case_dir.join("scenario.toml")).unwrap())
            .unwrap_or_else(|e| panic!("Case '{}' has invalid scenario.toml: {}", case_name, e));

    let temp = tempfile::TempDir::new().unwrap();
    copy_tree(&case_dir.join("input"), temp.path());

    for (idx, command) in scenario.commands.iter().enumerate() {
        let output = run_tagmigrate(temp.path(), &command.args, command.stdin.as_deref());
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);

        assert!(
            output.status.success(),
            "Case '{}', command #{} ({:?}) failed.\nstdout:\n{}\nstderr:\n{}",
            case_name,
            idx + 1,
            command.args,
            stdout,
            stderr
        );
        for needle in &command.stdout_contains {
            assert!(
                stdout.contains(needle.as_str()),
                "Case '{}', command #{}: stdout missing {:?}.\nstdout:\n{}",
                case_name,
                idx + 1,
                needle,
                stdout
            );
        }
        for needle in &command.stdout_not_contains {
            assert!(
                !stdout.contains(needle.as_str()),
                "Case '{}', command #{}: stdout unexpectedly has {:?}.\nstdout:\n{}",
                case_name,
                idx + 1,
                needle,
                stdout
            );
        }
    }

    assert_trees_match(&case_name, &case_dir.join("expected"), temp.path());
}

fn run_tagmigrate(cwd: &Path, args: &[String], stdin: Option<&str>) -> Output {
    let mut child = std::process::Command::new(env!("CARGO_BIN_EXE_tagmigrate"))
        .current_dir(cwd)
        .env_remove("TAGMIGRATE_POSTS_DIR")
        .env_remove("RUST_LOG")
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    // Dropping the handle closes stdin, so unanswered prompts read EOF.
    if let Some(mut handle) = child.stdin.take() {
        if let Some(input) = stdin {
            handle.write_all(input.as_bytes()).unwrap();
        }
    }

    child.wait_with_output().unwrap()
}

fn copy_tree(from: &Path, to: &Path) {
    for entry in WalkDir::new(from).min_depth(1).into_iter().filter_map(|e| e.ok()) {
        let dest_path = to.join(entry.path().strip_prefix(from).unwrap());
        if entry.file_type().is_dir() {
            fs::create_dir_all(&dest_path).unwrap();
        } else {
            fs::copy(entry.path(), &dest_path).unwrap();
        }
    }
}

fn collect_relative_files(root: &Path) -> BTreeSet<PathBuf> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path().strip_prefix(root).unwrap().to_path_buf())
        .collect()
}

fn assert_trees_match(case_name: &str, expected_root: &Path, actual_root: &Path) {
    let expected_files = collect_relative_files(expected_root);
    assert_eq!(
        expected_files,
        collect_relative_files(actual_root),
        "Case '{}' tree mismatch",
        case_name
    );

    for rel in expected_files {
        let expected = fs::read_to_string(expected_root.join(&rel)).unwrap();
        let actual = fs::read_to_string(actual_root.join(&rel)).unwrap();
        assert_eq!(
            expected.replace("\r\n", "\n"),
            actual.replace("\r\n", "\n"),
            "Case '{}' file mismatch at {}",
            case_name,
            rel.display()
        );
    }
}

//! End-to-end runs of the `taskdoc` binary

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

fn taskdoc(path: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_taskdoc"))
        .arg("-f")
        .arg(path)
        .env_remove("RUST_LOG")
        .output()
        .expect("run taskdoc")
}

const BUILD_TASK: &str = r#"
apiVersion: tekton.dev/v1beta1
kind: Task
metadata:
  name: build
spec:
  description: Builds the project
  params:
    - name: target
      description: make target
  resources:
    inputs:
      - name: source
        type: git
    outputs:
      - name: image
        type: image
"#;

#[test]
fn test_directory_document_on_stdout() {
    let dir = tempdir().expect("tempdir");
    fs::write(dir.path().join("task-build.yaml"), BUILD_TASK).expect("write");
    fs::write(dir.path().join("README.md"), "# readme\n").expect("write");

    let output = taskdoc(dir.path());
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("utf8");
    let label = dir.path().display().to_string();
    assert!(stdout.starts_with(&format!("# {label} related tasks\n")));
    assert!(stdout.contains("-**[build](#build)**: Builds the project\n"));
    assert!(stdout.contains("with the Path set to `"));
    assert!(stdout.contains("master/build/build.yaml\n### Input:-\n- target, make target\n"));
    assert!(stdout.contains("### Input:- - source, git\t\n"));
    assert!(stdout.contains("### Output:- - image, image\t\n"));
}

#[test]
fn test_missing_path_fails_without_output() {
    let dir = tempdir().expect("tempdir");
    let output = taskdoc(&dir.path().join("absent"));

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(!output.stderr.is_empty());
}

#[test]
fn test_decode_error_fails_without_output() {
    let dir = tempdir().expect("tempdir");
    fs::write(dir.path().join("task-a.yaml"), BUILD_TASK).expect("write");
    fs::write(dir.path().join("task-b.yaml"), "kind: ConfigMap\n").expect("write");

    let output = taskdoc(dir.path());
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

use std::io::Write;
use std::process::{Command, Output};

fn quick_sort(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_quick_sort"))
        .args(args)
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_default_sample_succeeds() {
    let output = quick_sort(&[]);
    if !output.status.success() {
        println!("Stderr: {}", String::from_utf8_lossy(&output.stderr));
    }
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Testing quick_sort:"));
    assert!(stdout.contains("quick_sort succeeded."));
}

#[test]
fn test_mismatch_exits_with_one() {
    let output = quick_sort(&["--values", "3,1,2", "--expected", "1,2,3"]);
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("quick_sort failed."));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("first mismatch at index 0"));
}

#[test]
fn test_invalid_config_exits_with_two() {
    let output = quick_sort(&["--values", "3,1,2", "--expected", "3,2"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_sample_config_file() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config/sample.toml");
    let output = quick_sort(&["--config", path]);
    assert!(output.status.success());
}

#[test]
fn test_config_file_with_overrides() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "values = [8, 10, 43, 123, 635, 92, 1, 99, 32, 10]").unwrap();
    writeln!(file, "order = \"ascending\"").unwrap();

    let path = file.path().to_str().unwrap();
    for strategy in ["recursive", "bounded", "parallel"] {
        let output = quick_sort(&[
            "--config",
            path,
            "--strategy",
            strategy,
            "--parallel-threshold",
            "2",
        ]);
        assert!(output.status.success(), "strategy {}", strategy);
    }
}

#[test]
fn test_ascending_sample_succeeds() {
    let output = quick_sort(&["--order", "ascending"]);
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("quick_sort succeeded."));
}

#[test]
fn test_ascending_order_from_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "order = \"ascending\"").unwrap();

    let output = quick_sort(&["--config", file.path().to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn test_show_partition_uses_config_values() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "values = [3, 9, 1]").unwrap();

    let output = quick_sort(&["--config", file.path().to_str().unwrap(), "--show-partition"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Before partition: [3, 9, 1]  pivot index = 2"));
    assert!(stdout.contains("After partition:  [3, 9, 1]  pivot index = 2"));
}

#[test]
fn test_negative_values() {
    let output = quick_sort(&["--values=-3,5,-1,0", "--expected=5,0,-1,-3"]);
    assert!(output.status.success());
}

#[test]
fn test_show_partition() {
    let output = quick_sort(&["--show-partition"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Before partition: [2, 8, 7, 1, 3, 5, 6, 4]  pivot index = 7"));
    assert!(stdout.contains("After partition:  [8, 7, 5, 6, 4, 2, 1, 3]  pivot index = 4"));
    assert!(stdout.contains("partition invariant holds."));
}

#[test]
fn test_unknown_strategy_is_rejected() {
    let output = quick_sort(&["--strategy", "heap"]);
    assert!(!output.status.success());
    assert_ne!(output.status.code(), Some(1));
}

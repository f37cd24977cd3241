use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

/// Write a schematic to a file unique to this test process.
fn schematic(name: &str, data: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "gear-ratios-{id}-{name}.txt",
        id = std::process::id()
    ));

    fs::write(&path, data).unwrap();
    path
}

fn run(args: &[&std::ffi::OsStr]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_gear-ratios"))
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn test_stdout_is_one_sum_per_dataset() {
    let path = schematic("plain", "..12\n34..\n*...\n");
    let output = run(&[path.as_os_str()]);
    fs::remove_file(&path).unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "4361\n34\n");
}

#[test]
fn test_verbose_logs_part_numbers() {
    let path = schematic("verbose", "1*\n");
    let output = run(&["--verbose".as_ref(), path.as_os_str()]);
    fs::remove_file(&path).unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("DEBUG: sample: 8 part numbers"), "{stdout}");
    assert!(stdout.contains("DEBUG: sample: 467 at 0:0..3"), "{stdout}");
    assert!(stdout.lines().any(|line| line == "4361"), "{stdout}");
    assert!(stdout.lines().any(|line| line == "1"), "{stdout}");
}

#[test]
fn test_missing_input_is_fatal() {
    let path = std::env::temp_dir().join("gear-ratios-does-not-exist.txt");
    let output = run(&["--no-sample".as_ref(), path.as_os_str()]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

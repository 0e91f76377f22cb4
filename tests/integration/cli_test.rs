use anyhow::Result;
use std::io::Write;
use std::process::{Command, Stdio};
use tempfile::NamedTempFile;

const BIN: &str = env!("CARGO_BIN_EXE_ossim");

/// Test that a memory simulation prints its summary
#[test]
fn test_cli_memory_command() -> Result<()> {
    let output = Command::new(BIN)
        .args(["memory", "--strategy", "lru", "--frames", "3", "--refs", "7 0 1 2 0 3 0 4 2 3 0 3 2"])
        .output()?;

    assert!(output.status.success(), "CLI memory command failed");

    let output_str = String::from_utf8(output.stdout)?;
    assert!(output_str.contains("LRU: 9 faults, 4 hits"), "Summary not found: {}", output_str);

    Ok(())
}

/// Test the comparison table for all disk strategies
#[test]
fn test_cli_disk_comparison() -> Result<()> {
    let output = Command::new(BIN)
        .args([
            "disk", "--strategy", "all",
            "--cylinders", "200",
            "--head", "50",
            "--queue", "82,170,43,140,24,16,190",
            "--direction", "up",
        ])
        .output()?;

    assert!(output.status.success(), "CLI disk command failed");

    let output_str = String::from_utf8(output.stdout)?;
    assert!(output_str.contains("seek distance 314"));
    assert!(output_str.contains("seek distance 192"));
    assert!(output_str.contains("Least head travel: C-SCAN"));
    assert!(output_str.contains("(2 rows)"));

    Ok(())
}

/// Test JSON output carries the full trace
#[test]
fn test_cli_json_output() -> Result<()> {
    let output = Command::new(BIN)
        .args(["--json", "disk", "--strategy", "cscan", "--queue", "82,170,43,140,24,16,190"])
        .output()?;

    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["seek_distance"], 192);
    assert_eq!(value["wrap_index"], 6);
    assert_eq!(value["sequence"].as_array().map(|a| a.len()), Some(10));

    Ok(())
}

/// Invalid input exits with an error naming the field
#[test]
fn test_cli_rejects_invalid_input() -> Result<()> {
    let output = Command::new(BIN)
        .args(["memory", "--frames", "0", "--refs", "1 2 3"])
        .output()?;

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("frame count"), "Unexpected error output: {}", stderr);

    Ok(())
}

/// A frame count past the table limit is rejected before any allocation
#[test]
fn test_cli_rejects_oversized_frame_count() -> Result<()> {
    let output = Command::new(BIN)
        .args(["memory", "--frames", "4000000000", "--refs", "1 2 3"])
        .output()?;

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("frame count"), "Unexpected error output: {}", stderr);

    Ok(())
}

/// The memory comparison table reports both ratios
#[test]
fn test_cli_memory_comparison() -> Result<()> {
    let output = Command::new(BIN)
        .args(["memory", "--strategy", "all", "--frames", "3", "--refs", "7 0 1 2 0 3 0 4 2 3 0 3 2"])
        .output()?;

    assert!(output.status.success());

    let output_str = String::from_utf8(output.stdout)?;
    assert!(output_str.contains("fault ratio 69.23%"), "Fault ratio not found: {}", output_str);
    assert!(output_str.contains("Fewest faults: LRU"));
    assert!(output_str.contains("(2 rows)"));

    Ok(())
}

/// Test the shell with input redirection
#[test]
fn test_cli_shell_interaction() -> Result<()> {
    let mut input_file = NamedTempFile::new()?;
    writeln!(input_file, "memory arb 3 7 0 1 2 0 3 0 4 2 3 0 3 2")?;
    writeln!(input_file, "disk look down 200 50 82, 170, 43")?;
    writeln!(input_file, "memory lru 3 1 -2")?;
    writeln!(input_file, "help")?;
    writeln!(input_file, "exit")?;
    input_file.flush()?;

    let output = Command::new(BIN)
        .arg("shell")
        .stdin(Stdio::from(input_file.reopen()?))
        .output()?;

    assert!(output.status.success(), "CLI shell interaction failed");

    let output_str = String::from_utf8(output.stdout)?;
    assert!(output_str.contains("ARB: 9 faults, 4 hits"));
    assert!(output_str.contains("(reset)"));
    assert!(output_str.contains("LOOK: 50 -> 43 -> 82 -> 170"));
    assert!(output_str.contains("Error: Invalid reference string"));
    assert!(output_str.contains("Available commands:"));
    assert!(output_str.contains("Goodbye!"));

    Ok(())
}

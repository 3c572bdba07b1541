//! Basic CLI E2E tests.
//!
//! Tests run the built binary with piped stdin and verify outputs.

use std::{
    io::Write,
    process::{Command, Stdio},
};

/// Run the binary with `input` on stdin and return (code, stdout, stderr).
fn run_cli(args: &[&str], input: &str) -> (i32, String, String) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_ppclock"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to start ppclock");

    {
        let mut stdin = child.stdin.take().expect("stdin is piped");
        stdin.write_all(input.as_bytes()).expect("Failed to write stdin");
    }

    let output = child.wait_with_output().expect("Failed to wait for ppclock");
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (output.status.code().unwrap_or(-1), stdout, stderr)
}

fn event_types(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .filter_map(|line| serde_json::from_str::<serde_json::Value>(line).ok())
        .filter_map(|value| value["type"].as_str().map(str::to_string))
        .collect()
}

#[test]
fn test_cancel_on_empty_input() {
    let (code, stdout, _) = run_cli(&[], "");
    assert_eq!(code, 0);
    assert!(!stdout.contains("Time's up!"));
}

#[test]
fn test_cancel_at_font_prompt() {
    let (code, stdout, _) = run_cli(&[], "1\n0\nq\n");
    assert_eq!(code, 0);
    assert!(stdout.contains("Display size:"));
    assert!(!stdout.contains("Time's up!"));
}

#[test]
fn test_json_countdown_finishes() {
    let (code, stdout, _) = run_cli(&["--seconds", "1", "--font-size", "24", "--json"], "");
    assert_eq!(code, 0);
    assert_eq!(event_types(&stdout), vec!["started", "tick", "finished"]);
}

#[test]
fn test_stop_from_controls() {
    let (code, stdout, _) = run_cli(&["-m", "5", "-f", "small", "--json"], "s\n");
    assert_eq!(code, 0);
    assert_eq!(event_types(&stdout), vec!["started", "stopped"]);
}

#[test]
fn test_interactive_countdown() {
    let (code, stdout, _) = run_cli(&[], "0\n0\n0\n1\n1\n");
    assert_eq!(code, 0);
    assert!(stdout.contains("Please enter a valid time greater than 0."));
    assert!(stdout.contains("Time's up!"));
}

#[test]
fn test_zero_duration_flag_fails() {
    let (code, _, stderr) = run_cli(&["--minutes", "0", "--seconds", "0"], "");
    assert_ne!(code, 0);
    assert!(stderr.contains("Invalid duration"));
}

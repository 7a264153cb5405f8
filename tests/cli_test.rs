use anyhow::Result;
use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

const INVALID_INPUT: &str = "Input parameters are set incorrectly!";

fn run_cli(args: &[&str], stdin: &str) -> Result<Output> {
    let mut child = Command::new(env!("CARGO_BIN_EXE_numeral-calc"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    // 子程序可能在讀取 stdin 前就結束
    if let Some(mut input) = child.stdin.take() {
        if let Err(e) = input.write_all(stdin.as_bytes()) {
            if e.kind() != std::io::ErrorKind::BrokenPipe {
                return Err(e.into());
            }
        }
    }

    Ok(child.wait_with_output()?)
}

fn text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

#[test]
fn test_success_prints_result_only() -> Result<()> {
    let output = run_cli(&[], "1 + 2\n")?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(text(&output.stdout), "3\n");
    assert!(text(&output.stderr).is_empty());
    Ok(())
}

#[test]
fn test_roman_zero_prints_empty_line() -> Result<()> {
    let output = run_cli(&[], "v - v\n")?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(text(&output.stdout), "\n");
    Ok(())
}

#[test]
fn test_negative_roman_goes_to_stderr() -> Result<()> {
    let output = run_cli(&[], "II - V\n")?;

    assert_eq!(output.status.code(), Some(1));
    assert!(text(&output.stdout).is_empty());

    // 預設日誌等級下只出現一次
    let stderr = text(&output.stderr);
    assert_eq!(stderr.matches(INVALID_INPUT).count(), 1, "stderr: {}", stderr);
    Ok(())
}

#[test]
fn test_empty_stdin_is_invalid_input() -> Result<()> {
    let output = run_cli(&[], "")?;

    assert_eq!(output.status.code(), Some(1));
    assert!(text(&output.stdout).is_empty());
    assert!(text(&output.stderr).contains(INVALID_INPUT));
    Ok(())
}

#[test]
fn test_legacy_errors_flag() -> Result<()> {
    let output = run_cli(&["--legacy-errors"], "II - V\n")?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(text(&output.stdout), format!("{}\n", INVALID_INPUT));
    assert!(text(&output.stderr).is_empty());
    Ok(())
}

#[test]
fn test_legacy_errors_from_config_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("calc.toml");
    std::fs::write(&config_path, "[output]\nlegacy_errors = true\n")?;
    let config_arg = config_path.to_string_lossy().into_owned();

    let output = run_cli(&["--config", &config_arg], "3 - X\n")?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(text(&output.stdout), format!("{}\n", INVALID_INPUT));
    Ok(())
}

#[test]
fn test_bad_config_respects_legacy_flag() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("bad.toml");
    std::fs::write(&config_path, "[output]\nformat = \"xml\"\n")?;
    let config_arg = config_path.to_string_lossy().into_owned();

    let output = run_cli(&["--config", &config_arg], "1 + 1\n")?;
    assert_eq!(output.status.code(), Some(1));
    assert!(text(&output.stdout).is_empty());
    assert!(text(&output.stderr).contains("output.format"));

    let output = run_cli(&["--legacy-errors", "--config", &config_arg], "1 + 1\n")?;
    assert_eq!(output.status.code(), Some(0));
    assert!(text(&output.stdout).contains("output.format"));
    assert!(text(&output.stderr).is_empty());
    Ok(())
}

#[test]
fn test_expr_and_json_format() -> Result<()> {
    let output = run_cli(&["--expr", "ix * ix", "--format", "json"], "")?;

    assert_eq!(output.status.code(), Some(0));
    let json: serde_json::Value = serde_json::from_str(text(&output.stdout).trim())?;
    assert_eq!(json["result"], "LXXXI");
    assert_eq!(json["value"], 81);
    Ok(())
}

// Application layer: wires an input source, the pipeline and the output format.

use crate::core::engine::CalcEngine;
use crate::core::pipeline::StandardPipeline;
use crate::core::{InputSource, Outcome, OutputFormat};
use crate::domain::model::CalcReport;
use crate::utils::error::{CalcError, Result};

/// 讀取一行、計算並依格式輸出（不含結尾換行）
pub fn calculate<S: InputSource>(source: &S, format: OutputFormat) -> Result<String> {
    let line = source.read_line()?;
    let engine = CalcEngine::new(StandardPipeline::new());
    let outcome = engine.run(&line)?;
    render(&line, &outcome, format)
}

pub fn render(line: &str, outcome: &Outcome, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Plain => Ok(outcome.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string(&CalcReport::new(line, outcome))?),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Stdout,
    Stderr,
}

/// 失敗時要輸出的內容、輸出位置與退出碼
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureReport {
    pub channel: Channel,
    pub lines: Vec<String>,
    pub exit_code: i32,
}

/// 相容模式：只印固定訊息到 stdout 並以 0 結束；
/// 否則印到 stderr，verbose 時附上原因與建議，退出碼依嚴重程度
pub fn failure_report(e: &CalcError, legacy_errors: bool, verbose: bool) -> FailureReport {
    if legacy_errors {
        return FailureReport {
            channel: Channel::Stdout,
            lines: vec![e.user_friendly_message()],
            exit_code: 0,
        };
    }

    let mut lines = vec![format!("❌ {}", e.user_friendly_message())];
    if verbose {
        lines.push(format!("Reason: {}", e));
        lines.push(format!("💡 Suggestion: {}", e.recovery_suggestion()));
    }

    FailureReport {
        channel: Channel::Stderr,
        lines,
        exit_code: e.exit_code(),
    }
}

use crate::domain::model::{Expression, Outcome, Tokens};
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

/// 提供唯一一行輸入
pub trait InputSource {
    fn read_line(&self) -> Result<String>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
}

pub trait ConfigProvider {
    fn output_format(&self) -> OutputFormat;
    fn verbose(&self) -> bool;
    fn legacy_errors(&self) -> bool;
}

pub trait Pipeline {
    fn tokenize(&self, line: &str) -> Result<Tokens>;
    fn resolve(&self, tokens: Tokens) -> Result<Expression>;
    fn evaluate(&self, expression: Expression) -> Result<Outcome>;
}

pub mod cli;
pub mod toml_config;

use crate::core::{ConfigProvider, OutputFormat};
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use serde::{Deserialize, Serialize};
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use clap::Parser;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "numeral-calc"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Calculate one expression written in Arabic (1-10) or Roman (I-X) numerals")
)]
pub struct CliConfig {
    /// Expression to calculate instead of reading one line from stdin
    #[cfg_attr(feature = "cli", arg(long))]
    pub expr: Option<String>,

    /// Path to an optional TOML configuration file
    #[cfg_attr(feature = "cli", arg(short, long))]
    pub config: Option<String>,

    /// Output format (overrides the config file)
    #[cfg_attr(feature = "cli", arg(long, value_enum))]
    pub format: Option<OutputFormat>,

    /// Print errors to stdout and exit with status 0
    #[cfg_attr(feature = "cli", arg(long))]
    pub legacy_errors: bool,

    /// Enable verbose output
    #[cfg_attr(feature = "cli", arg(short, long))]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn output_format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }

    fn verbose(&self) -> bool {
        self.verbose
    }

    fn legacy_errors(&self) -> bool {
        self.legacy_errors
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        Ok(())
    }
}

/// 命令列與設定檔合併後的最終設定，命令列優先
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CalcSettings {
    pub output_format: OutputFormat,
    pub verbose: bool,
    pub legacy_errors: bool,
}

impl CalcSettings {
    pub fn merge(cli: &CliConfig, file: Option<&TomlConfig>) -> Self {
        let output_format = cli
            .format
            .or_else(|| file.map(|f| f.output_format()))
            .unwrap_or_default();

        Self {
            output_format,
            verbose: cli.verbose || file.map(|f| f.verbose()).unwrap_or(false),
            legacy_errors: cli.legacy_errors || file.map(|f| f.legacy_errors()).unwrap_or(false),
        }
    }
}

impl ConfigProvider for CalcSettings {
    fn output_format(&self) -> OutputFormat {
        self.output_format
    }

    fn verbose(&self) -> bool {
        self.verbose
    }

    fn legacy_errors(&self) -> bool {
        self.legacy_errors
    }
}

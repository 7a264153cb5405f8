pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use app::{calculate, render};
pub use config::{
    cli::{StaticSource, StdinSource},
    toml_config::TomlConfig,
    CalcSettings, CliConfig,
};
pub use core::{engine::CalcEngine, pipeline::StandardPipeline};
pub use domain::model::{CalcReport, NumeralKind, Outcome};
pub use utils::error::{CalcError, Result};

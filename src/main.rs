use anyhow::Context;
use clap::Parser;
use numeral_calc::core::{ConfigProvider, OutputFormat};
use numeral_calc::utils::{logger, validation::Validate};
use numeral_calc::app::{failure_report, Channel};
use numeral_calc::{
    calculate, CalcError, CalcSettings, CliConfig, StaticSource, StdinSource, TomlConfig,
};
use std::io::Write;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 驗證命令列參數並載入設定檔，此時日誌尚未初始化
    let settings = match load_settings(&cli) {
        Ok(settings) => settings,
        Err(e) => return report_failure(&e, cli.legacy_errors, cli.verbose),
    };

    // 初始化日誌
    match settings.output_format() {
        OutputFormat::Json => logger::init_json_logger(settings.verbose()),
        OutputFormat::Plain => logger::init_cli_logger(settings.verbose()),
    }
    tracing::debug!("Effective settings: {:?}", settings);

    let result = match &cli.expr {
        Some(expr) => calculate(&StaticSource::new(expr.as_str()), settings.output_format()),
        None => calculate(&StdinSource::new(), settings.output_format()),
    };

    match result {
        Ok(output) => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", output).context("failed to write result to stdout")?;
            Ok(())
        }
        Err(e) => report_failure(&e, settings.legacy_errors(), settings.verbose()),
    }
}

fn load_settings(cli: &CliConfig) -> numeral_calc::Result<CalcSettings> {
    cli.validate()?;

    let file = match &cli.config {
        Some(path) => {
            let config = TomlConfig::from_file(path)?;
            config.validate()?;
            Some(config)
        }
        None => None,
    };

    Ok(CalcSettings::merge(cli, file.as_ref()))
}

fn report_failure(e: &CalcError, legacy_errors: bool, verbose: bool) -> anyhow::Result<()> {
    tracing::debug!(
        "Calculation failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );

    let report = failure_report(e, legacy_errors, verbose);
    match report.channel {
        Channel::Stdout => {
            let mut stdout = std::io::stdout().lock();
            for line in &report.lines {
                writeln!(stdout, "{}", line).context("failed to write error to stdout")?;
            }
        }
        Channel::Stderr => {
            for line in &report.lines {
                eprintln!("{}", line);
            }
        }
    }

    if report.exit_code != 0 {
        std::process::exit(report.exit_code);
    }
    Ok(())
}

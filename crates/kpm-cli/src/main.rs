//! KP Medizin protocol workbench CLI.

use clap::{ColorChoice, Parser};
use kpm_cli::logging::{LogConfig, LogFormat, init_logging};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, DraftCommand, LogFormatArg, LogLevelArg};
use crate::commands::{
    run_draft_load, run_draft_save, run_export, run_new, run_set, run_taxonomy, run_validate,
};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let result = match &cli.command {
        Command::New(args) => run_new(args).map(|()| 0),
        Command::Set(args) => run_set(&cli.state_dir, args).map(|()| 0),
        Command::Taxonomy(args) => run_taxonomy(args).map(|()| 0),
        Command::Validate(args) => run_validate(args).map(|valid| i32::from(!valid)),
        Command::Draft(DraftCommand::Save(args)) => {
            run_draft_save(&cli.state_dir, args).map(|()| 0)
        }
        Command::Draft(DraftCommand::Load(args)) => {
            run_draft_load(&cli.state_dir, args).map(|()| 0)
        }
        Command::Export(args) => run_export(&cli.state_dir, args).map(|()| 0),
    };
    let exit_code = match result {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}

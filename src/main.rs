#[cfg(not(feature = "cli"))]
compile_error!("The `rofl` binary requires the `cli` feature. Build with `--features cli`.");

use clap::Parser;
use colored::Colorize;
use std::io::IsTerminal;
use std::process;

use rofl::cli;
use rofl::cli::app::{Cli, ColorMode};

fn main() {
    // Usage errors exit with 1 like every other failure; --help/--version exit 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            process::exit(code);
        }
    };

    match cli.color {
        ColorMode::Always => colored::control::set_override(true),
        ColorMode::Never => colored::control::set_override(false),
        ColorMode::Auto => {} // colored auto-detects tty
    }

    let default_filter = if cli.verbose { "rofl=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    let mut writer = std::io::stdout();

    let result = cli::extract::execute(
        &cli::extract::ExtractOptions {
            input: cli.input,
            output: cli.output,
            compact: cli.compact,
            summary: cli.summary,
            progress: std::io::stderr().is_terminal(),
        },
        &mut writer,
    );

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red(), e);
        process::exit(1);
    }
}

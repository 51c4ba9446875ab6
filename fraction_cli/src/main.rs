//! # Fraction Calculator CLI
//!
//! Terminal front end for `fraction_core`: collects integers or `n/d`
//! fractions, runs one engine operation, and prints the result with its
//! decimal value and explanation steps (or the JSON response with `--json`).
//!
//! ```text
//! fraction simplify 12 18
//! fraction --locale es add 1/4 1/3
//! fraction --json from-decimal 0.75
//! fraction eval '{"operation":"to_decimal","numerator":3,"denominator":8}'
//! ```
//!
//! Settings resolve in order: defaults, `--settings` file,
//! `FRACTION_LOCALE` / `FRACTION_PRECISION`, explicit flags.

mod cli;
mod logger;
mod render;

use std::process::ExitCode;

use clap::Parser;
use fraction_core::{
    evaluate, EngineSettings, FractionError, FractionRequest, FractionResponse, Locale,
};
use tracing::{debug, warn};

use cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let settings = resolve_settings(&cli)?;
    let request = cli.command.into_request()?;
    debug!(
        operation = request.operation_name(),
        locale = %settings.locale,
        precision = settings.precision,
        "running request"
    );

    match evaluate(&request, &settings) {
        Ok(response) => {
            print!("{}", format_response(&request, &response, cli.json)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            warn!(code = e.error_code(), "operation rejected its input");
            eprint!("{}", format_error(&e)?);
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Stdout text for a successful request: the banner, or pretty JSON with `--json`.
fn format_response(
    request: &FractionRequest,
    response: &FractionResponse,
    json: bool,
) -> anyhow::Result<String> {
    if json {
        Ok(format!("{}\n", serde_json::to_string_pretty(response)?))
    } else {
        Ok(render::render_text(request, response)?)
    }
}

/// Stderr text for a rejected request: the localized message, then the error as JSON.
fn format_error(error: &FractionError) -> anyhow::Result<String> {
    let json = serde_json::to_string_pretty(error)?;
    Ok(format!("Error: {error}\n\nError JSON:\n{json}\n"))
}

/// Defaults, then the settings file, then env/flags (clap already merged those two).
fn resolve_settings(cli: &Cli) -> anyhow::Result<EngineSettings> {
    let mut settings = match &cli.settings {
        Some(path) => EngineSettings::from_json_file(path)?,
        None => EngineSettings::default(),
    };

    if let Some(tag) = &cli.locale {
        settings.locale = match tag.parse::<Locale>() {
            Ok(locale) => locale,
            Err(e) => {
                warn!("{e}; using {}", Locale::from_tag(tag));
                Locale::from_tag(tag)
            }
        };
    }
    if let Some(precision) = cli.precision {
        settings.precision = precision;
    }

    Ok(settings)
}

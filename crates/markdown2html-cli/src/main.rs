use anyhow::{Context, Result};
use markdown2html_config::Config;
use markdown2html_engine::{IoError, convert_file};
use std::{env, ffi::OsString, path::PathBuf, process};

const PROGRAM_NAME: &str = "markdown2html";

#[derive(Debug, PartialEq, Eq)]
struct Invocation {
    input: PathBuf,
    output: PathBuf,
}

/// Exactly two positional arguments: input then output.
///
/// Arguments are kept as `OsString` so non-UTF-8 file names still work.
fn parse_args<I>(args: I) -> Option<Invocation>
where
    I: IntoIterator<Item = OsString>,
{
    let mut args = args.into_iter();
    let input = args.next()?;
    let output = args.next()?;
    if args.next().is_some() {
        return None;
    }
    Some(Invocation {
        input: PathBuf::from(input),
        output: PathBuf::from(output),
    })
}

fn usage() -> String {
    format!("Usage: {PROGRAM_NAME} README.md README.html")
}

/// Config `log_level` applies only when `RUST_LOG` is unset, so per-module
/// directives from the environment are never overridden.
fn init_logging(config: &Config) -> Result<()> {
    let filters = env_logger::Env::default().default_filter_or("warn");
    let mut builder = env_logger::Builder::from_env(filters);

    if let Some(level) = config_log_level(config, env::var_os("RUST_LOG").is_some())? {
        builder.filter_level(level);
    }

    builder.init();
    Ok(())
}

fn config_log_level(config: &Config, rust_log_set: bool) -> Result<Option<log::LevelFilter>> {
    let Some(level) = &config.log_level else {
        return Ok(None);
    };
    let level: log::LevelFilter = level
        .parse()
        .with_context(|| format!("Invalid log_level {level:?} in config"))?;
    Ok((!rust_log_set).then_some(level))
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("{message}");
    process::exit(1);
}

fn main() {
    let Some(invocation) = parse_args(env::args_os().skip(1)) else {
        fail(usage());
    };

    // Missing input is reported before config or logging can add output.
    if !invocation.input.is_file() {
        fail(IoError::MissingInput(invocation.input));
    }

    let config = match Config::load_or_default() {
        Ok(config) => config,
        Err(e) => fail(format!("Error: {e}")),
    };

    if let Err(e) = init_logging(&config) {
        fail(format!("Error: {e:#}"));
    }

    log::debug!("Config path: {}", Config::config_path().display());
    log::info!(
        "Converting {} to {}",
        invocation.input.display(),
        invocation.output.display()
    );

    match convert_file(&invocation.input, &invocation.output) {
        Ok(report) => {
            log::info!(
                "Wrote {} HTML lines from {} Markdown lines",
                report.html_lines,
                report.markdown_lines
            );
            if config.report_success {
                println!(
                    "Successfully converted {} to {}",
                    invocation.input.display(),
                    invocation.output.display()
                );
            }
        }
        Err(e @ IoError::MissingInput(_)) => fail(e),
        Err(e) => {
            log::error!("Conversion failed: {e}");
            fail(format!("Error: {e}"));
        }
    }
}

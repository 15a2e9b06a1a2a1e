use anyhow::{Context, Result};
use casekit::cli::output::{self, OutputFormat};
use casekit::{convert_all, convert_all_values, Case, Config, Conversion};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use serde_json::Value;
use std::io::{self, BufRead};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "casekit")]
#[command(version, about = "Convert text between kebab-case, camelCase and dot.case", long_about = None)]
struct Cli {
    /// Text to convert (reads stdin, one input per line, when omitted)
    #[arg(value_name = "TEXT")]
    inputs: Vec<String>,

    /// Target case (kebab, camel, dot)
    #[arg(short, long)]
    case: Option<Case>,

    /// Treat each input as a JSON value; non-string values are rejected
    #[arg(long)]
    json_input: bool,

    /// Output format (text, json)
    #[arg(short = 'o', long)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "casekit", &mut io::stdout());
        return Ok(());
    }

    let config = Config::load(cli.case, cli.format, cli.no_color)?;
    tracing::debug!(?config, "configuration loaded");

    let inputs = if cli.inputs.is_empty() {
        read_stdin_lines()?
    } else {
        cli.inputs
    };

    let case = config.default_case;
    let conversions = if cli.json_input {
        convert_json_inputs(case, inputs)?
    } else {
        let outputs = convert_all(case, &inputs);
        inputs
            .into_iter()
            .zip(outputs)
            .map(|(input, output)| Conversion {
                input,
                result: Ok(output),
            })
            .collect()
    };

    output::print_conversions(case, &conversions, config.colored, &config.format)
        .context("Failed to render output")?;

    let failed = conversions.iter().filter(|c| c.is_err()).count();
    output::print_failure_summary(failed, conversions.len(), config.colored);

    // Exit with appropriate code
    if failed > 0 {
        std::process::exit(1);
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn read_stdin_lines() -> Result<Vec<String>> {
    io::stdin()
        .lock()
        .lines()
        .collect::<io::Result<Vec<_>>>()
        .context("Failed to read stdin")
}

fn convert_json_inputs(case: Case, inputs: Vec<String>) -> Result<Vec<Conversion>> {
    // Blank lines carry no JSON value
    let inputs: Vec<String> = inputs
        .into_iter()
        .filter(|line| !line.trim().is_empty())
        .collect();

    let values = inputs
        .iter()
        .enumerate()
        .map(|(i, raw)| {
            serde_json::from_str::<Value>(raw)
                .with_context(|| format!("Failed to parse JSON input {}: {}", i + 1, raw))
        })
        .collect::<Result<Vec<_>>>()?;

    let results = convert_all_values(case, &values);

    Ok(inputs
        .into_iter()
        .zip(results)
        .map(|(input, result)| Conversion { input, result })
        .collect())
}

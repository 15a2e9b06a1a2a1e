use crate::{Case, Conversion};
use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonResult {
    input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonOutput {
    case: String,
    results: Vec<JsonResult>,
}

pub fn print_conversions(
    case: Case,
    conversions: &[Conversion],
    colored_output: bool,
    format: &OutputFormat,
) -> serde_json::Result<()> {
    match format {
        OutputFormat::Text => {
            print_text_conversions(conversions, colored_output);
            Ok(())
        }
        OutputFormat::Json => {
            println!("{}", render_json(case, conversions)?);
            Ok(())
        }
    }
}

// Converted text goes to stdout one per line; failures go to stderr so
// the output stays pipeable.
fn print_text_conversions(conversions: &[Conversion], colored_output: bool) {
    for conversion in conversions {
        match &conversion.result {
            Ok(output) => println!("{}", output),
            Err(err) => {
                if colored_output {
                    eprintln!("{} {}", "error:".red().bold(), err);
                } else {
                    eprintln!("error: {}", err);
                }
            }
        }
    }
}

pub fn render_json(case: Case, conversions: &[Conversion]) -> serde_json::Result<String> {
    let results = conversions
        .iter()
        .map(|c| match &c.result {
            Ok(output) => JsonResult {
                input: c.input.clone(),
                output: Some(output.clone()),
                error: None,
            },
            Err(err) => JsonResult {
                input: c.input.clone(),
                output: None,
                error: Some(err.to_string()),
            },
        })
        .collect();

    let output = JsonOutput {
        case: case.to_string(),
        results,
    };

    serde_json::to_string_pretty(&output)
}

pub fn print_failure_summary(failed: usize, total: usize, colored: bool) {
    if failed == 0 {
        return;
    }

    let input_word = if total == 1 { "input" } else { "inputs" };
    if colored {
        eprintln!(
            "{} {} of {} {} could not be converted",
            "✗".red().bold(),
            failed.to_string().red().bold(),
            total,
            input_word
        );
    } else {
        eprintln!("✗ {} of {} {} could not be converted", failed, total, input_word);
    }
}

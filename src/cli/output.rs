use crate::Conversion;
use anyhow::Result;
use clap::ValueEnum;
use colored::*;
use serde::Serialize;
use serde_json::Value;

/// How converted inputs are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One converted value per line
    Text,
    /// A pretty-printed array of `{ input, output | error }` objects
    Json,
}

#[derive(Debug, Serialize)]
struct JsonConversion<'a> {
    input: &'a Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<'a> From<&'a Conversion> for JsonConversion<'a> {
    fn from(conversion: &'a Conversion) -> Self {
        match &conversion.result {
            Ok(output) => JsonConversion {
                input: &conversion.input,
                output: Some(output.as_str()),
                error: None,
            },
            Err(e) => JsonConversion {
                input: &conversion.input,
                output: None,
                error: Some(e.to_string()),
            },
        }
    }
}

pub fn print_conversions(
    conversions: &[Conversion],
    colored_output: bool,
    format: &OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            print_text_conversions(conversions, colored_output);
            Ok(())
        }
        OutputFormat::Json => {
            println!("{}", render_json(conversions)?);
            Ok(())
        }
    }
}

fn print_text_conversions(conversions: &[Conversion], colored_output: bool) {
    for (idx, conversion) in conversions.iter().enumerate() {
        match &conversion.result {
            Ok(output) => println!("{}", output),
            Err(e) => {
                let label = if colored_output {
                    "error:".red().bold().to_string()
                } else {
                    "error:".to_string()
                };
                eprintln!("{} input {}: {}", label, idx + 1, e);
            }
        }
    }
}

pub fn render_json(conversions: &[Conversion]) -> Result<String> {
    let entries: Vec<JsonConversion<'_>> = conversions.iter().map(JsonConversion::from).collect();
    Ok(serde_json::to_string_pretty(&entries)?)
}

pub fn print_summary(conversions: &[Conversion], colored: bool) {
    let rejected = conversions.iter().filter(|c| !c.is_ok()).count();
    if rejected == 0 {
        return;
    }

    let input_word = if conversions.len() == 1 { "input" } else { "inputs" };
    if colored {
        eprintln!(
            "{} {} of {} {} rejected",
            "✗".red().bold(),
            rejected.to_string().red().bold(),
            conversions.len(),
            input_word
        );
    } else {
        eprintln!("✗ {} of {} {} rejected", rejected, conversions.len(), input_word);
    }
}

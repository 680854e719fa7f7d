use anyhow::Result;
use casefmt::cli::{input, output};
use casefmt::cli::output::OutputFormat;
use casefmt::{convert_all, Case, Config, Punctuation};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use serde_json::Value;
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "casefmt")]
#[command(version, about = "Convert text to camelCase, kebab-case or dot.case", long_about = None)]
struct Cli {
    /// Text to convert (reads stdin when omitted)
    #[arg(value_name = "INPUTS")]
    inputs: Vec<String>,

    /// Target case (camel, kebab, dot)
    #[arg(short, long)]
    case: Option<Case>,

    /// How to treat punctuation (strip, split); kebab defaults to split, camel and dot to strip
    #[arg(short, long)]
    punctuation: Option<Punctuation>,

    /// Read a stream of JSON values from stdin instead of lines
    #[arg(long, conflicts_with = "inputs")]
    json: bool,

    /// Output format (text, json)
    #[arg(short = 'o', long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Exit with code 0 even if some inputs were rejected
    #[arg(long)]
    no_fail: bool,

    /// Config file to use instead of the global and local ones
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "casefmt", &mut io::stdout());
        return Ok(());
    }

    let config = Config::load(cli.config.as_deref(), cli.case, cli.punctuation)?;

    let inputs = if !cli.inputs.is_empty() {
        cli.inputs.into_iter().map(Value::String).collect()
    } else if cli.json {
        input::read_json_values(io::stdin().lock())?
    } else {
        input::read_lines(io::stdin().lock())?
    };

    let conversions = convert_all(inputs, &config);
    let colored = !cli.no_color;

    output::print_conversions(&conversions, colored, &cli.format)?;
    output::print_summary(&conversions, colored);

    if !cli.no_fail && conversions.iter().any(|c| !c.is_ok()) {
        std::process::exit(1);
    }

    Ok(())
}

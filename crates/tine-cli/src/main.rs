// SPDX-License-Identifier: MIT OR Apache-2.0
//! tine CLI binary - guarded deep reads and coercing helpers for JSON

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use serde_json::Value;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tine_core::{PathExpr, get, try_get};
use tine_ops::{add, ceil_value, eq, is_empty, to_number};
use tracing::debug;

#[derive(Parser)]
#[command(name = "tine")]
#[command(version, about, long_about = None)]
struct Args {
    /// Increase log verbosity (-v debug, -vv trace); overrides RUST_LOG
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Print JSON output on a single line
    #[arg(short = 'c', long, global = true)]
    compact: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Subcommands for tine CLI
#[derive(Subcommand)]
enum Commands {
    /// Resolve a path inside a JSON document
    Get {
        /// Dotted path such as `users.0.name`
        path: String,
        /// JSON file (reads from stdin if not provided)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
        /// Treat PATH as JSON: a dotted string or an array of segments
        #[arg(long = "json-path")]
        json_path: bool,
        /// Value printed when the path does not resolve
        #[arg(short = 'd', long = "default", value_name = "JSON")]
        default: Option<String>,
    },
    /// Coerce a JSON value to a number
    Number {
        /// JSON file; empty input counts as an absent value
        file: Option<PathBuf>,
    },
    /// Add two values after numeric coercion
    Add {
        /// Left operand (JSON, or a bare string)
        #[arg(allow_hyphen_values = true)]
        augend: String,
        /// Right operand (JSON, or a bare string)
        #[arg(allow_hyphen_values = true)]
        addend: String,
    },
    /// Round a value up at a decimal precision
    Ceil {
        /// Number to round (JSON, or a bare string)
        #[arg(allow_hyphen_values = true)]
        number: String,
        /// Decimal places; negative rounds to tens, hundreds, ...
        #[arg(allow_hyphen_values = true)]
        precision: Option<String>,
    },
    /// Report whether a JSON value is empty
    Empty {
        /// JSON file; empty input counts as an absent value
        file: Option<PathBuf>,
    },
    /// Compare two values with SameValueZero
    Eq {
        /// Left operand (JSON, or a bare string)
        #[arg(allow_hyphen_values = true)]
        left: String,
        /// Right operand (JSON, or a bare string)
        #[arg(allow_hyphen_values = true)]
        right: String,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();
}

fn run(args: &Args) -> Result<()> {
    match &args.command {
        Commands::Get {
            path,
            file,
            json_path,
            default,
        } => {
            let doc = parse_json(&read_input(file.as_ref())?)?
                .context("input document is empty")?;
            let default = default.as_deref().map(parse_arg);
            let found = resolve(&doc, path, *json_path, default.as_ref())?;
            write_value(found, args.compact)
        }
        Commands::Number { file } => {
            let value = parse_json(&read_input(file.as_ref())?)?;
            write_line(&format_number(to_number(value.as_ref())))
        }
        Commands::Add { augend, addend } => {
            let sum = add(Some(&parse_arg(augend)), Some(&parse_arg(addend)));
            write_line(&format_number(sum))
        }
        Commands::Ceil { number, precision } => {
            let precision = precision.as_deref().map(parse_arg);
            let rounded = ceil_value(Some(&parse_arg(number)), precision.as_ref());
            write_line(&format_number(rounded))
        }
        Commands::Empty { file } => {
            let value = parse_json(&read_input(file.as_ref())?)?;
            write_line(&is_empty(value.as_ref()).to_string())
        }
        Commands::Eq { left, right } => {
            let same = eq(Some(&parse_arg(left)), Some(&parse_arg(right)));
            write_line(&same.to_string())
        }
    }
}

/// Resolve `path` in `doc`; without a default a miss is an error
fn resolve<'a>(
    doc: &'a Value,
    path: &str,
    json_path: bool,
    default: Option<&'a Value>,
) -> Result<&'a Value> {
    let path_value: Value;
    let expr = if json_path {
        path_value = serde_json::from_str(path)
            .with_context(|| format!("--json-path expects JSON, got '{path}'"))?;
        PathExpr::from_value(&path_value)
    } else {
        PathExpr::from(path)
    };
    debug!(?expr, "resolving");

    match default {
        Some(fallback) => Ok(get(Some(doc), expr, Some(fallback)).unwrap_or(fallback)),
        None => try_get(Some(doc), expr).with_context(|| format!("cannot resolve '{path}'")),
    }
}

/// Arguments are JSON when they parse as JSON and plain strings otherwise
fn parse_arg(arg: &str) -> Value {
    serde_json::from_str(arg).unwrap_or_else(|_| Value::String(arg.to_owned()))
}

/// Blank input is an absent value
fn parse_json(input: &str) -> Result<Option<Value>> {
    if input.trim().is_empty() {
        return Ok(None);
    }
    let value = serde_json::from_str(input).context("input is not valid JSON")?;
    Ok(Some(value))
}

fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_owned()
    } else if n.is_infinite() {
        let spelled = if n > 0.0 { "Infinity" } else { "-Infinity" };
        spelled.to_owned()
    } else {
        n.to_string()
    }
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    if let Some(p) = path {
        fs::read_to_string(p).with_context(|| format!("failed to read {}", p.display()))
    } else {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .context("failed to read stdin")?;
        Ok(input)
    }
}

fn write_value(value: &Value, compact: bool) -> Result<()> {
    let output = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    write_line(&output)
}

fn write_line(output: &str) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    handle.write_all(output.as_bytes())?;
    handle.write_all(b"\n")?;
    Ok(())
}

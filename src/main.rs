use anyhow::Result;
use clap::{Parser, Subcommand};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, error};

use dotconf::ConfigStore;

/// Read and write dot-path keys in a JSON config file
#[derive(Parser)]
#[command(name = "dotconf")]
#[command(about = "Dot-path addressed JSON configuration store", long_about = None)]
struct Cli {
    /// Config file to operate on
    #[arg(short = 'f', long, global = true, default_value = ConfigStore::DEFAULT_FILE)]
    file: PathBuf,

    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read a value
    Get {
        /// Dot-separated key path, e.g. app.name
        key: String,

        /// Value to print when the key is absent (exits non-zero otherwise)
        #[arg(long)]
        default: Option<String>,
    },
    /// Write a value and persist the whole document
    Set {
        /// Dot-separated key path, e.g. app.name
        key: String,

        /// Parsed as JSON when possible, stored as a plain string otherwise
        value: String,
    },
    /// Print the whole document as pretty JSON
    Show,
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .with_target(cli.verbose >= 2)
        .init();

    debug!("operating on config file {:?}", cli.file);

    let result = match cli.command {
        Commands::Get { key, default } => run_get(&cli.file, &key, default),
        Commands::Set { key, value } => run_set(&cli.file, &key, value),
        Commands::Show => run_show(&cli.file),
    };

    if let Err(e) = result {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run_get(file: &Path, key: &str, default: Option<String>) -> Result<()> {
    let store = ConfigStore::open(file);
    match store.get(key) {
        Some(value) => print_value(value)?,
        None => match default {
            Some(fallback) => println!("{fallback}"),
            None => anyhow::bail!("no value at {key:?} in {file:?}"),
        },
    }
    Ok(())
}

fn run_set(file: &Path, key: &str, raw: String) -> Result<()> {
    let mut store = ConfigStore::open(file);
    store.set(key, parse_value(raw))?;
    Ok(())
}

fn run_show(file: &Path) -> Result<()> {
    let store = ConfigStore::open(file);
    println!("{}", serde_json::to_string_pretty(store.tree())?);
    Ok(())
}

/// Bare strings print unquoted so `dotconf get` composes in shell pipelines.
fn print_value(value: &Value) -> Result<()> {
    match value {
        Value::String(s) => println!("{s}"),
        other => println!("{}", serde_json::to_string_pretty(other)?),
    }
    Ok(())
}

/// `set port 8080` stores a number, `set name karl` stores a string.
fn parse_value(raw: String) -> Value {
    serde_json::from_str(&raw).unwrap_or(Value::String(raw))
}

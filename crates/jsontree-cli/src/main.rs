//! `jsontree` CLI: project JSON documents into native values from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Convert a document (stdin → stdout); numbers and booleans become strings
//! echo '{"id":7,"tags":["a"]}' | jsontree convert
//!
//! # Field names of a top-level object, in document order
//! jsontree keys -i message.json
//!
//! # Converted field values, written to a file
//! jsontree values -i message.json -o values.json
//!
//! # Flat string form of a document (strings unquoted, containers as JSON)
//! echo '"plain"' | jsontree stringify
//!
//! # Shape of the top-level node
//! echo '[1,2]' | jsontree shape
//!
//! # Show parse fallbacks and other debug events
//! jsontree --verbose convert -i maybe-json.txt
//! ```
//!
//! Input that is not valid JSON is treated as a plain string, never rejected.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use jsontree_core::{JsonNode, TreeError};
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "jsontree",
    version,
    about = "Project JSON documents into ordered native values"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log debug events (e.g. parse fallbacks) to stderr; RUST_LOG overrides
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Args)]
struct Io {
    /// Input file (reads from stdin if omitted)
    #[arg(short, long)]
    input: Option<String>,
    /// Output file (writes to stdout if omitted)
    #[arg(short, long)]
    output: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert the whole document into native values (pretty JSON output)
    Convert(Io),
    /// List the field names of a top-level object
    Keys(Io),
    /// List the converted field values of a top-level object
    Values(Io),
    /// Print the flat string form of the document
    Stringify(Io),
    /// Print the shape of the top-level node
    Shape(Io),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let (io, output) = match &cli.command {
        Commands::Convert(io) => {
            let node = read_node(io)?;
            let value = jsontree_core::convert(Some(&node));
            (io, serde_json::to_string_pretty(&value)?)
        }
        Commands::Keys(io) => {
            let node = read_node(io)?;
            let keys = jsontree_core::keys(&node).map_err(unprocessable)?;
            (io, serde_json::to_string_pretty(&keys)?)
        }
        Commands::Values(io) => {
            let node = read_node(io)?;
            let values = jsontree_core::values(&node).map_err(unprocessable)?;
            (io, serde_json::to_string_pretty(&values)?)
        }
        Commands::Stringify(io) => {
            let node = read_node(io)?;
            (io, jsontree_core::stringify_leaf(Some(&node)))
        }
        Commands::Shape(io) => {
            let node = read_node(io)?;
            (io, node.shape().to_string())
        }
    };

    write_output(io.output.as_deref(), &output)
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn unprocessable(err: TreeError) -> anyhow::Error {
    anyhow::Error::new(err).context("Unprocessable input")
}

fn read_node(io: &Io) -> Result<JsonNode> {
    let raw = read_input(io.input.as_deref())?;
    Ok(jsontree_core::parse_bytes(&raw))
}

fn read_input(path: Option<&str>) -> Result<Vec<u8>> {
    match path {
        Some(path) => std::fs::read(path).with_context(|| format!("Failed to read file: {}", path)),
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}

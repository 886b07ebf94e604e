//! EDDN command-line tool: decode, validate, and inspect captured EDDN
//! messages.
//!
//! # Command overview
//!
//! ```text
//! eddn <COMMAND> [OPTIONS]
//!
//! Commands:
//!   decode     Print the decoded record as JSON
//!   validate   Check that a message decodes, with a ✓/✗ report
//!   inspect    Print the envelope and routing decision only
//!   help       Print help information
//!
//! Global options:
//!   -v, --verbose    Log decoder steps to stderr
//!   -h, --help       Print help
//!   -V, --version    Print version
//! ```
//!
//! Every command takes a path, or `-` for stdin. Input is the raw
//! zlib-compressed message body as received from the relay; pass `--raw`
//! for messages that were stored already inflated.
//!
//! # Exit codes
//!
//! | Code | Meaning                                       |
//! |------|-----------------------------------------------|
//! | 0    | Success                                       |
//! | 1    | Error (I/O failure, undecodable message, ...) |
//!
//! All error details are written to stderr so stdout can be piped cleanly.

use std::fs;
use std::io::{self, Read as _};
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use eddn_decoder::config::DEFAULT_MAX_DECOMPRESSED_SIZE;
use eddn_decoder::{DecodeError, DecoderConfig, EddnDecoder};
use eddn_types::DecodedMessage;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod cmd_decode;
mod cmd_inspect;
mod cmd_validate;

// ── CLI root ──────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "eddn", version, about = "EDDN message decoder")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log decoder steps (routing, event dispatch) to stderr.
    ///
    /// `RUST_LOG` takes precedence when set.
    #[arg(short, long, global = true)]
    verbose: bool,
}

// ── Sub-commands ──────────────────────────────────────────────────────────────

#[derive(Subcommand)]
enum Commands {
    /// Decode a message and print the typed record as JSON.
    Decode(DecodeArgs),
    /// Check that a message decodes.
    Validate(ValidateArgs),
    /// Print the envelope and routing decision without decoding the payload.
    Inspect(InspectArgs),
}

// ── Argument structs ──────────────────────────────────────────────────────────

/// Input options shared by every command.
#[derive(clap::Args)]
pub struct InputArgs {
    /// Message file, or `-` to read stdin.
    pub file: PathBuf,

    /// The input is already-inflated JSON rather than a zlib body.
    #[arg(long)]
    pub raw: bool,

    /// Maximum inflated size in bytes.
    #[arg(long, default_value_t = DEFAULT_MAX_DECOMPRESSED_SIZE)]
    pub max_size: usize,
}

impl InputArgs {
    /// Read the input bytes from the file or stdin.
    ///
    /// # Errors
    ///
    /// Returns an error if the file or stdin cannot be read.
    pub fn read(&self) -> Result<Vec<u8>> {
        read_input(&self.file)
    }

    /// Build a decoder from the command-line limits.
    pub fn decoder(&self) -> EddnDecoder {
        EddnDecoder::with_config(DecoderConfig {
            max_decompressed_size: self.max_size,
        })
    }

    /// Turn input bytes into envelope JSON, inflating unless `--raw`.
    ///
    /// # Errors
    ///
    /// Returns the decoder's decompression error.
    pub fn inflate(&self, bytes: Vec<u8>) -> Result<Vec<u8>, DecodeError> {
        if self.raw {
            Ok(bytes)
        } else {
            self.decoder().inflate(&bytes)
        }
    }

    /// Decode input bytes, honouring `--raw`.
    ///
    /// # Errors
    ///
    /// Returns whatever the decoder rejects the message with.
    pub fn decode(&self, bytes: &[u8]) -> Result<DecodedMessage, DecodeError> {
        let decoder = self.decoder();
        if self.raw {
            decoder.decode_json(bytes)
        } else {
            decoder.decode_message(bytes)
        }
    }
}

/// Arguments for `eddn decode`.
///
/// ```text
/// ┌─────────────┬──────────────────────────────────────────────┐
/// │ Flag        │ Effect                                       │
/// ├─────────────┼──────────────────────────────────────────────┤
/// │ --raw       │ Input is plain JSON, skip zlib inflation     │
/// │ --max-size  │ Inflated size limit (default 8 MiB)          │
/// │ --compact   │ Single-line JSON instead of pretty-printed   │
/// └─────────────┴──────────────────────────────────────────────┘
/// ```
#[derive(clap::Args)]
pub struct DecodeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Print single-line JSON.
    #[arg(long)]
    pub compact: bool,
}

/// Arguments for `eddn validate`.
#[derive(clap::Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

/// Arguments for `eddn inspect`.
#[derive(clap::Args)]
pub struct InspectArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Decode(args) => cmd_decode::run(&args),
        Commands::Validate(args) => cmd_validate::run(&args),
        Commands::Inspect(args) => cmd_inspect::run(&args),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();
}

fn read_input(path: &Path) -> Result<Vec<u8>> {
    if path == Path::new("-") {
        let mut buf = Vec::new();
        io::stdin()
            .read_to_end(&mut buf)
            .context("cannot read stdin")?;
        return Ok(buf);
    }
    fs::read(path).with_context(|| format!("cannot read {}", path.display()))
}

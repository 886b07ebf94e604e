//! Implementation of `eddn decode`.
//!
//! Decodes one message and prints the [`DecodedMessage`] as JSON on
//! stdout. Payloads are externally tagged by variant, so a journal scan
//! of a star prints as:
//!
//! ```text
//! {
//!   "schema_ref": "http://schemas.elite-markets.net/eddn/journal/1",
//!   "header": { ... },
//!   "payload": { "Journal": { "ScanStar": { "StarType": "K", ... } } }
//! }
//! ```

use std::io::{self, Write as _};

use anyhow::{Context, Result};
use eddn_types::DecodedMessage;

use crate::DecodeArgs;

/// Run the `eddn decode` command.
///
/// # Errors
///
/// Returns an error if the input cannot be read, the message does not
/// decode, or stdout cannot be written.
pub fn run(args: &DecodeArgs) -> Result<()> {
    let bytes = args.input.read()?;
    let decoded = args
        .input
        .decode(&bytes)
        .with_context(|| format!("failed to decode {}", args.input.file.display()))?;

    let rendered = render(&decoded, args.compact)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{rendered}").context("cannot write to stdout")?;
    Ok(())
}

fn render(decoded: &DecodedMessage, compact: bool) -> Result<String> {
    let rendered = if compact {
        serde_json::to_string(decoded)
    } else {
        serde_json::to_string_pretty(decoded)
    };
    rendered.context("cannot serialize decoded message")
}

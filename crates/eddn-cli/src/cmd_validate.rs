//! Implementation of `eddn validate`.
//!
//! Runs a full decode and reports either a series of success checkmarks
//! (`✓`) or a single diagnostic line (`✗`). Exits with code 0 on a
//! decodable message and code 1 otherwise.
//!
//! # Success output
//!
//! ```text
//! ✓ Envelope: http://schemas.elite-markets.net/eddn/journal/1
//! ✓ Sender: EDMC 2.3.0
//! ✓ Payload: journal (Scan)
//! ```
//!
//! # Failure output
//!
//! ```text
//! ✗ unsupported version: commodity version 2 is not supported
//! ```

use anyhow::{Result, anyhow};
use eddn_decoder::DecodeError;
use eddn_types::{DecodedMessage, Payload};

use crate::ValidateArgs;

/// Run the `eddn validate` command.
///
/// # Errors
///
/// Returns an error if the input cannot be read or the message fails
/// any decode stage.
pub fn run(args: &ValidateArgs) -> Result<()> {
    let bytes = args.input.read()?;

    match args.input.decode(&bytes) {
        Ok(decoded) => {
            for line in report(&decoded) {
                println!("✓ {line}");
            }
            Ok(())
        }
        Err(e) => {
            println!("✗ {}", diagnostic(&e));
            Err(anyhow!("validation failed"))
        }
    }
}

fn report(decoded: &DecodedMessage) -> [String; 3] {
    let payload = match &decoded.payload {
        Payload::Journal(event) => format!("journal ({})", event.event_name()),
        other => other.family().to_string(),
    };
    [
        format!("Envelope: {}", decoded.schema_ref),
        format!(
            "Sender: {} {}",
            decoded.header.software_name, decoded.header.software_version
        ),
        format!("Payload: {payload}"),
    ]
}

/// Prefix each error with its taxonomy kind so the report is greppable.
fn diagnostic(e: &DecodeError) -> String {
    format!("{}: {e}", e.kind())
}

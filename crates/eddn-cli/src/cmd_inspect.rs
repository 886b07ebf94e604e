//! Implementation of `eddn inspect`.
//!
//! Parses only the envelope and reports where the router would send it,
//! without touching the payload. Handy when a message fails to decode
//! and you want to know whether it even reached a decoder.
//!
//! ```text
//! Schema:    http://schemas.elite-markets.net/eddn/commodity/2
//! Family:    commodity (version 2)
//! Route:     deprecated version, not decoded
//! Software:  EDMC 2.3.0
//! Uploader:  cmdr
//! Gateway:   2017-03-01T12:00:00Z
//! Payload:   1834 bytes
//! Limit:     8388608 bytes inflated
//! ```

use anyhow::{Context, Result};
use eddn_decoder::router::{self, Route};
use eddn_decoder::{Envelope, parse_envelope};
use eddn_types::SchemaRef;
use eddn_types::schema::is_test_traffic;

use crate::InspectArgs;

/// Run the `eddn inspect` command.
///
/// # Errors
///
/// Returns an error if the input cannot be read, does not inflate, or
/// is not an envelope.
pub fn run(args: &InspectArgs) -> Result<()> {
    let bytes = args.input.read()?;
    let json = args
        .input
        .inflate(bytes)
        .with_context(|| format!("cannot inflate {}", args.input.file.display()))?;
    let envelope = parse_envelope(&json)
        .with_context(|| format!("cannot parse envelope of {}", args.input.file.display()))?;

    let limit = args.input.decoder().config().max_decompressed_size;
    for (label, value) in describe(&envelope, limit) {
        println!("{label:<10} {value}");
    }
    Ok(())
}

fn describe(envelope: &Envelope<'_>, limit: usize) -> Vec<(&'static str, String)> {
    let schema_ref = envelope.schema_ref.as_str();
    let family = match SchemaRef::parse(schema_ref) {
        Some(parsed) if parsed.known_family().is_some() => {
            format!("{} (version {})", parsed.family, parsed.version)
        }
        Some(parsed) => format!("{} (version {}, unknown family)", parsed.family, parsed.version),
        None => "unrecognised identifier".to_string(),
    };
    let route = match router::lookup(schema_ref) {
        Some(Route::Decode(family)) => format!("decoded as {family}"),
        Some(Route::Deprecated { .. }) => "deprecated version, not decoded".to_string(),
        None if is_test_traffic(schema_ref) => "test traffic, not decoded".to_string(),
        None => "unsupported schema, not decoded".to_string(),
    };
    let header = &envelope.header;
    let payload = envelope
        .message
        .map_or_else(|| "missing".to_string(), |raw| format!("{} bytes", raw.get().len()));

    vec![
        ("Schema:", schema_ref.to_string()),
        ("Family:", family),
        ("Route:", route),
        (
            "Software:",
            format!("{} {}", header.software_name, header.software_version),
        ),
        ("Uploader:", header.uploader_id.clone()),
        (
            "Gateway:",
            header.gateway_timestamp.clone().unwrap_or_else(|| "-".to_string()),
        ),
        ("Payload:", payload),
        ("Limit:", format!("{limit} bytes inflated")),
    ]
}

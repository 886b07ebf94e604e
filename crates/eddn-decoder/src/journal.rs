use eddn_types::JournalEvent;
use eddn_types::journal::{DOCKED, FSD_JUMP, SCAN, STAR_TYPE_KEY};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::DecodeError;

/// Resolve a journal payload into its concrete event.
///
/// Journal messages carry a second type tag inside the payload, so
/// dispatch happens in two steps:
///
///   1. **Sniff**: parse into a generic JSON object and read `event`.
///   2. **Decode**: pick the record from the event name (and, for `Scan`,
///      from [`is_star_scan`]) and deserialize straight into it.
///
/// # Errors
///
/// - [`DecodeError::InvalidJournalPayload`] if the payload is not an
///   object or has no string `event`.
/// - [`DecodeError::UnrecognizedEvent`] for any other event name.
/// - [`DecodeError::PayloadDecode`] if the chosen record rejects a field.
pub fn dispatch(raw: &str) -> Result<JournalEvent, DecodeError> {
    let value: Value = serde_json::from_str(raw).map_err(|source| DecodeError::PayloadDecode {
        target: "journal",
        source,
    })?;
    let Value::Object(fields) = value else {
        return Err(DecodeError::InvalidJournalPayload {
            reason: "payload is not an object",
        });
    };
    dispatch_fields(fields)
}

/// Resolve an already-sniffed journal object. See [`dispatch`].
///
/// # Errors
///
/// As for [`dispatch`], minus the not-an-object case.
pub fn dispatch_fields(fields: Map<String, Value>) -> Result<JournalEvent, DecodeError> {
    let event = match fields.get("event") {
        Some(Value::String(name)) => name.clone(),
        Some(_) => {
            return Err(DecodeError::InvalidJournalPayload {
                reason: "event is not a string",
            });
        }
        None => {
            return Err(DecodeError::InvalidJournalPayload {
                reason: "missing event",
            });
        }
    };

    debug!(event = %event, "dispatching journal event");

    match event.as_str() {
        FSD_JUMP => Ok(JournalEvent::FsdJump(decode_event("FSDJump", fields)?)),
        DOCKED => Ok(JournalEvent::Docked(decode_event("Docked", fields)?)),
        SCAN if is_star_scan(&fields) => {
            Ok(JournalEvent::ScanStar(decode_event("Scan (star)", fields)?))
        }
        SCAN => Ok(JournalEvent::ScanPlanet(decode_event("Scan (planet)", fields)?)),
        _ => Err(DecodeError::UnrecognizedEvent { event }),
    }
}

/// A `Scan` is of a star exactly when it carries `StarType`.
///
/// The event name is the same for stars and planets; only the fields
/// differ. Presence is what counts, not the value, so even
/// `"StarType": null` selects the star record (which then rejects it).
#[must_use]
pub fn is_star_scan(fields: &Map<String, Value>) -> bool {
    fields.contains_key(STAR_TYPE_KEY)
}

fn decode_event<T: DeserializeOwned>(
    target: &'static str,
    fields: Map<String, Value>,
) -> Result<T, DecodeError> {
    serde_json::from_value(Value::Object(fields))
        .map_err(|source| DecodeError::PayloadDecode { target, source })
}

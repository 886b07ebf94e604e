use eddn_types::schema::{self, SchemaFamily, SchemaRef};
use eddn_types::{Blackmarket, Commodity, Outfitting, Payload, Shipyard};
use serde::de::DeserializeOwned;
use serde_json::value::RawValue;
use tracing::debug;

use crate::error::DecodeError;
use crate::journal;

/// What the router decided for a schema identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    /// Decode the payload as this family's current record.
    Decode(SchemaFamily),
    /// Known family, but a version this decoder deliberately skips.
    Deprecated { family: SchemaFamily, version: u32 },
}

/// The routing table: every identifier the decoder recognises.
///
/// ```text
/// ┌──────────────────┬────────────────────────────┐
/// │ Identifier       │ Route                      │
/// ├──────────────────┼────────────────────────────┤
/// │ commodity/1      │ Deprecated                 │
/// │ commodity/2      │ Deprecated                 │
/// │ commodity/3      │ Decode(Commodity)          │
/// │ journal/1        │ Decode(Journal)            │
/// │ outfitting/1     │ Deprecated                 │
/// │ outfitting/2     │ Decode(Outfitting)         │
/// │ blackmarket/1    │ Decode(Blackmarket)        │
/// │ shipyard/1       │ Deprecated                 │
/// │ shipyard/2       │ Decode(Shipyard)           │
/// └──────────────────┴────────────────────────────┘
/// ```
///
/// Anything not listed, including every `/test` identifier, is
/// unsupported. The table is immutable and shared by all callers.
pub const ROUTES: &[(&str, Route)] = &[
    (
        "http://schemas.elite-markets.net/eddn/commodity/1",
        Route::Deprecated { family: SchemaFamily::Commodity, version: 1 },
    ),
    (
        "http://schemas.elite-markets.net/eddn/commodity/2",
        Route::Deprecated { family: SchemaFamily::Commodity, version: 2 },
    ),
    (
        "http://schemas.elite-markets.net/eddn/commodity/3",
        Route::Decode(SchemaFamily::Commodity),
    ),
    (
        "http://schemas.elite-markets.net/eddn/journal/1",
        Route::Decode(SchemaFamily::Journal),
    ),
    (
        "http://schemas.elite-markets.net/eddn/outfitting/1",
        Route::Deprecated { family: SchemaFamily::Outfitting, version: 1 },
    ),
    (
        "http://schemas.elite-markets.net/eddn/outfitting/2",
        Route::Decode(SchemaFamily::Outfitting),
    ),
    (
        "http://schemas.elite-markets.net/eddn/blackmarket/1",
        Route::Decode(SchemaFamily::Blackmarket),
    ),
    (
        "http://schemas.elite-markets.net/eddn/shipyard/1",
        Route::Deprecated { family: SchemaFamily::Shipyard, version: 1 },
    ),
    (
        "http://schemas.elite-markets.net/eddn/shipyard/2",
        Route::Decode(SchemaFamily::Shipyard),
    ),
];

/// Look up the route for a schema identifier.
///
/// # Errors
///
/// - [`DecodeError::UnsupportedSchema`] if the identifier is not in
///   [`ROUTES`] (test traffic included).
/// - [`DecodeError::UnsupportedVersion`] if it names a deprecated version.
pub fn route(schema_ref: &str) -> Result<SchemaFamily, DecodeError> {
    match lookup(schema_ref) {
        Some(Route::Decode(family)) => Ok(family),
        Some(Route::Deprecated { family, version }) => {
            debug!(schema_ref, %family, version, "skipping deprecated schema version");
            Err(DecodeError::UnsupportedVersion { family, version })
        }
        None => {
            if schema::is_test_traffic(schema_ref) {
                debug!(schema_ref, "dropping test traffic");
            } else {
                debug!(
                    schema_ref,
                    family = SchemaRef::parse(schema_ref).map(|s| s.family),
                    "no decoder for schema"
                );
            }
            Err(DecodeError::UnsupportedSchema {
                schema_ref: schema_ref.to_string(),
            })
        }
    }
}

/// Exact-match table lookup without any logging or error construction.
#[must_use]
pub fn lookup(schema_ref: &str) -> Option<Route> {
    ROUTES
        .iter()
        .find(|(id, _)| *id == schema_ref)
        .map(|(_, route)| *route)
}

/// Route `schema_ref` and decode `raw` into the matching payload.
///
/// # Errors
///
/// Any error from [`route`] or [`decode_payload`].
pub fn resolve(schema_ref: &str, raw: Option<&RawValue>) -> Result<Payload, DecodeError> {
    let family = route(schema_ref)?;
    debug!(schema_ref, %family, "routed message");
    decode_payload(family, raw)
}

/// Decode a raw payload into the record for `family`.
///
/// A missing payload is decoded as JSON `null`, which no record accepts,
/// so it surfaces as the same error a mistyped payload would.
///
/// # Errors
///
/// - [`DecodeError::PayloadDecode`] if the payload does not match the
///   record's fields.
/// - Any journal dispatch error for [`SchemaFamily::Journal`].
pub fn decode_payload(family: SchemaFamily, raw: Option<&RawValue>) -> Result<Payload, DecodeError> {
    let json = raw.map_or("null", RawValue::get);
    let payload = match family {
        SchemaFamily::Commodity => Payload::Commodity(decode_record::<Commodity>("commodity", json)?),
        SchemaFamily::Journal => Payload::Journal(journal::dispatch(json)?),
        SchemaFamily::Outfitting => {
            Payload::Outfitting(decode_record::<Outfitting>("outfitting", json)?)
        }
        SchemaFamily::Blackmarket => {
            Payload::Blackmarket(decode_record::<Blackmarket>("blackmarket", json)?)
        }
        SchemaFamily::Shipyard => Payload::Shipyard(decode_record::<Shipyard>("shipyard", json)?),
    };
    Ok(payload)
}

fn decode_record<T: DeserializeOwned>(target: &'static str, json: &str) -> Result<T, DecodeError> {
    serde_json::from_str(json).map_err(|source| DecodeError::PayloadDecode { target, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://schemas.elite-markets.net/eddn/";

    fn id(path: &str) -> String {
        format!("{BASE}{path}")
    }

    #[test]
    fn current_versions_route_to_their_family() {
        let cases = [
            ("commodity/3", SchemaFamily::Commodity),
            ("journal/1", SchemaFamily::Journal),
            ("outfitting/2", SchemaFamily::Outfitting),
            ("blackmarket/1", SchemaFamily::Blackmarket),
            ("shipyard/2", SchemaFamily::Shipyard),
        ];
        for (path, family) in cases {
            assert_eq!(route(&id(path)).unwrap(), family, "route for {path}");
        }
    }

    #[test]
    fn deprecated_versions_report_family_and_version() {
        let cases = [
            ("commodity/1", SchemaFamily::Commodity, 1),
            ("commodity/2", SchemaFamily::Commodity, 2),
            ("outfitting/1", SchemaFamily::Outfitting, 1),
            ("shipyard/1", SchemaFamily::Shipyard, 1),
        ];
        for (path, expected_family, expected_version) in cases {
            match route(&id(path)) {
                Err(DecodeError::UnsupportedVersion { family, version }) => {
                    assert_eq!(family, expected_family);
                    assert_eq!(version, expected_version);
                }
                other => panic!("expected UnsupportedVersion for {path}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_traffic_is_unsupported() {
        for path in [
            "commodity/3/test",
            "journal/1/test",
            "outfitting/2/test",
            "blackmarket/1/test",
            "shipyard/2/test",
        ] {
            assert!(
                matches!(route(&id(path)), Err(DecodeError::UnsupportedSchema { .. })),
                "{path} must not be decoded"
            );
        }
    }

    #[test]
    fn unknown_identifiers_are_unsupported() {
        for schema_ref in [
            id("commodity/4"),
            id("navroute/1"),
            "https://eddn.edcd.io/schemas/commodity/3".to_string(),
            String::new(),
        ] {
            match route(&schema_ref) {
                Err(DecodeError::UnsupportedSchema { schema_ref: reported }) => {
                    assert_eq!(reported, schema_ref);
                }
                other => panic!("expected UnsupportedSchema, got {other:?}"),
            }
        }
    }

    #[test]
    fn lookup_is_exact_match() {
        assert!(lookup(&id("commodity/3")).is_some());
        assert!(lookup(&format!("{} ", id("commodity/3"))).is_none());
        assert!(lookup(&id("Commodity/3")).is_none());
    }

    #[test]
    fn table_has_no_duplicate_identifiers() {
        for (i, (a, _)) in ROUTES.iter().enumerate() {
            assert!(
                ROUTES[i + 1..].iter().all(|(b, _)| a != b),
                "{a} listed twice"
            );
        }
    }

    #[test]
    fn payload_decode_names_target() {
        let raw = RawValue::from_string(r#"{"systemName": "Sol"}"#.to_string()).unwrap();
        match decode_payload(SchemaFamily::Shipyard, Some(&*raw)) {
            Err(DecodeError::PayloadDecode { target, .. }) => assert_eq!(target, "shipyard"),
            other => panic!("expected PayloadDecode, got {other:?}"),
        }
    }

    #[test]
    fn missing_payload_fails_as_payload_decode() {
        let result = decode_payload(SchemaFamily::Outfitting, None);
        assert!(matches!(result, Err(DecodeError::PayloadDecode { .. })));
    }
}

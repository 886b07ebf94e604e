use eddn_types::Header;
use serde::{Deserialize, Deserializer};
use serde_json::value::RawValue;

use crate::error::DecodeError;

/// The outer wrapper of a feed message, with the payload left unparsed.
///
/// ```text
/// {
///   "$schemaRef": "http://schemas.elite-markets.net/eddn/commodity/3",
///   "header":     { "softwareName": ..., "uploaderID": ... },
///   "message":    { ... }        ← kept as raw JSON until routed
/// }
/// ```
///
/// The payload is borrowed from the decompressed buffer as a
/// [`RawValue`]. Which record it should become is only known once the
/// schema identifier has been looked up, so nothing is parsed speculatively.
#[derive(Debug, Deserialize)]
pub struct Envelope<'a> {
    #[serde(rename = "$schemaRef")]
    pub schema_ref: String,

    /// Sender metadata. An absent or `null` header decodes as
    /// [`Header::default`].
    #[serde(default, deserialize_with = "null_as_default")]
    pub header: Header,

    /// The raw payload. `None` when the message key is missing; that is
    /// reported later, as a payload failure, so routing outcomes for
    /// unsupported schemas are not masked by it.
    #[serde(borrow, default)]
    pub message: Option<&'a RawValue>,
}

/// Parse the envelope of a decompressed message.
///
/// # Errors
///
/// Returns [`DecodeError::MalformedEnvelope`] if the bytes are not JSON,
/// the top-level value is not an object, or `$schemaRef` is missing or
/// not a string.
pub fn parse_envelope(bytes: &[u8]) -> Result<Envelope<'_>, DecodeError> {
    serde_json::from_slice(bytes).map_err(DecodeError::MalformedEnvelope)
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_envelope_and_keeps_payload_raw() {
        let bytes = br#"{
            "$schemaRef": "http://schemas.elite-markets.net/eddn/shipyard/2",
            "header": {"softwareName": "EDMC", "softwareVersion": "2.3", "uploaderID": "u1"},
            "message": {"ships": ["Eagle"]}
        }"#;

        let envelope = parse_envelope(bytes).unwrap();
        assert_eq!(
            envelope.schema_ref,
            "http://schemas.elite-markets.net/eddn/shipyard/2"
        );
        assert_eq!(envelope.header.uploader_id, "u1");
        assert_eq!(envelope.message.unwrap().get(), r#"{"ships": ["Eagle"]}"#);
    }

    #[test]
    fn missing_header_and_message_are_tolerated() {
        let envelope = parse_envelope(br#"{"$schemaRef": "s"}"#).unwrap();
        assert_eq!(envelope.header, Header::default());
        assert!(envelope.message.is_none());

        let envelope = parse_envelope(br#"{"$schemaRef": "s", "header": null}"#).unwrap();
        assert_eq!(envelope.header, Header::default());
    }

    #[test]
    fn mistyped_header_is_malformed() {
        let result = parse_envelope(br#"{"$schemaRef": "s", "header": "EDMC"}"#);
        assert!(matches!(result, Err(DecodeError::MalformedEnvelope(_))));
    }

    #[test]
    fn missing_schema_ref_is_malformed() {
        let result = parse_envelope(br#"{"header": {}, "message": {}}"#);
        assert!(matches!(result, Err(DecodeError::MalformedEnvelope(_))));
    }

    #[test]
    fn non_string_schema_ref_is_malformed() {
        let result = parse_envelope(br#"{"$schemaRef": 3, "message": {}}"#);
        assert!(matches!(result, Err(DecodeError::MalformedEnvelope(_))));
    }

    #[test]
    fn non_object_and_garbage_are_malformed() {
        for bytes in [&b"[1, 2, 3]"[..], b"\"text\"", b"{\"$schemaRef\": ", b"\xff\xfe"] {
            assert!(matches!(
                parse_envelope(bytes),
                Err(DecodeError::MalformedEnvelope(_))
            ));
        }
    }
}

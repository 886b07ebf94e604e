use eddn_types::DecodedMessage;
use tracing::debug;

use crate::config::DecoderConfig;
use crate::decompression;
use crate::envelope::parse_envelope;
use crate::error::DecodeError;
use crate::router;

/// Synchronous EDDN decoder: one compressed message in, one typed record
/// (or typed error) out.
///
/// Decoding proceeds in four steps:
///
///   1. **Decompress**: inflate the zlib body, bounded by
///      [`DecoderConfig::max_decompressed_size`].
///   2. **Envelope**: parse `$schemaRef` and `header`, keeping the
///      `message` payload as raw JSON.
///   3. **Route**: exact-match the identifier against
///      [`router::ROUTES`]. Unknown, test and deprecated identifiers stop
///      here.
///   4. **Payload**: deserialize the raw payload into the routed record.
///      Journal payloads go through a second dispatch on their `event`.
///
/// The decoder holds nothing but its configuration, so one instance can
/// be shared across threads decoding different messages.
///
/// # Example
///
/// ```rust
/// use std::io::Write;
///
/// use eddn_decoder::EddnDecoder;
/// use eddn_types::Payload;
/// use flate2::{Compression, write::ZlibEncoder};
///
/// let json = br#"{
///     "$schemaRef": "http://schemas.elite-markets.net/eddn/shipyard/2",
///     "header": {"softwareName": "EDMC", "softwareVersion": "2.3", "uploaderID": "u"},
///     "message": {"systemName": "Sol", "stationName": "Galileo",
///                 "timestamp": "2017-03-01T12:00:00Z", "ships": ["Eagle"]}
/// }"#;
/// let mut enc = ZlibEncoder::new(Vec::new(), Compression::default());
/// enc.write_all(json).unwrap();
/// let compressed = enc.finish().unwrap();
///
/// let decoded = EddnDecoder::decode(&compressed).unwrap();
/// assert!(matches!(decoded.payload, Payload::Shipyard(_)));
/// ```
#[derive(Clone, Debug, Default)]
pub struct EddnDecoder {
    config: DecoderConfig,
}

impl EddnDecoder {
    #[must_use]
    pub fn with_config(config: DecoderConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decode one compressed message with the default configuration.
    ///
    /// # Errors
    ///
    /// See [`decode_message`](Self::decode_message).
    pub fn decode(compressed: &[u8]) -> Result<DecodedMessage, DecodeError> {
        Self::default().decode_message(compressed)
    }

    /// Decode one compressed message.
    ///
    /// # Errors
    ///
    /// - [`DecodeError::DecompressFailed`] / [`DecodeError::DecompressionBomb`]
    ///   if the body does not inflate cleanly.
    /// - [`DecodeError::MalformedEnvelope`] if the inflated bytes are not
    ///   an envelope.
    /// - [`DecodeError::UnsupportedSchema`] / [`DecodeError::UnsupportedVersion`]
    ///   if the identifier is not decoded.
    /// - [`DecodeError::PayloadDecode`], [`DecodeError::InvalidJournalPayload`],
    ///   [`DecodeError::UnrecognizedEvent`] if the payload does not resolve.
    pub fn decode_message(&self, compressed: &[u8]) -> Result<DecodedMessage, DecodeError> {
        let json = self.inflate(compressed)?;
        self.decode_json(&json)
    }

    /// Inflate a message body without decoding it.
    ///
    /// # Errors
    ///
    /// [`DecodeError::DecompressFailed`] or [`DecodeError::DecompressionBomb`].
    pub fn inflate(&self, compressed: &[u8]) -> Result<Vec<u8>, DecodeError> {
        let json = decompression::decompress(compressed, self.config.max_decompressed_size)?;
        debug!(
            compressed = compressed.len(),
            inflated = json.len(),
            "inflated message"
        );
        Ok(json)
    }

    /// Decode a message that has already been inflated.
    ///
    /// Useful for captured feed dumps stored as plain JSON.
    ///
    /// # Errors
    ///
    /// As for [`decode_message`](Self::decode_message), minus the
    /// decompression errors.
    pub fn decode_json(&self, json: &[u8]) -> Result<DecodedMessage, DecodeError> {
        let envelope = parse_envelope(json)?;
        let payload = router::resolve(&envelope.schema_ref, envelope.message)?;
        Ok(DecodedMessage {
            schema_ref: envelope.schema_ref,
            header: envelope.header,
            payload,
        })
    }

    /// Whether messages with this identifier would be decoded at all.
    ///
    /// Lets a subscriber drop unsupported traffic by identifier without
    /// paying for payload decoding.
    #[must_use]
    pub fn is_supported(schema_ref: &str) -> bool {
        matches!(router::lookup(schema_ref), Some(router::Route::Decode(_)))
    }
}

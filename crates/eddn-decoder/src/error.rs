use std::fmt;

use eddn_types::SchemaFamily;

/// Errors that can occur while decoding an EDDN message.
///
/// Every failure is terminal for the message being decoded: nothing is
/// retried, and no variant ever stands in for a partially decoded record.
/// The caller decides whether to drop, log, or re-queue.
///
/// Error hierarchy, grouped by pipeline stage:
///
/// ```text
///   DecodeError
///   ├── DecompressFailed          ← input is not a complete zlib stream
///   ├── DecompressionBomb         ← inflated size exceeds configured limit
///   ├── MalformedEnvelope         ← not JSON, not an object, or no $schemaRef
///   ├── UnsupportedSchema         ← identifier unknown, or test traffic
///   ├── UnsupportedVersion        ← known family, deliberately skipped version
///   ├── PayloadDecode             ← message does not fit the routed record
///   ├── InvalidJournalPayload     ← journal message not an object / no event
///   └── UnrecognizedEvent         ← journal event name outside the known set
/// ```
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// zlib decompression failed.
    ///
    /// Covers corrupt streams, non-zlib input, and streams that end
    /// before the zlib trailer (truncated messages).
    #[error("zlib decompression failed: {0}")]
    DecompressFailed(String),

    /// Decompressed data exceeds the safety limit.
    ///
    /// The `limit` is [`DecoderConfig::max_decompressed_size`](crate::DecoderConfig).
    #[error("decompressed size {actual} exceeds limit {limit}")]
    DecompressionBomb { actual: usize, limit: usize },

    /// The decompressed bytes are not a parseable envelope.
    #[error("malformed envelope: {0}")]
    MalformedEnvelope(#[source] serde_json::Error),

    /// No decoder exists for this identifier.
    ///
    /// Test traffic (identifiers ending in `/test`) lands here too: it is
    /// excluded from processing, not mis-parsed.
    #[error("unsupported schema: {schema_ref}")]
    UnsupportedSchema { schema_ref: String },

    /// The identifier names a known family at a version this decoder
    /// intentionally does not handle.
    #[error("{family} version {version} is not supported")]
    UnsupportedVersion { family: SchemaFamily, version: u32 },

    /// The payload does not match the field structure of the record it
    /// was routed to. `target` names that record.
    #[error("failed to decode {target} payload: {source}")]
    PayloadDecode {
        target: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A journal payload is not an object or carries no usable `event`.
    #[error("not a journal message: {reason}")]
    InvalidJournalPayload { reason: &'static str },

    /// A journal payload names an event this decoder does not know.
    #[error("unrecognized journal event {event:?}")]
    UnrecognizedEvent { event: String },
}

/// Coarse classification of a [`DecodeError`].
///
/// Lets callers branch on the failure category (for example, counting
/// unsupported schemas separately from corrupt input) without matching
/// every variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Decompression,
    MalformedEnvelope,
    UnsupportedSchema,
    UnsupportedVersion,
    PayloadDecode,
    InvalidJournalPayload,
    UnrecognizedEvent,
}

impl DecodeError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::DecompressFailed(_) | Self::DecompressionBomb { .. } => ErrorKind::Decompression,
            Self::MalformedEnvelope(_) => ErrorKind::MalformedEnvelope,
            Self::UnsupportedSchema { .. } => ErrorKind::UnsupportedSchema,
            Self::UnsupportedVersion { .. } => ErrorKind::UnsupportedVersion,
            Self::PayloadDecode { .. } => ErrorKind::PayloadDecode,
            Self::InvalidJournalPayload { .. } => ErrorKind::InvalidJournalPayload,
            Self::UnrecognizedEvent { .. } => ErrorKind::UnrecognizedEvent,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Decompression => "decompression",
            Self::MalformedEnvelope => "malformed envelope",
            Self::UnsupportedSchema => "unsupported schema",
            Self::UnsupportedVersion => "unsupported version",
            Self::PayloadDecode => "payload decode",
            Self::InvalidJournalPayload => "invalid journal payload",
            Self::UnrecognizedEvent => "unrecognized event",
        };
        f.write_str(name)
    }
}

/// Default ceiling on the inflated size of a single message (8 MiB).
///
/// Real feed messages are a few kilobytes; the largest (full commodity
/// markets) stay well under 100 KiB.
pub const DEFAULT_MAX_DECOMPRESSED_SIZE: usize = 8 * 1024 * 1024;

/// Configuration for [`EddnDecoder`](crate::EddnDecoder).
///
/// ```text
/// ┌───────────────────────┬────────────────────────────────────────────┐
/// │ Field                 │ Purpose                                    │
/// ├───────────────────────┼────────────────────────────────────────────┤
/// │ max_decompressed_size │ Upper bound on inflated bytes per message  │
/// └───────────────────────┴────────────────────────────────────────────┘
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Messages that inflate past this many bytes fail with
    /// [`DecodeError::DecompressionBomb`](crate::DecodeError::DecompressionBomb).
    pub max_decompressed_size: usize,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            max_decompressed_size: DEFAULT_MAX_DECOMPRESSED_SIZE,
        }
    }
}

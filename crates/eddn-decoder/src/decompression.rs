// zlib inflation for feed messages.
//
// The relay deflates every message body with a zlib wrapper. Inflation is
// driven through `flate2::Decompress` directly instead of the `Read`
// adapters because the adapters report a stream that stops short of its
// trailer as a clean EOF, and a truncated message must be an error here.

use flate2::{Decompress, FlushDecompress, Status};

use crate::error::DecodeError;

/// Smallest output growth step.
const MIN_CHUNK: usize = 4 * 1024;

/// Initial output capacity as a multiple of the compressed size. JSON on
/// the feed typically deflates 4-6x.
const EXPECTED_RATIO: usize = 4;

/// Inflate a complete zlib stream.
///
/// The inflate state lives on this stack frame, so it is released on
/// every return path. Output is only handed back once the stream's
/// trailer (and with it the Adler-32 check) has been reached.
///
/// # Errors
///
/// - [`DecodeError::DecompressFailed`] if the input is not zlib, is
///   corrupt, or ends before the stream is complete.
/// - [`DecodeError::DecompressionBomb`] if the output grows past
///   `max_size` bytes.
pub(crate) fn decompress(data: &[u8], max_size: usize) -> Result<Vec<u8>, DecodeError> {
    let mut inflater = Decompress::new(true);
    let ceiling = max_size.saturating_add(1);
    let mut out = Vec::with_capacity(
        data.len()
            .saturating_mul(EXPECTED_RATIO)
            .max(MIN_CHUNK)
            .min(ceiling),
    );

    loop {
        if out.len() == out.capacity() {
            let headroom = ceiling.saturating_sub(out.len()).max(1);
            out.reserve_exact(out.capacity().max(MIN_CHUNK).min(headroom));
        }

        let before_in = inflater.total_in();
        let before_out = inflater.total_out();
        let offset = consumed(&inflater);
        let status = inflater
            .decompress_vec(&data[offset..], &mut out, FlushDecompress::None)
            .map_err(|e| DecodeError::DecompressFailed(e.to_string()))?;

        if out.len() > max_size {
            return Err(DecodeError::DecompressionBomb {
                actual: out.len(),
                limit: max_size,
            });
        }

        match status {
            Status::StreamEnd => return Ok(out),
            Status::Ok | Status::BufError => {
                let stalled =
                    inflater.total_in() == before_in && inflater.total_out() == before_out;
                if stalled && out.len() < out.capacity() {
                    return Err(DecodeError::DecompressFailed(
                        "stream ended before zlib trailer".to_string(),
                    ));
                }
            }
        }
    }
}

/// Bytes of input the inflater has consumed so far.
#[allow(clippy::cast_possible_truncation)]
fn consumed(inflater: &Decompress) -> usize {
    // total_in never exceeds the slice length, which is a usize.
    inflater.total_in() as usize
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use flate2::Compression;
    use flate2::write::ZlibEncoder;

    use super::*;

    fn deflate(data: &[u8]) -> Vec<u8> {
        let mut enc = ZlibEncoder::new(Vec::new(), Compression::default());
        enc.write_all(data).unwrap();
        enc.finish().unwrap()
    }

    #[test]
    fn inflates_complete_stream() {
        let data = br#"{"$schemaRef":"x","message":{}}"#.repeat(40);
        let inflated = decompress(&deflate(&data), 1024 * 1024).unwrap();
        assert_eq!(inflated, data);
    }

    #[test]
    fn inflates_output_larger_than_initial_capacity() {
        let data = vec![b'a'; 200_000];
        let inflated = decompress(&deflate(&data), 1024 * 1024).unwrap();
        assert_eq!(inflated.len(), 200_000);
    }

    #[test]
    fn output_exactly_at_limit_is_accepted() {
        let data = vec![b'z'; 5000];
        let inflated = decompress(&deflate(&data), 5000).unwrap();
        assert_eq!(inflated.len(), 5000);
    }

    #[test]
    fn rejects_plain_json() {
        let result = decompress(br#"{"$schemaRef":"x"}"#, 1024);
        assert!(matches!(result, Err(DecodeError::DecompressFailed(_))));
    }

    #[test]
    fn rejects_empty_input() {
        assert!(matches!(decompress(&[], 1024), Err(DecodeError::DecompressFailed(_))));
    }

    #[test]
    fn rejects_truncated_stream() {
        let compressed = deflate(&b"fuel scoop ".repeat(100));
        for cut in [1, compressed.len() / 2, compressed.len() - 1] {
            let result = decompress(&compressed[..cut], 1024 * 1024);
            assert!(
                matches!(result, Err(DecodeError::DecompressFailed(_))),
                "cut at {cut} should fail, got {result:?}"
            );
        }
    }

    #[test]
    fn rejects_bomb() {
        let compressed = deflate(&vec![0u8; 100_000]);
        let result = decompress(&compressed, 1000);
        assert!(matches!(
            result,
            Err(DecodeError::DecompressionBomb { limit: 1000, .. })
        ));
    }
}

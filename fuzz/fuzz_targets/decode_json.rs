#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: envelope parsing, routing and payload decode on
// already-inflated bytes.
fuzz_target!(|data: &[u8]| {
    let _ = eddn_decoder::EddnDecoder::default().decode_json(data);
});

#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: full decoder entry point on arbitrary bytes.
//
// Mostly exercises zlib header/trailer handling and the truncation and
// size-limit checks; inputs that inflate reach the envelope parser.
fuzz_target!(|data: &[u8]| {
    let _ = eddn_decoder::EddnDecoder::decode(data);
});

#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: journal event dispatch on arbitrary text.
fuzz_target!(|data: &[u8]| {
    if let Ok(raw) = std::str::from_utf8(data) {
        let _ = eddn_decoder::journal::dispatch(raw);
    }
});

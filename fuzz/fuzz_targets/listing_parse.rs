//! Fuzz target for whole-listing parsing.
//!
//! This fuzzer feeds arbitrary UTF-8 documents to the rename pipeline,
//! checking for panics, crashes, or hangs.

#![no_main]

use libfuzzer_sys::fuzz_target;
use photoseq::listing::parse;

fuzz_target!(|data: &[u8]| {
    if data.len() > 10 * 1024 * 1024 {
        return;
    }

    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let _ = parse(text);
});

//! Fuzz target for facet row decoding.
//!
//! Goal: row deserialization and strict decoding should **never panic**
//! on any input. They may return errors, but panics are unacceptable.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_record_decode
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use sheaf_types::FacetRecord;

fuzz_target!(|data: &[u8]| {
    // Rows arrive as JSON text; non-UTF-8 input is uninteresting.
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(rec) = serde_json::from_str::<FacetRecord>(text) {
            // Strict decoding must reject, not panic.
            let _ = sheaf_record::decode_facet(&rec);
        }
    }
});

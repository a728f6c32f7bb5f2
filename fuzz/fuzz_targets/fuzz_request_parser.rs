//! Fuzz target for audience request parsing.
//!
//! Goal: the write-path wire shape should **never panic** while parsing,
//! whatever a client sends.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_request_parser
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use sheaf_acl::freeze::AudienceRequest;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = serde_json::from_str::<AudienceRequest>(text);
    }
});

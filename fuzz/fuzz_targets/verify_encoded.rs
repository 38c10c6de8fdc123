// SPDX-License-Identifier: Apache-2.0
// SPDX-FileCopyrightText: 2026 Pitfall Contributors

#![no_main]

use libfuzzer_sys::fuzz_target;

// Malformed encoded-hash strings must come back as errors, never panics.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = pitfall_core::verify_adaptive(b"password123", s);
    }
});

#![no_main]

use libfuzzer_sys::fuzz_target;
use neon_core::lang::tokens::{self, FALLBACK_PREFIX, TokenKind};

fuzz_target!(|data: &[u8]| {
    // Interpret the first four bytes as any 32-bit pattern
    let Some(bytes) = data.get(..4) else {
        return;
    };
    let raw = i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);

    let rendered = tokens::name(raw);
    assert!(!rendered.is_empty() && rendered.len() <= 26);
    match TokenKind::from_ordinal(raw) {
        Some(kind) => assert_eq!(rendered, kind.as_str()),
        None => assert_eq!(rendered.strip_prefix(FALLBACK_PREFIX), Some(raw.to_string().as_str())),
    }
});

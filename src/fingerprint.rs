//! Deterministic string fingerprinting.
//!
//! Every pseudo-random looking value in an analysis (jitter, catalog
//! indices, block numbers) is derived from this fingerprint so that
//! identical inputs always produce identical results. The accumulator uses
//! 32-bit signed wraparound semantics: `acc = acc * 31 + code`, expressed
//! as a shift-and-subtract so overflow behaves the same on every platform.

/// Fingerprint a string into a non-negative 32-bit integer.
///
/// Depends only on the string's content: iterates UTF-16 code units,
/// folds them into a wrapping `i32` accumulator, and returns the absolute
/// value. The empty string maps to 0.
pub fn fingerprint(s: &str) -> u32 {
    let mut acc: i32 = 0;
    for code in s.encode_utf16() {
        acc = acc
            .wrapping_shl(5)
            .wrapping_sub(acc)
            .wrapping_add(i32::from(code));
    }
    acc.unsigned_abs()
}

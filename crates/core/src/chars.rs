//! UTF-8 character segmentation without bitwise operations.
//!
//! Splits a string into its constituent characters by classifying each
//! start byte's width with plain integer comparisons against the UTF-8
//! lead-byte thresholds. This mirrors how the segmentation is specified
//! for restricted host runtimes where bit masking is unavailable, so the
//! boundaries it produces stay reproducible across ports.

/// Split `text` into single-character substrings.
///
/// The scan is byte-driven: a start byte below 0x80 yields a 1-byte
/// character; otherwise the declared width (2..=8 bytes) is found by
/// comparing the byte against 0xE0, 0xF0, 0xF8, 0xFC, 0xFE and 0xFF in
/// turn. Continuation bytes are not validated, and a declared width that
/// would run past the end of the string is clamped so the remaining tail
/// is emitted as the final character. Empty input yields an empty vector.
pub fn segment(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut chars = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let byte = bytes[i];
        let width = if byte < 0x80 {
            1
        } else if byte < 0xE0 {
            2
        } else if byte < 0xF0 {
            3
        } else if byte < 0xF8 {
            4
        } else if byte < 0xFC {
            5
        } else if byte < 0xFE {
            6
        } else if byte < 0xFF {
            7
        } else {
            8
        };

        let end = (i + width).min(bytes.len());
        // `&str` input guarantees the computed offsets are character
        // boundaries, so direct slicing cannot panic here.
        chars.push(&text[i..end]);
        i = end;
    }

    chars
}

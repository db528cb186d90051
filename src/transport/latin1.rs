//! Lossy downgrade of message text to the single-byte charset the gateway expects.

/// Byte written for characters outside ISO-8859-1.
pub const REPLACEMENT: u8 = b'?';

/// Encode `text` as ISO-8859-1.
///
/// Code points up to U+00FF map to the byte of the same value; every other
/// character becomes [`REPLACEMENT`].
pub fn encode_lossy(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| u8::try_from(u32::from(c)).unwrap_or(REPLACEMENT))
        .collect()
}

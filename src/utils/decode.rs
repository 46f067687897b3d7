use std::borrow::Cow;

const UTF8_BOM: char = '\u{feff}';

/// Decode raw file contents to text
///
/// Attempts UTF-8 decoding first, falling back to Windows-1252 (CP1252) if UTF-8 fails.
/// OpenAir files exported by older tools are commonly Latin-1/CP1252 encoded.
/// A leading UTF-8 byte order mark is removed.
///
/// # Returns
///
/// Decoded string (always succeeds with some valid string)
pub fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(s) => s.strip_prefix(UTF8_BOM).unwrap_or(s).into(),
        Err(_) => encoding_rs::WINDOWS_1252.decode_without_bom_handling(bytes).0,
    }
}

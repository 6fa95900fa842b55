//! Mojibake repair for Meta exports.

/// Fix Meta's broken encoding (Mojibake).
///
/// Meta exports UTF-8 text encoded as if it were ISO-8859-1.
/// Each UTF-8 byte is stored as a separate Unicode codepoint.
/// Example: "Ahoj, ako sa máš?" becomes "Ahoj, ako sa mÃ¡Å¡?"
///
/// This function reverses that process by:
/// 1. Taking each char as its Latin-1 byte value
/// 2. Reconstructing the original UTF-8 string
///
/// If any char is outside Latin-1, or the bytes aren't valid UTF-8, the
/// input is returned unchanged. It never fails.
///
/// # Example
///
/// ```
/// use postpack::parsing::fix_mojibake_encoding;
///
/// // ASCII passes through unchanged
/// assert_eq!(fix_mojibake_encoding("Hello"), "Hello");
///
/// // Mojibake gets fixed
/// assert_eq!(fix_mojibake_encoding("mÃ¡Å¡"), "máš");
///
/// // Text that is already correct stays as it is
/// assert_eq!(fix_mojibake_encoding("Привет"), "Привет");
/// ```
pub fn fix_mojibake_encoding(s: &str) -> String {
    if s.is_empty() {
        return String::new();
    }
    let bytes: Option<Vec<u8>> = s.chars().map(|c| u8::try_from(c).ok()).collect();
    bytes
        .and_then(|b| String::from_utf8(b).ok())
        .unwrap_or_else(|| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Encodes text the way the exporter does: every UTF-8 byte becomes a char.
    fn to_mojibake(s: &str) -> String {
        s.bytes().map(char::from).collect()
    }

    #[test]
    fn test_fix_encoding_ascii() {
        assert_eq!(fix_mojibake_encoding("Hello"), "Hello");
        assert_eq!(fix_mojibake_encoding("Test 123"), "Test 123");
    }

    #[test]
    fn test_fix_encoding_empty() {
        assert_eq!(fix_mojibake_encoding(""), "");
    }

    #[test]
    fn test_fix_encoding_repairs_slovak() {
        let original = "Dobrý deň, ďakujem za všetko!";
        assert_eq!(fix_mojibake_encoding(&to_mojibake(original)), original);
    }

    #[test]
    fn test_fix_encoding_repairs_emoji() {
        let original = "Party 🎉";
        assert_eq!(fix_mojibake_encoding(&to_mojibake(original)), original);
    }

    #[test]
    fn test_fix_encoding_invalid_utf8_unchanged() {
        // 'é' alone is 0xE9, which starts a 3-byte sequence that never completes
        assert_eq!(fix_mojibake_encoding("café"), "café");
    }

    #[test]
    fn test_fix_encoding_outside_latin1_unchanged() {
        assert_eq!(fix_mojibake_encoding("Привет"), "Привет");
        assert_eq!(fix_mojibake_encoding("mixed Ã¡ and 日本"), "mixed Ã¡ and 日本");
    }
}

//! Packed 32-bit routing keys.
//!
//! A key is formed from up to 4 bytes of a string, one byte per 8-bit
//! lane, low byte first. The generated classifier computes the same key
//! from its input (using however many bytes the input has, capped at 4)
//! and multiplexes on it with a single integer compare.
//!
//! Keys are not globally unique: a name shorter than 4 bytes leaves its
//! high lanes zero, and names of length >= 4 share a key with every other
//! name that has the same first 4 bytes. Length is therefore always an
//! explicit, separate discriminant wherever a key could be ambiguous.

/// ASCII-only lowercase folding. Bytes outside `A-Z` pass through.
pub fn fold_byte(b: u8) -> u8 {
    if b.is_ascii_uppercase() { b + 32 } else { b }
}

/// Pack up to 4 bytes into a 32-bit key, byte `i` into bits `[8i, 8i+8)`.
///
/// Positions past the end of `bytes` contribute zero. Referentially
/// transparent: identical input always yields the identical key.
pub fn pack(bytes: &[u8], fold: bool) -> u32 {
    debug_assert!(bytes.len() <= 4, "pack takes at most 4 bytes");
    let mut key = 0u32;
    for (i, &b) in bytes.iter().enumerate() {
        let b = if fold { fold_byte(b) } else { b };
        key |= (b as u32) << (8 * i);
    }
    key
}

/// Pack the first `min(len, 4)` bytes of a name.
pub fn pack_prefix(name: &[u8], fold: bool) -> u32 {
    let end = name.len().min(4);
    pack(&name[..end], fold)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_byte() {
        assert_eq!(fold_byte(b'A'), b'a');
        assert_eq!(fold_byte(b'Z'), b'z');
        assert_eq!(fold_byte(b'a'), b'a');
        assert_eq!(fold_byte(b'0'), b'0');
        assert_eq!(fold_byte(b':'), b':');
    }

    #[test]
    fn test_pack_lanes() {
        assert_eq!(pack(b"", false), 0);
        assert_eq!(pack(b"a", false), 0x61);
        assert_eq!(pack(b"ab", false), 0x61 | (0x62 << 8));
        assert_eq!(
            pack(b"abcd", false),
            0x61 | (0x62 << 8) | (0x63 << 16) | (0x64 << 24)
        );
    }

    #[test]
    fn test_pack_folds() {
        assert_eq!(pack(b"BR", true), pack(b"br", true));
        assert_ne!(pack(b"BR", false), pack(b"br", false));
    }

    #[test]
    fn test_short_name_equals_nul_padded() {
        // "ab" and "ab\0\0" pack identically; the explicit length check
        // in the generated code is what keeps this unambiguous.
        assert_eq!(pack(b"ab", false), pack(b"ab\0\0", false));
    }

    #[test]
    fn test_pack_prefix_caps_at_four() {
        assert_eq!(pack_prefix(b"blockquote", false), pack(b"bloc", false));
        assert_eq!(pack_prefix(b"br", false), pack(b"br", false));
    }
}

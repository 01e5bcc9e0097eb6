//! Percent escaping with the platform `Uri.encode`/`Uri.decode` rules.
//!
//! Encoding escapes every byte outside the unreserved set as uppercase `%XX`
//! (UTF-8 bytes for multi-byte characters). Decoding is total and lenient:
//! a malformed escape passes through verbatim and invalid UTF-8 is replaced,
//! matching the platform rather than RFC 3986 strictness.

const HEX: &[u8; 16] = b"0123456789ABCDEF";

/// Bytes that never need escaping: ASCII alphanumerics plus `_-!.~'()*`.
const fn is_unreserved(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(
            b,
            b'_' | b'-' | b'!' | b'.' | b'~' | b'\'' | b'(' | b')' | b'*'
        )
}

/// Percent-encode `s`, escaping everything outside the unreserved set.
pub fn encode(s: &str) -> String {
    encode_allowing(s, "")
}

/// Percent-encode `s`, additionally letting the ASCII characters in `allowed`
/// pass through unescaped (the codec uses `"/"` for mime types and flattened
/// component names).
pub fn encode_allowing(s: &str, allowed: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for &b in s.as_bytes() {
        if is_unreserved(b) || (b.is_ascii() && allowed.contains(b as char)) {
            out.push(b as char);
        } else {
            out.push('%');
            out.push(HEX[(b >> 4) as usize] as char);
            out.push(HEX[(b & 0x0f) as usize] as char);
        }
    }
    out
}

fn hex_val(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Decode percent escapes in `s`. Total: a `%` not followed by two hex
/// digits is kept verbatim, and byte sequences that do not form valid UTF-8
/// decode to the replacement character.
pub fn decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let (Some(hi), Some(lo)) = (hex_val(bytes[i + 1]), hex_val(bytes[i + 2])) {
                out.push((hi << 4) | lo);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

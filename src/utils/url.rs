//! URL path encoding utilities.
//!
//! Relative file paths are embedded into `/view/`, `/download/` and browse
//! URLs. Reserved characters (`#`, `?`, `%`, spaces, non-ASCII) must be
//! percent-encoded so the server sees the original name.

/// Percent-encode a relative path, keeping `/` separators intact.
pub fn encode_path(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    for byte in path.bytes() {
        if is_unreserved(byte) || byte == b'/' {
            out.push(byte as char);
        } else {
            out.push_str(&format!("%{:02X}", byte));
        }
    }
    out
}

/// Percent-encode a single query component (`/` is encoded as well).
pub fn encode_component(value: &str) -> String {
    encode_path(value).replace('/', "%2F")
}

/// Decode a percent-encoded path.
///
/// Malformed escapes are kept verbatim; invalid UTF-8 is replaced lossily.
pub fn decode_path(encoded: &str) -> String {
    let bytes = encoded.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%'
            && i + 2 < bytes.len()
            && let (Some(hi), Some(lo)) = (hex_value(bytes[i + 1]), hex_value(bytes[i + 2]))
        {
            out.push(hi << 4 | lo);
            i += 3;
            continue;
        }
        out.push(bytes[i]);
        i += 1;
    }

    String::from_utf8_lossy(&out).into_owned()
}

/// Whether a query string (with or without leading `?`) has `key=value`.
pub fn query_has(search: &str, key: &str, value: &str) -> bool {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .any(|(k, v)| k == key && decode_path(v) == value)
}

fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'.' | b'_' | b'~')
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_path_keeps_separators() {
        assert_eq!(encode_path("docs/report.pdf"), "docs/report.pdf");
        assert_eq!(encode_path("a b/c#1.txt"), "a%20b/c%231.txt");
        assert_eq!(encode_path("照片.png"), "%E7%85%A7%E7%89%87.png");
    }

    #[test]
    fn test_encode_component() {
        assert_eq!(encode_component("music/live set"), "music%2Flive%20set");
    }

    #[test]
    fn test_decode_path() {
        assert_eq!(decode_path("a%20b/c%231.txt"), "a b/c#1.txt");
        assert_eq!(decode_path("%E7%85%A7%E7%89%87.png"), "照片.png");
        assert_eq!(decode_path("100%"), "100%");
        assert_eq!(decode_path("%zz"), "%zz");
    }

    #[test]
    fn test_query_has() {
        assert!(query_has("?view=mobile", "view", "mobile"));
        assert!(query_has("a=1&view=mobile", "view", "mobile"));
        assert!(!query_has("?view=desktop", "view", "mobile"));
        assert!(!query_has("", "view", "mobile"));
    }
}

pub fn trim_ascii_whitespace(b: &[u8]) -> Option<&[u8]> {
    let start = b.iter().position(|&c| !c.is_ascii_whitespace())?;
    let end = b.iter().rposition(|&c| !c.is_ascii_whitespace())?;
    Some(&b[start..=end])
}

pub fn check_valid_name(s: &str) -> Option<&str> {
    if s.is_empty() {
        return None;
    }

    for &c in s.as_bytes() {
        match c {
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_' => (),
            _ => return None,
        }
    }

    Some(s)
}

/// The identifier of a sequence record: its header up to the first whitespace.
pub fn record_id(name: &[u8]) -> &[u8] {
    let name = trim_ascii_whitespace(name).unwrap_or(&[]);
    match name.iter().position(|c| c.is_ascii_whitespace()) {
        Some(end) => &name[..end],
        None => name,
    }
}

/// Strip one layer of matching quotes around the whole string.
pub fn strip_quotes(s: &str) -> &str {
    let s = s.trim();
    for q in ['\'', '"'] {
        if let Some(inner) = s.strip_prefix(q).and_then(|r| r.strip_suffix(q)) {
            return inner;
        }
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_id_stops_at_whitespace() {
        assert_eq!(record_id(b"seq1 some description"), b"seq1");
        assert_eq!(record_id(b"seq2\tother"), b"seq2");
        assert_eq!(record_id(b"seq3"), b"seq3");
        assert_eq!(record_id(b"  "), b"");
    }

    #[test]
    fn valid_names() {
        assert_eq!(check_valid_name("qseqid"), Some("qseqid"));
        assert_eq!(check_valid_name("my_col2"), Some("my_col2"));
        assert_eq!(check_valid_name("bad-name"), None);
        assert_eq!(check_valid_name(""), None);
    }

    #[test]
    fn quotes_are_stripped_once() {
        assert_eq!(strip_quotes("'6 std'"), "6 std");
        assert_eq!(strip_quotes("\"6 qseqid\""), "6 qseqid");
        assert_eq!(strip_quotes("6 std"), "6 std");
        assert_eq!(strip_quotes("'6 std"), "'6 std");
    }
}

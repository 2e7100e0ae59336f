/// Values shorter than this are masked entirely.
pub const MIN_PARTIAL_REVEAL_LEN: usize = 8;

/// Characters revealed at each end of a long value.
pub const REVEAL_CHARS: usize = 3;

/// Shown for short values. Like [`ELLIPSIS`] it is not ASCII, so redacted
/// output never shares more than the revealed ends with an ASCII secret.
pub const MASK: &str = "••••••••";

/// Joins the revealed ends.
pub const ELLIPSIS: char = '…';

/// Render a secret for display without ever exposing more than its first and
/// last three characters.
pub fn redact(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.is_empty() {
        return "(empty)".to_string();
    }
    if chars.len() < MIN_PARTIAL_REVEAL_LEN {
        return MASK.to_string();
    }
    let head: String = chars[..REVEAL_CHARS].iter().collect();
    let tail: String = chars[chars.len() - REVEAL_CHARS..].iter().collect();
    format!("{}{}{}", head, ELLIPSIS, tail)
}

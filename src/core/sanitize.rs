// src/core/sanitize.rs

/// Drop every whitespace character, including non-breaking spaces.
pub fn strip_ws(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

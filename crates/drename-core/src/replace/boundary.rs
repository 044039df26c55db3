//! Boundary tokenizer
//!
//! A boundary between two identifier parts is either a run of `_`/`-`
//! characters or a zero-width camelCase transition (ASCII lowercase or
//! digit immediately followed by ASCII uppercase).

/// Whether `c` belongs to a separator run
#[must_use]
pub const fn is_separator(c: char) -> bool {
    matches!(c, '_' | '-')
}

/// Whether a zero-width camelCase boundary sits between `prev` and `next`
#[must_use]
pub const fn is_camel_transition(prev: char, next: char) -> bool {
    (prev.is_ascii_lowercase() || prev.is_ascii_digit()) && next.is_ascii_uppercase()
}

/// Whether byte offset `at` of `text` is a camelCase transition
#[must_use]
pub fn is_camel_boundary_at(text: &str, at: usize) -> bool {
    let (Some(prev), Some(next)) = (text[..at].chars().next_back(), text[at..].chars().next())
    else {
        return false;
    };
    is_camel_transition(prev, next)
}

/// Text split at every boundary
///
/// `segments.len() == separators.len() + 1` always holds. A camelCase
/// boundary contributes an empty separator. Leading or trailing separator
/// runs produce empty segments at the ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokens<'a> {
    /// Text between boundaries, original casing kept
    pub segments: Vec<&'a str>,
    /// Boundary text; `""` for camelCase transitions
    pub separators: Vec<&'a str>,
}

/// Split `text` into alternating segments and separators
#[must_use]
pub fn split(text: &str) -> Tokens<'_> {
    let mut segments = Vec::new();
    let mut separators = Vec::new();
    let mut segment_start = 0;
    let mut prev: Option<char> = None;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        if is_separator(c) {
            let mut end = idx + c.len_utf8();
            while let Some(&(next_idx, next)) = chars.peek() {
                if !is_separator(next) {
                    break;
                }
                end = next_idx + next.len_utf8();
                chars.next();
            }

            segments.push(&text[segment_start..idx]);
            separators.push(&text[idx..end]);
            segment_start = end;
            prev = None;
            continue;
        }

        if let Some(p) = prev
            && is_camel_transition(p, c)
        {
            segments.push(&text[segment_start..idx]);
            separators.push("");
            segment_start = idx;
        }
        prev = Some(c);
    }

    segments.push(&text[segment_start..]);

    Tokens {
        segments,
        separators,
    }
}

//! Case-preserving renderer

use super::boundary;

/// Casing rule derived from one captured segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseStyle {
    /// Every cased character is uppercase (`USER`)
    Upper,
    /// Every cased character is lowercase (`user`)
    Lower,
    /// Anything else (`User`, `uSER`, `123`)
    Capitalized,
}

impl CaseStyle {
    /// Derive the rule from a captured segment
    #[must_use]
    pub fn of(segment: &str) -> Self {
        let has_upper = segment.chars().any(char::is_uppercase);
        let has_lower = segment.chars().any(char::is_lowercase);

        match (has_upper, has_lower) {
            (true, false) => Self::Upper,
            (false, true) => Self::Lower,
            _ => Self::Capitalized,
        }
    }

    /// Render `part` under this rule
    ///
    /// Lowercase and capitalized rules only touch the first character; the
    /// rest of `part` is kept as written.
    #[must_use]
    pub fn apply(self, part: &str) -> String {
        match self {
            Self::Upper => part.to_uppercase(),
            Self::Lower => map_first(part, char::to_lowercase),
            Self::Capitalized => map_first(part, char::to_uppercase),
        }
    }
}

fn map_first<I>(part: &str, map: impl Fn(char) -> I) -> String
where
    I: Iterator<Item = char>,
{
    let mut chars = part.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => map(first).chain(chars).collect(),
    }
}

fn clamped<'a>(items: &[&'a str], idx: usize) -> Option<&'a str> {
    items.get(idx.min(items.len().saturating_sub(1))).copied()
}

/// Render `new_parts` in the style of `matched`
///
/// `matched` is re-split at its boundaries. New part `i` takes the casing of
/// segment `i`, and the separator between parts `i` and `i + 1` is captured
/// separator `i`; both indexes clamp to the last captured item. A match
/// without any separator joins several new parts with `default_separator`.
#[must_use]
pub fn render(matched: &str, new_parts: &[String], default_separator: &str) -> String {
    let tokens = boundary::split(matched);

    let rendered: Vec<String> = new_parts
        .iter()
        .enumerate()
        .map(|(idx, part)| {
            let segment = clamped(&tokens.segments, idx).unwrap_or_default();
            CaseStyle::of(segment).apply(part)
        })
        .collect();

    if tokens.separators.is_empty() {
        return rendered.join(default_separator);
    }

    let mut output = String::new();
    for (idx, part) in rendered.iter().enumerate() {
        if idx > 0 {
            output.push_str(clamped(&tokens.separators, idx - 1).unwrap_or_default());
        }
        output.push_str(part);
    }
    output
}

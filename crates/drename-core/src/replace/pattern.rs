//! Pattern builder
//!
//! Compiles an identifier into a case-insensitive matcher for its parts in
//! order. The `regex` crate has no lookaround, so every gap between parts is
//! compiled as a `[_-]*` capture group. A candidate whose gap is empty is
//! only accepted when a camelCase transition sits at that position;
//! otherwise the search resumes one character after the candidate's start.

use regex::{Captures, Match, Regex, RegexBuilder};

use super::boundary;
use crate::error::Error;
use crate::identifier::Identifier;

const GAP: &str = "([_-]*)";

/// Compiled matcher for one identifier
#[derive(Debug, Clone)]
pub struct BoundaryPattern {
    regex: Regex,
    gaps: usize,
}

impl BoundaryPattern {
    /// Compile a matcher for `identifier`
    ///
    /// Parts are escaped: they always match as literal text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Pattern`] if the regex cannot be built (for example
    /// if it exceeds the compiled size limit).
    pub fn new(identifier: &Identifier) -> Result<Self, Error> {
        let source = identifier
            .parts()
            .iter()
            .map(|part| regex::escape(part))
            .collect::<Vec<_>>()
            .join(GAP);

        let regex = RegexBuilder::new(&source).case_insensitive(true).build()?;

        Ok(Self {
            regex,
            gaps: identifier.len() - 1,
        })
    }

    /// Iterate over non-overlapping, correctly bounded matches in `text`
    #[must_use]
    pub const fn find_iter<'p, 't>(&'p self, text: &'t str) -> Matches<'p, 't> {
        Matches {
            pattern: self,
            text,
            pos: 0,
        }
    }

    fn gaps_are_bounded(&self, text: &str, captures: &Captures<'_>) -> bool {
        (1..=self.gaps).all(|group| {
            captures
                .get(group)
                .is_some_and(|gap| !gap.is_empty() || boundary::is_camel_boundary_at(text, gap.start()))
        })
    }
}

/// Iterator over matches of a [`BoundaryPattern`]
#[derive(Debug)]
pub struct Matches<'p, 't> {
    pattern: &'p BoundaryPattern,
    text: &'t str,
    pos: usize,
}

impl<'t> Iterator for Matches<'_, 't> {
    type Item = Match<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.text.len() {
            let captures = self.pattern.regex.captures_at(self.text, self.pos)?;
            let whole = captures.get(0)?;

            if self.pattern.gaps_are_bounded(self.text, &captures) {
                self.pos = whole.end().max(whole.start() + 1);
                return Some(whole);
            }

            let step = self.text[whole.start()..]
                .chars()
                .next()
                .map_or(1, char::len_utf8);
            self.pos = whole.start() + step;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(input: &str) -> BoundaryPattern {
        BoundaryPattern::new(&Identifier::parse(input).unwrap()).unwrap()
    }

    fn found(pattern: &BoundaryPattern, text: &str) -> Vec<String> {
        pattern
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    #[test]
    fn test_matches_all_case_styles() {
        let p = pattern("my/user");
        assert_eq!(found(&p, "my_user"), ["my_user"]);
        assert_eq!(found(&p, "MY_USER"), ["MY_USER"]);
        assert_eq!(found(&p, "my-user"), ["my-user"]);
        assert_eq!(found(&p, "myUser"), ["myUser"]);
        assert_eq!(found(&p, "MyUser"), ["MyUser"]);
        assert_eq!(found(&p, "my__-user"), ["my__-user"]);
    }

    #[test]
    fn test_rejects_missing_boundary() {
        let p = pattern("my/user");
        assert!(found(&p, "myuser").is_empty());
        assert!(found(&p, "MYUSER").is_empty());
        assert!(found(&p, "my user").is_empty());
        assert!(found(&p, "my_the_user").is_empty());
    }

    #[test]
    fn test_resumes_after_rejected_candidate() {
        let p = pattern("my/user");
        assert_eq!(found(&p, "myuser and myUser"), ["myUser"]);
    }

    #[test]
    fn test_finds_multiple_matches_in_order() {
        let p = pattern("my/user");
        assert_eq!(
            found(&p, "let my_user = MyUser::new(MY_USER);"),
            ["my_user", "MyUser", "MY_USER"]
        );
    }

    #[test]
    fn test_single_part_matches_case_insensitively() {
        let p = pattern("user");
        assert_eq!(found(&p, "User user USER"), ["User", "user", "USER"]);
    }

    #[test]
    fn test_parts_are_literal() {
        let p = pattern("a.b");
        assert_eq!(found(&p, "a.b"), ["a.b"]);
        assert!(found(&p, "axb").is_empty());

        let p = pattern("c++");
        assert_eq!(found(&p, "c++ and C++"), ["c++", "C++"]);
    }

    #[test]
    fn test_matches_inside_larger_words() {
        let p = pattern("my/user");
        assert_eq!(found(&p, "load_my_user_data"), ["my_user"]);
    }

    #[test]
    fn test_handles_multibyte_text() {
        let p = pattern("my/user");
        assert_eq!(found(&p, "é myUser ü"), ["myUser"]);
        assert!(found(&p, "ümyuser").is_empty());
    }
}

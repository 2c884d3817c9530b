use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;

/// `((content))` spans, replaced by `content` without any `c` or `C`.
pub struct LetterStrip;

impl LetterStrip {
    pub const OPEN: &'static str = "((";
    pub const STRIPPED: [char; 2] = ['c', 'C'];

    fn pattern() -> &'static Regex {
        static STRIP: OnceLock<Regex> = OnceLock::new();
        STRIP.get_or_init(|| Regex::new(r"\(\((.+?)\)\)").expect("Invalid strip regex"))
    }

    /// Remove every stripped letter from `content`.
    pub fn strip(content: &str) -> String {
        content.replace(&Self::STRIPPED[..], "")
    }

    /// Replace every parenthesised span, parentheses included, with its
    /// stripped content.
    pub fn apply(text: &str) -> Cow<'_, str> {
        if !text.contains(Self::OPEN) {
            return Cow::Borrowed(text);
        }
        Self::pattern().replace_all(text, |caps: &regex::Captures<'_>| Self::strip(&caps[1]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case::both_cases("((Cat))", "at")]
    #[case::lowercase_only("((chicago))", "hiago")]
    #[case::no_letters_to_strip("((xyz))", "xyz")]
    #[case::everything_stripped("((cC))", "")]
    #[case::surrounding_text("I ((Can)) do", "I an do")]
    #[case::two_spans("((Cc1)) ((c2))", "1 2")]
    #[case::unclosed("((Cat)", "((Cat)")]
    #[case::single_parens("(Cat)", "(Cat)")]
    fn test_apply(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(LetterStrip::apply(input), expected);
    }

    #[test]
    fn test_strip_keeps_other_letters() {
        assert_eq!(LetterStrip::strip("Cocoa Cabana"), "ooa abana");
    }
}

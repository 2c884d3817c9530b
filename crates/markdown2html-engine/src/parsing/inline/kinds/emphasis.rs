use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;

/// Paired-delimiter emphasis: `**text**` and `__text__`.
///
/// Matching is non-greedy, so `**a** and **b**` yields two spans. An
/// unpaired delimiter is left as literal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    /// `**text**` rendered as `<b>text</b>`.
    Bold,
    /// `__text__` rendered as `<em>text</em>`.
    Italic,
}

impl Emphasis {
    pub const fn tag(self) -> &'static str {
        match self {
            Emphasis::Bold => "b",
            Emphasis::Italic => "em",
        }
    }

    fn pattern(self) -> &'static Regex {
        static BOLD: OnceLock<Regex> = OnceLock::new();
        static ITALIC: OnceLock<Regex> = OnceLock::new();

        match self {
            Emphasis::Bold => BOLD
                .get_or_init(|| Regex::new(r"\*\*(.+?)\*\*").expect("Invalid bold regex")),
            Emphasis::Italic => {
                ITALIC.get_or_init(|| Regex::new(r"__(.+?)__").expect("Invalid italic regex"))
            }
        }
    }

    /// Wrap every delimited span in this emphasis' tag pair.
    pub fn apply(self, text: &str) -> Cow<'_, str> {
        let tag = self.tag();
        self.pattern()
            .replace_all(text, |caps: &regex::Captures<'_>| {
                format!("<{tag}>{}</{tag}>", &caps[1])
            })
    }
}

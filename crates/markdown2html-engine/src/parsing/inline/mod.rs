//! # Inline Substitution
//!
//! Stateless text-to-text stage run on every line before block
//! classification. Substitutions are applied in a fixed order, each one
//! seeing the output of the previous:
//!
//! 1. `**text**` to `<b>text</b>`
//! 2. `__text__` to `<em>text</em>`
//! 3. `[[text]]` to the MD5 hex digest of `text`
//! 4. `((text))` to `text` with every `c`/`C` removed
//!
//! Unmatched delimiters stay literal; this stage cannot fail.

pub mod kinds;

use std::borrow::Cow;

use kinds::{Emphasis, HashSpan, LetterStrip};

/// One inline substitution pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineKind {
    Bold,
    Italic,
    Hash,
    Strip,
}

impl InlineKind {
    /// Order in which substitutions run over a line.
    pub const ORDER: [InlineKind; 4] = [
        InlineKind::Bold,
        InlineKind::Italic,
        InlineKind::Hash,
        InlineKind::Strip,
    ];

    pub fn apply(self, text: &str) -> Cow<'_, str> {
        match self {
            InlineKind::Bold => Emphasis::Bold.apply(text),
            InlineKind::Italic => Emphasis::Italic.apply(text),
            InlineKind::Hash => HashSpan::apply(text),
            InlineKind::Strip => LetterStrip::apply(text),
        }
    }
}

/// Run every inline substitution over `line`.
///
/// Returns the input borrowed when nothing matched.
pub fn substitute(line: &str) -> Cow<'_, str> {
    let mut text = Cow::Borrowed(line);

    for kind in InlineKind::ORDER {
        if let Cow::Owned(replaced) = kind.apply(&text) {
            text = Cow::Owned(replaced);
        }
    }

    text
}

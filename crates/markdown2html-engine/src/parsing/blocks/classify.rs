use super::kinds::{Heading, ListKind};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block translation: each line is classified on its
/// own, after inline substitution, without reference to surrounding
/// context. All text payloads are already trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    /// `#`..`######` followed by a space.
    Heading { level: u8, text: String },
    /// Line starting with `-`.
    UnorderedItem(String),
    /// Line starting with `*`.
    OrderedItem(String),
    /// Whitespace only.
    Blank,
    /// Anything else; takes part in paragraph grouping.
    Text(String),
}

/// Classifies individual lines for the block translation phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line into a [`LineClass`].
    ///
    /// Priority order is heading, unordered item, ordered item, then text.
    /// Blank lines are checked first.
    pub fn classify(&self, line: &str) -> LineClass {
        let trimmed = line.trim_end_matches(['\r', '\n']);

        if trimmed.trim().is_empty() {
            return LineClass::Blank;
        }

        if let Some((level, text)) = Heading::parse(trimmed) {
            return LineClass::Heading {
                level,
                text: text.to_string(),
            };
        }

        if let Some(text) = ListKind::Unordered.item(trimmed) {
            return LineClass::UnorderedItem(text.to_string());
        }

        if let Some(text) = ListKind::Ordered.item(trimmed) {
            return LineClass::OrderedItem(text.to_string());
        }

        LineClass::Text(trimmed.trim().to_string())
    }
}

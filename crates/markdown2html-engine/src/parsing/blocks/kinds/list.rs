/// The two list flavours, keyed by their line marker.
///
/// The marker-to-tag mapping is fixed: `-` opens an unordered list and `*`
/// opens an ordered one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    pub const fn marker(self) -> char {
        match self {
            ListKind::Unordered => '-',
            ListKind::Ordered => '*',
        }
    }

    pub const fn open_tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "<ul>",
            ListKind::Ordered => "<ol>",
        }
    }

    pub const fn close_tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "</ul>",
            ListKind::Ordered => "</ol>",
        }
    }

    /// Returns the item text when `line` starts with this kind's marker.
    ///
    /// Only the first marker is consumed; whitespace around the text is
    /// trimmed.
    pub fn item(self, line: &str) -> Option<&str> {
        line.strip_prefix(self.marker()).map(str::trim)
    }

    pub fn render_item(text: &str) -> String {
        format!("<li>{text}</li>")
    }
}

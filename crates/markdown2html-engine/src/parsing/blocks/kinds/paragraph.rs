/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters - they are the default block when no
/// other opener matches. Blank lines produce a line break marker rather
/// than content.
pub struct Paragraph;

impl Paragraph {
    pub const OPEN: &'static str = "<p>";
    pub const CLOSE: &'static str = "</p>";
    pub const LINE_BREAK: &'static str = "<br/>";
}

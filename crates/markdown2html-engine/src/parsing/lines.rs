/// A single source line with its 1-based line number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRef<'a> {
    /// 1-based position of the line in the document.
    pub number: usize,
    /// The line text without its `\n` (a trailing `\r` is kept).
    pub text: &'a str,
}

/// Returns an iterator over the lines of a document.
///
/// Splits on `\n` only, so a final line without a newline is still yielded
/// and an empty document yields nothing. A trailing `\r` stays on the line;
/// the classifier treats it as line-ending whitespace.
pub fn document_lines(text: &str) -> impl Iterator<Item = LineRef<'_>> + '_ {
    text.split_inclusive('\n')
        .enumerate()
        .map(|(idx, line)| LineRef {
            number: idx + 1,
            text: line.strip_suffix('\n').unwrap_or(line),
        })
}

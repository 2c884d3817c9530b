/// ATX heading block type with owned marker constants.
///
/// A heading is 1 to 6 `#` characters followed by a space. Anything with
/// more markers, or without the space, is not a heading.
pub struct Heading;

impl Heading {
    /// The heading marker character.
    pub const MARKER: char = '#';
    /// Deepest heading level HTML has a tag for.
    pub const MAX_LEVEL: u8 = 6;

    /// Parses a heading line, returning `(level, text)`.
    ///
    /// `text` has the markers and surrounding whitespace removed.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        let rest = line.trim_start_matches(Self::MARKER);
        let markers = line.len() - rest.len();

        if markers == 0 || markers > usize::from(Self::MAX_LEVEL) || !rest.starts_with(' ') {
            return None;
        }

        Some((markers as u8, rest.trim()))
    }

    pub fn render(level: u8, text: &str) -> String {
        format!("<h{level}>{text}</h{level}>")
    }
}

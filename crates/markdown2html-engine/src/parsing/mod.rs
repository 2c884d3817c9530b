pub mod blocks;
pub mod inline;
pub mod lines;

#[cfg(test)]
mod tests;

pub use blocks::{BlockState, LineClass, MarkdownLineClassifier, step};

use lines::document_lines;

/// Incremental line translator.
///
/// Feed lines with [`Translator::push_line`] and call
/// [`Translator::finish`] once to close anything still open.
#[derive(Debug, Default)]
pub struct Translator {
    state: BlockState,
}

impl Translator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> BlockState {
        self.state
    }

    /// Translate one source line into zero or more output fragments.
    pub fn push_line(&mut self, line: &str) -> Vec<String> {
        let (next, out) = step(self.state, line);
        self.state = next;
        out
    }

    /// Closing tags for blocks left open at end of document.
    pub fn finish(self) -> Vec<String> {
        self.state.flush()
    }
}

/// Translate a sequence of lines into output fragments, one per HTML line.
pub fn translate_lines<'a, I>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut translator = Translator::new();
    let mut out = Vec::new();
    for line in lines {
        out.extend(translator.push_line(line));
    }
    out.extend(translator.finish());
    out
}

/// Translate a whole document.
///
/// Fragments are joined with `\n` and the result ends with a newline
/// unless it is empty.
pub fn translate(document: &str) -> String {
    let mut translator = Translator::new();
    let mut html = String::with_capacity(document.len() + document.len() / 4);

    for line in document_lines(document) {
        let fragments = translator.push_line(line.text);
        log::trace!("line {}: {} fragment(s)", line.number, fragments.len());
        push_fragments(&mut html, fragments);
    }
    push_fragments(&mut html, translator.finish());

    html
}

fn push_fragments(html: &mut String, fragments: Vec<String>) {
    for fragment in fragments {
        html.push_str(&fragment);
        html.push('\n');
    }
}

use crate::parsing::inline;

use super::{
    classify::{LineClass, MarkdownLineClassifier},
    kinds::{Heading, ListKind, Paragraph},
};

/// Open-block flags carried from one line to the next.
///
/// Transitions keep at most one block open at a time: opening a list or a
/// heading closes a paragraph, text closes any list, and the two list
/// kinds close each other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlockState {
    pub unordered_list_open: bool,
    pub ordered_list_open: bool,
    pub paragraph_open: bool,
}

impl BlockState {
    /// True when no block is open.
    pub fn is_idle(&self) -> bool {
        !(self.unordered_list_open || self.ordered_list_open || self.paragraph_open)
    }

    /// Closing tags for every block still open at end of document.
    ///
    /// Order is unordered list, ordered list, then paragraph.
    pub fn flush(mut self) -> Vec<String> {
        let mut out = Vec::new();
        self.close_all(&mut out);
        out
    }

    /// Applies an already classified line, returning the next state and the
    /// fragments to emit.
    pub fn apply(mut self, class: LineClass) -> (BlockState, Vec<String>) {
        let mut out = Vec::with_capacity(3);

        match class {
            LineClass::Heading { level, text } => {
                self.close_all(&mut out);
                out.push(Heading::render(level, &text));
            }
            LineClass::UnorderedItem(text) => {
                self.close_paragraph(&mut out);
                self.open_list(ListKind::Unordered, &mut out);
                out.push(ListKind::render_item(&text));
            }
            LineClass::OrderedItem(text) => {
                self.close_paragraph(&mut out);
                self.open_list(ListKind::Ordered, &mut out);
                out.push(ListKind::render_item(&text));
            }
            LineClass::Blank => {
                self.close_all(&mut out);
                out.push(Paragraph::LINE_BREAK.to_string());
            }
            LineClass::Text(text) => {
                self.close_list(ListKind::Unordered, &mut out);
                self.close_list(ListKind::Ordered, &mut out);
                if !self.paragraph_open {
                    out.push(Paragraph::OPEN.to_string());
                    self.paragraph_open = true;
                }
                out.push(text);
            }
        }

        (self, out)
    }

    fn list_flag(&mut self, kind: ListKind) -> &mut bool {
        match kind {
            ListKind::Unordered => &mut self.unordered_list_open,
            ListKind::Ordered => &mut self.ordered_list_open,
        }
    }

    fn open_list(&mut self, kind: ListKind, out: &mut Vec<String>) {
        let other = match kind {
            ListKind::Unordered => ListKind::Ordered,
            ListKind::Ordered => ListKind::Unordered,
        };
        self.close_list(other, out);

        let open = self.list_flag(kind);
        if !*open {
            *open = true;
            out.push(kind.open_tag().to_string());
        }
    }

    fn close_list(&mut self, kind: ListKind, out: &mut Vec<String>) {
        let open = self.list_flag(kind);
        if *open {
            *open = false;
            out.push(kind.close_tag().to_string());
        }
    }

    fn close_paragraph(&mut self, out: &mut Vec<String>) {
        if self.paragraph_open {
            self.paragraph_open = false;
            out.push(Paragraph::CLOSE.to_string());
        }
    }

    fn close_all(&mut self, out: &mut Vec<String>) {
        self.close_list(ListKind::Unordered, out);
        self.close_list(ListKind::Ordered, out);
        self.close_paragraph(out);
    }
}

/// Translates one raw source line.
///
/// Runs inline substitution, classifies the result and applies it to
/// `state`. Pure: the same state and line always give the same output.
pub fn step(state: BlockState, line: &str) -> (BlockState, Vec<String>) {
    let substituted = inline::substitute(line);
    let class = MarkdownLineClassifier.classify(&substituted);
    log::trace!("classified {line:?} as {class:?}");
    state.apply(class)
}

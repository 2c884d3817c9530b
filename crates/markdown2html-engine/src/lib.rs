pub mod io;
pub mod parsing;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use io::*;
pub use parsing::{
    BlockState, LineClass, MarkdownLineClassifier, Translator, step, translate, translate_lines,
};

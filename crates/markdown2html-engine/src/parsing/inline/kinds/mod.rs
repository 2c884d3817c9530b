//! Inline kinds, each owning its delimiters and replacement rule.

pub mod digest;
pub mod emphasis;
pub mod strip;

pub use digest::HashSpan;
pub use emphasis::Emphasis;
pub use strip::LetterStrip;

//! # Block Translation
//!
//! Two-phase, line-at-a-time block handling.
//!
//! ## Phases
//!
//! 1. **Line Classification** (`classify`): each substituted line becomes a
//!    `LineClass` holding only local facts (heading level, list marker,
//!    blank status)
//!
//! 2. **State Transition** (`state`): a `BlockState` applies the class,
//!    emitting open/close tags and content fragments
//!
//! ## Modules
//!
//! - **`kinds`**: Block-specific types owning their markers and tags
//!   (Heading, ListKind, Paragraph)
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`state`**: `BlockState` flags and the pure `step` function
//!
//! ## Key Invariants
//!
//! - At most one block is open between lines
//! - Every opened `<ul>`, `<ol>` and `<p>` is closed by a later line or by
//!   the end-of-document flush

pub mod classify;
pub mod kinds;
pub mod state;

pub use classify::{LineClass, MarkdownLineClassifier};
pub use state::{BlockState, step};

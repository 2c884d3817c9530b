pub mod heading;
pub mod list;
pub mod paragraph;

pub use heading::Heading;
pub use list::ListKind;
pub use paragraph::Paragraph;

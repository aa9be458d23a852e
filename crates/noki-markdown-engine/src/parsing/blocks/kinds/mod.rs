pub mod heading;
pub mod list_line;
pub mod paragraph;

pub use heading::Heading;
pub use list_line::{ListLine, ListMarker};
pub use paragraph::Paragraph;

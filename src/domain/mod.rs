pub mod enums;
pub mod todo;

pub use enums::{Severity, UiMode, Variant};
pub use todo::{normalize_content, Todo, TodoId};

pub mod due;
pub mod loader;
pub mod publisher;
pub mod records;
pub mod selector;
pub mod timezone;

pub use records::{CategoryRecord, CategoryTable, ContactRecord, ContactRow, ContactTable};

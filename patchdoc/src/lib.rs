pub mod errors;
pub mod flatten;
pub mod merge;
pub mod node;
pub mod path;
pub mod update;

// reexport
pub use errors::{Error, Result};
pub use flatten::flatten;
pub use merge::{merge, merge_into};
pub use node::{Map, Node};
pub use path::FieldPath;
pub use update::FieldUpdates;

#[cfg(test)]
mod tests;

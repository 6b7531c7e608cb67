pub mod io;
pub mod models;
pub mod parsing;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use io::{IoError, LoadError};
pub use models::{ContentKind, ExerciseContent, ExerciseFile, Topic};
pub use parsing::{InstructionalBlock, Language, ParseError, Task, parse_notebook, parse_sql};

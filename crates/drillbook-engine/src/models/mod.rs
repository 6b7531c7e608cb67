pub mod content;
pub mod exercise_file;
pub mod topic;

pub use content::ExerciseContent;
pub use exercise_file::ExerciseFile;
pub use topic::{ContentKind, Topic};

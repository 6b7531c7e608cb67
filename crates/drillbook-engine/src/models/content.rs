use crate::parsing::{InstructionalBlock, Task};

/// Parsed payload of an exercise file, ready for a presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExerciseContent {
    Sql(Vec<Task>),
    Notebook(Vec<InstructionalBlock>),
}

impl ExerciseContent {
    pub fn is_empty(&self) -> bool {
        match self {
            ExerciseContent::Sql(tasks) => tasks.is_empty(),
            ExerciseContent::Notebook(blocks) => blocks.is_empty(),
        }
    }
}

use serde::Serialize;

/// Language of a code listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Python,
    Sql,
}

impl Language {
    /// The fence info string for this language.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::Sql => "sql",
        }
    }
}

/// One renderable unit extracted from a notebook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub enum InstructionalBlock {
    /// A `# Task 1.2:` prompt.
    Task { text: String },
    /// Body of a `##### Hint` details block.
    Hint { text: String },
    /// Body of a `##### Solution` details block that is not fenced code.
    SolutionMarkdown { text: String },
    /// Solution code, either fenced inside a details block or the code cell
    /// following a bare `##### Solution` header.
    SolutionCode { language: Language, text: String },
    /// A filled-in code cell that is not marked as a solution.
    Code { language: Language, text: String },
    /// Any other markdown, including bare solution headers.
    PlainMarkdown { text: String },
}

impl InstructionalBlock {
    /// The text carried by the block, whatever its kind.
    pub fn text(&self) -> &str {
        match self {
            InstructionalBlock::Task { text }
            | InstructionalBlock::Hint { text }
            | InstructionalBlock::SolutionMarkdown { text }
            | InstructionalBlock::SolutionCode { text, .. }
            | InstructionalBlock::Code { text, .. }
            | InstructionalBlock::PlainMarkdown { text } => text,
        }
    }

    /// Whether the block is hidden behind a solution toggle when rendered.
    pub fn is_solution(&self) -> bool {
        matches!(
            self,
            InstructionalBlock::SolutionMarkdown { .. } | InstructionalBlock::SolutionCode { .. }
        )
    }
}

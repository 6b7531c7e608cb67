use serde::Deserialize;

/// The subset of the `.ipynb` format the block parser reads.
///
/// Everything besides `cells[].cell_type` and `cells[].source` is ignored.
#[derive(Debug, Deserialize)]
pub struct Notebook {
    pub cells: Vec<Cell>,
}

#[derive(Debug, Deserialize)]
pub struct Cell {
    pub cell_type: String,
    pub source: Source,
}

/// Cell source as stored on disk: usually a list of lines that keep their
/// trailing newlines, sometimes a single string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Source {
    Lines(Vec<String>),
    Text(String),
}

/// The kind of a cell, as far as block parsing cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Markdown,
    Code,
    Other,
}

impl Cell {
    pub fn kind(&self) -> CellKind {
        match self.cell_type.as_str() {
            "markdown" => CellKind::Markdown,
            "code" => CellKind::Code,
            _ => CellKind::Other,
        }
    }

    /// Source joined into one string. No separator is inserted between lines.
    pub fn text(&self) -> String {
        match &self.source {
            Source::Lines(lines) => lines.concat(),
            Source::Text(text) => text.clone(),
        }
    }
}

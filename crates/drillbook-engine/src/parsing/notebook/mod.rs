//! # Notebook Block Parsing
//!
//! Turns an `.ipynb` document into [`InstructionalBlock`]s.
//!
//! 1. **Cell Classification** (`classify`): each cell's joined source becomes a
//!    [`CellClass`]. Markdown cells go through ordered first-match rules
//!    (task, hint, inline solution, bare solution header, plain); code cells
//!    are checked against the placeholder stubs.
//! 2. **Block Construction** (`builder`): a [`BlockBuilder`] holds the
//!    [`CellState`] so that a bare `##### Solution` header turns the next code
//!    cell into a solution, even if that cell is only a stub.
//!
//! Decoding is the only failure point. Missing optional structure (a hint
//! without a well-formed `<details>` body) is skipped silently.

pub mod builder;
pub mod classify;
pub mod document;
pub mod types;

pub use builder::{BlockBuilder, CellState};
pub use classify::{CellClass, NotebookCellClassifier, PLACEHOLDERS, is_placeholder};
pub use document::{Cell, CellKind, Notebook};
pub use types::{InstructionalBlock, Language};

/// The notebook could not be decoded as a cell list.
#[derive(Debug, thiserror::Error)]
#[error("could not decode notebook: {0}")]
pub struct ParseError(#[from] serde_json::Error);

/// Parses notebook JSON into instructional blocks.
pub fn parse_notebook(json: &str) -> Result<Vec<InstructionalBlock>, ParseError> {
    let notebook: Notebook = serde_json::from_str(json)?;
    Ok(parse_cells(&notebook.cells))
}

/// Runs block construction over already decoded cells.
pub fn parse_cells(cells: &[Cell]) -> Vec<InstructionalBlock> {
    let classifier = NotebookCellClassifier;
    let mut builder = BlockBuilder::new();

    for cell in cells {
        let text = cell.text();
        builder.push(classifier.classify(cell.kind(), &text));
    }

    builder.finish()
}

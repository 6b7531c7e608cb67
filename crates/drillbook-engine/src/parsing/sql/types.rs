use serde::Serialize;

/// One comment/code pairing extracted from a SQL script.
///
/// At least one of the two fields is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    /// Task prompt assembled from the contiguous `--` lines above the code.
    pub comment: String,
    /// The statements that answer the prompt.
    pub code: String,
}

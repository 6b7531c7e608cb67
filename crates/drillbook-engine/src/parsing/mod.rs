//! # Content Parsing
//!
//! Two parsers with the same shape: classify each unit (line or cell) on its
//! own, then feed the classifications to a builder that owns the state
//! carried between units and emits presentation-ready output.
//!
//! - **`sql`**: SQL script → [`Task`] list. Never fails.
//! - **`notebook`**: `.ipynb` JSON → [`InstructionalBlock`] list, or a
//!   [`ParseError`] when the JSON cannot be decoded.
//! - **`text`**: sanitization helpers shared by both.
//!
//! Both parsers are pure: no I/O, no global mutable state, and the same input
//! always yields the same output.

pub mod notebook;
pub mod sql;
pub mod text;

pub use notebook::{InstructionalBlock, Language, ParseError, parse_notebook};
pub use sql::{Task, parse_sql};

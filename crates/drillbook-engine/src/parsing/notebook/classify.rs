use std::sync::OnceLock;

use regex::Regex;

use super::document::CellKind;
use crate::parsing::text::{extract_details_body, significant_code};

/// Stub texts that mark an unfilled exercise cell. Compared against the
/// lower-cased, comment-stripped cell source.
pub const PLACEHOLDERS: [&str; 3] = [
    "no python code needed here for manual setup. execute sql in your mysql client.",
    "place your code here",
    "pass",
];

const DETAILS_OPEN: &str = "<details>";

/// Classification of a single notebook cell containing only local facts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellClass<'a> {
    /// `# Task 1.1:` heading cell.
    Task(&'a str),
    /// `##### Hint` with a details wrapper; body is `None` when the wrapper is malformed.
    Hint(Option<&'a str>),
    /// `##### Solution` carrying its own details body.
    InlineSolution(Option<&'a str>),
    /// Bare `##### Solution` header; the next code cell is the answer.
    DeferredSolution(&'a str),
    /// Any other markdown.
    Markdown(&'a str),
    /// Code cell and whether it is only a placeholder stub.
    Code { source: &'a str, placeholder: bool },
    /// Raw or unknown cell types.
    Other,
}

fn task_regex() -> &'static Regex {
    static TASK: OnceLock<Regex> = OnceLock::new();
    TASK.get_or_init(|| Regex::new(r"(?i)^#+\s*Task\s*\d+(\.\d+)*:").expect("Invalid task regex"))
}

fn hint_regex() -> &'static Regex {
    static HINT: OnceLock<Regex> = OnceLock::new();
    HINT.get_or_init(|| Regex::new(r"(?i)^#####\s*Hint").expect("Invalid hint regex"))
}

fn solution_regex() -> &'static Regex {
    static SOLUTION: OnceLock<Regex> = OnceLock::new();
    SOLUTION.get_or_init(|| Regex::new(r"(?i)^#####\s*Solution").expect("Invalid solution regex"))
}

type Rule = (fn(&str) -> bool, for<'a> fn(&'a str) -> CellClass<'a>);

/// Ordered markdown rules, first match wins.
const MARKDOWN_RULES: [Rule; 5] = [
    (is_task, task),
    (is_hint, hint),
    (is_inline_solution, inline_solution),
    (is_solution_header, deferred_solution),
    (always, plain),
];

fn always(_: &str) -> bool {
    true
}

fn task(text: &str) -> CellClass<'_> {
    CellClass::Task(text)
}

fn hint(text: &str) -> CellClass<'_> {
    CellClass::Hint(extract_details_body(text))
}

fn inline_solution(text: &str) -> CellClass<'_> {
    CellClass::InlineSolution(extract_details_body(text))
}

fn deferred_solution(text: &str) -> CellClass<'_> {
    CellClass::DeferredSolution(text)
}

fn plain(text: &str) -> CellClass<'_> {
    CellClass::Markdown(text)
}

fn is_task(text: &str) -> bool {
    task_regex().is_match(text)
}

fn is_hint(text: &str) -> bool {
    hint_regex().is_match(text) && text.contains(DETAILS_OPEN)
}

fn is_inline_solution(text: &str) -> bool {
    is_solution_header(text) && text.contains(DETAILS_OPEN)
}

fn is_solution_header(text: &str) -> bool {
    solution_regex().is_match(text)
}

/// True when the code cell holds nothing but comments or a known stub.
pub fn is_placeholder(source: &str) -> bool {
    let significant = significant_code(source);
    significant.is_empty() || PLACEHOLDERS.contains(&significant.as_str())
}

/// Classifies notebook cells for the block construction phase.
pub struct NotebookCellClassifier;

impl NotebookCellClassifier {
    /// Classifies one cell given its kind and joined source text.
    pub fn classify<'a>(&self, kind: CellKind, text: &'a str) -> CellClass<'a> {
        match kind {
            CellKind::Markdown => MARKDOWN_RULES
                .iter()
                .find(|(matches, _)| matches(text))
                .map(|(_, handle)| handle(text))
                .unwrap_or(CellClass::Markdown(text)),
            CellKind::Code => CellClass::Code {
                source: text,
                placeholder: is_placeholder(text),
            },
            CellKind::Other => CellClass::Other,
        }
    }
}

use crate::parsing::text::{SQL_COMMENT_MARKER, escape_ordered_list, strip_comment_marker};

/// Prefix of a database-selection line that never belongs to a task.
pub const DIRECTIVE_PREFIX: &str = "USE ";

/// Classification of a single SQL line containing only local facts.
///
/// This is phase 1 of task parsing: each line is classified independently
/// of the lines around it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// `USE db;` style line. Ends the pending task and is dropped.
    Directive,
    /// A `--` comment, already stripped and escaped for Markdown.
    Comment(String),
    /// Whitespace-only line, kept raw for code formatting.
    Blank(&'a str),
    /// Anything else, kept raw.
    Code(&'a str),
}

type Rule = (fn(&str) -> bool, for<'a> fn(&'a str, &str) -> LineClass<'a>);

/// Ordered rules, first match wins. Predicates see the trimmed line,
/// handlers see both the raw and trimmed line.
const RULES: [Rule; 4] = [
    (is_directive, directive),
    (is_comment, comment),
    (is_blank, blank),
    (always, code),
];

fn is_directive(trimmed: &str) -> bool {
    trimmed.starts_with(DIRECTIVE_PREFIX)
}

fn is_comment(trimmed: &str) -> bool {
    trimmed.starts_with(SQL_COMMENT_MARKER)
}

fn is_blank(trimmed: &str) -> bool {
    trimmed.is_empty()
}

fn always(_: &str) -> bool {
    true
}

fn directive<'a>(_raw: &'a str, _trimmed: &str) -> LineClass<'a> {
    LineClass::Directive
}

fn comment<'a>(_raw: &'a str, trimmed: &str) -> LineClass<'a> {
    let text = strip_comment_marker(trimmed);
    LineClass::Comment(escape_ordered_list(&text).into_owned())
}

fn blank<'a>(raw: &'a str, _trimmed: &str) -> LineClass<'a> {
    LineClass::Blank(raw)
}

fn code<'a>(raw: &'a str, _trimmed: &str) -> LineClass<'a> {
    LineClass::Code(raw)
}

/// Classifies individual lines for the task parsing phase.
pub struct SqlLineClassifier;

impl SqlLineClassifier {
    /// Classifies a raw line (without its newline) into a [`LineClass`].
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        let trimmed = line.trim();
        RULES
            .iter()
            .find(|(matches, _)| matches(trimmed))
            .map(|(_, handle)| handle(line, trimmed))
            .unwrap_or(LineClass::Code(line))
    }
}

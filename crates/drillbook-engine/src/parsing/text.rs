//! Text sanitization shared by the SQL and notebook parsers.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;

use super::notebook::Language;

/// Marker that opens a SQL line comment.
pub const SQL_COMMENT_MARKER: &str = "--";

const FENCE: &str = "```";

fn ordered_list_regex() -> &'static Regex {
    static ORDERED_LIST: OnceLock<Regex> = OnceLock::new();
    ORDERED_LIST.get_or_init(|| Regex::new(r"^(\d+)\.\s").expect("Invalid ordered list regex"))
}

fn details_regex() -> &'static Regex {
    static DETAILS: OnceLock<Regex> = OnceLock::new();
    DETAILS.get_or_init(|| {
        Regex::new(r"(?s)<details>\s*<summary>.*?</summary>\s*(.*?)\s*</details>")
            .expect("Invalid details regex")
    })
}

fn comment_regexes() -> &'static [Regex; 3] {
    static COMMENTS: OnceLock<[Regex; 3]> = OnceLock::new();
    COMMENTS.get_or_init(|| {
        [
            Regex::new(r"#.*").expect("Invalid line comment regex"),
            Regex::new(r##"(?s)""".*?""""##).expect("Invalid docstring regex"),
            Regex::new(r"(?s)'''.*?'''").expect("Invalid docstring regex"),
        ]
    })
}

/// Splits on `\n`, `\r\n` and a lone `\r`, dropping the terminators.
///
/// Unlike [`str::lines`], old Mac line endings also start a new line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = text;
    while let Some(end) = rest.find(['\n', '\r']) {
        lines.push(&rest[..end]);
        let width = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[end + width..];
    }
    if !rest.is_empty() {
        lines.push(rest);
    }
    lines
}

/// Escapes a leading `N. ` so Markdown renders it literally instead of as an
/// ordered list item. Only the first occurrence is rewritten.
pub fn escape_ordered_list(text: &str) -> Cow<'_, str> {
    ordered_list_regex().replacen(text, 1, r"${1}\. ")
}

/// Removes every `--` marker from a trimmed comment line and trims the rest.
pub fn strip_comment_marker(line: &str) -> String {
    line.replace(SQL_COMMENT_MARKER, "").trim().to_string()
}

/// Returns the body of a `<details><summary>…</summary>BODY</details>` wrapper,
/// trimmed. `None` when the wrapper is missing or malformed.
pub fn extract_details_body(text: &str) -> Option<&str> {
    details_regex()
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
}

/// If `body` starts with a python or sql fence, strips all fence markers and
/// returns the bare code with its language.
pub fn strip_code_fence(body: &str) -> Option<(Language, String)> {
    [Language::Python, Language::Sql]
        .into_iter()
        .find_map(|language| {
            let opener = format!("{FENCE}{}", language.as_str());
            body.starts_with(&opener).then(|| {
                let code = body.replace(&opener, "").replace(FENCE, "");
                (language, code.trim().to_string())
            })
        })
}

/// Strips `#` line comments and triple-quoted blocks, in that order, then
/// trims and lower-cases what is left.
pub fn significant_code(source: &str) -> String {
    let cleaned = comment_regexes()
        .iter()
        .fold(source.to_string(), |acc, re| re.replace_all(&acc, "").into_owned());
    cleaned.trim().to_lowercase()
}

//! # SQL Task Parsing
//!
//! Splits a SQL exercise script into comment/code [`Task`] pairs.
//!
//! 1. **Line Classification** (`classify`): every line becomes a [`LineClass`]
//!    (directive, comment, blank, code) by ordered first-match rules.
//! 2. **Task Construction** (`builder`): a [`TaskBuilder`] carries the
//!    [`TaskState`] across lines and emits a [`Task`] at each boundary.
//!
//! A boundary is a `USE` line, a `--` line that follows code, or end of input.
//! Parsing never fails; malformed input yields fewer tasks.

pub mod builder;
pub mod classify;
pub mod types;

pub use builder::{TaskBuilder, TaskState};
pub use classify::{LineClass, SqlLineClassifier};
pub use types::Task;

use crate::parsing::text::split_lines;

/// Parses a SQL script into its tasks.
pub fn parse_sql(text: &str) -> Vec<Task> {
    let classifier = SqlLineClassifier;
    let mut builder = TaskBuilder::new();

    for line in split_lines(text) {
        builder.push(classifier.classify(line));
    }

    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn task(comment: &str, code: &str) -> Task {
        Task {
            comment: comment.into(),
            code: code.into(),
        }
    }

    #[test]
    fn use_line_is_discarded() {
        let tasks = parse_sql("USE mydb;\n-- 1. Select all users\nSELECT * FROM users;\n");
        insta::assert_debug_snapshot!(tasks, @r#"
        [
            Task {
                comment: "1\\. Select all users",
                code: "SELECT * FROM users;",
            },
        ]
        "#);
    }

    #[test]
    fn use_line_flushes_pending_task() {
        let sql = "-- First\nSELECT 1;\nUSE other;\nSELECT 2;";
        assert_eq!(
            parse_sql(sql),
            vec![task("First", "SELECT 1;"), task("", "SELECT 2;")]
        );
    }

    #[test]
    fn use_text_never_leaks_into_tasks() {
        let sql = "-- A\nUSE db;\n-- B\nSELECT 1;\nUSE db2;";
        for t in parse_sql(sql) {
            assert!(!t.comment.contains("USE "));
            assert!(!t.code.contains("USE "));
        }
    }

    #[test]
    fn consecutive_comments_merge() {
        let sql = "-- Find the players\n-- ordered by age\nSELECT * FROM players ORDER BY age;";
        assert_eq!(
            parse_sql(sql),
            vec![task(
                "Find the players\nordered by age",
                "SELECT * FROM players ORDER BY age;"
            )]
        );
    }

    #[test]
    fn comment_after_code_starts_new_task() {
        let sql = "-- 1. One\nSELECT 1;\n\n-- 2. Two\nSELECT 2;\n";
        assert_eq!(
            parse_sql(sql),
            vec![task(r"1\. One", "SELECT 1;"), task(r"2\. Two", "SELECT 2;")]
        );
    }

    #[test]
    fn blank_after_comment_is_kept_inside_code() {
        let sql = "-- Prompt\n\nSELECT a,\n\n       b\nFROM t;";
        assert_eq!(
            parse_sql(sql),
            vec![task("Prompt", "SELECT a,\n\n       b\nFROM t;")]
        );
    }

    #[test]
    fn blank_separated_comments_become_separate_tasks() {
        let sql = "-- Section heading\n\n-- 1. Real task\nSELECT 1;";
        assert_eq!(
            parse_sql(sql),
            vec![task("Section heading", ""), task(r"1\. Real task", "SELECT 1;")]
        );
    }

    #[test]
    fn code_before_any_comment_is_a_task() {
        assert_eq!(
            parse_sql("CREATE TABLE t (id INT);"),
            vec![task("", "CREATE TABLE t (id INT);")]
        );
    }

    #[test]
    fn only_blank_lines_yield_nothing() {
        assert!(parse_sql("\n\n   \n\t\n").is_empty());
        assert!(parse_sql("").is_empty());
    }

    #[test]
    fn crlf_input() {
        assert_eq!(
            parse_sql("-- Prompt\r\nSELECT 1;\r\n"),
            vec![task("Prompt", "SELECT 1;")]
        );
    }

    #[test]
    fn lone_carriage_returns_split_lines() {
        assert_eq!(
            parse_sql("USE db;\r-- 1. Prompt\rSELECT 1;\r-- 2. Next\rSELECT 2;\r"),
            vec![task(r"1\. Prompt", "SELECT 1;"), task(r"2\. Next", "SELECT 2;")]
        );
    }

    #[test]
    fn parsing_is_deterministic() {
        let sql = "USE x;\n-- a\n--b\n\nSELECT 1;\n-- 2. c\nSELECT 2;";
        assert_eq!(parse_sql(sql), parse_sql(sql));
    }
}

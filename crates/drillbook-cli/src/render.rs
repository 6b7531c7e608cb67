//! Turns parsed exercise content into styled terminal lines.
//!
//! No ratatui types here. `main` maps each [`Tone`] to a terminal style.

use drillbook_engine::{ExerciseContent, InstructionalBlock, Task, Topic};

use crate::markdown::flatten;

pub const NO_TASKS: &str = "No tasks found in the selected SQL file or file is empty/malformed.";
pub const NOTEBOOK_ERROR: &str =
    "Error: Could not decode the .ipynb file. Please ensure it's a valid Jupyter Notebook.";

const DIVIDER_WIDTH: usize = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Heading,
    Task,
    Hint,
    Solution,
    Code,
    Toggle,
    Divider,
    Muted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLine {
    pub tone: Tone,
    pub text: String,
}

impl RenderedLine {
    fn new(tone: Tone, text: impl Into<String>) -> Self {
        Self {
            tone,
            text: text.into(),
        }
    }
}

/// Which collapsible sections are open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub show_hints: bool,
    pub show_solutions: bool,
}

impl RenderOptions {
    pub fn expanded() -> Self {
        Self {
            show_hints: true,
            show_solutions: true,
        }
    }
}

pub fn render_content(content: &ExerciseContent, opts: RenderOptions) -> Vec<RenderedLine> {
    match content {
        ExerciseContent::Sql(tasks) => render_tasks(tasks, opts),
        ExerciseContent::Notebook(blocks) => render_blocks(blocks, opts),
    }
}

/// Each task is a collapsible entry titled by its prompt, with the code as body.
pub fn render_tasks(tasks: &[Task], opts: RenderOptions) -> Vec<RenderedLine> {
    if tasks.is_empty() {
        return vec![RenderedLine::new(Tone::Muted, NO_TASKS)];
    }

    let mut out = Vec::new();
    for task in tasks {
        let marker = if opts.show_solutions { "▾" } else { "▸" };
        let mut title = flatten(&task.comment).into_iter();
        match title.next() {
            Some(first) => {
                out.push(RenderedLine::new(Tone::Task, format!("{marker} {}", first.text)));
                out.extend(title.map(|l| RenderedLine::new(Tone::Task, format!("  {}", l.text))));
            }
            None => out.push(RenderedLine::new(Tone::Task, format!("{marker} (untitled)"))),
        }
        if opts.show_solutions {
            push_code(&mut out, &task.code, Tone::Code);
        }
        out.push(divider());
    }
    out
}

pub fn render_blocks(blocks: &[InstructionalBlock], opts: RenderOptions) -> Vec<RenderedLine> {
    let mut out = Vec::new();
    for block in blocks {
        match block {
            InstructionalBlock::Task { text } => {
                out.extend(
                    flatten(text)
                        .into_iter()
                        .map(|l| RenderedLine::new(Tone::Task, format!("┃ {}", l.text))),
                );
            }
            InstructionalBlock::Hint { text } => {
                if opts.show_hints {
                    out.push(RenderedLine::new(Tone::Toggle, "▾ Hint"));
                    push_markdown(&mut out, text, Tone::Hint);
                } else {
                    out.push(RenderedLine::new(Tone::Toggle, "▸ Hint (h)"));
                }
            }
            InstructionalBlock::SolutionMarkdown { text } => {
                if opts.show_solutions {
                    out.push(RenderedLine::new(Tone::Toggle, "▾ Solution"));
                    push_markdown(&mut out, text, Tone::Solution);
                } else {
                    out.push(RenderedLine::new(Tone::Toggle, "▸ Solution (s)"));
                }
                out.push(divider());
            }
            InstructionalBlock::SolutionCode { language, text } => {
                if opts.show_solutions {
                    out.push(RenderedLine::new(
                        Tone::Toggle,
                        format!("▾ Solution [{}]", language.as_str()),
                    ));
                    push_code(&mut out, text, Tone::Solution);
                } else {
                    out.push(RenderedLine::new(Tone::Toggle, "▸ Solution (s)"));
                }
                out.push(divider());
            }
            InstructionalBlock::Code { text, .. } => push_code(&mut out, text, Tone::Code),
            InstructionalBlock::PlainMarkdown { text } => {
                for line in flatten(text) {
                    let tone = if line.heading {
                        Tone::Heading
                    } else {
                        Tone::Plain
                    };
                    out.push(RenderedLine::new(tone, line.text));
                }
            }
        }
    }
    out
}

/// Placeholder pane for a topic before any file is shown.
pub fn render_topic_intro(topic: &Topic) -> Vec<RenderedLine> {
    let mut out = vec![RenderedLine::new(Tone::Heading, topic.title.clone())];
    if let Some(description) = &topic.description {
        out.push(RenderedLine::new(Tone::Plain, description.clone()));
    }
    out.push(RenderedLine::new(
        Tone::Muted,
        "Select a file to view its exercises",
    ));
    out
}

fn push_markdown(out: &mut Vec<RenderedLine>, text: &str, tone: Tone) {
    out.extend(
        flatten(text)
            .into_iter()
            .map(|l| RenderedLine::new(tone, format!("  {}", l.text))),
    );
}

fn push_code(out: &mut Vec<RenderedLine>, code: &str, tone: Tone) {
    out.extend(
        code.lines()
            .map(|line| RenderedLine::new(tone, format!("    {line}"))),
    );
}

fn divider() -> RenderedLine {
    RenderedLine::new(Tone::Divider, "─".repeat(DIVIDER_WIDTH))
}

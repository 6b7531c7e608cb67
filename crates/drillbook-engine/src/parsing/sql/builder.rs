use super::{classify::LineClass, types::Task};

/// Where the builder is within the current task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    /// Nothing accumulated yet, or the previous task was just flushed.
    Pristine,
    /// Reading the contiguous `--` lines of a prompt.
    Comment,
    /// Reading the code that answers the prompt.
    Code,
}

pub struct TaskBuilder<'a> {
    state: TaskState,
    comment: Vec<String>,
    code: Vec<&'a str>,
    out: Vec<Task>,
}

impl<'a> TaskBuilder<'a> {
    pub fn new() -> Self {
        Self {
            state: TaskState::Pristine,
            comment: vec![],
            code: vec![],
            out: vec![],
        }
    }

    pub fn state(&self) -> TaskState {
        self.state
    }

    pub fn push(&mut self, class: LineClass<'a>) {
        match (self.state, class) {
            (_, LineClass::Directive) => self.flush(),
            (state, LineClass::Comment(text)) => {
                // A comment after code opens the next task.
                if state == TaskState::Code {
                    self.flush();
                }
                self.comment.push(text);
                self.state = TaskState::Comment;
            }
            (TaskState::Pristine, LineClass::Blank(_)) => {}
            (_, LineClass::Blank(raw) | LineClass::Code(raw)) => {
                self.code.push(raw);
                self.state = TaskState::Code;
            }
        }
    }

    pub fn finish(mut self) -> Vec<Task> {
        // EOF flush
        self.flush();
        self.out
    }

    fn flush(&mut self) {
        let state = std::mem::replace(&mut self.state, TaskState::Pristine);
        if state == TaskState::Pristine {
            return;
        }

        let comment = self.comment.join("\n").trim().to_string();
        let code = self.code.join("\n").trim().to_string();
        self.comment.clear();
        self.code.clear();

        if comment.is_empty() && code.is_empty() {
            log::debug!("dropping empty sql task");
            return;
        }

        log::debug!("sql task #{}: {comment:?}", self.out.len() + 1);
        self.out.push(Task { comment, code });
    }
}

impl Default for TaskBuilder<'_> {
    fn default() -> Self {
        Self::new()
    }
}

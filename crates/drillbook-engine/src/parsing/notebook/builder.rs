use super::{
    classify::CellClass,
    types::{InstructionalBlock, Language},
};
use crate::parsing::text::strip_code_fence;

/// State carried from one cell to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Idle,
    /// A bare solution header was seen; the next code cell is its body.
    AwaitingSolutionCode,
}

pub struct BlockBuilder {
    state: CellState,
    out: Vec<InstructionalBlock>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            state: CellState::Idle,
            out: vec![],
        }
    }

    pub fn state(&self) -> CellState {
        self.state
    }

    pub fn push(&mut self, class: CellClass<'_>) {
        match class {
            CellClass::Task(text) => {
                self.emit(InstructionalBlock::Task { text: text.into() });
                self.state = CellState::Idle;
            }
            CellClass::Hint(body) => {
                if let Some(text) = body {
                    self.emit(InstructionalBlock::Hint { text: text.into() });
                }
                self.state = CellState::Idle;
            }
            CellClass::InlineSolution(body) => {
                if let Some(body) = body {
                    let block = match strip_code_fence(body) {
                        Some((language, text)) => InstructionalBlock::SolutionCode { language, text },
                        None => InstructionalBlock::SolutionMarkdown { text: body.into() },
                    };
                    self.emit(block);
                }
                self.state = CellState::Idle;
            }
            CellClass::DeferredSolution(text) => {
                self.emit(InstructionalBlock::PlainMarkdown { text: text.into() });
                self.state = CellState::AwaitingSolutionCode;
            }
            CellClass::Markdown(text) => {
                self.emit(InstructionalBlock::PlainMarkdown { text: text.into() });
                self.state = CellState::Idle;
            }
            CellClass::Code {
                source,
                placeholder,
            } => self.push_code(source, placeholder),
            CellClass::Other => {}
        }
    }

    pub fn finish(self) -> Vec<InstructionalBlock> {
        self.out
    }

    fn push_code(&mut self, source: &str, placeholder: bool) {
        match self.state {
            // Solutions are shown even when they still look like a stub.
            CellState::AwaitingSolutionCode => {
                self.emit(InstructionalBlock::SolutionCode {
                    language: Language::Python,
                    text: source.into(),
                });
                self.state = CellState::Idle;
            }
            CellState::Idle if !placeholder => {
                self.emit(InstructionalBlock::Code {
                    language: Language::Python,
                    text: source.into(),
                });
            }
            CellState::Idle => log::debug!("skipping placeholder cell: {source:?}"),
        }
    }

    fn emit(&mut self, block: InstructionalBlock) {
        log::debug!("notebook block #{}: {block:?}", self.out.len() + 1);
        self.out.push(block);
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn code(source: &str, placeholder: bool) -> CellClass<'_> {
        CellClass::Code {
            source,
            placeholder,
        }
    }

    #[test]
    fn deferred_solution_sets_pending_state() {
        let mut b = BlockBuilder::new();
        b.push(CellClass::DeferredSolution("##### Solution"));
        assert_eq!(b.state(), CellState::AwaitingSolutionCode);
        b.push(code("pass", true));
        assert_eq!(b.state(), CellState::Idle);
        assert_eq!(
            b.finish(),
            vec![
                InstructionalBlock::PlainMarkdown {
                    text: "##### Solution".into()
                },
                InstructionalBlock::SolutionCode {
                    language: Language::Python,
                    text: "pass".into()
                },
            ]
        );
    }

    #[test]
    fn markdown_clears_pending_state() {
        let mut b = BlockBuilder::new();
        b.push(CellClass::DeferredSolution("##### Solution"));
        b.push(CellClass::Markdown("Some prose"));
        assert_eq!(b.state(), CellState::Idle);
        b.push(code("pass", true));
        assert_eq!(b.finish().len(), 2);
    }

    #[test]
    fn other_cells_keep_pending_state() {
        let mut b = BlockBuilder::new();
        b.push(CellClass::DeferredSolution("##### Solution"));
        b.push(CellClass::Other);
        assert_eq!(b.state(), CellState::AwaitingSolutionCode);
    }

    #[test]
    fn idle_placeholder_is_dropped() {
        let mut b = BlockBuilder::new();
        b.push(code("# Place your code here", true));
        assert!(b.finish().is_empty());
    }

    #[test]
    fn idle_code_is_emitted() {
        let mut b = BlockBuilder::new();
        b.push(code("df.describe()", false));
        assert_eq!(
            b.finish(),
            vec![InstructionalBlock::Code {
                language: Language::Python,
                text: "df.describe()".into()
            }]
        );
    }

    #[test]
    fn malformed_hint_emits_nothing() {
        let mut b = BlockBuilder::new();
        b.push(CellClass::Hint(None));
        b.push(CellClass::InlineSolution(None));
        assert!(b.finish().is_empty());
    }

    #[test]
    fn inline_solution_languages() {
        let mut b = BlockBuilder::new();
        b.push(CellClass::InlineSolution(Some("```python\nprint(1)\n```")));
        b.push(CellClass::InlineSolution(Some("```sql\nSELECT 1;\n```")));
        b.push(CellClass::InlineSolution(Some("Use **GROUP BY**.")));
        assert_eq!(
            b.finish(),
            vec![
                InstructionalBlock::SolutionCode {
                    language: Language::Python,
                    text: "print(1)".into()
                },
                InstructionalBlock::SolutionCode {
                    language: Language::Sql,
                    text: "SELECT 1;".into()
                },
                InstructionalBlock::SolutionMarkdown {
                    text: "Use **GROUP BY**.".into()
                },
            ]
        );
    }
}

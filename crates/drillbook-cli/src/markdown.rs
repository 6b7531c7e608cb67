use pulldown_cmark::{Event, Parser, Tag, TagEnd};

/// One terminal line produced from Markdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MdLine {
    pub heading: bool,
    pub text: String,
}

/// Flattens Markdown into plain terminal lines.
///
/// Headings are flagged so the caller can style them, list items get a
/// bullet or their number, code blocks keep their own line breaks. Inline
/// HTML such as `<details>` is dropped.
pub fn flatten(markdown: &str) -> Vec<MdLine> {
    let mut out = Flattener::default();

    for event in Parser::new(markdown) {
        match event {
            Event::Start(Tag::Heading { .. }) => out.heading = true,
            Event::End(TagEnd::Heading(_)) => {
                out.flush();
                out.heading = false;
            }
            Event::Start(Tag::List(start)) => out.lists.push(start),
            Event::End(TagEnd::List(_)) => {
                out.lists.pop();
            }
            Event::Start(Tag::Item) => out.open_item(),
            Event::Start(Tag::CodeBlock(_)) => out.in_code = true,
            Event::End(TagEnd::CodeBlock) => out.in_code = false,
            Event::Text(text) if out.in_code => {
                for line in text.lines() {
                    out.lines.push(MdLine {
                        heading: false,
                        text: format!("    {line}"),
                    });
                }
            }
            Event::Text(text) | Event::Code(text) => out.current.push_str(&text),
            Event::SoftBreak | Event::HardBreak => out.flush(),
            Event::End(TagEnd::Paragraph | TagEnd::Item) => out.flush(),
            Event::Rule => out.lines.push(MdLine {
                heading: false,
                text: "─".repeat(20),
            }),
            _ => {}
        }
    }

    out.flush();
    out.lines
}

#[derive(Default)]
struct Flattener {
    lines: Vec<MdLine>,
    current: String,
    heading: bool,
    in_code: bool,
    lists: Vec<Option<u64>>,
}

impl Flattener {
    fn open_item(&mut self) {
        self.flush();
        let depth = self.lists.len().saturating_sub(1);
        self.current.push_str(&"  ".repeat(depth));
        match self.lists.last_mut() {
            Some(Some(n)) => {
                self.current.push_str(&format!("{n}. "));
                *n += 1;
            }
            _ => self.current.push_str("• "),
        }
    }

    fn flush(&mut self) {
        if self.current.trim().is_empty() {
            self.current.clear();
            return;
        }
        self.lines.push(MdLine {
            heading: self.heading,
            text: std::mem::take(&mut self.current),
        });
    }
}

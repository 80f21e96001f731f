//! Markdown answer rendering.
//!
//! Answers arrive as markdown. They are flattened into terminal lines of
//! styled spans: paragraphs separated by blank lines, list items with their
//! markers, headings, code blocks indented, and inline strong, emphasis,
//! code and links carried as span styles.

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};

/// Inline style of a span.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Style {
    pub strong: bool,
    pub emphasis: bool,
    pub code: bool,
    pub heading: bool,
    pub link: bool,
}

impl Style {
    pub fn is_plain(&self) -> bool {
        *self == Style::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: Style,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    /// Text without styling.
    pub fn plain(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    pub fn is_blank(&self) -> bool {
        self.spans.iter().all(|s| s.text.trim().is_empty())
    }
}

/// Render markdown to styled lines.
pub fn render_markdown(text: &str) -> Vec<Line> {
    let mut renderer = Renderer::default();
    for event in Parser::new_ext(text, Options::empty()) {
        renderer.event(event);
    }
    renderer.finish()
}

#[derive(Default)]
struct Renderer {
    lines: Vec<Line>,
    current: Vec<Span>,
    strong: usize,
    emphasis: usize,
    heading: bool,
    code_block: bool,
    links: Vec<String>,
    /// Next marker per open list; `None` for bullet lists.
    lists: Vec<Option<u64>>,
    blank_pending: bool,
}

impl Renderer {
    fn event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),
            Event::Text(text) => {
                if self.code_block {
                    self.code_lines(&text);
                } else {
                    self.push(&text, self.style());
                }
            }
            Event::Code(code) => {
                let style = Style {
                    code: true,
                    ..self.style()
                };
                self.push(&code, style);
            }
            Event::SoftBreak => self.push(" ", self.style()),
            Event::HardBreak => self.flush(),
            Event::Rule => {
                self.flush();
                self.open_line();
                self.push("────────", Style::default());
                self.block_break();
            }
            Event::Html(html) | Event::InlineHtml(html) => self.push(&html, Style::default()),
            _ => {}
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Heading { level, .. } => {
                self.flush();
                self.heading = true;
                self.push(&heading_marker(level), self.style());
            }
            Tag::Strong => self.strong += 1,
            Tag::Emphasis => self.emphasis += 1,
            Tag::CodeBlock(_) => {
                self.flush();
                self.code_block = true;
            }
            Tag::List(start) => {
                self.flush();
                if !self.lists.is_empty() {
                    self.blank_pending = false;
                }
                self.lists.push(start);
            }
            Tag::Item => {
                self.flush();
                let depth = self.lists.len().saturating_sub(1);
                let marker = match self.lists.last_mut() {
                    Some(Some(n)) => {
                        let marker = format!("{}. ", n);
                        *n += 1;
                        marker
                    }
                    _ => "• ".to_string(),
                };
                self.open_line();
                self.push(&format!("{}{}", "  ".repeat(depth), marker), Style::default());
            }
            Tag::Link { dest_url, .. } => self.links.push(dest_url.to_string()),
            _ => {}
        }
    }

    fn end(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph => {
                self.flush();
                self.blank_pending = self.lists.is_empty();
            }
            TagEnd::Heading(_) => {
                self.heading = false;
                self.block_break();
            }
            TagEnd::Strong => self.strong = self.strong.saturating_sub(1),
            TagEnd::Emphasis => self.emphasis = self.emphasis.saturating_sub(1),
            TagEnd::CodeBlock => {
                self.code_block = false;
                self.block_break();
            }
            TagEnd::List(_) => {
                self.flush();
                self.lists.pop();
                self.blank_pending = self.lists.is_empty();
            }
            TagEnd::Item => self.flush(),
            TagEnd::Link => {
                if let Some(url) = self.links.pop() {
                    if !url.is_empty() {
                        self.push(&format!(" <{}>", url), Style::default());
                    }
                }
            }
            _ => {}
        }
    }

    fn style(&self) -> Style {
        Style {
            strong: self.strong > 0,
            emphasis: self.emphasis > 0,
            code: false,
            heading: self.heading,
            link: !self.links.is_empty(),
        }
    }

    fn code_lines(&mut self, text: &str) {
        let style = Style {
            code: true,
            ..Style::default()
        };
        for line in text.lines() {
            self.open_line();
            self.push(&format!("    {}", line), style);
            self.flush();
        }
    }

    /// Emit the blank separator owed by the previous block, if any.
    fn open_line(&mut self) {
        if self.blank_pending && self.current.is_empty() && !self.lines.is_empty() {
            self.lines.push(Line::default());
        }
        self.blank_pending = false;
    }

    fn push(&mut self, text: &str, style: Style) {
        if text.is_empty() {
            return;
        }
        if self.current.is_empty() {
            self.open_line();
        }
        match self.current.last_mut() {
            Some(last) if last.style == style => last.text.push_str(text),
            _ => self.current.push(Span {
                text: text.to_string(),
                style,
            }),
        }
    }

    fn flush(&mut self) {
        if !self.current.is_empty() {
            let spans = std::mem::take(&mut self.current);
            self.lines.push(Line { spans });
        }
    }

    fn block_break(&mut self) {
        self.flush();
        self.blank_pending = true;
    }

    fn finish(mut self) -> Vec<Line> {
        self.flush();
        while self.lines.last().is_some_and(Line::is_blank) {
            self.lines.pop();
        }
        self.lines
    }
}

fn heading_marker(level: HeadingLevel) -> String {
    let depth = match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    };
    format!("{} ", "#".repeat(depth))
}

//! Render markdown detail text into styled ratatui lines.
//!
//! Walks the pulldown-cmark event stream and produces one logical `Line`
//! per block-level element; paragraph wrapping is left to the widget.

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::theme::Theme;

pub fn markdown_lines(text: &str, theme: &Theme) -> Vec<Line<'static>> {
    let opts = Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS;
    let parser = Parser::new_ext(text, opts);

    let mut out = Builder::new(theme);

    for event in parser {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                out.flush();
                out.blank();
                out.heading = Some(level);
            }
            Event::End(TagEnd::Heading(_)) => {
                out.flush();
                out.heading = None;
                out.blank();
            }

            Event::Start(Tag::Paragraph) => out.flush(),
            Event::End(TagEnd::Paragraph) => {
                out.flush();
                out.blank();
            }

            Event::Start(Tag::List(start)) => {
                out.flush();
                out.lists.push(start);
            }
            Event::End(TagEnd::List(_)) => {
                out.lists.pop();
                if out.lists.is_empty() {
                    out.blank();
                }
            }
            Event::Start(Tag::Item) => {
                out.flush();
                out.begin_item();
            }
            Event::End(TagEnd::Item) => out.flush(),

            Event::Start(Tag::BlockQuote(_)) => {
                out.flush();
                out.quote_depth += 1;
            }
            Event::End(TagEnd::BlockQuote(_)) => {
                out.flush();
                out.quote_depth -= 1;
                out.blank();
            }

            Event::Start(Tag::CodeBlock(_)) => {
                out.flush();
                out.in_code_block = true;
            }
            Event::End(TagEnd::CodeBlock) => {
                out.in_code_block = false;
                out.blank();
            }

            Event::Start(Tag::Strong) => out.bold += 1,
            Event::End(TagEnd::Strong) => out.bold -= 1,
            Event::Start(Tag::Emphasis) => out.italic += 1,
            Event::End(TagEnd::Emphasis) => out.italic -= 1,

            Event::Start(Tag::Link { .. }) => {}
            Event::End(TagEnd::Link) => {}

            Event::TaskListMarker(checked) => {
                let marker = if checked { "✓ " } else { "○ " };
                let color = if checked {
                    out.theme.success
                } else {
                    out.theme.text_secondary
                };
                out.spans.push(Span::styled(
                    marker.to_string(),
                    Style::default().fg(color),
                ));
            }

            Event::Text(text) => out.text(&text),
            Event::Code(code) => {
                let style = Style::default().fg(out.theme.accent);
                out.spans.push(Span::styled(format!("`{code}`"), style));
            }

            Event::SoftBreak => out.text(" "),
            Event::HardBreak => out.flush(),

            Event::Rule => {
                out.flush();
                out.lines.push(Line::styled(
                    "─".repeat(32),
                    Style::default().fg(out.theme.border),
                ));
                out.blank();
            }

            _ => {}
        }
    }

    out.flush();
    while matches!(out.lines.last(), Some(line) if line.spans.is_empty()) {
        out.lines.pop();
    }
    out.lines
}

struct Builder<'t> {
    theme: &'t Theme,
    lines: Vec<Line<'static>>,
    spans: Vec<Span<'static>>,
    heading: Option<HeadingLevel>,
    lists: Vec<Option<u64>>,
    bold: u32,
    italic: u32,
    quote_depth: u32,
    in_code_block: bool,
}

impl<'t> Builder<'t> {
    fn new(theme: &'t Theme) -> Self {
        Self {
            theme,
            lines: Vec::new(),
            spans: Vec::new(),
            heading: None,
            lists: Vec::new(),
            bold: 0,
            italic: 0,
            quote_depth: 0,
            in_code_block: false,
        }
    }

    fn style(&self) -> Style {
        let mut style = Style::default().fg(self.theme.text_primary);
        if let Some(level) = self.heading {
            style = if level <= HeadingLevel::H2 {
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };
        }
        if self.bold > 0 {
            style = style.add_modifier(Modifier::BOLD);
        }
        if self.italic > 0 {
            style = style.add_modifier(Modifier::ITALIC);
        }
        if self.quote_depth > 0 {
            style = style.fg(self.theme.text_secondary);
        }
        style
    }

    fn text(&mut self, text: &str) {
        if self.in_code_block {
            // Code blocks arrive as one multi-line text event.
            for line in text.lines() {
                self.lines.push(Line::styled(
                    format!("  {line}"),
                    Style::default().fg(self.theme.accent),
                ));
            }
            return;
        }
        self.spans
            .push(Span::styled(text.to_string(), self.style()));
    }

    fn begin_item(&mut self) {
        let depth = self.lists.len().saturating_sub(1);
        let indent = "  ".repeat(depth + 1);
        let marker = match self.lists.last_mut() {
            Some(Some(n)) => {
                let marker = format!("{indent}{n}. ");
                *n += 1;
                marker
            }
            _ => format!("{indent}• "),
        };
        self.spans.push(Span::styled(
            marker,
            Style::default().fg(self.theme.accent),
        ));
    }

    fn flush(&mut self) {
        if self.spans.is_empty() {
            return;
        }
        let mut spans = std::mem::take(&mut self.spans);
        if self.quote_depth > 0 {
            spans.insert(
                0,
                Span::styled("▎ ".to_string(), Style::default().fg(self.theme.border)),
            );
        }
        self.lines.push(Line::from(spans));
    }

    /// Separator line; collapses runs of blanks.
    fn blank(&mut self) {
        if matches!(self.lines.last(), Some(line) if line.spans.is_empty()) {
            return;
        }
        if self.lines.is_empty() {
            return;
        }
        self.lines.push(Line::raw(""));
    }
}

#[cfg(test)]
#[path = "bubble_test.rs"]
mod tests;

use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;

use crate::domain::models::Author;
use crate::domain::models::Message;
use crate::domain::models::MessageType;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BubbleAlignment {
    Left,
    Right,
}

impl BubbleAlignment {
    pub fn for_author(author: &Author) -> BubbleAlignment {
        if *author == Author::User {
            return BubbleAlignment::Right;
        }

        return BubbleAlignment::Left;
    }
}

pub struct Bubble<'a> {
    alignment: BubbleAlignment,
    message: &'a Message,
    window_max_width: usize,
}

pub struct BubbleConfig {
    pub bubble_padding: usize,
    pub border_elements_length: usize,
    pub outer_padding_percentage: f32,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum ContentKind {
    Text,
    SourcesHeader,
    SourceTag,
}

fn char_len(text: &str) -> usize {
    return text.chars().count();
}

/// Greedy word wrap. Words longer than the line are hard broken. Leading
/// indentation is kept on the first wrapped line.
fn wrap_line(line: &str, max_line_length: usize) -> Vec<String> {
    if line.trim().is_empty() {
        return vec!["".to_string()];
    }

    let max_line_length = max_line_length.max(1);
    let body = line.trim_start_matches(' ');
    let indent = &line[..line.len() - body.len()];

    let mut lines: Vec<String> = vec![];
    let mut current = indent.to_string();
    let mut current_has_word = false;

    for word in body.split(' ') {
        let mut word = word.to_string();
        while char_len(&word) > max_line_length {
            if current_has_word {
                lines.push(current);
            }
            current = String::new();
            current_has_word = false;
            lines.push(word.chars().take(max_line_length).collect());
            word = word.chars().skip(max_line_length).collect();
        }

        if !current_has_word || current.is_empty() {
            if char_len(&current) + char_len(&word) > max_line_length {
                current = String::new();
            }
            current.push_str(&word);
            current_has_word = true;
        } else if char_len(&current) + 1 + char_len(&word) <= max_line_length {
            current.push(' ');
            current.push_str(&word);
        } else {
            lines.push(current);
            current = word;
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }

    return lines;
}

impl<'a> Bubble<'a> {
    pub fn new(
        message: &'a Message,
        alignment: BubbleAlignment,
        window_max_width: usize,
    ) -> Bubble<'a> {
        return Bubble {
            alignment,
            message,
            window_max_width,
        };
    }

    pub fn style_config() -> BubbleConfig {
        return BubbleConfig {
            // Left border + left padding + right padding + right border.
            bubble_padding: 4,
            // Bubble padding + scrollbar.
            border_elements_length: 5,
            outer_padding_percentage: 0.04,
        };
    }

    pub fn as_lines(&self) -> Vec<Line<'static>> {
        let content = self.content();
        let max_line_length = self.get_max_line_length(&content);

        let mut lines: Vec<Line<'static>> = vec![];
        for (kind, text) in content {
            for wrapped in wrap_line(&text, max_line_length) {
                lines.push(self.content_to_line(kind, wrapped, max_line_length));
            }
        }

        return self.wrap_lines_in_bubble(lines, max_line_length);
    }

    /// Header text, the author followed by the time the message was created.
    fn label(&self) -> String {
        let author = self.message.author.to_string();
        if self.message.timestamp.is_empty() {
            return author;
        }

        return format!("{author} {}", self.message.timestamp).trim().to_string();
    }

    fn content(&self) -> Vec<(ContentKind, String)> {
        let text = self.message.text.replace('\t', "  ");
        let mut content = text
            .lines()
            .map(|line| return (ContentKind::Text, line.to_string()))
            .collect::<Vec<(ContentKind, String)>>();

        if content.is_empty() {
            content.push((ContentKind::Text, "".to_string()));
        }

        if !self.message.sources.is_empty() {
            content.push((ContentKind::Text, "".to_string()));
            content.push((ContentKind::SourcesHeader, "Sources:".to_string()));
            for source in &self.message.sources {
                content.push((ContentKind::SourceTag, source.format()));
            }
        }

        return content;
    }

    fn get_max_line_length(&self, content: &[(ContentKind, String)]) -> usize {
        let style_config = Bubble::style_config();
        // Add a minimum 4% of padding on the side.
        let min_bubble_padding_length = ((self.window_max_width as f32
            * style_config.outer_padding_percentage)
            .ceil()) as usize;

        // Border elements + minimum bubble padding.
        let line_border_width = style_config.border_elements_length + min_bubble_padding_length;
        let available = self.window_max_width.saturating_sub(line_border_width);

        let longest = content
            .iter()
            .map(|(_, line)| return char_len(line))
            .max()
            .unwrap_or(0);

        return longest.min(available).max(char_len(&self.label()));
    }

    fn outer_padding(&self, max_line_length: usize) -> String {
        // Reserve the last column for the scrollbar.
        let bubble_width = max_line_length + Bubble::style_config().bubble_padding;
        let count = self
            .window_max_width
            .saturating_sub(bubble_width)
            .saturating_sub(1);

        return " ".repeat(count);
    }

    fn content_to_line(&self, kind: ContentKind, text: String, max_line_length: usize) -> Line<'static> {
        let fill = " ".repeat(max_line_length.saturating_sub(char_len(&text)));
        let content_style = match kind {
            ContentKind::Text => Style::default(),
            ContentKind::SourcesHeader => Style {
                fg: Some(Color::DarkGray),
                add_modifier: Modifier::BOLD,
                ..Style::default()
            },
            ContentKind::SourceTag => Style {
                fg: Some(Color::Yellow),
                ..Style::default()
            },
        };

        let bubble_spans = vec![
            self.highlight_span("│ ".to_string()),
            Span::styled(text, content_style),
            self.highlight_span(format!("{fill} │")),
        ];

        return self.align(bubble_spans, max_line_length);
    }

    fn align(&self, mut bubble_spans: Vec<Span<'static>>, max_line_length: usize) -> Line<'static> {
        let outer_bubble_padding = Span::from(self.outer_padding(max_line_length));

        if self.alignment == BubbleAlignment::Left {
            bubble_spans.push(outer_bubble_padding);
            return Line::from(bubble_spans);
        }

        let mut line_spans = vec![outer_bubble_padding];
        line_spans.extend(bubble_spans);

        return Line::from(line_spans);
    }

    fn wrap_lines_in_bubble(
        &self,
        lines: Vec<Line<'static>>,
        max_line_length: usize,
    ) -> Vec<Line<'static>> {
        let label = self.label();
        // Add 2 for the inner padding on both sides.
        let top_fill = "─".repeat((max_line_length + 2).saturating_sub(char_len(&label)));
        let top_bar = format!("╭{label}{top_fill}╮");
        let bottom_bar = format!("╰{}╯", "─".repeat(max_line_length + 2));

        let mut res = vec![self.align(vec![self.highlight_span(top_bar)], max_line_length)];
        res.extend(lines);
        res.push(self.align(vec![self.highlight_span(bottom_bar)], max_line_length));

        return res;
    }

    fn highlight_span(&self, text: String) -> Span<'static> {
        if self.message.message_type() == MessageType::Error {
            return Span::styled(
                text,
                Style {
                    fg: Some(Color::Red),
                    ..Style::default()
                },
            );
        } else if self.message.author == Author::User {
            return Span::styled(
                text,
                Style {
                    fg: Some(Color::Blue),
                    ..Style::default()
                },
            );
        }

        return Span::from(text);
    }
}

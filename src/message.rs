//! Chat message rendering.
//!
//! Raw text becomes a [`RenderedMessage`]: one paragraph per non-blank line,
//! with bare `http(s)://` URLs split out as link segments. Hosts build nodes
//! from the segments, so message text is never interpreted as markup.

#[cfg(test)]
#[path = "message_test.rs"]
mod message_test;

use std::sync::LazyLock;

use regex::Regex;

static URL_PATTERN: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| Regex::new(r"https?://\S+"));

/// Who a message bubble belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    /// Stable lowercase tag, used in CSS class names.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Bot => "bot",
        }
    }
}

/// A message as produced by the user or the backend, before rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub text: String,
    pub sender: Sender,
}

impl ChatMessage {
    #[must_use]
    pub fn new(text: impl Into<String>, sender: Sender) -> Self {
        Self { text: text.into(), sender }
    }

    #[must_use]
    pub fn render(&self) -> Option<RenderedMessage> {
        render(&self.text, self.sender)
    }
}

/// Inline piece of a paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    /// A detected URL; hosts open it in a new tab with no opener/referrer.
    Link(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Paragraph {
    pub segments: Vec<Segment>,
}

/// A message ready to be appended to the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMessage {
    pub sender: Sender,
    pub paragraphs: Vec<Paragraph>,
}

/// Render raw text for `sender`. Returns `None` when there is nothing to
/// show, so callers never append an empty bubble.
#[must_use]
pub fn render(text: &str, sender: Sender) -> Option<RenderedMessage> {
    let paragraphs: Vec<Paragraph> = text
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(|line| Paragraph { segments: linkify(line) })
        .collect();

    if paragraphs.is_empty() {
        return None;
    }
    Some(RenderedMessage { sender, paragraphs })
}

/// Split `line` into text and link segments, preserving every character.
#[must_use]
pub fn linkify(line: &str) -> Vec<Segment> {
    let Ok(pattern) = &*URL_PATTERN else {
        tracing::warn!("url pattern failed to compile; rendering links as text");
        return vec![Segment::Text(line.to_owned())];
    };

    let mut segments = Vec::new();
    let mut cursor = 0;
    for found in pattern.find_iter(line) {
        if found.start() > cursor {
            segments.push(Segment::Text(line[cursor..found.start()].to_owned()));
        }
        segments.push(Segment::Link(found.as_str().to_owned()));
        cursor = found.end();
    }
    if cursor < line.len() {
        segments.push(Segment::Text(line[cursor..].to_owned()));
    }
    segments
}

impl RenderedMessage {
    /// Escaped HTML for hosts that build the list from markup.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(r#"<div class="message {}-message"><div class="message-content">"#, self.sender.as_str()));
        for paragraph in &self.paragraphs {
            out.push_str("<p>");
            for segment in &paragraph.segments {
                match segment {
                    Segment::Text(text) => out.push_str(&escape_html(text)),
                    Segment::Link(url) => {
                        let url = escape_html(url);
                        out.push_str(&format!(r#"<a href="{url}" target="_blank" rel="noopener noreferrer">{url}</a>"#));
                    }
                }
            }
            out.push_str("</p>");
        }
        out.push_str("</div></div>");
        out
    }

    /// Paragraph text joined by newlines, links inlined as their URL.
    #[must_use]
    pub fn plain_text(&self) -> String {
        self.paragraphs
            .iter()
            .map(|p| {
                p.segments
                    .iter()
                    .map(|s| match s {
                        Segment::Text(t) | Segment::Link(t) => t.as_str(),
                    })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

//! Outline notation parser.
//!
//! Parses heading-based TOC files (`toc.md`):
//!
//! ```text
//! #[Topic1](/href1)
//! ##Topic1.1
//! ###[Topic1.1.1](guide/intro.md)
//! #[Topic2](http://example.com)
//! ```
//!
//! Nesting follows heading depth only: a heading becomes the last child of the
//! most recent heading with a smaller depth, so depth gaps are allowed.
//! Lines that are not headings are ignored.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ParseError;
use crate::node::RawNode;

static HEADING_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ {0,3}(#+)(.*)$").unwrap());

static CLOSING_HASHES_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|\s+)#+\s*$").unwrap());

static LINK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^\[(?P<name>.*)\]\(\s*(?:<(?P<angle>[^<>]*)>|(?P<target>(?:[^\s()]|\([^\s()]*\))*))(?:\s+"[^"]*")?\s*\)$"#,
    )
    .unwrap()
});

/// Parse outline notation into top-level nodes.
///
/// # Errors
///
/// Returns [`ParseError::MalformedOutline`] for a heading with no text, a link
/// with no name, or text that starts like a link but is not valid link markup.
pub fn parse_outline(content: &str) -> Result<Vec<RawNode>, ParseError> {
    let mut roots = Vec::new();
    let mut stack: Vec<RawNode> = Vec::new();
    let mut fence: Option<char> = None;

    for (index, line) in content.lines().enumerate() {
        let trimmed = line.trim_start();
        if let Some(marker) = fence_marker(trimmed) {
            match fence {
                Some(open) if open == marker => fence = None,
                Some(_) => {}
                None => fence = Some(marker),
            }
            continue;
        }
        if fence.is_some() {
            continue;
        }

        let Some(caps) = HEADING_PATTERN.captures(line) else {
            continue;
        };
        let depth = caps[1].len();
        let node = parse_heading(&caps[2], depth, index + 1)?;

        while stack
            .last()
            .is_some_and(|open| open.depth.is_some_and(|d| d >= depth))
        {
            if let Some(done) = stack.pop() {
                attach(&mut stack, &mut roots, done);
            }
        }
        stack.push(node);
    }

    while let Some(done) = stack.pop() {
        attach(&mut stack, &mut roots, done);
    }

    Ok(roots)
}

/// Attach a finished node to the innermost open heading, or to the roots.
fn attach(stack: &mut [RawNode], roots: &mut Vec<RawNode>, node: RawNode) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(node),
        None => roots.push(node),
    }
}

/// Fence marker character if the line opens or closes a code fence.
fn fence_marker(line: &str) -> Option<char> {
    if line.starts_with("```") {
        Some('`')
    } else if line.starts_with("~~~") {
        Some('~')
    } else {
        None
    }
}

/// Parse the text after the heading marker.
fn parse_heading(text: &str, depth: usize, line: usize) -> Result<RawNode, ParseError> {
    let text = CLOSING_HASHES_PATTERN.replace(text, "");
    let text = text.trim();

    if text.is_empty() {
        return Err(malformed(line, "heading has no text"));
    }

    let mut node = if text.starts_with('[') {
        let caps = LINK_PATTERN
            .captures(text)
            .ok_or_else(|| malformed(line, &format!("invalid link markup '{text}'")))?;
        let name = caps["name"].trim();
        if name.is_empty() {
            return Err(malformed(line, "link has no name"));
        }
        // Angle brackets allow spaces in the target
        let target = caps
            .name("angle")
            .or_else(|| caps.name("target"))
            .map_or("", |m| m.as_str());
        RawNode::new(name).with_href(target)
    } else {
        RawNode::new(text)
    };
    node.depth = Some(depth);
    Ok(node)
}

fn malformed(line: usize, message: &str) -> ParseError {
    ParseError::MalformedOutline {
        line,
        message: message.to_owned(),
    }
}

//! GitHub-flavored markdown to HTML rendering.
//!
//! Rendering runs `pulldown-cmark` with the GFM extensions (tables,
//! strikethrough, task lists, autolinks) and rewrites fenced code blocks
//! into placeholder elements instead of `<pre><code>` markup:
//!
//! ```html
//! <div data-code-block="true" data-language="rust" data-code="fn main() {}">
//!   [CODEBLOCK:rust]fn main() {}[/CODEBLOCK]
//! </div>
//! ```
//!
//! Syntax highlighting is a presentation-layer concern; the placeholder
//! carries the declared language and the exact code text so the highlighter
//! can reproduce both faithfully. A fence with no info string (or an indented
//! block) gets the language [`DEFAULT_LANGUAGE`].

use pulldown_cmark::{html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};

/// Language assigned to code blocks that declare none.
pub const DEFAULT_LANGUAGE: &str = "text";

/// Render a markdown body to HTML.
///
/// All standard GFM constructs (headings, lists, tables, links, emphasis,
/// strikethrough, task lists) render as regular HTML, and bare URLs in
/// running text are linkified the way GFM autolinks them. Code blocks
/// become placeholder `<div>` elements; see the module docs for the shape.
///
/// # Example
///
/// ```rust
/// use papyr_content::markdown::render_html;
///
/// let html = render_html("# Title\n\nSome *emphasis*.");
/// assert!(html.contains("<h1>Title</h1>"));
/// assert!(html.contains("<em>emphasis</em>"));
/// ```
pub fn render_html(markdown: &str) -> String {
    let options =
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS;
    let parser = Parser::new_ext(markdown, options);

    // Buffer of events to serialize, with code-block contents collected
    // into placeholders instead of being passed through. Adjacent text
    // events are merged before linkification; the parser splits runs at
    // characters like `&` and a bare URL must not be cut at such a seam.
    // Text inside links or image alt text is kept verbatim, linkifying
    // there would nest anchors.
    let mut events: Vec<Event> = Vec::new();
    let mut code_block: Option<(String, String)> = None;
    let mut inside_link = 0usize;
    let mut pending_text = String::new();

    for event in parser {
        match event {
            Event::Start(Tag::CodeBlock(kind)) => {
                flush_text(&mut pending_text, &mut events);
                code_block = Some((language_of(&kind), String::new()));
            }
            Event::End(TagEnd::CodeBlock) => {
                if let Some((language, code)) = code_block.take() {
                    events.push(Event::Html(placeholder(&language, &code).into()));
                }
            }
            Event::Start(tag @ (Tag::Link { .. } | Tag::Image { .. })) => {
                flush_text(&mut pending_text, &mut events);
                inside_link += 1;
                events.push(Event::Start(tag));
            }
            Event::End(end @ (TagEnd::Link | TagEnd::Image)) => {
                inside_link = inside_link.saturating_sub(1);
                events.push(Event::End(end));
            }
            Event::Text(text) => match code_block.as_mut() {
                Some((_, code)) => code.push_str(&text),
                None if inside_link == 0 => pending_text.push_str(&text),
                None => events.push(Event::Text(text)),
            },
            other => {
                flush_text(&mut pending_text, &mut events);
                events.push(other);
            }
        }
    }
    flush_text(&mut pending_text, &mut events);

    let mut output = String::new();
    html::push_html(&mut output, events.into_iter());
    output
}

/// Linkify a completed text run and push it as events.
fn flush_text<'a>(pending: &mut String, events: &mut Vec<Event<'a>>) {
    if !pending.is_empty() {
        linkify(std::mem::take(pending).into(), events);
    }
}

/// Replace bare URLs in a text run with anchor elements.
///
/// The parser has no extension for bare-URL autolinks, so this runs over
/// merged plain-text runs. A run with no URL passes through untouched.
fn linkify<'a>(text: CowStr<'a>, events: &mut Vec<Event<'a>>) {
    let Some(first) = next_bare_url(&text, 0) else {
        events.push(Event::Text(text));
        return;
    };

    let mut rest = 0;
    let mut found = Some(first);
    while let Some((start, end)) = found {
        if start > rest {
            events.push(Event::Text(text[rest..start].to_string().into()));
        }
        let url = &text[start..end];
        let href = if url.starts_with("www.") {
            format!("http://{url}")
        } else {
            url.to_string()
        };
        events.push(Event::InlineHtml(
            format!(
                "<a href=\"{}\">{}</a>",
                escape_html(&href),
                escape_html(url)
            )
            .into(),
        ));
        rest = end;
        found = next_bare_url(&text, end);
    }

    if rest < text.len() {
        events.push(Event::Text(text[rest..].to_string().into()));
    }
}

/// Find the next bare URL at or after `from`, returning its byte range.
///
/// Recognizes `http://`, `https://`, and `www.` prefixes at a word
/// boundary. The URL runs to the next whitespace, then sheds trailing
/// punctuation that reads as sentence text; a closing parenthesis is kept
/// only when the URL contains a matching opening one.
fn next_bare_url(text: &str, from: usize) -> Option<(usize, usize)> {
    let bytes = text.as_bytes();
    for (offset, _) in text[from..].char_indices() {
        let start = from + offset;
        if start > 0 && (bytes[start - 1].is_ascii_alphanumeric() || bytes[start - 1] == b'/') {
            continue;
        }

        let candidate = &text[start..];
        let scheme_len = if candidate.starts_with("https://") {
            8
        } else if candidate.starts_with("http://") {
            7
        } else if candidate.starts_with("www.") {
            4
        } else {
            continue;
        };

        let mut end = start
            + candidate
                .find(|c: char| c.is_whitespace() || c == '<')
                .unwrap_or(candidate.len());
        while end > start + scheme_len {
            match bytes[end - 1] {
                b'.' | b',' | b':' | b';' | b'!' | b'?' | b'\'' | b'"' | b'*' => end -= 1,
                b')' if unbalanced_close(&text[start..end]) => end -= 1,
                _ => break,
            }
        }
        if end > start + scheme_len {
            return Some((start, end));
        }
    }
    None
}

/// Whether the URL has more closing parentheses than opening ones.
fn unbalanced_close(url: &str) -> bool {
    let open = url.bytes().filter(|b| *b == b'(').count();
    let close = url.bytes().filter(|b| *b == b')').count();
    close > open
}

/// Language identifier for a code block, falling back to [`DEFAULT_LANGUAGE`].
///
/// Only the first word of the fence info string counts; anything after
/// whitespace is fence metadata, not part of the language.
fn language_of(kind: &CodeBlockKind) -> String {
    match kind {
        CodeBlockKind::Fenced(info) => {
            let lang = info.split_whitespace().next().unwrap_or("");
            if lang.is_empty() {
                DEFAULT_LANGUAGE.to_string()
            } else {
                lang.to_string()
            }
        }
        CodeBlockKind::Indented => DEFAULT_LANGUAGE.to_string(),
    }
}

/// Build the placeholder element for one code block.
///
/// The parser reports fenced content with a trailing newline that belongs to
/// the fence syntax, not the authored code; exactly one is stripped so
/// `data-code` round-trips the original text.
fn placeholder(language: &str, code: &str) -> String {
    let code = code.strip_suffix('\n').unwrap_or(code);
    let lang = escape_html(language);
    let code = escape_html(code);
    format!(
        "<div data-code-block=\"true\" data-language=\"{lang}\" data-code=\"{code}\">[CODEBLOCK:{lang}]{code}[/CODEBLOCK]</div>\n"
    )
}

/// Escape text for use in HTML content and double-quoted attribute values.
fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

// ============================================================================
// Tests
// ============================================================================

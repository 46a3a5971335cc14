//! Hit highlighting: wraps caller-supplied ranges in markup.

use crate::escape::escape_html;
use chirp_core::Hit;

/// The tag used when none is configured.
pub const DEFAULT_HIGHLIGHT_TAG: &str = "em";

/// Wraps caller-supplied UTF-16 ranges (search hits, for example) in a
/// highlight tag, HTML-escaping everything else.
///
/// # Example
///
/// ```
/// use chirp_render::HitHighlighter;
///
/// let highlighter = HitHighlighter::new();
/// assert_eq!(
///     highlighter.highlight("hello world", &[(0, 5)]),
///     "<em>hello</em> world"
/// );
/// ```
pub struct HitHighlighter {
    highlight_tag: String,
}

impl Default for HitHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl HitHighlighter {
    /// A highlighter wrapping hits in `<em>`.
    pub fn new() -> Self {
        Self::with_tag(DEFAULT_HIGHLIGHT_TAG)
    }

    /// A highlighter wrapping hits in the given tag name.
    pub fn with_tag(tag: &str) -> Self {
        Self {
            highlight_tag: tag.to_string(),
        }
    }

    /// Render `text` with every hit range wrapped in the highlight tag.
    /// Hits are sorted and overlapping ranges merged, so the emitted
    /// tags always nest correctly.
    pub fn highlight(&self, text: &str, hits: &[Hit]) -> String {
        let hits = normalize_hits(hits);
        if hits.is_empty() {
            return escape_html(text);
        }

        let open = format!("<{}>", self.highlight_tag);
        let close = format!("</{}>", self.highlight_tag);
        let mut buf =
            String::with_capacity(text.len() + hits.len() * (open.len() + close.len()));

        let mut next = 0usize;
        let mut in_hit = false;
        let mut offset = 0usize; // UTF-16 units emitted so far

        for c in text.chars() {
            if !in_hit {
                // Skip hits already behind the cursor (a range that fell
                // inside a surrogate pair, for example).
                while next < hits.len() && hits[next].1 <= offset {
                    next += 1;
                }
                if next < hits.len() && offset >= hits[next].0 {
                    buf.push_str(&open);
                    in_hit = true;
                }
            }
            push_escaped(&mut buf, c);
            offset += c.len_utf16();
            if in_hit && offset >= hits[next].1 {
                buf.push_str(&close);
                in_hit = false;
                next += 1;
            }
        }
        if in_hit {
            buf.push_str(&close);
        }
        buf
    }
}

/// Sort hits, drop empty ranges, and merge overlapping or touching ones.
fn normalize_hits(hits: &[Hit]) -> Vec<Hit> {
    let mut sorted: Vec<Hit> = hits.iter().copied().filter(|(s, e)| e > s).collect();
    sorted.sort_unstable();
    let mut merged: Vec<Hit> = Vec::with_capacity(sorted.len());
    for (start, end) in sorted {
        match merged.last_mut() {
            Some((_, last_end)) if start <= *last_end => {
                *last_end = (*last_end).max(end);
            }
            _ => merged.push((start, end)),
        }
    }
    merged
}

fn push_escaped(buf: &mut String, c: char) {
    match c {
        '<' => buf.push_str("&lt;"),
        '>' => buf.push_str("&gt;"),
        '&' => buf.push_str("&amp;"),
        '\'' => buf.push_str("&#39;"),
        '"' => buf.push_str("&quot;"),
        _ => buf.push(c),
    }
}

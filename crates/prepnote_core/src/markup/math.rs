//! LaTeX fragment splitter for mixed prose/math content.
//!
//! # Responsibility
//! - Split text into plain, inline-math (`$...$`) and block-math (`$$...$$`)
//!   segments in document order.
//!
//! # Invariants
//! - Block delimiters win: an inline match inside a block span is ignored.
//! - Text outside math spans is preserved verbatim, including whitespace.
//! - Concatenating segment sources reproduces the input.

use once_cell::sync::Lazy;
use regex::Regex;

static BLOCK_MATH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\$([^$]+?)\$\$").expect("valid block math regex"));
static INLINE_MATH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$([^$\n]+?)\$").expect("valid inline math regex"));

/// One typed fragment of mixed prose/math content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MathSegment {
    /// Plain text, passed through verbatim.
    Text(String),
    /// A LaTeX expression without its delimiters.
    Math {
        latex: String,
        /// `true` for block (`$$...$$`) display mode, `false` for inline.
        display: bool,
    },
}

#[derive(Debug, Clone, Copy)]
struct MathSpan {
    start: usize,
    end: usize,
    body_start: usize,
    body_end: usize,
    display: bool,
}

/// Splits `content` into text and math segments in document order.
///
/// Empty input yields no segments; input without math delimiters yields a
/// single `Text` segment.
pub fn split_math_segments(content: &str) -> Vec<MathSegment> {
    let block_spans: Vec<MathSpan> = BLOCK_MATH_RE
        .find_iter(content)
        .map(|whole| MathSpan {
            start: whole.start(),
            end: whole.end(),
            body_start: whole.start() + 2,
            body_end: whole.end() - 2,
            display: true,
        })
        .collect();

    let mut spans: Vec<MathSpan> = INLINE_MATH_RE
        .find_iter(content)
        .filter_map(|whole| {
            // Inline matches inside a block span are the block's own
            // delimiters or body; skip them.
            let inside_block = block_spans
                .iter()
                .any(|block| whole.start() >= block.start && whole.start() < block.end);
            if inside_block {
                return None;
            }
            Some(MathSpan {
                start: whole.start(),
                end: whole.end(),
                body_start: whole.start() + 1,
                body_end: whole.end() - 1,
                display: false,
            })
        })
        .collect();

    spans.extend(block_spans);
    spans.sort_by_key(|span| span.start);

    let mut segments = Vec::new();
    let mut cursor = 0;

    for span in spans {
        if span.start > cursor {
            segments.push(MathSegment::Text(content[cursor..span.start].to_string()));
        }
        segments.push(MathSegment::Math {
            latex: content[span.body_start..span.body_end].to_string(),
            display: span.display,
        });
        cursor = span.end;
    }

    if cursor < content.len() {
        segments.push(MathSegment::Text(content[cursor..].to_string()));
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::{split_math_segments, MathSegment};

    fn text(value: &str) -> MathSegment {
        MathSegment::Text(value.to_string())
    }

    fn inline(latex: &str) -> MathSegment {
        MathSegment::Math {
            latex: latex.to_string(),
            display: false,
        }
    }

    fn block(latex: &str) -> MathSegment {
        MathSegment::Math {
            latex: latex.to_string(),
            display: true,
        }
    }

    #[test]
    fn empty_input_yields_no_segments() {
        assert!(split_math_segments("").is_empty());
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(
            split_math_segments("no math here"),
            vec![text("no math here")]
        );
    }

    #[test]
    fn inline_math_is_extracted() {
        assert_eq!(
            split_math_segments("growth rate is $g = s/v$ per Harrod-Domar"),
            vec![
                text("growth rate is "),
                inline("g = s/v"),
                text(" per Harrod-Domar"),
            ]
        );
    }

    #[test]
    fn block_math_is_extracted_with_display_mode() {
        assert_eq!(
            split_math_segments("before $$E = mc^2$$ after"),
            vec![text("before "), block("E = mc^2"), text(" after")]
        );
    }

    #[test]
    fn block_delimiters_are_not_double_matched_as_inline() {
        let segments = split_math_segments("$$a + b$$");
        assert_eq!(segments, vec![block("a + b")]);
    }

    #[test]
    fn mixed_content_keeps_document_order() {
        let segments = split_math_segments("intro $x$ middle $$y$$ outro");
        assert_eq!(
            segments,
            vec![
                text("intro "),
                inline("x"),
                text(" middle "),
                block("y"),
                text(" outro"),
            ]
        );
    }

    #[test]
    fn inline_math_does_not_cross_newlines() {
        // An unmatched dollar pair across lines stays plain text.
        assert_eq!(
            split_math_segments("cost $5\nand $6 more"),
            vec![text("cost $5\nand $6 more")]
        );
    }

    #[test]
    fn segment_sources_reassemble_input() {
        let input = "a $x$ b $$y$$ c";
        let mut rebuilt = String::new();
        for segment in split_math_segments(input) {
            match segment {
                MathSegment::Text(value) => rebuilt.push_str(&value),
                MathSegment::Math { latex, display } => {
                    if display {
                        rebuilt.push_str(&format!("$${latex}$$"));
                    } else {
                        rebuilt.push_str(&format!("${latex}$"));
                    }
                }
            }
        }
        assert_eq!(rebuilt, input);
    }
}

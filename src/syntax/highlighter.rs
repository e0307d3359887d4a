//! Per-byte classification of a row's rendered bytes.
//!
//! [`highlight`] is a pure function: the rendered bytes, the active rules and whether a block
//! comment is still open from the previous row go in; one [`Highlight`] per byte and the
//! block-comment state handed to the next row come out. Cascading that state down the buffer
//! is the buffer's job.

use crate::syntax::rules::{KeywordClass, SyntaxRules};

/// Classification tag attached to every rendered byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Highlight {
    #[default]
    Normal,
    Comment,
    BlockComment,
    Keyword1,
    Keyword2,
    String,
    Number,
    SearchMatch,
}

impl From<KeywordClass> for Highlight {
    fn from(class: KeywordClass) -> Self {
        match class {
            KeywordClass::Primary => Highlight::Keyword1,
            KeywordClass::Secondary => Highlight::Keyword2,
        }
    }
}

const SEPARATOR_PUNCTUATION: &[u8] = b",.()+-/*=~%<>[];";

/// Bytes that may border a keyword or start a number.
pub fn is_separator(byte: u8) -> bool {
    // 0x0b (vertical tab) counts as whitespace in the C locale
    byte.is_ascii_whitespace()
        || byte == 0x0b
        || byte == 0
        || SEPARATOR_PUNCTUATION.contains(&byte)
}

/// Result of highlighting one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineHighlight {
    pub tags: Vec<Highlight>,
    /// A block comment is still open at the end of the row.
    pub open_comment: bool,
}

/// Classify `render` left to right in a single pass.
pub fn highlight(
    render: &[u8],
    syntax: Option<&SyntaxRules>,
    starts_in_comment: bool,
) -> LineHighlight {
    let mut tags = vec![Highlight::Normal; render.len()];
    let Some(syntax) = syntax else {
        return LineHighlight {
            tags,
            open_comment: false,
        };
    };

    let line_comment = syntax
        .single_line_comment
        .map(str::as_bytes)
        .filter(|marker| !marker.is_empty());
    let block_comment = syntax
        .block_comment
        .map(|(open, close)| (open.as_bytes(), close.as_bytes()))
        .filter(|(open, close)| !open.is_empty() && !close.is_empty());

    let mut prev_sep = true;
    let mut in_string: Option<u8> = None;
    let mut in_comment = starts_in_comment && block_comment.is_some();

    let mut i = 0;
    while i < render.len() {
        let byte = render[i];
        let rest = &render[i..];
        let prev_tag = if i > 0 { tags[i - 1] } else { Highlight::Normal };

        if let Some(marker) = line_comment {
            if in_string.is_none() && !in_comment && rest.starts_with(marker) {
                tags[i..].fill(Highlight::Comment);
                break;
            }
        }

        if let Some((open, close)) = block_comment {
            if in_string.is_none() {
                if in_comment {
                    if rest.starts_with(close) {
                        tags[i..i + close.len()].fill(Highlight::BlockComment);
                        i += close.len();
                        in_comment = false;
                        prev_sep = true;
                    } else {
                        tags[i] = Highlight::BlockComment;
                        i += 1;
                    }
                    continue;
                } else if rest.starts_with(open) {
                    tags[i..i + open.len()].fill(Highlight::BlockComment);
                    i += open.len();
                    in_comment = true;
                    continue;
                }
            }
        }

        if syntax.highlights_strings() {
            if let Some(quote) = in_string {
                tags[i] = Highlight::String;
                if byte == b'\\' && i + 1 < render.len() {
                    tags[i + 1] = Highlight::String;
                    i += 2;
                    continue;
                }
                if byte == quote {
                    in_string = None;
                }
                i += 1;
                prev_sep = true;
                continue;
            } else if byte == b'"' || byte == b'\'' {
                in_string = Some(byte);
                tags[i] = Highlight::String;
                i += 1;
                continue;
            }
        }

        if syntax.highlights_numbers()
            && ((byte.is_ascii_digit() && (prev_sep || prev_tag == Highlight::Number))
                || (byte == b'.' && prev_tag == Highlight::Number))
        {
            tags[i] = Highlight::Number;
            i += 1;
            prev_sep = false;
            continue;
        }

        if prev_sep {
            if let Some((len, class)) = keyword_at(render, i, syntax) {
                tags[i..i + len].fill(class.into());
                i += len;
                prev_sep = false;
                continue;
            }
        }

        prev_sep = is_separator(byte);
        i += 1;
    }

    LineHighlight {
        tags,
        open_comment: in_comment,
    }
}

/// Length and class of the keyword starting at `at`, if one ends on a separator.
fn keyword_at(render: &[u8], at: usize, syntax: &SyntaxRules) -> Option<(usize, KeywordClass)> {
    let rest = &render[at..];
    syntax.keywords().find_map(|(word, class)| {
        let boundary = rest.get(word.len()).copied().map_or(true, is_separator);
        (!word.is_empty() && rest.starts_with(word) && boundary).then_some((word.len(), class))
    })
}

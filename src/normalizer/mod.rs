// Repairs doubled-character extraction artifacts and isolates section markers
// so that every marker opens its own paragraph.

use std::borrow::Cow;

pub mod patterns;

pub use patterns::{collapse_pairs, is_doubled_pairs, is_stylized_duplicate};

/// Blank line separating paragraphs in normalized text
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Opening sequence of a section marker such as `[[pkg]]`
pub const MARKER_OPEN: &str = "[[";

/// Token produced by the normalizer's scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    /// Maximal run of word characters (alphanumeric or `_`)
    Word(&'a str),
    /// Single character that is neither a word character nor whitespace
    Punct(char),
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Left-to-right scanner over words and punctuation; whitespace is dropped
struct Tokens<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let rest = &self.text[self.pos..];
        let start = rest.find(|c: char| !c.is_whitespace())?;
        let body = &rest[start..];
        let first = body.chars().next()?;

        if is_word_char(first) {
            let len = body.find(|c: char| !is_word_char(c)).unwrap_or(body.len());
            self.pos += start + len;
            Some(Token::Word(&body[..len]))
        } else {
            self.pos += start + first.len_utf8();
            Some(Token::Punct(first))
        }
    }
}

/// Collapse a fully doubled token, repeating until the result is no longer doubled.
/// Repeating keeps `normalize` idempotent for tokens such as `"aaaa"`.
fn repair_token(token: &str) -> Cow<'_, str> {
    if !is_doubled_pairs(token) {
        return Cow::Borrowed(token);
    }

    let mut repaired = collapse_pairs(token);
    while is_doubled_pairs(&repaired) {
        repaired = collapse_pairs(&repaired);
    }
    Cow::Owned(repaired)
}

/// Normalize raw extracted text.
///
/// Words are re-joined with single spaces, punctuation attaches to the previous
/// token, tokens made entirely of doubled character pairs are collapsed
/// (`"wwoorrddss"` becomes `"words"`), and a paragraph break is forced before
/// every `[[` marker opening.
pub fn normalize(raw_text: &str) -> String {
    let mut buffer = String::with_capacity(raw_text.len());
    normalize_into(raw_text, &mut buffer);
    buffer
}

/// Normalize into a supplied buffer, clearing it first
pub fn normalize_into(raw_text: &str, buffer: &mut String) {
    buffer.clear();

    let mut joined = String::with_capacity(raw_text.len() + 8);
    for token in Tokens::new(raw_text) {
        match token {
            Token::Word(word) => {
                joined.push(' ');
                joined.push_str(&repair_token(word));
            }
            Token::Punct(ch) => joined.push(ch),
        }
    }

    let isolated_marker = format!("{PARAGRAPH_SEPARATOR}{MARKER_OPEN}");
    buffer.push_str(&joined.trim().replace(MARKER_OPEN, &isolated_marker));
}

/// Normalize each page independently and join them, every page followed by a
/// paragraph separator so that page boundaries always end a paragraph.
pub fn normalize_pages<'a, I>(pages: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut document = String::new();
    let mut page_buffer = String::new();

    for page in pages {
        normalize_into(page, &mut page_buffer);
        document.push_str(&page_buffer);
        document.push_str(PARAGRAPH_SEPARATOR);
    }

    document
}

/// Split normalized text into paragraphs, dropping blank fragments
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    text.split(PARAGRAPH_SEPARATOR)
        .filter(|paragraph| !paragraph.trim().is_empty())
        .collect()
}

/// Normalized document, immutable once built
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    text: String,
}

impl Document {
    /// Build from a single block of raw text
    pub fn from_raw(raw_text: &str) -> Self {
        Self {
            text: normalize(raw_text),
        }
    }

    /// Build from per-page raw text in page order
    pub fn from_pages<'a, I>(pages: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self {
            text: normalize_pages(pages),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn paragraphs(&self) -> Vec<&str> {
        split_paragraphs(&self.text)
    }

    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

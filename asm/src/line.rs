/// Starts a comment that runs to the end of the line.
pub const COMMENT: char = '#';

/// One physical source line, split into its fields.
#[derive(Debug, Clone)]
pub struct Line<'a> {
    idx: usize,
    raw: &'a str,
    words: Vec<&'a str>,
}

impl<'a> Line<'a> {
    pub fn new(idx: usize, raw: &'a str) -> Self {
        Self {
            idx,
            raw,
            words: tokenize(raw),
        }
    }

    pub fn no(&self) -> usize {
        self.idx + 1
    }

    pub fn raw(&self) -> &'a str {
        self.raw
    }

    pub fn words(&self) -> &[&'a str] {
        &self.words
    }

    /// Blank and comment-only lines carry no fields.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Splits a line into whitespace-separated fields and drops the trailing comment.
///
/// The comment marker is honoured anywhere, including inside what would
/// later be read as a string literal.
pub fn tokenize(raw: &str) -> Vec<&str> {
    let mut words = vec![];
    for word in raw.split_whitespace() {
        match word.split_once(COMMENT) {
            Some((code, _)) => {
                if !code.is_empty() {
                    words.push(code);
                }
                break;
            }
            None => words.push(word),
        }
    }
    words
}

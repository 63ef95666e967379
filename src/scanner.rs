//! Character-level scanner used by the recursive-descent parser.
//!
//! A `Scanner` is a forward-only cursor over a borrowed text buffer. It has
//! no knowledge of JSON semantics: it extracts substrings bounded by a
//! delimiter or a balanced delimiter pair, skips whitespace, and advances
//! past individual characters. Every extraction returns a slice of the
//! original buffer, so no allocation happens during scanning.
//!
//! All delimiters fed to the scanner by the parser are ASCII (`"`, `{`,
//! `}`, `[`, `]`, `:`, `,`), and the scanner only ever stops the cursor on
//! one of them or on ASCII whitespace, so byte-indexed slicing stays on
//! `char` boundaries even for multi-byte input text.

/// Forward-only cursor over a text buffer.
#[derive(Debug)]
pub struct Scanner<'a> {
    buffer: &'a str,
    cursor: usize,
}

impl<'a> Scanner<'a> {
    /// Create a scanner positioned at the start of `buffer`.
    pub fn new(buffer: &'a str) -> Self {
        Self { buffer, cursor: 0 }
    }

    /// Return the text between the next two unescaped occurrences of
    /// `delim`, advancing the cursor past the closing one.
    ///
    /// A delimiter immediately preceded by `\` does not close the span.
    /// If no opening delimiter exists at or after the cursor, or the span
    /// is never closed, the cursor moves to end-of-buffer and `""` is
    /// returned.
    pub fn delimited_content(&mut self, delim: char) -> &'a str {
        let Some(open_rel) = self.buffer[self.cursor..].find(delim) else {
            self.cursor = self.buffer.len();
            return "";
        };
        let start = self.cursor + open_rel + delim.len_utf8();
        let mut search = start;

        while let Some(rel) = self.buffer[search..].find(delim) {
            let hit = search + rel;
            if hit > 0 && self.buffer.as_bytes()[hit - 1] == b'\\' {
                search = hit + delim.len_utf8();
                continue;
            }
            self.cursor = hit + delim.len_utf8();
            return &self.buffer[start..hit];
        }

        self.cursor = self.buffer.len();
        ""
    }

    /// Return the text between the next `open` and its balancing `close`,
    /// advancing the cursor past the close.
    ///
    /// Nested `open`/`close` pairs are counted. Unlike
    /// [`delimited_content`](Self::delimited_content) there is no escape
    /// tracking here: an unbalanced `open` or `close` inside a quoted
    /// string will throw the count off. Callers only invoke this after
    /// peeking a structural `open`, where quoted content is itself
    /// brace-balanced in practice; the asymmetry is intentional and
    /// should not be "fixed" by unifying the two scans.
    ///
    /// If `open` is absent the cursor moves to end-of-buffer and `""` is
    /// returned; if the span never balances, the remainder after `open`
    /// is returned.
    pub fn balanced_content(&mut self, open: char, close: char) -> &'a str {
        let Some(open_rel) = self.buffer[self.cursor..].find(open) else {
            self.cursor = self.buffer.len();
            return "";
        };
        let start = self.cursor + open_rel + open.len_utf8();
        let mut depth = 1usize;

        for (rel, c) in self.buffer[start..].char_indices() {
            if c == open {
                depth += 1;
            } else if c == close {
                depth -= 1;
                if depth == 0 {
                    let end = start + rel;
                    self.cursor = end + close.len_utf8();
                    return &self.buffer[start..end];
                }
            }
        }

        self.cursor = self.buffer.len();
        &self.buffer[start..]
    }

    /// Skip space, tab and newline characters, then return the character
    /// now under the cursor without advancing past it.
    ///
    /// Returns `None` once the cursor reaches end-of-buffer.
    pub fn peek_significant(&mut self) -> Option<char> {
        while self.cursor < self.buffer.len() {
            match self.buffer.as_bytes()[self.cursor] {
                b' ' | b'\t' | b'\n' => self.cursor += 1,
                _ => return self.buffer[self.cursor..].chars().next(),
            }
        }
        None
    }

    /// Return the text from the cursor up to the next occurrence of
    /// `target`, advancing the cursor past it. If `target` is absent the
    /// remainder of the buffer is returned and the cursor moves to the
    /// end.
    pub fn text_up_to(&mut self, target: char) -> &'a str {
        match self.buffer[self.cursor..].find(target) {
            Some(rel) => {
                let end = self.cursor + rel;
                let text = &self.buffer[self.cursor..end];
                self.cursor = end + target.len_utf8();
                text
            }
            None => {
                let text = &self.buffer[self.cursor..];
                self.cursor = self.buffer.len();
                text
            }
        }
    }

    /// Advance the cursor to just past the next occurrence of `target`,
    /// or to end-of-buffer if it does not occur.
    pub fn skip_past(&mut self, target: char) {
        match self.buffer[self.cursor..].find(target) {
            Some(rel) => self.cursor += rel + target.len_utf8(),
            None => self.cursor = self.buffer.len(),
        }
    }

    /// Whether any input remains after the cursor.
    pub fn has_remaining(&self) -> bool {
        self.cursor < self.buffer.len()
    }

    /// The unconsumed tail of the buffer.
    pub fn rest(&self) -> &'a str {
        &self.buffer[self.cursor..]
    }
}

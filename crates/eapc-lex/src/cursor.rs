//! Character cursor for traversing EAP source text.
//!
//! Unlike an ASCII-oriented language lexer, this cursor has to treat Greek
//! (and Greek Extended) codepoints as ordinary identifier characters, so it
//! always decodes full `char`s rather than taking an ASCII fast path.

pub struct Cursor<'a> {
    source: &'a str,
    position: usize,
    line: u32,
    column: u32,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// The character at the cursor, or `'\0'` at end of input.
    pub fn current_char(&self) -> char {
        self.char_at(0)
    }

    /// The character `offset` codepoints ahead of the cursor.
    pub fn char_at(&self, offset: usize) -> char {
        self.source[self.position..]
            .chars()
            .nth(offset)
            .unwrap_or('\0')
    }

    pub fn peek_char(&self, offset: usize) -> char {
        self.char_at(offset)
    }

    /// Advances past the current character, updating line/column.
    pub fn advance(&mut self) {
        let Some(c) = self.source[self.position..].chars().next() else {
            return;
        };
        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    /// The raw source text between `start` (a byte offset) and the cursor.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Rewinds the cursor to a previously observed byte offset, used by the
    /// lexer to back out of a speculative compound-keyword match. `pos` must
    /// be on a char boundary and must not be ahead of the current position.
    pub fn reset_to(&mut self, pos: usize) {
        debug_assert!(pos <= self.position);
        debug_assert!(self.source.is_char_boundary(pos));
        let consumed = &self.source[pos..self.position];
        self.position = pos;
        for c in consumed.chars().rev() {
            if c == '\n' {
                self.line -= 1;
                // Column is no longer meaningful mid-line after rewinding
                // across a newline; recompute it from the last line start.
                let line_start = self.source[..pos].rfind('\n').map(|i| i + 1).unwrap_or(0);
                self.column = self.source[line_start..pos].chars().count() as u32 + 1;
            } else {
                self.column -= 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advances_over_multibyte_greek() {
        let mut cursor = Cursor::new("Γεια");
        assert_eq!(cursor.current_char(), 'Γ');
        cursor.advance();
        assert_eq!(cursor.current_char(), 'ε');
        assert_eq!(cursor.position(), 'Γ'.len_utf8());
    }

    #[test]
    fn tracks_line_and_column_across_newlines() {
        let mut cursor = Cursor::new("ab\ncd");
        for _ in 0..3 {
            cursor.advance();
        }
        assert_eq!(cursor.line(), 2);
        assert_eq!(cursor.column(), 1);
    }
}

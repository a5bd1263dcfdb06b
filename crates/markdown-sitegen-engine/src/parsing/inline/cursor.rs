/// A cursor for byte-wise scanning of inline text.
///
/// All delimiters recognised by the tokenizer are ASCII, so positions the
/// cursor stops at are always valid `str` boundaries for slicing.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor positioned at byte `start` of `s`.
    pub fn new(s: &'a str, start: usize) -> Self {
        Self { s, i: start }
    }

    /// Returns the current byte position.
    pub fn pos(&self) -> usize {
        self.i
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Peeks `n` bytes ahead of the current position.
    pub fn peek_nth(&self, n: usize) -> Option<u8> {
        self.s.as_bytes().get(self.i + n).copied()
    }

    /// Checks if the remaining input starts with the given byte pattern.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.s
            .as_bytes()
            .get(self.i..)
            .is_some_and(|rest| rest.starts_with(pat))
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.s.as_bytes().get(self.i).copied()?;
        self.i += 1;
        Some(b)
    }

    /// Advances by `n` bytes.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Moves to the next occurrence of `pat` at or after the current position.
    ///
    /// Returns the match position, or `None` (cursor unchanged) if absent.
    pub fn seek(&mut self, pat: &str) -> Option<usize> {
        let rest = self.s.get(self.i..)?;
        let at = self.i + rest.find(pat)?;
        self.i = at;
        Some(at)
    }

    /// Like [`Cursor::seek`], but fails if a newline occurs before the match.
    pub fn seek_on_line(&mut self, pat: &str) -> Option<usize> {
        let rest = self.s.get(self.i..)?;
        let found = rest.find(pat)?;
        if rest[..found].contains('\n') {
            return None;
        }
        self.i += found;
        Some(self.i)
    }
}

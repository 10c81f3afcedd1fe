/// A forward-only position in a string
///
/// At all times, [position](Self::position) is guaranteed to be a character
/// boundary in the source.
#[derive(Clone, Debug)]
pub(crate) struct Cursor<'a> {
    source: &'a str,
    position: usize,
}

impl<'a> Cursor<'a> {
    #[inline]
    #[must_use]
    pub(crate) const fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
        }
    }

    /// The current byte position of the cursor
    #[inline]
    #[must_use]
    pub(crate) const fn position(&self) -> usize {
        self.position
    }

    #[inline]
    #[must_use]
    pub(crate) fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    #[inline]
    #[must_use]
    pub(crate) fn is_at_end(&self) -> bool {
        self.position == self.source.len()
    }

    #[inline]
    #[must_use]
    pub(crate) fn current(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Consume `expected` if it is the current character
    pub(crate) fn eat(&mut self, expected: char) -> bool {
        if self.current() == Some(expected) {
            self.position += expected.len_utf8();
            true
        } else {
            false
        }
    }

    /// Consume characters while the predicate holds, returning them
    pub(crate) fn eat_while<P>(&mut self, mut predicate: P) -> &'a str
    where
        P: FnMut(char) -> bool,
    {
        let remaining = self.remaining();
        let length = remaining
            .char_indices()
            .find(|(_, c)| !predicate(*c))
            .map_or(remaining.len(), |(index, _)| index);

        self.position += length;
        &remaining[..length]
    }

    pub(crate) fn skip_whitespace(&mut self) {
        self.eat_while(char::is_whitespace);
    }
}

impl Iterator for Cursor<'_> {
    type Item = char;

    fn next(&mut self) -> Option<Self::Item> {
        let c = self.current()?;
        self.position += c.len_utf8();
        Some(c)
    }
}

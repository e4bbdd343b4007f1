//! A forward-only character cursor with one-slot pushback and full rewind.
//!
//! Decode hooks speculatively consume characters while probing an escape
//! table and must be able to abandon the attempt without losing input. The
//! cursor supports that two ways:
//!
//! - [`PushbackCursor::pushback`] logically un-consumes a single character,
//!   making it the next value `next()` returns.
//! - [`PushbackCursor::mark`] captures the full cursor state as a [`Mark`]
//!   token; [`PushbackCursor::reset`] restores it exactly. Because the mark
//!   is a value rather than an internal slot, nested speculative attempts
//!   cannot clobber each other's save points.
//!
//! A cursor is created per decode call and borrows its input for the call's
//! duration; it is never shared across threads.

use core::str::Chars;

use crate::error::CodecError;

/// Saved cursor state, produced by [`PushbackCursor::mark`].
///
/// Restoring a mark with [`PushbackCursor::reset`] puts the cursor back in
/// exactly the state it had when the mark was taken: position, pushback slot,
/// and consumption count.
#[derive(Debug, Clone)]
pub struct Mark<'a> {
    iter: Chars<'a>,
    pushback: Option<char>,
    consumed: usize,
}

/// A pushback-capable cursor over the characters of a `&str`.
#[derive(Debug)]
pub struct PushbackCursor<'a> {
    iter: Chars<'a>,
    pushback: Option<char>,
    consumed: usize,
}

impl<'a> PushbackCursor<'a> {
    /// Creates a cursor positioned at the start of `input`.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self {
            iter: input.chars(),
            pushback: None,
            consumed: 0,
        }
    }

    /// Returns `true` if at least one character remains, counting a pending
    /// pushed-back character as available.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.pushback.is_some() || !self.iter.as_str().is_empty()
    }

    /// Consumes and returns the next character.
    ///
    /// A pending pushed-back character is returned first and clears the
    /// pushback slot.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::EndOfInput`] if no characters remain.
    #[expect(clippy::should_implement_trait)] // fallible, so `Iterator` does not fit
    pub fn next(&mut self) -> Result<char, CodecError> {
        let c = match self.pushback.take() {
            Some(c) => c,
            None => self.iter.next().ok_or(CodecError::EndOfInput)?,
        };
        self.consumed += 1;
        Ok(c)
    }

    /// Returns the next character without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.peek_at(0)
    }

    /// Returns the character `n` positions ahead without consuming anything.
    ///
    /// `peek_at(0)` is equivalent to [`peek`](Self::peek). Used by schemes
    /// that recognize fixed-width escapes (hex, octal, unicode) and need to
    /// inspect a known number of characters before committing.
    #[must_use]
    pub fn peek_at(&self, n: usize) -> Option<char> {
        let mut ahead = self.iter.clone();
        if let Some(c) = self.pushback {
            if n == 0 {
                return Some(c);
            }
            return ahead.nth(n - 1);
        }
        ahead.nth(n)
    }

    /// Logically un-consumes one character, making it the next value
    /// [`next`](Self::next) and [`peek`](Self::peek) will return.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::PushbackOccupied`] if a pushed-back character is
    /// already pending; at most one may be pending at a time.
    pub fn pushback(&mut self, c: char) -> Result<(), CodecError> {
        if self.pushback.is_some() {
            return Err(CodecError::PushbackOccupied);
        }
        self.pushback = Some(c);
        self.consumed = self.consumed.saturating_sub(1);
        Ok(())
    }

    /// Captures the current cursor state.
    #[must_use]
    pub fn mark(&self) -> Mark<'a> {
        Mark {
            iter: self.iter.clone(),
            pushback: self.pushback,
            consumed: self.consumed,
        }
    }

    /// Restores the state captured by [`mark`](Self::mark), exactly.
    pub fn reset(&mut self, mark: Mark<'a>) {
        self.iter = mark.iter;
        self.pushback = mark.pushback;
        self.consumed = mark.consumed;
    }

    /// Number of characters logically consumed so far.
    ///
    /// `next()` increments the count and `pushback(..)` decrements it, so at
    /// the end of a well-behaved decode loop this equals the input's
    /// character count.
    #[must_use]
    pub fn consumed(&self) -> usize {
        self.consumed
    }
}

//! A miniature HTML-flavored scheme used to exercise the engine end to end.
//!
//! Not a production entity table — just enough surface (named entities,
//! `&#x..;` numeric references, hex fallback) to hit every engine path.

use std::borrow::Cow;

use crate::{Codec, CodecError, PushbackCursor, ReadOnlyTrie, Trie, contains_character, to_hex};

pub struct EntityCodec {
    entities: ReadOnlyTrie<char>,
}

impl EntityCodec {
    pub fn new() -> Self {
        let mut entities = Trie::new();
        for (key, value) in [("lt;", '<'), ("gt;", '>'), ("amp;", '&'), ("quot;", '"')] {
            entities.insert(key, value);
        }
        Self {
            entities: entities.into_shared(),
        }
    }
}

impl Codec for EntityCodec {
    fn encode_character(&self, immune: &[char], c: char) -> Cow<'static, str> {
        if c.is_ascii_alphanumeric() || contains_character(c, immune) {
            return Cow::Owned(c.to_string());
        }
        match c {
            '<' => Cow::Borrowed("&lt;"),
            '>' => Cow::Borrowed("&gt;"),
            '&' => Cow::Borrowed("&amp;"),
            '"' => Cow::Borrowed("&quot;"),
            other => Cow::Owned(format!("&#x{};", to_hex(other))),
        }
    }

    fn decode_character(&self, input: &mut PushbackCursor<'_>) -> Result<Option<char>, CodecError> {
        if input.peek() != Some('&') {
            return Ok(None);
        }
        let start = input.mark();
        input.next()?;

        if input.peek() == Some('#') {
            input.next()?;
            if let Some(c) = decode_hex_reference(input) {
                return Ok(Some(c));
            }
            input.reset(start);
            return Ok(None);
        }

        if let Some((_, &c)) = self.entities.longest_match_at(input) {
            return Ok(Some(c));
        }
        input.reset(start);
        Ok(None)
    }
}

/// Parses `x<hexdigits>;` after a consumed `&#`. Returns `None` on any
/// malformation; the caller rewinds.
fn decode_hex_reference(input: &mut PushbackCursor<'_>) -> Option<char> {
    match input.peek() {
        Some('x' | 'X') => {
            let _ = input.next();
        }
        _ => return None,
    }
    let mut value: u32 = 0;
    let mut digits = 0;
    while let Some(c) = input.peek() {
        let Some(d) = c.to_digit(16) else { break };
        value = value.checked_mul(16)?.checked_add(d)?;
        let _ = input.next();
        digits += 1;
    }
    if digits == 0 || input.peek() != Some(';') {
        return None;
    }
    let _ = input.next();
    char::from_u32(value)
}

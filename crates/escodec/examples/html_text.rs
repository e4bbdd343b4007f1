//! Builds a small HTML-text scheme on top of the codec engine and walks an
//! untrusted string through encode and back through decode.
//!
//! The interesting part is the decode side: the named-entity table is a
//! prefix tree published read-only, and a failed entity attempt rewinds the
//! cursor so the raw characters fall through verbatim instead of being
//! swallowed.
//!
//! Run with
//!
//! ```bash
//! cargo run -p escodec --example html_text
//! ```

use std::borrow::Cow;

use escodec::{
    Codec, CodecError, PushbackCursor, ReadOnlyTrie, Trie, contains_character,
    hex_for_non_alphanumeric,
};

struct HtmlTextCodec {
    entities: ReadOnlyTrie<char>,
}

impl HtmlTextCodec {
    fn new() -> Self {
        let mut entities = Trie::new();
        for (key, value) in [("lt;", '<'), ("gt;", '>'), ("amp;", '&')] {
            entities.insert(key, value);
        }
        Self {
            entities: entities.into_shared(),
        }
    }
}

impl Codec for HtmlTextCodec {
    fn encode_character(&self, immune: &[char], c: char) -> Cow<'static, str> {
        if contains_character(c, immune) {
            return Cow::Owned(c.to_string());
        }
        match c {
            '<' => Cow::Borrowed("&lt;"),
            '>' => Cow::Borrowed("&gt;"),
            '&' => Cow::Borrowed("&amp;"),
            other => {
                let hex = hex_for_non_alphanumeric(other);
                if hex.is_empty() {
                    Cow::Owned(other.to_string())
                } else {
                    Cow::Owned(format!("&#x{hex};"))
                }
            }
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
            match decode_hex_reference(input) {
                Some(c) => return Ok(Some(c)),
                None => {
                    input.reset(start);
                    return Ok(None);
                }
            }
        }

        match self.entities.longest_match_at(input) {
            Some((_, &c)) => Ok(Some(c)),
            None => {
                input.reset(start);
                Ok(None)
            }
        }
    }
}

/// Parses `x<hexdigits>;` after a consumed `&#`; `None` means malformed and
/// the caller rewinds.
fn decode_hex_reference(input: &mut PushbackCursor<'_>) -> Option<char> {
    if !matches!(input.peek(), Some('x' | 'X')) {
        return None;
    }
    let _ = input.next();
    let mut value: u32 = 0;
    let mut digits = 0;
    while let Some(d) = input.peek().and_then(|c| c.to_digit(16)) {
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

fn main() -> Result<(), CodecError> {
    let codec = HtmlTextCodec::new();
    let untrusted = "<script>if (a && b) alert(\"pwned\")</script>";

    // Space stays readable in the output context, so mark it immune.
    let encoded = codec.encode(&[' '], untrusted);
    println!("encoded: {encoded}");

    let decoded = codec.decode(&encoded)?;
    println!("decoded: {decoded}");
    assert_eq!(decoded, untrusted);

    // A malformed entity is never swallowed: the failed attempt rewinds and
    // the characters pass through untouched.
    let malformed = "5 &lt 6 &unknown; &amp; done";
    println!("malformed in:  {malformed}");
    println!("malformed out: {}", codec.decode(malformed)?);

    Ok(())
}

//! The encode/decode contract shared by every concrete encoding scheme.
//!
//! [`Codec`] supplies the generic traversal — per-character encoding and the
//! pushback-driven decode loop — while concrete schemes override the two
//! hook methods to recognize and produce their escape syntax.
//!
//! The single most important obligation in the whole engine sits on
//! [`Codec::decode_character`]: a hook that fails to recognize an escape
//! must restore the cursor to exactly the position it had on entry before
//! reporting no-match. The decode loop depends on that to re-emit the
//! rejected characters verbatim; a hook that leaves the cursor advanced
//! silently drops input.

use std::borrow::Cow;

use crate::{cursor::PushbackCursor, error::CodecError};

/// A paired encode/decode scheme for one output context.
///
/// The provided `encode`/`decode` methods drive the overridable
/// [`encode_character`](Self::encode_character) and
/// [`decode_character`](Self::decode_character) hooks. The defaults are
/// identity: a codec that overrides nothing passes text through unchanged.
///
/// # Examples
///
/// A scheme that escapes `<` and decodes it back:
///
/// ```
/// use std::borrow::Cow;
///
/// use escodec::{Codec, CodecError, PushbackCursor};
///
/// struct LtCodec;
///
/// impl Codec for LtCodec {
///     fn encode_character(&self, _immune: &[char], c: char) -> Cow<'static, str> {
///         match c {
///             '<' => Cow::Borrowed("&lt;"),
///             other => Cow::Owned(other.to_string()),
///         }
///     }
///
///     fn decode_character(
///         &self,
///         input: &mut PushbackCursor<'_>,
///     ) -> Result<Option<char>, CodecError> {
///         let start = input.mark();
///         for expected in "&lt;".chars() {
///             if input.peek() != Some(expected) {
///                 input.reset(start);
///                 return Ok(None);
///             }
///             input.next()?;
///         }
///         Ok(Some('<'))
///     }
/// }
///
/// let codec = LtCodec;
/// assert_eq!(codec.encode(&[], "a<b"), "a&lt;b");
/// assert_eq!(codec.decode("a&lt;b")?, "a<b");
/// assert_eq!(codec.decode("a&lt b")?, "a&lt b");
/// # Ok::<(), CodecError>(())
/// ```
pub trait Codec {
    /// Encodes `input` for this codec's output context.
    ///
    /// Applies [`encode_character`](Self::encode_character) to each
    /// character in order and concatenates the results. Characters are never
    /// reordered or dropped; empty input yields an empty string. `immune`
    /// lists characters the caller wants passed through unescaped even
    /// though they are not alphanumeric; it may be empty.
    fn encode(&self, immune: &[char], input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        for c in input.chars() {
            out.push_str(&self.encode_character(immune, c));
        }
        out
    }

    /// Encodes one character. Default: identity.
    ///
    /// Overrides return the character itself when it is alphanumeric or in
    /// `immune`, and the scheme's escape form otherwise.
    fn encode_character(&self, immune: &[char], c: char) -> Cow<'static, str> {
        let _ = immune;
        Cow::Owned(c.to_string())
    }

    /// Decodes `input`, reversing this codec's escaping.
    ///
    /// Runs [`decode_character`](Self::decode_character) against a pushback
    /// cursor until the input is exhausted. A decoded character is appended
    /// to the output; on no-match the loop consumes exactly one raw
    /// character and appends it verbatim, which both guarantees forward
    /// progress and leaves malformed escapes in the output untouched.
    ///
    /// # Errors
    ///
    /// Propagates any [`CodecError`] raised by the hook; the engine itself
    /// neither swallows nor retries hook failures.
    fn decode(&self, input: &str) -> Result<String, CodecError> {
        let mut out = String::with_capacity(input.len());
        let mut cursor = PushbackCursor::new(input);
        while cursor.has_next() {
            let before = cursor.consumed();
            match self.decode_character(&mut cursor)? {
                Some(c) => out.push(c),
                None => {
                    debug_assert_eq!(
                        cursor.consumed(),
                        before,
                        "decode hook reported no-match without rewinding the cursor"
                    );
                    out.push(cursor.next()?);
                }
            }
        }
        debug_assert_eq!(
            cursor.consumed(),
            input.chars().count(),
            "decode loop must account for every input character exactly once"
        );
        Ok(out)
    }

    /// Attempts to decode one escape sequence at the cursor position.
    ///
    /// On success, consumes the full sequence and returns the decoded
    /// character. On no-match, returns `Ok(None)` — and MUST first restore
    /// the cursor to the position it had on entry (take a
    /// [`mark`](PushbackCursor::mark) before consuming anything
    /// speculatively). The default recognizes nothing and consumes nothing.
    ///
    /// # Errors
    ///
    /// Implementations surface cursor misuse (e.g. reading past the end)
    /// as a [`CodecError`].
    fn decode_character(&self, input: &mut PushbackCursor<'_>) -> Result<Option<char>, CodecError> {
        let _ = input;
        Ok(None)
    }
}

/// Returns `true` if `c` is present in `set`.
///
/// Convenience for hook implementations checking a scheme's immune set.
#[must_use]
pub fn contains_character(c: char, set: &[char]) -> bool {
    set.contains(&c)
}

#[cfg(test)]
mod tests {
    use super::{Codec, contains_character};

    struct Identity;
    impl Codec for Identity {}

    #[test]
    fn default_encode_is_identity() {
        let codec = Identity;
        assert_eq!(codec.encode(&[], "a<b&c"), "a<b&c");
        assert_eq!(codec.encode(&['<'], "a<b"), "a<b");
    }

    #[test]
    fn empty_input_encodes_to_empty_output() {
        let codec = Identity;
        assert_eq!(codec.encode(&[], ""), "");
    }

    #[test]
    fn default_decode_is_identity() {
        let codec = Identity;
        assert_eq!(codec.decode("a&lt;b").unwrap(), "a&lt;b");
        assert_eq!(codec.decode("").unwrap(), "");
    }

    #[test]
    fn immune_set_membership() {
        assert!(contains_character(',', &[',', '.']));
        assert!(!contains_character(';', &[',', '.']));
        assert!(!contains_character('a', &[]));
    }
}

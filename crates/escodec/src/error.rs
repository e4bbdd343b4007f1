use thiserror::Error;

/// Failures surfaced by the codec engine.
///
/// A failed speculative match during decoding is *not* an error; it is the
/// `Ok(None)` outcome of [`Codec::decode_character`](crate::Codec::decode_character)
/// and is handled entirely inside the decode loop.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    /// `next()` was called on a cursor with no characters remaining.
    ///
    /// Correctly written decode hooks check `has_next()` first, so reaching
    /// this variant indicates a contract violation in a hook rather than a
    /// property of the input.
    #[error("unexpected end of input")]
    EndOfInput,

    /// `pushback(..)` was called while a pushed-back character was already
    /// pending. The cursor holds at most one pushed-back character.
    #[error("pushback slot already occupied")]
    PushbackOccupied,
}

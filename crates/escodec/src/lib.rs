//! Core engine for context-sensitive security encoding.
//!
//! Concrete schemes (HTML entities, percent-encoding, CSS/JS escaping) are
//! built on three pieces this crate provides:
//!
//! - [`Trie`] / [`ReadOnlyTrie`]: longest-prefix-match escape tables, so a
//!   decoder can tell `amp;` apart from a longer entity that also starts
//!   with `amp`.
//! - [`PushbackCursor`]: a forward-only character cursor with one-slot
//!   pushback and exact mark/reset rewind, letting a decoder speculatively
//!   consume characters and abandon the attempt without losing input.
//! - [`Codec`]: the encode/decode skeleton that drives the cursor and the
//!   per-scheme hook methods, plus the shared hex table behind
//!   [`hex_for_non_alphanumeric`] for generic numeric escapes.
//!
//! The engine guarantees that every input character is accounted for exactly
//! once during decoding: a failed escape attempt rewinds fully and the
//! offending characters pass through verbatim, never dropped or duplicated.

mod codec;
mod cursor;
mod error;
mod hex;
mod trie;
mod view;

#[cfg(test)]
mod tests;

pub use codec::{Codec, contains_character};
pub use cursor::{Mark, PushbackCursor};
pub use error::CodecError;
pub use hex::{hex_for_non_alphanumeric, to_hex, to_octal};
pub use trie::Trie;
pub use view::{ReadOnlyTrie, TrieView};

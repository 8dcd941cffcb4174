//! Slug generation and validation utilities.
//!
//! Produces fixed-length random identifiers from an alphabet chosen to avoid
//! visually ambiguous characters, and validates slugs before they reach the
//! store.

use rand::Rng;

/// Length of every generated slug, in characters.
pub const SLUG_LEN: usize = 6;

/// Slug alphabet: digits and ASCII letters minus `0`, `O`, `1`, `l`, `I`.
///
/// 57 characters, so a 6-bit chunk indexes it with a small rejection range.
pub const SLUG_ALPHABET: &[u8] = b"23456789abcdefghijkmnopqrstuvwxyzABCDEFGHJKLMNPQRSTUVWXYZ";

/// Bits consumed per alphabet index.
const CHUNK_BITS: u32 = 6;

/// Mask selecting the low [`CHUNK_BITS`] bits of a draw.
const CHUNK_MASK: u64 = (1 << CHUNK_BITS) - 1;

/// Usable chunks per 64-bit draw.
const CHUNKS_PER_DRAW: u32 = u64::BITS / CHUNK_BITS;

/// Generates a random slug using the per-thread RNG.
///
/// Each thread owns an independently OS-seeded generator, so concurrent
/// tasks never share or correlate random state.
///
/// # Examples
///
/// ```ignore
/// let slug = generate();
/// assert_eq!(slug.len(), 6);
/// assert!(is_valid(&slug));
/// ```
pub fn generate() -> String {
    generate_with(&mut rand::rng())
}

/// Generates a random slug from the supplied generator.
///
/// One `u64` draw yields ten 6-bit chunks. Each chunk that falls inside the
/// alphabet range picks a character; chunks in `[57, 64)` are discarded and
/// the cursor advances, which keeps the distribution uniform instead of
/// folding the excess values back onto the first characters. A fresh draw
/// replaces an exhausted one.
pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut slug = Vec::with_capacity(SLUG_LEN);
    let mut draw = rng.random::<u64>();
    let mut remaining = CHUNKS_PER_DRAW;

    while slug.len() < SLUG_LEN {
        if remaining == 0 {
            draw = rng.random::<u64>();
            remaining = CHUNKS_PER_DRAW;
        }

        let idx = (draw & CHUNK_MASK) as usize;
        if idx < SLUG_ALPHABET.len() {
            slug.push(SLUG_ALPHABET[idx]);
        }

        draw >>= CHUNK_BITS;
        remaining -= 1;
    }

    // The alphabet is pure ASCII, so the bytes are always valid UTF-8.
    String::from_utf8(slug).expect("slug alphabet is ASCII")
}

/// Returns whether `slug` has the expected length and alphabet.
///
/// Used by the store as a write-time guard so malformed keys can never be
/// persisted, regardless of where they came from.
pub fn is_valid(slug: &str) -> bool {
    slug.len() == SLUG_LEN && slug.bytes().all(|b| SLUG_ALPHABET.contains(&b))
}

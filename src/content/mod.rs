//! Unbiased synthetic content generation.
//!
//! Payloads are drawn from an [`Alphabet`] using a cryptographically strong
//! RNG. Raw bytes whose residue class is not fully represented in `0..=255`
//! are rejected, so every symbol has exactly the same probability no matter
//! how many symbols the alphabet holds.
mod alphabet;
mod generator;


pub use alphabet::{Alphabet, STD_CHARS};
pub use generator::ContentGenerator;

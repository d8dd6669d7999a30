use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use crate::error::GeneratorError;

use super::Alphabet;

/// Raw bytes drawn per round exceed the symbols still missing by a quarter.
const OVERSAMPLE_DIVISOR: usize = 4;
/// Upper bound on a single entropy request.
const MAX_BATCH: usize = 64 * 1024;

/// Produces fixed-length payloads drawn uniformly from an [`Alphabet`].
#[derive(Debug)]
pub struct ContentGenerator<R = OsRng> {
    alphabet: Alphabet,
    pub(super) rng: R,
    pub(super) raw: Vec<u8>,
}

impl ContentGenerator<OsRng> {
    /// Generator backed by the operating system's entropy source.
    #[must_use]
    pub const fn new(alphabet: Alphabet) -> Self {
        Self::with_rng(alphabet, OsRng)
    }
}

impl<R> ContentGenerator<R>
where
    R: RngCore + CryptoRng,
{
    #[must_use]
    pub const fn with_rng(alphabet: Alphabet, rng: R) -> Self {
        Self {
            alphabet,
            rng,
            raw: Vec::new(),
        }
    }

    /// Generate exactly `length` symbols.
    ///
    /// A zero length returns immediately without touching the RNG.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::Entropy`] if the RNG cannot supply bytes.
    pub fn generate(&mut self, length: usize) -> Result<Vec<u8>, GeneratorError> {
        let mut out = Vec::with_capacity(length);
        while out.len() < length {
            let remaining = length.saturating_sub(out.len());
            let batch = remaining
                .saturating_add(remaining / OVERSAMPLE_DIVISOR)
                .clamp(1, MAX_BATCH);
            self.raw.resize(batch, 0);
            self.rng
                .try_fill_bytes(&mut self.raw)
                .map_err(|source| GeneratorError::Entropy { source })?;

            for &raw in &self.raw {
                if out.len() == length {
                    break;
                }
                if let Some(symbol) = self.alphabet.symbol(raw) {
                    out.push(symbol);
                }
            }
        }
        Ok(out)
    }
}

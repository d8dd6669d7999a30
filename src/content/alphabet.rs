use crate::error::ConfigError;

/// Default symbol set for synthetic files.
pub const STD_CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Smallest alphabet that still carries entropy.
const MIN_SYMBOLS: usize = 2;
/// One symbol per possible byte value.
const MAX_SYMBOLS: usize = 256;
/// Number of distinct raw byte values.
const RAW_VALUES: usize = 256;

/// Ordered set of bytes synthetic content is drawn from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<u8>,
    max_accepted: u8,
}

impl Alphabet {
    /// Build an alphabet from the given symbols.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::AlphabetSize`] unless the alphabet holds
    /// between 2 and 256 symbols, and [`ConfigError::DuplicateSymbol`] when
    /// a byte appears twice.
    pub fn new(symbols: impl Into<Vec<u8>>) -> Result<Self, ConfigError> {
        let symbols = symbols.into();
        let len = symbols.len();
        if !(MIN_SYMBOLS..=MAX_SYMBOLS).contains(&len) {
            return Err(ConfigError::AlphabetSize { len });
        }
        // A repeated byte would be drawn proportionally more often.
        let mut seen = [false; RAW_VALUES];
        for &byte in &symbols {
            let Some(slot) = seen.get_mut(usize::from(byte)) else {
                continue;
            };
            if *slot {
                return Err(ConfigError::DuplicateSymbol { byte });
            }
            *slot = true;
        }
        Ok(Self {
            max_accepted: max_accepted_for(len),
            symbols,
        })
    }

    /// The 62 ASCII letters and digits.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            symbols: STD_CHARS.to_vec(),
            max_accepted: max_accepted_for(STD_CHARS.len()),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.symbols
    }

    #[must_use]
    pub const fn max_accepted(&self) -> u8 {
        self.max_accepted
    }

    /// Map a raw random byte onto a symbol, or `None` when it must be
    /// rejected to keep the distribution uniform.
    #[must_use]
    pub fn symbol(&self, raw: u8) -> Option<u8> {
        if raw > self.max_accepted {
            return None;
        }
        let idx = usize::from(raw).checked_rem(self.symbols.len())?;
        self.symbols.get(idx).copied()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::standard()
    }
}

/// Largest raw byte whose residue class appears `floor(256 / len)` times.
fn max_accepted_for(len: usize) -> u8 {
    let remainder = RAW_VALUES.checked_rem(len).unwrap_or(0);
    u8::try_from(usize::from(u8::MAX).saturating_sub(remainder)).unwrap_or(u8::MAX)
}

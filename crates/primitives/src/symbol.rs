use std::{fmt, str};

use serde::{Deserialize, Serialize};

use crate::errors::SymbolError;

/// Maximum length of a symbol, in bytes.
pub const MAX_SYMBOL_LEN: usize = 32;

/// Asset key a reporter publishes a price for (e.g. `"ETH"`).
///
/// Always non-empty, valid UTF-8 and at most [`MAX_SYMBOL_LEN`] bytes.
/// Equality is exact byte equality, so `"eth"` and `"ETH"` are distinct keys.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol(String);

impl Symbol {
    pub fn new(s: impl Into<String>) -> Result<Self, SymbolError> {
        let s = s.into();
        if s.is_empty() {
            return Err(SymbolError::Empty);
        }
        if s.len() > MAX_SYMBOL_LEN {
            return Err(SymbolError::TooLong(s.len()));
        }
        Ok(Self(s))
    }

    /// Parses a symbol from raw wire bytes.
    pub fn from_bytes(buf: &[u8]) -> Result<Self, SymbolError> {
        let s = str::from_utf8(buf).map_err(|_| SymbolError::NotUtf8)?;
        Self::new(s)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl TryFrom<String> for Symbol {
    type Error = SymbolError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Symbol {
    type Error = SymbolError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl str::FromStr for Symbol {
    type Err = SymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl From<Symbol> for String {
    fn from(value: Symbol) -> Self {
        value.0
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

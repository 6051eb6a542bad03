//! Error type for the fallible corners of the crate.
//!
//! Color conversions are total and never fail; errors only surface where a
//! caller asks for strict behaviour (parsing with [`std::str::FromStr`],
//! assembling a color model from parts, addressing a swatch).

/// All errors produced by this crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A color model was assembled without one of its required operations.
    #[error("color model is missing the `{missing}` operation")]
    IncompleteColorModel { missing: &'static str },

    /// A string could not be parsed strictly as a hex color.
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),

    /// A swatch index past the end of the configured swatches.
    #[error("swatch {index} out of range ({len} swatches)")]
    SwatchOutOfRange { index: usize, len: usize },
}

impl Error {
    /// Create a new invalid hex error
    pub fn invalid_hex(value: &str) -> Self {
        Error::InvalidHex(value.to_string())
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}

//! Error types for construction, formatting, gradients and palettes.

use crate::Component;

/// A color value could not be constructed from the given input.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ColorError {
    /// A component was outside the range declared by the formatting
    /// parameters.
    #[error("'{param}' must be between 0 and {max}, got {value}")]
    OutOfRange {
        /// The name of the offending parameter.
        param: &'static str,
        /// The value that was given.
        value: Component,
        /// The upper bound of the declared range.
        max: Component,
    },

    /// A hexadecimal string did not have 3, 6 or 8 digits.
    #[error("hex colors must have 3, 6 or 8 digits, got {0}")]
    HexLength(usize),

    /// A hexadecimal string contained a non-hexadecimal character.
    #[error("'{0}' is not a valid hexadecimal color")]
    HexDigit(String),

    /// A component sequence had the wrong number of entries for the target
    /// system.
    #[error("{system} takes {expected} components, got {got}")]
    Arity {
        /// The name of the target system.
        system: &'static str,
        /// How many components the system accepts.
        expected: &'static str,
        /// How many components were given.
        got: usize,
    },

    /// Bare components were given for a system that is not tuple based.
    #[error("{0} colors cannot be built from bare components")]
    NotTupleBased(&'static str),
}

/// A color-like input could not be reconciled with the target
/// [`ColorFormat`](crate::ColorFormat).
///
/// Every failure inside [`ColorFormat::format`](crate::ColorFormat::format)
/// collapses into this type so callers need a single catch site.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum FormatError {
    /// The underlying constructor rejected the input.
    #[error(transparent)]
    Color(#[from] ColorError),

    /// A bare component sequence was given for a hex format. Too many tuple
    /// shaped systems exist for a bare sequence to be unambiguous.
    #[error("bare components are ambiguous for a hex format")]
    TupleForHex,

    /// An 8-digit hex string was given for a non-hex format. The position of
    /// the alpha byte is only defined by a hex format's own parameters.
    #[error("strings carrying an alpha byte are only accepted by hex formats")]
    AlphaBearingString,
}

/// A gradient could not be constructed or reconfigured.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum GradientError {
    /// Fewer than two color stops were given.
    #[error("gradients need at least 2 color stops, got {0}")]
    TooFewStops(usize),

    /// The domain was empty or inverted.
    #[error("gradient domain must satisfy min < max, got [{min}, {max}]")]
    BadDomain {
        /// The lower end of the domain.
        min: Component,
        /// The upper end of the domain.
        max: Component,
    },

    /// Stop positions did not match the stops, were unsorted or left the
    /// domain.
    #[error("stop positions must be sorted, lie within the domain and match the number of stops")]
    BadPositions,

    /// A color stop could not be normalized.
    #[error(transparent)]
    Format(#[from] FormatError),
}

/// A palette operation failed.
#[derive(Debug, thiserror::Error)]
pub enum PaletteError {
    /// A name is already bound to a different color.
    #[error("'{0}' is already bound to a different color")]
    NameClash(String),

    /// A name was not found in the palette.
    #[error("no color named '{0}' in the palette")]
    MissingName(String),

    /// A palette file entry was not a hex string.
    #[error("palette entries must be hex strings, got '{0}'")]
    BadEntry(String),

    /// A stored hex string could not be parsed.
    #[error(transparent)]
    Color(#[from] ColorError),

    /// A color-like input could not be normalized.
    #[error(transparent)]
    Format(#[from] crate::FormatError),

    /// A palette file could not be read or written.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A palette file was not valid JSON.
    #[error(transparent)]
    Parse(#[from] serde_json::Error),
}

//! Model a color as a hexadecimal string.

use std::fmt;

use crate::systems::{impl_canonical_eq, ColorSystem};
use crate::{ColorError, Component, Rgba};

bitflags::bitflags! {
    /// Layout options for the string form of a [`Hex`] color.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct HexFlags: u8 {
        /// Render the digits in upper case.
        const UPPERCASE = 1 << 0;
        /// Prefix the string with `#`.
        const HASH = 1 << 1;
        /// Include the alpha byte in the string form.
        const ALPHA = 1 << 2;
    }
}

/// Where the alpha byte sits in an 8 digit hex string.
///
/// There is no default: the position must always be stated, because both
/// conventions are in active use and silently assuming one of them corrupts
/// the alpha channel of the other.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlphaPosition {
    /// The alpha byte is the first pair: `#AARRGGBB`.
    Leading,
    /// The alpha byte is the last pair: `#RRGGBBAA`.
    Trailing,
}

/// Formatting parameters for the [`Hex`] system.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HexParams {
    /// Layout of the string form.
    pub flags: HexFlags,
    /// Where the alpha byte sits when 8 digits are parsed or rendered.
    pub alpha_position: AlphaPosition,
}

impl HexParams {
    /// Lower case, `#`-prefixed parameters without an alpha byte in the
    /// string form, with the given alpha position for parsing.
    pub fn new(alpha_position: AlphaPosition) -> Self {
        Self {
            flags: HexFlags::HASH,
            alpha_position,
        }
    }
}

/// A color represented as a hexadecimal string.
///
/// Accepts 3, 6 and 8 digit strings with an optional `#` prefix in either
/// case; 3 digit shorthand doubles each nibble. The string form is rebuilt
/// from the canonical channels according to the parameters, so parsing and
/// rendering are independent of the input's own layout.
#[derive(Clone, Copy, Debug)]
pub struct Hex {
    params: HexParams,
    canonical: Rgba,
}

impl Hex {
    /// Parse a hexadecimal string.
    pub fn new(value: &str, params: HexParams) -> Result<Self, ColorError> {
        let digits = value.strip_prefix('#').unwrap_or(value);

        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::HexDigit(value.to_string()));
        }

        // Slicing by byte offsets is safe after the all-ASCII check.
        let pair = |i: usize| u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16).unwrap();

        let [red, green, blue, alpha] = match digits.len() {
            3 => {
                let nibble = |i: usize| {
                    let v = u8::from_str_radix(&digits[i..i + 1], 16).unwrap();
                    v * 16 + v
                };
                [nibble(0), nibble(1), nibble(2), 255]
            }
            6 => [pair(0), pair(1), pair(2), 255],
            8 => match params.alpha_position {
                AlphaPosition::Leading => [pair(1), pair(2), pair(3), pair(0)],
                AlphaPosition::Trailing => [pair(0), pair(1), pair(2), pair(3)],
            },
            len => return Err(ColorError::HexLength(len)),
        };

        Ok(Self {
            params,
            canonical: Rgba::new(
                Component::from(red),
                Component::from(green),
                Component::from(blue),
                Component::from(alpha),
            ),
        })
    }
}

impl ColorSystem for Hex {
    type Params = HexParams;

    fn from_canonical(rgba: Rgba, params: &Self::Params) -> Self {
        Self {
            params: *params,
            canonical: rgba,
        }
    }

    fn to_canonical(&self) -> Rgba {
        self.canonical
    }

    fn params(&self) -> Self::Params {
        self.params
    }
}

impl_canonical_eq!(Hex);

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [red, green, blue, alpha] = self.canonical.rounded();

        let mut bytes = Vec::with_capacity(4);
        if self.params.flags.contains(HexFlags::ALPHA)
            && self.params.alpha_position == AlphaPosition::Leading
        {
            bytes.push(alpha);
        }
        bytes.extend([red, green, blue]);
        if self.params.flags.contains(HexFlags::ALPHA)
            && self.params.alpha_position == AlphaPosition::Trailing
        {
            bytes.push(alpha);
        }

        if self.params.flags.contains(HexFlags::HASH) {
            write!(f, "#")?;
        }
        for byte in bytes {
            if self.params.flags.contains(HexFlags::UPPERCASE) {
                write!(f, "{byte:02X}")?;
            } else {
                write!(f, "{byte:02x}")?;
            }
        }
        Ok(())
    }
}

//! The canonical RGBA representation that all color systems convert through,
//! and the [`Color`] value that can hold a color of any supported system.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::systems::{
    CieLab, CieLuv, Cmy, Cmyk, ColorSystem, HasHue, HclLab, HclLuv, Hex, Hsl, Hsv, Rgb,
};
use crate::ColorFormat;

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that all components are stored as.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that all components are stored as.
pub type Component = f64;

/// Three components in the native scale of one color model. Used by the
/// conversion plumbing, which never deals with alpha.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }
}

/// The canonical representation of a color: red, green, blue and alpha
/// channels on a 0 to 255 scale.
///
/// Every conversion between two color systems pivots through this type; no
/// direct system-to-system path exists. Channels are clamped into range at
/// construction, because round-tripping through floating point math is
/// allowed to drift slightly past the bounds.
#[derive(Clone, Copy, Debug)]
pub struct Rgba {
    /// The red channel, in `[0, 255]`.
    pub red: Component,
    /// The green channel, in `[0, 255]`.
    pub green: Component,
    /// The blue channel, in `[0, 255]`.
    pub blue: Component,
    /// The alpha channel, in `[0, 255]`.
    pub alpha: Component,
}

impl Rgba {
    /// Create a canonical value, clamping each channel into `[0, 255]`.
    pub fn new(red: Component, green: Component, blue: Component, alpha: Component) -> Self {
        Self {
            red: red.clamp(0.0, 255.0),
            green: green.clamp(0.0, 255.0),
            blue: blue.clamp(0.0, 255.0),
            alpha: alpha.clamp(0.0, 255.0),
        }
    }

    /// Create a canonical value from color components on a 0 to 1 scale plus
    /// an alpha channel that is already on the 0 to 255 scale.
    pub(crate) fn from_unit(components: Components, alpha: Component) -> Self {
        Self::new(
            components.0 * 255.0,
            components.1 * 255.0,
            components.2 * 255.0,
            alpha,
        )
    }

    /// The three color channels scaled down to the 0 to 1 range.
    pub(crate) fn unit_components(&self) -> Components {
        Components(self.red / 255.0, self.green / 255.0, self.blue / 255.0)
    }

    /// The channels rounded to the nearest integer. This is the
    /// representation used for equality, hashing and display.
    pub fn rounded(&self) -> [u8; 4] {
        [
            self.red.round() as u8,
            self.green.round() as u8,
            self.blue.round() as u8,
            self.alpha.round() as u8,
        ]
    }

    /// Whether the color is fully opaque after rounding.
    pub fn is_opaque(&self) -> bool {
        self.rounded()[3] == 255
    }
}

impl PartialEq for Rgba {
    fn eq(&self, other: &Self) -> bool {
        self.rounded() == other.rounded()
    }
}

impl Eq for Rgba {}

impl Hash for Rgba {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rounded().hash(state);
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.rounded();
        write!(f, "rgba({r}, {g}, {b}, {a})")
    }
}

/// A color value in any of the supported color systems.
///
/// This is what [`ColorFormat::format`](crate::ColorFormat::format) and
/// [`ColorFormat::new_color`](crate::ColorFormat::new_color) produce. Two
/// values compare equal exactly when their canonical channels match after
/// rounding, regardless of which system or formatting parameters produced
/// them.
#[derive(Clone, Debug)]
pub enum Color {
    /// A color in the sRGB color space.
    Rgb(Rgb),
    /// A color in the HSL color space.
    Hsl(Hsl),
    /// A color in the HSV color space.
    Hsv(Hsv),
    /// A color in the CMY color space.
    Cmy(Cmy),
    /// A color in the CMYK color space.
    Cmyk(Cmyk),
    /// A color in the CIELab color space.
    CieLab(CieLab),
    /// A color in the CIELuv color space.
    CieLuv(CieLuv),
    /// A color in the cylindrical form of CIELab.
    HclLab(HclLab),
    /// A color in the cylindrical form of CIELuv.
    HclLuv(HclLuv),
    /// A color represented as a hexadecimal string.
    Hex(Hex),
}

impl Color {
    /// The canonical representation of this color.
    pub fn to_canonical(&self) -> Rgba {
        match self {
            Color::Rgb(c) => c.to_canonical(),
            Color::Hsl(c) => c.to_canonical(),
            Color::Hsv(c) => c.to_canonical(),
            Color::Cmy(c) => c.to_canonical(),
            Color::Cmyk(c) => c.to_canonical(),
            Color::CieLab(c) => c.to_canonical(),
            Color::CieLuv(c) => c.to_canonical(),
            Color::HclLab(c) => c.to_canonical(),
            Color::HclLuv(c) => c.to_canonical(),
            Color::Hex(c) => c.to_canonical(),
        }
    }

    /// A [`ColorFormat`] that reproduces this value's system and formatting
    /// parameters.
    pub fn format(&self) -> ColorFormat {
        match self {
            Color::Rgb(c) => ColorFormat::Rgb(c.params()),
            Color::Hsl(c) => ColorFormat::Hsl(c.params()),
            Color::Hsv(c) => ColorFormat::Hsv(c.params()),
            Color::Cmy(c) => ColorFormat::Cmy(c.params()),
            Color::Cmyk(c) => ColorFormat::Cmyk(c.params()),
            Color::CieLab(c) => ColorFormat::CieLab(c.params()),
            Color::CieLuv(c) => ColorFormat::CieLuv(c.params()),
            Color::HclLab(c) => ColorFormat::HclLab(c.params()),
            Color::HclLuv(c) => ColorFormat::HclLuv(c.params()),
            Color::Hex(c) => ColorFormat::Hex(c.params()),
        }
    }

    /// Re-express this color through another format. Shorthand for pivoting
    /// the canonical representation through
    /// [`ColorFormat::from_canonical`].
    pub fn reformat(&self, format: &ColorFormat) -> Color {
        format.from_canonical(self.to_canonical())
    }

    /// The hue of this color and the maximum of its hue scale, if the color
    /// is in a polar system.
    pub fn hue(&self) -> Option<(Component, Component)> {
        match self {
            Color::Hsl(c) => Some((c.hue(), c.max_hue())),
            Color::Hsv(c) => Some((c.hue(), c.max_hue())),
            Color::HclLab(c) => Some((c.hue(), c.max_hue())),
            Color::HclLuv(c) => Some((c.hue(), c.max_hue())),
            _ => None,
        }
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.to_canonical() == other.to_canonical()
    }
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_canonical().hash(state);
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Rgb(c) => c.fmt(f),
            Color::Hsl(c) => c.fmt(f),
            Color::Hsv(c) => c.fmt(f),
            Color::Cmy(c) => c.fmt(f),
            Color::Cmyk(c) => c.fmt(f),
            Color::CieLab(c) => c.fmt(f),
            Color::CieLuv(c) => c.fmt(f),
            Color::HclLab(c) => c.fmt(f),
            Color::HclLuv(c) => c.fmt(f),
            Color::Hex(c) => c.fmt(f),
        }
    }
}

macro_rules! impl_from_system {
    ($($variant:ident => $system:ty),* $(,)?) => {
        $(impl From<$system> for Color {
            fn from(value: $system) -> Self {
                Color::$variant(value)
            }
        })*
    };
}

impl_from_system! {
    Rgb => Rgb,
    Hsl => Hsl,
    Hsv => Hsv,
    Cmy => Cmy,
    Cmyk => Cmyk,
    CieLab => CieLab,
    CieLuv => CieLuv,
    HclLab => HclLab,
    HclLuv => HclLuv,
    Hex => Hex,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_channels_are_clamped() {
        let rgba = Rgba::new(-3.0, 260.0, 128.0, 300.0);
        assert_eq!(rgba.rounded(), [0, 255, 128, 255]);
    }

    #[test]
    fn equality_rounds_to_the_nearest_integer() {
        let a = Rgba::new(127.6, 0.2, 0.0, 255.0);
        let b = Rgba::new(128.4, 0.0, 0.4, 254.9);
        assert_eq!(a, b);
        assert_ne!(a, Rgba::new(129.0, 0.0, 0.0, 255.0));
    }

    #[test]
    fn display_uses_rounded_channels() {
        let rgba = Rgba::new(254.7, 0.0, 0.2, 255.0);
        assert_eq!(rgba.to_string(), "rgba(255, 0, 0, 255)");
    }
}

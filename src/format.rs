//! Normalization of arbitrary color-like input into one declared shape.
//!
//! A [`ColorFormat`] binds one color system to a fixed set of formatting
//! parameters. Consumers that accept "any color" from a user hand the input
//! to [`ColorFormat::format`] and always get a value of the bound system
//! back, or a single [`FormatError`] no matter which internal step failed.

use crate::systems::{
    AlphaPosition, CieLab, CieLuv, Cmy, CmyParams, Cmyk, CmykParams, ColorSystem,
};
use crate::{Color, ColorError, Component, FormatError, Rgba};

/// A color-like input: a typed color value, a hex string or a bare sequence
/// of components. Resolved once at the API boundary instead of sniffing
/// shapes deeper down.
#[derive(Clone, Debug)]
pub enum ColorLike {
    /// An already typed color of any system.
    Color(Color),
    /// A hexadecimal string, with or without a `#` prefix.
    String(String),
    /// Bare components in the order the target system declares.
    Components(Vec<Component>),
}

impl From<Color> for ColorLike {
    fn from(value: Color) -> Self {
        ColorLike::Color(value)
    }
}

impl From<&Color> for ColorLike {
    fn from(value: &Color) -> Self {
        ColorLike::Color(value.clone())
    }
}

impl From<&str> for ColorLike {
    fn from(value: &str) -> Self {
        ColorLike::String(value.to_string())
    }
}

impl From<String> for ColorLike {
    fn from(value: String) -> Self {
        ColorLike::String(value)
    }
}

impl From<Vec<Component>> for ColorLike {
    fn from(value: Vec<Component>) -> Self {
        ColorLike::Components(value)
    }
}

impl From<&[Component]> for ColorLike {
    fn from(value: &[Component]) -> Self {
        ColorLike::Components(value.to_vec())
    }
}

impl<const N: usize> From<[Component; N]> for ColorLike {
    fn from(value: [Component; N]) -> Self {
        ColorLike::Components(value.to_vec())
    }
}

macro_rules! impl_color_like_from_system {
    ($($system:ident),* $(,)?) => {
        $(impl From<$crate::systems::$system> for ColorLike {
            fn from(value: $crate::systems::$system) -> Self {
                ColorLike::Color(Color::from(value))
            }
        })*
    };
}

impl_color_like_from_system!(Rgb, Hsl, Hsv, Cmy, Cmyk, CieLab, CieLuv, HclLab, HclLuv, Hex);

/// One color system bound to a fixed set of formatting parameters.
///
/// A format is a plain value: it is deterministic, cheap to copy and carries
/// no shared state. Code that used to rely on an ambient default format
/// instead receives one of these explicitly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ColorFormat {
    /// Produce [`Rgb`](crate::systems::Rgb) values.
    Rgb(crate::systems::RgbParams),
    /// Produce [`Hsl`](crate::systems::Hsl) values.
    Hsl(crate::systems::HslParams),
    /// Produce [`Hsv`](crate::systems::Hsv) values.
    Hsv(crate::systems::HsvParams),
    /// Produce [`Cmy`](crate::systems::Cmy) values.
    Cmy(CmyParams),
    /// Produce [`Cmyk`](crate::systems::Cmyk) values.
    Cmyk(CmykParams),
    /// Produce [`CieLab`](crate::systems::CieLab) values.
    CieLab(crate::systems::LabParams),
    /// Produce [`CieLuv`](crate::systems::CieLuv) values.
    CieLuv(crate::systems::LuvParams),
    /// Produce [`HclLab`](crate::systems::HclLab) values.
    HclLab(crate::systems::HclParams),
    /// Produce [`HclLuv`](crate::systems::HclLuv) values.
    HclLuv(crate::systems::HclParams),
    /// Produce [`Hex`](crate::systems::Hex) values.
    Hex(crate::systems::HexParams),
}

impl ColorFormat {
    /// Lower case `#rrggbbaa` hex strings with a trailing alpha byte, the
    /// shape web stylesheets accept.
    pub fn web() -> Self {
        let mut params = crate::systems::HexParams::new(AlphaPosition::Trailing);
        params.flags |= crate::systems::HexFlags::ALPHA;
        ColorFormat::Hex(params)
    }

    /// Lower case `#rrggbb` hex strings without an alpha byte, the shape
    /// matplotlib-style plotting code accepts.
    pub fn matplotlib_hex() -> Self {
        ColorFormat::Hex(crate::systems::HexParams::new(AlphaPosition::Trailing))
    }

    /// Integer RGB components on a 0 to 255 scale, the shape pygame-style
    /// frameworks accept.
    pub fn rgb255() -> Self {
        ColorFormat::Rgb(crate::systems::RgbParams {
            max_rgb: 255.0,
            max_alpha: 255.0,
            round_to: 0,
            ..Default::default()
        })
    }

    /// RGB components on a 0 to 1 scale with an included alpha component,
    /// the shape kivy-style frameworks accept.
    pub fn rgb_unit() -> Self {
        ColorFormat::Rgb(crate::systems::RgbParams {
            include_alpha: true,
            ..Default::default()
        })
    }

    /// Build a value of the bound system from canonical channels. Never
    /// fails; canonical channels are clamped, not rejected.
    pub fn from_canonical(&self, rgba: Rgba) -> Color {
        match self {
            ColorFormat::Rgb(p) => crate::systems::Rgb::from_canonical(rgba, p).into(),
            ColorFormat::Hsl(p) => crate::systems::Hsl::from_canonical(rgba, p).into(),
            ColorFormat::Hsv(p) => crate::systems::Hsv::from_canonical(rgba, p).into(),
            ColorFormat::Cmy(p) => Cmy::from_canonical(rgba, p).into(),
            ColorFormat::Cmyk(p) => Cmyk::from_canonical(rgba, p).into(),
            ColorFormat::CieLab(p) => CieLab::from_canonical(rgba, p).into(),
            ColorFormat::CieLuv(p) => CieLuv::from_canonical(rgba, p).into(),
            ColorFormat::HclLab(p) => crate::systems::HclLab::from_canonical(rgba, p).into(),
            ColorFormat::HclLuv(p) => crate::systems::HclLuv::from_canonical(rgba, p).into(),
            ColorFormat::Hex(p) => crate::systems::Hex::from_canonical(rgba, p).into(),
        }
    }

    /// Build a value of the bound system from positional components, with an
    /// optional trailing alpha component. Hex formats are not tuple based
    /// and reject bare components.
    pub fn new_color(&self, components: &[Component]) -> Result<Color, ColorError> {
        fn three(
            components: &[Component],
            system: &'static str,
        ) -> Result<(Component, Component, Component, Option<Component>), ColorError> {
            match *components {
                [a, b, c] => Ok((a, b, c, None)),
                [a, b, c, d] => Ok((a, b, c, Some(d))),
                _ => Err(ColorError::Arity {
                    system,
                    expected: "3 or 4",
                    got: components.len(),
                }),
            }
        }

        match self {
            ColorFormat::Rgb(p) => {
                let (r, g, b, a) = three(components, "rgb")?;
                Ok(crate::systems::Rgb::new(r, g, b, a, *p)?.into())
            }
            ColorFormat::Hsl(p) => {
                let (h, s, l, a) = three(components, "hsl")?;
                Ok(crate::systems::Hsl::new(h, s, l, a, *p)?.into())
            }
            ColorFormat::Hsv(p) => {
                let (h, s, v, a) = three(components, "hsv")?;
                Ok(crate::systems::Hsv::new(h, s, v, a, *p)?.into())
            }
            ColorFormat::Cmy(p) => {
                let (c, m, y, a) = three(components, "cmy")?;
                Ok(Cmy::new(c, m, y, a, *p)?.into())
            }
            ColorFormat::Cmyk(p) => match *components {
                [c, m, y, k] => Ok(Cmyk::new(c, m, y, k, None, *p)?.into()),
                [c, m, y, k, a] => Ok(Cmyk::new(c, m, y, k, Some(a), *p)?.into()),
                _ => Err(ColorError::Arity {
                    system: "cmyk",
                    expected: "4 or 5",
                    got: components.len(),
                }),
            },
            ColorFormat::CieLab(p) => {
                let (l, a_, b, a) = three(components, "lab")?;
                Ok(CieLab::new(l, a_, b, a, *p)?.into())
            }
            ColorFormat::CieLuv(p) => {
                let (l, u, v, a) = three(components, "luv")?;
                Ok(CieLuv::new(l, u, v, a, *p)?.into())
            }
            ColorFormat::HclLab(p) => {
                let (l, c, h, a) = three(components, "hclab")?;
                Ok(crate::systems::HclLab::new(l, c, h, a, *p)?.into())
            }
            ColorFormat::HclLuv(p) => {
                let (l, c, h, a) = three(components, "hcluv")?;
                Ok(crate::systems::HclLuv::new(l, c, h, a, *p)?.into())
            }
            ColorFormat::Hex(_) => Err(ColorError::NotTupleBased("hex")),
        }
    }

    /// Normalize any color-like input into a value of the bound system.
    ///
    /// Typed colors always pivot through their canonical channels. Strings
    /// parse with the bound parameters when this is a hex format; other
    /// formats accept 3 and 6 digit strings and pivot, but reject 8 digit
    /// strings because the alpha byte position is ambiguous outside a hex
    /// format's own convention. Bare components spread into the bound
    /// system's constructor and are rejected by hex formats.
    pub fn format(&self, input: impl Into<ColorLike>) -> Result<Color, FormatError> {
        match input.into() {
            ColorLike::Color(color) => Ok(self.from_canonical(color.to_canonical())),
            ColorLike::String(value) => {
                if let ColorFormat::Hex(params) = self {
                    return Ok(crate::systems::Hex::new(&value, *params)
                        .map(Color::Hex)
                        .map_err(FormatError::from)?);
                }

                let digits = value.strip_prefix('#').unwrap_or(&value);
                if digits.len() == 8 {
                    return Err(FormatError::AlphaBearingString);
                }

                // The alpha position is irrelevant for strings without an
                // alpha byte.
                let throwaway = crate::systems::HexParams::new(AlphaPosition::Leading);
                let hex = crate::systems::Hex::new(&value, throwaway)
                    .map_err(FormatError::from)?;
                Ok(self.from_canonical(hex.to_canonical()))
            }
            ColorLike::Components(components) => {
                if matches!(self, ColorFormat::Hex(_)) {
                    return Err(FormatError::TupleForHex);
                }
                Ok(self.new_color(&components)?)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::{HexParams, HslParams, RgbParams};

    #[test]
    fn every_input_shape_reaches_the_same_canonical_channels() {
        let format = ColorFormat::Rgb(RgbParams {
            max_rgb: 255.0,
            ..Default::default()
        });

        let typed = crate::systems::Hsl::new(0.0, 1.0, 0.5, None, HslParams::default()).unwrap();
        let from_typed = format.format(typed).unwrap();
        let from_string = format.format("#ff0000").unwrap();
        let from_tuple = format.format([255.0, 0.0, 0.0]).unwrap();

        assert_eq!(from_typed, from_string);
        assert_eq!(from_string, from_tuple);
        assert_eq!(from_typed.to_canonical().rounded(), [255, 0, 0, 255]);
    }

    #[test]
    fn formatting_is_deterministic() {
        let format = ColorFormat::Hsv(Default::default());
        let first = format.format("#123456").unwrap();
        let second = format.format("#123456").unwrap();
        assert_eq!(first, second);
        assert_eq!(first.to_string(), second.to_string());
    }

    #[test]
    fn hex_formats_parse_strings_with_their_own_parameters() {
        let format = ColorFormat::web();
        let color = format.format("#ff000080").unwrap();
        assert_eq!(color.to_canonical().rounded(), [255, 0, 0, 128]);
        assert_eq!(color.to_string(), "#ff000080");
    }

    #[test]
    fn alpha_bearing_strings_are_rejected_by_non_hex_formats() {
        let format = ColorFormat::rgb255();
        assert_eq!(
            format.format("#ff000080").unwrap_err(),
            FormatError::AlphaBearingString
        );
    }

    #[test]
    fn bare_components_are_rejected_by_hex_formats() {
        let format = ColorFormat::Hex(HexParams::new(AlphaPosition::Trailing));
        assert_eq!(
            format.format([255.0, 0.0, 0.0]).unwrap_err(),
            FormatError::TupleForHex
        );
    }

    #[test]
    fn arity_mismatches_surface_the_component_count() {
        let format = ColorFormat::rgb_unit();
        assert!(matches!(
            format.new_color(&[0.1, 0.2]),
            Err(ColorError::Arity { system: "rgb", got: 2, .. })
        ));

        let format = ColorFormat::Cmyk(CmykParams::default());
        assert!(format.new_color(&[0.1, 0.2, 0.3, 0.4, 0.5]).is_ok());
    }

    #[test]
    fn presets_produce_their_documented_shapes() {
        let color = ColorFormat::rgb255().format("#808080").unwrap();
        assert_eq!(color.to_string(), "rgb(128, 128, 128)");

        let color = ColorFormat::rgb_unit().format("#ff0000").unwrap();
        assert_eq!(color.to_string(), "rgb(1, 0, 0, 1)");

        let color = ColorFormat::matplotlib_hex().format([1.0, 0.0, 0.0]);
        assert!(color.is_err());
    }
}

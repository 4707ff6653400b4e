//! Model a color in the sRGB color space.

use std::fmt;

use crate::math::round_to;
use crate::systems::{check_alpha, check_range, impl_canonical_eq, ColorSystem};
use crate::{xyz, ColorError, Component, Components, Rgba};

/// Formatting parameters for the [`Rgb`] system.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RgbParams {
    /// The maximum of the red, green and blue scales. Common values are
    /// `1` and `255`.
    pub max_rgb: Component,
    /// The maximum of the alpha scale.
    pub max_alpha: Component,
    /// Whether the alpha component shows up in the display form.
    pub include_alpha: bool,
    /// Decimal digits the components are rounded to. `-1` keeps full
    /// precision, `0` rounds to integers.
    pub round_to: i32,
    /// Whether the components are linear light rather than gamma encoded.
    pub linear: bool,
}

impl Default for RgbParams {
    fn default() -> Self {
        Self {
            max_rgb: 1.0,
            max_alpha: 1.0,
            include_alpha: false,
            round_to: -1,
            linear: false,
        }
    }
}

/// A color specified in the sRGB color space.
#[derive(Clone, Copy, Debug)]
pub struct Rgb {
    /// The red component, in `[0, max_rgb]`.
    pub red: Component,
    /// The green component, in `[0, max_rgb]`.
    pub green: Component,
    /// The blue component, in `[0, max_rgb]`.
    pub blue: Component,
    /// The alpha component, in `[0, max_alpha]`.
    pub alpha: Component,
    params: RgbParams,
    canonical: Rgba,
}

impl Rgb {
    /// Create a color from components in the ranges declared by `params`.
    /// `None` for alpha means fully opaque.
    pub fn new(
        red: Component,
        green: Component,
        blue: Component,
        alpha: Option<Component>,
        params: RgbParams,
    ) -> Result<Self, ColorError> {
        check_range("red", red, params.max_rgb)?;
        check_range("green", green, params.max_rgb)?;
        check_range("blue", blue, params.max_rgb)?;
        let alpha = check_alpha(alpha, params.max_alpha)?;

        let unit = Components(red, green, blue).map(|v| v / params.max_rgb);
        let unit = if params.linear {
            xyz::to_gamma_encoded(unit)
        } else {
            unit
        };

        Ok(Self {
            red: round_to(red, params.round_to),
            green: round_to(green, params.round_to),
            blue: round_to(blue, params.round_to),
            alpha: round_to(alpha, params.round_to),
            params,
            canonical: Rgba::from_unit(unit, alpha / params.max_alpha * 255.0),
        })
    }
}

impl ColorSystem for Rgb {
    type Params = RgbParams;

    fn from_canonical(rgba: Rgba, params: &Self::Params) -> Self {
        let unit = rgba.unit_components();
        let unit = if params.linear {
            xyz::to_linear_light(unit)
        } else {
            unit
        };
        let scaled = unit.map(|v| round_to(v * params.max_rgb, params.round_to));

        Self {
            red: scaled.0,
            green: scaled.1,
            blue: scaled.2,
            alpha: round_to(rgba.alpha / 255.0 * params.max_alpha, params.round_to),
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

impl_canonical_eq!(Rgb);

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.params.include_alpha {
            write!(
                f,
                "rgb({}, {}, {}, {})",
                self.red, self.green, self.blue, self.alpha
            )
        } else {
            write!(f, "rgb({}, {}, {})", self.red, self.green, self.blue)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_values_are_accepted() {
        let params = RgbParams {
            max_rgb: 255.0,
            ..Default::default()
        };
        let color = Rgb::new(255.0, 0.0, 128.0, None, params).unwrap();
        assert_eq!(color.to_canonical().rounded(), [255, 0, 128, 255]);
    }

    #[test]
    fn out_of_range_components_are_rejected() {
        let result = Rgb::new(1.2, 0.0, 0.0, None, RgbParams::default());
        assert_eq!(
            result.unwrap_err(),
            ColorError::OutOfRange {
                param: "red",
                value: 1.2,
                max: 1.0
            }
        );
    }

    #[test]
    fn round_trips_through_the_canonical_form() {
        let params = RgbParams {
            max_rgb: 255.0,
            max_alpha: 255.0,
            ..Default::default()
        };
        let color = Rgb::new(12.0, 34.0, 56.0, Some(78.0), params).unwrap();
        let back = Rgb::from_canonical(color.to_canonical(), &params);
        assert_eq!(color, back);
    }

    #[test]
    fn alpha_defaults_to_opaque() {
        let color = Rgb::new(0.5, 0.5, 0.5, None, RgbParams::default()).unwrap();
        assert!(color.to_canonical().is_opaque());
        assert_eq!(color.alpha, 1.0);
    }

    #[test]
    fn linear_components_are_gamma_encoded_for_the_canonical_form() {
        let params = RgbParams {
            linear: true,
            ..Default::default()
        };
        let linear = Rgb::new(0.5, 0.0, 0.0, None, params).unwrap();
        let gamma = Rgb::new(0.7353569830524495, 0.0, 0.0, None, RgbParams::default()).unwrap();
        assert_eq!(linear, gamma);

        // Primaries are fixed points of the transfer function.
        let red = Rgb::new(1.0, 0.0, 0.0, None, params).unwrap();
        assert_eq!(red.to_canonical().rounded(), [255, 0, 0, 255]);
    }

    #[test]
    fn display_respects_rounding_and_alpha_inclusion() {
        let params = RgbParams {
            max_rgb: 255.0,
            max_alpha: 255.0,
            include_alpha: true,
            round_to: 0,
            ..Default::default()
        };
        let color = Rgb::new(254.6, 0.0, 0.4, None, params).unwrap();
        assert_eq!(color.to_string(), "rgb(255, 0, 0, 255)");
    }
}

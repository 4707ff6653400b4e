//! Model a color with hue, saturation and lightness components.

use std::fmt;

use crate::convert::{hsl_to_rgb, rgb_to_hsl};
use crate::math::round_to;
use crate::systems::{check_alpha, check_range, impl_canonical_eq, ColorSystem, HasHue};
use crate::{ColorError, Component, Components, Rgba};

/// Formatting parameters for the [`Hsl`] system.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HslParams {
    /// The maximum of the hue scale. Common values are `360` and `1`.
    pub max_hue: Component,
    /// The maximum shared by the saturation, lightness and alpha scales.
    pub max_sla: Component,
    /// Whether the alpha component shows up in the display form.
    pub include_alpha: bool,
    /// Decimal digits the components are rounded to. `-1` keeps full
    /// precision, `0` rounds to integers.
    pub round_to: i32,
}

impl Default for HslParams {
    fn default() -> Self {
        Self {
            max_hue: 360.0,
            max_sla: 1.0,
            include_alpha: false,
            round_to: -1,
        }
    }
}

/// A color specified with hue, saturation and lightness.
#[derive(Clone, Copy, Debug)]
pub struct Hsl {
    /// The hue component, in `[0, max_hue)`.
    pub hue: Component,
    /// The saturation component, in `[0, max_sla]`.
    pub saturation: Component,
    /// The lightness component, in `[0, max_sla]`.
    pub lightness: Component,
    /// The alpha component, in `[0, max_sla]`.
    pub alpha: Component,
    params: HslParams,
    canonical: Rgba,
}

impl Hsl {
    /// Create a color from components in the ranges declared by `params`.
    /// The hue is circular and taken modulo `max_hue`; `None` for alpha
    /// means fully opaque.
    pub fn new(
        hue: Component,
        saturation: Component,
        lightness: Component,
        alpha: Option<Component>,
        params: HslParams,
    ) -> Result<Self, ColorError> {
        check_range("saturation", saturation, params.max_sla)?;
        check_range("lightness", lightness, params.max_sla)?;
        let alpha = check_alpha(alpha, params.max_sla)?;

        let hue = hue.rem_euclid(params.max_hue);
        let rgb = hsl_to_rgb(Components(
            hue / params.max_hue * 360.0,
            saturation / params.max_sla,
            lightness / params.max_sla,
        ));

        Ok(Self {
            hue: round_to(hue, params.round_to),
            saturation: round_to(saturation, params.round_to),
            lightness: round_to(lightness, params.round_to),
            alpha: round_to(alpha, params.round_to),
            params,
            canonical: Rgba::from_unit(rgb, alpha / params.max_sla * 255.0),
        })
    }
}

impl ColorSystem for Hsl {
    type Params = HslParams;

    fn from_canonical(rgba: Rgba, params: &Self::Params) -> Self {
        let Components(hue, saturation, lightness) = rgb_to_hsl(rgba.unit_components());

        Self {
            hue: round_to(hue / 360.0 * params.max_hue, params.round_to),
            saturation: round_to(saturation * params.max_sla, params.round_to),
            lightness: round_to(lightness * params.max_sla, params.round_to),
            alpha: round_to(rgba.alpha / 255.0 * params.max_sla, params.round_to),
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

impl HasHue for Hsl {
    fn hue(&self) -> Component {
        self.hue
    }

    fn max_hue(&self) -> Component {
        self.params.max_hue
    }
}

impl_canonical_eq!(Hsl);

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.params.include_alpha {
            write!(
                f,
                "hsl({}, {}, {}, {})",
                self.hue, self.saturation, self.lightness, self.alpha
            )
        } else {
            write!(
                f,
                "hsl({}, {}, {})",
                self.hue, self.saturation, self.lightness
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hue_is_circular() {
        let params = HslParams::default();
        let a = Hsl::new(480.0, 1.0, 0.5, None, params).unwrap();
        let b = Hsl::new(120.0, 1.0, 0.5, None, params).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.hue, 120.0);
    }

    #[test]
    fn saturation_outside_the_scale_is_rejected() {
        let result = Hsl::new(0.0, 1.5, 0.5, None, HslParams::default());
        assert!(matches!(
            result,
            Err(ColorError::OutOfRange { param: "saturation", .. })
        ));
    }

    #[test]
    fn round_trips_through_the_canonical_form() {
        let params = HslParams {
            max_hue: 360.0,
            max_sla: 100.0,
            ..Default::default()
        };
        let color = Hsl::new(200.0, 40.0, 60.0, Some(50.0), params).unwrap();
        let back = Hsl::from_canonical(color.to_canonical(), &params);
        assert_eq!(color, back);
        assert!((back.hue - 200.0).abs() < 0.01);
    }

    #[test]
    fn scaled_hue_wraps_into_its_own_range() {
        let params = HslParams {
            max_hue: 1.0,
            ..Default::default()
        };
        let color = Hsl::new(1.25, 1.0, 0.5, None, params).unwrap();
        assert_eq!(color.hue, 0.25);
    }
}

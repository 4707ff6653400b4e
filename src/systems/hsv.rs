//! Model a color with hue, saturation and value components.

use std::fmt;

use crate::convert::{hsv_to_rgb, rgb_to_hsv};
use crate::math::round_to;
use crate::systems::{check_alpha, check_range, impl_canonical_eq, ColorSystem, HasHue};
use crate::{ColorError, Component, Components, Rgba};

/// Formatting parameters for the [`Hsv`] system.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HsvParams {
    /// The maximum of the hue scale. Common values are `360` and `1`.
    pub max_hue: Component,
    /// The maximum shared by the saturation, value and alpha scales.
    pub max_sva: Component,
    /// Whether the alpha component shows up in the display form.
    pub include_alpha: bool,
    /// Decimal digits the components are rounded to. `-1` keeps full
    /// precision, `0` rounds to integers.
    pub round_to: i32,
}

impl Default for HsvParams {
    fn default() -> Self {
        Self {
            max_hue: 360.0,
            max_sva: 1.0,
            include_alpha: false,
            round_to: -1,
        }
    }
}

/// A color specified with hue, saturation and value.
#[derive(Clone, Copy, Debug)]
pub struct Hsv {
    /// The hue component, in `[0, max_hue)`.
    pub hue: Component,
    /// The saturation component, in `[0, max_sva]`.
    pub saturation: Component,
    /// The value component, in `[0, max_sva]`.
    pub value: Component,
    /// The alpha component, in `[0, max_sva]`.
    pub alpha: Component,
    params: HsvParams,
    canonical: Rgba,
}

impl Hsv {
    /// Create a color from components in the ranges declared by `params`.
    /// The hue is circular and taken modulo `max_hue`; `None` for alpha
    /// means fully opaque.
    pub fn new(
        hue: Component,
        saturation: Component,
        value: Component,
        alpha: Option<Component>,
        params: HsvParams,
    ) -> Result<Self, ColorError> {
        check_range("saturation", saturation, params.max_sva)?;
        check_range("value", value, params.max_sva)?;
        let alpha = check_alpha(alpha, params.max_sva)?;

        let hue = hue.rem_euclid(params.max_hue);
        let rgb = hsv_to_rgb(Components(
            hue / params.max_hue * 360.0,
            saturation / params.max_sva,
            value / params.max_sva,
        ));

        Ok(Self {
            hue: round_to(hue, params.round_to),
            saturation: round_to(saturation, params.round_to),
            value: round_to(value, params.round_to),
            alpha: round_to(alpha, params.round_to),
            params,
            canonical: Rgba::from_unit(rgb, alpha / params.max_sva * 255.0),
        })
    }
}

impl ColorSystem for Hsv {
    type Params = HsvParams;

    fn from_canonical(rgba: Rgba, params: &Self::Params) -> Self {
        let Components(hue, saturation, value) = rgb_to_hsv(rgba.unit_components());

        Self {
            hue: round_to(hue / 360.0 * params.max_hue, params.round_to),
            saturation: round_to(saturation * params.max_sva, params.round_to),
            value: round_to(value * params.max_sva, params.round_to),
            alpha: round_to(rgba.alpha / 255.0 * params.max_sva, params.round_to),
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

impl HasHue for Hsv {
    fn hue(&self) -> Component {
        self.hue
    }

    fn max_hue(&self) -> Component {
        self.params.max_hue
    }
}

impl_canonical_eq!(Hsv);

impl fmt::Display for Hsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.params.include_alpha {
            write!(
                f,
                "hsv({}, {}, {}, {})",
                self.hue, self.saturation, self.value, self.alpha
            )
        } else {
            write!(f, "hsv({}, {}, {})", self.hue, self.saturation, self.value)
        }
    }
}

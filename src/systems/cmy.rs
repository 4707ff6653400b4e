//! Model a color in the subtractive CMY color space.

use std::fmt;

use crate::convert::rgb_to_cmy;
use crate::math::round_to;
use crate::systems::{check_alpha, check_range, impl_canonical_eq, ColorSystem};
use crate::{ColorError, Component, Components, Rgba};

/// Formatting parameters for the [`Cmy`] system.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CmyParams {
    /// The maximum shared by the cyan, magenta, yellow and alpha scales.
    pub max_cmya: Component,
    /// Whether the alpha component shows up in the display form.
    pub include_alpha: bool,
    /// Decimal digits the components are rounded to. `-1` keeps full
    /// precision, `0` rounds to integers.
    pub round_to: i32,
}

impl Default for CmyParams {
    fn default() -> Self {
        Self {
            max_cmya: 1.0,
            include_alpha: false,
            round_to: -1,
        }
    }
}

/// A color specified in the subtractive CMY color space.
#[derive(Clone, Copy, Debug)]
pub struct Cmy {
    /// The cyan component, in `[0, max_cmya]`.
    pub cyan: Component,
    /// The magenta component, in `[0, max_cmya]`.
    pub magenta: Component,
    /// The yellow component, in `[0, max_cmya]`.
    pub yellow: Component,
    /// The alpha component, in `[0, max_cmya]`.
    pub alpha: Component,
    params: CmyParams,
    canonical: Rgba,
}

impl Cmy {
    /// Create a color from components in the ranges declared by `params`.
    /// `None` for alpha means fully opaque.
    pub fn new(
        cyan: Component,
        magenta: Component,
        yellow: Component,
        alpha: Option<Component>,
        params: CmyParams,
    ) -> Result<Self, ColorError> {
        check_range("cyan", cyan, params.max_cmya)?;
        check_range("magenta", magenta, params.max_cmya)?;
        check_range("yellow", yellow, params.max_cmya)?;
        let alpha = check_alpha(alpha, params.max_cmya)?;

        // The transform is its own inverse.
        let rgb = rgb_to_cmy(Components(cyan, magenta, yellow).map(|v| v / params.max_cmya));

        Ok(Self {
            cyan: round_to(cyan, params.round_to),
            magenta: round_to(magenta, params.round_to),
            yellow: round_to(yellow, params.round_to),
            alpha: round_to(alpha, params.round_to),
            params,
            canonical: Rgba::from_unit(rgb, alpha / params.max_cmya * 255.0),
        })
    }
}

impl ColorSystem for Cmy {
    type Params = CmyParams;

    fn from_canonical(rgba: Rgba, params: &Self::Params) -> Self {
        let cmy = rgb_to_cmy(rgba.unit_components())
            .map(|v| round_to(v * params.max_cmya, params.round_to));

        Self {
            cyan: cmy.0,
            magenta: cmy.1,
            yellow: cmy.2,
            alpha: round_to(rgba.alpha / 255.0 * params.max_cmya, params.round_to),
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

impl_canonical_eq!(Cmy);

impl fmt::Display for Cmy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.params.include_alpha {
            write!(
                f,
                "cmy({}, {}, {}, {})",
                self.cyan, self.magenta, self.yellow, self.alpha
            )
        } else {
            write!(f, "cmy({}, {}, {})", self.cyan, self.magenta, self.yellow)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cyan_is_the_inverse_of_red() {
        let color = Cmy::new(1.0, 0.0, 0.0, None, CmyParams::default()).unwrap();
        assert_eq!(color.to_canonical().rounded(), [0, 255, 255, 255]);
    }

    #[test]
    fn round_trips_through_the_canonical_form() {
        let params = CmyParams {
            max_cmya: 100.0,
            ..Default::default()
        };
        let color = Cmy::new(25.0, 50.0, 75.0, Some(80.0), params).unwrap();
        let back = Cmy::from_canonical(color.to_canonical(), &params);
        assert_eq!(color, back);
    }

    #[test]
    fn components_outside_the_scale_are_rejected() {
        let result = Cmy::new(0.0, 1.01, 0.0, None, CmyParams::default());
        assert!(matches!(
            result,
            Err(ColorError::OutOfRange { param: "magenta", .. })
        ));
    }
}

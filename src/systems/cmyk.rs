//! Model a color in the subtractive CMYK color space.

use std::fmt;

use crate::convert::{cmy_to_cmyk, cmyk_to_cmy, rgb_to_cmy};
use crate::math::round_to;
use crate::systems::{check_alpha, check_range, impl_canonical_eq, ColorSystem};
use crate::{ColorError, Component, Components, Rgba};

/// Formatting parameters for the [`Cmyk`] system.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CmykParams {
    /// The maximum shared by the cyan, magenta, yellow, black and alpha
    /// scales.
    pub max_cmyka: Component,
    /// Whether the alpha component shows up in the display form.
    pub include_alpha: bool,
    /// Decimal digits the components are rounded to. `-1` keeps full
    /// precision, `0` rounds to integers.
    pub round_to: i32,
}

impl Default for CmykParams {
    fn default() -> Self {
        Self {
            max_cmyka: 1.0,
            include_alpha: false,
            round_to: -1,
        }
    }
}

/// A color specified in the subtractive CMYK color space.
///
/// The black component is always `min(C, M, Y)` of the plain CMY form; pure
/// black maps to zero chroma with the black component at its maximum.
#[derive(Clone, Copy, Debug)]
pub struct Cmyk {
    /// The cyan component, in `[0, max_cmyka]`.
    pub cyan: Component,
    /// The magenta component, in `[0, max_cmyka]`.
    pub magenta: Component,
    /// The yellow component, in `[0, max_cmyka]`.
    pub yellow: Component,
    /// The black component, in `[0, max_cmyka]`.
    pub black: Component,
    /// The alpha component, in `[0, max_cmyka]`.
    pub alpha: Component,
    params: CmykParams,
    canonical: Rgba,
}

impl Cmyk {
    /// Create a color from components in the ranges declared by `params`.
    /// `None` for alpha means fully opaque.
    pub fn new(
        cyan: Component,
        magenta: Component,
        yellow: Component,
        black: Component,
        alpha: Option<Component>,
        params: CmykParams,
    ) -> Result<Self, ColorError> {
        check_range("cyan", cyan, params.max_cmyka)?;
        check_range("magenta", magenta, params.max_cmyka)?;
        check_range("yellow", yellow, params.max_cmyka)?;
        check_range("black", black, params.max_cmyka)?;
        let alpha = check_alpha(alpha, params.max_cmyka)?;

        let cmy = cmyk_to_cmy(
            Components(cyan, magenta, yellow).map(|v| v / params.max_cmyka),
            black / params.max_cmyka,
        );
        let rgb = rgb_to_cmy(cmy);

        Ok(Self {
            cyan: round_to(cyan, params.round_to),
            magenta: round_to(magenta, params.round_to),
            yellow: round_to(yellow, params.round_to),
            black: round_to(black, params.round_to),
            alpha: round_to(alpha, params.round_to),
            params,
            canonical: Rgba::from_unit(rgb, alpha / params.max_cmyka * 255.0),
        })
    }
}

impl ColorSystem for Cmyk {
    type Params = CmykParams;

    fn from_canonical(rgba: Rgba, params: &Self::Params) -> Self {
        let (cmy, black) = cmy_to_cmyk(rgb_to_cmy(rgba.unit_components()));
        let cmy = cmy.map(|v| round_to(v * params.max_cmyka, params.round_to));

        Self {
            cyan: cmy.0,
            magenta: cmy.1,
            yellow: cmy.2,
            black: round_to(black * params.max_cmyka, params.round_to),
            alpha: round_to(rgba.alpha / 255.0 * params.max_cmyka, params.round_to),
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

impl_canonical_eq!(Cmyk);

impl fmt::Display for Cmyk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.params.include_alpha {
            write!(
                f,
                "cmyk({}, {}, {}, {}, {})",
                self.cyan, self.magenta, self.yellow, self.black, self.alpha
            )
        } else {
            write!(
                f,
                "cmyk({}, {}, {}, {})",
                self.cyan, self.magenta, self.yellow, self.black
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn black_is_split_out_of_the_chromatic_components() {
        let color = Cmyk::from_canonical(Rgba::new(191.25, 95.625, 47.8125, 255.0), &CmykParams::default());
        assert!((color.cyan - 0.0).abs() < 1.0e-4);
        assert!((color.magenta - 0.5).abs() < 1.0e-4);
        assert!((color.yellow - 0.75).abs() < 1.0e-4);
        assert!((color.black - 0.25).abs() < 1.0e-4);
    }

    #[test]
    fn pure_black_maps_to_maximum_black() {
        let color = Cmyk::from_canonical(Rgba::new(0.0, 0.0, 0.0, 255.0), &CmykParams::default());
        assert_eq!(color.cyan, 0.0);
        assert_eq!(color.magenta, 0.0);
        assert_eq!(color.yellow, 0.0);
        assert_eq!(color.black, 1.0);

        let back = Cmyk::new(0.0, 0.0, 0.0, 1.0, None, CmykParams::default()).unwrap();
        assert_eq!(back.to_canonical().rounded(), [0, 0, 0, 255]);
    }

    #[test]
    fn round_trips_through_the_canonical_form() {
        let params = CmykParams {
            max_cmyka: 100.0,
            ..Default::default()
        };
        let color = Cmyk::new(10.0, 20.0, 30.0, 40.0, Some(100.0), params).unwrap();
        let back = Cmyk::from_canonical(color.to_canonical(), &params);
        assert_eq!(color, back);
    }

    #[test]
    fn black_outside_the_scale_is_rejected() {
        let result = Cmyk::new(0.0, 0.0, 0.0, 1.1, None, CmykParams::default());
        assert!(matches!(
            result,
            Err(ColorError::OutOfRange { param: "black", .. })
        ));
    }
}

//! Model a color in the CIELuv color space and its cylindrical form.

use std::fmt;

use crate::math::round_to;
use crate::systems::{
    check_alpha, check_range, impl_canonical_eq, ColorSystem, HasHue, HclParams,
};
use crate::{xyz, ColorError, Component, Components, Rgba};

/// Formatting parameters for the [`CieLuv`] system.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LuvParams {
    /// The maximum of the alpha scale.
    pub max_alpha: Component,
    /// Whether the alpha component shows up in the display form.
    pub include_alpha: bool,
    /// Decimal digits the components are rounded to. `-1` keeps full
    /// precision, `0` rounds to integers.
    pub round_to: i32,
}

impl Default for LuvParams {
    fn default() -> Self {
        Self {
            max_alpha: 1.0,
            include_alpha: false,
            round_to: -1,
        }
    }
}

/// A color specified in the CIELuv color space.
///
/// Conversion passes through CIE-XYZ with the D65 reference white; colors
/// outside the sRGB gamut clamp to the nearest canonical channels.
#[derive(Clone, Copy, Debug)]
pub struct CieLuv {
    /// The lightness component, in `[0, 100]`.
    pub lightness: Component,
    /// The u axis component, unbounded.
    pub u: Component,
    /// The v axis component, unbounded.
    pub v: Component,
    /// The alpha component, in `[0, max_alpha]`.
    pub alpha: Component,
    params: LuvParams,
    canonical: Rgba,
}

impl CieLuv {
    /// Create a color from lightness, u and v components. `None` for alpha
    /// means fully opaque.
    pub fn new(
        lightness: Component,
        u: Component,
        v: Component,
        alpha: Option<Component>,
        params: LuvParams,
    ) -> Result<Self, ColorError> {
        check_range("lightness", lightness, 100.0)?;
        let alpha = check_alpha(alpha, params.max_alpha)?;

        let rgb = xyz::luv_to_srgb(Components(lightness, u, v));

        Ok(Self {
            lightness: round_to(lightness, params.round_to),
            u: round_to(u, params.round_to),
            v: round_to(v, params.round_to),
            alpha: round_to(alpha, params.round_to),
            params,
            canonical: Rgba::from_unit(rgb, alpha / params.max_alpha * 255.0),
        })
    }
}

impl ColorSystem for CieLuv {
    type Params = LuvParams;

    fn from_canonical(rgba: Rgba, params: &Self::Params) -> Self {
        let Components(lightness, u, v) = xyz::srgb_to_luv(rgba.unit_components());

        Self {
            lightness: round_to(lightness, params.round_to),
            u: round_to(u, params.round_to),
            v: round_to(v, params.round_to),
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

impl_canonical_eq!(CieLuv);

impl fmt::Display for CieLuv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.params.include_alpha {
            write!(
                f,
                "luv({}, {}, {}, {})",
                self.lightness, self.u, self.v, self.alpha
            )
        } else {
            write!(f, "luv({}, {}, {})", self.lightness, self.u, self.v)
        }
    }
}

/// A color specified in the cylindrical form of CIELuv, with lightness,
/// chroma and hue components.
#[derive(Clone, Copy, Debug)]
pub struct HclLuv {
    /// The lightness component, in `[0, 100]`.
    pub lightness: Component,
    /// The chroma component, non-negative and unbounded.
    pub chroma: Component,
    /// The hue component, in `[0, max_hue)`.
    pub hue: Component,
    /// The alpha component, in `[0, max_alpha]`.
    pub alpha: Component,
    params: HclParams,
    canonical: Rgba,
}

impl HclLuv {
    /// Create a color from lightness, chroma and hue components. The hue is
    /// circular and taken modulo `max_hue`; `None` for alpha means fully
    /// opaque.
    pub fn new(
        lightness: Component,
        chroma: Component,
        hue: Component,
        alpha: Option<Component>,
        params: HclParams,
    ) -> Result<Self, ColorError> {
        check_range("lightness", lightness, 100.0)?;
        check_range("chroma", chroma, Component::INFINITY)?;
        let alpha = check_alpha(alpha, params.max_alpha)?;

        let hue = hue.rem_euclid(params.max_hue);
        let rect = xyz::polar_to_rectangular(Components(
            lightness,
            chroma,
            hue / params.max_hue * 360.0,
        ));
        let rgb = xyz::luv_to_srgb(rect);

        Ok(Self {
            lightness: round_to(lightness, params.round_to),
            chroma: round_to(chroma, params.round_to),
            hue: round_to(hue, params.round_to),
            alpha: round_to(alpha, params.round_to),
            params,
            canonical: Rgba::from_unit(rgb, alpha / params.max_alpha * 255.0),
        })
    }
}

impl ColorSystem for HclLuv {
    type Params = HclParams;

    fn from_canonical(rgba: Rgba, params: &Self::Params) -> Self {
        let polar = xyz::rectangular_to_polar(xyz::srgb_to_luv(rgba.unit_components()));

        Self {
            lightness: round_to(polar.0, params.round_to),
            chroma: round_to(polar.1, params.round_to),
            hue: round_to(polar.2 / 360.0 * params.max_hue, params.round_to),
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

impl HasHue for HclLuv {
    fn hue(&self) -> Component {
        self.hue
    }

    fn max_hue(&self) -> Component {
        self.params.max_hue
    }
}

impl_canonical_eq!(HclLuv);

impl fmt::Display for HclLuv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.params.include_alpha {
            write!(
                f,
                "hcluv({}, {}, {}, {})",
                self.lightness, self.chroma, self.hue, self.alpha
            )
        } else {
            write!(
                f,
                "hcluv({}, {}, {})",
                self.lightness, self.chroma, self.hue
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gray_has_no_chroma() {
        let color = HclLuv::from_canonical(Rgba::new(128.0, 128.0, 128.0, 255.0), &HclParams::default());
        assert!(color.chroma.abs() < 0.01);
    }

    #[test]
    fn lightness_above_the_scale_is_rejected() {
        let result = CieLuv::new(101.0, 0.0, 0.0, None, LuvParams::default());
        assert!(matches!(
            result,
            Err(ColorError::OutOfRange { param: "lightness", .. })
        ));
    }

    #[test]
    fn a_luv_value_reaches_the_expected_canonical_channels() {
        // Roughly sRGB red.
        let color = CieLuv::new(53.24, 175.05, 37.75, None, LuvParams::default()).unwrap();
        let [red, green, blue, _] = color.to_canonical().rounded();
        assert_eq!(red, 255);
        assert!(green < 3);
        assert!(blue < 3);
    }

    #[test]
    fn negative_chroma_is_rejected() {
        let result = HclLuv::new(50.0, -1.0, 0.0, None, HclParams::default());
        assert!(matches!(
            result,
            Err(ColorError::OutOfRange { param: "chroma", .. })
        ));
    }
}

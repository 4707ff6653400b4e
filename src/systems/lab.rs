//! Model a color in the CIELab color space and its cylindrical form.

use std::fmt;

use crate::math::round_to;
use crate::systems::{
    check_alpha, check_range, impl_canonical_eq, ColorSystem, HasHue, HclParams,
};
use crate::{xyz, ColorError, Component, Components, Rgba};

/// Formatting parameters for the [`CieLab`] system.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabParams {
    /// The maximum of the alpha scale.
    pub max_alpha: Component,
    /// Whether the alpha component shows up in the display form.
    pub include_alpha: bool,
    /// Decimal digits the components are rounded to. `-1` keeps full
    /// precision, `0` rounds to integers.
    pub round_to: i32,
}

impl Default for LabParams {
    fn default() -> Self {
        Self {
            max_alpha: 1.0,
            include_alpha: false,
            round_to: -1,
        }
    }
}

/// A color specified in the CIELab color space.
///
/// Conversion passes through CIE-XYZ with the D65 reference white; colors
/// outside the sRGB gamut clamp to the nearest canonical channels.
#[derive(Clone, Copy, Debug)]
pub struct CieLab {
    /// The lightness component, in `[0, 100]`.
    pub lightness: Component,
    /// The a axis component, unbounded.
    pub a: Component,
    /// The b axis component, unbounded.
    pub b: Component,
    /// The alpha component, in `[0, max_alpha]`.
    pub alpha: Component,
    params: LabParams,
    canonical: Rgba,
}

impl CieLab {
    /// Create a color from lightness, a and b components. `None` for alpha
    /// means fully opaque.
    pub fn new(
        lightness: Component,
        a: Component,
        b: Component,
        alpha: Option<Component>,
        params: LabParams,
    ) -> Result<Self, ColorError> {
        check_range("lightness", lightness, 100.0)?;
        let alpha = check_alpha(alpha, params.max_alpha)?;

        let rgb = xyz::lab_to_srgb(Components(lightness, a, b));

        Ok(Self {
            lightness: round_to(lightness, params.round_to),
            a: round_to(a, params.round_to),
            b: round_to(b, params.round_to),
            alpha: round_to(alpha, params.round_to),
            params,
            canonical: Rgba::from_unit(rgb, alpha / params.max_alpha * 255.0),
        })
    }
}

impl ColorSystem for CieLab {
    type Params = LabParams;

    fn from_canonical(rgba: Rgba, params: &Self::Params) -> Self {
        let Components(lightness, a, b) = xyz::srgb_to_lab(rgba.unit_components());

        Self {
            lightness: round_to(lightness, params.round_to),
            a: round_to(a, params.round_to),
            b: round_to(b, params.round_to),
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

impl_canonical_eq!(CieLab);

impl fmt::Display for CieLab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.params.include_alpha {
            write!(
                f,
                "lab({}, {}, {}, {})",
                self.lightness, self.a, self.b, self.alpha
            )
        } else {
            write!(f, "lab({}, {}, {})", self.lightness, self.a, self.b)
        }
    }
}

/// A color specified in the cylindrical form of CIELab, with lightness,
/// chroma and hue components.
#[derive(Clone, Copy, Debug)]
pub struct HclLab {
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

impl HclLab {
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
        let rgb = xyz::lab_to_srgb(rect);

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

impl ColorSystem for HclLab {
    type Params = HclParams;

    fn from_canonical(rgba: Rgba, params: &Self::Params) -> Self {
        let polar = xyz::rectangular_to_polar(xyz::srgb_to_lab(rgba.unit_components()));

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

impl HasHue for HclLab {
    fn hue(&self) -> Component {
        self.hue
    }

    fn max_hue(&self) -> Component {
        self.params.max_hue
    }
}

impl_canonical_eq!(HclLab);

impl fmt::Display for HclLab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.params.include_alpha {
            write!(
                f,
                "hclab({}, {}, {}, {})",
                self.lightness, self.chroma, self.hue, self.alpha
            )
        } else {
            write!(
                f,
                "hclab({}, {}, {})",
                self.lightness, self.chroma, self.hue
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn white_has_full_lightness() {
        let color = CieLab::from_canonical(Rgba::new(255.0, 255.0, 255.0, 255.0), &LabParams::default());
        assert!((color.lightness - 100.0).abs() < 0.01);
        assert!(color.a.abs() < 0.01);
        assert!(color.b.abs() < 0.01);
    }

    #[test]
    fn round_trips_through_the_canonical_form() {
        let params = LabParams::default();
        let color = CieLab::new(54.0, 80.0, 67.0, None, params).unwrap();
        let back = CieLab::from_canonical(color.to_canonical(), &params);
        assert_eq!(color, back);
    }

    #[test]
    fn out_of_gamut_colors_clamp_instead_of_failing() {
        // Maximum lightness with strong chroma falls outside of sRGB.
        let color = CieLab::new(100.0, 100.0, -100.0, None, LabParams::default()).unwrap();
        let [_, _, blue, _] = color.to_canonical().rounded();
        assert_eq!(blue, 255);
    }

    #[test]
    fn lightness_above_the_scale_is_rejected() {
        let result = CieLab::new(100.5, 0.0, 0.0, None, LabParams::default());
        assert!(matches!(
            result,
            Err(ColorError::OutOfRange { param: "lightness", .. })
        ));
    }

    #[test]
    fn polar_form_round_trips_through_the_canonical_form() {
        let params = HclParams::default();
        let color = HclLab::new(54.0, 100.0, 40.0, None, params).unwrap();
        let back = HclLab::from_canonical(color.to_canonical(), &params);
        assert_eq!(color, back);
    }
}

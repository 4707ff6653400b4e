//! Linear multi-stop interpolation between colors in a chosen blend space.

use crate::convert::{hsl_to_rgb, hsv_to_rgb};
use crate::math::lerp;
use crate::systems::{
    ColorSystem, HasHue, HclLab, HclLuv, HclParams, Hsl, HslParams, Hsv, HsvParams,
};
use crate::{xyz, Color, ColorFormat, ColorLike, Component, Components, GradientError, Rgba};

/// The space color stops are interpolated in.
///
/// Interpolating in CIELuv tends to give the most uniform ramps and is the
/// default; the RGB spaces are cheaper and match what most frameworks do.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BlendSpace {
    /// Gamma encoded sRGB channels.
    Rgb,
    /// Linear light sRGB channels.
    LinearRgb,
    /// Hue, saturation and lightness.
    Hsl,
    /// Hue, saturation and value.
    Hsv,
    /// CIELab lightness, a and b.
    CieLab,
    /// CIELuv lightness, u and v.
    #[default]
    CieLuv,
    /// The cylindrical form of CIELab.
    HclLab,
    /// The cylindrical form of CIELuv.
    HclLuv,
}

/// Which arc around the hue circle polar blend spaces interpolate along.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HuePath {
    /// Take the shorter arc between the two hues.
    #[default]
    Shortest,
    /// Take the longer arc between the two hues.
    Longest,
}

/// Interpolate the hue between two polar colors in degrees, following the
/// given path around the hue circle.
fn lerp_hue<S: HasHue>(from: &S, to: &S, t: Component, path: HuePath) -> Component {
    let a = from.hue() / from.max_hue() * 360.0;
    let b = to.hue() / to.max_hue() * 360.0;

    let mut delta = (b - a).rem_euclid(360.0);
    if delta > 180.0 {
        delta -= 360.0;
    }
    if path == HuePath::Longest && delta != 0.0 {
        delta += if delta > 0.0 { -360.0 } else { 360.0 };
    }

    (a + delta * t).rem_euclid(360.0)
}

/// A linear gradient through two or more color stops.
///
/// Stops sit at positions within a configurable domain; sampling outside the
/// domain clamps to the nearest end. Interpolation happens on the canonical
/// channels projected into the configured [`BlendSpace`], and sampled colors
/// come out through whatever [`ColorFormat`] the caller hands to
/// [`at`](Gradient::at) or [`colors`](Gradient::colors).
#[derive(Clone, Debug)]
pub struct Gradient {
    stops: Vec<Rgba>,
    // Stop positions normalized into [0, 1] regardless of the domain.
    positions: Vec<Component>,
    domain: (Component, Component),
    blend_space: BlendSpace,
    hue_path: HuePath,
}

impl Gradient {
    /// Create a gradient with evenly spaced stops over the domain `[0, 1]`,
    /// blending in CIELuv. Stops are normalized through `format`.
    pub fn new<I, T>(colors: I, format: &ColorFormat) -> Result<Self, GradientError>
    where
        I: IntoIterator<Item = T>,
        T: Into<ColorLike>,
    {
        let stops = colors
            .into_iter()
            .map(|c| format.format(c).map(|c| c.to_canonical()))
            .collect::<Result<Vec<_>, _>>()?;

        if stops.len() < 2 {
            return Err(GradientError::TooFewStops(stops.len()));
        }

        let count = stops.len();
        let positions = (0..count)
            .map(|i| i as Component / (count - 1) as Component)
            .collect();

        Ok(Self {
            stops,
            positions,
            domain: (0.0, 1.0),
            blend_space: BlendSpace::default(),
            hue_path: HuePath::default(),
        })
    }

    /// Replace the domain the gradient is sampled over. Stop positions keep
    /// their relative placement.
    pub fn with_domain(mut self, min: Component, max: Component) -> Result<Self, GradientError> {
        if !(min < max) {
            return Err(GradientError::BadDomain { min, max });
        }
        self.domain = (min, max);
        Ok(self)
    }

    /// Place each stop at an explicit position within the current domain.
    /// Positions must be sorted, lie within the domain and match the number
    /// of stops.
    pub fn with_positions(mut self, positions: &[Component]) -> Result<Self, GradientError> {
        let (min, max) = self.domain;
        let valid = positions.len() == self.stops.len()
            && positions.windows(2).all(|w| w[0] <= w[1])
            && positions.iter().all(|p| (min..=max).contains(p));
        if !valid {
            return Err(GradientError::BadPositions);
        }

        self.positions = positions.iter().map(|p| (p - min) / (max - min)).collect();
        Ok(self)
    }

    /// Replace the blend space.
    pub fn with_blend_space(mut self, blend_space: BlendSpace) -> Self {
        self.blend_space = blend_space;
        self
    }

    /// Replace the hue path used by polar blend spaces.
    pub fn with_hue_path(mut self, hue_path: HuePath) -> Self {
        self.hue_path = hue_path;
        self
    }

    /// Sample the gradient at `x`, clamping outside the domain, and express
    /// the result through `format`.
    pub fn at(&self, x: Component, format: &ColorFormat) -> Color {
        let (min, max) = self.domain;
        let t = ((x - min) / (max - min)).clamp(0.0, 1.0);

        format.from_canonical(self.sample(t))
    }

    /// Sample `count` evenly spaced colors across the whole domain,
    /// endpoints included, expressed through `format`.
    pub fn colors(&self, count: usize, format: &ColorFormat) -> Vec<Color> {
        match count {
            0 => Vec::new(),
            1 => vec![format.from_canonical(self.sample(0.5))],
            _ => (0..count)
                .map(|i| {
                    let t = i as Component / (count - 1) as Component;
                    format.from_canonical(self.sample(t))
                })
                .collect(),
        }
    }

    /// Sample at a normalized position in `[0, 1]`.
    fn sample(&self, t: Component) -> Rgba {
        let positions = &self.positions;

        if t <= positions[0] {
            return self.stops[0];
        }
        if t >= positions[positions.len() - 1] {
            return self.stops[self.stops.len() - 1];
        }

        let index = positions.partition_point(|p| *p <= t) - 1;
        let span = positions[index + 1] - positions[index];
        let local = if span > 0.0 {
            (t - positions[index]) / span
        } else {
            0.0
        };

        self.blend(self.stops[index], self.stops[index + 1], local)
    }

    fn blend(&self, from: Rgba, to: Rgba, t: Component) -> Rgba {
        let alpha = lerp(from.alpha, to.alpha, t);

        let lerp3 = |a: Components, b: Components| {
            Components(lerp(a.0, b.0, t), lerp(a.1, b.1, t), lerp(a.2, b.2, t))
        };

        match self.blend_space {
            BlendSpace::Rgb => Rgba::new(
                lerp(from.red, to.red, t),
                lerp(from.green, to.green, t),
                lerp(from.blue, to.blue, t),
                alpha,
            ),
            BlendSpace::LinearRgb => {
                let mixed = lerp3(
                    xyz::to_linear_light(from.unit_components()),
                    xyz::to_linear_light(to.unit_components()),
                );
                Rgba::from_unit(xyz::to_gamma_encoded(mixed), alpha)
            }
            BlendSpace::CieLab => {
                let mixed = lerp3(
                    xyz::srgb_to_lab(from.unit_components()),
                    xyz::srgb_to_lab(to.unit_components()),
                );
                Rgba::from_unit(xyz::lab_to_srgb(mixed), alpha)
            }
            BlendSpace::CieLuv => {
                let mixed = lerp3(
                    xyz::srgb_to_luv(from.unit_components()),
                    xyz::srgb_to_luv(to.unit_components()),
                );
                Rgba::from_unit(xyz::luv_to_srgb(mixed), alpha)
            }
            BlendSpace::Hsl => {
                let params = HslParams::default();
                let from = Hsl::from_canonical(from, &params);
                let to = Hsl::from_canonical(to, &params);
                let rgb = hsl_to_rgb(Components(
                    lerp_hue(&from, &to, t, self.hue_path),
                    lerp(from.saturation, to.saturation, t),
                    lerp(from.lightness, to.lightness, t),
                ));
                Rgba::from_unit(rgb, alpha)
            }
            BlendSpace::Hsv => {
                let params = HsvParams::default();
                let from = Hsv::from_canonical(from, &params);
                let to = Hsv::from_canonical(to, &params);
                let rgb = hsv_to_rgb(Components(
                    lerp_hue(&from, &to, t, self.hue_path),
                    lerp(from.saturation, to.saturation, t),
                    lerp(from.value, to.value, t),
                ));
                Rgba::from_unit(rgb, alpha)
            }
            BlendSpace::HclLab => {
                let params = HclParams::default();
                let from = HclLab::from_canonical(from, &params);
                let to = HclLab::from_canonical(to, &params);
                let rect = xyz::polar_to_rectangular(Components(
                    lerp(from.lightness, to.lightness, t),
                    lerp(from.chroma, to.chroma, t),
                    lerp_hue(&from, &to, t, self.hue_path),
                ));
                Rgba::from_unit(xyz::lab_to_srgb(rect), alpha)
            }
            BlendSpace::HclLuv => {
                let params = HclParams::default();
                let from = HclLuv::from_canonical(from, &params);
                let to = HclLuv::from_canonical(to, &params);
                let rect = xyz::polar_to_rectangular(Components(
                    lerp(from.lightness, to.lightness, t),
                    lerp(from.chroma, to.chroma, t),
                    lerp_hue(&from, &to, t, self.hue_path),
                ));
                Rgba::from_unit(xyz::luv_to_srgb(rect), alpha)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex_format() -> ColorFormat {
        ColorFormat::web()
    }

    #[test]
    fn endpoints_reproduce_the_stops() {
        let gradient = Gradient::new(["#ff0000", "#0000ff"], &hex_format()).unwrap();
        assert_eq!(gradient.at(0.0, &hex_format()).to_string(), "#ff0000ff");
        assert_eq!(gradient.at(1.0, &hex_format()).to_string(), "#0000ffff");

        // Clamped outside the domain.
        assert_eq!(gradient.at(-1.0, &hex_format()).to_string(), "#ff0000ff");
        assert_eq!(gradient.at(2.0, &hex_format()).to_string(), "#0000ffff");
    }

    #[test]
    fn rgb_blending_meets_in_the_middle() {
        let gradient = Gradient::new(["#000000", "#ffffff"], &hex_format())
            .unwrap()
            .with_blend_space(BlendSpace::Rgb);
        let mid = gradient.at(0.5, &hex_format());
        assert_eq!(mid.to_canonical().rounded(), [128, 128, 128, 255]);
    }

    #[test]
    fn hue_paths_pick_opposite_arcs() {
        let stops = ["#ff0000", "#0000ff"];
        let shortest = Gradient::new(stops, &hex_format())
            .unwrap()
            .with_blend_space(BlendSpace::Hsv);
        let longest = shortest.clone().with_hue_path(HuePath::Longest);

        // Red to blue passes through magenta on the short arc and through
        // green on the long arc.
        assert_eq!(
            shortest.at(0.5, &hex_format()).to_canonical().rounded(),
            [255, 0, 255, 255]
        );
        assert_eq!(
            longest.at(0.5, &hex_format()).to_canonical().rounded(),
            [0, 255, 0, 255]
        );
    }

    #[test]
    fn custom_domain_and_positions_shift_the_samples() {
        let gradient = Gradient::new(["#000000", "#ffffff"], &hex_format())
            .unwrap()
            .with_blend_space(BlendSpace::Rgb)
            .with_domain(0.0, 10.0)
            .unwrap()
            .with_positions(&[0.0, 5.0])
            .unwrap();

        // Everything past the last stop stays white.
        assert_eq!(
            gradient.at(7.5, &hex_format()).to_canonical().rounded(),
            [255, 255, 255, 255]
        );
        assert_eq!(
            gradient.at(2.5, &hex_format()).to_canonical().rounded(),
            [128, 128, 128, 255]
        );
    }

    #[test]
    fn degenerate_inputs_are_rejected() {
        assert!(matches!(
            Gradient::new(["#ff0000"], &hex_format()),
            Err(GradientError::TooFewStops(1))
        ));

        let gradient = Gradient::new(["#ff0000", "#0000ff"], &hex_format()).unwrap();
        assert!(matches!(
            gradient.clone().with_domain(1.0, 1.0),
            Err(GradientError::BadDomain { .. })
        ));
        assert!(matches!(
            gradient.clone().with_positions(&[0.5, 0.25]),
            Err(GradientError::BadPositions)
        ));
        assert!(matches!(
            gradient.with_positions(&[0.0, 0.5, 1.0]),
            Err(GradientError::BadPositions)
        ));
    }

    #[test]
    fn sampled_colors_include_both_endpoints() {
        let gradient = Gradient::new(["#ff0000", "#0000ff"], &hex_format()).unwrap();
        let colors = gradient.colors(5, &hex_format());
        assert_eq!(colors.len(), 5);
        assert_eq!(colors[0].to_string(), "#ff0000ff");
        assert_eq!(colors[4].to_string(), "#0000ffff");
    }

    #[test]
    fn a_bad_stop_surfaces_as_a_format_error() {
        let result = Gradient::new(["#ff0000", "oops"], &hex_format());
        assert!(matches!(result, Err(GradientError::Format(_))));
    }
}

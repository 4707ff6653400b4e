//! colorkit models colors in multiple color systems, converts between them
//! through a canonical RGBA representation, normalizes arbitrary color-like
//! input into a declared shape, and builds gradients and palettes on top.
//!
//! ```
//! use colorkit::{ColorFormat, Gradient};
//!
//! let format = ColorFormat::rgb255();
//! let color = format.format("#ff8000")?;
//! assert_eq!(color.to_string(), "rgb(255, 128, 0)");
//!
//! let gradient = Gradient::new(["#ff0000", "#0000ff"], &format)?;
//! let swatch = gradient.colors(5, &ColorFormat::web());
//! assert_eq!(swatch.len(), 5);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![deny(missing_docs)]

mod color;
mod convert;
mod distance;
mod error;
mod format;
mod gradient;
mod math;
mod palette;
pub mod systems;
mod xyz;

pub use color::{Color, Component, Components, Rgba};
pub use distance::{perceptual_distance, simplified_distance, DeltaE};
pub use error::{ColorError, FormatError, GradientError, PaletteError};
pub use format::{ColorFormat, ColorLike};
pub use gradient::{BlendSpace, Gradient, HuePath};
pub use palette::{Palette, StackPalette};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::{ColorSystem, Hsl, HslParams, Rgb, RgbParams};

    #[test]
    fn the_same_color_in_two_systems_compares_equal() {
        let params = RgbParams {
            max_rgb: 255.0,
            ..Default::default()
        };
        let rgb = Rgb::new(255.0, 0.0, 0.0, None, params).unwrap();
        let hsl = Hsl::new(0.0, 1.0, 0.5, None, HslParams::default()).unwrap();

        assert_eq!(Color::from(rgb), Color::from(hsl));
        assert_eq!(rgb.to_canonical(), hsl.to_canonical());
    }

    #[test]
    fn every_system_round_trips_through_the_canonical_form() {
        let source = ColorFormat::rgb255().format("#1a936f").unwrap();
        let canonical = source.to_canonical();

        let formats = [
            ColorFormat::rgb_unit(),
            ColorFormat::Hsl(Default::default()),
            ColorFormat::Hsv(Default::default()),
            ColorFormat::Cmy(Default::default()),
            ColorFormat::Cmyk(Default::default()),
            ColorFormat::CieLab(Default::default()),
            ColorFormat::CieLuv(Default::default()),
            ColorFormat::HclLab(Default::default()),
            ColorFormat::HclLuv(Default::default()),
            ColorFormat::web(),
        ];

        for format in formats {
            let converted = format.from_canonical(canonical);
            assert_eq!(converted.to_canonical(), canonical);
            // A second hop through another format pivots back losslessly.
            let back = converted.reformat(&ColorFormat::rgb255());
            assert_eq!(back.to_canonical().rounded(), canonical.rounded());
        }
    }

    #[test]
    fn hue_introspection_covers_exactly_the_polar_systems() {
        let canonical = ColorFormat::web().format("#00ff00").unwrap().to_canonical();

        let polar = ColorFormat::Hsv(Default::default()).from_canonical(canonical);
        let (hue, max_hue) = polar.hue().unwrap();
        assert_eq!(max_hue, 360.0);
        assert!((hue - 120.0).abs() < 0.01);

        let rectangular = ColorFormat::rgb255().from_canonical(canonical);
        assert!(rectangular.hue().is_none());
    }
}

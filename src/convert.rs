//! Conversions between unit scale RGB and the hexagonal models (HSL, HSV)
//! and the subtractive models (CMY, CMYK).
//!
//! All functions take and produce components on a 0 to 1 scale, except for
//! hue, which is always in degrees wrapped into `[0, 360)`. Scaling to the
//! ranges a caller declared happens in the system modules.

use crate::math::{almost_zero, normalize_hue};
use crate::{Component, Components};

fn min_max(red: Component, green: Component, blue: Component) -> (Component, Component) {
    (red.min(green).min(blue), red.max(green).max(blue))
}

/// Calculate the hue in degrees from RGB components and their min/max.
fn rgb_hue(
    red: Component,
    green: Component,
    blue: Component,
    min: Component,
    max: Component,
) -> Component {
    let delta = max - min;
    let hue = if max == red {
        (green - blue) / delta
    } else if max == green {
        (blue - red) / delta + 2.0
    } else {
        (red - green) / delta + 4.0
    };
    normalize_hue(hue * 60.0)
}

/// Convert RGB components to hue, saturation and lightness. Achromatic
/// colors get a hue and saturation of zero.
pub(crate) fn rgb_to_hsl(from: Components) -> Components {
    let Components(red, green, blue) = from;
    let (min, max) = min_max(red, green, blue);

    let lightness = (min + max) / 2.0;
    let delta = max - min;

    if almost_zero(delta) {
        return Components(0.0, 0.0, lightness);
    }

    let saturation = if lightness > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };

    Components(rgb_hue(red, green, blue, min, max), saturation, lightness)
}

/// Convert hue, saturation and lightness to RGB components. The hue must
/// already be wrapped into `[0, 360)`.
pub(crate) fn hsl_to_rgb(from: Components) -> Components {
    let Components(hue, saturation, lightness) = from;

    fn hue_to_channel(p: Component, q: Component, hue: Component) -> Component {
        let hue = normalize_hue(hue);
        if hue < 60.0 {
            p + (q - p) * hue / 60.0
        } else if hue < 180.0 {
            q
        } else if hue < 240.0 {
            p + (q - p) * (240.0 - hue) / 60.0
        } else {
            p
        }
    }

    if almost_zero(saturation) {
        return Components(lightness, lightness, lightness);
    }

    let q = if lightness <= 0.5 {
        lightness * (1.0 + saturation)
    } else {
        lightness + saturation - lightness * saturation
    };
    let p = 2.0 * lightness - q;

    Components(
        hue_to_channel(p, q, hue + 120.0),
        hue_to_channel(p, q, hue),
        hue_to_channel(p, q, hue - 120.0),
    )
}

/// Convert RGB components to hue, saturation and value. Achromatic colors
/// get a hue and saturation of zero.
pub(crate) fn rgb_to_hsv(from: Components) -> Components {
    let Components(red, green, blue) = from;
    let (min, max) = min_max(red, green, blue);

    let delta = max - min;
    if almost_zero(delta) {
        return Components(0.0, 0.0, max);
    }

    Components(rgb_hue(red, green, blue, min, max), delta / max, max)
}

/// Convert hue, saturation and value to RGB components. The hue must already
/// be wrapped into `[0, 360)`.
pub(crate) fn hsv_to_rgb(from: Components) -> Components {
    let Components(hue, saturation, value) = from;

    let sector = (hue / 60.0).floor();
    let fraction = hue / 60.0 - sector;

    let p = value * (1.0 - saturation);
    let q = value * (1.0 - saturation * fraction);
    let t = value * (1.0 - saturation * (1.0 - fraction));

    match sector as u8 % 6 {
        0 => Components(value, t, p),
        1 => Components(q, value, p),
        2 => Components(p, value, t),
        3 => Components(p, q, value),
        4 => Components(t, p, value),
        _ => Components(value, p, q),
    }
}

/// Convert RGB components to CMY, or back. The transform is its own inverse.
pub(crate) fn rgb_to_cmy(from: Components) -> Components {
    from.map(|v| 1.0 - v)
}

/// Split CMY components into rescaled CMY plus a black component. A pure
/// black input maps to zero chroma with the black component at its maximum.
pub(crate) fn cmy_to_cmyk(from: Components) -> (Components, Component) {
    let black = from.0.min(from.1).min(from.2);
    if almost_zero(1.0 - black) {
        return (Components(0.0, 0.0, 0.0), 1.0);
    }
    (from.map(|v| (v - black) / (1.0 - black)), black)
}

/// Merge a black component back into CMY components.
pub(crate) fn cmyk_to_cmy(from: Components, black: Component) -> Components {
    from.map(|v| v * (1.0 - black) + black)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn rgb_hsl_round_trips() {
        let values = [
            // red, green, blue, hue, saturation, lightness
            (1.0, 0.0, 0.0, 0.0, 1.0, 0.5),
            (0.0, 1.0, 0.0, 120.0, 1.0, 0.5),
            (0.0, 0.0, 1.0, 240.0, 1.0, 0.5),
            (1.0, 1.0, 1.0, 0.0, 0.0, 1.0),
            (0.0, 0.0, 0.0, 0.0, 0.0, 0.0),
            (0.5, 0.5, 0.5, 0.0, 0.0, 0.5),
            (0.75, 0.25, 0.25, 0.0, 0.5, 0.5),
        ];

        for (red, green, blue, hue, saturation, lightness) in values {
            let hsl = rgb_to_hsl(Components(red, green, blue));
            assert_component_eq!(hsl.0, hue);
            assert_component_eq!(hsl.1, saturation);
            assert_component_eq!(hsl.2, lightness);

            let rgb = hsl_to_rgb(hsl);
            assert_component_eq!(rgb.0, red);
            assert_component_eq!(rgb.1, green);
            assert_component_eq!(rgb.2, blue);
        }
    }

    #[test]
    fn rgb_hsv_round_trips() {
        let values = [
            // red, green, blue, hue, saturation, value
            (1.0, 0.0, 0.0, 0.0, 1.0, 1.0),
            (0.0, 1.0, 0.0, 120.0, 1.0, 1.0),
            (0.0, 0.0, 1.0, 240.0, 1.0, 1.0),
            (1.0, 1.0, 0.0, 60.0, 1.0, 1.0),
            (0.0, 0.0, 0.0, 0.0, 0.0, 0.0),
            (0.5, 0.5, 0.5, 0.0, 0.0, 0.5),
        ];

        for (red, green, blue, hue, saturation, value) in values {
            let hsv = rgb_to_hsv(Components(red, green, blue));
            assert_component_eq!(hsv.0, hue);
            assert_component_eq!(hsv.1, saturation);
            assert_component_eq!(hsv.2, value);

            let rgb = hsv_to_rgb(hsv);
            assert_component_eq!(rgb.0, red);
            assert_component_eq!(rgb.1, green);
            assert_component_eq!(rgb.2, blue);
        }
    }

    #[test]
    fn cmyk_splits_out_the_black_component() {
        let cmy = rgb_to_cmy(Components(0.75, 0.375, 0.1875));
        let (cmyk, black) = cmy_to_cmyk(cmy);
        assert_component_eq!(cmyk.0, 0.0);
        assert_component_eq!(cmyk.1, 0.5);
        assert_component_eq!(cmyk.2, 0.75);
        assert_component_eq!(black, 0.25);

        let back = cmyk_to_cmy(cmyk, black);
        assert_component_eq!(back.0, cmy.0);
        assert_component_eq!(back.1, cmy.1);
        assert_component_eq!(back.2, cmy.2);
    }

    #[test]
    fn pure_black_maps_to_maximum_black_and_zero_chroma() {
        let cmy = rgb_to_cmy(Components(0.0, 0.0, 0.0));
        let (cmyk, black) = cmy_to_cmyk(cmy);
        assert_eq!(cmyk, Components(0.0, 0.0, 0.0));
        assert_eq!(black, 1.0);
    }
}

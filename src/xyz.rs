//! Conversions through the device independent CIE-XYZ space with the D65
//! reference white, used by the CIELab and CIELuv families.

use crate::math::{almost_zero, normalize_hue, transform, transform_3x3, Transform};
use crate::{Component, Components};

/// The D65 reference white point.
#[allow(clippy::excessive_precision)]
pub(crate) const WHITE_POINT: Components =
    Components(0.9504559270516716, 1.0, 1.0890577507598784);

const KAPPA: Component = 24389.0 / 27.0;
const EPSILON: Component = 216.0 / 24389.0;

/// Convert gamma encoded sRGB components to linear light.
pub(crate) fn to_linear_light(from: Components) -> Components {
    from.map(|value| {
        let abs = value.abs();

        if abs < 0.04045 {
            value / 12.92
        } else {
            value.signum() * ((abs + 0.055) / 1.055).powf(2.4)
        }
    })
}

/// Convert linear light sRGB components to gamma encoded.
pub(crate) fn to_gamma_encoded(from: Components) -> Components {
    from.map(|value| {
        let abs = value.abs();

        if abs > 0.0031308 {
            value.signum() * (1.055 * abs.powf(1.0 / 2.4) - 0.055)
        } else {
            12.92 * value
        }
    })
}

/// Convert linear light sRGB components to XYZ.
pub(crate) fn linear_srgb_to_xyz(from: Components) -> Components {
    #[rustfmt::skip]
    #[allow(clippy::excessive_precision)]
    const TO_XYZ: Transform = transform_3x3(
        0.4123907992659595,  0.21263900587151036, 0.01933081871559185,
        0.35758433938387796, 0.7151686787677559,  0.11919477979462599,
        0.1804807884018343,  0.07219231536073371, 0.9505321522496606,
    );

    transform(&TO_XYZ, from)
}

/// Convert XYZ to linear light sRGB components.
pub(crate) fn xyz_to_linear_srgb(from: Components) -> Components {
    #[rustfmt::skip]
    #[allow(clippy::excessive_precision)]
    const FROM_XYZ: Transform = transform_3x3(
         3.2409699419045213, -0.9692436362808798,  0.05563007969699361,
        -1.5373831775700935,  1.8759675015077206, -0.20397695888897657,
        -0.4986107602930033,  0.04155505740717561, 1.0569715142428786,
    );

    transform(&FROM_XYZ, from)
}

/// Convert gamma encoded sRGB components to Lab lightness, a and b.
pub(crate) fn srgb_to_lab(from: Components) -> Components {
    xyz_to_lab(linear_srgb_to_xyz(to_linear_light(from)))
}

/// Convert Lab lightness, a and b to gamma encoded sRGB components. Out of
/// gamut results are not clamped here.
pub(crate) fn lab_to_srgb(from: Components) -> Components {
    to_gamma_encoded(xyz_to_linear_srgb(lab_to_xyz(from)))
}

/// Convert gamma encoded sRGB components to Luv lightness, u and v.
pub(crate) fn srgb_to_luv(from: Components) -> Components {
    xyz_to_luv(linear_srgb_to_xyz(to_linear_light(from)))
}

/// Convert Luv lightness, u and v to gamma encoded sRGB components. Out of
/// gamut results are not clamped here.
pub(crate) fn luv_to_srgb(from: Components) -> Components {
    to_gamma_encoded(xyz_to_linear_srgb(luv_to_xyz(from)))
}

fn xyz_to_lab(from: Components) -> Components {
    let adapted = Components(
        from.0 / WHITE_POINT.0,
        from.1 / WHITE_POINT.1,
        from.2 / WHITE_POINT.2,
    );

    let Components(f0, f1, f2) = adapted.map(|v| {
        if v > EPSILON {
            v.cbrt()
        } else {
            (KAPPA * v + 16.0) / 116.0
        }
    });

    Components(116.0 * f1 - 16.0, 500.0 * (f0 - f1), 200.0 * (f1 - f2))
}

fn lab_to_xyz(from: Components) -> Components {
    let Components(lightness, a, b) = from;

    let f1 = (lightness + 16.0) / 116.0;
    let f0 = f1 + a / 500.0;
    let f2 = f1 - b / 200.0;

    let f0_cubed = f0 * f0 * f0;
    let x = if f0_cubed > EPSILON {
        f0_cubed
    } else {
        (116.0 * f0 - 16.0) / KAPPA
    };

    let y = if lightness > KAPPA * EPSILON {
        f1 * f1 * f1
    } else {
        lightness / KAPPA
    };

    let f2_cubed = f2 * f2 * f2;
    let z = if f2_cubed > EPSILON {
        f2_cubed
    } else {
        (116.0 * f2 - 16.0) / KAPPA
    };

    Components(x * WHITE_POINT.0, y * WHITE_POINT.1, z * WHITE_POINT.2)
}

/// The u' and v' chromaticity coordinates for the given XYZ components.
fn chromaticity(from: Components) -> (Component, Component) {
    let denominator = from.0 + 15.0 * from.1 + 3.0 * from.2;
    if almost_zero(denominator) {
        return (0.0, 0.0);
    }
    (4.0 * from.0 / denominator, 9.0 * from.1 / denominator)
}

fn xyz_to_luv(from: Components) -> Components {
    let y = from.1 / WHITE_POINT.1;
    let lightness = if y > EPSILON {
        116.0 * y.cbrt() - 16.0
    } else {
        KAPPA * y
    };

    if almost_zero(lightness) {
        return Components(0.0, 0.0, 0.0);
    }

    let (u, v) = chromaticity(from);
    let (white_u, white_v) = chromaticity(WHITE_POINT);

    Components(
        lightness,
        13.0 * lightness * (u - white_u),
        13.0 * lightness * (v - white_v),
    )
}

fn luv_to_xyz(from: Components) -> Components {
    let Components(lightness, u, v) = from;

    if almost_zero(lightness) {
        return Components(0.0, 0.0, 0.0);
    }

    let (white_u, white_v) = chromaticity(WHITE_POINT);
    let u = u / (13.0 * lightness) + white_u;
    let v = v / (13.0 * lightness) + white_v;

    let y = if lightness > KAPPA * EPSILON {
        let f = (lightness + 16.0) / 116.0;
        f * f * f
    } else {
        lightness / KAPPA
    };

    let x = y * 9.0 * u / (4.0 * v);
    let z = y * (12.0 - 3.0 * u - 20.0 * v) / (4.0 * v);

    Components(x, y, z)
}

/// Convert a rectangular lightness, a, b triple into its cylindrical
/// lightness, chroma, hue form. Achromatic colors get a hue of zero.
pub(crate) fn rectangular_to_polar(from: Components) -> Components {
    let Components(lightness, a, b) = from;

    let chroma = (a * a + b * b).sqrt();
    let hue = if almost_zero(chroma) {
        0.0
    } else {
        normalize_hue(b.atan2(a).to_degrees())
    };

    Components(lightness, chroma, hue)
}

/// Convert a cylindrical lightness, chroma, hue triple into its rectangular
/// lightness, a, b form.
pub(crate) fn polar_to_rectangular(from: Components) -> Components {
    let Components(lightness, chroma, hue) = from;

    let hue = hue.to_radians();
    Components(lightness, chroma * hue.cos(), chroma * hue.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn white_maps_to_full_lightness() {
        let lab = srgb_to_lab(Components(1.0, 1.0, 1.0));
        assert_component_eq!(lab.0, 100.0);
        // The a/b and u/v axes carry large multipliers, so allow more slack
        // than the component epsilon.
        assert!(lab.1.abs() < 1.0e-3);
        assert!(lab.2.abs() < 1.0e-3);

        let luv = srgb_to_luv(Components(1.0, 1.0, 1.0));
        assert_component_eq!(luv.0, 100.0);
        assert!(luv.1.abs() < 1.0e-3);
        assert!(luv.2.abs() < 1.0e-3);
    }

    #[test]
    fn black_maps_to_zero() {
        let lab = srgb_to_lab(Components(0.0, 0.0, 0.0));
        assert_component_eq!(lab.0, 0.0);

        let luv = srgb_to_luv(Components(0.0, 0.0, 0.0));
        assert_component_eq!(luv.0, 0.0);
        assert_component_eq!(luv.1, 0.0);
        assert_component_eq!(luv.2, 0.0);
    }

    #[test]
    fn lab_round_trips_through_xyz() {
        let values = [
            Components(1.0, 0.0, 0.0),
            Components(0.0, 1.0, 0.0),
            Components(0.0, 0.0, 1.0),
            Components(0.25, 0.5, 0.75),
        ];

        for rgb in values {
            let back = lab_to_srgb(srgb_to_lab(rgb));
            assert_component_eq!(back.0, rgb.0);
            assert_component_eq!(back.1, rgb.1);
            assert_component_eq!(back.2, rgb.2);
        }
    }

    #[test]
    fn luv_round_trips_through_xyz() {
        let values = [
            Components(1.0, 0.0, 0.0),
            Components(0.0, 1.0, 0.0),
            Components(0.25, 0.5, 0.75),
        ];

        for rgb in values {
            let back = luv_to_srgb(srgb_to_luv(rgb));
            assert_component_eq!(back.0, rgb.0);
            assert_component_eq!(back.1, rgb.1);
            assert_component_eq!(back.2, rgb.2);
        }
    }

    #[test]
    fn polar_form_round_trips() {
        let lab = Components(50.0, 20.0, -30.0);
        let back = polar_to_rectangular(rectangular_to_polar(lab));
        assert_component_eq!(back.0, lab.0);
        assert_component_eq!(back.1, lab.1);
        assert_component_eq!(back.2, lab.2);
    }

    #[test]
    fn achromatic_polar_hue_is_zero() {
        let polar = rectangular_to_polar(Components(50.0, 0.0, 0.0));
        assert_eq!(polar.2, 0.0);
    }
}

//! Math utility functions.

use euclid::default::{Transform3D, Vector3D};
use num_traits::Float;

use crate::{Component, Components};

pub(crate) type Transform = Transform3D<Component>;

type Vector = Vector3D<Component>;

/// Create a transform from the 9 values of a 3x3 matrix.
pub(crate) const fn transform_3x3(
    m11: Component,
    m12: Component,
    m13: Component,
    m21: Component,
    m22: Component,
    m23: Component,
    m31: Component,
    m32: Component,
    m33: Component,
) -> Transform {
    Transform::new(
        m11, m12, m13, 0.0, //
        m21, m22, m23, 0.0, //
        m31, m32, m33, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Multiply the given matrix in `transform` with the 3 components.
pub(crate) fn transform(transform: &Transform, components: Components) -> Components {
    let Vector { x, y, z, .. } = transform.transform_vector3d(Vector::new(
        components.0,
        components.1,
        components.2,
    ));
    Components(x, y, z)
}

/// Whether the value is close enough to zero to be treated as zero.
pub(crate) fn almost_zero(value: Component) -> bool {
    value.abs() < 1.0e-6
}

/// Wrap a hue in degrees into `[0, 360)`.
pub(crate) fn normalize_hue(hue: Component) -> Component {
    hue.rem_euclid(360.0)
}

/// Linear interpolation between `a` and `b` with `t` as the progress.
pub(crate) fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

/// Round a value according to a precision parameter: `-1` leaves the value
/// untouched, `0` rounds to an integer and `n > 0` keeps `n` decimal digits.
pub(crate) fn round_to(value: Component, digits: i32) -> Component {
    match digits {
        i32::MIN..=-1 => value,
        0 => value.round(),
        _ => {
            let scale = (10.0 as Component).powi(digits);
            (value * scale).round() / scale
        }
    }
}

//! One module per supported color system.
//!
//! Every system is an immutable value carrying its components in the ranges
//! its parameters declare, plus the canonical representation computed at
//! construction. Conversion between two systems always pivots through
//! [`Rgba`](crate::Rgba) via the [`ColorSystem`] trait.

mod cmy;
mod cmyk;
mod hex;
mod hsl;
mod hsv;
mod lab;
mod luv;
mod rgb;

pub use cmy::{Cmy, CmyParams};
pub use cmyk::{Cmyk, CmykParams};
pub use hex::{AlphaPosition, Hex, HexFlags, HexParams};
pub use hsl::{Hsl, HslParams};
pub use hsv::{Hsv, HsvParams};
pub use lab::{CieLab, HclLab, LabParams};
pub use luv::{CieLuv, HclLuv, LuvParams};
pub use rgb::{Rgb, RgbParams};

use crate::{Component, Rgba};

/// The capabilities every color system provides: a pivot to and from the
/// canonical representation and introspection of the parameters the value
/// was built with.
pub trait ColorSystem: Sized {
    /// The formatting parameters this system accepts.
    type Params: Clone + std::fmt::Debug;

    /// Construct a value of this system from canonical channels. This is the
    /// exclusive conversion path between systems and never fails; canonical
    /// channels are clamped, not rejected.
    fn from_canonical(rgba: Rgba, params: &Self::Params) -> Self;

    /// The canonical representation of this value.
    fn to_canonical(&self) -> Rgba;

    /// The parameters this value was constructed with.
    fn params(&self) -> Self::Params;

    /// Convert this value into another system by pivoting through the
    /// canonical representation.
    fn convert<T: ColorSystem>(&self, params: &T::Params) -> T {
        T::from_canonical(self.to_canonical(), params)
    }
}

/// A color system with a circular hue component. Hue aware consumers such as
/// gradient interpolation operate on this trait without per-system special
/// cases.
pub trait HasHue: ColorSystem {
    /// The hue component, in `[0, max_hue)`.
    fn hue(&self) -> Component;

    /// The declared maximum of the hue scale.
    fn max_hue(&self) -> Component;
}

/// Formatting parameters shared by the cylindrical CIE systems
/// ([`HclLab`] and [`HclLuv`]).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HclParams {
    /// The maximum of the hue scale.
    pub max_hue: Component,
    /// The maximum of the alpha scale.
    pub max_alpha: Component,
    /// Whether the alpha component shows up in the display form.
    pub include_alpha: bool,
    /// Decimal digits the components are rounded to. `-1` keeps full
    /// precision, `0` rounds to integers.
    pub round_to: i32,
}

impl Default for HclParams {
    fn default() -> Self {
        Self {
            max_hue: 360.0,
            max_alpha: 1.0,
            include_alpha: false,
            round_to: -1,
        }
    }
}

/// Equality, hashing and ordering-adjacent impls shared by every system:
/// two values are equal iff their canonical channels match after rounding,
/// no matter the formatting parameters.
macro_rules! impl_canonical_eq {
    ($($system:ty),* $(,)?) => {
        $(
            impl PartialEq for $system {
                fn eq(&self, other: &Self) -> bool {
                    $crate::systems::ColorSystem::to_canonical(self)
                        == $crate::systems::ColorSystem::to_canonical(other)
                }
            }

            impl Eq for $system {}

            impl std::hash::Hash for $system {
                fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                    std::hash::Hash::hash(
                        &$crate::systems::ColorSystem::to_canonical(self),
                        state,
                    );
                }
            }
        )*
    };
}

pub(crate) use impl_canonical_eq;

/// Reject a component outside `[0, max]`.
pub(crate) fn check_range(
    param: &'static str,
    value: Component,
    max: Component,
) -> Result<(), crate::ColorError> {
    if (0.0..=max).contains(&value) {
        Ok(())
    } else {
        Err(crate::ColorError::OutOfRange { param, value, max })
    }
}

/// Resolve an optional alpha argument, defaulting to fully opaque on the
/// given scale, and validate it.
pub(crate) fn check_alpha(
    alpha: Option<Component>,
    max: Component,
) -> Result<Component, crate::ColorError> {
    let alpha = alpha.unwrap_or(max);
    check_range("alpha", alpha, max)?;
    Ok(alpha)
}

//! Distance functions over the canonical representation.

use crate::{xyz, Component, Components, Rgba};

/// The Delta-E formula applied by [`perceptual_distance`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DeltaE {
    /// The plain Euclidean distance in CIELab (CIE 1976).
    Cie76,
    /// The CIE 1994 formula with graphic arts weighting.
    Cie94,
    /// The CIE 2000 formula.
    Ciede2000,
    /// The CMC l:c formula.
    Cmc {
        /// The lightness weight, commonly `2` for acceptability and `1` for
        /// perceptibility.
        lightness: Component,
        /// The chroma weight, commonly `1`.
        chroma: Component,
    },
}

/// A fast perceptual approximation: weighted Euclidean distance in RGB with
/// the red/blue weights driven by the average red channel. White to black
/// measures exactly 765.
pub fn simplified_distance(left: Rgba, right: Rgba) -> Component {
    let dr = left.red - right.red;
    let dg = left.green - right.green;
    let db = left.blue - right.blue;
    let avg_red = (left.red + right.red) / 2.0 / 255.0;

    ((2.0 + avg_red) * dr * dr + 4.0 * dg * dg + (3.0 - avg_red) * db * db).sqrt()
}

/// The perceptual difference between two colors under the given Delta-E
/// formula, computed in CIELab with the D65 reference white.
pub fn perceptual_distance(left: Rgba, right: Rgba, method: DeltaE) -> Component {
    let lab1 = xyz::srgb_to_lab(left.unit_components());
    let lab2 = xyz::srgb_to_lab(right.unit_components());

    match method {
        DeltaE::Cie76 => cie76(lab1, lab2),
        DeltaE::Cie94 => cie94(lab1, lab2),
        DeltaE::Ciede2000 => ciede2000(lab1, lab2),
        DeltaE::Cmc { lightness, chroma } => cmc(lab1, lab2, lightness, chroma),
    }
}

fn cie76(lab1: Components, lab2: Components) -> Component {
    let dl = lab1.0 - lab2.0;
    let da = lab1.1 - lab2.1;
    let db = lab1.2 - lab2.2;
    (dl * dl + da * da + db * db).sqrt()
}

fn cie94(lab1: Components, lab2: Components) -> Component {
    const K1: Component = 0.045;
    const K2: Component = 0.015;

    let dl = lab1.0 - lab2.0;
    let da = lab1.1 - lab2.1;
    let db = lab1.2 - lab2.2;

    let c1 = lab1.1.hypot(lab1.2);
    let c2 = lab2.1.hypot(lab2.2);
    let dc = c1 - c2;

    // Derive the hue term from the chroma term to avoid computing hue
    // angles; rounding can push it slightly negative.
    let dh_squared = (da * da + db * db - dc * dc).max(0.0);

    let sc = 1.0 + K1 * c1;
    let sh = 1.0 + K2 * c1;

    (dl * dl + (dc / sc) * (dc / sc) + dh_squared / (sh * sh)).sqrt()
}

fn ciede2000(lab1: Components, lab2: Components) -> Component {
    const POW25_7: Component = 6103515625.0; // 25^7

    let Components(l1, a1, b1) = lab1;
    let Components(l2, a2, b2) = lab2;

    let c_bar = (a1.hypot(b1) + a2.hypot(b2)) / 2.0;
    let c_bar_7 = c_bar.powi(7);
    let g = 0.5 * (1.0 - (c_bar_7 / (c_bar_7 + POW25_7)).sqrt());

    let a1 = a1 * (1.0 + g);
    let a2 = a2 * (1.0 + g);

    let c1 = a1.hypot(b1);
    let c2 = a2.hypot(b2);

    let h1 = if c1 == 0.0 {
        0.0
    } else {
        b1.atan2(a1).to_degrees().rem_euclid(360.0)
    };
    let h2 = if c2 == 0.0 {
        0.0
    } else {
        b2.atan2(a2).to_degrees().rem_euclid(360.0)
    };

    let dl = l2 - l1;
    let dc = c2 - c1;

    let dh = if c1 * c2 == 0.0 {
        0.0
    } else {
        let d = h2 - h1;
        if d > 180.0 {
            d - 360.0
        } else if d < -180.0 {
            d + 360.0
        } else {
            d
        }
    };
    let dh_term = 2.0 * (c1 * c2).sqrt() * (dh / 2.0).to_radians().sin();

    let l_bar = (l1 + l2) / 2.0;
    let c_bar = (c1 + c2) / 2.0;
    let h_bar = if c1 * c2 == 0.0 {
        h1 + h2
    } else {
        let sum = h1 + h2;
        if (h1 - h2).abs() <= 180.0 {
            sum / 2.0
        } else if sum < 360.0 {
            (sum + 360.0) / 2.0
        } else {
            (sum - 360.0) / 2.0
        }
    };

    let t = 1.0 - 0.17 * (h_bar - 30.0).to_radians().cos()
        + 0.24 * (2.0 * h_bar).to_radians().cos()
        + 0.32 * (3.0 * h_bar + 6.0).to_radians().cos()
        - 0.20 * (4.0 * h_bar - 63.0).to_radians().cos();

    let l_bar_50 = (l_bar - 50.0) * (l_bar - 50.0);
    let sl = 1.0 + 0.015 * l_bar_50 / (20.0 + l_bar_50).sqrt();
    let sc = 1.0 + 0.045 * c_bar;
    let sh = 1.0 + 0.015 * c_bar * t;

    let d_theta = 30.0 * (-((h_bar - 275.0) / 25.0) * ((h_bar - 275.0) / 25.0)).exp();
    let c_bar_7 = c_bar.powi(7);
    let rc = 2.0 * (c_bar_7 / (c_bar_7 + POW25_7)).sqrt();
    let rt = -rc * (2.0 * d_theta).to_radians().sin();

    let dl = dl / sl;
    let dc = dc / sc;
    let dh_term = dh_term / sh;

    (dl * dl + dc * dc + dh_term * dh_term + rt * dc * dh_term).sqrt()
}

fn cmc(
    lab1: Components,
    lab2: Components,
    lightness: Component,
    chroma: Component,
) -> Component {
    let Components(l1, a1, b1) = lab1;
    let Components(l2, a2, b2) = lab2;

    let c1 = a1.hypot(b1);
    let c2 = a2.hypot(b2);

    let dl = l1 - l2;
    let dc = c1 - c2;
    let da = a1 - a2;
    let db = b1 - b2;
    let dh_squared = (da * da + db * db - dc * dc).max(0.0);

    let sl = if l1 < 16.0 {
        0.511
    } else {
        0.040975 * l1 / (1.0 + 0.01765 * l1)
    };
    let sc = 0.0638 * c1 / (1.0 + 0.0131 * c1) + 0.638;

    let h1 = b1.atan2(a1).to_degrees().rem_euclid(360.0);
    let t = if (164.0..345.0).contains(&h1) {
        0.56 + (0.2 * (h1 + 168.0).to_radians().cos()).abs()
    } else {
        0.36 + (0.4 * (h1 + 35.0).to_radians().cos()).abs()
    };

    let c1_4 = c1.powi(4);
    let f = (c1_4 / (c1_4 + 1900.0)).sqrt();
    let sh = sc * (f * t + 1.0 - f);

    let dl = dl / (lightness * sl);
    let dc = dc / (chroma * sc);

    (dl * dl + dc * dc + dh_squared / (sh * sh)).sqrt()
}

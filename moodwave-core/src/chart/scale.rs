//! Positional and color scales.

use crate::foundation::core::Rgb8;

/// Affine map from a numeric domain onto a numeric range.
///
/// Values outside the domain extrapolate unless clamping is enabled.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct LinearScale {
    pub domain: [f64; 2],
    pub range: [f64; 2],
    pub clamp: bool,
}

impl LinearScale {
    pub fn new(domain: [f64; 2], range: [f64; 2]) -> Self {
        Self {
            domain,
            range,
            clamp: false,
        }
    }

    pub fn clamped(mut self) -> Self {
        self.clamp = true;
        self
    }

    /// Normalized position of `x` inside the domain (0 at `domain[0]`, 1 at `domain[1]`).
    pub fn normalize(&self, x: f64) -> f64 {
        let [d0, d1] = self.domain;
        let span = d1 - d0;
        // A collapsed domain maps everything to the middle of the range.
        let t = if span == 0.0 { 0.5 } else { (x - d0) / span };
        if self.clamp { t.clamp(0.0, 1.0) } else { t }
    }

    pub fn apply(&self, x: f64) -> f64 {
        let [r0, r1] = self.range;
        r0 + self.normalize(x) * (r1 - r0)
    }
}

/// Domain-to-color map through an interpolator over `[0, 1]`.
#[derive(Clone, Copy, Debug)]
pub struct SequentialScale {
    domain: [f64; 2],
    interpolator: fn(f64) -> Rgb8,
}

impl SequentialScale {
    /// Always clamped: values outside the domain take the nearest end color.
    pub fn new(domain: [f64; 2], interpolator: fn(f64) -> Rgb8) -> Self {
        Self {
            domain,
            interpolator,
        }
    }

    pub fn apply(&self, x: f64) -> Rgb8 {
        let t = LinearScale::new(self.domain, [0.0, 1.0]).clamped().normalize(x);
        (self.interpolator)(t)
    }
}

// Nine-class ColorBrewer Blues, light to dark.
const BLUES: [Rgb8; 9] = [
    Rgb8::new(0xf7, 0xfb, 0xff),
    Rgb8::new(0xde, 0xeb, 0xf7),
    Rgb8::new(0xc6, 0xdb, 0xef),
    Rgb8::new(0x9e, 0xca, 0xe1),
    Rgb8::new(0x6b, 0xae, 0xd6),
    Rgb8::new(0x42, 0x92, 0xc6),
    Rgb8::new(0x21, 0x71, 0xb5),
    Rgb8::new(0x08, 0x51, 0x9c),
    Rgb8::new(0x08, 0x30, 0x6b),
];

/// Continuous Blues ramp: 0 is near-white, 1 is dark navy.
///
/// Channels are interpolated independently with a uniform cubic B-spline through the
/// nine-class scheme, then rounded.
pub fn interpolate_blues(t: f64) -> Rgb8 {
    fn channel(pick: fn(&Rgb8) -> u8, t: f64) -> u8 {
        let values: [f64; 9] = BLUES.map(|c| f64::from(pick(&c)));
        to_u8(basis_spline(&values, t))
    }

    Rgb8 {
        r: channel(|c: &Rgb8| c.r, t),
        g: channel(|c: &Rgb8| c.g, t),
        b: channel(|c: &Rgb8| c.b, t),
    }
}

fn to_u8(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

fn basis_spline(values: &[f64], t: f64) -> f64 {
    let n = values.len() - 1;
    let (t, i) = if t.is_nan() || t <= 0.0 {
        (0.0, 0)
    } else if t >= 1.0 {
        (1.0, n - 1)
    } else {
        (t, (t * n as f64).floor() as usize)
    };

    let v1 = values[i];
    let v2 = values[i + 1];
    let v0 = if i > 0 { values[i - 1] } else { 2.0 * v1 - v2 };
    let v3 = if i < n - 1 {
        values[i + 2]
    } else {
        2.0 * v2 - v1
    };

    let t1 = (t - i as f64 / n as f64) * n as f64;
    let t2 = t1 * t1;
    let t3 = t2 * t1;
    ((1.0 - 3.0 * t1 + 3.0 * t2 - t3) * v0
        + (4.0 - 6.0 * t2 + 3.0 * t3) * v1
        + (1.0 + 3.0 * t1 + 3.0 * t2 - 3.0 * t3) * v2
        + t3 * v3)
        / 6.0
}

#[cfg(test)]
#[path = "../../tests/unit/chart/scale.rs"]
mod tests;

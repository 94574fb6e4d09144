//! Fixed color gradient for the temperature matrix.
//!
//! Counts are normalized against the largest count in the matrix and mapped
//! through piecewise-linear breakpoints. The band just above zero stays
//! transparent so one-off combinations do not speckle the chart.

use serde::Serialize;
use std::fmt;

/// An sRGB color with alpha in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self::new(r, g, b, 1.0)
    }

    pub fn is_transparent(&self) -> bool {
        self.a == 0.0
    }

    fn lerp(self, other: Rgba, t: f64) -> Rgba {
        let mix = |x: f64, y: f64| x + (y - x) * t;
        Rgba::new(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
            mix(self.a, other.a),
        )
    }
}

impl fmt::Display for Rgba {
    /// CSS `rgba()` notation
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({},{},{},{})",
            self.r.round() as u8,
            self.g.round() as u8,
            self.b.round() as u8,
            (self.a * 1000.0).round() / 1000.0
        )
    }
}

/// (fraction of max count, color), ascending by fraction.
pub const BREAKPOINTS: [(f64, Rgba); 7] = [
    (0.0, Rgba::TRANSPARENT),
    (0.001, Rgba::TRANSPARENT),
    (0.002, Rgba::rgb(31.0, 120.0, 180.0)),
    (0.45, Rgba::rgb(178.0, 223.0, 138.0)),
    (0.65, Rgba::rgb(51.0, 160.0, 44.0)),
    (0.85, Rgba::rgb(251.0, 154.0, 153.0)),
    (1.0, Rgba::rgb(227.0, 26.0, 28.0)),
];

/// Color for a normalized value in `0.0..=1.0` (clamped).
pub fn color_at(fraction: f64) -> Rgba {
    let t = if fraction.is_nan() { 0.0 } else { fraction.clamp(0.0, 1.0) };
    for pair in BREAKPOINTS.windows(2) {
        let (lo, lo_color) = pair[0];
        let (hi, hi_color) = pair[1];
        if t <= hi {
            let span = hi - lo;
            let local = if span > 0.0 { (t - lo) / span } else { 0.0 };
            return lo_color.lerp(hi_color, local);
        }
    }
    BREAKPOINTS[BREAKPOINTS.len() - 1].1
}

/// Color for a cell count given the matrix maximum. Zero is always transparent.
pub fn color_for_count(count: u32, max_count: u32) -> Rgba {
    if count == 0 || max_count == 0 {
        return Rgba::TRANSPARENT;
    }
    color_at(f64::from(count) / f64::from(max_count))
}

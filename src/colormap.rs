//! Value normalization and the green-yellow-red color ramp

use serde::{Deserialize, Serialize};
use std::fmt;

/// Shared min/max of a pool of values
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    /// Smallest value
    pub min: f64,
    /// Largest value
    pub max: f64,
}

impl ValueRange {
    /// Range of the finite values given, `None` if there are none
    pub fn from_values<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        values.into_iter().filter(|v| v.is_finite()).fold(None, |range, v| match range {
            None => Some(Self { min: v, max: v }),
            Some(r) => Some(Self {
                min: r.min.min(v),
                max: r.max.max(v),
            }),
        })
    }

    /// Map a value into [0, 1]. A degenerate range and non-finite values
    /// map to 0.5.
    pub fn normalize(&self, value: f64) -> f64 {
        if self.max == self.min || !value.is_finite() {
            return 0.5;
        }
        ((value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }
}

/// An 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
}

impl Rgb {
    /// Create a color from its channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    /// CSS form, e.g. `rgb(255,128,0)`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

/// Two-segment ramp: green to yellow below 0.5, yellow to red above.
///
/// Channels are truncated, not rounded. NaN is drawn as the midpoint.
pub fn ramp(normalized: f64) -> Rgb {
    let n = if normalized.is_nan() { 0.5 } else { normalized.clamp(0.0, 1.0) };
    if n < 0.5 {
        Rgb::new((n * 2.0 * 255.0) as u8, 255, 0)
    } else {
        Rgb::new(255, ((1.0 - (n - 0.5) * 2.0) * 255.0) as u8, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ramp_endpoints() {
        assert_eq!(ramp(0.0), Rgb::new(0, 255, 0));
        assert_eq!(ramp(0.5), Rgb::new(255, 255, 0));
        assert_eq!(ramp(1.0), Rgb::new(255, 0, 0));
    }

    #[test]
    fn test_ramp_truncates() {
        // 0.25 * 2 * 255 = 127.5
        assert_eq!(ramp(0.25), Rgb::new(127, 255, 0));
        assert_eq!(ramp(0.75), Rgb::new(255, 127, 0));
    }

    #[test]
    fn test_ramp_upper_half_is_monotonic() {
        let mut prev = ramp(0.5);
        for step in 1..=50 {
            let c = ramp(0.5 + step as f64 * 0.01);
            assert!(c.r >= prev.r);
            assert!(c.g <= prev.g);
            assert_eq!(c.b, 0);
            prev = c;
        }
    }

    #[test]
    fn test_degenerate_range_is_midpoint() {
        let range = ValueRange::from_values([4.0, 4.0, 4.0]).unwrap();
        assert_eq!(range.normalize(4.0), 0.5);
        assert_eq!(ramp(range.normalize(4.0)), Rgb::new(255, 255, 0));
    }

    #[test]
    fn test_normalize() {
        let range = ValueRange::from_values([-10.0, 30.0, 10.0]).unwrap();
        assert_eq!(range.min, -10.0);
        assert_eq!(range.max, 30.0);
        assert_eq!(range.normalize(-10.0), 0.0);
        assert_eq!(range.normalize(10.0), 0.5);
        assert_eq!(range.normalize(30.0), 1.0);
        assert!(ValueRange::from_values(Vec::new()).is_none());
    }

    #[test]
    fn test_non_finite_values_are_midpoint() {
        assert_eq!(ramp(f64::NAN), Rgb::new(255, 255, 0));
        assert_eq!(ramp(f64::INFINITY), Rgb::new(255, 0, 0));

        let range = ValueRange::from_values([f64::NAN, 2.0, f64::INFINITY, -2.0]).unwrap();
        assert_eq!(range, ValueRange { min: -2.0, max: 2.0 });
        assert_eq!(range.normalize(f64::NAN), 0.5);
        assert_eq!(range.normalize(f64::NEG_INFINITY), 0.5);
        assert!(ValueRange::from_values([f64::NAN]).is_none());
    }

    #[test]
    fn test_css_format() {
        assert_eq!(Rgb::new(255, 127, 0).to_string(), "rgb(255,127,0)");
    }
}

//! Axis scales and tick generation
//!
//! Linear ticks step additively on 1/2/5 x 10^k boundaries. Log ticks step
//! multiplicatively: majors at each power of ten, minors at 2..9 x 10^k.

use serde::Serialize;

/// Fraction of the data span added on each side of a linear axis
const LINEAR_PADDING: f64 = 0.1;

/// How values map onto an axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Scale {
    Linear,
    Log10,
}

impl Scale {
    /// Position of `value` within `[min, max]` as a fraction in 0..=1
    ///
    /// Values outside the range project outside 0..=1; callers clamp if needed.
    pub fn project(self, value: f64, min: f64, max: f64) -> f64 {
        match self {
            Scale::Linear => (value - min) / (max - min),
            Scale::Log10 => (value.log10() - min.log10()) / (max.log10() - min.log10()),
        }
    }
}

/// Pad a linear range so the extreme points sit inside the plot
pub fn padded_linear_range(min: f64, max: f64) -> (f64, f64) {
    let span = max - min;
    if span.abs() < f64::EPSILON {
        let pad = if min == 0.0 { 1.0 } else { min.abs() * LINEAR_PADDING };
        return (min - pad, max + pad);
    }
    (min - span * LINEAR_PADDING, max + span * LINEAR_PADDING)
}

/// Round a raw step up to 1, 2, 5 or 10 times a power of ten
pub fn nice_step(span: f64, target_ticks: usize) -> f64 {
    let raw = span / target_ticks.max(1) as f64;
    let magnitude = power_of_ten(raw.log10().floor() as i32);
    let normalized = raw / magnitude;

    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };

    nice * magnitude
}

/// Evenly spaced ticks inside `[min, max]`
pub fn linear_ticks(min: f64, max: f64, target_ticks: usize) -> Vec<f64> {
    if min.is_nan() || max.is_nan() || max <= min {
        return vec![min];
    }

    let step = nice_step(max - min, target_ticks);
    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;

    // Multiply instead of accumulating so ticks carry no drift
    (first..=last).map(|k| k as f64 * step).collect()
}

/// Expand a positive range outward to whole decades
///
/// A minimum that already sits on a power of ten gets one extra decade below
/// it, so a bar at the minimum value still has visible height.
pub fn decade_range(min: f64, max: f64) -> (f64, f64) {
    let low_exp = min.log10().floor() as i32;
    let mut high_exp = max.log10().ceil() as i32;

    let low_exp = if power_of_ten(low_exp) >= min {
        low_exp - 1
    } else {
        low_exp
    };
    if high_exp <= low_exp {
        high_exp = low_exp + 1;
    }

    (power_of_ten(low_exp), power_of_ten(high_exp))
}

/// Major and minor ticks for a log axis over `[min, max]`
pub fn log_ticks(min: f64, max: f64) -> (Vec<f64>, Vec<f64>) {
    let low_exp = min.log10().floor() as i32;
    let high_exp = max.log10().ceil() as i32;

    let mut major = Vec::new();
    let mut minor = Vec::new();

    for exp in low_exp..=high_exp {
        let decade = power_of_ten(exp);
        if in_range(decade, min, max) {
            major.push(decade);
        }
        for m in 2..=9 {
            let value = decade * m as f64;
            if in_range(value, min, max) {
                minor.push(value);
            }
        }
    }

    (major, minor)
}

/// Human-readable tick label
///
/// Axis labels only; magnitudes below 1e-6 switch to exponent form so they
/// never collapse to `0`.
pub fn format_tick(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else if value.abs() < 1e-6 {
        format!("{:e}", value)
    } else {
        // Trim float noise from steps like 0.1 * 3
        let s = format!("{:.6}", value);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

fn power_of_ten(exp: i32) -> f64 {
    // Parsing is correctly rounded; powi may land an ulp off for negative exponents
    format!("1e{}", exp).parse().unwrap_or_else(|_| 10f64.powi(exp))
}

fn in_range(value: f64, min: f64, max: f64) -> bool {
    let eps = (max - min).abs() * 1e-12;
    value >= min - eps && value <= max + eps
}

//! Earnings calculator
//!
//! The calculator section has two sliders: an hourly rate and hours per month.
//! The yearly estimate is a single closed-form expression over the two.

/// Rate at which the efficiency multiplier equals its base value.
const BASE_RATE: f64 = 25.0;
const BASE_MULTIPLIER: f64 = 1.23;
const MULTIPLIER_SLOPE: f64 = 0.006;
/// Fixed hourly overhead subtracted from the effective rate.
const HOURLY_OVERHEAD: f64 = 25.0;
const MONTHS: f64 = 12.0;

/// Monthly earnings for a given hourly `rate` and monthly `hours`.
pub fn monthly_estimate(rate: f64, hours: f64) -> f64 {
    let multiplier = BASE_MULTIPLIER - MULTIPLIER_SLOPE * (rate - BASE_RATE);
    hours * (multiplier * rate - HOURLY_OVERHEAD)
}

/// Yearly earnings shown in the calculator result.
pub fn estimate(rate: f64, hours: f64) -> f64 {
    MONTHS * monthly_estimate(rate, hours)
}

/// Position of `value` in `[min, max]` as a percentage, clamped to 0..=100.
///
/// A zero-width or inverted range yields 0.
pub fn slider_progress(value: f64, min: f64, max: f64) -> f64 {
    let span = max - min;
    if span <= 0.0 || !span.is_finite() {
        return 0.0;
    }
    ((value - min) / span * 100.0).clamp(0.0, 100.0)
}

/// `$` + rounded amount with comma thousands separators (`$12,345`).
///
/// Halves round up, towards positive infinity: `-2.5` becomes `-2`.
pub fn format_currency(amount: f64) -> String {
    let rounded = (amount + 0.5).floor() as i64;
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if rounded < 0 {
        format!("$-{}", grouped)
    } else {
        format!("${}", grouped)
    }
}

//! Unit conversion utilities.
//!
//! Every position and size in a deck is an `i64` count of EMUs (English Metric
//! Units), the native OOXML length unit. These helpers convert from the units
//! callers usually think in.

pub const EMUS_PER_INCH: i64 = 914_400;
pub const EMUS_PER_CM: i64 = 360_000;
pub const EMUS_PER_PT: i64 = 12_700;

/// Font sizes are written in hundredths of a point.
pub const CENTIPOINTS_PER_PT: f64 = 100.0;

/// Convert inches to EMUs, rounding to the nearest unit.
///
/// ```
/// use deckforge::common::unit::inches;
/// assert_eq!(inches(1.0), 914_400);
/// assert_eq!(inches(0.5), 457_200);
/// ```
#[inline]
pub fn inches(value: f64) -> i64 {
    (value * EMUS_PER_INCH as f64).round() as i64
}

/// Convert typographic points to EMUs.
#[inline]
pub fn points(value: f64) -> i64 {
    (value * EMUS_PER_PT as f64).round() as i64
}

/// Convert centimeters to EMUs.
#[inline]
pub fn cm(value: f64) -> i64 {
    (value * EMUS_PER_CM as f64).round() as i64
}

#[inline]
pub fn emu_to_inches(emu: i64) -> f64 {
    emu as f64 / EMUS_PER_INCH as f64
}

#[inline]
pub fn emu_to_pt(emu: i64) -> f64 {
    emu as f64 / EMUS_PER_PT as f64
}

/// Font size in points to the `sz` attribute value (hundredths of a point).
#[inline]
pub fn pt_to_centipoints(pt: f64) -> i64 {
    (pt * CENTIPOINTS_PER_PT).round() as i64
}

/// Split `total` into `parts` near-equal shares; the remainder goes to the last share.
///
/// Returns an empty vector when `parts` is zero.
pub fn split_evenly(total: i64, parts: usize) -> Vec<i64> {
    if parts == 0 {
        return Vec::new();
    }
    let share = total / parts as i64;
    let mut shares = vec![share; parts];
    if let Some(last) = shares.last_mut() {
        *last += total - share * parts as i64;
    }
    shares
}

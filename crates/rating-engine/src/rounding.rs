//! Rounding rules shared by the calculators.

/// Rounds away from zero: positive values up, negative values down.
pub fn away_from_zero(value: f64) -> i32 {
    if value > 0.0 {
        value.ceil() as i32
    } else if value < 0.0 {
        value.floor() as i32
    } else {
        0
    }
}

/// Rounds to the nearest integer, halves away from zero.
pub fn nearest(value: f64) -> i32 {
    value.round() as i32
}

/// Rounds to two decimal places for display.
pub fn two_places(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

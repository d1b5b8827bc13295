//! Display-precision rounding shared by the simulation modules.

/// Round to one decimal place, the dashboard's percentage precision.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round to two decimal places, used for radii and density fractions.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

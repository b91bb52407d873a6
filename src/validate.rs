//! Provides validators of longitude and latitude, and the truncation.
//!
//! A validator takes anything read as [`Degree`], e.g. `f64` or `&str`.
//! `precision` is the minimum number of digits after the decimal point,
//! 0 requires nothing.
use crate::point::Degree;

fn is_within(value: impl Degree, precision: usize, bound: f64) -> bool {
    let Some(places) = value.decimal_places() else {
        return false;
    };
    let t = value.to_degree();
    t.is_finite() && -bound <= t && t <= bound && precision <= places
}

/// Returns `true` if `value` is a longitude, -180.0 <= and <= 180.0.
///
/// # Example
///
/// ```
/// # use gcjtrans::*;
/// assert!(is_longitude(180.0, 0));
/// assert!(is_longitude(-180.0, 0));
/// assert!(!is_longitude(180.1, 0));
///
/// assert!(is_longitude("116.404", 3));
/// assert!(!is_longitude("116.40", 3));
/// assert!(!is_longitude("east", 0));
/// ```
pub fn is_longitude(value: impl Degree, precision: usize) -> bool {
    is_within(value, precision, 180.0)
}

/// Returns `true` if `value` is a latitude, -90.0 <= and <= 90.0.
///
/// # Example
///
/// ```
/// # use gcjtrans::*;
/// assert!(is_latitude(90.0, 0));
/// assert!(!is_latitude(91.0, 0));
/// assert!(is_latitude("-39.915", 2));
/// ```
pub fn is_latitude(value: impl Degree, precision: usize) -> bool {
    is_within(value, precision, 90.0)
}

/// Returns `true` if both `longitude` and `latitude` are valid.
///
/// # Example
///
/// ```
/// # use gcjtrans::*;
/// assert!(is_coordinate(116.404, 39.915, 0));
/// assert!(!is_coordinate(39.915, 116.404, 0));
/// ```
pub fn is_coordinate(longitude: impl Degree, latitude: impl Degree, precision: usize) -> bool {
    is_latitude(latitude, precision) && is_longitude(longitude, precision)
}

/// Returns `value` floored to `n` decimal places.
///
/// The result is the largest `m / 10^n` not greater than `value`
/// where `m` is an integer, so that it is idempotent.
///
/// # Example
///
/// ```
/// # use gcjtrans::validate::truncate_to_decimals;
/// assert_eq!(truncate_to_decimals(116.4049, 2), 116.4);
/// assert_eq!(truncate_to_decimals(1.15, 2), 1.15);
/// assert_eq!(truncate_to_decimals(-1.155, 2), -1.16);
/// ```
pub fn truncate_to_decimals(value: f64, n: u32) -> f64 {
    let scale = 10f64.powi(i32::try_from(n).unwrap_or(i32::MAX));
    let scaled = value * scale;
    if !scaled.is_finite() {
        return value;
    }

    let mut m = scaled.floor();
    // the scaling may round by 1 ulp
    if (m + 1.0) / scale <= value {
        m += 1.0;
    } else if value < m / scale {
        m -= 1.0;
    }
    m / scale
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_longitude() {
        assert!(is_longitude(180, 0));
        assert!(is_longitude(180.0, 0));
        assert!(is_longitude(-180.0, 0));
        assert!(is_longitude(0.0, 0));
        assert!(!is_longitude(180.1, 0));
        assert!(!is_longitude(-180.1, 0));
        assert!(!is_longitude(f64::NAN, 0));
        assert!(!is_longitude(f64::INFINITY, 0));

        assert!(is_longitude("180", 0));
        assert!(is_longitude("180.000000", 6));
        assert!(!is_longitude("180.1", 0));
        assert!(!is_longitude("", 0));
        assert!(!is_longitude("inf", 0));
    }

    #[test]
    fn test_latitude() {
        assert!(is_latitude(90.0, 0));
        assert!(is_latitude(-90.0, 0));
        assert!(!is_latitude(91.0, 0));
        assert!(!is_latitude(-90.5, 0));
        assert!(is_latitude(String::from("39.915"), 0));
    }

    #[test]
    fn test_precision() {
        assert!(is_longitude(116.404, 3));
        assert!(!is_longitude(116.404, 4));
        assert!(is_longitude(116.0, 0));
        assert!(!is_longitude(116.0, 1));
        assert!(is_latitude(" 39.9150 ", 4));
        assert!(!is_latitude("39", 1));
        assert!(is_coordinate("116.404", "39.915", 3));
        assert!(!is_coordinate("116.404", "39.9", 3));
    }

    #[test]
    fn test_coordinate() {
        assert!(is_coordinate(116.404, 39.915, 0));
        assert!(!is_coordinate(116.404, 99.0, 0));
        assert!(!is_coordinate(200.0, 39.915, 0));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate_to_decimals(1.29, 1), 1.2);
        assert_eq!(truncate_to_decimals(2.675, 2), 2.67);
        assert_eq!(truncate_to_decimals(1.005, 2), 1.0);
        assert_eq!(truncate_to_decimals(116.404, 0), 116.0);
        assert_eq!(truncate_to_decimals(-0.29, 1), -0.3);
        assert!(truncate_to_decimals(f64::NAN, 2).is_nan());
        assert_eq!(truncate_to_decimals(f64::INFINITY, 2), f64::INFINITY);
        assert_eq!(truncate_to_decimals(1.5, 400), 1.5);
        assert_eq!(truncate_to_decimals(1.5, i32::MAX as u32 + 1), 1.5);
        assert_eq!(truncate_to_decimals(-116.404, u32::MAX), -116.404);
    }

    #[test]
    fn test_truncate_idempotence() {
        let mut x = -200.0;
        while x < 200.0 {
            for n in [0, 1, 2, 3, 6] {
                let t = truncate_to_decimals(x, n);
                assert_eq!(truncate_to_decimals(t, n), t, "{x} {n}");
                assert!(t <= x, "{x} {n}");
            }
            x += 0.0173;
        }
    }
}

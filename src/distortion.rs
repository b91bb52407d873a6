//! Provides the empirical distortion series of GCJ-02.
//!
//! The series are evaluated on the offsets from (105.0, 35.0) \[deg\],
//! and their residuals have the unit of length on the ellipsoid,
//! see [`offset`] for the rescale into degree.
use crate::constants::{EARTH_RADIUS, EE, ORIGIN_LATITUDE, ORIGIN_LONGITUDE, PI};
use crate::mul_add;

/// The three sinusoidal bands of both series.
///
/// The first band always runs on the longitude offset `x`,
/// the others run on `t` with the amplitudes `short` and `long`.
#[inline]
fn bands(x: f64, t: f64, short: (f64, f64), long: (f64, f64)) -> f64 {
    let mut ret = (20.0 * (6.0 * x * PI).sin() + 20.0 * (2.0 * x * PI).sin()) * 2.0 / 3.0;
    ret += (short.0 * (t * PI).sin() + short.1 * (t / 3.0 * PI).sin()) * 2.0 / 3.0;
    ret += (long.0 * (t / 12.0 * PI).sin() + long.1 * (t * PI / 30.0).sin()) * 2.0 / 3.0;
    ret
}

/// Returns the latitude residual at the offset (`d_lng`, `d_lat`).
///
/// # Example
///
/// ```
/// # use gcjtrans::distortion::lat_residual;
/// assert_eq!(lat_residual(0.0, 0.0), -100.0);
/// ```
pub fn lat_residual(d_lng: f64, d_lat: f64) -> f64 {
    let poly = -100.0
        + 2.0 * d_lng
        + 3.0 * d_lat
        + mul_add!(0.2 * d_lat, d_lat, 0.1 * d_lng * d_lat)
        + 0.2 * d_lng.abs().sqrt();
    poly + bands(d_lng, d_lat, (20.0, 40.0), (160.0, 320.0))
}

/// Returns the longitude residual at the offset (`d_lng`, `d_lat`).
///
/// # Example
///
/// ```
/// # use gcjtrans::distortion::lng_residual;
/// assert_eq!(lng_residual(0.0, 0.0), 300.0);
/// ```
pub fn lng_residual(d_lng: f64, d_lat: f64) -> f64 {
    let poly = 300.0
        + d_lng
        + 2.0 * d_lat
        + mul_add!(0.1 * d_lng, d_lng, 0.1 * d_lng * d_lat)
        + 0.1 * d_lng.abs().sqrt();
    poly + bands(d_lng, d_lng, (20.0, 40.0), (150.0, 300.0))
}

/// Returns the forward offset (longitude, latitude) \[deg\] of GCJ-02 at (`lng`, `lat`).
///
/// The residuals are rescaled by the meridian and the prime vertical radii of curvature.
///
/// # Example
///
/// ```
/// # use gcjtrans::distortion::offset;
/// let (d_lng, d_lat) = offset(116.404, 39.915);
/// assert!(0.0 < d_lng && d_lng < 0.01);
/// assert!(0.0 < d_lat && d_lat < 0.01);
/// ```
pub fn offset(lng: f64, lat: f64) -> (f64, f64) {
    let x = lng - ORIGIN_LONGITUDE;
    let y = lat - ORIGIN_LATITUDE;

    let d_lat = lat_residual(x, y);
    let d_lng = lng_residual(x, y);

    let rad_lat = lat / 180.0 * PI;
    let magic = rad_lat.sin();
    let magic = 1.0 - EE * magic * magic;
    let sqrt_magic = magic.sqrt();

    let d_lat = (d_lat * 180.0) / ((EARTH_RADIUS * (1.0 - EE)) / (magic * sqrt_magic) * PI);
    let d_lng = (d_lng * 180.0) / (EARTH_RADIUS / sqrt_magic * rad_lat.cos() * PI);

    (d_lng, d_lat)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_residual_at_origin() {
        // every sine vanishes at the origin
        assert_eq!(lat_residual(0.0, 0.0), -100.0);
        assert_eq!(lng_residual(0.0, 0.0), 300.0);
    }

    #[test]
    fn test_residual() {
        // Beijing, the offset (11.407387, 4.904179)
        let x: f64 = 116.407387 - 105.0;
        let y: f64 = 39.904179 - 35.0;

        let expected = -100.0
            + 2.0 * x
            + 3.0 * y
            + 0.2 * y * y
            + 0.1 * x * y
            + 0.2 * x.abs().sqrt()
            + (20.0 * (6.0 * x * PI).sin() + 20.0 * (2.0 * x * PI).sin()) * 2.0 / 3.0
            + (20.0 * (y * PI).sin() + 40.0 * (y / 3.0 * PI).sin()) * 2.0 / 3.0
            + (160.0 * (y / 12.0 * PI).sin() + 320.0 * (y * PI / 30.0).sin()) * 2.0 / 3.0;
        assert!((lat_residual(x, y) - expected).abs() < 1e-9);

        let expected = 300.0
            + x
            + 2.0 * y
            + 0.1 * x * x
            + 0.1 * x * y
            + 0.1 * x.abs().sqrt()
            + (20.0 * (6.0 * x * PI).sin() + 20.0 * (2.0 * x * PI).sin()) * 2.0 / 3.0
            + (20.0 * (x * PI).sin() + 40.0 * (x / 3.0 * PI).sin()) * 2.0 / 3.0
            + (150.0 * (x / 12.0 * PI).sin() + 300.0 * (x / 30.0 * PI).sin()) * 2.0 / 3.0;
        assert!((lng_residual(x, y) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_offset() {
        let (d_lng, d_lat) = offset(114.304569, 30.593354);
        assert!((d_lng - 0.005443).abs() < 2e-6);
        assert!((d_lat + 0.002411).abs() < 2e-6);
    }

    #[test]
    fn test_nan() {
        let (d_lng, d_lat) = offset(f64::NAN, 35.0);
        assert!(d_lng.is_nan());
        assert!(d_lat.is_nan());
    }
}

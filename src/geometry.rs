//! Provides the distance and the bearing on the sphere.
use crate::constants::{EARTH_RADIUS, PI};
use crate::Point;

#[inline]
fn to_radians(degree: f64) -> f64 {
    degree * PI / 180.0
}

/// Returns the great-circle distance \[m\] between `a` and `b` by the haversine formula.
///
/// The sphere has the radius [`EARTH_RADIUS`].
///
/// # Example
///
/// ```
/// # use gcjtrans::*;
/// let beijing = Point::new(116.407387, 39.904179);
/// let shanghai = Point::new(121.4737, 31.2304);
///
/// let d = distance(&beijing, &shanghai);
/// assert!(1_050_000.0 < d && d < 1_090_000.0);
/// assert_eq!(distance(&beijing, &beijing), 0.0);
/// ```
pub fn distance(a: &Point, b: &Point) -> f64 {
    let lat_a = to_radians(a.latitude);
    let lat_b = to_radians(b.latitude);
    let d_lat = lat_b - lat_a;
    let d_lng = to_radians(b.longitude - a.longitude);

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lng / 2.0).sin().powi(2);

    // clamp against the rounding of antipodes, NaN passes through
    2.0 * EARTH_RADIUS * h.clamp(0.0, 1.0).sqrt().asin()
}

/// Returns [`distance`] rounded to 4 decimal places \[m\].
///
/// # Example
///
/// ```
/// # use gcjtrans::*;
/// let d = distance_rounded(&Point::new(0.0, 0.0), &Point::new(0.0, 1.0));
/// assert_eq!(d, 111319.4908);
/// ```
pub fn distance_rounded(a: &Point, b: &Point) -> f64 {
    (distance(a, b) * 1e4).round() / 1e4
}

/// Returns the initial bearing \[deg\] from `a` toward `b`, clockwise from the north.
///
/// The result satisfies 0.0 <= and < 360.0.
///
/// # Example
///
/// ```
/// # use gcjtrans::*;
/// let origin = Point::new(0.0, 0.0);
/// assert_eq!(bearing(&origin, &Point::new(0.0, 1.0)), 0.0);
/// assert_eq!(bearing(&origin, &Point::new(1.0, 0.0)), 90.0);
/// ```
pub fn bearing(a: &Point, b: &Point) -> f64 {
    let lat_a = to_radians(a.latitude);
    let lat_b = to_radians(b.latitude);
    let d_lng = to_radians(b.longitude - a.longitude);

    let y = d_lng.sin() * lat_b.cos();
    let x = lat_a.cos() * lat_b.sin() - lat_a.sin() * lat_b.cos() * d_lng.cos();

    let theta = y.atan2(x) * 180.0 / PI;
    (theta + 360.0) % 360.0
}

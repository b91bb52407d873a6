//! Provides the conversions between WGS-84, GCJ-02 and BD-09.
//!
//! Every conversion is total, it takes anything read as [`Degree`]
//! and NaN propagates to the result.
//!
//! The WGS-84 and GCJ-02 conversions are no-op outside China,
//! see [`is_outside_china`].
use log::trace;

use crate::china::is_outside_china;
use crate::constants::{BD09_SHIFT, X_PI};
use crate::distortion::offset;
use crate::error::ErrorAxis;
use crate::point::Degree;
use crate::{Error, Point, Result};

/// Converts a BD-09 position into GCJ-02.
///
/// # Example
///
/// ```
/// # use gcjtrans::*;
/// let gcj = bd09_to_gcj02(116.404, 39.915);
/// assert!((gcj.longitude() - 116.404 + 0.0065).abs() < 0.002);
/// assert!((gcj.latitude() - 39.915 + 0.006).abs() < 0.002);
/// ```
pub fn bd09_to_gcj02(longitude: impl Degree, latitude: impl Degree) -> Point {
    let x = longitude.to_degree() - BD09_SHIFT.0;
    let y = latitude.to_degree() - BD09_SHIFT.1;

    let z = x.hypot(y) - 0.00002 * (y * X_PI).sin();
    let theta = y.atan2(x) - 0.000003 * (x * X_PI).cos();

    Point::new(z * theta.cos(), z * theta.sin())
}

/// Converts a GCJ-02 position into BD-09.
///
/// # Example
///
/// ```
/// # use gcjtrans::*;
/// let bd = gcj02_to_bd09(114.304569, 30.593354);
/// assert!((bd.longitude() - 114.311152).abs() < 1e-6);
/// assert!((bd.latitude() - 30.599019).abs() < 1e-6);
/// ```
pub fn gcj02_to_bd09(longitude: impl Degree, latitude: impl Degree) -> Point {
    let x = longitude.to_degree();
    let y = latitude.to_degree();

    let z = x.hypot(y) + 0.00002 * (y * X_PI).sin();
    let theta = y.atan2(x) + 0.000003 * (x * X_PI).cos();

    Point::new(
        z * theta.cos() + BD09_SHIFT.0,
        z * theta.sin() + BD09_SHIFT.1,
    )
}

/// Converts a WGS-84 position into GCJ-02.
///
/// This returns the input as is, if it is outside China.
///
/// # Example
///
/// ```
/// # use gcjtrans::*;
/// let gcj = wgs84_to_gcj02(116.407387, 39.904179);
/// assert!((gcj.longitude() - 116.413629).abs() < 2e-6);
/// assert!((gcj.latitude() - 39.905582).abs() < 2e-6);
///
/// // Tokyo
/// assert_eq!(wgs84_to_gcj02(139.6917, 35.6895), Point::new(139.6917, 35.6895));
/// ```
pub fn wgs84_to_gcj02(longitude: impl Degree, latitude: impl Degree) -> Point {
    let lng = longitude.to_degree();
    let lat = latitude.to_degree();

    if is_outside_china(lng, lat) {
        return Point::new(lng, lat);
    }

    let (d_lng, d_lat) = offset(lng, lat);
    Point::new(lng + d_lng, lat + d_lat)
}

/// Converts a GCJ-02 position into WGS-84 approximately.
///
/// The offset is evaluated on the given GCJ-02 position, not on the unknown WGS-84 one,
/// hence the round trip with [`wgs84_to_gcj02`] has the error up to about 1e-5 \[deg\].
/// Use [`gcj02_to_wgs84_exact`] for the refined one.
///
/// This returns the input as is, if it is outside China.
///
/// # Example
///
/// ```
/// # use gcjtrans::*;
/// let wgs = gcj02_to_wgs84(116.413629, 39.905582);
/// assert!((wgs.longitude() - 116.407387).abs() < 1e-4);
/// assert!((wgs.latitude() - 39.904179).abs() < 1e-4);
/// ```
pub fn gcj02_to_wgs84(longitude: impl Degree, latitude: impl Degree) -> Point {
    let lng = longitude.to_degree();
    let lat = latitude.to_degree();

    if is_outside_china(lng, lat) {
        return Point::new(lng, lat);
    }

    let (d_lng, d_lat) = offset(lng, lat);
    Point::new(lng * 2.0 - (lng + d_lng), lat * 2.0 - (lat + d_lat))
}

/// Converts a GCJ-02 position into WGS-84 by the fixed-point iteration.
///
/// The iteration starts from [`gcj02_to_wgs84`],
/// and it stops when [`wgs84_to_gcj02`] of the current estimation
/// hits `point` within `criteria` \[deg\] on both axes.
///
/// # Errors
///
/// If `point` has NaN, or the error is still higher than `criteria`
/// after `max_iteration` updates.
///
/// # Example
///
/// ```
/// # use gcjtrans::*;
/// # fn main() -> Result<()> {
/// let gcj = Point::new(116.413629, 39.905582);
/// let wgs = gcj02_to_wgs84_exact(&gcj, 1e-9, 10)?;
/// assert!((wgs.longitude() - 116.407387).abs() < 1e-6);
/// assert!((wgs.latitude() - 39.904179).abs() < 1e-6);
/// # Ok(())}
/// ```
pub fn gcj02_to_wgs84_exact(point: &Point, criteria: f64, max_iteration: usize) -> Result<Point> {
    if point.longitude.is_nan() {
        return Err(Error::new_nan(ErrorAxis::Longitude));
    }
    if point.latitude.is_nan() {
        return Err(Error::new_nan(ErrorAxis::Latitude));
    }

    let mut current = gcj02_to_wgs84(point.longitude, point.latitude);

    for iteration in 0..=max_iteration {
        let forward = wgs84_to_gcj02(current.longitude, current.latitude);
        let d_lng = forward.longitude - point.longitude;
        let d_lat = forward.latitude - point.latitude;

        trace!("iteration {iteration}: error ({d_lng:e}, {d_lat:e})");

        if d_lng.abs() < criteria && d_lat.abs() < criteria {
            return Ok(current);
        }
        if iteration == max_iteration {
            break;
        }

        current = Point::new(current.longitude - d_lng, current.latitude - d_lat);
    }

    Err(Error::new_not_convergent(
        current.longitude,
        current.latitude,
        criteria,
        max_iteration,
    ))
}

/// Converts a WGS-84 position into BD-09 through GCJ-02.
///
/// # Example
///
/// ```
/// # use gcjtrans::*;
/// let bd = wgs84_to_bd09(114.304569, 30.593354);
/// assert!((bd.longitude() - 114.316583).abs() < 2e-6);
/// assert!((bd.latitude() - 30.596644).abs() < 2e-6);
/// ```
pub fn wgs84_to_bd09(longitude: impl Degree, latitude: impl Degree) -> Point {
    let gcj = wgs84_to_gcj02(longitude, latitude);
    gcj02_to_bd09(gcj.longitude, gcj.latitude)
}

/// Converts a BD-09 position into WGS-84 through GCJ-02, approximately.
///
/// see [`gcj02_to_wgs84`] for the accuracy.
pub fn bd09_to_wgs84(longitude: impl Degree, latitude: impl Degree) -> Point {
    let gcj = bd09_to_gcj02(longitude, latitude);
    gcj02_to_wgs84(gcj.longitude, gcj.latitude)
}

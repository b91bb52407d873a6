//! # gcjtrans
//!
//! Coordinate transformer between WGS-84, GCJ-02 and BD-09,
//! the coordinate reference systems used by mapping in China [^1].
//!
//! 提供 WGS-84（GPS）、GCJ-02（火星坐标系）与 BD-09（百度坐标系）之间的坐标转换。
//!
//! ```
//! use gcjtrans::{gcj02_to_bd09, gcj02_to_wgs84, wgs84_to_gcj02, Point};
//!
//! // Tiananmen in WGS-84
//! let origin = Point::new(116.397128, 39.916527);
//!
//! // Perform forward transformation resulting a Point in GCJ-02
//! let gcj = wgs84_to_gcj02(*origin.longitude(), *origin.latitude());
//! // Prints GCJ-02: Point { longitude: 116.40337..., latitude: 39.91793... }
//! println!("GCJ-02: {gcj:?}");
//!
//! // GCJ-02 into BD-09
//! let bd = gcj02_to_bd09(*gcj.longitude(), *gcj.latitude());
//! println!("BD-09: {bd:?}");
//!
//! // Perform (approximate) backward transformation
//! let wgs = gcj02_to_wgs84(*gcj.longitude(), *gcj.latitude());
//! assert!((wgs.longitude() - origin.longitude()).abs() < 1e-4);
//! assert!((wgs.latitude() - origin.latitude()).abs() < 1e-4);
//!
//! // Out of China, it does nothing
//! let tokyo = wgs84_to_gcj02(139.6917, 35.6895);
//! assert_eq!(tokyo, Point::new(139.6917, 35.6895));
//! ```
//!
//! Numbers and numeric text are accepted alike,
//! text not a number becomes NaN and propagates silently.
//! Use [`Point::try_coerce`] and [`validate`] when strictness is required.
//!
//! ```
//! use gcjtrans::{bd09_to_gcj02, is_coordinate};
//!
//! assert!(is_coordinate("116.404", "39.915", 0));
//! let gcj = bd09_to_gcj02("116.404", "39.915");
//! assert!(gcj.longitude().is_finite());
//! ```
//!
//! Features:
//!
//! - Offline, pure functions, no state
//! - The WGS-84 and GCJ-02 conversions are gated by the bundled China boundary
//! - Verified backward transformation [`gcj02_to_wgs84_exact`]
//! - Point-in-polygon with border handling, haversine distance and bearing
//! - It depends on [`log`][log] and [`serde_json`][serde_json] crates,
//!   and on [`serde`][serde] crate only if `serde` feature on
//!
//! [log]: https://crates.io/crates/log
//! [serde_json]: https://crates.io/crates/serde_json
//! [serde]: https://crates.io/crates/serde
//!
//! [^1]: The algorithm of GCJ-02 is not disclosed,
//!       the series used here is the widely known empirical approximation.

#[doc(inline)]
pub use china::{is_in_china, is_outside_china};
#[doc(inline)]
pub use convert::{
    bd09_to_gcj02, bd09_to_wgs84, gcj02_to_bd09, gcj02_to_wgs84, gcj02_to_wgs84_exact,
    wgs84_to_bd09, wgs84_to_gcj02,
};
#[doc(inline)]
pub use crs::{transform, Crs};
#[doc(inline)]
pub use error::{Error, Result};
#[doc(inline)]
pub use geometry::{bearing, distance, distance_rounded};
#[doc(inline)]
pub use point::Point;
#[doc(inline)]
pub use polygon::{is_point_in_polygon, point_in_polygon, Mode};
#[doc(inline)]
pub use validate::{is_coordinate, is_latitude, is_longitude};

pub mod china;
pub mod constants;
pub mod convert;
pub mod crs;
pub mod distortion;
pub mod error;
pub mod geometry;
mod internal;
pub mod point;
pub mod polygon;
pub mod validate;

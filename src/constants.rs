//! Provides numeric constants.

/// The Earth radius \[m\].
///
/// It is used by both the distortion rescale and the haversine distance.
pub const EARTH_RADIUS: f64 = 6378137.0;

/// The circle ratio.
pub const PI: f64 = std::f64::consts::PI;

/// The squared eccentricity of the ellipsoid.
pub const EE: f64 = 0.006_693_421_622_965_943;

/// The angular factor of the BD-09 polar perturbation, PI * 3000 / 180.
pub const X_PI: f64 = PI * 3000.0 / 180.0;

/// The linear shift between GCJ-02 and BD-09, (longitude, latitude) \[deg\].
pub const BD09_SHIFT: (f64, f64) = (0.0065, 0.006);

/// The default tolerance of [`point_in_polygon`](crate::polygon::point_in_polygon).
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// The tolerance used on the country boundary test.
pub const BOUNDARY_TOLERANCE: f64 = 2e-10;

/// The reference longitude of the distortion series \[deg\].
pub(crate) const ORIGIN_LONGITUDE: f64 = 105.0;

/// The reference latitude of the distortion series \[deg\].
pub(crate) const ORIGIN_LATITUDE: f64 = 35.0;

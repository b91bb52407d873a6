//! Provides point-in-polygon tests, [`Polygon`] and [`Region`].
//!
//! Two tests are provided.
//! [`point_in_polygon`] distinguishes the interior and the border by [`Mode`],
//! whereas [`Polygon::contains`] always counts the border as inside,
//! which is used for the country boundary.
//! Both agree on the even-odd rule off the border.
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::{BOUNDARY_TOLERANCE, DEFAULT_TOLERANCE};
use crate::error::ErrorAxis;
use crate::{Error, Point, Result};

/// The membership to test by [`point_in_polygon`].
///
/// # Example
///
/// ```
/// # use gcjtrans::polygon::Mode;
/// assert_eq!("inside-border".parse::<Mode>().unwrap(), Mode::InsideBorder);
/// assert_eq!(Mode::Border.to_string(), "border");
/// assert_eq!(Mode::default(), Mode::InsideBorder);
/// ```
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Mode {
    /// The strict interior, the border is outside.
    Inside,
    /// The border only.
    Border,
    /// The interior and the border.
    #[default]
    InsideBorder,
}

impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Mode::Inside => "inside",
            Mode::Border => "border",
            Mode::InsideBorder => "inside-border",
        };
        f.write_str(s)
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "inside" => Ok(Mode::Inside),
            "border" => Ok(Mode::Border),
            "inside-border" => Ok(Mode::InsideBorder),
            _ => Err(Error::new_parse_mode(s.to_string())),
        }
    }
}

/// Returns `true` if `point` is on the segment from `a` to `b`.
#[inline]
fn on_segment(point: &Point, a: &Point, b: &Point, tolerance: f64) -> bool {
    let (px, py) = (point.longitude - a.longitude, point.latitude - a.latitude);
    let (ex, ey) = (b.longitude - a.longitude, b.latitude - a.latitude);

    let len2 = ex * ex + ey * ey;
    if len2 == 0.0 {
        // duplicated vertex
        return px.abs() <= tolerance && py.abs() <= tolerance;
    }

    let cross = px * ey - py * ex;
    if cross.abs() > tolerance {
        return false;
    }

    let dot = px * ex + py * ey;
    0.0 <= dot && dot <= len2
}

/// Iterates edges (`ring[i]`, `ring[i - 1]`), the last one closes the ring.
#[inline]
fn edges(ring: &[Point]) -> impl Iterator<Item = (&Point, &Point)> {
    let prev = ring.iter().cycle().skip(ring.len() - 1);
    ring.iter().zip(prev)
}

/// The even-odd ray-casting toward the positive longitude.
fn crossing(point: &Point, ring: &[Point]) -> bool {
    let (x, y) = (point.longitude, point.latitude);

    edges(ring).fold(false, |inside, (a, b)| {
        if (a.latitude > y) != (b.latitude > y)
            && x < (b.longitude - a.longitude) * (y - a.latitude) / (b.latitude - a.latitude)
                + a.longitude
        {
            !inside
        } else {
            inside
        }
    })
}

/// Returns `true` if `point` is in `ring` under `mode`.
///
/// `ring` is the sequence of vertices, the first and the last are connected implicitly.
/// A point is on the border when the cross product against an edge is within `tolerance`
/// and the projection falls on the edge.
///
/// This returns `false` when `ring` has less than three vertices.
///
/// # Example
///
/// ```
/// # use gcjtrans::*;
/// # use gcjtrans::polygon::{point_in_polygon, Mode};
/// let ring = [
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 1.0),
///     Point::new(1.0, 1.0),
///     Point::new(1.0, 0.0),
/// ];
///
/// let center = Point::new(0.5, 0.5);
/// assert!(point_in_polygon(&center, &ring, Mode::Inside, 1e-9));
/// assert!(!point_in_polygon(&center, &ring, Mode::Border, 1e-9));
///
/// let corner = Point::new(0.0, 0.0);
/// assert!(!point_in_polygon(&corner, &ring, Mode::Inside, 1e-9));
/// assert!(point_in_polygon(&corner, &ring, Mode::Border, 1e-9));
/// assert!(point_in_polygon(&corner, &ring, Mode::InsideBorder, 1e-9));
/// ```
pub fn point_in_polygon(point: &Point, ring: &[Point], mode: Mode, tolerance: f64) -> bool {
    if ring.len() < 3 {
        return false;
    }

    let on_border = edges(ring).any(|(a, b)| on_segment(point, a, b, tolerance));

    match mode {
        Mode::Border => on_border,
        Mode::InsideBorder => on_border || crossing(point, ring),
        Mode::Inside => !on_border && crossing(point, ring),
    }
}

/// Returns `true` if `point` is in `ring` or on its border.
///
/// This is [`point_in_polygon`] with [`Mode::InsideBorder`] and
/// [`DEFAULT_TOLERANCE`].
pub fn is_point_in_polygon(point: &Point, ring: &[Point]) -> bool {
    point_in_polygon(point, ring, Mode::default(), DEFAULT_TOLERANCE)
}

/// Returns `true` if `point` is in `ring`, the border included.
///
/// Vertices, horizontal edges and crossings are matched within [`BOUNDARY_TOLERANCE`].
/// A ray through a vertex counts by the half-open rule,
/// namely twice (no change) when it grazes the vertex.
fn ring_contains(point: &Point, ring: &[Point]) -> bool {
    const TOL: f64 = BOUNDARY_TOLERANCE;

    if ring.len() < 3 {
        return false;
    }

    let (x, y) = (point.longitude, point.latitude);
    let mut inside = false;

    for (a, b) in edges(ring) {
        let (xa, ya) = (a.longitude, a.latitude);
        let (xb, yb) = (b.longitude, b.latitude);

        if (x - xa).abs() <= TOL && (y - ya).abs() <= TOL {
            return true;
        }

        // horizontal edge
        if (ya - yb).abs() <= TOL
            && (y - ya).abs() <= TOL
            && xa.min(xb) - TOL <= x
            && x <= xa.max(xb) + TOL
        {
            return true;
        }

        if (ya > y) != (yb > y) {
            let cross = xa + (y - ya) * (xb - xa) / (yb - ya);
            if (x - cross).abs() <= TOL {
                return true;
            }
            if x < cross {
                inside = !inside;
            }
        }
    }

    inside
}

/// A closed ring of [`Point`]s with its bounding box.
///
/// # Example
///
/// ```
/// # use gcjtrans::*;
/// # use gcjtrans::polygon::Polygon;
/// # fn main() -> Result<()> {
/// let polygon = Polygon::try_new(vec![
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 1.0),
///     Point::new(1.0, 1.0),
///     Point::new(1.0, 0.0),
/// ])?;
///
/// assert!(polygon.contains(&Point::new(0.5, 0.5)));
/// assert!(polygon.contains(&Point::new(0.0, 0.0)));
/// assert!(!polygon.contains(&Point::new(1.5, 0.5)));
///
/// // less than three vertices
/// assert!(Polygon::try_new(vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)]).is_err());
/// # Ok(())}
/// ```
#[derive(Debug, PartialEq, Clone)]
pub struct Polygon {
    ring: Vec<Point>,
    /// (west, south, east, north)
    bbox: (f64, f64, f64, f64),
}

impl Polygon {
    /// Makes a [`Polygon`].
    ///
    /// This does not check the ring, a degenerate ring contains nothing.
    pub fn new(ring: Vec<Point>) -> Self {
        let bbox = ring.iter().fold(
            (f64::INFINITY, f64::INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
            |(w, s, e, n), p| {
                (
                    w.min(p.longitude),
                    s.min(p.latitude),
                    e.max(p.longitude),
                    n.max(p.latitude),
                )
            },
        );
        Self { ring, bbox }
    }

    /// Makes a [`Polygon`] with checking.
    ///
    /// # Errors
    ///
    /// If `ring` has less than three vertices or a vertex has NaN.
    pub fn try_new(ring: Vec<Point>) -> Result<Self> {
        if ring.len() < 3 {
            return Err(Error::new_degenerate_polygon(ring.len()));
        }
        if ring.iter().any(|p| p.longitude.is_nan()) {
            return Err(Error::new_nan(ErrorAxis::Longitude));
        }
        if ring.iter().any(|p| p.latitude.is_nan()) {
            return Err(Error::new_nan(ErrorAxis::Latitude));
        }
        Ok(Self::new(ring))
    }

    /// Returns the vertices.
    pub fn ring(&self) -> &[Point] {
        &self.ring
    }

    /// Returns `true` if `point` is inside or on the border of `self`.
    pub fn contains(&self, point: &Point) -> bool {
        let (w, s, e, n) = self.bbox;
        let tol = BOUNDARY_TOLERANCE;
        if point.longitude < w - tol
            || e + tol < point.longitude
            || point.latitude < s - tol
            || n + tol < point.latitude
        {
            return false;
        }
        ring_contains(point, &self.ring)
    }

    /// see [`point_in_polygon`].
    pub fn test_point(&self, point: &Point, mode: Mode, tolerance: f64) -> bool {
        point_in_polygon(point, &self.ring, mode, tolerance)
    }
}

/// A set of [`Polygon`]s, e.g. the mainland and islands.
///
/// Rings of a GeoJSON polygon, including holes, are taken as separate polygons.
///
/// # Example
///
/// ```
/// # use gcjtrans::*;
/// # use gcjtrans::polygon::Region;
/// # fn main() -> Result<()> {
/// let region = Region::from_geojson(r#"{
///     "type": "Feature",
///     "properties": {},
///     "geometry": {
///         "type": "MultiPolygon",
///         "coordinates": [
///             [[[0, 0], [0, 1], [1, 1], [1, 0], [0, 0]]],
///             [[[2, 0], [2, 1], [3, 1], [3, 0], [2, 0]]]
///         ]
///     }
/// }"#)?;
///
/// assert_eq!(region.polygons().len(), 2);
/// assert!(region.contains(&Point::new(2.5, 0.5)));
/// assert!(!region.contains(&Point::new(1.5, 0.5)));
/// # Ok(())}
/// ```
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Region {
    polygons: Vec<Polygon>,
}

impl Region {
    /// Makes a [`Region`].
    pub fn new(polygons: Vec<Polygon>) -> Self {
        Self { polygons }
    }

    /// Returns the polygons.
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// Returns `true` if any polygon contains `point`.
    pub fn contains(&self, point: &Point) -> bool {
        self.polygons.iter().any(|polygon| polygon.contains(point))
    }

    /// Makes a [`Region`] from GeoJSON text.
    ///
    /// It accepts FeatureCollection, Feature, MultiPolygon and Polygon,
    /// positions are in \[longitude, latitude\] order.
    ///
    /// # Errors
    ///
    /// If `s` is not GeoJSON, has other geometries, or has a degenerate ring.
    pub fn from_geojson(s: &str) -> Result<Self> {
        let value: Value =
            serde_json::from_str(s).map_err(|e| Error::new_invalid_boundary(e.to_string()))?;

        let mut polygons = Vec::new();
        collect(&value, &mut polygons)?;

        if polygons.is_empty() {
            return Err(Error::new_invalid_boundary("no ring found".to_string()));
        }

        Ok(Self::new(polygons))
    }
}

fn invalid(reason: &str) -> Error {
    Error::new_invalid_boundary(reason.to_string())
}

fn to_polygon(ring: Vec<Vec<f64>>) -> Result<Polygon> {
    let ring = ring
        .into_iter()
        .map(|position| match position[..] {
            [longitude, latitude, ..] => Ok(Point::new(longitude, latitude)),
            _ => Err(invalid("position must have longitude and latitude")),
        })
        .collect::<Result<Vec<_>>>()?;
    Polygon::try_new(ring)
}

fn collect(value: &Value, polygons: &mut Vec<Polygon>) -> Result<()> {
    let member = |key: &str| value.get(key).ok_or_else(|| invalid(&format!("'{key}' not found")));
    let coordinates = || -> Result<Value> { member("coordinates").cloned() };

    match value.get("type").and_then(Value::as_str) {
        Some("FeatureCollection") => {
            let features = member("features")?
                .as_array()
                .ok_or_else(|| invalid("'features' must be an array"))?;
            for feature in features {
                collect(feature, polygons)?;
            }
        }
        Some("Feature") => collect(member("geometry")?, polygons)?,
        Some("Polygon") => {
            let rings: Vec<Vec<Vec<f64>>> = serde_json::from_value(coordinates()?)
                .map_err(|e| Error::new_invalid_boundary(e.to_string()))?;
            for ring in rings {
                polygons.push(to_polygon(ring)?);
            }
        }
        Some("MultiPolygon") => {
            let parts: Vec<Vec<Vec<Vec<f64>>>> = serde_json::from_value(coordinates()?)
                .map_err(|e| Error::new_invalid_boundary(e.to_string()))?;
            for ring in parts.into_iter().flatten() {
                polygons.push(to_polygon(ring)?);
            }
        }
        Some(t) => return Err(invalid(&format!("unsupported type '{t}'"))),
        None => return Err(invalid("'type' not found")),
    }

    Ok(())
}

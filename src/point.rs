//! Provides [`Point`] and the numeric coercion [`Degree`].
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ErrorAxis;
use crate::{Error, Result};

/// Returns the normalized latitude into -90.0 <= and <= 90.0.
#[inline]
fn normalize_latitude(t: &f64) -> f64 {
    if t.is_nan() || t.ge(&-90.) && t.le(&90.0) {
        *t
    } else {
        match t % 360.0 {
            s if s.lt(&-270.0) || s.gt(&270.0) => s - f64::copysign(360.0, s),
            s if s.lt(&-90.0) || s.gt(&90.0) => f64::copysign(180.0, s) - s,
            s => s,
        }
    }
}

/// Returns the normalize longitude -180.0 <= and <= 180.0.
#[inline]
fn normalize_longitude(t: &f64) -> f64 {
    if t.is_nan() || t.ge(&-180.0) && t.le(&180.0) {
        *t
    } else {
        match t % 360.0 {
            s if s.lt(&-180.0) || s.gt(&180.0) => s - f64::copysign(360.0, s),
            s => s,
        }
    }
}

/// Counts digits after the decimal point of a plain decimal notation.
fn count_decimal_places(s: &str) -> usize {
    match s.split_once('.') {
        Some((_, fract)) => fract.chars().take_while(char::is_ascii_digit).count(),
        None => 0,
    }
}

/// A value which can be read as an angle in degree.
///
/// Text which is not a number reads as [`NAN`](f64::NAN),
/// the value then propagates through every computation.
///
/// # Example
///
/// ```
/// # use gcjtrans::point::Degree;
/// assert_eq!(116.404_f64.to_degree(), 116.404);
/// assert_eq!("39.915".to_degree(), 39.915);
/// assert_eq!(" -12 ".to_degree(), -12.0);
/// assert!("abc".to_degree().is_nan());
///
/// assert_eq!("39.915".decimal_places(), Some(3));
/// assert_eq!(180_i32.to_degree(), 180.0);
/// assert_eq!("abc".decimal_places(), None);
/// ```
pub trait Degree {
    /// Returns the value in degree.
    fn to_degree(&self) -> f64;

    /// Returns the number of digits after the decimal point,
    /// [`None`] if `self` is not a number.
    fn decimal_places(&self) -> Option<usize>;
}

impl Degree for f64 {
    #[inline]
    fn to_degree(&self) -> f64 {
        *self
    }

    fn decimal_places(&self) -> Option<usize> {
        if self.is_nan() {
            None
        } else {
            // Display of f64 never takes exponent form
            Some(count_decimal_places(&self.to_string()))
        }
    }
}

impl Degree for f32 {
    #[inline]
    fn to_degree(&self) -> f64 {
        *self as f64
    }

    fn decimal_places(&self) -> Option<usize> {
        if self.is_nan() {
            None
        } else {
            Some(count_decimal_places(&self.to_string()))
        }
    }
}

macro_rules! impl_degree_for_integer {
    ($($t:ty),*) => {
        $(
            impl Degree for $t {
                #[inline]
                fn to_degree(&self) -> f64 {
                    *self as f64
                }

                #[inline]
                fn decimal_places(&self) -> Option<usize> {
                    Some(0)
                }
            }
        )*
    };
}

impl_degree_for_integer!(i8, i16, i32, i64, u8, u16, u32, u64);

impl Degree for str {
    fn to_degree(&self) -> f64 {
        self.trim().parse::<f64>().unwrap_or(f64::NAN)
    }

    fn decimal_places(&self) -> Option<usize> {
        let s = self.trim();
        let value = s.parse::<f64>().ok().filter(|v| !v.is_nan())?;
        if s.contains(['e', 'E']) {
            value.decimal_places()
        } else {
            Some(count_decimal_places(s))
        }
    }
}

impl Degree for String {
    #[inline]
    fn to_degree(&self) -> f64 {
        self.as_str().to_degree()
    }

    #[inline]
    fn decimal_places(&self) -> Option<usize> {
        self.as_str().decimal_places()
    }
}

impl<T: Degree + ?Sized> Degree for &T {
    #[inline]
    fn to_degree(&self) -> f64 {
        (**self).to_degree()
    }

    #[inline]
    fn decimal_places(&self) -> Option<usize> {
        (**self).decimal_places()
    }
}

/// Represents a position on the Earth, a pair of longitude and latitude.
///
/// The pair does not know which coordinate reference system it is expressed in,
/// the caller tracks it.
///
/// # Example
///
/// ```
/// # use gcjtrans::*;
/// // Construct
/// let point = Point::new(116.404, 39.915);
/// assert_eq!(point.longitude(), &116.404);
/// assert_eq!(point.latitude(), &39.915);
///
/// // Coerce from text
/// let point = Point::coerce("116.404", "39.915");
/// assert_eq!(point, Point::new(116.404, 39.915));
/// ```
#[derive(Debug, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    /// The longitude \[deg\] of the point
    pub(crate) longitude: f64,
    /// The latitude \[deg\] of the point
    pub(crate) latitude: f64,
}

impl From<(f64, f64)> for Point {
    /// see [`Point::new()`], the order is (longitude, latitude)
    fn from(rhs: (f64, f64)) -> Self {
        Self::new(rhs.0, rhs.1)
    }
}

impl From<[f64; 2]> for Point {
    /// see [`Point::new()`], the order is \[longitude, latitude\] as GeoJSON
    fn from(rhs: [f64; 2]) -> Self {
        Self::new(rhs[0], rhs[1])
    }
}

impl From<Point> for (f64, f64) {
    fn from(value: Point) -> Self {
        (value.longitude, value.latitude)
    }
}

impl Point {
    /// Makes a [`Point`].
    ///
    /// This does not check the value range.
    ///
    /// # Example
    ///
    /// ```
    /// # use gcjtrans::*;
    /// let point = Point::new(116.404, 39.915);
    /// assert_eq!(point.longitude(), &116.404);
    /// assert_eq!(point.latitude(), &39.915);
    /// ```
    pub const fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// Makes a [`Point`] with checking.
    ///
    /// # Errors
    ///
    /// If `longitude` and/or `latitude` is NaN or out-of-range,
    /// `longitude` must satisfy -180.0 <= and <= 180.0
    /// and `latitude` does -90.0 <= and <= 90.0.
    ///
    /// # Example
    ///
    /// ```
    /// # use gcjtrans::*;
    /// # fn main() -> Result<()> {
    /// let point = Point::try_new(116.404, 39.915)?;
    /// assert_eq!(point.longitude(), &116.404);
    /// assert_eq!(point.latitude(), &39.915);
    ///
    /// // If out-of-range, returns Err
    /// assert!(Point::try_new(181.0, 35.0).is_err());
    /// assert!(Point::try_new(135.0, 91.0).is_err());
    /// assert!(Point::try_new(f64::NAN, 35.0).is_err());
    /// assert!(Point::try_new(135.0, f64::NAN).is_err());
    /// # Ok(())}
    /// ```
    pub fn try_new(longitude: f64, latitude: f64) -> Result<Self> {
        if longitude.is_nan() {
            return Err(Error::new_nan(ErrorAxis::Longitude));
        };
        if longitude.lt(&-180.) || 180.0.lt(&longitude) {
            return Err(Error::new_out_of_range_position(
                ErrorAxis::Longitude,
                -180.0,
                180.0,
            ));
        };
        if latitude.is_nan() {
            return Err(Error::new_nan(ErrorAxis::Latitude));
        };
        if latitude.lt(&-90.) || 90.0.lt(&latitude) {
            return Err(Error::new_out_of_range_position(
                ErrorAxis::Latitude,
                -90.0,
                90.0,
            ));
        };

        Ok(Self::new(longitude, latitude))
    }

    /// Makes a [`Point`] from anything read as [`Degree`].
    ///
    /// This does not check the value, text not a number becomes NaN.
    ///
    /// # Example
    ///
    /// ```
    /// # use gcjtrans::*;
    /// let point = Point::coerce("116.404", 39.915);
    /// assert_eq!(point, Point::new(116.404, 39.915));
    ///
    /// let point = Point::coerce("east", 39.915);
    /// assert!(point.longitude().is_nan());
    /// ```
    pub fn coerce(longitude: impl Degree, latitude: impl Degree) -> Self {
        Self::new(longitude.to_degree(), latitude.to_degree())
    }

    /// Makes a [`Point`] from anything read as [`Degree`] with checking.
    ///
    /// # Errors
    ///
    /// Same as [`Point::try_new`], unparsable text is reported as NaN.
    ///
    /// # Example
    ///
    /// ```
    /// # use gcjtrans::*;
    /// assert!(Point::try_coerce("116.404", "39.915").is_ok());
    /// assert!(Point::try_coerce("east", "39.915").is_err());
    /// ```
    pub fn try_coerce(longitude: impl Degree, latitude: impl Degree) -> Result<Self> {
        Self::try_new(longitude.to_degree(), latitude.to_degree())
    }

    /// Returns the longitude of `self`.
    pub fn longitude(&self) -> &f64 {
        &self.longitude
    }

    /// Returns the latitude of `self`.
    pub fn latitude(&self) -> &f64 {
        &self.latitude
    }

    /// Makes a normalized [`Point`] from `self`.
    ///
    /// The result has normalized [`longitude`](Point::longitude)
    /// and [`latitude`](Point::latitude) which value -180.0 <= and <= 180.0,
    /// and -90.0 <= and <= 90.0 respectively.
    ///
    /// # Example
    ///
    /// ```
    /// # use gcjtrans::*;
    /// let point = Point::new(200.0, 100.0);
    ///
    /// assert_eq!(
    ///     point.normalize(),
    ///     Point::new(-160.0, 80.0)
    /// );
    /// ```
    pub fn normalize(&self) -> Self {
        Self {
            longitude: normalize_longitude(&self.longitude),
            latitude: normalize_latitude(&self.latitude),
        }
    }

    /// Returns the great-circle distance \[m\] to `other`, see [`distance`](crate::geometry::distance).
    #[inline]
    pub fn distance_to(&self, other: &Point) -> f64 {
        crate::geometry::distance(self, other)
    }

    /// Returns the initial bearing \[deg\] to `other`, see [`bearing`](crate::geometry::bearing).
    #[inline]
    pub fn bearing_to(&self, other: &Point) -> f64 {
        crate::geometry::bearing(self, other)
    }
}

//! Provides [`Crs`] and [`transform`].
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::convert::{
    bd09_to_gcj02, bd09_to_wgs84, gcj02_to_bd09, gcj02_to_wgs84, wgs84_to_bd09, wgs84_to_gcj02,
};
use crate::{Error, Point, Result};

/// Represents the coordinate reference systems.
///
/// # Example
///
/// ```
/// # use gcjtrans::Crs;
/// assert_eq!("GCJ-02".parse::<Crs>().unwrap(), Crs::GCJ02);
/// assert_eq!("bd09".parse::<Crs>().unwrap(), Crs::BD09);
/// assert_eq!(Crs::WGS84.to_string(), "WGS-84");
/// ```
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Crs {
    /// The geodetic system used by GPS.
    WGS84,
    /// The obfuscated system mandated in China, a.k.a. Mars coordinates.
    GCJ02,
    /// The system used by Baidu Maps, offset from [`Crs::GCJ02`].
    BD09,
}

impl Display for Crs {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Crs::WGS84 => "WGS-84",
            Crs::GCJ02 => "GCJ-02",
            Crs::BD09 => "BD-09",
        };
        f.write_str(s)
    }
}

impl FromStr for Crs {
    type Err = Error;

    /// Makes a [`Crs`] from its name, case-insensitive, hyphen is optional.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().replace('-', "").as_str() {
            "WGS84" => Ok(Crs::WGS84),
            "GCJ02" => Ok(Crs::GCJ02),
            "BD09" => Ok(Crs::BD09),
            _ => Err(Error::new_parse_crs(s.to_string())),
        }
    }
}

/// Transforms `point` expressed in `from` into `to`.
///
/// The conversion from [`Crs::GCJ02`] and [`Crs::BD09`] into [`Crs::WGS84`]
/// is approximate, see [`gcj02_to_wgs84`].
///
/// # Example
///
/// ```
/// # use gcjtrans::*;
/// let origin = Point::new(114.304569, 30.593354);
///
/// let result = transform(&origin, Crs::WGS84, Crs::BD09);
/// assert!((result.longitude() - 114.316583).abs() < 2e-6);
/// assert!((result.latitude() - 30.596644).abs() < 2e-6);
///
/// // identity
/// assert_eq!(transform(&origin, Crs::GCJ02, Crs::GCJ02), origin);
/// ```
pub fn transform(point: &Point, from: Crs, to: Crs) -> Point {
    let (lng, lat) = (point.longitude, point.latitude);
    match (from, to) {
        (Crs::WGS84, Crs::GCJ02) => wgs84_to_gcj02(lng, lat),
        (Crs::GCJ02, Crs::WGS84) => gcj02_to_wgs84(lng, lat),
        (Crs::GCJ02, Crs::BD09) => gcj02_to_bd09(lng, lat),
        (Crs::BD09, Crs::GCJ02) => bd09_to_gcj02(lng, lat),
        (Crs::WGS84, Crs::BD09) => wgs84_to_bd09(lng, lat),
        (Crs::BD09, Crs::WGS84) => bd09_to_wgs84(lng, lat),
        (Crs::WGS84, Crs::WGS84) | (Crs::GCJ02, Crs::GCJ02) | (Crs::BD09, Crs::BD09) => *point,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_from_str() {
        for (s, e) in [
            ("WGS84", Crs::WGS84),
            ("wgs-84", Crs::WGS84),
            ("GCJ02", Crs::GCJ02),
            ("gcj-02", Crs::GCJ02),
            ("BD09", Crs::BD09),
            ("Bd-09", Crs::BD09),
        ] {
            assert_eq!(s.parse::<Crs>().unwrap(), e, "{s}");
        }
        for crs in [Crs::WGS84, Crs::GCJ02, Crs::BD09] {
            assert_eq!(crs.to_string().parse::<Crs>().unwrap(), crs);
        }
        assert!("EPSG:4326".parse::<Crs>().is_err());
        assert!("".parse::<Crs>().is_err());
    }

    #[test]
    fn test_transform() {
        let wgs = Point::new(116.407387, 39.904179);
        let gcj = transform(&wgs, Crs::WGS84, Crs::GCJ02);
        let bd = transform(&wgs, Crs::WGS84, Crs::BD09);

        assert_eq!(gcj, wgs84_to_gcj02(116.407387, 39.904179));
        assert_eq!(bd, gcj02_to_bd09(*gcj.longitude(), *gcj.latitude()));
        assert_eq!(transform(&bd, Crs::BD09, Crs::GCJ02), bd09_to_gcj02(*bd.longitude(), *bd.latitude()));
        assert_eq!(transform(&gcj, Crs::GCJ02, Crs::WGS84), gcj02_to_wgs84(*gcj.longitude(), *gcj.latitude()));

        let back = transform(&bd, Crs::BD09, Crs::WGS84);
        assert!((back.longitude() - wgs.longitude()).abs() < 1e-4);
        assert!((back.latitude() - wgs.latitude()).abs() < 1e-4);

        for crs in [Crs::WGS84, Crs::GCJ02, Crs::BD09] {
            assert_eq!(transform(&wgs, crs, crs), wgs);
        }
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_serde() {
        use serde_test::{assert_tokens, Token};

        assert_tokens(
            &Crs::GCJ02,
            &[Token::UnitVariant {
                name: "Crs",
                variant: "GCJ02",
            }],
        );
    }
}

//! Provides the China boundary and the gate of the GCJ-02 distortion.
//!
//! The boundary is an outline of the mainland, Hainan and Taiwan,
//! bundled as GeoJSON and materialized once on first use.
//! The land borders follow the border rivers and passes,
//! the coast runs a little offshore so that Kinmen, Matsu and Zhoushan are inside.
use std::sync::LazyLock;

use log::{debug, trace};

use crate::point::Degree;
use crate::polygon::Region;
use crate::Point;

const CHINA_GEOJSON: &str = include_str!("../data/china.geojson");

static CHINA: LazyLock<Region> = LazyLock::new(|| {
    // the data is embedded on build and covered by the tests
    let region = Region::from_geojson(CHINA_GEOJSON).expect("embedded China boundary is valid");
    debug!("China boundary loaded: {} rings", region.polygons().len());
    region
});

/// Returns the China boundary.
///
/// # Example
///
/// ```
/// # use gcjtrans::china::china_region;
/// assert_eq!(china_region().polygons().len(), 3);
/// ```
pub fn china_region() -> &'static Region {
    &CHINA
}

/// Returns `true` if the position is outside China.
///
/// A position on the boundary is inside. NaN is outside.
///
/// # Example
///
/// ```
/// # use gcjtrans::*;
/// // Beijing
/// assert!(!is_outside_china(116.404, 39.915));
/// // Tokyo
/// assert!(is_outside_china(139.6917, 35.6895));
/// ```
pub fn is_outside_china(longitude: impl Degree, latitude: impl Degree) -> bool {
    let point = Point::coerce(longitude, latitude);
    let outside = !CHINA.contains(&point);
    trace!("({}, {}) outside China: {outside}", point.longitude, point.latitude);
    outside
}

/// Returns `true` if the position is in China, the negation of [`is_outside_china`].
#[inline]
pub fn is_in_china(longitude: impl Degree, latitude: impl Degree) -> bool {
    !is_outside_china(longitude, latitude)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_embedded() {
        let region = Region::from_geojson(CHINA_GEOJSON).unwrap();
        assert_eq!(region.polygons().len(), 3);
        assert_eq!(&region, china_region());
    }

    #[test]
    fn test_inside() {
        for (lng, lat) in [
            (116.407387, 39.904179),
            (114.304569, 30.593354),
            (121.4737, 31.2304),
            (113.26, 23.13),
            (87.6168, 43.8256),
            (91.11, 29.65),
            (126.63, 45.75),
            (102.71, 25.04),
            (104.07, 30.67),
            (75.99, 39.47),
            (121.61, 38.91),
            // Hong Kong and Macau
            (114.17, 22.3),
            (113.55, 22.19),
            // Hainan
            (110.33, 20.03),
            (109.51, 18.25),
            // Taiwan and Penghu
            (121.56, 25.04),
            (120.3, 22.62),
            (119.57, 23.57),
        ] {
            assert!(!is_outside_china(lng, lat), "({lng}, {lat})");
            assert!(is_in_china(lng, lat), "({lng}, {lat})");
        }
    }

    #[test]
    fn test_inside_near_border() {
        for (name, lng, lat) in [
            ("Mohe", 122.53, 52.97),
            ("Beiji", 122.37, 53.47),
            ("Huma", 126.65, 51.73),
            ("Heihe", 127.49, 50.24),
            ("Fuyuan", 134.29, 48.36),
            ("Suifenhe", 131.15, 44.4),
            ("Hunchun", 130.36, 42.87),
            ("Dandong", 124.38, 40.125),
            ("Dongxing", 107.97, 21.547),
            ("Pingxiang", 106.75, 22.1),
            ("Longzhou", 106.85, 22.34),
            ("Maguan", 104.4, 23.0),
            ("Hekou", 103.95, 22.5),
            ("Mengla", 101.56, 21.46),
            ("Ruili", 97.85, 24.01),
            ("Tengchong", 98.49, 25.02),
            ("Zayu", 97.47, 28.66),
            ("Medog", 95.33, 29.33),
            ("Yadong", 88.93, 27.48),
            ("Zhangmu", 85.98, 27.99),
            ("Burang", 81.18, 30.29),
            ("Shiquanhe", 80.1, 32.5),
            ("Tashkurgan", 75.23, 37.77),
            ("Horgos", 80.42, 44.21),
            ("Altay", 88.13, 47.85),
            ("Erenhot", 111.98, 43.65),
            ("Manzhouli", 117.43, 49.59),
        ] {
            assert!(!is_outside_china(lng, lat), "{name} ({lng}, {lat})");
        }
    }

    #[test]
    fn test_inside_near_coast() {
        for (name, lng, lat) in [
            ("Weihai", 122.12, 37.51),
            ("Yantai", 121.45, 37.46),
            ("Qingdao", 120.38, 36.07),
            ("Dalian", 121.6, 38.91),
            ("Chongming", 121.6, 31.6),
            ("Zhoushan", 122.2, 30.0),
            ("Ningbo", 121.55, 29.87),
            ("Matsu", 119.95, 26.16),
            ("Xiamen", 118.09, 24.48),
            ("Kinmen", 118.32, 24.45),
            ("Zhanjiang", 110.36, 21.27),
            ("Beihai", 109.12, 21.48),
        ] {
            assert!(!is_outside_china(lng, lat), "{name} ({lng}, {lat})");
        }
    }

    #[test]
    fn test_outside() {
        for (lng, lat) in [
            (61.972426, 31.998164),
            (139.6917, 35.6895),
            (126.978, 37.5665),
            (125.75, 39.03),
            (131.9, 43.1),
            (105.8342, 21.0278),
            (106.9057, 47.8864),
            (77.2, 28.6),
            (85.3, 27.7),
            (100.5, 13.75),
            (120.98, 14.6),
            (76.9, 43.25),
            (-0.1276, 51.5072),
            (0.0, 0.0),
        ] {
            assert!(is_outside_china(lng, lat), "({lng}, {lat})");
        }
    }

    #[test]
    fn test_outside_near_border() {
        for (name, lng, lat) in [
            ("Thimphu", 89.64, 27.47),
            ("Gangtok", 88.61, 27.33),
            ("Kathmandu", 85.32, 27.72),
            ("Leh", 77.58, 34.16),
            ("Gilgit", 74.3, 35.92),
            ("Osh", 72.8, 40.5),
            ("Zharkent", 80.0, 44.17),
            ("Zamyn-Uud", 111.9, 43.72),
            ("Blagoveshchensk", 127.53, 50.26),
            ("Khabarovsk", 135.07, 48.48),
            ("Vladivostok", 131.89, 43.12),
            ("Sinuiju", 124.4, 40.1),
            ("Mong Cai", 107.96, 21.525),
            ("Lang Son", 106.76, 21.85),
            ("Cao Bang", 106.25, 22.67),
            ("Ha Giang", 104.98, 22.82),
            ("Myitkyina", 97.4, 25.38),
            ("Jeju", 126.53, 33.5),
        ] {
            assert!(is_outside_china(lng, lat), "{name} ({lng}, {lat})");
        }
    }

    #[test]
    fn test_boundary() {
        // vertices are inside
        assert!(!is_outside_china(121.85, 53.35));
        assert!(!is_outside_china(73.5, 39.45));
        // the Yalu at the Friendship Bridge
        assert!(!is_outside_china(124.395, 40.116));
        // text and NaN
        assert!(!is_outside_china("116.404", "39.915"));
        assert!(is_outside_china("beijing", "39.915"));
        assert!(is_outside_china(f64::NAN, f64::NAN));
    }
}

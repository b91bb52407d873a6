/// Alias for a `Result<T, gcjtrans::error::Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents all possible errors that can occur by this crate.
#[derive(Debug)]
pub struct Error {
    pub err: Box<ErrorImpl>,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.err)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

impl Error {
    /// Returns a error kind.
    pub fn kind(&self) -> &ErrorImpl {
        &self.err
    }
}

impl Error {
    pub(crate) fn new_nan(axis: ErrorAxis) -> Self {
        Self {
            err: Box::new(ErrorImpl::NaN { axis }),
        }
    }

    pub(crate) fn new_out_of_range_position(axis: ErrorAxis, low: f64, high: f64) -> Self {
        Self {
            err: Box::new(ErrorImpl::OutOfRangePosition { axis, low, high }),
        }
    }

    pub(crate) fn new_degenerate_polygon(len: usize) -> Self {
        Self {
            err: Box::new(ErrorImpl::DegeneratePolygon { len }),
        }
    }

    pub(crate) fn new_parse_crs(s: String) -> Self {
        Self {
            err: Box::new(ErrorImpl::ParseCrs { s }),
        }
    }

    pub(crate) fn new_parse_mode(s: String) -> Self {
        Self {
            err: Box::new(ErrorImpl::ParseMode { s }),
        }
    }

    pub(crate) fn new_invalid_boundary(reason: String) -> Self {
        Self {
            err: Box::new(ErrorImpl::InvalidBoundary { reason }),
        }
    }

    pub(crate) fn new_not_convergent(
        longitude: f64,
        latitude: f64,
        criteria: f64,
        iteration: usize,
    ) -> Self {
        Self {
            err: Box::new(ErrorImpl::NotConvergent {
                longitude,
                latitude,
                criteria,
                iteration,
            }),
        }
    }
}

#[derive(Debug)]
pub enum ErrorImpl {
    /// NaN found.
    NaN {
        /// The axis holding NaN
        axis: ErrorAxis,
    },
    /// Out of the valid range of longitude/latitude.
    OutOfRangePosition {
        axis: ErrorAxis,
        low: f64,
        high: f64,
    },
    /// A ring has fewer than three vertices.
    DegeneratePolygon {
        /// Number of vertices given
        len: usize,
    },
    /// Unknown name of coordinate reference system.
    ParseCrs {
        /// Invalid data
        s: String,
    },
    /// Unknown name of point-in-polygon mode.
    ParseMode {
        /// Invalid data
        s: String,
    },
    /// The boundary (GeoJSON) is malformed.
    InvalidBoundary { reason: String },
    /// Error is still high even iteration exhausted
    NotConvergent {
        /// Resulting longitude
        longitude: f64,
        /// Resulting latitude
        latitude: f64,
        /// Error criteria
        criteria: f64,
        /// Max iteration
        iteration: usize,
    },
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ErrorAxis {
    Longitude,
    Latitude,
}

impl std::fmt::Display for ErrorAxis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ErrorAxis::Longitude => "longitude",
            ErrorAxis::Latitude => "latitude",
        };
        f.write_str(s)
    }
}

impl std::fmt::Display for ErrorImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ErrorImpl::NaN { axis } => write!(f, "invalid {axis}: NaN found"),
            ErrorImpl::OutOfRangePosition { axis, low, high } => {
                write!(f, "invalid {axis}: must satisfy {low:?} <= and <= {high:?}")
            }
            ErrorImpl::DegeneratePolygon { len } => {
                write!(f, "invalid polygon: {len:?} vertices, at least 3 required")
            }
            ErrorImpl::ParseCrs { s } => write!(f, "invalid CRS: '{s}'"),
            ErrorImpl::ParseMode { s } => write!(f, "invalid mode: '{s}'"),
            ErrorImpl::InvalidBoundary { reason } => write!(f, "invalid boundary: {reason}"),
            ErrorImpl::NotConvergent {
                iteration,
                criteria,
                ..
            } => write!(
                f,
                "error is still higher than {criteria:?} even exhaust {iteration:?} iterations"
            ),
        }
    }
}

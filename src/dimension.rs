use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::error::{SdoError, SdoResult};

/// The coordinate layout of a geometry, derived from its `dim` and `lrs_dim`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    /// Two-dimensional.
    XY,

    /// Three-dimensional.
    XYZ,

    /// XYM (2D with measure).
    XYM,

    /// XYZM (3D with measure).
    XYZM,
}

impl Dimension {
    /// Resolves the layout of an `SDO_GEOMETRY` from its dimensionality and LRS slot.
    ///
    /// A four-dimensional geometry is always `XYZM`; the measure may sit in either of the last
    /// two slots.
    pub fn try_from_parts(dim: i32, lrs_dim: i32) -> SdoResult<Self> {
        match (dim, lrs_dim) {
            (2, 0) => Ok(Dimension::XY),
            (3, 0) => Ok(Dimension::XYZ),
            (3, 3) => Ok(Dimension::XYM),
            (4, 0 | 3 | 4) => Ok(Dimension::XYZM),
            _ => Err(SdoError::InvalidDimension { dim, lrs_dim }),
        }
    }

    /// Returns the `(dim, lrs_dim)` pair stored in an `SDO_GTYPE` for this layout.
    ///
    /// Measured layouts keep the measure in the last slot.
    pub fn to_parts(&self) -> (i32, i32) {
        match self {
            Dimension::XY => (2, 0),
            Dimension::XYZ => (3, 0),
            Dimension::XYM => (3, 3),
            Dimension::XYZM => (4, 4),
        }
    }

    /// Returns the number of dimensions.
    pub fn size(&self) -> usize {
        match self {
            Dimension::XY => 2,
            Dimension::XYZ => 3,
            Dimension::XYM => 3,
            Dimension::XYZM => 4,
        }
    }

    /// Returns `true` if one ordinate per vertex is an LRS measure.
    pub fn has_measure(&self) -> bool {
        matches!(self, Dimension::XYM | Dimension::XYZM)
    }
}

impl From<Dimension> for geo_traits::Dimensions {
    fn from(value: Dimension) -> Self {
        match value {
            Dimension::XY => geo_traits::Dimensions::Xy,
            Dimension::XYZ => geo_traits::Dimensions::Xyz,
            Dimension::XYM => geo_traits::Dimensions::Xym,
            Dimension::XYZM => geo_traits::Dimensions::Xyzm,
        }
    }
}

/// `Unknown(n)` carries no measure, so it reads as `XY`, `XYZ` or `XYZM` by its size.
impl TryFrom<geo_traits::Dimensions> for Dimension {
    type Error = SdoError;

    fn try_from(value: geo_traits::Dimensions) -> SdoResult<Self> {
        let measured = matches!(
            value,
            geo_traits::Dimensions::Xym | geo_traits::Dimensions::Xyzm
        );
        match (value.size(), measured) {
            (2, false) => Ok(Dimension::XY),
            (3, false) => Ok(Dimension::XYZ),
            (3, true) => Ok(Dimension::XYM),
            (4, _) => Ok(Dimension::XYZM),
            (size, _) => Err(SdoError::UnsupportedDimensions { size }),
        }
    }
}

impl Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Dimension::XY => "XY",
            Dimension::XYZ => "XYZ",
            Dimension::XYM => "XYM",
            Dimension::XYZM => "XYZM",
        })
    }
}

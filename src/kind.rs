use std::fmt::Display;

use num_enum::{FromPrimitive, IntoPrimitive};
use serde::{Deserialize, Serialize};

/// The geometry kind, stored in the last two digits of an `SDO_GTYPE`.
///
/// Decoding is total: [`GeometryKind::from`] maps any integer without a defined meaning to
/// [`GeometryKind::Unknown`]. That mapping is lossy, so re-encoding such a value does not give
/// back the original digits.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    FromPrimitive,
    IntoPrimitive,
    Serialize,
    Deserialize,
)]
#[repr(i32)]
pub enum GeometryKind {
    /// Spatial ignores this geometry.
    // Also the catch-all for `FromPrimitive`.
    #[default]
    Unknown = 0,

    /// A single point.
    Point = 1,

    /// One line string made of straight or circular arc segments, or both.
    LineOrCurve = 2,

    /// One polygon with or without holes, or one surface made of one or more polygons.
    ///
    /// In a three-dimensional polygon all points must be on the same plane.
    PolygonOrSurface = 3,

    /// A heterogeneous collection of elements.
    Collection = 4,

    /// One or more points.
    MultiPoint = 5,

    /// One or more line strings.
    MultiLineOrCurve = 6,

    /// Multiple disjoint polygons or surfaces.
    MultiPolygonOrSurface = 7,

    /// Multiple surfaces that completely enclose a three-dimensional space.
    Solid = 8,

    /// Multiple disjoint solids.
    MultiSolid = 9,
}

impl GeometryKind {
    /// Returns `true` for kinds that may hold more than one element.
    pub fn is_multi(&self) -> bool {
        matches!(
            self,
            GeometryKind::Collection
                | GeometryKind::MultiPoint
                | GeometryKind::MultiLineOrCurve
                | GeometryKind::MultiPolygonOrSurface
                | GeometryKind::MultiSolid
        )
    }

    /// Returns `true` for kinds only meaningful with three or more coordinate dimensions.
    pub fn is_volumetric(&self) -> bool {
        matches!(self, GeometryKind::Solid | GeometryKind::MultiSolid)
    }
}

impl Display for GeometryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeometryKind::Unknown => write!(f, "UNKNOWN_GEOMETRY"),
            GeometryKind::Point => write!(f, "POINT"),
            GeometryKind::LineOrCurve => write!(f, "LINE"),
            GeometryKind::PolygonOrSurface => write!(f, "POLYGON"),
            GeometryKind::Collection => write!(f, "COLLECTION"),
            GeometryKind::MultiPoint => write!(f, "MULTIPOINT"),
            GeometryKind::MultiLineOrCurve => write!(f, "MULTILINE"),
            GeometryKind::MultiPolygonOrSurface => write!(f, "MULTIPOLYGON"),
            GeometryKind::Solid => write!(f, "SOLID"),
            GeometryKind::MultiSolid => write!(f, "MULTISOLID"),
        }
    }
}

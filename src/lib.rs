//! Rust types for Oracle Spatial's `MDSYS.SDO_GEOMETRY`, `MDSYS.SDO_POINT_TYPE` and
//! `MDSYS.ST_GEOMETRY` object types, and the `SDO_GTYPE` codec that packs a geometry's
//! dimensionality, LRS dimension and kind into a single number.
//!
//! ```
//! use sdo_geometry::{gtype, GeometryKind, SdoGeometry};
//!
//! assert_eq!(gtype::encode(2, 0, 3), 2003);
//!
//! let mut geom = SdoGeometry::default();
//! geom.apply_gtype(Some(2003));
//! assert_eq!(geom.kind, GeometryKind::PolygonOrSurface);
//! ```
//!
//! Nothing here talks to a database. Driver adapters plug in through the traits in [`object`].

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]
#![warn(missing_docs)]

mod dimension;
mod element;
pub mod error;
mod geometry;
pub mod gtype;
mod kind;
pub mod object;
mod point;
mod st_geometry;
#[cfg(test)]
pub(crate) mod test;
mod validate;

pub use dimension::Dimension;
pub use element::{Element, ElementInfo};
pub use error::{SdoError, SdoResult};
pub use geometry::{SdoGeometry, SRID_WGS84};
pub use gtype::GeometryTypeCode;
pub use kind::GeometryKind;
pub use object::OracleObject;
pub use point::SdoPoint;
pub use st_geometry::StGeometry;
pub use validate::Violation;

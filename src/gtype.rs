//! Packing and unpacking of the `SDO_GTYPE` attribute.
//!
//! An `SDO_GTYPE` is the decimal `dim * 1000 + lrs_dim * 100 + kind`. For example `2003` is a
//! two-dimensional polygon and `3302` is a line string with its measure in the third ordinate.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::dimension::Dimension;
use crate::error::{SdoError, SdoResult};
use crate::kind::GeometryKind;

/// The three components packed into an `SDO_GTYPE`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GeometryTypeCode {
    /// Number of ordinates per vertex.
    pub dim: i32,

    /// Which ordinate holds the LRS measure, or 0 for non-LRS geometries.
    pub lrs_dim: i32,

    /// The geometry kind.
    pub kind: GeometryKind,
}

impl GeometryTypeCode {
    /// Creates a new [`GeometryTypeCode`].
    pub fn new(dim: i32, lrs_dim: i32, kind: GeometryKind) -> Self {
        Self { dim, lrs_dim, kind }
    }

    /// Packs the components into an `SDO_GTYPE`. See [`encode`].
    pub fn encode(&self) -> i32 {
        encode(self.dim, self.lrs_dim, self.kind.into())
    }

    /// The coordinate layout described by `dim` and `lrs_dim`.
    pub fn dimension(&self) -> SdoResult<Dimension> {
        Dimension::try_from_parts(self.dim, self.lrs_dim)
    }
}

impl From<GeometryTypeCode> for i32 {
    fn from(value: GeometryTypeCode) -> Self {
        value.encode()
    }
}

/// Packs `dim`, `lrs_dim` and the raw kind value into an `SDO_GTYPE`.
///
/// No range checking is done. Values that do not fit the one-digit LRS slot or the two-digit
/// kind slot spill into the neighbouring digits, so they will not decode to the same
/// components. Overflow wraps.
pub fn encode(dim: i32, lrs_dim: i32, kind: i32) -> i32 {
    dim.wrapping_mul(1000)
        .wrapping_add(lrs_dim.wrapping_mul(100))
        .wrapping_add(kind)
}

/// Unpacks an `SDO_GTYPE`.
///
/// Returns `None` for `0`, which marks an unset type rather than a zero-dimensional geometry.
/// Kind digits without a defined meaning decode to [`GeometryKind::Unknown`].
pub fn decode(gtype: i32) -> Option<GeometryTypeCode> {
    if gtype == 0 {
        trace!("SDO_GTYPE is 0, leaving type unset");
        return None;
    }

    let dim = gtype / 1000;
    let rest = gtype - dim * 1000;
    let lrs_dim = rest / 100;
    let raw_kind = rest - lrs_dim * 100;

    let kind = GeometryKind::from(raw_kind);
    if kind == GeometryKind::Unknown && raw_kind != 0 {
        trace!(gtype, raw_kind, "undefined geometry kind, reading as unknown");
    }

    Some(GeometryTypeCode { dim, lrs_dim, kind })
}

/// Unpacks an `SDO_GTYPE` NUMBER as handed out by a driver.
///
/// An absent value decodes to `None`, like `0`. Fractional values are truncated toward zero.
pub fn decode_decimal(gtype: Option<Decimal>) -> SdoResult<Option<GeometryTypeCode>> {
    let Some(value) = gtype else {
        return Ok(None);
    };
    let raw = value
        .trunc()
        .to_i32()
        .ok_or(SdoError::GTypeOutOfRange(value))?;
    Ok(decode(raw))
}

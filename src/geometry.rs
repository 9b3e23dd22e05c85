use std::fmt::Display;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::dimension::Dimension;
use crate::element::{split_elements, Element};
use crate::error::{SdoError, SdoResult};
use crate::gtype::{decode, decode_decimal, GeometryTypeCode};
use crate::kind::GeometryKind;
use crate::object::{
    read_object, write_number, write_number_array, write_object, FieldDescriptor, FieldType,
    ObjectReader, ObjectWriter, OracleObject, ELEM_INFO_ARRAY_TYPE, ORDINATE_ARRAY_TYPE,
};
use crate::point::{fmt_number, to_decimal, SdoPoint};
use crate::validate::first_violation;

/// Oracle's SRID for WGS 84 (EPSG:4326).
pub const SRID_WGS84: i32 = 8307;

/// An `MDSYS.SDO_GEOMETRY` value.
///
/// `dim`, `lrs_dim` and `kind` are the unpacked `SDO_GTYPE`; the remaining fields hold the
/// attributes as the driver supplies them, with `None` for NULL. A record is not checked on
/// construction. Call [`validate`][Self::validate] when the source is not trusted.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SdoGeometry {
    /// Number of ordinates per vertex: 2, 3 or 4.
    pub dim: i32,

    /// Which ordinate (3 or 4) holds the LRS measure, or 0 for non-LRS geometries.
    pub lrs_dim: i32,

    /// The geometry kind.
    pub kind: GeometryKind,

    /// Spatial reference system identifier. `None` means no coordinate system is associated.
    pub srid: Option<Decimal>,

    /// Point storage, used instead of `elem_info`/`ordinates` for single points.
    pub point: Option<SdoPoint>,

    /// Element triplets describing how to split `ordinates`.
    pub elem_info: Option<Vec<Decimal>>,

    /// Ordinates of all vertices, `dim` values per vertex.
    pub ordinates: Option<Vec<Decimal>>,
}

impl SdoGeometry {
    /// Creates an empty geometry with the given type components.
    pub fn new(dim: i32, lrs_dim: i32, kind: GeometryKind) -> Self {
        Self {
            dim,
            lrs_dim,
            kind,
            ..Default::default()
        }
    }

    /// Creates a point geometry using the `SDO_POINT` storage.
    ///
    /// The geometry is three-dimensional when `point.z` is set.
    pub fn point(point: SdoPoint, srid: Option<i32>) -> Self {
        let dim = if point.z.is_some() { 3 } else { 2 };
        Self {
            srid: srid.map(Decimal::from),
            point: Some(point),
            ..Self::new(dim, 0, GeometryKind::Point)
        }
    }

    /// The unpacked type components.
    pub fn type_code(&self) -> GeometryTypeCode {
        GeometryTypeCode::new(self.dim, self.lrs_dim, self.kind)
    }

    /// The packed `SDO_GTYPE`, e.g. `2003` for a two-dimensional polygon.
    pub fn gtype(&self) -> i32 {
        self.type_code().encode()
    }

    /// Sets `dim`, `lrs_dim` and `kind` from a packed `SDO_GTYPE`.
    ///
    /// `None` and `0` leave the record unchanged.
    pub fn apply_gtype(&mut self, gtype: Option<i32>) {
        match gtype.and_then(decode) {
            Some(code) => self.apply_type_code(code),
            None => trace!(?gtype, "no SDO_GTYPE to apply"),
        }
    }

    /// Sets `dim`, `lrs_dim` and `kind` from an `SDO_GTYPE` NUMBER.
    ///
    /// `None` and `0` leave the record unchanged.
    pub fn apply_gtype_decimal(&mut self, gtype: Option<Decimal>) -> SdoResult<()> {
        match decode_decimal(gtype)? {
            Some(code) => self.apply_type_code(code),
            None => trace!(?gtype, "no SDO_GTYPE to apply"),
        }
        Ok(())
    }

    fn apply_type_code(&mut self, code: GeometryTypeCode) {
        self.dim = code.dim;
        self.lrs_dim = code.lrs_dim;
        self.kind = code.kind;
    }

    /// The coordinate layout described by `dim` and `lrs_dim`.
    pub fn dimension(&self) -> SdoResult<Dimension> {
        Dimension::try_from_parts(self.dim, self.lrs_dim)
    }

    /// The SRID as an integer, rounded to the nearest whole number.
    pub fn srid_i32(&self) -> SdoResult<Option<i32>> {
        self.srid.map(to_i32).transpose()
    }

    /// `true` if the geometry is stored in `SDO_POINT`.
    pub fn uses_point_storage(&self) -> bool {
        self.point.is_some()
            && self.elem_info.as_ref().map_or(true, Vec::is_empty)
            && self.ordinates.as_ref().map_or(true, Vec::is_empty)
    }

    /// The element info array as integers.
    ///
    /// Fractional values are rounded to the nearest whole number, with ties going to the even
    /// neighbour, so `1.6` reads as `2` and `2.5` as `2`.
    pub fn elem_info_i32(&self) -> SdoResult<Option<Vec<i32>>> {
        self.elem_info
            .as_ref()
            .map(|values| {
                values
                    .iter()
                    .copied()
                    .map(to_i32)
                    .collect::<SdoResult<Vec<_>>>()
            })
            .transpose()
    }

    /// Replaces the element info array.
    pub fn set_elem_info_i32(&mut self, values: Option<&[i32]>) {
        self.elem_info = values.map(|values| values.iter().copied().map(Decimal::from).collect());
    }

    /// The ordinates as `f64`.
    pub fn ordinates_f64(&self) -> SdoResult<Option<Vec<f64>>> {
        self.ordinates
            .as_ref()
            .map(|values| {
                values
                    .iter()
                    .map(|value| {
                        value.to_f64().ok_or(SdoError::NumberConversion {
                            value: *value,
                            target: "f64",
                        })
                    })
                    .collect::<SdoResult<Vec<_>>>()
            })
            .transpose()
    }

    /// Replaces the ordinates.
    pub fn set_ordinates_f64(&mut self, values: Option<&[f64]>) -> SdoResult<()> {
        self.ordinates = values
            .map(|values| {
                values
                    .iter()
                    .copied()
                    .map(to_decimal)
                    .collect::<SdoResult<Vec<_>>>()
            })
            .transpose()?;
        Ok(())
    }

    /// Number of whole vertices in `ordinates`.
    pub fn num_vertices(&self) -> usize {
        match (usize::try_from(self.dim), self.ordinates.as_ref()) {
            (Ok(dim), Some(ordinates)) if dim > 0 => ordinates.len() / dim,
            _ => 0,
        }
    }

    /// Iterates over the vertices in `ordinates`, `dim` ordinates at a time.
    pub fn vertices(&self) -> impl Iterator<Item = &[Decimal]> {
        let dim = usize::try_from(self.dim).unwrap_or(0).max(1);
        let ordinates: &[Decimal] = if self.dim > 0 {
            self.ordinates.as_deref().unwrap_or(&[])
        } else {
            &[]
        };
        ordinates.chunks_exact(dim)
    }

    /// Splits the geometry into its elements.
    pub fn elements(&self) -> SdoResult<Vec<Element>> {
        let num_ordinates = self.ordinates.as_ref().map_or(0, Vec::len);
        split_elements(self.elem_info.as_deref().unwrap_or(&[]), num_ordinates)
    }

    /// Checks the structural invariants, reporting the first one broken.
    pub fn validate(&self) -> SdoResult<()> {
        match first_violation(self) {
            Some(violation) => Err(violation.into()),
            None => Ok(()),
        }
    }
}

/// Rounds half to even before narrowing.
pub(crate) fn to_i32(value: Decimal) -> SdoResult<i32> {
    value.round().to_i32().ok_or(SdoError::NumberConversion {
        value,
        target: "i32",
    })
}

impl OracleObject for SdoGeometry {
    const TYPE_NAME: &'static str = "MDSYS.SDO_GEOMETRY";

    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new(0, "SDO_GTYPE", FieldType::Number),
        FieldDescriptor::new(1, "SDO_SRID", FieldType::Number),
        FieldDescriptor::new(2, "SDO_POINT", FieldType::Object(SdoPoint::TYPE_NAME)),
        FieldDescriptor::new(
            3,
            "SDO_ELEM_INFO",
            FieldType::NumberArray(ELEM_INFO_ARRAY_TYPE),
        ),
        FieldDescriptor::new(
            4,
            "SDO_ORDINATES",
            FieldType::NumberArray(ORDINATE_ARRAY_TYPE),
        ),
    ];

    fn read_from<R: ObjectReader>(reader: &R) -> SdoResult<Self> {
        let gtype = reader.number(0)?;
        let mut geom = Self {
            srid: reader.number(1)?,
            point: read_object(reader, 2)?,
            elem_info: reader.number_array(3)?,
            ordinates: reader.number_array(4)?,
            ..Default::default()
        };
        geom.apply_gtype_decimal(gtype)?;
        debug!(
            gtype = geom.gtype(),
            num_ordinates = geom.ordinates.as_ref().map_or(0, Vec::len),
            "read SDO_GEOMETRY"
        );
        Ok(geom)
    }

    fn write_to<W: ObjectWriter>(&self, writer: &mut W) -> SdoResult<()> {
        let gtype = self.gtype();
        debug!(gtype, "writing SDO_GEOMETRY");
        writer.set_number(0, Decimal::from(gtype))?;
        write_number(writer, 1, self.srid)?;
        write_object(writer, 2, self.point.as_ref())?;
        write_number_array(writer, 3, self.elem_info.as_deref())?;
        write_number_array(writer, 4, self.ordinates.as_deref())
    }
}

fn fmt_array(
    f: &mut std::fmt::Formatter<'_>,
    type_name: &str,
    values: Option<&[Decimal]>,
) -> std::fmt::Result {
    let Some(values) = values else {
        return write!(f, "NULL");
    };
    write!(f, "{type_name}(")?;
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        fmt_number(f, Some(value))?;
    }
    write!(f, ")")
}

impl Display for SdoGeometry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({}, ", Self::TYPE_NAME, self.gtype())?;
        fmt_number(f, self.srid.as_ref())?;
        write!(f, ", ")?;
        match &self.point {
            Some(point) => write!(f, "{point}")?,
            None => write!(f, "NULL")?,
        }
        write!(f, ", ")?;
        fmt_array(f, ELEM_INFO_ARRAY_TYPE, self.elem_info.as_deref())?;
        write!(f, ", ")?;
        fmt_array(f, ORDINATE_ARRAY_TYPE, self.ordinates.as_deref())?;
        write!(f, ")")
    }
}

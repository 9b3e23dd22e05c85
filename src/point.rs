use std::fmt::Display;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{SdoError, SdoResult};
use crate::object::{
    write_number, FieldDescriptor, FieldType, ObjectReader, ObjectWriter, OracleObject,
};

/// An `MDSYS.SDO_POINT_TYPE`, the compact storage for single-point geometries.
///
/// Every ordinate is an optional `NUMBER`; `z` is `None` for two-dimensional points.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SdoPoint {
    /// X ordinate.
    pub x: Option<Decimal>,

    /// Y ordinate.
    pub y: Option<Decimal>,

    /// Z ordinate.
    pub z: Option<Decimal>,
}

impl SdoPoint {
    /// Creates a new [`SdoPoint`] from `NUMBER` values.
    pub fn new(x: Option<Decimal>, y: Option<Decimal>, z: Option<Decimal>) -> Self {
        Self { x, y, z }
    }

    /// Creates a two-dimensional point from `f64` ordinates.
    pub fn from_xy(x: f64, y: f64) -> SdoResult<Self> {
        Ok(Self::new(Some(to_decimal(x)?), Some(to_decimal(y)?), None))
    }

    /// Creates a three-dimensional point from `f64` ordinates.
    pub fn from_xyz(x: f64, y: f64, z: f64) -> SdoResult<Self> {
        Ok(Self::new(
            Some(to_decimal(x)?),
            Some(to_decimal(y)?),
            Some(to_decimal(z)?),
        ))
    }

    /// X ordinate as `f64`.
    pub fn x_f64(&self) -> Option<f64> {
        self.x.and_then(|v| v.to_f64())
    }

    /// Y ordinate as `f64`.
    pub fn y_f64(&self) -> Option<f64> {
        self.y.and_then(|v| v.to_f64())
    }

    /// Z ordinate as `f64`.
    pub fn z_f64(&self) -> Option<f64> {
        self.z.and_then(|v| v.to_f64())
    }

    /// Number of ordinates set, counting from `x`.
    pub fn dim(&self) -> i32 {
        match (self.x, self.y, self.z) {
            (_, _, Some(_)) => 3,
            (_, Some(_), None) => 2,
            (Some(_), None, None) => 1,
            (None, None, None) => 0,
        }
    }
}

pub(crate) fn to_decimal(value: f64) -> SdoResult<Decimal> {
    if !value.is_finite() {
        return Err(SdoError::NonFiniteOrdinate(value));
    }
    Decimal::try_from(value).map_err(|_| SdoError::OrdinateOutOfRange(value))
}

pub(crate) fn fmt_number(
    f: &mut std::fmt::Formatter<'_>,
    value: Option<&Decimal>,
) -> std::fmt::Result {
    match value {
        Some(value) => write!(f, "{}", value.normalize()),
        None => write!(f, "NULL"),
    }
}

impl OracleObject for SdoPoint {
    const TYPE_NAME: &'static str = "MDSYS.SDO_POINT_TYPE";

    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new(0, "X", FieldType::Number),
        FieldDescriptor::new(1, "Y", FieldType::Number),
        FieldDescriptor::new(2, "Z", FieldType::Number),
    ];

    fn read_from<R: ObjectReader>(reader: &R) -> SdoResult<Self> {
        Ok(Self {
            x: reader.number(0)?,
            y: reader.number(1)?,
            z: reader.number(2)?,
        })
    }

    fn write_to<W: ObjectWriter>(&self, writer: &mut W) -> SdoResult<()> {
        write_number(writer, 0, self.x)?;
        write_number(writer, 1, self.y)?;
        write_number(writer, 2, self.z)
    }
}

impl Display for SdoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}(", Self::TYPE_NAME)?;
        fmt_number(f, self.x.as_ref())?;
        write!(f, ", ")?;
        fmt_number(f, self.y.as_ref())?;
        write!(f, ", ")?;
        fmt_number(f, self.z.as_ref())?;
        write!(f, ")")
    }
}

use serde::{Deserialize, Serialize};

use crate::error::SdoResult;
use crate::geometry::SdoGeometry;
use crate::object::{
    read_object, write_object, FieldDescriptor, FieldType, ObjectReader, ObjectWriter,
    OracleObject,
};

/// An SQL/MM `MDSYS.ST_GEOMETRY`, which wraps a single `SDO_GEOMETRY`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StGeometry {
    /// The wrapped geometry.
    pub geom: Option<SdoGeometry>,
}

impl StGeometry {
    /// Creates a new [`StGeometry`].
    pub fn new(geom: Option<SdoGeometry>) -> Self {
        Self { geom }
    }

    /// Unwraps the inner geometry.
    pub fn into_inner(self) -> Option<SdoGeometry> {
        self.geom
    }
}

impl From<SdoGeometry> for StGeometry {
    fn from(value: SdoGeometry) -> Self {
        Self::new(Some(value))
    }
}

impl OracleObject for StGeometry {
    const TYPE_NAME: &'static str = "MDSYS.ST_GEOMETRY";

    const FIELDS: &'static [FieldDescriptor] = &[FieldDescriptor::new(
        0,
        "GEOM",
        FieldType::Object(SdoGeometry::TYPE_NAME),
    )];

    fn read_from<R: ObjectReader>(reader: &R) -> SdoResult<Self> {
        Ok(Self {
            geom: read_object(reader, 0)?,
        })
    }

    fn write_to<W: ObjectWriter>(&self, writer: &mut W) -> SdoResult<()> {
        write_object(writer, 0, self.geom.as_ref())
    }
}

//! Positional attribute mapping between the Rust types in this crate and Oracle object types.
//!
//! The crate never talks to a database. A driver adapter implements [`ObjectReader`] and
//! [`ObjectWriter`] over whatever handle its driver hands out, and passes them in for the
//! duration of a single read or write. Attributes are addressed by their position in the
//! object type, as listed in each type's [`OracleObject::FIELDS`].

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::SdoResult;

/// Oracle collection type backing `SDO_ELEM_INFO`.
pub const ELEM_INFO_ARRAY_TYPE: &str = "MDSYS.SDO_ELEM_INFO_ARRAY";

/// Oracle collection type backing `SDO_ORDINATES`.
pub const ORDINATE_ARRAY_TYPE: &str = "MDSYS.SDO_ORDINATE_ARRAY";

/// The SQL type of one object attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// A scalar `NUMBER`.
    Number,

    /// A varying array of `NUMBER`, named by its collection type.
    NumberArray(&'static str),

    /// A nested object, named by its object type.
    Object(&'static str),
}

/// One attribute of an Oracle object type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldDescriptor {
    /// 0-based attribute position.
    pub index: usize,

    /// Attribute name as reported by `DESCRIBE`.
    pub name: &'static str,

    /// Attribute SQL type.
    pub field_type: FieldType,
}

impl FieldDescriptor {
    pub(crate) const fn new(index: usize, name: &'static str, field_type: FieldType) -> Self {
        Self {
            index,
            name,
            field_type,
        }
    }
}

/// Read access to the attributes of one Oracle object, supplied by a driver adapter.
///
/// Every accessor returns `Ok(None)` for a NULL attribute.
pub trait ObjectReader {
    /// Reader over a nested object attribute.
    type Nested: ObjectReader;

    /// Reads a `NUMBER` attribute.
    fn number(&self, index: usize) -> SdoResult<Option<Decimal>>;

    /// Reads a `VARRAY OF NUMBER` attribute.
    fn number_array(&self, index: usize) -> SdoResult<Option<Vec<Decimal>>>;

    /// Opens a nested object attribute.
    fn object(&self, index: usize) -> SdoResult<Option<Self::Nested>>;
}

/// Write access to the attributes of one Oracle object, supplied by a driver adapter.
///
/// Absent values are never written, so attributes not set stay NULL.
pub trait ObjectWriter {
    /// Writer for a nested object attribute.
    type Nested: ObjectWriter;

    /// Writes a `NUMBER` attribute.
    fn set_number(&mut self, index: usize, value: Decimal) -> SdoResult<()>;

    /// Writes a `VARRAY OF NUMBER` attribute.
    fn set_number_array(&mut self, index: usize, values: &[Decimal]) -> SdoResult<()>;

    /// Allocates an empty object of the given type, to be filled and passed to
    /// [`set_object`][Self::set_object].
    fn new_object(&self, type_name: &'static str) -> SdoResult<Self::Nested>;

    /// Writes a nested object attribute.
    fn set_object(&mut self, index: usize, value: Self::Nested) -> SdoResult<()>;
}

/// A Rust type mapped onto an Oracle object type.
pub trait OracleObject: Sized {
    /// Fully qualified Oracle type name.
    const TYPE_NAME: &'static str;

    /// The attributes in positional order.
    const FIELDS: &'static [FieldDescriptor];

    /// Builds a value from the attributes of a non-NULL object.
    fn read_from<R: ObjectReader>(reader: &R) -> SdoResult<Self>;

    /// Writes this value into an empty object.
    fn write_to<W: ObjectWriter>(&self, writer: &mut W) -> SdoResult<()>;

    /// Looks up an attribute by name, ignoring ASCII case.
    fn field(name: &str) -> Option<&'static FieldDescriptor> {
        Self::FIELDS
            .iter()
            .find(|field| field.name.eq_ignore_ascii_case(name))
    }
}

/// Reads a nested object attribute, mapping NULL to `None`.
pub fn read_object<T: OracleObject, R: ObjectReader>(
    reader: &R,
    index: usize,
) -> SdoResult<Option<T>> {
    match reader.object(index)? {
        Some(nested) => {
            debug!(type_name = T::TYPE_NAME, index, "reading nested object");
            Ok(Some(T::read_from(&nested)?))
        }
        None => Ok(None),
    }
}

/// Writes a nested object attribute, leaving it NULL when `value` is `None`.
pub fn write_object<T: OracleObject, W: ObjectWriter>(
    writer: &mut W,
    index: usize,
    value: Option<&T>,
) -> SdoResult<()> {
    let Some(value) = value else {
        return Ok(());
    };
    debug!(type_name = T::TYPE_NAME, index, "writing nested object");
    let mut nested = writer.new_object(T::TYPE_NAME)?;
    value.write_to(&mut nested)?;
    writer.set_object(index, nested)
}

pub(crate) fn write_number<W: ObjectWriter>(
    writer: &mut W,
    index: usize,
    value: Option<Decimal>,
) -> SdoResult<()> {
    match value {
        Some(value) => writer.set_number(index, value),
        None => Ok(()),
    }
}

pub(crate) fn write_number_array<W: ObjectWriter>(
    writer: &mut W,
    index: usize,
    values: Option<&[Decimal]>,
) -> SdoResult<()> {
    match values {
        Some(values) => writer.set_number_array(index, values),
        None => Ok(()),
    }
}

use std::fmt::Display;

use rust_decimal::Decimal;

use crate::error::{SdoError, SdoResult};
use crate::object::{ObjectReader, ObjectWriter};

/// An attribute value of a [`MemoryObject`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum MemoryValue {
    Null,
    Number(Decimal),
    NumberArray(Vec<Decimal>),
    Object(MemoryObject),
}

impl MemoryValue {
    pub(crate) fn numbers(values: &[i32]) -> Self {
        MemoryValue::NumberArray(values.iter().map(|v| Decimal::from(*v)).collect())
    }
}

/// An in-memory Oracle object, standing in for a driver adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MemoryObject {
    type_name: &'static str,
    attrs: Vec<MemoryValue>,
}

impl MemoryObject {
    pub(crate) fn new(type_name: &'static str, num_attrs: usize) -> Self {
        Self {
            type_name,
            attrs: vec![MemoryValue::Null; num_attrs],
        }
    }

    pub(crate) fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub(crate) fn attr(&self, index: usize) -> &MemoryValue {
        &self.attrs[index]
    }

    pub(crate) fn set(&mut self, index: usize, value: MemoryValue) {
        self.attrs[index] = value;
    }

    fn get(&self, index: usize) -> SdoResult<&MemoryValue> {
        self.attrs.get(index).ok_or(SdoError::MissingValue {
            type_name: self.type_name,
            index,
        })
    }

    fn slot(&mut self, index: usize) -> SdoResult<&mut MemoryValue> {
        let type_name = self.type_name;
        self.attrs
            .get_mut(index)
            .ok_or(SdoError::MissingValue { type_name, index })
    }

    fn mismatch(&self, index: usize, expected: &'static str) -> SdoError {
        SdoError::TypeMismatch {
            type_name: self.type_name,
            index,
            expected,
        }
    }
}

impl ObjectReader for MemoryObject {
    type Nested = MemoryObject;

    fn number(&self, index: usize) -> SdoResult<Option<Decimal>> {
        match self.get(index)? {
            MemoryValue::Null => Ok(None),
            MemoryValue::Number(value) => Ok(Some(*value)),
            _ => Err(self.mismatch(index, "NUMBER")),
        }
    }

    fn number_array(&self, index: usize) -> SdoResult<Option<Vec<Decimal>>> {
        match self.get(index)? {
            MemoryValue::Null => Ok(None),
            MemoryValue::NumberArray(values) => Ok(Some(values.clone())),
            _ => Err(self.mismatch(index, "VARRAY OF NUMBER")),
        }
    }

    fn object(&self, index: usize) -> SdoResult<Option<Self::Nested>> {
        match self.get(index)? {
            MemoryValue::Null => Ok(None),
            MemoryValue::Object(value) => Ok(Some(value.clone())),
            _ => Err(self.mismatch(index, "OBJECT")),
        }
    }
}

impl ObjectWriter for MemoryObject {
    type Nested = MemoryObject;

    fn set_number(&mut self, index: usize, value: Decimal) -> SdoResult<()> {
        *self.slot(index)? = MemoryValue::Number(value);
        Ok(())
    }

    fn set_number_array(&mut self, index: usize, values: &[Decimal]) -> SdoResult<()> {
        *self.slot(index)? = MemoryValue::NumberArray(values.to_vec());
        Ok(())
    }

    fn new_object(&self, type_name: &'static str) -> SdoResult<Self::Nested> {
        let num_attrs = match type_name {
            "MDSYS.SDO_POINT_TYPE" => 3,
            "MDSYS.SDO_GEOMETRY" => 5,
            "MDSYS.ST_GEOMETRY" => 1,
            _ => return Err(self.mismatch(0, type_name)),
        };
        Ok(MemoryObject::new(type_name, num_attrs))
    }

    fn set_object(&mut self, index: usize, value: Self::Nested) -> SdoResult<()> {
        *self.slot(index)? = MemoryValue::Object(value);
        Ok(())
    }
}

impl Display for MemoryValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MemoryValue::Null => write!(f, "NULL"),
            MemoryValue::Number(value) => write!(f, "{}", value.normalize()),
            MemoryValue::NumberArray(values) => {
                write!(f, "VARRAY(")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", value.normalize())?;
                }
                write!(f, ")")
            }
            MemoryValue::Object(value) => write!(f, "{value}"),
        }
    }
}

impl Display for MemoryObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}(", self.type_name)?;
        for (i, attr) in self.attrs.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{attr}")?;
        }
        write!(f, ")")
    }
}

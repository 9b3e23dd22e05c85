//! Defines [`SdoError`], representing all errors returned by this crate.

use std::error::Error;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::validate::Violation;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SdoError {
    /// A geometry record broke one of its structural invariants.
    #[error("Invariant violation: {0}")]
    InvariantViolation(Violation),

    /// The `(dim, lrs_dim)` pair does not name a supported coordinate layout.
    #[error("Invalid dimension: dim={dim}, lrs_dim={lrs_dim}")]
    InvalidDimension {
        /// Coordinate dimensionality.
        dim: i32,
        /// LRS measure slot.
        lrs_dim: i32,
    },

    /// A GTYPE NUMBER value does not fit the packed integer representation.
    #[error("SDO_GTYPE value {0} is out of range")]
    GTypeOutOfRange(Decimal),

    /// A NUMBER value could not be represented as the requested primitive.
    #[error("Cannot convert {value} to {target}")]
    NumberConversion {
        /// The offending value.
        value: Decimal,
        /// Name of the target primitive.
        target: &'static str,
    },

    /// The geo-traits dimensions have no SDO coordinate layout.
    #[error(
        "No SDO layout has {size} ordinates per vertex; expected XY (2), XYZ or XYM (3), XYZM (4)"
    )]
    UnsupportedDimensions {
        /// Ordinates per vertex of the rejected dimensions.
        size: usize,
    },

    /// NaN or infinite ordinates have no NUMBER representation.
    #[error("Ordinate {0} is not finite")]
    NonFiniteOrdinate(f64),

    /// A finite ordinate is too large or too small for a NUMBER.
    #[error("Ordinate {0} is outside the NUMBER range")]
    OrdinateOutOfRange(f64),

    /// An element-info starting offset points outside the ordinate array.
    #[error("Element {element} starts at offset {offset}, outside {len} ordinates")]
    ElementOffset {
        /// 0-based element position.
        element: usize,
        /// 1-based starting offset as stored.
        offset: i32,
        /// Ordinate array length.
        len: usize,
    },

    /// An element starts before the previous one, or shares its offset with a simple element.
    #[error("Element {element} starts at offset {offset}, not after offset {previous}")]
    ElementOrder {
        /// 0-based element position.
        element: usize,
        /// 1-based starting offset as stored.
        offset: i32,
        /// 1-based starting offset of the preceding element.
        previous: i32,
    },

    /// An adapter could not supply a required attribute.
    #[error("{type_name} attribute {index} is missing")]
    MissingValue {
        /// Oracle object type name.
        type_name: &'static str,
        /// Positional attribute index.
        index: usize,
    },

    /// An adapter found an attribute of an unexpected type.
    #[error("{type_name} attribute {index} is not a {expected}")]
    TypeMismatch {
        /// Oracle object type name.
        type_name: &'static str,
        /// Positional attribute index.
        index: usize,
        /// Human-readable name of the expected type.
        expected: &'static str,
    },

    /// Wraps an external error, usually raised by a driver adapter.
    #[error("External error: {0}")]
    External(#[from] Box<dyn Error + Send + Sync>),
}

impl From<Violation> for SdoError {
    fn from(value: Violation) -> Self {
        SdoError::InvariantViolation(value)
    }
}

/// Crate-specific result type.
pub type SdoResult<T> = std::result::Result<T, SdoError>;

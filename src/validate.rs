//! Structural checks for [`SdoGeometry`] records.

use std::fmt::Display;

use crate::geometry::SdoGeometry;

/// A broken structural invariant of an [`SdoGeometry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Violation {
    /// `dim` is not 2, 3 or 4.
    Dim(i32),

    /// `lrs_dim` is nonzero and either not 3 or 4, or greater than `dim`.
    LrsDim {
        /// The LRS slot.
        lrs_dim: i32,
        /// The coordinate dimensionality.
        dim: i32,
    },

    /// `elem_info` does not hold whole triplets.
    ElemInfoLength(usize),

    /// `ordinates` does not hold whole vertices.
    OrdinatesLength {
        /// Number of ordinates.
        len: usize,
        /// The coordinate dimensionality.
        dim: i32,
    },

    /// `point` is set together with `elem_info` or `ordinates`.
    PointWithArrays,
}

impl Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Violation::Dim(dim) => write!(f, "dim must be 2, 3 or 4, got {dim}"),
            Violation::LrsDim { lrs_dim, dim } => {
                write!(f, "lrs_dim must be 0, or 3 or 4 and at most dim={dim}, got {lrs_dim}")
            }
            Violation::ElemInfoLength(len) => {
                write!(f, "elem_info length {len} is not a multiple of 3")
            }
            Violation::OrdinatesLength { len, dim } => {
                write!(f, "ordinates length {len} is not a multiple of dim={dim}")
            }
            Violation::PointWithArrays => {
                write!(f, "point and elem_info/ordinates are mutually exclusive")
            }
        }
    }
}

/// Returns the first broken invariant of `geom`, if any.
///
/// Checks run in a fixed order: `dim`, `lrs_dim`, `elem_info` length, `ordinates` length, then
/// point exclusivity.
pub(crate) fn first_violation(geom: &SdoGeometry) -> Option<Violation> {
    let dim = geom.dim;
    if !(2..=4).contains(&dim) {
        return Some(Violation::Dim(dim));
    }

    let lrs_dim = geom.lrs_dim;
    if lrs_dim != 0 && (!(3..=4).contains(&lrs_dim) || lrs_dim > dim) {
        return Some(Violation::LrsDim { lrs_dim, dim });
    }

    let elem_info_len = geom.elem_info.as_ref().map_or(0, Vec::len);
    if elem_info_len % 3 != 0 {
        return Some(Violation::ElemInfoLength(elem_info_len));
    }

    let ordinates_len = geom.ordinates.as_ref().map_or(0, Vec::len);
    // dim is in 2..=4 here
    if ordinates_len % dim as usize != 0 {
        return Some(Violation::OrdinatesLength {
            len: ordinates_len,
            dim,
        });
    }

    if geom.point.is_some() && (elem_info_len > 0 || ordinates_len > 0) {
        return Some(Violation::PointWithArrays);
    }

    None
}

#[cfg(test)]
mod test {
    use rust_decimal::Decimal;

    use super::*;
    use crate::error::SdoError;
    use crate::test::geometry::{line_2d, point_2d, polygon_lrs};
    use crate::GeometryKind;

    fn decimals(n: usize) -> Option<Vec<Decimal>> {
        Some((0..n).map(|i| Decimal::from(i as i64)).collect())
    }

    #[test]
    fn valid_fixtures() {
        assert!(point_2d().validate().is_ok());
        assert!(line_2d().validate().is_ok());
        assert!(polygon_lrs().validate().is_ok());
    }

    #[test]
    fn bad_dim() {
        let mut geom = line_2d();
        geom.dim = 5;
        assert_eq!(first_violation(&geom), Some(Violation::Dim(5)));
        geom.dim = 0;
        assert_eq!(first_violation(&geom), Some(Violation::Dim(0)));
    }

    #[test]
    fn bad_lrs_dim() {
        let mut geom = SdoGeometry::new(3, 4, GeometryKind::LineOrCurve);
        assert_eq!(
            first_violation(&geom),
            Some(Violation::LrsDim { lrs_dim: 4, dim: 3 })
        );
        geom.lrs_dim = 2;
        assert_eq!(
            first_violation(&geom),
            Some(Violation::LrsDim { lrs_dim: 2, dim: 3 })
        );
        geom.lrs_dim = 3;
        assert_eq!(first_violation(&geom), None);
    }

    #[test]
    fn elem_info_not_triplets() {
        let mut geom = line_2d();
        geom.elem_info = decimals(4);
        let err = geom.validate().unwrap_err();
        assert!(matches!(
            err,
            SdoError::InvariantViolation(Violation::ElemInfoLength(4))
        ));
        assert_eq!(
            err.to_string(),
            "Invariant violation: elem_info length 4 is not a multiple of 3"
        );
    }

    #[test]
    fn partial_vertex() {
        let mut geom = line_2d();
        geom.ordinates = decimals(5);
        assert_eq!(
            first_violation(&geom),
            Some(Violation::OrdinatesLength { len: 5, dim: 2 })
        );
    }

    #[test]
    fn point_and_ordinates() {
        let mut geom = point_2d();
        geom.ordinates = decimals(2);
        let err = geom.validate().unwrap_err();
        assert!(matches!(
            err,
            SdoError::InvariantViolation(Violation::PointWithArrays)
        ));
        assert!(err.to_string().contains("mutually exclusive"));
    }

    #[test]
    fn point_with_empty_arrays() {
        let mut geom = point_2d();
        geom.elem_info = Some(vec![]);
        geom.ordinates = Some(vec![]);
        assert_eq!(first_violation(&geom), None);
    }

    #[test]
    fn first_violation_wins() {
        let mut geom = point_2d();
        geom.elem_info = decimals(2);
        geom.ordinates = decimals(3);
        assert_eq!(first_violation(&geom), Some(Violation::ElemInfoLength(2)));
    }
}

use std::ops::Range;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{SdoError, SdoResult};
use crate::geometry::to_i32;

/// One `(starting_offset, etype, interpretation)` triplet of an `SDO_ELEM_INFO` array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementInfo {
    /// 1-based position of the element's first ordinate in `SDO_ORDINATES`.
    pub starting_offset: i32,

    /// Element type (`SDO_ETYPE`).
    pub etype: i32,

    /// For simple elements, how the ordinates are connected. For compound elements, the number
    /// of triplets that follow and belong to this element.
    pub interpretation: i32,
}

impl ElementInfo {
    /// Creates a new [`ElementInfo`].
    pub fn new(starting_offset: i32, etype: i32, interpretation: i32) -> Self {
        Self {
            starting_offset,
            etype,
            interpretation,
        }
    }

    /// Point, line, or polygon ring described by a single triplet.
    pub fn is_simple(&self) -> bool {
        matches!(self.etype, 1 | 2 | 3 | 1003 | 2003)
    }

    /// Header of a compound line string or compound polygon ring.
    pub fn is_compound(&self) -> bool {
        matches!(self.etype, 4 | 1005 | 2005)
    }

    /// Header of a surface made of polygon rings.
    pub fn is_surface(&self) -> bool {
        matches!(self.etype, 1006 | 2006)
    }

    /// Header of a solid.
    pub fn is_solid(&self) -> bool {
        self.etype == 1007
    }

    /// Exterior ring or surface; a 4-digit `etype` starting with `1`.
    pub fn is_exterior(&self) -> bool {
        matches!(self.etype, 1003 | 1005 | 1006)
    }

    /// Interior ring or surface; a 4-digit `etype` starting with `2`.
    pub fn is_interior(&self) -> bool {
        matches!(self.etype, 2003 | 2005 | 2006)
    }
}

/// An element triplet together with the slice of ordinates it covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// The element triplet.
    pub info: ElementInfo,

    /// 0-based range into `SDO_ORDINATES`.
    pub ordinates: Range<usize>,
}

/// Splits an element-info array into elements and resolves their ordinate ranges.
///
/// Each element runs from its starting offset to one before the next element's starting
/// offset; the last one runs to the end of the ordinates. A trailing partial triplet is
/// ignored.
///
/// Starting offsets must ascend. Only a compound, surface or solid header may share its
/// offset with the element after it.
pub(crate) fn split_elements(
    elem_info: &[Decimal],
    num_ordinates: usize,
) -> SdoResult<Vec<Element>> {
    let infos = elem_info
        .chunks_exact(3)
        .map(|triplet| -> SdoResult<ElementInfo> {
            Ok(ElementInfo::new(
                to_i32(triplet[0])?,
                to_i32(triplet[1])?,
                to_i32(triplet[2])?,
            ))
        })
        .collect::<SdoResult<Vec<_>>>()?;

    let starts = infos
        .iter()
        .enumerate()
        .map(|(element, info)| {
            usize::try_from(info.starting_offset)
                .ok()
                .filter(|offset| (1..=num_ordinates + 1).contains(offset))
                .map(|offset| offset - 1)
                .ok_or(SdoError::ElementOffset {
                    element,
                    offset: info.starting_offset,
                    len: num_ordinates,
                })
        })
        .collect::<SdoResult<Vec<_>>>()?;

    for (i, pair) in infos.windows(2).enumerate() {
        let (prev, next) = (pair[0], pair[1]);
        let is_header = prev.is_compound() || prev.is_surface() || prev.is_solid();
        if starts[i + 1] < starts[i] || (starts[i + 1] == starts[i] && !is_header) {
            return Err(SdoError::ElementOrder {
                element: i + 1,
                offset: next.starting_offset,
                previous: prev.starting_offset,
            });
        }
    }

    let mut elements = Vec::with_capacity(infos.len());
    for (i, info) in infos.into_iter().enumerate() {
        let start = starts[i];
        let end = starts.get(i + 1).copied().unwrap_or(num_ordinates);
        elements.push(Element {
            info,
            ordinates: start..end,
        });
    }
    Ok(elements)
}

#[cfg(test)]
mod test {
    use super::*;

    fn decimals(values: &[i32]) -> Vec<Decimal> {
        values.iter().map(|v| Decimal::from(*v)).collect()
    }

    #[test]
    fn polygon_with_hole() {
        // Exterior ring of 5 vertices then an interior ring of 5 vertices, 2D.
        let elem_info = decimals(&[1, 1003, 1, 11, 2003, 1]);
        let elements = split_elements(&elem_info, 20).unwrap();
        assert_eq!(elements.len(), 2);

        assert!(elements[0].info.is_exterior());
        assert!(elements[0].info.is_simple());
        assert_eq!(elements[0].ordinates, 0..10);

        assert!(elements[1].info.is_interior());
        assert_eq!(elements[1].ordinates, 10..20);
    }

    #[test]
    fn compound_line() {
        let elem_info = decimals(&[1, 4, 2, 1, 2, 1, 3, 2, 2]);
        let elements = split_elements(&elem_info, 10).unwrap();
        assert!(elements[0].info.is_compound());
        assert_eq!(elements[0].info.interpretation, 2);
        assert_eq!(elements[0].ordinates, 0..0);
        assert_eq!(elements[1].ordinates, 0..2);
        assert_eq!(elements[2].ordinates, 2..10);
    }

    #[test]
    fn classification() {
        assert!(ElementInfo::new(1, 1006, 2).is_surface());
        assert!(ElementInfo::new(1, 1006, 2).is_exterior());
        assert!(ElementInfo::new(1, 1007, 1).is_solid());
        assert!(ElementInfo::new(1, 2005, 2).is_compound());
        assert!(!ElementInfo::new(1, 2, 1).is_exterior());
    }

    #[test]
    fn offset_out_of_range() {
        let elem_info = decimals(&[1, 2, 1, 9, 2, 1]);
        let err = split_elements(&elem_info, 4).unwrap_err();
        assert!(matches!(
            err,
            SdoError::ElementOffset {
                element: 1,
                offset: 9,
                len: 4
            }
        ));

        assert!(split_elements(&decimals(&[0, 1, 1]), 2).is_err());
    }

    #[test]
    fn offsets_out_of_order() {
        let elem_info = decimals(&[5, 2, 1, 1, 2, 1]);
        let err = split_elements(&elem_info, 5).unwrap_err();
        assert!(matches!(
            err,
            SdoError::ElementOrder {
                element: 1,
                offset: 1,
                previous: 5
            }
        ));

        // Two simple elements cannot share a starting offset.
        let elem_info = decimals(&[1, 2, 1, 1, 2, 1]);
        assert!(matches!(
            split_elements(&elem_info, 4),
            Err(SdoError::ElementOrder { element: 1, .. })
        ));
    }

    #[test]
    fn headers_share_offset() {
        // Solid, then its outer surface, then the first ring of that surface.
        let elem_info = decimals(&[1, 1007, 1, 1, 1006, 1, 1, 1003, 1]);
        let elements = split_elements(&elem_info, 15).unwrap();
        assert_eq!(elements[0].ordinates, 0..0);
        assert_eq!(elements[1].ordinates, 0..0);
        assert_eq!(elements[2].ordinates, 0..15);
    }

    #[test]
    fn empty() {
        assert!(split_elements(&[], 0).unwrap().is_empty());
    }
}

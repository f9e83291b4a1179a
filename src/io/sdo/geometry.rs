use tracing::trace;

use crate::error::{Result, SdoError};
use crate::io::sdo::elem_info::ElemInfo;
use crate::io::sdo::element_type::ElementType;
use crate::io::sdo::gtype::{SdoGType, TypeGeometry};
use crate::io::sdo::ordinates::Ordinates;
use crate::io::sdo::point::SdoPoint;

/// An `SDO_GEOMETRY` value in its flattened form.
///
/// `info` and `ordinates` are expected to agree with each other: every element offset points into
/// `ordinates`, and the ordinates are grouped in tuples of `gtype.dimension()` values.
#[derive(Debug, Clone, PartialEq)]
pub struct SdoGeometry {
    gtype: SdoGType,
    srid: i32,
    point: Option<SdoPoint>,
    info: ElemInfo,
    ordinates: Ordinates,
}

impl SdoGeometry {
    pub fn new(
        gtype: SdoGType,
        srid: i32,
        point: Option<SdoPoint>,
        info: ElemInfo,
        ordinates: Ordinates,
    ) -> Self {
        Self {
            gtype,
            srid,
            point,
            info,
            ordinates,
        }
    }

    /// A geometry without elements or ordinates.
    pub fn empty(gtype: SdoGType, srid: i32) -> Self {
        Self::new(gtype, srid, None, ElemInfo::default(), Ordinates::default())
    }

    pub fn gtype(&self) -> SdoGType {
        self.gtype
    }

    pub fn srid(&self) -> i32 {
        self.srid
    }

    pub fn point(&self) -> Option<&SdoPoint> {
        self.point.as_ref()
    }

    pub fn info(&self) -> &ElemInfo {
        &self.info
    }

    pub fn ordinates(&self) -> &Ordinates {
        &self.ordinates
    }

    pub fn set_gtype(&mut self, gtype: SdoGType) {
        self.gtype = gtype;
    }

    pub fn set_srid(&mut self, srid: i32) {
        self.srid = srid;
    }

    pub fn set_point(&mut self, point: Option<SdoPoint>) {
        self.point = point;
    }

    /// The number of ordinates per coordinate.
    pub fn dimension(&self) -> usize {
        self.gtype.dimension() as usize
    }

    pub fn is_lrs_geometry(&self) -> bool {
        self.gtype.is_lrs_geometry()
    }

    /// The number of elements, counting compound sub-elements individually.
    pub fn num_elements(&self) -> usize {
        self.info.size()
    }

    /// Append element triplets. Offsets are taken as-is.
    pub fn add_element(&mut self, triplets: &[i32]) -> Result<()> {
        self.info.add_element(triplets)
    }

    pub fn add_ordinates(&mut self, ordinates: &[f64]) {
        self.ordinates.add_ordinates(ordinates);
    }

    /// The ordinates of element `i`.
    ///
    /// A sub-element of a compound element shares its last coordinate with the next
    /// sub-element. With `includes_next_start` the slice is extended by one tuple to include that
    /// shared coordinate.
    pub fn element_ordinates(&self, i: usize, includes_next_start: bool) -> Result<&[f64]> {
        let start = self.info.ordinates_offset(i)?;
        if i + 1 < self.info.size() {
            let mut end = self.info.ordinates_offset(i + 1)?;
            if includes_next_start {
                end = end.checked_add(self.gtype.dimension()).ok_or_else(|| {
                    SdoError::OutOfRange(format!("ordinates offset {end} of element {}", i + 1))
                })?;
            }
            self.ordinates.ordinates_array(start, end)
        } else {
            self.ordinates.ordinates_array_from(start)
        }
    }

    /// Combine element geometries into a single COLLECTION.
    ///
    /// The collection takes its dimension, LRS dimension and SRID from the first element. Every
    /// element must share that dimension and LRS dimension. Element offsets are shifted by the
    /// number of ordinates written before them.
    pub fn join(elements: &[SdoGeometry]) -> Result<SdoGeometry> {
        let Some(first) = elements.first() else {
            return Ok(SdoGeometry::empty(
                SdoGType::new(2, 0, TypeGeometry::Collection)?,
                0,
            ));
        };

        let gtype = first.gtype.with_type_geometry(TypeGeometry::Collection);
        let mut collection = SdoGeometry::empty(gtype, first.srid);
        for element in elements {
            if element.info.is_empty() {
                continue;
            }
            if element.gtype.dimension() != gtype.dimension()
                || element.gtype.lrs_dimension() != gtype.lrs_dimension()
            {
                return Err(SdoError::Malformed(format!(
                    "cannot join an element with SDO_GTYPE {} into a collection with SDO_GTYPE {}",
                    element.gtype, gtype
                )));
            }
            let next_offset = i32::try_from(collection.ordinates.len() + 1).map_err(|_| {
                SdoError::OutOfRange(format!(
                    "{} ordinates do not fit an element offset",
                    collection.ordinates.len()
                ))
            })?;
            let first_offset = element.info.ordinates_offset(0)?;
            let delta = next_offset.checked_sub(first_offset).ok_or_else(|| {
                SdoError::OutOfRange(format!("ordinates offset {first_offset}"))
            })?;
            let mut info = element.info.clone();
            info.shift_offsets(delta)?;
            collection.info.extend(&info);
            collection.add_ordinates(element.ordinates.ordinate_array());
        }
        trace!(
            elements = elements.len(),
            gtype = collection.gtype.int_value(),
            "joined collection"
        );
        Ok(collection)
    }

    /// Split a COLLECTION into standalone geometries, one per logical element.
    ///
    /// An exterior ring takes the interior rings that directly follow it, a point takes the
    /// orientation elements that directly follow it, and a compound element takes its
    /// sub-elements. Every resulting geometry has its own element offsets starting at 1.
    /// Any other geometry kind is returned as the only element.
    pub fn element_geometries(&self) -> Result<Vec<SdoGeometry>> {
        if self.gtype.type_geometry() != TypeGeometry::Collection {
            return Ok(vec![self.clone()]);
        }

        let size = self.info.size();
        let mut elements = Vec::new();
        let mut i = 0;
        while i < size {
            let element_type = self.info.element_type(i)?;
            let mut next = self.next_element(i)?;
            if element_type.is_exterior_ring() {
                while next < size && self.info.element_type(next)?.is_interior_ring() {
                    next = self.next_element(next)?;
                }
            } else if element_type == ElementType::Point {
                while next < size && self.info.element_type(next)? == ElementType::Orientation {
                    next += 1;
                }
            }

            let gtype = self.gtype.with_type_geometry(derive_type_geometry(element_type)?);
            let info = ElemInfo::new(self.info.elements(i..next)?.to_vec())?.renumbered()?;
            let start = self.info.ordinates_offset(i)?;
            let ordinates = if next < size {
                self.ordinates
                    .ordinates_array(start, self.info.ordinates_offset(next)?)?
            } else {
                self.ordinates.ordinates_array_from(start)?
            };
            elements.push(SdoGeometry::new(
                gtype,
                self.srid,
                None,
                info,
                Ordinates::new(ordinates.to_vec()),
            ));
            i = next;
        }
        trace!(elements = elements.len(), "decomposed collection");
        Ok(elements)
    }

    /// The index of the element after element `i` and its sub-elements.
    pub(crate) fn next_element(&self, i: usize) -> Result<usize> {
        if self.info.is_compound(i)? {
            Ok(i + self.info.num_compounds(i)? + 1)
        } else {
            Ok(i + 1)
        }
    }
}

fn derive_type_geometry(element_type: ElementType) -> Result<TypeGeometry> {
    use ElementType::*;
    match element_type {
        Point => Ok(TypeGeometry::Point),
        PointCluster => Ok(TypeGeometry::MultiPoint),
        LineStraightSegments | LineArcSegments | CompoundLine => Ok(TypeGeometry::Line),
        InteriorRingStraightSegments
        | ExteriorRingStraightSegments
        | InteriorRingArcSegments
        | ExteriorRingArcSegments
        | InteriorRingRect
        | ExteriorRingRect
        | InteriorRingCircle
        | ExteriorRingCircle
        | CompoundExteriorRing
        | CompoundInteriorRing => Ok(TypeGeometry::Polygon),
        Orientation => Err(SdoError::Malformed(
            "orientation element without a preceding point".to_string(),
        )),
        Unsupported => Err(SdoError::Unsupported(
            "element type 0 inside a collection".to_string(),
        )),
    }
}

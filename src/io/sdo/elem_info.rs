use std::ops::Range;

use crate::error::{Result, SdoError};
use crate::io::sdo::element_type::ElementType;

/// The `SDO_ELEM_INFO` array: one `(offset, etype, interpretation)` triplet per element.
///
/// Offsets are 1-based positions into the companion ordinates array. A compound element is
/// followed by `interpretation` sub-elements, which are counted individually in [`Self::size`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ElemInfo {
    triplets: Vec<i32>,
}

impl ElemInfo {
    pub fn new(triplets: Vec<i32>) -> Result<Self> {
        if triplets.len() % 3 != 0 {
            return Err(SdoError::Malformed(format!(
                "element info length {} is not a multiple of 3",
                triplets.len()
            )));
        }
        Ok(Self { triplets })
    }

    /// Allocate space for `size` elements.
    pub fn with_capacity(size: usize) -> Self {
        Self {
            triplets: Vec::with_capacity(3 * size),
        }
    }

    /// The raw triplet array.
    pub fn triplets(&self) -> &[i32] {
        &self.triplets
    }

    /// The number of elements, counting compound sub-elements individually.
    pub fn size(&self) -> usize {
        self.triplets.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.triplets.is_empty()
    }

    fn check_index(&self, i: usize) -> Result<()> {
        if i >= self.size() {
            return Err(SdoError::OutOfRange(format!(
                "element index {i} with {} elements",
                self.size()
            )));
        }
        Ok(())
    }

    pub fn ordinates_offset(&self, i: usize) -> Result<i32> {
        self.check_index(i)?;
        Ok(self.triplets[3 * i])
    }

    pub fn set_ordinates_offset(&mut self, i: usize, offset: i32) -> Result<()> {
        self.check_index(i)?;
        self.triplets[3 * i] = offset;
        Ok(())
    }

    pub fn etype(&self, i: usize) -> Result<i32> {
        self.check_index(i)?;
        Ok(self.triplets[3 * i + 1])
    }

    pub fn interpretation(&self, i: usize) -> Result<i32> {
        self.check_index(i)?;
        Ok(self.triplets[3 * i + 2])
    }

    pub fn element_type(&self, i: usize) -> Result<ElementType> {
        ElementType::parse(self.etype(i)?, self.interpretation(i)?)
    }

    pub fn is_compound(&self, i: usize) -> Result<bool> {
        Ok(self.element_type(i)?.is_compound())
    }

    /// The number of sub-elements of a compound element, or 1 for a simple element.
    pub fn num_compounds(&self, i: usize) -> Result<usize> {
        if !self.is_compound(i)? {
            return Ok(1);
        }
        let count = self.interpretation(i)?;
        let count = usize::try_from(count)
            .map_err(|_| SdoError::Malformed(format!("negative sub-element count {count}")))?;
        if i + count >= self.size() {
            return Err(SdoError::Malformed(format!(
                "compound element {i} declares {count} sub-elements but only {} follow",
                self.size() - i - 1
            )));
        }
        Ok(count)
    }

    /// The triplets of element `i`; for a compound element including its sub-elements.
    pub fn element(&self, i: usize) -> Result<&[i32]> {
        let len = if self.is_compound(i)? {
            self.num_compounds(i)? + 1
        } else {
            1
        };
        self.elements(i..i + len)
    }

    /// The triplets of a contiguous range of elements.
    pub fn elements(&self, range: Range<usize>) -> Result<&[i32]> {
        if range.start > range.end || range.end > self.size() {
            return Err(SdoError::OutOfRange(format!(
                "elements {range:?} with {} elements",
                self.size()
            )));
        }
        Ok(&self.triplets[3 * range.start..3 * range.end])
    }

    /// Overwrite an existing element.
    pub fn set_element(
        &mut self,
        i: usize,
        ordinates_offset: i32,
        etype: i32,
        interpretation: i32,
    ) -> Result<()> {
        self.check_index(i)?;
        self.triplets[3 * i..3 * i + 3].copy_from_slice(&[ordinates_offset, etype, interpretation]);
        Ok(())
    }

    /// Append one or more raw triplets.
    pub fn add_element(&mut self, triplets: &[i32]) -> Result<()> {
        if triplets.len() % 3 != 0 {
            return Err(SdoError::Malformed(format!(
                "cannot append {} values as element triplets",
                triplets.len()
            )));
        }
        self.triplets.extend_from_slice(triplets);
        Ok(())
    }

    /// Append all elements of another element info.
    pub fn extend(&mut self, other: &ElemInfo) {
        self.triplets.extend_from_slice(&other.triplets);
    }

    /// Add `delta` to every ordinates offset.
    ///
    /// Offsets that would overflow are rejected and leave the element info unchanged.
    pub fn shift_offsets(&mut self, delta: i32) -> Result<()> {
        let shifted = self
            .triplets
            .iter()
            .step_by(3)
            .map(|offset| {
                offset.checked_add(delta).ok_or_else(|| {
                    SdoError::OutOfRange(format!("ordinates offset {offset} shifted by {delta}"))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        for (offset, value) in self.triplets.iter_mut().step_by(3).zip(shifted) {
            *offset = value;
        }
        Ok(())
    }

    /// A copy of this element info with offsets renumbered to start at 1.
    pub fn renumbered(&self) -> Result<Self> {
        let mut info = self.clone();
        if let Some(first) = self.triplets.first() {
            let delta = 1i32.checked_sub(*first).ok_or_else(|| {
                SdoError::OutOfRange(format!("cannot renumber from ordinates offset {first}"))
            })?;
            info.shift_offsets(delta)?;
        }
        Ok(info)
    }
}

impl TryFrom<Vec<i32>> for ElemInfo {
    type Error = SdoError;

    fn try_from(value: Vec<i32>) -> Result<Self> {
        Self::new(value)
    }
}

use crate::error::{Result, SdoError};

/// The `SDO_ORDINATES` array: all coordinate values of a geometry, one tuple after the other.
///
/// Null ordinates coming from a driver are stored as `NaN`.
#[derive(Debug, Clone, Default)]
pub struct Ordinates {
    ordinates: Vec<f64>,
}

impl Ordinates {
    pub fn new(ordinates: Vec<f64>) -> Self {
        Self { ordinates }
    }

    pub fn len(&self) -> usize {
        self.ordinates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordinates.is_empty()
    }

    pub fn ordinate_array(&self) -> &[f64] {
        &self.ordinates
    }

    /// The ordinates from the 1-based position `start` to the end of the array.
    pub fn ordinates_array_from(&self, start: i32) -> Result<&[f64]> {
        let first = self.first_index(start)?;
        Ok(&self.ordinates[first..])
    }

    /// The ordinates from the 1-based position `start` up to, but excluding, the 1-based position
    /// `end`.
    pub fn ordinates_array(&self, start: i32, end: i32) -> Result<&[f64]> {
        let first = self.first_index(start)?;
        let last = usize::try_from(i64::from(end) - 1)
            .ok()
            .filter(|last| *last >= first && *last <= self.ordinates.len())
            .ok_or_else(|| {
                SdoError::OutOfRange(format!(
                    "ordinates {start}..{end} with {} ordinates",
                    self.ordinates.len()
                ))
            })?;
        Ok(&self.ordinates[first..last])
    }

    fn first_index(&self, start: i32) -> Result<usize> {
        usize::try_from(i64::from(start) - 1)
            .ok()
            .filter(|first| *first <= self.ordinates.len())
            .ok_or_else(|| {
                SdoError::OutOfRange(format!(
                    "ordinate position {start} with {} ordinates",
                    self.ordinates.len()
                ))
            })
    }

    pub fn add_ordinates(&mut self, ordinates: &[f64]) {
        self.ordinates.extend_from_slice(ordinates);
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.ordinates
    }
}

impl PartialEq for Ordinates {
    fn eq(&self, other: &Self) -> bool {
        self.ordinates.len() == other.ordinates.len()
            && self
                .ordinates
                .iter()
                .zip(other.ordinates.iter())
                .all(|(a, b)| a == b || (a.is_nan() && b.is_nan()))
    }
}

impl From<Vec<f64>> for Ordinates {
    fn from(value: Vec<f64>) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn one_based_slices() {
        let ordinates = Ordinates::new(vec![0., 1., 2., 3., 4., 5.]);
        assert_eq!(ordinates.ordinates_array(1, 3).unwrap(), &[0., 1.]);
        assert_eq!(ordinates.ordinates_array(3, 7).unwrap(), &[2., 3., 4., 5.]);
        assert_eq!(ordinates.ordinates_array_from(5).unwrap(), &[4., 5.]);
        assert!(ordinates.ordinates_array_from(7).unwrap().is_empty());
    }

    #[test]
    fn out_of_range() {
        let ordinates = Ordinates::new(vec![0., 1., 2., 3.]);
        assert!(ordinates.ordinates_array(0, 2).is_err());
        assert!(ordinates.ordinates_array(1, 6).is_err());
        assert!(ordinates.ordinates_array(3, 2).is_err());
        assert!(ordinates.ordinates_array_from(6).is_err());
    }

    #[test]
    fn extreme_positions() {
        let ordinates = Ordinates::new(vec![0., 1., 2., 3.]);
        assert!(matches!(
            ordinates.ordinates_array_from(i32::MIN),
            Err(SdoError::OutOfRange(_))
        ));
        assert!(matches!(
            ordinates.ordinates_array(1, i32::MIN),
            Err(SdoError::OutOfRange(_))
        ));
        assert!(matches!(
            ordinates.ordinates_array(1, i32::MAX),
            Err(SdoError::OutOfRange(_))
        ));
    }

    #[test]
    fn grow() {
        let mut ordinates = Ordinates::default();
        ordinates.add_ordinates(&[1., 2.]);
        ordinates.add_ordinates(&[f64::NAN]);
        assert_eq!(ordinates.len(), 3);
        assert_eq!(ordinates, Ordinates::new(vec![1., 2., f64::NAN]));
    }
}

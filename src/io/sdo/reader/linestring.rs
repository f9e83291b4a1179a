use crate::error::Result;
use crate::geometry::{LineString, MultiLineString};
use crate::io::sdo::geometry::SdoGeometry;
use crate::io::sdo::options::SdoOptions;
use crate::io::sdo::reader::element::logical_element_coords;

/// Decode a LINE. All elements are appended into one line string.
pub(crate) fn read_line_string(sdo: &SdoGeometry, options: &SdoOptions) -> Result<LineString> {
    let mut coords = Vec::new();
    let mut i = 0;
    while i < sdo.num_elements() {
        let (element, next) = logical_element_coords(sdo, i, options)?;
        coords.extend(element);
        i = next;
    }
    Ok(LineString::new(coords))
}

/// Decode a MULTILINE, one line string per logical element.
pub(crate) fn read_multi_line_string(
    sdo: &SdoGeometry,
    options: &SdoOptions,
) -> Result<MultiLineString> {
    let mut lines = Vec::new();
    let mut i = 0;
    while i < sdo.num_elements() {
        let (element, next) = logical_element_coords(sdo, i, options)?;
        lines.push(LineString::new(element));
        i = next;
    }
    Ok(MultiLineString(lines))
}

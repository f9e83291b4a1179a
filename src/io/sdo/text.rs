//! The SQL constructor form of an `SDO_GEOMETRY`, e.g.
//! `SDO_GEOMETRY(2001, 4326, SDO_POINT_TYPE(1, 2, NULL), NULL, NULL)`.

use std::fmt;
use std::str::FromStr;

use itertools::Itertools;
use nom::branch::alt;
use nom::bytes::complete::tag_no_case;
use nom::character::complete::{char, multispace0};
use nom::combinator::{all_consuming, map, opt, value};
use nom::multi::separated_list0;
use nom::number::complete::double;
use nom::sequence::{delimited, pair, preceded, terminated, tuple};
use nom::IResult;

use crate::error::SdoError;
use crate::io::sdo::elem_info::ElemInfo;
use crate::io::sdo::geometry::SdoGeometry;
use crate::io::sdo::gtype::SdoGType;
use crate::io::sdo::ordinates::Ordinates;
use crate::io::sdo::point::SdoPoint;

/// Prints `NaN` as `NULL`.
struct Ordinate(f64);

impl fmt::Display for Ordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_nan() {
            f.write_str("NULL")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl fmt::Display for SdoGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SDO_GEOMETRY({}, ", self.gtype())?;
        if self.srid() == 0 {
            f.write_str("NULL, ")?;
        } else {
            write!(f, "{}, ", self.srid())?;
        }

        match self.point() {
            Some(p) => write!(
                f,
                "SDO_POINT_TYPE({}, {}, {}), ",
                Ordinate(p.x),
                Ordinate(p.y),
                Ordinate(p.z)
            )?,
            None => f.write_str("NULL, ")?,
        }

        if self.info().is_empty() {
            f.write_str("NULL, ")?;
        } else {
            write!(
                f,
                "SDO_ELEM_INFO_ARRAY({}), ",
                self.info().triplets().iter().join(", ")
            )?;
        }

        if self.ordinates().is_empty() {
            f.write_str("NULL)")
        } else {
            write!(
                f,
                "SDO_ORDINATE_ARRAY({}))",
                self.ordinates()
                    .ordinate_array()
                    .iter()
                    .map(|v| Ordinate(*v))
                    .join(", ")
            )
        }
    }
}

type Parsed<'a, O> = IResult<&'a str, O>;

fn ws<'a, O>(inner: impl FnMut(&'a str) -> Parsed<'a, O>) -> impl FnMut(&'a str) -> Parsed<'a, O> {
    delimited(multispace0, inner, multispace0)
}

fn null(input: &str) -> Parsed<()> {
    value((), ws(tag_no_case("NULL")))(input)
}

fn comma(input: &str) -> Parsed<char> {
    ws(char(','))(input)
}

/// A constructor name with an optional `MDSYS.` schema prefix.
fn constructor<'a>(name: &'static str) -> impl FnMut(&'a str) -> Parsed<'a, &'a str> {
    preceded(
        opt(pair(ws(tag_no_case("MDSYS")), char('.'))),
        ws(tag_no_case(name)),
    )
}

fn arguments<'a, O>(
    inner: impl FnMut(&'a str) -> Parsed<'a, O>,
) -> impl FnMut(&'a str) -> Parsed<'a, O> {
    delimited(ws(char('(')), inner, ws(char(')')))
}

fn integer(input: &str) -> Parsed<i32> {
    ws(nom::character::complete::i32)(input)
}

fn ordinate(input: &str) -> Parsed<f64> {
    alt((value(f64::NAN, null), ws(double)))(input)
}

fn srid(input: &str) -> Parsed<i32> {
    alt((value(0, null), integer))(input)
}

fn point(input: &str) -> Parsed<Option<SdoPoint>> {
    alt((
        value(None, null),
        map(
            preceded(
                constructor("SDO_POINT_TYPE"),
                arguments(tuple((
                    terminated(ordinate, comma),
                    terminated(ordinate, comma),
                    ordinate,
                ))),
            ),
            |(x, y, z): (f64, f64, f64)| {
                if x.is_nan() && y.is_nan() && z.is_nan() {
                    None
                } else {
                    Some(SdoPoint::new(x, y, z))
                }
            },
        ),
    ))(input)
}

fn elem_info(input: &str) -> Parsed<Vec<i32>> {
    alt((
        value(Vec::new(), null),
        preceded(
            constructor("SDO_ELEM_INFO_ARRAY"),
            arguments(separated_list0(comma, integer)),
        ),
    ))(input)
}

fn ordinates(input: &str) -> Parsed<Vec<f64>> {
    alt((
        value(Vec::new(), null),
        preceded(
            constructor("SDO_ORDINATE_ARRAY"),
            arguments(separated_list0(comma, ordinate)),
        ),
    ))(input)
}

type Fields = (i32, i32, Option<SdoPoint>, Vec<i32>, Vec<f64>);

fn sdo_geometry(input: &str) -> Parsed<Fields> {
    preceded(
        constructor("SDO_GEOMETRY"),
        arguments(tuple((
            terminated(integer, comma),
            terminated(srid, comma),
            terminated(point, comma),
            terminated(elem_info, comma),
            ordinates,
        ))),
    )(input)
}

impl FromStr for SdoGeometry {
    type Err = SdoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (_, (gtype, srid, point, triplets, ordinates)) = all_consuming(sdo_geometry)(s)
            .map_err(|err| SdoError::Parse(err.to_string()))?;
        if point.is_some_and(|p| p.x.is_nan() || p.y.is_nan()) {
            return Err(SdoError::Malformed("SDO_POINT without x or y".to_string()));
        }
        Ok(SdoGeometry::new(
            SdoGType::parse(gtype)?,
            srid,
            point,
            ElemInfo::new(triplets)?,
            Ordinates::new(ordinates),
        ))
    }
}

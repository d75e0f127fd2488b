use std::fmt;
use std::str::FromStr;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SdeError};
use crate::notation::to_prefix;
use crate::utils::format_sci;

/// Dimensionality of the simulation, selects between flat and solid primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Dimension {
    #[default]
    #[serde(rename = "2D")]
    TwoD,
    #[serde(rename = "3D")]
    ThreeD,
}

impl FromStr for Dimension {
    type Err = SdeError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "2D" | "2d" => Ok(Dimension::TwoD),
            "3D" | "3d" => Ok(Dimension::ThreeD),
            _ => Err(SdeError::InvalidDimension(s.to_owned())),
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Dimension::TwoD => write!(f, "2D"),
            Dimension::ThreeD => write!(f, "3D"),
        }
    }
}

/// A literal number or an infix expression over script variables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(f64),
    Expr(String),
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Number(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::Number(value.into())
    }
}

impl From<&str> for Scalar {
    fn from(expr: &str) -> Self {
        Scalar::Expr(expr.to_owned())
    }
}

impl From<String> for Scalar {
    fn from(expr: String) -> Self {
        Scalar::Expr(expr)
    }
}

/// Expressions are written in prefix notation, numbers as `%.3e`.
pub fn render_scalar(scalar: &Scalar) -> Result<String> {
    match scalar {
        Scalar::Number(value) => Ok(format_sci(*value, 3)),
        Scalar::Expr(expr) => to_prefix(expr),
    }
}

/// A position given by two or three coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Point(pub Vec<Scalar>);

impl<A: Into<Scalar>, B: Into<Scalar>> From<(A, B)> for Point {
    fn from((x, y): (A, B)) -> Self {
        Point(vec![x.into(), y.into()])
    }
}

impl<A: Into<Scalar>, B: Into<Scalar>, C: Into<Scalar>> From<(A, B, C)> for Point {
    fn from((x, y, z): (A, B, C)) -> Self {
        Point(vec![x.into(), y.into(), z.into()])
    }
}

/// Renders the three coordinates of `point` as `(x) (y) (z)`.
///
/// In 2D the third coordinate is always zero, whatever the point carries. A
/// coordinate missing from a 3D point is written as a bare `0`.
pub fn render_point(dim: Dimension, point: &Point) -> Result<String> {
    let coords: Vec<String> = (0..3)
        .map(|axis| match (dim, axis, point.0.get(axis)) {
            (Dimension::TwoD, 2, _) => Ok(format_sci(0.0, 3)),
            (_, _, Some(scalar)) => render_scalar(scalar),
            (_, _, None) => Ok("0".to_owned()),
        })
        .collect::<Result<_>>()?;
    Ok(coords.iter().map(|coord| format!("({})", coord)).join(" "))
}

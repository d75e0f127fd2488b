use std::fmt;

use serde::{Deserialize, Serialize};

use super::point::{render_point, Dimension, Point};
use crate::error::Result;
use crate::utils::format_sci;

/// One argument of a refinement function: quoted text or a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RefinementParam {
    Number(f64),
    Text(String),
}

impl From<f64> for RefinementParam {
    fn from(value: f64) -> Self {
        RefinementParam::Number(value)
    }
}

impl From<i32> for RefinementParam {
    fn from(value: i32) -> Self {
        RefinementParam::Number(value.into())
    }
}

impl From<&str> for RefinementParam {
    fn from(text: &str) -> Self {
        RefinementParam::Text(text.to_owned())
    }
}

impl fmt::Display for RefinementParam {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RefinementParam::Number(value) => write!(f, "{}", format_sci(*value, 2)),
            RefinementParam::Text(text) => write!(f, "\"{}\"", text),
        }
    }
}

/// A rectangular (cuboid in 3D) refinement window with its size bounds and
/// refinement functions.
///
/// `sizes` holds `[xmax, xmin, ymax, ymin]`, plus `[zmax, zmin]` in 3D.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshSpec {
    pub name: String,
    pub p1: Point,
    pub p2: Point,
    pub sizes: Vec<f64>,
    #[serde(default)]
    pub refinements: Vec<Vec<RefinementParam>>,
}

/// Reorders `[xmax, xmin, ymax, ymin, (zmax, zmin)]` into all maxima then
/// all minima. Missing entries are dropped.
pub fn ordered_sizes(dim: Dimension, sizes: &[f64]) -> Vec<f64> {
    let order: &[usize] = match dim {
        Dimension::TwoD => &[0, 2, 1, 3],
        Dimension::ThreeD => &[0, 2, 4, 1, 3, 5],
    };
    order.iter().filter_map(|&i| sizes.get(i).copied()).collect()
}

pub fn render_mesh(dim: Dimension, mesh: &MeshSpec) -> Result<String> {
    let name = &mesh.name;
    let window = match dim {
        Dimension::TwoD => "Rectangle",
        Dimension::ThreeD => "Cuboid",
    };
    let mut statements = format!(
        "(sdedr:define-refinement-window  \"RefWin.{}\"  \"{}\"  (position {}) (position {})) \n\n",
        name,
        window,
        render_point(dim, &mesh.p1)?,
        render_point(dim, &mesh.p2)?
    );

    let sizes: Vec<String> = ordered_sizes(dim, &mesh.sizes)
        .into_iter()
        .map(|size| format_sci(size, 3))
        .collect();
    statements.push_str(&format!(
        "(sdedr:define-refinement-size \"RefDef.{}\" {}) \n\n",
        name,
        sizes.join(" ")
    ));

    for refinement in &mesh.refinements {
        statements.push_str(&format!("(sdedr:define-refinement-function \"RefDef.{}\" ", name));
        for param in refinement {
            statements.push_str(&format!("{} ", param));
        }
        statements.push_str(") \n\n");
    }

    statements.push_str(&format!(
        "(sdedr:define-refinement-placement  \"PlaceRF.{0}\"  \"RefDef.{0}\"  \"RefWin.{0}\") \n\n",
        name
    ));
    Ok(statements)
}

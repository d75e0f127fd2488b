//! Region primitives. Every primitive is flat in 2D and solid in 3D where the
//! editor distinguishes the two.

use serde::{Deserialize, Serialize};

use super::point::{render_point, Dimension, Point};
use crate::error::Result;
use crate::utils::format_sci;

/// Outline of a region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum Shape {
    /// Axis aligned rectangle (cuboid in 3D) spanned by two opposite corners.
    Rectangle { p1: Point, p2: Point },
    /// `n_faces` sided polygon inscribed in a circle, rotated by
    /// `start_angle` degrees counterclockwise from the x axis.
    RegularPolygon {
        center: Point,
        radius: f64,
        n_faces: u32,
        start_angle: f64,
    },
    /// Closed polygon; the first and last points must coincide.
    Polygon { points: Vec<Point> },
    /// Circle (sphere in 3D).
    Circle { center: Point, radius: f64 },
}

/// A named piece of material, optionally doped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub name: String,
    pub material: String,
    #[serde(flatten)]
    pub shape: Shape,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doping: Option<String>,
}

pub fn render_rectangle(dim: Dimension, p1: &Point, p2: &Point, material: &str, region: &str) -> Result<String> {
    let command = match dim {
        Dimension::TwoD => "sdegeo:create-rectangle",
        Dimension::ThreeD => "sdegeo:create-cuboid",
    };
    Ok(format!(
        "({} (position {}) (position {}) \"{}\" \"{}\")",
        command,
        render_point(dim, p1)?,
        render_point(dim, p2)?,
        material,
        region
    ))
}

pub fn render_regular_polygon(
    dim: Dimension,
    center: &Point,
    radius: f64,
    n_faces: u32,
    start_angle: f64,
    material: &str,
    region: &str,
) -> Result<String> {
    Ok(format!(
        "(sdegeo:create-reg-polygon (position {}) {} {} {} \"{}\" \"{}\")",
        render_point(dim, center)?,
        format_sci(radius, 3),
        n_faces,
        format_sci(start_angle, 3),
        material,
        region
    ))
}

pub fn render_polygon(dim: Dimension, points: &[Point], material: &str, region: &str) -> Result<String> {
    let mut positions = String::new();
    for point in points {
        positions.push_str(&format!(" (position {}) ", render_point(dim, point)?));
    }
    Ok(format!(
        "(sdegeo:create-polygon (list {}) \"{}\" \"{}\")",
        positions, material, region
    ))
}

pub fn render_circle(dim: Dimension, center: &Point, radius: f64, material: &str, region: &str) -> Result<String> {
    let command = match dim {
        Dimension::TwoD => "sdegeo:create-circular-sheet",
        Dimension::ThreeD => "sdegeo:create-sphere",
    };
    Ok(format!(
        "({} (position {}) {} \"{}\" \"{}\")",
        command,
        render_point(dim, center)?,
        format_sci(radius, 3),
        material,
        region
    ))
}

pub fn render_region(dim: Dimension, region: &Region) -> Result<String> {
    let (material, name) = (region.material.as_str(), region.name.as_str());
    match &region.shape {
        Shape::Rectangle { p1, p2 } => render_rectangle(dim, p1, p2, material, name),
        Shape::RegularPolygon {
            center,
            radius,
            n_faces,
            start_angle,
        } => render_regular_polygon(dim, center, *radius, *n_faces, *start_angle, material, name),
        Shape::Polygon { points } => render_polygon(dim, points, material, name),
        Shape::Circle { center, radius } => render_circle(dim, center, *radius, material, name),
    }
}

/// Splits the edge (or face) under `pos` so contacts can be attached to
/// either side of it.
pub fn render_vertex(dim: Dimension, pos: &Point) -> Result<String> {
    Ok(format!("(sdegeo:insert-vertex (position {}))", render_point(dim, pos)?))
}

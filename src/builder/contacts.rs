use serde::{Deserialize, Serialize};

use super::point::{render_point, Dimension, Point};
use crate::error::Result;

/// A contact attached to the edge (2D) or face (3D) found at `position`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub position: Point,
}

impl Contact {
    pub fn new(name: impl Into<String>, position: impl Into<Point>) -> Self {
        Self {
            name: name.into(),
            position: position.into(),
        }
    }
}

pub fn render_contact(dim: Dimension, contact: &Contact) -> Result<String> {
    let position = render_point(dim, &contact.position)?;
    let name = &contact.name;
    // 4 is the line thickness of the contact set
    let mut statements = format!("(sdegeo:define-contact-set \"{}\" 4 (color:rgb 1 0 0) \"##\") \n", name);
    statements.push_str(&format!("(sdegeo:set-current-contact-set \"{}\") \n", name));
    statements.push_str(&match dim {
        Dimension::TwoD => format!(
            "(sdegeo:define-2d-contact (find-edge-id (position {})) \"{}\") \n\n",
            position, name
        ),
        Dimension::ThreeD => format!(
            "(sdegeo:set-contact-faces (find-face-id (position {})) \"{}\") \n\n",
            position, name
        ),
    });
    Ok(statements)
}

pub fn render_contacts(dim: Dimension, contacts: &[Contact]) -> Result<String> {
    contacts.iter().map(|contact| render_contact(dim, contact)).collect()
}

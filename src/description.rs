use std::io::Write;

use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};

use crate::builder::contacts::Contact;
use crate::builder::doping::{Dopants, DopingType, RegionDoping};
use crate::builder::geometry::Region;
use crate::builder::mesh::MeshSpec;
use crate::builder::point::{Dimension, Point};
use crate::builder::variables::ScriptVariable;
use crate::builder::{BuilderOptions, ScriptBuilder};

fn default_clear() -> bool {
    true
}

fn default_boolean() -> String {
    "ABA".to_owned()
}

/// A whole device, as read from a JSON description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeviceDescription {
    #[serde(default)]
    pub dimension: Dimension,
    #[serde(default = "default_clear")]
    pub clear: bool,
    #[serde(default = "default_boolean")]
    pub default_boolean: String,
    #[serde(default)]
    pub dopants: Dopants,
    #[serde(default)]
    pub workbench_variables: Vec<String>,
    #[serde(default)]
    pub script_variables: Vec<ScriptVariable>,
    #[serde(default)]
    pub regions: Vec<Region>,
    #[serde(default)]
    pub vertices: Vec<Point>,
    #[serde(default)]
    pub contacts: Vec<Contact>,
    #[serde(default)]
    pub doping_types: Vec<DopingType>,
    #[serde(default)]
    pub region_doping: Vec<RegionDoping>,
    #[serde(default)]
    pub meshes: Vec<MeshSpec>,
}

impl DeviceDescription {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("invalid device description")
    }

    pub fn builder_options(&self, comments: bool) -> BuilderOptions {
        BuilderOptions {
            dimension: self.dimension,
            comments,
            dopants: self.dopants.clone(),
        }
    }

    /// Explicit `region_doping` entries followed by the dopings given on the
    /// regions themselves.
    pub fn all_region_doping(&self) -> Vec<RegionDoping> {
        let from_regions = self
            .regions
            .iter()
            .filter_map(|region| region.doping.as_ref().map(|doping| RegionDoping::new(&region.name, doping)));
        self.region_doping.iter().cloned().chain(from_regions).collect()
    }
}

/// Writes the complete script for `device` to `out` and returns the sink.
///
/// Blocks are written in a fixed order: preamble, variables, regions,
/// vertices, contacts, dopings, meshes and the mesh build.
pub fn generate<W: Write>(device: &DeviceDescription, out: W, comments: bool) -> Result<W> {
    let mut builder = ScriptBuilder::new(out, device.builder_options(comments));
    builder
        .preamble(device.clear, &device.default_boolean)
        .context("failed to write the preamble")?;

    if !device.workbench_variables.is_empty() {
        builder.workbench_variables(device.workbench_variables.as_slice())?;
    }
    if !device.script_variables.is_empty() {
        builder.script_variables(&device.script_variables)?;
    }

    info!("{} region(s)", device.regions.len());
    for region in &device.regions {
        builder
            .region(region)
            .with_context(|| format!("failed to write region {}", region.name))?;
    }
    for vertex in &device.vertices {
        builder.vertex(vertex).context("failed to write a vertex")?;
    }
    if !device.contacts.is_empty() {
        builder.contacts(&device.contacts).context("failed to write the contacts")?;
    }

    let region_doping = device.all_region_doping();
    if !device.doping_types.is_empty() || !region_doping.is_empty() {
        builder
            .constant_doping(&device.doping_types, &region_doping)
            .context("failed to write the dopings")?;
    }

    for mesh in &device.meshes {
        builder
            .rectangular_mesh(mesh)
            .with_context(|| format!("failed to write mesh {}", mesh.name))?;
    }
    Ok(builder.finish()?)
}

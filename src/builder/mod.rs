//! Assembly of SDE command scripts.
//!
//! Each statement block has a pure `render_*` function returning its text.
//! [`ScriptBuilder`] appends rendered blocks, with optional explanatory
//! comments, to the sink it owns until [`ScriptBuilder::finish`] releases it.

pub mod contacts;
pub mod control;
pub mod doping;
pub mod geometry;
pub mod mesh;
pub mod point;
pub mod variables;

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use log::{debug, info};

use crate::error::{Result, SdeError};
use crate::output::create_output;
use contacts::{render_contacts, Contact};
use control::render_if_clause;
use doping::{render_constant_doping, DopingRegistry, DopingType, Dopants, RegionDoping};
use geometry::{render_circle, render_polygon, render_rectangle, render_region, render_regular_polygon, render_vertex, Region};
use mesh::{render_mesh, MeshSpec};
use point::{Dimension, Point};
use variables::{render_script_variables, render_workbench_variables, ScriptVariable};

/// How the editor resolves a new region overlapping existing ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlapMode {
    /// Overlaps are subtracted from the existing regions.
    #[default]
    Aba,
    /// New regions are merged with the regions they overlap.
    Ab,
    /// Existing regions are subtracted from the new region.
    Bab,
    /// Like `ABA`, but overlaps become separate regions with the new material.
    AbiA,
    /// Like `ABiA`, but overlaps keep the existing material.
    AbiB,
    /// Overlapping regions are allowed and must be cleaned up by hand.
    Xx,
}

impl FromStr for OverlapMode {
    type Err = SdeError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "ABA" => Ok(OverlapMode::Aba),
            "AB" => Ok(OverlapMode::Ab),
            "BAB" => Ok(OverlapMode::Bab),
            "ABiA" => Ok(OverlapMode::AbiA),
            "ABiB" => Ok(OverlapMode::AbiB),
            "XX" => Ok(OverlapMode::Xx),
            _ => Err(SdeError::InvalidOverlapMode(s.to_owned())),
        }
    }
}

impl fmt::Display for OverlapMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mode = match self {
            OverlapMode::Aba => "ABA",
            OverlapMode::Ab => "AB",
            OverlapMode::Bab => "BAB",
            OverlapMode::AbiA => "ABiA",
            OverlapMode::AbiB => "ABiB",
            OverlapMode::Xx => "XX",
        };
        write!(f, "{}", mode)
    }
}

pub const CLEAR: &str = "(sde:clear)";

pub fn render_preamble(clear: bool, mode: OverlapMode) -> String {
    let mut statements = String::new();
    if clear {
        statements.push_str(CLEAR);
        statements.push('\n');
    }
    statements.push_str(&format!("(sdegeo:set-default-boolean \"{}\")", mode));
    statements
}

pub const BUILD_MESH: &str = "(sde:build-mesh \"snmesh\" \"\" \"n@node@\")";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuilderOptions {
    pub dimension: Dimension,
    /// Write explanatory comment lines between the blocks.
    pub comments: bool,
    pub dopants: Dopants,
}

impl Default for BuilderOptions {
    fn default() -> Self {
        Self {
            dimension: Dimension::TwoD,
            comments: true,
            dopants: Dopants::default(),
        }
    }
}

pub struct ScriptBuilder<W: Write> {
    out: W,
    options: BuilderOptions,
    dopings: DopingRegistry,
}

impl ScriptBuilder<BufWriter<File>> {
    /// Opens `path` for writing, refusing to replace an existing file unless
    /// `overwrite` is set.
    pub fn create(path: impl AsRef<Path>, overwrite: bool, options: BuilderOptions) -> Result<Self> {
        Ok(Self::new(create_output(path.as_ref(), overwrite)?, options))
    }
}

impl<W: Write> ScriptBuilder<W> {
    pub fn new(out: W, options: BuilderOptions) -> Self {
        Self {
            out,
            options,
            dopings: DopingRegistry::new(),
        }
    }

    pub fn dimension(&self) -> Dimension {
        self.options.dimension
    }

    pub fn dopings(&self) -> &DopingRegistry {
        &self.dopings
    }

    /// Writes `text` followed by a newline. A lone `"\n"` is written as is.
    pub fn write(&mut self, text: &str) -> Result<()> {
        self.out.write_all(text.as_bytes())?;
        if text != "\n" {
            self.out.write_all(b"\n")?;
        }
        Ok(())
    }

    fn comment(&mut self, lines: &[&str]) -> Result<()> {
        if !self.options.comments {
            return Ok(());
        }
        for line in lines {
            if line.is_empty() {
                self.write("\n")?;
            } else {
                self.write(&format!("; {}", line))?;
            }
        }
        Ok(())
    }

    fn section(&mut self, title: &str) -> Result<()> {
        info!("writing {}", title.to_lowercase());
        self.comment(&["******************", title, ""])
    }

    /// Clears any existing structure (when `clear`) and sets the default
    /// overlap behaviour. An unknown `default_boolean` fails before anything
    /// is written.
    pub fn preamble(&mut self, clear: bool, default_boolean: &str) -> Result<()> {
        let mode: OverlapMode = default_boolean.parse()?;
        self.comment(&[
            "SDE file created by sdegen.",
            "It builds the structure to simulate: regions, dopings, contacts and mesh.",
            "",
        ])?;
        self.section("INITIAL SETUP")?;
        let mut statements = render_preamble(clear, mode);
        if clear && self.options.comments {
            statements = statements.replacen(CLEAR, &format!("{} ; clear any existing structure", CLEAR), 1);
        }
        self.write(&statements)?;
        self.write("\n")
    }

    pub fn workbench_variables<S: AsRef<str>>(&mut self, names: &[S]) -> Result<()> {
        self.section("PARAMETER DEFINITION")?;
        self.comment(&[
            "Parameters taken from the Sentaurus Workbench, handy for sweeps.",
            "Lengths are in um.",
            "",
        ])?;
        debug!("{} workbench variable(s)", names.len());
        self.write(&render_workbench_variables(names))
    }

    pub fn script_variables(&mut self, variables: &[ScriptVariable]) -> Result<()> {
        self.comment(&["Parameters defined in the script.", ""])?;
        debug!("{} script variable(s)", variables.len());
        self.write(&render_script_variables(variables))
    }

    /// Defines constant doping profiles and places them on regions.
    ///
    /// The types are added to the builder's registry first; a mapping to a
    /// type that is still unknown fails before any statement of the block
    /// is written.
    pub fn constant_doping(&mut self, types: &[DopingType], region_doping: &[RegionDoping]) -> Result<()> {
        let block = render_constant_doping(&self.dopings, types, region_doping, &self.options.dopants)?;
        self.dopings.register(types);

        self.section("DOPINGS")?;
        self.comment(&["Step 1: doping types present in the structure"])?;
        self.write(&block.definitions)?;
        self.comment(&["Step 2: doping of each region"])?;
        self.write(&block.assignments)
    }

    pub fn rectangle(&mut self, p1: &Point, p2: &Point, material: &str, region: &str) -> Result<()> {
        let statement = render_rectangle(self.dimension(), p1, p2, material, region)?;
        self.write(&statement)
    }

    pub fn regular_polygon(
        &mut self,
        center: &Point,
        radius: f64,
        n_faces: u32,
        start_angle: f64,
        material: &str,
        region: &str,
    ) -> Result<()> {
        let statement = render_regular_polygon(self.dimension(), center, radius, n_faces, start_angle, material, region)?;
        self.write(&statement)
    }

    pub fn polygon(&mut self, points: &[Point], material: &str, region: &str) -> Result<()> {
        let statement = render_polygon(self.dimension(), points, material, region)?;
        self.write(&statement)
    }

    pub fn circle(&mut self, center: &Point, radius: f64, material: &str, region: &str) -> Result<()> {
        let statement = render_circle(self.dimension(), center, radius, material, region)?;
        self.write(&statement)
    }

    pub fn region(&mut self, region: &Region) -> Result<()> {
        debug!("region {} of {}", region.name, region.material);
        let statement = render_region(self.dimension(), region)?;
        self.write(&statement)
    }

    pub fn vertex(&mut self, pos: &Point) -> Result<()> {
        let statement = render_vertex(self.dimension(), pos)?;
        self.write(&statement)
    }

    pub fn contacts(&mut self, contacts: &[Contact]) -> Result<()> {
        let statements = render_contacts(self.dimension(), contacts)?;
        self.section("DEFINE THE CONTACTS")?;
        self.write(&statements)
    }

    /// Refinement window, sizes and functions for one named mesh, written as
    /// a single block. Call once per mesh.
    pub fn rectangular_mesh(&mut self, mesh: &MeshSpec) -> Result<()> {
        let statements = render_mesh(self.dimension(), mesh)?;
        self.section("MESHING")?;
        debug!("mesh {} with {} refinement(s)", mesh.name, mesh.refinements.len());
        self.write(&statements)
    }

    pub fn if_clause(&mut self, condition: &str, statements_true: &str, statements_false: Option<&str>) -> Result<()> {
        let statements = render_if_clause(condition, statements_true, statements_false)?;
        self.write(&statements)
    }

    /// Writes the mesh generation statement and hands back the flushed sink.
    pub fn finish(mut self) -> Result<W> {
        self.comment(&["Generate the mesh"])?;
        self.write(BUILD_MESH)?;
        self.out.flush()?;
        info!("script finished");
        Ok(self.out)
    }
}

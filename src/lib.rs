extern crate pest;
#[macro_use]
extern crate pest_derive;

pub mod ast;
pub mod builder;
pub mod description;
pub mod error;
pub mod notation;
pub mod output;
pub mod parser;
pub mod utils;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

pub use builder::contacts::Contact;
pub use builder::doping::{Dopants, DopingType, Polarity, RegionDoping};
pub use builder::geometry::{Region, Shape};
pub use builder::mesh::{MeshSpec, RefinementParam};
pub use builder::point::{Dimension, Point, Scalar};
pub use builder::variables::ScriptVariable;
pub use builder::{BuilderOptions, OverlapMode, ScriptBuilder};
pub use description::{generate, DeviceDescription};
pub use error::SdeError;
pub use notation::{prefix_to_infix, to_postfix, to_prefix};

pub struct GenerateOptions {
    pub overwrite: bool,
    pub comments: bool,
    /// Replaces the dimension given in the description.
    pub dimension: Option<Dimension>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            overwrite: false,
            comments: true,
            dimension: None,
        }
    }
}

/// Reads the device description at `input` and writes its script to `out`,
/// or next to the input with a `.cmd` extension.
pub fn generate_file(input: &str, out: Option<&str>, options: GenerateOptions) -> Result<()> {
    let inputfile = Path::new(input);
    let text = fs::read_to_string(inputfile).with_context(|| format!("could not read {}", input))?;
    let mut device = DeviceDescription::from_json(&text).with_context(|| format!("in {}", input))?;
    if let Some(dimension) = options.dimension {
        device.dimension = dimension;
    }

    let out = match out {
        Some(out) => Path::new(out).to_path_buf(),
        None => inputfile.with_extension("cmd"),
    };
    let sink = output::create_output(&out, options.overwrite)?;
    generate(&device, sink, options.comments)?;
    Ok(())
}

use anyhow::Result;
use clap::Parser;
use sdegen::{generate_file, Dimension, GenerateOptions};

/// generates a Sentaurus Structure Editor command file (.cmd) from a device description (.json)
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input filename
    input: String,

    /// Output filename
    #[arg(short, long)]
    out: Option<String>,

    /// Replace the output file if it already exists
    #[arg(long)]
    overwrite: bool,

    /// Do not write explanatory comments into the script
    #[arg(long)]
    no_comments: bool,

    /// Simulation dimension (2D or 3D), overrides the description
    #[arg(short, long)]
    dimension: Option<Dimension>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Args::parse();
    let options = GenerateOptions {
        overwrite: cli.overwrite,
        comments: !cli.no_comments,
        dimension: cli.dimension,
    };
    generate_file(&cli.input, cli.out.as_deref(), options)
}

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter};
use std::path::Path;

use log::info;

use crate::error::{Result, SdeError};

/// Opens the script file at `path`.
///
/// Without `overwrite` an existing file is left untouched and
/// [`SdeError::OutputExists`] is returned.
pub fn create_output(path: &Path, overwrite: bool) -> Result<BufWriter<File>> {
    let mut options = OpenOptions::new();
    options.write(true);
    if overwrite {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }
    let file = options.open(path).map_err(|err| match err.kind() {
        io::ErrorKind::AlreadyExists => SdeError::OutputExists(path.to_owned()),
        _ => SdeError::Io(err),
    })?;
    info!("writing script to {}", path.display());
    Ok(BufWriter::new(file))
}

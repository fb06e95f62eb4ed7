//! JSON labelled cost matrices.

use std::fs;
use std::path::Path;

use log::info;

use crate::models::LabelledMatrix;
use crate::{Error, Result};

/// Reads a labelled cost matrix from a JSON file of the form
/// `{"labels": [...], "costs": [[...], ...]}`.
///
/// # Errors
///
/// [`Error::Open`] if the file cannot be read, [`Error::Json`] if it is not
/// a well-formed square instance with one label per row.
pub fn read_matrix(path: impl AsRef<Path>) -> Result<LabelledMatrix> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| Error::open(path, e))?;
    let matrix: LabelledMatrix = serde_json::from_str(&text)?;
    info!("read {} labelled nodes from {}", matrix.len(), path.display());
    Ok(matrix)
}

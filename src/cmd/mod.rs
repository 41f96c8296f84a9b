pub mod generate;
pub mod replay;
pub mod score;

use std::fs;
use std::path::Path;
use typeforge::error::{TfResult, TypeForgeError};

pub(crate) fn read_corpus(path: &Path) -> TfResult<String> {
    fs::read_to_string(path).map_err(|e| {
        TypeForgeError::Config(format!("Failed to read corpus '{}': {}", path.display(), e))
    })
}

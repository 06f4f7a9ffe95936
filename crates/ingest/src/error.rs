use thiserror::Error;

use crate::validate::ValidationError;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("could not detect export format for '{file_name}': no platform signature or file-name hint")]
    FormatDetection { file_name: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

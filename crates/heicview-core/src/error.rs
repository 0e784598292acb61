use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("{} is not a valid image: {reason}", path.display())]
    Decode { path: PathBuf, reason: String },

    #[error("Failed to Save File!\n{extension} format not recognized")]
    UnrecognizedSaveFormat { extension: String },

    #[error("No image is open")]
    NoDocument,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Print error: {0}")]
    Print(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ViewerError>;

//! Error types for rendering sessions.

use std::io;

use thiserror::Error;

use crate::font::FontError;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Font(#[from] FontError),

    #[error("Failed to parse input stream: {0}")]
    Input(#[source] io::Error),

    #[error("Failed to blur shadow layer: {0}")]
    Blur(String),

    #[error("Failed to allocate {width}x{height} canvas")]
    Canvas { width: u32, height: u32 },

    #[error("Failed to encode PNG: {0}")]
    Encoding(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to parse configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Invalid color for {field}: {value:?}")]
    InvalidColor { field: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, Error>;

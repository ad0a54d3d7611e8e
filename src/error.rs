use thiserror::Error;

use crate::widget::ElementId;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::DeError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Element not found: {0}")]
    ElementNotFound(ElementId),

    #[error("Unknown anchor: {0}")]
    UnknownAnchor(String),

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, Error>;

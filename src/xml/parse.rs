//! XML parsing functions.

use std::path::Path;

use super::types::UiXml;
use crate::Result;

/// Parse a layout file from a string.
pub fn parse_xml(xml: &str) -> Result<UiXml> {
    Ok(quick_xml::de::from_str(xml)?)
}

/// Parse a layout file from disk.
pub fn parse_xml_file(path: &Path) -> Result<UiXml> {
    let contents = std::fs::read_to_string(path)?;
    parse_xml(&contents)
}

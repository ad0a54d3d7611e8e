//! XML layout files describing element trees.

mod parse;
mod types;

pub use parse::{parse_xml, parse_xml_file};
pub use types::{ElementChildXml, ElementXml, SpritesXml, TextXml, UiXml};

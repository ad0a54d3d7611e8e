//! Build element trees from XML layout files.

use std::path::Path;

use crate::widget::{Anchor, Color, Element};
use crate::xml::{parse_xml, parse_xml_file, ElementXml, UiXml};
use crate::{Error, Result};

/// Build every top-level element of a layout string.
pub fn load_layout_str(xml: &str) -> Result<Vec<Element>> {
    build_layout(&parse_xml(xml)?)
}

/// Build every top-level element of a layout file.
pub fn load_layout_file(path: &Path) -> Result<Vec<Element>> {
    let ui = parse_xml_file(path)?;
    let elements = build_layout(&ui)?;
    tracing::debug!("Loaded {} top-level element(s) from {}", elements.len(), path.display());
    Ok(elements)
}

pub fn build_layout(ui: &UiXml) -> Result<Vec<Element>> {
    ui.elements.iter().map(build_element).collect()
}

/// Build one element and its subtree. Children are attached through
/// `add_element`, so their positions are resolved against this element.
pub fn build_element(def: &ElementXml) -> Result<Element> {
    let anchor = match def.anchor.as_deref() {
        Some(name) => Anchor::from_str(name).ok_or_else(|| Error::UnknownAnchor(name.to_string()))?,
        None => Anchor::default(),
    };

    let mut element = Element::with_anchor(def.x, def.y, def.width, def.height, anchor);
    element.name = def.name.clone();

    if let Some(sprites) = def.sprites() {
        if let Some(all) = &sprites.all {
            element.set_sprites(all.clone());
        }
        if let Some(path) = &sprites.default {
            element.set_default_sprite(path.clone());
        }
        if let Some(path) = &sprites.hovered {
            element.set_hovered_sprite(path.clone());
        }
        if let Some(path) = &sprites.pressed {
            element.set_pressed_sprite(path.clone());
        }
    }

    if let Some(text) = def.text() {
        element.text = text.value.clone();
        if let Some(size) = text.size {
            element.font_size = size;
        }
        if let Some(color) = &text.color {
            element.text_color =
                Color::from_hex(color).ok_or_else(|| Error::InvalidColor(color.clone()))?;
        }
    }

    for child in def.elements() {
        element.add_element(build_element(child)?);
    }

    Ok(element)
}

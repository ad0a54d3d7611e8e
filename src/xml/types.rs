//! XML type definitions for layout files.

use serde::Deserialize;

/// Root element of a layout file.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename = "Ui")]
pub struct UiXml {
    #[serde(rename = "Element", default)]
    pub elements: Vec<ElementXml>,
}

/// Element definition.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct ElementXml {
    #[serde(rename = "@name")]
    pub name: Option<String>,
    #[serde(rename = "@x", default)]
    pub x: f32,
    #[serde(rename = "@y", default)]
    pub y: f32,
    #[serde(rename = "@width")]
    pub width: f32,
    #[serde(rename = "@height")]
    pub height: f32,
    #[serde(rename = "@anchor")]
    pub anchor: Option<String>,

    // Child elements collected via $value to keep document order
    #[serde(rename = "$value", default)]
    pub children: Vec<ElementChildXml>,
}

impl ElementXml {
    /// The last Sprites element, if any.
    pub fn sprites(&self) -> Option<&SpritesXml> {
        self.children.iter().rev().find_map(|c| match c {
            ElementChildXml::Sprites(s) => Some(s),
            _ => None,
        })
    }

    /// The last Text element, if any.
    pub fn text(&self) -> Option<&TextXml> {
        self.children.iter().rev().find_map(|c| match c {
            ElementChildXml::Text(t) => Some(t),
            _ => None,
        })
    }

    /// Nested elements in document order.
    pub fn elements(&self) -> impl Iterator<Item = &ElementXml> {
        self.children.iter().filter_map(|c| match c {
            ElementChildXml::Element(e) => Some(e),
            _ => None,
        })
    }
}

/// Elements that can appear inside an Element.
#[derive(Debug, Deserialize, Clone)]
pub enum ElementChildXml {
    Sprites(SpritesXml),
    Text(TextXml),
    Element(ElementXml),
}

/// Sprite images per visual state. `all` fills every slot first.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct SpritesXml {
    #[serde(rename = "@all")]
    pub all: Option<String>,
    #[serde(rename = "@default")]
    pub default: Option<String>,
    #[serde(rename = "@hovered")]
    pub hovered: Option<String>,
    #[serde(rename = "@pressed")]
    pub pressed: Option<String>,
}

/// Centered label.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct TextXml {
    #[serde(rename = "@value", default)]
    pub value: String,
    #[serde(rename = "@size")]
    pub size: Option<f32>,
    /// `#RRGGBB`.
    #[serde(rename = "@color")]
    pub color: Option<String>,
}

//! Named attributes attached to views.

use crate::color::Color;
use std::collections::BTreeMap;
use std::fmt;

/// A four-character attribute name.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AttributeId(pub [u8; 4]);

impl AttributeId {
    /// Present if the frame draws a highlight around the focus view.
    pub const FOCUS_DRAWING: AttributeId = AttributeId(*b"vfde");
    /// Color of the focus highlight.
    pub const FOCUS_COLOR: AttributeId = AttributeId(*b"vfco");
    /// Width of the focus highlight.
    pub const FOCUS_WIDTH: AttributeId = AttributeId(*b"vfwi");
    /// Tooltip text of a view.
    pub const TOOLTIP: AttributeId = AttributeId(*b"ttip");
}

impl fmt::Debug for AttributeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "AttributeId({:?})", String::from_utf8_lossy(&self.0))
    }
}

/// An attribute value.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    Bool(bool),
    Coord(f64),
    Color(Color),
    Text(String),
    Bytes(Vec<u8>),
}

/// A set of named attributes. Values aren’t validated.
#[derive(Debug, Clone, Default)]
pub struct Attributes {
    map: BTreeMap<AttributeId, AttributeValue>,
}

impl Attributes {
    pub fn new() -> Attributes {
        Attributes::default()
    }

    pub fn get(&self, id: AttributeId) -> Option<&AttributeValue> {
        self.map.get(&id)
    }

    pub fn contains(&self, id: AttributeId) -> bool {
        self.map.contains_key(&id)
    }

    /// Sets an attribute, returning the previous value.
    pub fn set(&mut self, id: AttributeId, value: AttributeValue) -> Option<AttributeValue> {
        self.map.insert(id, value)
    }

    pub fn remove(&mut self, id: AttributeId) -> Option<AttributeValue> {
        self.map.remove(&id)
    }

    /// Returns the color stored under `id`, if it is a color.
    pub fn color(&self, id: AttributeId) -> Option<Color> {
        match self.get(id) {
            Some(AttributeValue::Color(color)) => Some(*color),
            _ => None,
        }
    }

    /// Returns the coordinate stored under `id`, if it is one.
    pub fn coord(&self, id: AttributeId) -> Option<f64> {
        match self.get(id) {
            Some(AttributeValue::Coord(coord)) => Some(*coord),
            _ => None,
        }
    }

    /// Returns the text stored under `id`, if it is text.
    pub fn text(&self, id: AttributeId) -> Option<&str> {
        match self.get(id) {
            Some(AttributeValue::Text(text)) => Some(text),
            _ => None,
        }
    }
}

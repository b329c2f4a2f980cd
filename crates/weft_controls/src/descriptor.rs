//! Property descriptors
//!
//! A descriptor is the static schema of one component property. Only its
//! `type` is interpreted here; every other field rides along untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Descriptor kinds with built-in controllers or copy functions
pub mod kinds {
    pub const BACKGROUNDS: &str = "Backgrounds";
    pub const BORDER: &str = "Border";
    pub const ELEMENT_ID: &str = "ElementID";
    pub const GRID: &str = "Grid";
    pub const IMAGE: &str = "Image";
    pub const IMAGES: &str = "Images";
    pub const LINK: &str = "Link";
    pub const NAVIGATION_LINKS: &str = "NavigationLinks";
    pub const RESPONSIVE_COLOR: &str = "ResponsiveColor";
    pub const RICH_TEXT: &str = "RichText";
    pub const SHADOWS: &str = "Shadows";
    pub const TABLE: &str = "Table";
    pub const TABLE_FORM_FIELDS: &str = "TableFormFields";
    /// Slot control
    pub const SLOT: &str = "weft::controls::slot";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Descriptor {
    #[serde(rename = "type")]
    kind: String,
    #[serde(flatten)]
    schema: Map<String, Value>,
}

impl Descriptor {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            schema: Map::new(),
        }
    }

    /// Attach a schema field, returning the updated descriptor
    pub fn with(mut self, field: impl Into<String>, value: Value) -> Self {
        self.schema.insert(field.into(), value);
        self
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.schema.get(field)
    }

    pub fn schema(&self) -> &Map<String, Value> {
        &self.schema
    }
}

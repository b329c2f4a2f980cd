//! Style objects and media-query keyed style fragments
//!
//! - [`CssValue`]: a single declaration value (number or text)
//! - [`Style`]: an ordered set of camelCase declarations, e.g. `maxWidth`
//! - [`StyleFragment`]: base declarations plus one [`Style`] per media query
//!
//! Merging is always shallow and last-writer-wins on key collisions.

use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Properties whose numeric values are emitted without a `px` suffix
const UNITLESS_PROPERTIES: &[&str] = &[
    "flexGrow",
    "flexShrink",
    "fontWeight",
    "lineHeight",
    "opacity",
    "order",
    "zIndex",
];

/// A declaration value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CssValue {
    Number(f64),
    Text(String),
}

impl CssValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CssValue::Text(s) => Some(s),
            CssValue::Number(_) => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CssValue::Number(n) => Some(*n),
            CssValue::Text(_) => None,
        }
    }

    /// Render for a given property, adding `px` to non-zero numbers
    /// unless the property is unitless
    pub fn to_css(&self, property: &str) -> String {
        match self {
            CssValue::Number(n) if *n != 0.0 && !UNITLESS_PROPERTIES.contains(&property) => {
                format!("{}px", n)
            }
            other => other.to_string(),
        }
    }
}

impl fmt::Display for CssValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CssValue::Number(n) => write!(f, "{}", n),
            CssValue::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for CssValue {
    fn from(value: &str) -> Self {
        CssValue::Text(value.to_string())
    }
}

impl From<String> for CssValue {
    fn from(value: String) -> Self {
        CssValue::Text(value)
    }
}

impl From<f64> for CssValue {
    fn from(value: f64) -> Self {
        CssValue::Number(value)
    }
}

impl From<i32> for CssValue {
    fn from(value: i32) -> Self {
        CssValue::Number(value as f64)
    }
}

impl From<u32> for CssValue {
    fn from(value: u32) -> Self {
        CssValue::Number(value as f64)
    }
}

/// Ordered camelCase declarations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Style {
    declarations: IndexMap<String, CssValue>,
}

impl Style {
    /// Create an empty style
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a declaration, returning the updated style for chaining
    pub fn with(mut self, property: &str, value: impl Into<CssValue>) -> Self {
        self.set(property, value);
        self
    }

    /// Set a declaration, replacing any previous value in place
    pub fn set(&mut self, property: &str, value: impl Into<CssValue>) {
        self.declarations.insert(property.to_string(), value.into());
    }

    pub fn get(&self, property: &str) -> Option<&CssValue> {
        self.declarations.get(property)
    }

    /// Shallow merge; `other`'s declarations win on collision
    pub fn merge(&mut self, other: Style) {
        for (property, value) in other.declarations {
            self.declarations.insert(property, value);
        }
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, CssValue> {
        self.declarations.iter()
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Render as `prop: value;` pairs with kebab-case property names
    pub fn to_declarations(&self) -> String {
        self.declarations
            .iter()
            .map(|(property, value)| format!("{}: {};", kebab_case(property), value.to_css(property)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl<K: Into<String>, V: Into<CssValue>> FromIterator<(K, V)> for Style {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            declarations: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Base declarations plus per-media-query styles
///
/// Media queries keep first-insertion order, so fragments built by walking
/// devices widest-first render widest-first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleFragment {
    base: Style,
    rules: IndexMap<String, Style>,
}

impl StyleFragment {
    /// Create an empty fragment
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a fragment with only base declarations
    pub fn from_base(base: Style) -> Self {
        Self {
            base,
            rules: IndexMap::new(),
        }
    }

    /// Declarations outside any media query
    pub fn base(&self) -> &Style {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut Style {
        &mut self.base
    }

    /// Style under a media query
    pub fn rule(&self, media_query: &str) -> Option<&Style> {
        self.rules.get(media_query)
    }

    /// Media queries and their styles in insertion order
    pub fn rules(&self) -> indexmap::map::Iter<'_, String, Style> {
        self.rules.iter()
    }

    /// Shallow-merge `style` into the rule for `media_query`
    pub fn merge_rule(&mut self, media_query: &str, style: Style) {
        match self.rules.get_mut(media_query) {
            Some(existing) => existing.merge(style),
            None => {
                self.rules.insert(media_query.to_string(), style);
            }
        }
    }

    /// Merge another fragment into this one, base and rules alike
    pub fn extend(&mut self, other: StyleFragment) {
        self.base.merge(other.base);
        for (media_query, style) in other.rules {
            self.merge_rule(&media_query, style);
        }
    }

    /// Whether the fragment has no declarations at all
    pub fn is_empty(&self) -> bool {
        self.base.is_empty() && self.rules.values().all(Style::is_empty)
    }

    /// Render as CSS text for `selector`
    ///
    /// Empty rules are skipped.
    pub fn to_css(&self, selector: &str) -> String {
        let mut css = String::new();

        if !self.base.is_empty() {
            css.push_str(&format!("{} {{ {} }}\n", selector, self.base.to_declarations()));
        }

        for (media_query, style) in &self.rules {
            if style.is_empty() {
                continue;
            }
            css.push_str(&format!(
                "{} {{ {} {{ {} }} }}\n",
                media_query,
                selector,
                style.to_declarations()
            ));
        }

        css
    }
}

impl Serialize for StyleFragment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.base.len() + self.rules.len()))?;
        for (property, value) in self.base.iter() {
            map.serialize_entry(property, value)?;
        }
        for (media_query, style) in &self.rules {
            map.serialize_entry(media_query, style)?;
        }
        map.end()
    }
}

/// `maxWidth` -> `max-width`
fn kebab_case(property: &str) -> String {
    let mut out = String::with_capacity(property.len() + 4);
    for c in property.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

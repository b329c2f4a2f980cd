//! Typography

use serde::{Deserialize, Serialize};
use weft_core::{combine, Devices, InheritWider, ResponsiveValue, Style, StyleFragment};

use crate::length::Length;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextTransform {
    Uppercase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    Italic,
}

/// Text style as stored; flags are lists so the editor can toggle them
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    #[serde(default)]
    pub font_family: Option<String>,
    /// Pixels
    #[serde(default)]
    pub letter_spacing: Option<f64>,
    #[serde(default)]
    pub font_size: Option<Length>,
    #[serde(default)]
    pub font_weight: Option<u32>,
    #[serde(default)]
    pub text_transform: Vec<TextTransform>,
    #[serde(default)]
    pub font_style: Vec<FontStyle>,
}

impl TextStyle {
    /// Declarations for the fields that are set
    pub fn to_style(&self) -> Style {
        let mut style = Style::new();
        if let Some(family) = &self.font_family {
            style.set("fontFamily", family.as_str());
        }
        if let Some(spacing) = self.letter_spacing {
            style.set("letterSpacing", spacing);
        }
        if let Some(size) = self.font_size {
            style.set("fontSize", size.to_string());
        }
        if let Some(weight) = self.font_weight {
            style.set("fontWeight", weight);
        }
        if self.text_transform.contains(&TextTransform::Uppercase) {
            style.set("textTransform", "uppercase");
        }
        if self.font_style.contains(&FontStyle::Italic) {
            style.set("fontStyle", "italic");
        }
        style
    }
}

pub fn responsive_text_style(devices: &Devices, value: Option<&ResponsiveValue<TextStyle>>) -> StyleFragment {
    combine(devices, &(value,), &InheritWider, |(text,)| {
        text.map(|text| text.to_style()).unwrap_or_default()
    })
}

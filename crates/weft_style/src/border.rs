//! Per-side borders

use serde::{Deserialize, Serialize};
use std::fmt;
use weft_core::{combine, Devices, InheritWider, ResponsiveValue, Style, StyleFragment};

use crate::color::Color;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

impl fmt::Display for BorderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BorderStyle::Solid => "solid",
            BorderStyle::Dashed => "dashed",
            BorderStyle::Dotted => "dotted",
        };
        f.write_str(s)
    }
}

/// One side of a border; width is in pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BorderSide {
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub style: BorderStyle,
    #[serde(default)]
    pub color: Option<Color>,
}

impl BorderSide {
    pub fn new(width: f64, style: BorderStyle, color: Color) -> Self {
        Self {
            width: Some(width),
            style,
            color: Some(color),
        }
    }

    /// `{width}px {style} {color}`, missing parts as `0` and `black`
    pub fn to_css(&self) -> String {
        let color = match self.color {
            Some(color) => color.to_string(),
            None => "black".to_string(),
        };
        format!("{}px {} {}", self.width.unwrap_or(0.0), self.style, color)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Border {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_top: Option<BorderSide>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_right: Option<BorderSide>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_bottom: Option<BorderSide>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_left: Option<BorderSide>,
}

impl Border {
    pub fn all(side: BorderSide) -> Self {
        Self {
            border_top: Some(side),
            border_right: Some(side),
            border_bottom: Some(side),
            border_left: Some(side),
        }
    }

    fn sides(&self) -> [(&'static str, Option<BorderSide>); 4] {
        [
            ("borderTop", self.border_top),
            ("borderRight", self.border_right),
            ("borderBottom", self.border_bottom),
            ("borderLeft", self.border_left),
        ]
    }
}

/// Responsive border; unset sides use `default`, then `0px solid black`
pub fn responsive_border(
    devices: &Devices,
    value: Option<&ResponsiveValue<Border>>,
    default: &Border,
) -> StyleFragment {
    combine(devices, &(value,), &InheritWider, |(border,)| {
        let mut style = Style::new();
        let sides = border.unwrap_or_default().sides();
        for ((property, side), (_, default_side)) in sides.into_iter().zip(default.sides()) {
            let side = side.or(default_side).unwrap_or_default();
            style.set(property, side.to_css());
        }
        style
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_to_css() {
        let side = BorderSide::new(2.0, BorderStyle::Dashed, Color::rgb(10, 20, 30));
        assert_eq!(side.to_css(), "2px dashed rgba(10,20,30,1)");
        assert_eq!(BorderSide::default().to_css(), "0px solid black");
    }

    #[test]
    fn test_responsive_border() {
        let devices = Devices::builtin();
        let value = ResponsiveValue::new().with(
            "tablet",
            Border {
                border_bottom: Some(BorderSide::new(1.0, BorderStyle::Solid, Color::BLACK)),
                ..Border::default()
            },
        );
        let fragment = responsive_border(&devices, Some(&value), &Border::default());

        let desktop = fragment.rule("@media only screen").unwrap();
        assert_eq!(
            desktop.get("borderBottom").and_then(|v| v.as_str()),
            Some("0px solid black")
        );
        let mobile = fragment
            .rule("@media only screen and (max-width: 575px)")
            .unwrap();
        assert_eq!(
            mobile.get("borderBottom").and_then(|v| v.as_str()),
            Some("1px solid rgba(0,0,0,1)")
        );
    }

    #[test]
    fn test_deserialize_partial_side() {
        let border: Border = serde_json::from_str(r#"{"borderLeft":{"width":3}}"#).unwrap();
        assert_eq!(border.border_left.map(|s| s.to_css()).as_deref(), Some("3px solid black"));
    }
}

//! Measured layout boxes reported back to the editor

use serde::{Deserialize, Serialize};

/// Widths on each side of a box
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Spacing {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Spacing {
    pub fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }
}

/// Edges and size of a rectangle in page coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Rectangle from its edges; size is derived
    pub fn from_edges(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
            width: right - left,
            height: bottom - top,
        }
    }

    /// Grow outwards by `spacing`
    pub fn expand(&self, spacing: Spacing) -> Self {
        Self::from_edges(
            self.top - spacing.top,
            self.right + spacing.right,
            self.bottom + spacing.bottom,
            self.left - spacing.left,
        )
    }

    /// Shrink inwards by `spacing`
    pub fn shrink(&self, spacing: Spacing) -> Self {
        Self::from_edges(
            self.top + spacing.top,
            self.right - spacing.right,
            self.bottom - spacing.bottom,
            self.left + spacing.left,
        )
    }
}

/// Margin, border, padding and content boxes of one element
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxModel {
    pub margin_box: Rect,
    pub border_box: Rect,
    pub padding_box: Rect,
    pub content_box: Rect,
    pub margin: Spacing,
    pub border: Spacing,
    pub padding: Spacing,
}

impl BoxModel {
    /// Derive every box from the measured border box
    pub fn from_border_box(border_box: Rect, margin: Spacing, border: Spacing, padding: Spacing) -> Self {
        let padding_box = border_box.shrink(border);
        Self {
            margin_box: border_box.expand(margin),
            border_box,
            padding_box,
            content_box: padding_box.shrink(padding),
            margin,
            border,
            padding,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_border_box() {
        let model = BoxModel::from_border_box(
            Rect::from_edges(10.0, 110.0, 60.0, 10.0),
            Spacing::uniform(5.0),
            Spacing::uniform(1.0),
            Spacing::new(4.0, 8.0, 4.0, 8.0),
        );

        assert_eq!(model.margin_box, Rect::from_edges(5.0, 115.0, 65.0, 5.0));
        assert_eq!(model.padding_box, Rect::from_edges(11.0, 109.0, 59.0, 11.0));
        assert_eq!(model.content_box.width, 82.0);
        assert_eq!(model.content_box.height, 40.0);
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(BoxModel::default()).unwrap();
        let keys: Vec<&str> = json.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        assert_eq!(
            keys,
            vec!["marginBox", "borderBox", "paddingBox", "contentBox", "margin", "border", "padding"]
        );
    }
}

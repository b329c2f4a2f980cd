//! Padding, margin and border radius

use serde::{Deserialize, Serialize};
use weft_core::{combine, CssValue, Devices, InheritWider, ResponsiveValue, Style, StyleFragment};

use crate::length::Length;

/// Per-side padding, serialized as `{ "paddingTop": {...}, ... }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Padding {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_top: Option<Length>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_right: Option<Length>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_bottom: Option<Length>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_left: Option<Length>,
}

impl Padding {
    /// Same padding on every side
    pub fn all(length: Length) -> Self {
        Self {
            padding_top: Some(length),
            padding_right: Some(length),
            padding_bottom: Some(length),
            padding_left: Some(length),
        }
    }

    fn sides(&self) -> [(&'static str, Option<Length>); 4] {
        [
            ("paddingTop", self.padding_top),
            ("paddingRight", self.padding_right),
            ("paddingBottom", self.padding_bottom),
            ("paddingLeft", self.padding_left),
        ]
    }
}

/// One side of a margin: a length or `"auto"`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MarginSide {
    Length(Length),
    Keyword(MarginKeyword),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarginKeyword {
    #[serde(rename = "auto")]
    Auto,
}

impl MarginSide {
    pub const AUTO: MarginSide = MarginSide::Keyword(MarginKeyword::Auto);

    fn to_css_value(self) -> CssValue {
        match self {
            MarginSide::Length(length) => CssValue::Text(length.to_string()),
            MarginSide::Keyword(MarginKeyword::Auto) => CssValue::from("auto"),
        }
    }
}

/// Per-side margin, serialized as `{ "marginTop": {...}, ... }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Margin {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_top: Option<MarginSide>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_right: Option<MarginSide>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_bottom: Option<MarginSide>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_left: Option<MarginSide>,
}

impl Margin {
    fn sides(&self) -> [(&'static str, Option<MarginSide>, CssValue); 4] {
        [
            ("marginTop", self.margin_top, CssValue::Number(0.0)),
            ("marginRight", self.margin_right, CssValue::from("auto")),
            ("marginBottom", self.margin_bottom, CssValue::Number(0.0)),
            ("marginLeft", self.margin_left, CssValue::from("auto")),
        ]
    }
}

/// Per-corner radius, serialized as `{ "borderTopLeftRadius": {...}, ... }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BorderRadius {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_top_left_radius: Option<Length>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_top_right_radius: Option<Length>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_bottom_right_radius: Option<Length>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_bottom_left_radius: Option<Length>,
}

impl BorderRadius {
    /// Same radius on every corner
    pub fn all(length: Length) -> Self {
        Self {
            border_top_left_radius: Some(length),
            border_top_right_radius: Some(length),
            border_bottom_right_radius: Some(length),
            border_bottom_left_radius: Some(length),
        }
    }

    fn corners(&self) -> [(&'static str, Option<Length>); 4] {
        [
            ("borderTopLeftRadius", self.border_top_left_radius),
            ("borderTopRightRadius", self.border_top_right_radius),
            ("borderBottomRightRadius", self.border_bottom_right_radius),
            ("borderBottomLeftRadius", self.border_bottom_left_radius),
        ]
    }
}

/// Length sides resolve to the device value, then the default, then `0`
fn length_sides(
    style: &mut Style,
    sides: [(&'static str, Option<Length>); 4],
    defaults: [(&'static str, Option<Length>); 4],
) {
    for ((property, side), (_, default)) in sides.into_iter().zip(defaults) {
        match side.or(default) {
            Some(length) => style.set(property, length.to_string()),
            None => style.set(property, 0),
        }
    }
}

/// Responsive padding; unset sides use `default`, then `0`
pub fn responsive_padding(
    devices: &Devices,
    value: Option<&ResponsiveValue<Padding>>,
    default: &Padding,
) -> StyleFragment {
    combine(devices, &(value,), &InheritWider, |(padding,)| {
        let mut style = Style::new();
        length_sides(&mut style, padding.unwrap_or_default().sides(), default.sides());
        style
    })
}

/// Responsive margin; unset sides use `default`, then `0` vertically and
/// `auto` horizontally
pub fn responsive_margin(
    devices: &Devices,
    value: Option<&ResponsiveValue<Margin>>,
    default: &Margin,
) -> StyleFragment {
    combine(devices, &(value,), &InheritWider, |(margin,)| {
        let mut style = Style::new();
        let sides = margin.unwrap_or_default().sides();
        for ((property, side, fallback), (_, default_side, _)) in sides.into_iter().zip(default.sides()) {
            let value = side
                .or(default_side)
                .map(MarginSide::to_css_value)
                .unwrap_or(fallback);
            style.set(property, value);
        }
        style
    })
}

/// Responsive border radius; unset corners use `default`, then `0`
pub fn responsive_border_radius(
    devices: &Devices,
    value: Option<&ResponsiveValue<BorderRadius>>,
    default: &BorderRadius,
) -> StyleFragment {
    combine(devices, &(value,), &InheritWider, |(radius,)| {
        let mut style = Style::new();
        length_sides(&mut style, radius.unwrap_or_default().corners(), default.corners());
        style
    })
}

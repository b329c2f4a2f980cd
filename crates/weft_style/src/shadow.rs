//! Box shadows

use serde::{Deserialize, Serialize};
use weft_core::{combine, Devices, InheritWider, ResponsiveValue, Style, StyleFragment};

use crate::color::Color;

/// Color used when a shadow has none
pub const DEFAULT_SHADOW_COLOR: Color = Color::rgba(0, 0, 0, 0.2);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShadowPayload {
    #[serde(default)]
    pub color: Option<Color>,
    #[serde(default)]
    pub offset_x: f64,
    #[serde(default)]
    pub offset_y: f64,
    #[serde(default)]
    pub blur_radius: f64,
    #[serde(default)]
    pub spread_radius: f64,
    #[serde(default)]
    pub inset: bool,
}

/// A single shadow in a shadow list, identified for editing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    pub id: String,
    pub payload: ShadowPayload,
}

impl ShadowPayload {
    pub fn to_css(&self) -> String {
        format!(
            "{}{:.1}px {:.1}px {}px {}px {}",
            if self.inset { "inset " } else { "" },
            round_tenths(self.offset_x),
            round_tenths(self.offset_y),
            self.blur_radius,
            self.spread_radius,
            self.color.unwrap_or(DEFAULT_SHADOW_COLOR)
        )
    }
}

/// Round to one decimal, ties away from zero
fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Render a shadow list as a `box-shadow` value
pub fn shadows_to_css(shadows: &[Shadow]) -> String {
    shadows
        .iter()
        .map(|shadow| shadow.payload.to_css())
        .collect::<Vec<_>>()
        .join(",")
}

/// Responsive box shadow; devices without shadows contribute nothing
pub fn responsive_shadow(devices: &Devices, value: Option<&ResponsiveValue<Vec<Shadow>>>) -> StyleFragment {
    combine(devices, &(value,), &InheritWider, |(shadows,)| match shadows {
        Some(shadows) if !shadows.is_empty() => Style::new().with("boxShadow", shadows_to_css(&shadows)),
        _ => Style::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shadow(id: &str, payload: ShadowPayload) -> Shadow {
        Shadow {
            id: id.to_string(),
            payload,
        }
    }

    #[test]
    fn test_payload_to_css() {
        let payload = ShadowPayload {
            offset_x: 1.0,
            offset_y: 2.26,
            blur_radius: 4.0,
            spread_radius: 0.0,
            ..ShadowPayload::default()
        };
        assert_eq!(payload.to_css(), "1.0px 2.3px 4px 0px rgba(0,0,0,0.2)");

        let inset = ShadowPayload {
            inset: true,
            color: Some(Color::rgb(255, 255, 255)),
            ..ShadowPayload::default()
        };
        assert_eq!(inset.to_css(), "inset 0.0px 0.0px 0px 0px rgba(255,255,255,1)");
    }

    #[test]
    fn test_offset_ties_round_away_from_zero() {
        let payload = ShadowPayload {
            offset_x: 0.25,
            offset_y: -0.25,
            ..ShadowPayload::default()
        };
        assert_eq!(payload.to_css(), "0.3px -0.3px 0px 0px rgba(0,0,0,0.2)");

        let payload = ShadowPayload {
            offset_x: 0.75,
            offset_y: 2.0,
            ..ShadowPayload::default()
        };
        assert_eq!(payload.to_css(), "0.8px 2.0px 0px 0px rgba(0,0,0,0.2)");
    }

    #[test]
    fn test_responsive_shadow_joins_list() {
        let devices = Devices::builtin();
        let list = vec![
            shadow("a", ShadowPayload::default()),
            shadow(
                "b",
                ShadowPayload {
                    offset_y: 3.0,
                    ..ShadowPayload::default()
                },
            ),
        ];
        let value = ResponsiveValue::new().with("desktop", list).with("mobile", Vec::new());
        let fragment = responsive_shadow(&devices, Some(&value));

        let tablet = fragment
            .rule("@media only screen and (max-width: 768px)")
            .unwrap();
        assert_eq!(
            tablet.get("boxShadow").and_then(|v| v.as_str()),
            Some("0.0px 0.0px 0px 0px rgba(0,0,0,0.2),0.0px 3.0px 0px 0px rgba(0,0,0,0.2)")
        );
        let mobile = fragment
            .rule("@media only screen and (max-width: 575px)")
            .unwrap();
        assert!(mobile.is_empty());
    }
}

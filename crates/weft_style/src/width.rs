//! Element width

use serde::{Deserialize, Serialize};
use std::fmt;
use weft_core::{combine, Devices, InheritWider, ResponsiveValue, Style, StyleFragment};

use crate::length::Length;

/// A width: a length, or a keyword such as `auto`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Width {
    Length(Length),
    Keyword(String),
}

impl Default for Width {
    fn default() -> Self {
        Width::Length(Length::percent(100.0))
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Width::Length(length) => write!(f, "{}", length),
            Width::Keyword(keyword) => f.write_str(keyword),
        }
    }
}

impl From<Length> for Width {
    fn from(length: Length) -> Self {
        Width::Length(length)
    }
}

/// Responsive width capped at the container; devices without a value use
/// `default`
pub fn responsive_width(
    devices: &Devices,
    value: Option<&ResponsiveValue<Width>>,
    default: &Width,
) -> StyleFragment {
    let mut fragment = StyleFragment::from_base(Style::new().with("maxWidth", "100%"));
    fragment.extend(combine(devices, &(value,), &InheritWider, |(width,)| {
        let width = width.unwrap_or_else(|| default.clone());
        Style::new().with("width", width.to_string())
    }));
    fragment
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_full_width() {
        let devices = Devices::builtin();
        let fragment = responsive_width(&devices, None, &Width::default());
        assert_eq!(
            fragment.to_css(".el"),
            ".el { max-width: 100%; }\n\
             @media only screen { .el { width: 100%; } }\n\
             @media only screen and (max-width: 768px) { .el { width: 100%; } }\n\
             @media only screen and (max-width: 575px) { .el { width: 100%; } }\n"
        );
    }

    #[test]
    fn test_length_and_keyword() {
        let devices = Devices::builtin();
        let value: ResponsiveValue<Width> = serde_json::from_str(
            r#"[{"deviceId":"desktop","value":{"value":640,"unit":"px"}},{"deviceId":"mobile","value":"auto"}]"#,
        )
        .unwrap();
        let fragment = responsive_width(&devices, Some(&value), &Width::default());

        let width = |mq: &str| {
            fragment
                .rule(mq)
                .and_then(|s| s.get("width"))
                .map(|v| v.to_string())
        };
        assert_eq!(width("@media only screen").as_deref(), Some("640px"));
        assert_eq!(width("@media only screen and (max-width: 768px)").as_deref(), Some("640px"));
        assert_eq!(width("@media only screen and (max-width: 575px)").as_deref(), Some("auto"));
    }
}

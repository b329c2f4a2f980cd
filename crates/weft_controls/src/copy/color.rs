//! Copies for values that reference color swatches

use serde_json::Value;

use super::context::{CopyContext, IdKind};
use super::for_each_device_value;

/// Remap `swatchId` of a `{ swatchId, alpha }` color, if present
pub(super) fn remap_color(color: Option<&mut Value>, context: &CopyContext) {
    if let Some(swatch_id) = color.and_then(|c| c.get_mut("swatchId")) {
        context.remap(IdKind::Swatch, swatch_id);
    }
}

/// Responsive `{ swatchId, alpha }`
pub fn copy_responsive_color(value: &Value, context: &CopyContext) -> Value {
    let mut value = value.clone();
    remap_responsive_color(&mut value, context);
    value
}

pub(super) fn remap_responsive_color(value: &mut Value, context: &CopyContext) {
    for_each_device_value(value, |color| remap_color(Some(color), context));
}

/// Responsive list of `{ id, payload: { color, ... } }`
pub fn copy_shadows(value: &Value, context: &CopyContext) -> Value {
    let mut value = value.clone();
    for_each_device_value(&mut value, |shadows| {
        if let Some(shadows) = shadows.as_array_mut() {
            for shadow in shadows {
                remap_color(shadow.pointer_mut("/payload/color"), context);
            }
        }
    });
    value
}

/// Responsive `{ borderTop: { color, ... }, ... }`
pub fn copy_border(value: &Value, context: &CopyContext) -> Value {
    let mut value = value.clone();
    for_each_device_value(&mut value, |border| {
        for side in ["borderTop", "borderRight", "borderBottom", "borderLeft"] {
            remap_color(border.pointer_mut(&format!("/{}/color", side)), context);
        }
    });
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::copy::context::ReplacementContext;
    use serde_json::json;

    fn context() -> CopyContext {
        CopyContext::new(ReplacementContext::default().with(IdKind::Swatch, "red", "red-copy"))
    }

    #[test]
    fn test_responsive_color() {
        let value = json!([
            { "deviceId": "desktop", "value": { "swatchId": "red", "alpha": 1 } },
            { "deviceId": "mobile", "value": { "swatchId": "blue", "alpha": 0.5 } }
        ]);
        assert_eq!(
            copy_responsive_color(&value, &context()),
            json!([
                { "deviceId": "desktop", "value": { "swatchId": "red-copy", "alpha": 1 } },
                { "deviceId": "mobile", "value": { "swatchId": "blue", "alpha": 0.5 } }
            ])
        );
    }

    #[test]
    fn test_shadows_keep_null_colors() {
        let value = json!([{ "deviceId": "desktop", "value": [
            { "id": "a", "payload": { "color": { "swatchId": "red" }, "offsetX": 1 } },
            { "id": "b", "payload": { "color": null, "offsetX": 2 } }
        ] }]);
        let copied = copy_shadows(&value, &context());
        assert_eq!(copied[0]["value"][0]["payload"]["color"]["swatchId"], "red-copy");
        assert_eq!(copied[0]["value"][1]["payload"]["color"], Value::Null);
    }

    #[test]
    fn test_border_sides() {
        let value = json!([{ "deviceId": "tablet", "value": {
            "borderTop": { "width": 1, "style": "solid", "color": { "swatchId": "red" } },
            "borderLeft": { "width": 1, "style": "solid" }
        } }]);
        let copied = copy_border(&value, &context());
        assert_eq!(copied[0]["value"]["borderTop"]["color"]["swatchId"], "red-copy");
        assert_eq!(copied[0]["value"]["borderLeft"], json!({ "width": 1, "style": "solid" }));
    }
}

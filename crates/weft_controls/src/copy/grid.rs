//! Grid copy: nested elements plus column layout

use serde_json::Value;

use super::context::{CopyContext, IdKind};

/// `{ elements, columns }`
///
/// Global element references are remapped; other elements go through the
/// context's element copier when one is set.
pub fn copy_grid(value: &Value, context: &CopyContext) -> Value {
    let mut value = value.clone();
    if let Some(elements) = value.get_mut("elements").and_then(Value::as_array_mut) {
        for element in elements.iter_mut() {
            if element.get("type").and_then(Value::as_str) == Some("reference") {
                if let Some(id) = element.get_mut("value") {
                    context.remap(IdKind::GlobalElement, id);
                }
            } else if let Some(copier) = &context.element_copier {
                *element = copier(element);
            }
        }
    }
    value
}

//! Copies for backgrounds and images, which reference swatches and files

use serde_json::Value;

use super::color::remap_color;
use super::context::{CopyContext, IdKind};
use super::for_each_device_value;
use super::link::remap_link;

/// Responsive list of background layers
///
/// Color layers reference a swatch, image layers a file, and gradient
/// layers a swatch per stop. Video layers carry no references.
pub fn copy_backgrounds(value: &Value, context: &CopyContext) -> Value {
    let mut value = value.clone();
    for_each_device_value(&mut value, |layers| {
        let Some(layers) = layers.as_array_mut() else {
            return;
        };
        for layer in layers {
            let kind = layer.get("type").and_then(Value::as_str).map(str::to_owned);
            let Some(payload) = layer.get_mut("payload") else {
                continue;
            };
            match kind.as_deref() {
                Some("color") => remap_color(Some(payload), context),
                Some("image") => {
                    if let Some(image_id) = payload.get_mut("imageId") {
                        context.remap(IdKind::File, image_id);
                    }
                }
                Some("gradient") => {
                    if let Some(stops) = payload.get_mut("stops").and_then(Value::as_array_mut) {
                        for stop in stops {
                            remap_color(stop.get_mut("color"), context);
                        }
                    }
                }
                _ => {}
            }
        }
    });
    value
}

/// A file id
pub fn copy_image(value: &Value, context: &CopyContext) -> Value {
    let mut value = value.clone();
    context.remap(IdKind::File, &mut value);
    value
}

/// List of `{ key, props: { file, link, ... } }`
pub fn copy_images(value: &Value, context: &CopyContext) -> Value {
    let mut value = value.clone();
    if let Some(images) = value.as_array_mut() {
        for image in images {
            if let Some(file) = image.pointer_mut("/props/file") {
                context.remap(IdKind::File, file);
            }
            if let Some(link) = image.pointer_mut("/props/link") {
                remap_link(link, context);
            }
        }
    }
    value
}

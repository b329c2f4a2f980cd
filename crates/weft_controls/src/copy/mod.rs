//! Descriptor-driven value copies
//!
//! Duplicating content must give copied property values fresh references:
//! an element duplicated together with its target should point at the new
//! target, not the original. [`CopyRegistry`] picks the copy function for a
//! descriptor's kind; kinds without one are cloned unchanged.

mod color;
mod context;
mod grid;
mod link;
mod media;
mod rich_text;
mod table;

pub use color::{copy_border, copy_responsive_color, copy_shadows};
pub use context::{CopyContext, ElementCopier, IdKind, ReplacementContext};
pub use grid::copy_grid;
pub use link::{copy_link, copy_navigation_links};
pub use media::{copy_backgrounds, copy_image, copy_images};
pub use rich_text::copy_rich_text;
pub use table::{copy_table, copy_table_form_fields};

use std::sync::Arc;

use rustc_hash::FxHashMap;
use serde_json::Value;

use crate::descriptor::{kinds, Descriptor};

/// Copies one stored value
pub type CopyFn = Arc<dyn Fn(&Value, &CopyContext) -> Value + Send + Sync>;

/// Apply `f` to the value of every `{ deviceId, value }` entry
pub(crate) fn for_each_device_value(value: &mut Value, mut f: impl FnMut(&mut Value)) {
    if let Some(entries) = value.as_array_mut() {
        for entry in entries {
            if let Some(value) = entry.get_mut("value") {
                f(value);
            }
        }
    }
}

/// The duplicated id for a global element reference, or `id` itself
pub fn copy_element_reference(id: &str, context: &CopyContext) -> String {
    context.lookup(IdKind::GlobalElement, id).to_string()
}

/// An element id string
pub fn copy_element_id(value: &Value, context: &CopyContext) -> Value {
    let mut value = value.clone();
    context.remap(IdKind::GlobalElement, &mut value);
    value
}

#[derive(Clone)]
pub struct CopyRegistry {
    copiers: FxHashMap<String, CopyFn>,
}

impl CopyRegistry {
    /// A registry with no copy functions; every value is cloned as-is
    pub fn empty() -> Self {
        Self {
            copiers: FxHashMap::default(),
        }
    }

    /// A registry with every built-in copy function
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(kinds::BACKGROUNDS, copy_backgrounds);
        registry.register(kinds::BORDER, copy_border);
        registry.register(kinds::ELEMENT_ID, copy_element_id);
        registry.register(kinds::GRID, copy_grid);
        registry.register(kinds::IMAGE, copy_image);
        registry.register(kinds::IMAGES, copy_images);
        registry.register(kinds::LINK, copy_link);
        registry.register(kinds::NAVIGATION_LINKS, copy_navigation_links);
        registry.register(kinds::RESPONSIVE_COLOR, copy_responsive_color);
        registry.register(kinds::RICH_TEXT, copy_rich_text);
        registry.register(kinds::SHADOWS, copy_shadows);
        registry.register(kinds::TABLE, copy_table);
        registry.register(kinds::TABLE_FORM_FIELDS, copy_table_form_fields);
        registry
    }

    /// Register a copy function for `kind`, replacing any existing one
    pub fn register<F>(&mut self, kind: &str, copier: F)
    where
        F: Fn(&Value, &CopyContext) -> Value + Send + Sync + 'static,
    {
        if self
            .copiers
            .insert(kind.to_string(), Arc::new(copier))
            .is_some()
        {
            tracing::warn!("Replacing copy function for kind '{}'", kind);
        }
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.copiers.contains_key(kind)
    }

    /// Copy `value` as described by `descriptor`
    pub fn copy(&self, descriptor: &Descriptor, value: &Value, context: &CopyContext) -> Value {
        match self.copiers.get(descriptor.kind()) {
            Some(copier) => copier(value, context),
            None => {
                tracing::trace!("No copy function for kind '{}', cloning", descriptor.kind());
                value.clone()
            }
        }
    }
}

impl Default for CopyRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CopyRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut kinds: Vec<&str> = self.copiers.keys().map(|k| k.as_str()).collect();
        kinds.sort_unstable();
        f.debug_struct("CopyRegistry").field("kinds", &kinds).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn context() -> CopyContext {
        CopyContext::new(ReplacementContext::default().with(IdKind::GlobalElement, "el-1", "el-2"))
    }

    #[test]
    fn test_element_id_mapped() {
        let registry = CopyRegistry::new();
        let copied = registry.copy(&Descriptor::new(kinds::ELEMENT_ID), &json!("el-1"), &context());
        assert_eq!(copied, json!("el-2"));
    }

    #[test]
    fn test_element_id_unmapped_keeps_original() {
        let registry = CopyRegistry::new();
        let copied = registry.copy(&Descriptor::new(kinds::ELEMENT_ID), &json!("el-9"), &context());
        assert_eq!(copied, json!("el-9"));
    }

    #[test]
    fn test_unknown_kind_is_identity() {
        let registry = CopyRegistry::new();
        let value = json!({ "deeply": { "nested": ["el-1"] } });
        assert_eq!(registry.copy(&Descriptor::new("Number"), &value, &context()), value);
        assert_eq!(registry.copy(&Descriptor::new(kinds::GRID), &json!(7), &context()), json!(7));
    }

    #[test]
    fn test_copy_element_reference() {
        assert_eq!(copy_element_reference("el-1", &context()), "el-2");
        assert_eq!(copy_element_reference("el-3", &context()), "el-3");
    }

    #[test]
    fn test_register_custom_kind() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();

        let mut registry = CopyRegistry::empty();
        registry.register("Counter", |value, _| json!(value.as_i64().unwrap_or(0) + 1));
        registry.register("Counter", |value, _| json!(value.as_i64().unwrap_or(0) * 10));

        assert!(registry.contains("Counter"));
        assert!(!registry.contains(kinds::ELEMENT_ID));
        assert_eq!(
            registry.copy(&Descriptor::new("Counter"), &json!(4), &CopyContext::default()),
            json!(40)
        );
    }

    #[test]
    fn test_dispatch_reaches_kind_copies() {
        let registry = CopyRegistry::default();
        let context = CopyContext::new(ReplacementContext::default().with(IdKind::File, "f1", "f2"));
        assert_eq!(registry.copy(&Descriptor::new(kinds::IMAGE), &json!("f1"), &context), json!("f2"));
    }
}

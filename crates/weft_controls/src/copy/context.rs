//! Remap tables used while duplicating content

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use serde_json::Value;

/// Old id to new id, per kind of referenced entity
///
/// Every lookup falls back to the original id when it has no mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplacementContext {
    pub global_element_ids: FxHashMap<String, String>,
    pub element_keys: FxHashMap<String, String>,
    pub swatch_ids: FxHashMap<String, String>,
    pub file_ids: FxHashMap<String, String>,
    pub typography_ids: FxHashMap<String, String>,
    pub table_ids: FxHashMap<String, String>,
    pub table_column_ids: FxHashMap<String, String>,
    pub page_ids: FxHashMap<String, String>,
}

/// Which remap table an id belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdKind {
    GlobalElement,
    ElementKey,
    Swatch,
    File,
    Typography,
    Table,
    TableColumn,
    Page,
}

impl ReplacementContext {
    pub fn table(&self, kind: IdKind) -> &FxHashMap<String, String> {
        match kind {
            IdKind::GlobalElement => &self.global_element_ids,
            IdKind::ElementKey => &self.element_keys,
            IdKind::Swatch => &self.swatch_ids,
            IdKind::File => &self.file_ids,
            IdKind::Typography => &self.typography_ids,
            IdKind::Table => &self.table_ids,
            IdKind::TableColumn => &self.table_column_ids,
            IdKind::Page => &self.page_ids,
        }
    }

    pub fn table_mut(&mut self, kind: IdKind) -> &mut FxHashMap<String, String> {
        match kind {
            IdKind::GlobalElement => &mut self.global_element_ids,
            IdKind::ElementKey => &mut self.element_keys,
            IdKind::Swatch => &mut self.swatch_ids,
            IdKind::File => &mut self.file_ids,
            IdKind::Typography => &mut self.typography_ids,
            IdKind::Table => &mut self.table_ids,
            IdKind::TableColumn => &mut self.table_column_ids,
            IdKind::Page => &mut self.page_ids,
        }
    }

    /// Add a mapping, returning the updated context for chaining
    pub fn with(mut self, kind: IdKind, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.table_mut(kind).insert(from.into(), to.into());
        self
    }

    /// The replacement for `id`, or `id` itself
    pub fn lookup<'a>(&'a self, kind: IdKind, id: &'a str) -> &'a str {
        self.table(kind).get(id).map(String::as_str).unwrap_or(id)
    }

    /// Rewrite `value` in place if it is a mapped id string
    pub fn remap(&self, kind: IdKind, value: &mut Value) {
        if let Value::String(id) = value {
            if let Some(replacement) = self.table(kind).get(id.as_str()) {
                *id = replacement.clone();
            }
        }
    }
}

/// Deep-copies a nested element tree
pub type ElementCopier = Arc<dyn Fn(&Value) -> Value + Send + Sync>;

/// Everything a copy function may consult
#[derive(Clone, Default)]
pub struct CopyContext {
    pub replacement_context: ReplacementContext,
    /// Used for elements nested inside property values, such as grid children
    pub element_copier: Option<ElementCopier>,
}

impl CopyContext {
    pub fn new(replacement_context: ReplacementContext) -> Self {
        Self {
            replacement_context,
            element_copier: None,
        }
    }

    pub fn with_element_copier<F>(mut self, copier: F) -> Self
    where
        F: Fn(&Value) -> Value + Send + Sync + 'static,
    {
        self.element_copier = Some(Arc::new(copier));
        self
    }

    pub fn lookup<'a>(&'a self, kind: IdKind, id: &'a str) -> &'a str {
        self.replacement_context.lookup(kind, id)
    }

    pub fn remap(&self, kind: IdKind, value: &mut Value) {
        self.replacement_context.remap(kind, value)
    }
}

impl fmt::Debug for CopyContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CopyContext")
            .field("replacement_context", &self.replacement_context)
            .field("element_copier", &self.element_copier.is_some())
            .finish()
    }
}

//! Controller factory
//!
//! Maps descriptor kinds to controller constructors. Kinds without a
//! constructor get a [`DefaultController`], so building controllers for a
//! component never fails.

use std::sync::Arc;

use indexmap::IndexMap;
use rustc_hash::FxHashMap;

use crate::controller::{
    DefaultController, PropController, RichTextController, SlotController, TableFormFieldsController,
};
use crate::descriptor::{kinds, Descriptor};
use crate::sender::MessageSender;

/// Builds a controller bound to the given sender
pub type ControllerConstructor = Arc<dyn Fn(MessageSender) -> PropController + Send + Sync>;

#[derive(Clone)]
pub struct ControllerRegistry {
    constructors: FxHashMap<String, ControllerConstructor>,
}

impl ControllerRegistry {
    /// A registry with no constructors; every kind gets the default controller
    pub fn empty() -> Self {
        Self {
            constructors: FxHashMap::default(),
        }
    }

    /// A registry with the rich-text, table-form and slot controllers
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(kinds::RICH_TEXT, |send| {
            PropController::RichText(RichTextController::new(send))
        });
        registry.register(kinds::TABLE_FORM_FIELDS, |send| {
            PropController::TableFormFields(TableFormFieldsController::new(send))
        });
        registry.register(kinds::SLOT, |send| PropController::Slot(SlotController::new(send)));
        registry
    }

    /// Register a constructor for `kind`, replacing any existing one
    pub fn register<F>(&mut self, kind: &str, constructor: F)
    where
        F: Fn(MessageSender) -> PropController + Send + Sync + 'static,
    {
        if self
            .constructors
            .insert(kind.to_string(), Arc::new(constructor))
            .is_some()
        {
            tracing::warn!("Replacing prop controller constructor for kind '{}'", kind);
        }
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.constructors.contains_key(kind)
    }

    /// Build the controller for a descriptor
    pub fn create(&self, descriptor: &Descriptor, send: MessageSender) -> PropController {
        match self.constructors.get(descriptor.kind()) {
            Some(constructor) => constructor(send),
            None => {
                tracing::debug!(
                    "No prop controller for kind '{}', using default",
                    descriptor.kind()
                );
                PropController::Default(DefaultController::new(send))
            }
        }
    }
}

impl Default for ControllerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ControllerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut kinds: Vec<&str> = self.constructors.keys().map(|k| k.as_str()).collect();
        kinds.sort_unstable();
        f.debug_struct("ControllerRegistry").field("kinds", &kinds).finish()
    }
}

/// One controller per named property descriptor, in descriptor order
///
/// Every controller shares the same sender.
pub fn create_prop_controllers(
    registry: &ControllerRegistry,
    descriptors: &IndexMap<String, Descriptor>,
    send: &MessageSender,
) -> IndexMap<String, PropController> {
    descriptors
        .iter()
        .map(|(name, descriptor)| (name.clone(), registry.create(descriptor, send.clone())))
        .collect()
}

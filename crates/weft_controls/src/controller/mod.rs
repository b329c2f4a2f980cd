//! Prop controllers
//!
//! A prop controller sits between one component property and the editor.
//! It owns the send handle it was built with and exposes kind-specific
//! operations; [`PropController::recv`] accepts messages from the editor.

mod rich_text;
mod slot;
mod table_form_fields;

pub use rich_text::{EditorSession, EditorValue, RichTextController};
pub use slot::SlotController;
pub use table_form_fields::TableFormFieldsController;

#[cfg(test)]
pub(crate) use rich_text::testing;

use crate::message::PropControllerMessage;
use crate::sender::MessageSender;

/// Controller for properties without live editor interaction
pub struct DefaultController {
    send: MessageSender,
}

impl DefaultController {
    pub fn new(send: MessageSender) -> Self {
        Self { send }
    }

    pub fn sender(&self) -> &MessageSender {
        &self.send
    }
}

pub enum PropController {
    Default(DefaultController),
    RichText(RichTextController),
    TableFormFields(TableFormFieldsController),
    Slot(SlotController),
}

impl PropController {
    /// Handle a message from the editor
    ///
    /// Only rich-text controllers react; every other variant ignores
    /// incoming messages.
    pub fn recv(&mut self, message: &PropControllerMessage) {
        match self {
            PropController::RichText(controller) => controller.recv(message),
            PropController::Default(_)
            | PropController::TableFormFields(_)
            | PropController::Slot(_) => {}
        }
    }

    /// The send handle this controller was built with
    pub fn sender(&self) -> &MessageSender {
        match self {
            PropController::Default(controller) => controller.sender(),
            PropController::RichText(controller) => controller.sender(),
            PropController::TableFormFields(controller) => controller.sender(),
            PropController::Slot(controller) => controller.sender(),
        }
    }

    pub fn variant_name(&self) -> &'static str {
        match self {
            PropController::Default(_) => "Default",
            PropController::RichText(_) => "RichText",
            PropController::TableFormFields(_) => "TableFormFields",
            PropController::Slot(_) => "Slot",
        }
    }

    pub fn as_rich_text(&self) -> Option<&RichTextController> {
        match self {
            PropController::RichText(controller) => Some(controller),
            _ => None,
        }
    }

    pub fn as_rich_text_mut(&mut self) -> Option<&mut RichTextController> {
        match self {
            PropController::RichText(controller) => Some(controller),
            _ => None,
        }
    }

    pub fn as_table_form_fields(&self) -> Option<&TableFormFieldsController> {
        match self {
            PropController::TableFormFields(controller) => Some(controller),
            _ => None,
        }
    }

    pub fn as_slot(&self) -> Option<&SlotController> {
        match self {
            PropController::Slot(controller) => Some(controller),
            _ => None,
        }
    }
}

impl std::fmt::Debug for PropController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("PropController").field(&self.variant_name()).finish()
    }
}

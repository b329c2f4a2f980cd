//! Messages exchanged between prop controllers and the editor
//!
//! Every message is a JSON object with a `"type"` discriminant in
//! SCREAMING_SNAKE_CASE and camelCase payload fields:
//!
//! ```json
//! { "type": "CHANGE_BUILDER_EDIT_MODE", "editMode": "content" }
//! { "type": "TABLE_FORM_FIELD_LAYOUT_CHANGE", "payload": { "layout": { ... }, "index": 2 } }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::box_model::BoxModel;

/// Which surface of the builder the user is editing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuilderEditMode {
    /// Arranging elements; text editors are inert
    Build,
    /// Editing text content in place
    Content,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RichTextMessage {
    ChangeBuilderEditMode {
        #[serde(rename = "editMode")]
        edit_mode: BuilderEditMode,
    },
    /// Editor value without selection, sent once per bound session
    InitializeEditor { value: Value },
    /// Editor value including selection
    ChangeEditorValue { value: Value },
    Focus,
    Blur,
    Undo,
    Redo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableFormLayoutPayload {
    pub layout: BoxModel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableFormFieldLayoutPayload {
    pub layout: BoxModel,
    pub index: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TableFormFieldsMessage {
    TableFormLayoutChange { payload: TableFormLayoutPayload },
    TableFormFieldLayoutChange { payload: TableFormFieldLayoutPayload },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerBoxModelPayload {
    /// `None` once the container is unmounted
    pub box_model: Option<BoxModel>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemBoxModelPayload {
    pub index: usize,
    pub box_model: Option<BoxModel>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SlotMessage {
    ChangeContainerBoxModel { payload: ContainerBoxModelPayload },
    ChangeItemBoxModel { payload: ItemBoxModelPayload },
}

/// Any message a prop controller sends or receives
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropControllerMessage {
    RichText(RichTextMessage),
    TableFormFields(TableFormFieldsMessage),
    Slot(SlotMessage),
}

impl PropControllerMessage {
    /// The wire `"type"` of this message
    pub fn type_name(&self) -> &'static str {
        match self {
            PropControllerMessage::RichText(message) => match message {
                RichTextMessage::ChangeBuilderEditMode { .. } => "CHANGE_BUILDER_EDIT_MODE",
                RichTextMessage::InitializeEditor { .. } => "INITIALIZE_EDITOR",
                RichTextMessage::ChangeEditorValue { .. } => "CHANGE_EDITOR_VALUE",
                RichTextMessage::Focus => "FOCUS",
                RichTextMessage::Blur => "BLUR",
                RichTextMessage::Undo => "UNDO",
                RichTextMessage::Redo => "REDO",
            },
            PropControllerMessage::TableFormFields(message) => match message {
                TableFormFieldsMessage::TableFormLayoutChange { .. } => "TABLE_FORM_LAYOUT_CHANGE",
                TableFormFieldsMessage::TableFormFieldLayoutChange { .. } => {
                    "TABLE_FORM_FIELD_LAYOUT_CHANGE"
                }
            },
            PropControllerMessage::Slot(message) => match message {
                SlotMessage::ChangeContainerBoxModel { .. } => "CHANGE_CONTAINER_BOX_MODEL",
                SlotMessage::ChangeItemBoxModel { .. } => "CHANGE_ITEM_BOX_MODEL",
            },
        }
    }
}

impl From<RichTextMessage> for PropControllerMessage {
    fn from(message: RichTextMessage) -> Self {
        PropControllerMessage::RichText(message)
    }
}

impl From<TableFormFieldsMessage> for PropControllerMessage {
    fn from(message: TableFormFieldsMessage) -> Self {
        PropControllerMessage::TableFormFields(message)
    }
}

impl From<SlotMessage> for PropControllerMessage {
    fn from(message: SlotMessage) -> Self {
        PropControllerMessage::Slot(message)
    }
}

//! Weft Prop Controllers
//!
//! Editor-facing runtime for component properties:
//!
//! - **Message Bus**: typed messages between prop controllers and the editor
//! - **Controllers**: rich-text, table-form and slot controllers plus a
//!   no-op default, created per property by a kind-keyed registry
//! - **Copy Dispatcher**: descriptor-driven copies of stored values with
//!   remapped references, used when duplicating content
//!
//! # Example
//!
//! ```rust
//! use std::sync::{Arc, Mutex};
//! use weft_controls::{
//!     BoxModel, ControllerRegistry, Descriptor, MessageSender, PropControllerMessage,
//! };
//!
//! let sent = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&sent);
//! let sender = MessageSender::new(move |message: PropControllerMessage| {
//!     sink.lock().unwrap().push(serde_json::to_value(&message).unwrap());
//!     Ok(())
//! });
//!
//! let registry = ControllerRegistry::new();
//! let controller = registry.create(&Descriptor::new("TableFormFields"), sender);
//! controller
//!     .as_table_form_fields()
//!     .unwrap()
//!     .table_form_layout_change(BoxModel::default())
//!     .unwrap();
//!
//! assert_eq!(sent.lock().unwrap()[0]["type"], "TABLE_FORM_LAYOUT_CHANGE");
//! ```

pub mod box_model;
pub mod controller;
pub mod copy;
pub mod descriptor;
pub mod error;
pub mod factory;
pub mod message;
pub mod sender;

pub use box_model::{BoxModel, Rect, Spacing};
pub use controller::{
    DefaultController, EditorSession, EditorValue, PropController, RichTextController,
    SlotController, TableFormFieldsController,
};
pub use copy::{
    copy_element_reference, CopyContext, CopyFn, CopyRegistry, ElementCopier, IdKind,
    ReplacementContext,
};
pub use descriptor::{kinds, Descriptor};
pub use error::{Result, SendError};
pub use factory::{create_prop_controllers, ControllerConstructor, ControllerRegistry};
pub use message::{
    BuilderEditMode, ContainerBoxModelPayload, ItemBoxModelPayload, PropControllerMessage,
    RichTextMessage, SlotMessage, TableFormFieldLayoutPayload, TableFormFieldsMessage,
    TableFormLayoutPayload,
};
pub use sender::MessageSender;

//! Rich-text controller
//!
//! Bridges a live text-editing session and the builder. The builder drives
//! focus through edit-mode changes; the session reports its value back.

use serde_json::Value;

use crate::error::Result;
use crate::message::{BuilderEditMode, PropControllerMessage, RichTextMessage};
use crate::sender::MessageSender;

/// A serializable editor state
pub trait EditorValue {
    /// Serialize the document, optionally including the current selection
    fn to_json(&self, preserve_selection: bool) -> Value;
}

/// A live text-editing session
pub trait EditorSession: EditorValue + Send {
    fn focus(&mut self);
    fn blur(&mut self);
    fn deselect(&mut self);
    /// Select the whole document
    fn select_document(&mut self);
}

pub struct RichTextController {
    send: MessageSender,
    session: Option<Box<dyn EditorSession>>,
}

impl RichTextController {
    pub fn new(send: MessageSender) -> Self {
        Self {
            send,
            session: None,
        }
    }

    pub fn sender(&self) -> &MessageSender {
        &self.send
    }

    pub fn has_editor(&self) -> bool {
        self.session.is_some()
    }

    /// Bind the live session and announce its initial value
    ///
    /// A previously bound session is dropped without notice.
    pub fn set_editor(&mut self, session: Box<dyn EditorSession>) -> Result<()> {
        if self.session.is_some() {
            tracing::debug!("Rebinding rich text editor session");
        }
        let value = session.to_json(false);
        self.session = Some(session);
        self.send.send(RichTextMessage::InitializeEditor { value })
    }

    pub fn on_change(&self, change: &dyn EditorValue) -> Result<()> {
        self.send.send(RichTextMessage::ChangeEditorValue {
            value: change.to_json(true),
        })
    }

    pub fn focus(&self) -> Result<()> {
        self.send.send(RichTextMessage::Focus)
    }

    pub fn blur(&self) -> Result<()> {
        self.send.send(RichTextMessage::Blur)
    }

    pub fn undo(&self) -> Result<()> {
        self.send.send(RichTextMessage::Undo)
    }

    pub fn redo(&self) -> Result<()> {
        self.send.send(RichTextMessage::Redo)
    }

    pub fn recv(&mut self, message: &PropControllerMessage) {
        let PropControllerMessage::RichText(RichTextMessage::ChangeBuilderEditMode { edit_mode }) =
            message
        else {
            return;
        };
        let Some(session) = self.session.as_mut() else {
            return;
        };

        match edit_mode {
            BuilderEditMode::Build => {
                session.deselect();
                session.blur();
            }
            BuilderEditMode::Content => {
                session.focus();
                session.select_document();
            }
        }
    }
}

//! Send handles injected into prop controllers

use std::fmt;
use std::sync::Arc;

use crate::error::Result;
use crate::message::PropControllerMessage;

/// Sink function behind a [`MessageSender`]
pub type SendFn = dyn Fn(PropControllerMessage) -> Result<()> + Send + Sync;

/// Cloneable handle to the editor-side message sink
///
/// Delivery is a direct call: `send` returns once the sink has run, so
/// messages from one controller arrive in call order.
#[derive(Clone)]
pub struct MessageSender {
    sink: Arc<SendFn>,
}

impl MessageSender {
    pub fn new<F>(sink: F) -> Self
    where
        F: Fn(PropControllerMessage) -> Result<()> + Send + Sync + 'static,
    {
        Self {
            sink: Arc::new(sink),
        }
    }

    /// A sender that drops every message
    pub fn noop() -> Self {
        Self::new(|_| Ok(()))
    }

    pub fn send(&self, message: impl Into<PropControllerMessage>) -> Result<()> {
        let message = message.into();
        tracing::trace!("Sending prop controller message {}", message.type_name());
        (self.sink)(message)
    }
}

impl fmt::Debug for MessageSender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageSender").finish_non_exhaustive()
    }
}


#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;
    use crate::error::SendError;
    use crate::message::RichTextMessage;

    #[test]
    fn test_send_delivers_in_order() {
        let (sender, sent) = recording_sender();
        sender.send(RichTextMessage::Focus).unwrap();
        sender.clone().send(RichTextMessage::Blur).unwrap();
        assert_eq!(type_names(&sent), vec!["FOCUS", "BLUR"]);
    }

    #[test]
    fn test_send_surfaces_sink_error() {
        let sender = disconnected_sender();
        assert_eq!(sender.send(RichTextMessage::Undo), Err(SendError::Disconnected));
    }

    #[test]
    fn test_noop_accepts_everything() {
        assert!(MessageSender::noop().send(RichTextMessage::Redo).is_ok());
    }
}

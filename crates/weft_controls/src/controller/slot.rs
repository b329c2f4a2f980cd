//! Slot controller: reports the measured boxes of a slot and its items

use crate::box_model::BoxModel;
use crate::error::Result;
use crate::message::{ContainerBoxModelPayload, ItemBoxModelPayload, SlotMessage};
use crate::sender::MessageSender;

pub struct SlotController {
    send: MessageSender,
}

impl SlotController {
    pub fn new(send: MessageSender) -> Self {
        Self { send }
    }

    pub fn sender(&self) -> &MessageSender {
        &self.send
    }

    /// Report the container's box model, `None` once unmounted
    pub fn change_container_box_model(&self, box_model: Option<BoxModel>) -> Result<()> {
        self.send.send(SlotMessage::ChangeContainerBoxModel {
            payload: ContainerBoxModelPayload { box_model },
        })
    }

    /// Report the box model of the item at `index`
    pub fn change_item_box_model(&self, index: usize, box_model: Option<BoxModel>) -> Result<()> {
        self.send.send(SlotMessage::ChangeItemBoxModel {
            payload: ItemBoxModelPayload { index, box_model },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sender::testing::{recording_sender, type_names};

    #[test]
    fn test_reports_in_call_order() {
        let (sender, sent) = recording_sender();
        let controller = SlotController::new(sender);

        controller.change_container_box_model(Some(BoxModel::default())).unwrap();
        controller.change_item_box_model(0, Some(BoxModel::default())).unwrap();
        controller.change_item_box_model(0, None).unwrap();

        assert_eq!(
            type_names(&sent),
            vec!["CHANGE_CONTAINER_BOX_MODEL", "CHANGE_ITEM_BOX_MODEL", "CHANGE_ITEM_BOX_MODEL"]
        );
    }
}

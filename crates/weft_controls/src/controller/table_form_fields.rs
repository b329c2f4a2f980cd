//! Table form controller: reports form and field layouts

use crate::box_model::BoxModel;
use crate::error::Result;
use crate::message::{TableFormFieldLayoutPayload, TableFormFieldsMessage, TableFormLayoutPayload};
use crate::sender::MessageSender;

pub struct TableFormFieldsController {
    send: MessageSender,
}

impl TableFormFieldsController {
    pub fn new(send: MessageSender) -> Self {
        Self { send }
    }

    pub fn sender(&self) -> &MessageSender {
        &self.send
    }

    /// Report the layout of the whole form
    pub fn table_form_layout_change(&self, layout: BoxModel) -> Result<()> {
        self.send.send(TableFormFieldsMessage::TableFormLayoutChange {
            payload: TableFormLayoutPayload { layout },
        })
    }

    /// Report the layout of the field at `index`
    pub fn table_form_field_layout_change(&self, layout: BoxModel, index: usize) -> Result<()> {
        self.send.send(TableFormFieldsMessage::TableFormFieldLayoutChange {
            payload: TableFormFieldLayoutPayload { layout, index },
        })
    }
}

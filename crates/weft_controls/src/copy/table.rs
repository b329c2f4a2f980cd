//! Copies for table and table form values

use serde_json::Value;

use super::context::{CopyContext, IdKind};

/// A table id
pub fn copy_table(value: &Value, context: &CopyContext) -> Value {
    let mut value = value.clone();
    context.remap(IdKind::Table, &mut value);
    value
}

/// `{ grid, fields: [{ tableColumnId, ... }] }`
pub fn copy_table_form_fields(value: &Value, context: &CopyContext) -> Value {
    let mut value = value.clone();
    if let Some(fields) = value.get_mut("fields").and_then(Value::as_array_mut) {
        for field in fields {
            if let Some(column_id) = field.get_mut("tableColumnId") {
                context.remap(IdKind::TableColumn, column_id);
            }
        }
    }
    value
}

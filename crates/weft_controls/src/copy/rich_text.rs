//! Rich-text copy
//!
//! Walks the editor document tree. Link inlines reference pages and
//! elements; typography marks reference shared typography styles.

use serde_json::Value;

use super::context::{CopyContext, IdKind};
use super::link::remap_link;

pub fn copy_rich_text(value: &Value, context: &CopyContext) -> Value {
    let mut value = value.clone();
    if let Some(document) = value.get_mut("document") {
        remap_node(document, context);
    }
    value
}

fn remap_node(node: &mut Value, context: &CopyContext) {
    let is_link_inline = node.get("object").and_then(Value::as_str) == Some("inline")
        && node.get("type").and_then(Value::as_str) == Some("link");
    if is_link_inline {
        if let Some(link) = node.pointer_mut("/data/link") {
            remap_link(link, context);
        }
    }

    if let Some(marks) = node.get_mut("marks").and_then(Value::as_array_mut) {
        for mark in marks {
            if mark.get("type").and_then(Value::as_str) == Some("typography") {
                if let Some(id) = mark.pointer_mut("/data/value/id") {
                    context.remap(IdKind::Typography, id);
                }
            }
        }
    }

    for children in ["leaves", "nodes"] {
        if let Some(children) = node.get_mut(children).and_then(Value::as_array_mut) {
            for child in children {
                remap_node(child, context);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::copy::context::ReplacementContext;
    use serde_json::json;

    fn typography(id: &str) -> Value {
        json!({ "object": "mark", "type": "typography", "data": { "value": { "id": id, "style": [] } } })
    }

    #[test]
    fn test_links_and_typography_remapped() {
        let context = CopyContext::new(
            ReplacementContext::default()
                .with(IdKind::Typography, "heading", "heading-copy")
                .with(IdKind::Page, "pricing", "pricing-copy"),
        );
        let value = json!({
            "object": "value",
            "document": { "object": "document", "data": {}, "nodes": [
                { "object": "block", "type": "paragraph", "nodes": [
                    { "object": "text", "leaves": [
                        { "object": "leaf", "text": "See ", "marks": [typography("heading"), { "object": "mark", "type": "bold" }] }
                    ] },
                    { "object": "inline", "type": "link",
                      "data": { "link": { "type": "OPEN_PAGE", "payload": { "pageId": "pricing" } } },
                      "nodes": [{ "object": "text", "leaves": [
                          { "object": "leaf", "text": "pricing", "marks": [typography("body")] }
                      ] }] }
                ] }
            ] }
        });

        let copied = copy_rich_text(&value, &context);
        let paragraph = &copied["document"]["nodes"][0];
        assert_eq!(
            paragraph["nodes"][0]["leaves"][0]["marks"][0]["data"]["value"]["id"],
            "heading-copy"
        );
        assert_eq!(paragraph["nodes"][0]["leaves"][0]["marks"][1], json!({ "object": "mark", "type": "bold" }));
        assert_eq!(paragraph["nodes"][1]["data"]["link"]["payload"]["pageId"], "pricing-copy");
        assert_eq!(
            paragraph["nodes"][1]["nodes"][0]["leaves"][0]["marks"][0]["data"]["value"]["id"],
            "body"
        );
    }

    #[test]
    fn test_without_document_unchanged() {
        let value = json!({ "object": "value" });
        assert_eq!(copy_rich_text(&value, &CopyContext::default()), value);
    }
}

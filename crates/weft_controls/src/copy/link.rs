//! Copies for links and navigation menus

use serde_json::Value;

use super::color::remap_responsive_color;
use super::context::{CopyContext, IdKind};

/// Rewrite page and element references of a link in place
///
/// URL, email and phone links carry no references.
pub(super) fn remap_link(link: &mut Value, context: &CopyContext) {
    let kind = link.get("type").and_then(Value::as_str).map(str::to_owned);
    match kind.as_deref() {
        Some("OPEN_PAGE") => {
            if let Some(page_id) = link.pointer_mut("/payload/pageId") {
                context.remap(IdKind::Page, page_id);
            }
        }
        Some("SCROLL_TO_ELEMENT") => {
            if let Some(key) = link.pointer_mut("/payload/elementIdConfig/elementKey") {
                context.remap(IdKind::ElementKey, key);
            }
        }
        _ => {}
    }
}

pub fn copy_link(value: &Value, context: &CopyContext) -> Value {
    let mut value = value.clone();
    remap_link(&mut value, context);
    value
}

/// List of buttons and dropdowns; dropdowns hold their own links
pub fn copy_navigation_links(value: &Value, context: &CopyContext) -> Value {
    let mut value = value.clone();
    if let Some(items) = value.as_array_mut() {
        for item in items {
            let Some(payload) = item.get_mut("payload") else {
                continue;
            };
            if let Some(link) = payload.get_mut("link") {
                remap_link(link, context);
            }
            for field in ["color", "textColor"] {
                if let Some(color) = payload.get_mut(field) {
                    remap_responsive_color(color, context);
                }
            }
            if let Some(links) = payload.get_mut("links").and_then(Value::as_array_mut) {
                for nested in links {
                    if let Some(link) = nested.pointer_mut("/payload/link") {
                        remap_link(link, context);
                    }
                }
            }
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::copy::context::ReplacementContext;
    use serde_json::json;

    fn context() -> CopyContext {
        CopyContext::new(
            ReplacementContext::default()
                .with(IdKind::Page, "about", "about-copy")
                .with(IdKind::ElementKey, "hero", "hero-copy")
                .with(IdKind::Swatch, "brand", "brand-copy"),
        )
    }

    #[test]
    fn test_open_page() {
        let link = json!({ "type": "OPEN_PAGE", "payload": { "pageId": "about", "openInNewTab": true } });
        assert_eq!(
            copy_link(&link, &context()),
            json!({ "type": "OPEN_PAGE", "payload": { "pageId": "about-copy", "openInNewTab": true } })
        );
    }

    #[test]
    fn test_scroll_to_element() {
        let link = json!({ "type": "SCROLL_TO_ELEMENT", "payload": {
            "elementIdConfig": { "elementKey": "hero", "propName": "id" }, "block": "start"
        } });
        let copied = copy_link(&link, &context());
        assert_eq!(copied["payload"]["elementIdConfig"]["elementKey"], "hero-copy");
        assert_eq!(copied["payload"]["block"], "start");
    }

    #[test]
    fn test_url_link_unchanged() {
        let link = json!({ "type": "OPEN_URL", "payload": { "url": "https://example.com" } });
        assert_eq!(copy_link(&link, &context()), link);
    }

    #[test]
    fn test_navigation_links() {
        let value = json!([
            { "id": "1", "type": "button", "payload": {
                "label": "About",
                "link": { "type": "OPEN_PAGE", "payload": { "pageId": "about" } },
                "color": [{ "deviceId": "desktop", "value": { "swatchId": "brand", "alpha": 1 } }]
            } },
            { "id": "2", "type": "dropdown", "payload": {
                "label": "More",
                "textColor": [{ "deviceId": "mobile", "value": { "swatchId": "brand", "alpha": 1 } }],
                "links": [
                    { "id": "2a", "payload": { "label": "Hero",
                      "link": { "type": "SCROLL_TO_ELEMENT", "payload": { "elementIdConfig": { "elementKey": "hero" } } } } }
                ]
            } }
        ]);

        let copied = copy_navigation_links(&value, &context());
        assert_eq!(copied[0]["payload"]["link"]["payload"]["pageId"], "about-copy");
        assert_eq!(copied[0]["payload"]["color"][0]["value"]["swatchId"], "brand-copy");
        assert_eq!(copied[1]["payload"]["textColor"][0]["value"]["swatchId"], "brand-copy");
        assert_eq!(
            copied[1]["payload"]["links"][0]["payload"]["link"]["payload"]["elementIdConfig"]["elementKey"],
            "hero-copy"
        );
    }
}

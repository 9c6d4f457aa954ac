//! Mount style nodes into a live browser document

use inline_styles_shared::{MARKER_ATTRIBUTE, STYLE_TAG};
use wasm_bindgen::JsValue;

use super::element::StyleElement;

/// Get the current document
fn get_document() -> Result<web_sys::Document, JsValue> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("Document object not found"))
}

impl StyleElement {
    /// Create a detached `<style>` node in the given document.
    ///
    /// The css is set as the text content of the node, without escaping.
    pub fn create_node(&self, document: &web_sys::Document) -> Result<web_sys::Element, JsValue> {
        let node = document.create_element(STYLE_TAG)?;
        for (name, value) in self.attributes() {
            node.set_attribute(name, value)?;
        }
        node.set_text_content(Some(self.css().as_str()));
        Ok(node)
    }

    /// Create the node and append it to `parent`.
    pub fn mount(&self, parent: &web_sys::Element) -> Result<web_sys::Element, JsValue> {
        let document = parent
            .owner_document()
            .ok_or_else(|| JsValue::from_str("Parent is not attached to a document"))?;
        let node = self.create_node(&document)?;
        parent.append_child(&node)?;

        log::debug!("Mounted style node ({} bytes of css)", self.css().as_str().len());
        Ok(node)
    }

    /// Create the node and append it to the `<head>` of the current document.
    pub fn inject_into_head(&self) -> Result<web_sys::Element, JsValue> {
        let document = get_document()?;
        let head = document
            .head()
            .ok_or_else(|| JsValue::from_str("Document has no head"))?;
        self.mount(&head)
    }
}

/// Remove every style node carrying the marker attribute from the document.
///
/// Returns how many nodes were removed.
pub fn remove_all(document: &web_sys::Document) -> Result<u32, JsValue> {
    let nodes = document.query_selector_all(&format!("{STYLE_TAG}[{MARKER_ATTRIBUTE}]"))?;

    let mut removed: u32 = 0;
    for index in 0..nodes.length() {
        let Some(node) = nodes.get(index) else {
            continue;
        };
        if let Some(parent) = node.parent_node() {
            parent.remove_child(&node)?;
            removed = removed.saturating_add(1);
        }
    }

    log::debug!("Removed {removed} style nodes");
    Ok(removed)
}

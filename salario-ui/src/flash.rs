//! Flash message bootstrap
//!
//! Turns the server-rendered `[data-flash]` elements into toasts.

use wasm_bindgen::JsCast;
use web_sys::Element;

use salario::notify::{CATEGORY_ATTR, FLASH_SELECTOR, MESSAGE_ATTR};
use salario::FlashMessage;

use crate::state::GlobalState;

/// Toast every flash element and remove it from the DOM
pub fn show_flash_messages(state: &GlobalState) {
    for element in flash_elements() {
        let flash = FlashMessage::from_attributes(
            element.get_attribute(CATEGORY_ATTR),
            element.get_attribute(MESSAGE_ATTR),
        );
        if let Some(flash) = flash {
            state.notify(flash.kind(), flash.message);
        }
        element.remove();
    }
}

fn flash_elements() -> Vec<Element> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let Ok(nodes) = document.query_selector_all(FLASH_SELECTOR) else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

//! Page Enhancers
//!
//! Each submodule binds one group of affordances to server-rendered markup.
//! Click, change, input and submit handlers are delegated from the document,
//! so they keep working on product cards spliced in by the category filter.

mod cart;
mod catalog;
mod category;
mod checkout;
mod effects;
mod forms;
mod inventory;
mod wishlist;

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use crate::context::StorefrontContext;

pub(crate) const SPINNER_ICON: &str = r#"<i class="fas fa-spinner fa-spin"></i>"#;

/// Bind everything once per page load
pub fn bind_all(ctx: StorefrontContext) {
    cart::bind(ctx);
    category::bind(ctx);
    checkout::bind(ctx);
    forms::bind(ctx);
    wishlist::bind(ctx);
    catalog::bind(ctx);
    effects::bind(ctx);

    if let Some(root) = leptos_enhance::document().and_then(|doc| doc.document_element()) {
        enhance_fragment(ctx, &root);
    }
    log::debug!("[APP] Enhancers bound");
}

/// Per-element work for markup under `root`, run at load and after a splice
pub(crate) fn enhance_fragment(ctx: StorefrontContext, root: &Element) {
    inventory::apply(ctx, root);
    effects::bind_image_zoom(root);
}

pub(crate) fn alert(message: &str) {
    if let Some(win) = leptos_enhance::window() {
        let _ = win.alert_with_message(message);
    }
}

pub(crate) fn confirm(message: &str) -> bool {
    leptos_enhance::window()
        .and_then(|win| win.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub(crate) fn reload() {
    if let Some(win) = leptos_enhance::window() {
        if let Err(err) = win.location().reload() {
            log::error!("[APP] Reload failed: {:?}", err);
        }
    }
}

pub(crate) fn navigate(href: &str) {
    if let Some(win) = leptos_enhance::window() {
        if let Err(err) = win.location().set_href(href) {
            log::error!("[APP] Navigation to {} failed: {:?}", href, err);
        }
    }
}

pub(crate) fn current_path() -> String {
    leptos_enhance::window()
        .and_then(|win| win.location().pathname().ok())
        .unwrap_or_default()
}

/// Current value of a form control
pub(crate) fn control_value(el: &HtmlElement) -> Option<String> {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
        return Some(select.value());
    }
    el.dyn_ref::<HtmlTextAreaElement>().map(|area| area.value())
}

//! Leptos Enhance Utilities
//!
//! Bind handlers and signals onto DOM the server already rendered.
//! Listeners live for the whole page, so closures are leaked on purpose.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Window};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// First element matching `selector`, if any
pub fn query(selector: &str) -> Option<HtmlElement> {
    document()?
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// All elements matching `selector` in document order
pub fn query_all(selector: &str) -> Vec<HtmlElement> {
    match document() {
        Some(doc) => collect_matches(doc.query_selector_all(selector).ok()),
        None => Vec::new(),
    }
}

/// All descendants of `root` matching `selector`
pub fn query_all_in(root: &Element, selector: &str) -> Vec<HtmlElement> {
    collect_matches(root.query_selector_all(selector).ok())
}

fn collect_matches(list: Option<web_sys::NodeList>) -> Vec<HtmlElement> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Nearest ancestor (or self) matching `selector`
pub fn closest(el: &Element, selector: &str) -> Option<HtmlElement> {
    el.closest(selector)
        .ok()
        .flatten()
        .and_then(|found| found.dyn_into::<HtmlElement>().ok())
}

/// Bind `handler` to `event` on `target` for the lifetime of the page
pub fn on<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let cb = Closure::<dyn FnMut(Event)>::new(handler);
    if let Err(err) = target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref()) {
        log::warn!("[ENHANCE] failed to bind {}: {:?}", event, err);
    }
    cb.forget();
}

/// Bind `handler` once on the document for `event`, and call it for every
/// event whose target sits inside an element matching `selector`.
/// Elements inserted after binding are covered too.
pub fn on_delegated<F>(selector: &'static str, event: &str, handler: F)
where
    F: Fn(HtmlElement, Event) + 'static,
{
    let Some(doc) = document() else {
        return;
    };
    on(&doc, event, move |ev: Event| {
        let matched = ev
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
            .and_then(|el| closest(&el, selector));
        if let Some(el) = matched {
            handler(el, ev);
        }
    });
}

/// Run `f` once the document has been parsed
pub fn on_ready<F>(f: F)
where
    F: FnOnce() + 'static,
{
    let Some(doc) = document() else {
        return;
    };
    if doc.ready_state() != "loading" {
        f();
        return;
    }
    let cb = Closure::<dyn FnMut()>::once(f);
    if let Err(err) = doc.add_event_listener_with_callback("DOMContentLoaded", cb.as_ref().unchecked_ref()) {
        log::warn!("[ENHANCE] failed to wait for DOMContentLoaded: {:?}", err);
    }
    cb.forget();
}

/// `data-*` attribute value, trimmed; empty values count as missing
pub fn data_attr(el: &Element, name: &str) -> Option<String> {
    el.get_attribute(&format!("data-{}", name))
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Show or hide an element the way jQuery's `.show()`/`.hide()` do
pub fn set_visible(el: &HtmlElement, visible: bool) {
    let style = el.style();
    if visible {
        let _ = style.remove_property("display");
        // Stylesheet hides it by default
        if computed_display(el).as_deref() == Some("none") {
            let _ = style.set_property("display", "block");
        }
    } else {
        let _ = style.set_property("display", "none");
    }
}

fn computed_display(el: &HtmlElement) -> Option<String> {
    window()?
        .get_computed_style(el)
        .ok()
        .flatten()?
        .get_property_value("display")
        .ok()
}

/// Keep an element's visibility in sync with a reactive predicate
pub fn bind_visible<F>(el: HtmlElement, when: F)
where
    F: Fn() -> bool + 'static,
{
    Effect::new(move |_| set_visible(&el, when()));
}

pub fn set_disabled(el: &Element, disabled: bool) {
    let _ = if disabled {
        el.set_attribute("disabled", "")
    } else {
        el.remove_attribute("disabled")
    };
}

/// Swap one class for another
pub fn swap_class(el: &Element, from: &str, to: &str) {
    let classes = el.class_list();
    let _ = classes.remove_1(from);
    let _ = classes.add_1(to);
}

/// Puts a control into a busy state and restores it when dropped.
///
/// The original markup and disabled flag are captured on creation, so every
/// exit path of a handler (success, failure, early return) puts the control
/// back the way it was.
pub struct BusyGuard {
    el: HtmlElement,
    original_html: String,
    was_disabled: bool,
    armed: bool,
}

impl BusyGuard {
    pub fn new(el: &HtmlElement, busy_html: &str) -> Self {
        let guard = Self {
            el: el.clone(),
            original_html: el.inner_html(),
            was_disabled: el.has_attribute("disabled"),
            armed: true,
        };
        el.set_inner_html(busy_html);
        set_disabled(el, true);
        guard
    }

    /// Re-enable the control with different markup than it started with
    pub fn restore_to(mut self, html: &str) {
        self.el.set_inner_html(html);
        set_disabled(&self.el, self.was_disabled);
        self.armed = false;
    }

    /// Leave the control busy, e.g. because the page is about to reload
    pub fn keep(mut self) {
        self.armed = false;
    }
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        if self.armed {
            self.el.set_inner_html(&self.original_html);
            set_disabled(&self.el, self.was_disabled);
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const BUSY: &str = "<i>spinning</i> Adding...";

    fn button(html: &str) -> HtmlElement {
        let el = document()
            .unwrap()
            .create_element("button")
            .unwrap()
            .dyn_into::<HtmlElement>()
            .unwrap();
        el.set_inner_html(html);
        el
    }

    #[wasm_bindgen_test]
    fn test_busy_guard_restores_on_drop() {
        let el = button("<b>Add to Cart</b>");
        let guard = BusyGuard::new(&el, BUSY);
        assert_eq!(el.inner_html(), BUSY);
        assert!(el.has_attribute("disabled"));

        drop(guard);
        assert_eq!(el.inner_html(), "<b>Add to Cart</b>");
        assert!(!el.has_attribute("disabled"));
    }

    #[wasm_bindgen_test]
    fn test_busy_guard_keeps_disabled_control_disabled() {
        let el = button("Add");
        set_disabled(&el, true);
        drop(BusyGuard::new(&el, BUSY));
        assert_eq!(el.inner_html(), "Add");
        assert!(el.has_attribute("disabled"));
    }

    #[wasm_bindgen_test]
    fn test_busy_guard_restore_to() {
        let el = button("Update");
        let guard = BusyGuard::new(&el, BUSY);
        guard.restore_to("<i>sync</i>");
        assert_eq!(el.inner_html(), "<i>sync</i>");
        assert!(!el.has_attribute("disabled"));
    }

    #[wasm_bindgen_test]
    fn test_busy_guard_keep() {
        let el = button("Update");
        BusyGuard::new(&el, BUSY).keep();
        assert_eq!(el.inner_html(), BUSY);
        assert!(el.has_attribute("disabled"));
    }

    #[wasm_bindgen_test]
    fn test_data_attr_trims_and_drops_empty() {
        let el = button("x");
        el.set_attribute("data-product-id", " 42 ").unwrap();
        el.set_attribute("data-stock", "  ").unwrap();
        assert_eq!(data_attr(&el, "product-id").as_deref(), Some("42"));
        assert_eq!(data_attr(&el, "stock"), None);
        assert_eq!(data_attr(&el, "missing"), None);
    }
}

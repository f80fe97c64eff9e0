//! Cosmetic Effects
//!
//! Image hover zoom, back-to-top button, smooth scroll and Bootstrap
//! tooltip/popover setup.

use leptos::prelude::*;
use leptos_enhance::{bind_visible, on, on_delegated, query_all, query_all_in, window};
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsValue;
use web_sys::{Element, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::context::StorefrontContext;
use crate::error::UiError;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    type Tooltip;

    #[wasm_bindgen(constructor, js_namespace = bootstrap, catch)]
    fn new(element: &Element) -> Result<Tooltip, JsValue>;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    type Popover;

    #[wasm_bindgen(constructor, js_namespace = bootstrap, catch)]
    fn new(element: &Element) -> Result<Popover, JsValue>;
}

pub fn bind(ctx: StorefrontContext) {
    bind_back_to_top(ctx);
    bind_scroll_to_top();
    init_bootstrap_widgets();
}

/// Scale product images up slightly while hovered
pub fn bind_image_zoom(root: &Element) {
    for image in query_all_in(root, ".product-image") {
        let target = image.clone();
        on(&image, "mouseenter", move |_| set_transform(&target, "scale(1.05)"));
        let target = image.clone();
        on(&image, "mouseleave", move |_| set_transform(&target, "scale(1)"));
    }
}

fn set_transform(el: &HtmlElement, value: &str) {
    let _ = el.style().set_property("transform", value);
}

fn bind_back_to_top(ctx: StorefrontContext) {
    let buttons = query_all(".back-to-top");
    let Some(win) = window() else {
        return;
    };
    if buttons.is_empty() {
        return;
    }

    let offset = ctx.with_config(|c| c.back_to_top_offset);
    // Restored scroll positions count from the start
    let scrolled_past = RwSignal::new(is_scrolled_past(&win, offset));
    for button in buttons {
        bind_visible(button, move || scrolled_past.get());
    }

    let scroller = win.clone();
    on(&win, "scroll", move |_| {
        let past = is_scrolled_past(&scroller, offset);
        if scrolled_past.get_untracked() != past {
            scrolled_past.set(past);
        }
    });
}

fn is_scrolled_past(win: &Window, offset: f64) -> bool {
    win.scroll_y().unwrap_or(0.0) > offset
}

fn bind_scroll_to_top() {
    on_delegated(".scroll-to-top", "click", |_link, ev| {
        ev.prevent_default();
        if let Some(win) = window() {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            win.scroll_to_with_scroll_to_options(&options);
        }
    });
}

fn bootstrap_loaded() -> bool {
    js_sys::Reflect::has(&js_sys::global(), &JsValue::from_str("bootstrap")).unwrap_or(false)
}

fn init_bootstrap_widgets() {
    let tooltips = query_all(r#"[data-bs-toggle="tooltip"]"#);
    let popovers = query_all(r#"[data-bs-toggle="popover"]"#);
    if tooltips.is_empty() && popovers.is_empty() {
        return;
    }
    if !bootstrap_loaded() {
        log::warn!(
            "[EFFECTS] Bootstrap not loaded, skipping {} tooltips and {} popovers",
            tooltips.len(),
            popovers.len()
        );
        return;
    }

    for el in &tooltips {
        if let Err(err) = Tooltip::new(el) {
            log::warn!("[EFFECTS] Tooltip init failed: {}", UiError::from_js(err));
        }
    }
    for el in &popovers {
        if let Err(err) = Popover::new(el) {
            log::warn!("[EFFECTS] Popover init failed: {}", UiError::from_js(err));
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_scroll_position_read_at_bind_time() {
        let win = window().unwrap();
        win.scroll_to_with_x_and_y(0.0, 0.0);
        assert!(!is_scrolled_past(&win, 300.0));
        // A negative offset is passed even at the top
        assert!(is_scrolled_past(&win, -1.0));
    }
}

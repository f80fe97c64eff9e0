//! Checkout Enhancers
//!
//! Shipping estimate, PIN code check and payment method panels.

use leptos_enhance::{data_attr, on_delegated, query, query_all, set_visible};
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use crate::context::StorefrontContext;
use crate::models::Severity;
use crate::pricing::parse_amount;
use crate::validation::is_valid_pincode;

pub fn bind(ctx: StorefrontContext) {
    show_shipping(ctx);
    bind_pincode_check(ctx);
    bind_payment_panels();
}

/// Fill in shipping, total and the free-shipping nudge from `#subtotal`.
/// Runs once; quantity changes reload the page anyway.
fn show_shipping(ctx: StorefrontContext) {
    let subtotal = parse_amount(query("#subtotal").and_then(|el| data_attr(&el, "amount")).as_deref());
    let (quote, symbol) = ctx.with_config(|c| (c.shipping_policy().quote(subtotal), c.currency_symbol.clone()));

    if let Some(el) = query("#shipping-cost") {
        el.set_text_content(Some(&quote.shipping_label(&symbol)));
    }
    if let Some(el) = query("#total-amount") {
        el.set_text_content(Some(&quote.total_label(&symbol)));
    }
    if let Some(el) = query("#free-shipping-message") {
        match quote.nudge_html(&symbol) {
            Some(html) => {
                el.set_inner_html(&html);
                set_visible(&el, true);
            }
            None => set_visible(&el, false),
        }
    }
}

fn bind_pincode_check(ctx: StorefrontContext) {
    on_delegated("#checkout-form", "submit", move |_form, ev| {
        let Some(input) = query("#pincode").and_then(|el| el.dyn_into::<HtmlInputElement>().ok()) else {
            return;
        };
        if is_valid_pincode(&input.value()) {
            return;
        }
        ev.prevent_default();
        ctx.flash("Please enter a valid 6-digit PIN code", Severity::Error);
        let _ = input.focus();
    });
}

/// Show only the info panel of the selected payment method
fn bind_payment_panels() {
    on_delegated("#payment_method", "change", |select, _ev| {
        let Some(method) = super::control_value(&select) else {
            return;
        };
        for panel in query_all(".payment-method-info") {
            set_visible(&panel, false);
        }
        if let Some(selector) = payment_panel_selector(&method) {
            for panel in query_all(&selector) {
                set_visible(&panel, true);
            }
        }
    });
}

/// Selector for a method's panel; values that would break out of a class
/// name yield `None`
pub fn payment_panel_selector(method: &str) -> Option<String> {
    let method = method.trim();
    let safe = !method.is_empty()
        && method
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    safe.then(|| format!(".payment-info-{}", method))
}

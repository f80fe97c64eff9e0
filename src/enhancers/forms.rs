//! Form Enhancers
//!
//! Number input clamping and newsletter signup.

use leptos::task::spawn_local;
use leptos_enhance::{on_delegated, query};
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use crate::api;
use crate::context::StorefrontContext;
use crate::models::Severity;
use crate::requests::RequestKey;
use crate::validation::QuantityBounds;

pub fn bind(ctx: StorefrontContext) {
    bind_number_clamp(ctx);
    bind_newsletter(ctx);
}

/// Pull number inputs back inside their min/max while typing
fn bind_number_clamp(ctx: StorefrontContext) {
    let fallback = ctx.with_config(|c| c.quantity_bounds());
    on_delegated(r#"input[type="number"]"#, "input", move |el, _ev| {
        let Ok(input) = el.dyn_into::<HtmlInputElement>() else {
            return;
        };
        let bounds = QuantityBounds::from_attrs(
            input.get_attribute("min").as_deref(),
            input.get_attribute("max").as_deref(),
            fallback,
        );
        if let Some(corrected) = bounds.correction(&input.value()) {
            input.set_value(&corrected.to_string());
        }
    });
}

fn bind_newsletter(ctx: StorefrontContext) {
    on_delegated("#newsletter-form", "submit", move |_form, ev| {
        ev.prevent_default();
        let Some(input) = query("#newsletter-email").and_then(|el| el.dyn_into::<HtmlInputElement>().ok()) else {
            log::warn!("[NEWSLETTER] Form has no #newsletter-email input");
            return;
        };
        let email = input.value();

        let key = RequestKey::Newsletter;
        let Some(ticket) = ctx.begin_request(key.clone(), None) else {
            log::debug!("[NEWSLETTER] Subscription already in flight");
            return;
        };

        spawn_local(async move {
            let result = api::subscribe_newsletter(&email).await;
            ctx.finish_request(&key, ticket);
            match result {
                Ok(()) => {
                    ctx.flash("Thank you for subscribing!", Severity::Success);
                    input.set_value("");
                }
                Err(err) => {
                    log::warn!("[NEWSLETTER] Subscription failed: {}", err);
                    ctx.flash("Subscription failed. Please try again.", Severity::Error);
                }
            }
        });
    });
}

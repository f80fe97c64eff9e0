//! Cart Enhancers
//!
//! Navbar badge, quantity auto-submit, add-to-cart and remove-from-cart.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_enhance::{closest, data_attr, on_delegated, query_all, query_all_in, set_visible, BusyGuard};
use wasm_bindgen::JsCast;
use web_sys::{AbortController, HtmlElement, HtmlFormElement};

use super::SPINNER_ICON;
use crate::api;
use crate::context::StorefrontContext;
use crate::models::{CartCount, ProductId, Severity};
use crate::requests::RequestKey;
use crate::store::UiStateStoreFields;

const BADGE: &str = ".navbar .badge";
const ADDING_HTML: &str = r#"<i class="fas fa-spinner fa-spin"></i> Adding..."#;
const SYNC_ICON: &str = r#"<i class="fas fa-sync-alt"></i>"#;
const REMOVE_PROMPT: &str = "Are you sure you want to remove this item from your cart?";

pub fn bind(ctx: StorefrontContext) {
    bind_badge(ctx);
    refresh_cart_count(ctx);
    bind_quantity_autosubmit();
    bind_add_to_cart(ctx);
    bind_remove_from_cart();
}

/// Mirror the cart count signal into every navbar badge
fn bind_badge(ctx: StorefrontContext) {
    let badges = query_all(BADGE);
    if badges.is_empty() {
        return;
    }
    let store = ctx.store;
    Effect::new(move |_| {
        // Nothing reported yet: keep what the server rendered
        let Some(count) = store.cart_count().get() else {
            return;
        };
        write_badges(&badges, count);
    });
}

fn write_badges(badges: &[HtmlElement], count: CartCount) {
    let text = count.badge_text();
    for badge in badges {
        match &text {
            Some(text) => {
                badge.set_text_content(Some(text));
                set_visible(badge, true);
            }
            None => set_visible(badge, false),
        }
    }
}

/// Ask the server for the cart count. Skipped on the cart page itself;
/// failures leave the badge as it was.
pub fn refresh_cart_count(ctx: StorefrontContext) {
    if ctx.with_config(|c| c.is_cart_page(&super::current_path())) {
        return;
    }

    let controller = AbortController::new().ok();
    let signal = controller.as_ref().map(AbortController::signal);
    let key = RequestKey::CartCount;
    let Some(ticket) = ctx.begin_request(key.clone(), controller) else {
        return;
    };

    spawn_local(async move {
        let result = api::fetch_cart_count(signal.as_ref()).await;
        if !ctx.finish_request(&key, ticket) {
            return;
        }
        match result {
            Ok(count) => ctx.set_cart_count(count),
            Err(err) => log::warn!("[CART] Failed to fetch cart count: {}", err),
        }
    });
}

/// Submit the enclosing form when a quantity changes, then reload
fn bind_quantity_autosubmit() {
    on_delegated(r#"input[name="quantity"]"#, "change", |input, _ev| {
        let Some(form) = closest(&input, "form").and_then(|f| f.dyn_into::<HtmlFormElement>().ok()) else {
            log::debug!("[CART] Quantity input outside a form");
            return;
        };
        let busy = query_all_in(&form, r#"button[type="submit"]"#)
            .into_iter()
            .next()
            .map(|button| BusyGuard::new(&button, SPINNER_ICON));

        spawn_local(async move {
            match api::submit_form(&form).await {
                Ok(()) => {
                    if let Some(busy) = busy {
                        busy.keep();
                    }
                    super::reload();
                }
                Err(err) => {
                    log::warn!("[CART] Quantity update failed: {}", err);
                    super::alert("Error updating cart. Please try again.");
                    if let Some(busy) = busy {
                        busy.restore_to(SYNC_ICON);
                    }
                }
            }
        });
    });
}

fn bind_add_to_cart(ctx: StorefrontContext) {
    on_delegated(".add-to-cart-btn", "click", move |button, ev| {
        ev.prevent_default();
        let Some(product_id) = data_attr(&button, "product-id").map(ProductId::new) else {
            log::warn!("[CART] Add-to-cart button without data-product-id");
            return;
        };

        let key = RequestKey::AddToCart(product_id.clone());
        let Some(ticket) = ctx.begin_request(key.clone(), None) else {
            log::debug!("[CART] Product {} is already being added", product_id);
            return;
        };
        let busy = BusyGuard::new(&button, ADDING_HTML);

        spawn_local(async move {
            let result = api::add_to_cart(&product_id).await;
            ctx.finish_request(&key, ticket);
            drop(busy);

            match result {
                Ok(()) => {
                    ctx.flash("Product added to cart!", Severity::Success);
                    refresh_cart_count(ctx);
                }
                Err(err) => {
                    log::warn!("[CART] Adding product {} failed: {}", product_id, err);
                    ctx.flash("Error adding product to cart", Severity::Error);
                }
            }
        });
    });
}

/// Confirm, then follow the removal link
fn bind_remove_from_cart() {
    on_delegated(".remove-from-cart", "click", |link, ev| {
        ev.prevent_default();
        let Some(href) = link.get_attribute("href") else {
            return;
        };
        if super::confirm(REMOVE_PROMPT) {
            super::navigate(&href);
        }
    });
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use leptos_enhance::document;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn badge(text: &str) -> HtmlElement {
        let el = document()
            .unwrap()
            .create_element("span")
            .unwrap()
            .dyn_into::<HtmlElement>()
            .unwrap();
        el.set_text_content(Some(text));
        el
    }

    #[wasm_bindgen_test]
    fn test_every_badge_shows_count() {
        let badges = [badge("0"), badge("0")];
        write_badges(&badges, CartCount { count: 3 });
        for badge in &badges {
            assert_eq!(badge.text_content().as_deref(), Some("3"));
            assert_ne!(badge.style().get_property_value("display").unwrap(), "none");
        }
    }

    #[wasm_bindgen_test]
    fn test_empty_cart_hides_every_badge() {
        let badges = [badge("2"), badge("2")];
        write_badges(&badges, CartCount { count: 0 });
        for badge in &badges {
            assert_eq!(badge.style().get_property_value("display").unwrap(), "none");
        }
    }
}

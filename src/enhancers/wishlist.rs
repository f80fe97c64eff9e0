//! Wishlist Toggle
//!
//! Purely visual: the heart flips and a flash confirms, nothing is saved.

use leptos_enhance::{data_attr, on_delegated};

use crate::context::StorefrontContext;
use crate::models::Severity;

const ACTIVE_HTML: &str = r#"<i class="fas fa-heart text-danger"></i>"#;
const INACTIVE_HTML: &str = r#"<i class="far fa-heart"></i>"#;

pub fn bind(ctx: StorefrontContext) {
    on_delegated(".wishlist-btn", "click", move |button, ev| {
        ev.prevent_default();
        let active = button.class_list().toggle("active").unwrap_or(false);
        log::debug!(
            "[WISHLIST] Product {} active={}",
            data_attr(&button, "product-id").unwrap_or_default(),
            active
        );

        if active {
            button.set_inner_html(ACTIVE_HTML);
            ctx.flash("Added to wishlist!", Severity::Success);
        } else {
            button.set_inner_html(INACTIVE_HTML);
            ctx.flash("Removed from wishlist", Severity::Info);
        }
    });
}

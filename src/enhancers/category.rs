//! Category Filter
//!
//! Swaps the product grid for the selected category without a page load.

use leptos::task::spawn_local;
use leptos_enhance::{data_attr, on_delegated, query, query_all};
use web_sys::{AbortController, HtmlElement};

use crate::api;
use crate::context::StorefrontContext;
use crate::models::CategoryId;
use crate::requests::RequestKey;

const FILTER: &str = ".category-filter";
const PRODUCTS_CONTAINER: &str = "#products-container";
const LOADING_HTML: &str = r#"<div class="text-center py-5"><i class="fas fa-spinner fa-spin fa-2x"></i><p>Loading products...</p></div>"#;

pub fn bind(ctx: StorefrontContext) {
    on_delegated(FILTER, "click", move |control, ev| {
        ev.prevent_default();
        let Some(category) = data_attr(&control, "category-id").map(CategoryId::new) else {
            log::warn!("[CATEGORY] Filter without data-category-id");
            return;
        };

        mark_active(&control);
        let Some(container) = query(PRODUCTS_CONTAINER) else {
            log::debug!("[CATEGORY] No {} on this page", PRODUCTS_CONTAINER);
            return;
        };
        container.set_inner_html(LOADING_HTML);
        load_category(ctx, category, container);
    });
}

/// Exactly one filter carries `active`
fn mark_active(control: &HtmlElement) {
    for other in query_all(FILTER) {
        let _ = other.class_list().remove_1("active");
    }
    let _ = control.class_list().add_1("active");
}

fn load_category(ctx: StorefrontContext, category: CategoryId, container: HtmlElement) {
    let controller = AbortController::new().ok();
    let signal = controller.as_ref().map(AbortController::signal);
    let key = RequestKey::Category;
    let Some(ticket) = ctx.begin_request(key.clone(), controller) else {
        return;
    };

    spawn_local(async move {
        let result = api::fetch_category_page(&category, signal.as_ref())
            .await
            .and_then(|html| api::extract_fragment(&html, PRODUCTS_CONTAINER));

        // A newer click owns the container now
        if !ctx.finish_request(&key, ticket) {
            log::debug!("[CATEGORY] Dropping superseded response for category {}", category);
            return;
        }

        match result {
            Ok(fragment) => {
                container.set_inner_html(&fragment);
                super::enhance_fragment(ctx, &container);
                log::debug!("[CATEGORY] Loaded category {}", category);
            }
            Err(err) => log::warn!("[CATEGORY] Failed to load category {}: {}", category, err),
        }
    });
}

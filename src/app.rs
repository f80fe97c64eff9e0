//! Storefront App
//!
//! Mounts the reactive root at the top of the page container and binds
//! every enhancer to the server-rendered markup.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::components::FlashStack;
use crate::config::StorefrontConfig;
use crate::context::StorefrontContext;
use crate::enhancers;

/// Where flash messages are prepended
const FLASH_PARENT: &str = ".container";

#[component]
pub fn App(config: StorefrontConfig) -> impl IntoView {
    let ctx = StorefrontContext::new(config);
    provide_context(ctx);

    enhancers::bind_all(ctx);

    view! { <FlashStack /> }
}

/// Mount the app once the document is parsed
pub fn start(config: StorefrontConfig) {
    let Some(host) = create_flash_host() else {
        log::error!("[APP] No document body; storefront enhancements disabled");
        return;
    };
    leptos::mount::mount_to(host, move || view! { <App config=config /> }).forget();
}

/// Insert an empty element as the first child of the page container
/// (or the body, on pages without one) and return it
fn create_flash_host() -> Option<HtmlElement> {
    let doc = leptos_enhance::document()?;
    let host = doc
        .create_element("div")
        .ok()?
        .dyn_into::<HtmlElement>()
        .ok()?;
    host.set_class_name("flash-host");

    let parent = match leptos_enhance::query(FLASH_PARENT) {
        Some(container) => container,
        None => {
            log::debug!("[APP] No {} on this page, flashes go to <body>", FLASH_PARENT);
            doc.body()?
        }
    };
    parent.prepend_with_node_1(&host).ok()?;
    Some(host)
}

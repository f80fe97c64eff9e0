//! Flash Stack Component
//!
//! Renders the flash queue as dismissible Bootstrap alerts.

use leptos::prelude::*;

use crate::context::use_storefront;
use crate::store::UiStateStoreFields;

#[component]
pub fn FlashStack() -> impl IntoView {
    let ctx = use_storefront();
    let store = ctx.store;

    view! {
        <div class="flash-stack">
            <For
                each=move || store.flashes().with(|queue| queue.entries().to_vec())
                key=|flash| flash.id
                children=move |flash| {
                    let id = flash.id;
                    let class = format!(
                        "alert {} alert-dismissible fade show flash-message-auto",
                        flash.severity.alert_class()
                    );
                    view! {
                        <div class=class role="alert">
                            {flash.message}
                            <button
                                type="button"
                                class="btn-close"
                                aria-label="Close"
                                on:click=move |_| ctx.dismiss_flash(id)
                            ></button>
                        </div>
                    }
                }
            />
        </div>
    }
}

//! Stock Badges
//!
//! Relabels `.stock-badge` elements and blocks purchase when sold out.

use leptos_enhance::{closest, data_attr, query_all_in, set_disabled, swap_class};
use web_sys::Element;

use crate::context::StorefrontContext;
use crate::stock::StockStatus;

const OUT_OF_STOCK: &str = "Out of Stock";

pub fn apply(ctx: StorefrontContext, root: &Element) {
    relabel(root, ctx.with_config(|c| c.low_stock_threshold));
}

fn relabel(root: &Element, low_threshold: i64) {
    for badge in query_all_in(root, ".stock-badge") {
        let Some(status) = StockStatus::from_attr(data_attr(&badge, "stock").as_deref(), low_threshold) else {
            continue;
        };
        let (Some(label), Some(class)) = (status.label(), status.badge_class()) else {
            continue;
        };
        swap_class(&badge, "bg-success", class);
        badge.set_text_content(Some(label));

        if status.blocks_purchase() {
            let Some(card) = closest(&badge, ".card") else {
                continue;
            };
            for button in query_all_in(&card, ".add-to-cart-btn") {
                set_disabled(&button, true);
                button.set_text_content(Some(OUT_OF_STOCK));
            }
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use leptos_enhance::document;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn card(stock: &str) -> Element {
        let root = document().unwrap().create_element("div").unwrap();
        root.set_inner_html(&format!(
            r#"<div class="card">
                <span class="stock-badge badge bg-success" data-stock="{}">In Stock</span>
                <button class="add-to-cart-btn" data-product-id="7">Add to Cart</button>
            </div>"#,
            stock
        ));
        root
    }

    fn badge(root: &Element) -> Element {
        root.query_selector(".stock-badge").unwrap().unwrap()
    }

    fn button(root: &Element) -> Element {
        root.query_selector(".add-to-cart-btn").unwrap().unwrap()
    }

    #[wasm_bindgen_test]
    fn test_sold_out_disables_add_to_cart() {
        let root = card("0");
        relabel(&root, 5);

        let badge = badge(&root);
        assert_eq!(badge.text_content().as_deref(), Some("Out of Stock"));
        assert!(badge.class_list().contains("bg-danger"));
        assert!(!badge.class_list().contains("bg-success"));

        let button = button(&root);
        assert!(button.has_attribute("disabled"));
        assert_eq!(button.text_content().as_deref(), Some("Out of Stock"));
    }

    #[wasm_bindgen_test]
    fn test_low_stock_keeps_button() {
        let root = card("3");
        relabel(&root, 5);

        let badge = badge(&root);
        assert_eq!(badge.text_content().as_deref(), Some("Low Stock"));
        assert!(badge.class_list().contains("bg-warning"));
        assert!(!button(&root).has_attribute("disabled"));
    }

    #[wasm_bindgen_test]
    fn test_plenty_and_unreadable_untouched() {
        for stock in ["10", "lots"] {
            let root = card(stock);
            relabel(&root, 5);

            let badge = badge(&root);
            assert_eq!(badge.text_content().as_deref(), Some("In Stock"));
            assert!(badge.class_list().contains("bg-success"));
            let button = button(&root);
            assert!(!button.has_attribute("disabled"));
            assert_eq!(button.text_content().as_deref(), Some("Add to Cart"));
        }
    }
}

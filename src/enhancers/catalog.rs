//! Catalog Enhancers
//!
//! Live search logging, client-side price filter, quick view and order
//! tracking hooks.

use leptos_enhance::{data_attr, on_delegated, query_all, set_visible};

use crate::context::StorefrontContext;
use crate::timing::Debouncer;
use crate::validation::PriceRange;

pub fn bind(ctx: StorefrontContext) {
    bind_live_search(ctx);
    bind_price_filter();
    bind_quick_view();
    bind_order_tracking();
}

/// Results are server-rendered; the hook only logs settled queries
fn bind_live_search(ctx: StorefrontContext) {
    let (delay_ms, min_chars) = ctx.with_config(|c| (c.search_debounce_ms, c.search_min_chars));
    let debouncer = Debouncer::new(delay_ms);

    on_delegated("#searchInput", "input", move |input, _ev| {
        let Some(value) = super::control_value(&input) else {
            return;
        };
        debouncer.call(move || {
            if let Some(query) = settled_query(&value, min_chars) {
                log::info!("[SEARCH] Search query: {}", query);
            }
        });
    });
}

pub fn settled_query(raw: &str, min_chars: usize) -> Option<&str> {
    let query = raw.trim();
    (query.chars().count() >= min_chars).then_some(query)
}

/// Hide rendered product cards outside the selected price range
fn bind_price_filter() {
    on_delegated(".price-filter", "change", |control, _ev| {
        let range = super::control_value(&control)
            .as_deref()
            .and_then(PriceRange::parse);

        let cards = query_all(".product-card");
        let mut shown = 0;
        for card in &cards {
            let visible = card_visible(range, data_attr(card, "price").as_deref());
            set_visible(card, visible);
            shown += usize::from(visible);
        }
        log::debug!("[CATALOG] Price filter {:?}: {}/{} products shown", range, shown, cards.len());
    });
}

/// Cards without a readable price are never hidden
pub fn card_visible(range: Option<PriceRange>, price: Option<&str>) -> bool {
    match (range, price.and_then(|p| p.trim().parse::<f64>().ok())) {
        (Some(range), Some(price)) => range.contains(price),
        _ => true,
    }
}

fn bind_quick_view() {
    on_delegated(".quick-view-btn", "click", |button, _ev| {
        log::info!(
            "[CATALOG] Quick view product: {}",
            data_attr(&button, "product-id").unwrap_or_default()
        );
    });
}

fn bind_order_tracking() {
    on_delegated(".track-order", "click", |button, _ev| {
        let order_id = data_attr(&button, "order-id").unwrap_or_default();
        super::alert(&format!("Tracking order #{}", order_id));
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settled_query() {
        assert_eq!(settled_query("sa", 3), None);
        assert_eq!(settled_query("  sa  ", 3), None);
        assert_eq!(settled_query("sar", 3), Some("sar"));
        assert_eq!(settled_query(" silk saree ", 3), Some("silk saree"));
        // Counted in characters, not bytes
        assert_eq!(settled_query("चाय", 3), Some("चाय"));
    }

    #[test]
    fn test_card_visible() {
        let range = PriceRange::parse("500-1000");
        assert!(card_visible(range, Some("799")));
        assert!(!card_visible(range, Some("1299.00")));
        assert!(card_visible(range, None));
        assert!(card_visible(range, Some("n/a")));
        assert!(card_visible(None, Some("18999")));
    }
}

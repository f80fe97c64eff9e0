//! Cart Endpoints

use gloo_net::http::Request;
use web_sys::AbortSignal;

use super::{encode_segment, send};
use crate::error::UiResult;
use crate::models::{CartCount, ProductId};

pub async fn fetch_cart_count(signal: Option<&AbortSignal>) -> UiResult<CartCount> {
    let response = send(Request::get("/api/cart_count").abort_signal(signal)).await?;
    let body = response.text().await?;
    CartCount::from_json(&body)
}

/// Add one unit of a product; the response body is not interpreted
pub async fn add_to_cart(product_id: &ProductId) -> UiResult<()> {
    let url = format!("/add_to_cart/{}", encode_segment(product_id.as_str()));
    send(Request::get(&url)).await?;
    Ok(())
}

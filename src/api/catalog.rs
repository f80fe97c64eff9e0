//! Catalog Endpoints

use gloo_net::http::Request;
use web_sys::{AbortSignal, DomParser, SupportedType};

use super::{encode_segment, send};
use crate::error::{UiError, UiResult};
use crate::models::CategoryId;

/// Fetch the full category page as HTML
pub async fn fetch_category_page(category_id: &CategoryId, signal: Option<&AbortSignal>) -> UiResult<String> {
    let url = format!("/category/{}", encode_segment(category_id.as_str()));
    let response = send(Request::get(&url).abort_signal(signal)).await?;
    Ok(response.text().await?)
}

/// Inner HTML of the element matching `selector` in an HTML document
pub fn extract_fragment(html: &str, selector: &str) -> UiResult<String> {
    let parser = DomParser::new().map_err(UiError::from_js)?;
    let doc = parser
        .parse_from_string(html, SupportedType::TextHtml)
        .map_err(UiError::from_js)?;
    doc.query_selector(selector)
        .map_err(UiError::from_js)?
        .map(|el| el.inner_html())
        .ok_or_else(|| UiError::MissingElement(selector.to_string()))
}

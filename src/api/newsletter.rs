//! Newsletter Endpoint

use gloo_net::http::Request;

use super::{encode_form, ensure_ok, FORM_CONTENT_TYPE};
use crate::error::UiResult;

pub async fn subscribe_newsletter(email: &str) -> UiResult<()> {
    let request = Request::post("/newsletter/subscribe")
        .header("Content-Type", FORM_CONTENT_TYPE)
        .body(encode_form(&[("email", email)]))?;
    ensure_ok(request.send().await?)?;
    Ok(())
}

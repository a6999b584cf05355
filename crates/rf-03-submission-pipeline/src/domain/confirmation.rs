//! Payment confirmation link.

use crate::domain::errors::PipelineError;
use reqwest::Url;
use rf_02_local_ledger::OrderRecord;

/// Page the storefront redirects to after checkout.
pub const CONFIRMATION_PAGE: &str = "payment-success.html";

/// Build `<base>/payment-success.html?order=&name=&email=&method=&amount=`
/// for a stored order. Query values are form-encoded.
pub fn confirmation_url(base: &str, order: &OrderRecord) -> Result<Url, PipelineError> {
    let mut url = Url::parse(base)
        .and_then(|base| base.join(CONFIRMATION_PAGE))
        .map_err(|e| PipelineError::Confirmation(format!("{base}: {e}")))?;

    url.query_pairs_mut()
        .append_pair("order", &order.order_id)
        .append_pair("name", &order.customer_name)
        .append_pair("email", &order.customer_email)
        .append_pair("method", order.payment_method.id())
        .append_pair("amount", &order.book_price);

    Ok(url)
}

use crate::shared::api_utils::api_url;
use contracts::usecases::common::FormKind;
use contracts::usecases::u102_quote_request::QuoteRequest;

/// Record an accepted quote request.
pub fn submit(request: &QuoteRequest) {
    let payload = serde_json::to_string(request).unwrap_or_default();
    log::info!("Quote form submitted: {}", payload);
    // TODO: POST the payload here once the quote endpoint is deployed
    log::debug!("not sent to {}", api_url(FormKind::Quote.endpoint()));
}

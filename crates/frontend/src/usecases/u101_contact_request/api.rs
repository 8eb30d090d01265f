use crate::shared::api_utils::api_url;
use contracts::usecases::common::FormKind;
use contracts::usecases::u101_contact_request::ContactRequest;

/// Record an accepted contact request.
pub fn submit(request: &ContactRequest) {
    let payload = serde_json::to_string(request).unwrap_or_default();
    log::info!("Contact form submitted: {}", payload);
    // TODO: POST the payload here once the contact endpoint is deployed
    log::debug!("not sent to {}", api_url(FormKind::Contact.endpoint()));
}

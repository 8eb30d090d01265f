use serde::Serialize;
use std::fmt;

/// The two submission entry points the site exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormKind {
    Contact,
    Quote,
}

impl FormKind {
    /// Backend route the payload is meant for once a server exists.
    pub fn endpoint(&self) -> &'static str {
        match self {
            FormKind::Contact => "/api/contact",
            FormKind::Quote => "/api/quote",
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            FormKind::Contact => {
                "Thank you for contacting Mobin Engineers. We'll get back to you within 24 hours."
            }
            FormKind::Quote => {
                "Your quote request has been submitted successfully. We'll prepare a detailed quote and contact you within 24 hours."
            }
        }
    }

    /// Id of the `<form>` element.
    pub fn form_id(&self) -> &'static str {
        match self {
            FormKind::Contact => "contact-form",
            FormKind::Quote => "quote-form",
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormKind::Contact => f.write_str("Contact"),
            FormKind::Quote => f.write_str("Quote"),
        }
    }
}

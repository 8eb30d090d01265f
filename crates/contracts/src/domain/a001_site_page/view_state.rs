use super::page::PageId;
use crate::domain::a002_spare_part::QuoteTarget;
use crate::shared::error::RouteError;
use crate::usecases::common::FormKind;

/// Confirmation banner contents and the form that raised it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub origin: FormKind,
    pub message: String,
}

/// Everything the page keeps between events.
///
/// Operations take the current state and return the next one; the browser
/// layer holds the single live copy and re-renders from it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    pub current_page: PageId,
    pub mobile_menu_open: bool,
    pub quote: Option<QuoteTarget>,
    pub confirmation: Option<Confirmation>,
}

impl ViewState {
    /// Activate the section named `key`. Unknown keys leave `self` as it was
    /// and report the miss.
    pub fn show_page(&self, key: &str) -> Result<Self, RouteError> {
        let page = key.parse::<PageId>()?;
        Ok(self.with_page(page))
    }

    pub fn with_page(&self, page: PageId) -> Self {
        Self {
            current_page: page,
            ..self.clone()
        }
    }

    pub fn is_active(&self, page: PageId) -> bool {
        self.current_page == page
    }

    pub fn toggle_mobile_menu(&self) -> Self {
        Self {
            mobile_menu_open: !self.mobile_menu_open,
            ..self.clone()
        }
    }

    pub fn close_mobile_menu(&self) -> Self {
        Self {
            mobile_menu_open: false,
            ..self.clone()
        }
    }

    pub fn open_quote(&self, target: QuoteTarget) -> Self {
        Self {
            quote: Some(target),
            ..self.clone()
        }
    }

    pub fn close_quote(&self) -> Self {
        Self {
            quote: None,
            ..self.clone()
        }
    }

    pub fn show_confirmation(&self, origin: FormKind, message: impl Into<String>) -> Self {
        Self {
            confirmation: Some(Confirmation {
                origin,
                message: message.into(),
            }),
            ..self.clone()
        }
    }

    pub fn close_confirmation(&self) -> Self {
        Self {
            confirmation: None,
            ..self.clone()
        }
    }

    pub fn is_quote_open(&self) -> bool {
        self.quote.is_some()
    }

    pub fn is_confirmation_open(&self) -> bool {
        self.confirmation.is_some()
    }

    /// Whether the banner currently on screen was raised by `kind`.
    pub fn is_confirming(&self, kind: FormKind) -> bool {
        self.confirmation
            .as_ref()
            .is_some_and(|c| c.origin == kind)
    }

    /// Escape closes the quote modal, the banner and the mobile menu, each
    /// independently.
    pub fn escape(&self) -> Self {
        let mut next = self.clone();
        if next.is_quote_open() {
            next = next.close_quote();
        }
        if next.is_confirmation_open() {
            next = next.close_confirmation();
        }
        if next.mobile_menu_open {
            next = next.close_mobile_menu();
        }
        next
    }

    /// Page scrolling stays locked while any overlay or the mobile menu is open.
    pub fn scroll_locked(&self) -> bool {
        self.mobile_menu_open || self.is_quote_open() || self.is_confirmation_open()
    }

    pub fn title(&self) -> &'static str {
        self.current_page.title()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target() -> QuoteTarget {
        QuoteTarget {
            product_id: "ring".into(),
            product_name: "Ring".into(),
        }
    }

    #[test]
    fn test_defaults() {
        let state = ViewState::default();
        assert_eq!(state.current_page, PageId::Home);
        assert!(!state.mobile_menu_open);
        assert!(!state.scroll_locked());
        assert_eq!(
            state.title(),
            "Mobin Engineers - Precision Injection Molding Spare Parts"
        );
    }

    #[test]
    fn test_show_known_page() {
        let state = ViewState::default().show_page("spares").unwrap();
        assert!(state.is_active(PageId::Spares));
        assert!(!state.is_active(PageId::Home));
        assert_eq!(state.title(), "Spare Parts - Mobin Engineers");
    }

    #[test]
    fn test_unknown_page_keeps_previous_page() {
        let state = ViewState::default().with_page(PageId::About);
        let result = state.show_page("gallery");

        assert_eq!(result, Err(RouteError::UnknownPage("gallery".into())));
        assert!(state.is_active(PageId::About));
    }

    #[test]
    fn test_reshowing_active_page_is_harmless() {
        let state = ViewState::default().with_page(PageId::Contact);
        assert_eq!(state.show_page("contact").unwrap(), state);
    }

    #[test]
    fn test_double_toggle_restores_closed_menu() {
        let open = ViewState::default().toggle_mobile_menu();
        assert!(open.mobile_menu_open);
        assert!(open.scroll_locked());

        let closed = open.toggle_mobile_menu();
        assert!(!closed.mobile_menu_open);
        assert!(!closed.scroll_locked());
    }

    #[test]
    fn test_escape_closes_everything_at_once() {
        let state = ViewState::default()
            .toggle_mobile_menu()
            .open_quote(target())
            .show_confirmation(FormKind::Quote, "done");

        let after = state.escape();
        assert!(!after.is_quote_open());
        assert!(!after.is_confirmation_open());
        assert!(!after.mobile_menu_open);
        assert!(!after.scroll_locked());
    }

    #[test]
    fn test_escape_with_nothing_open_is_a_no_op() {
        let state = ViewState::default().with_page(PageId::Spares);
        assert_eq!(state.escape(), state);
    }

    #[test]
    fn test_scroll_lock_held_until_last_overlay_closes() {
        let state = ViewState::default()
            .open_quote(target())
            .show_confirmation(FormKind::Contact, "thanks");

        let state = state.close_quote();
        assert!(state.scroll_locked());

        let state = state.close_confirmation();
        assert!(!state.scroll_locked());
    }

    #[test]
    fn test_banner_after_closed_modal_keeps_page() {
        let state = ViewState::default()
            .with_page(PageId::Spares)
            .open_quote(target())
            .close_quote()
            .show_confirmation(FormKind::Quote, FormKind::Quote.success_message());

        assert!(!state.is_quote_open());
        assert!(state.is_confirming(FormKind::Quote));
        assert!(state.scroll_locked());
        assert!(state.is_active(PageId::Spares));

        // closing twice is the same as closing once
        let closed = state.close_confirmation();
        assert_eq!(closed.close_confirmation(), closed);
    }

    #[test]
    fn test_confirmation_origin() {
        let state = ViewState::default().show_confirmation(FormKind::Contact, "thanks");
        assert!(state.is_confirming(FormKind::Contact));
        assert!(!state.is_confirming(FormKind::Quote));
    }
}

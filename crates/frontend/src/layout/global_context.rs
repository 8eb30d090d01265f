use crate::layout::overlay_timers::OverlayTimers;
use crate::shared::dom;
use contracts::domain::a001_site_page::{PageId, ViewState};
use contracts::domain::a002_spare_part::{ProductDescriptor, QuoteTarget};
use contracts::shared::config::SiteConfig;
use contracts::shared::error::RouteError;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{ErrorEvent, KeyboardEvent};

/// Site-wide state and the handles the event handlers share.
///
/// Provided once by `App`; everything else reaches it via `use_context`.
#[derive(Clone, Copy)]
pub struct SiteContext {
    pub view: RwSignal<ViewState>,
    pub navbar_scrolled: RwSignal<bool>,
    pub config: StoredValue<SiteConfig>,
    /// First field of the quote form, focused shortly after the modal opens.
    pub quote_focus: NodeRef<html::Input>,
    timers: StoredValue<OverlayTimers, LocalStorage>,
}

impl SiteContext {
    pub fn new(config: SiteConfig) -> Self {
        Self {
            view: RwSignal::new(ViewState::default()),
            navbar_scrolled: RwSignal::new(false),
            config: StoredValue::new(config),
            quote_focus: NodeRef::new(),
            timers: StoredValue::new_local(OverlayTimers::default()),
        }
    }

    /// Show the section named `key`. The active section, nav highlight,
    /// title and scroll position all follow; an unknown key changes nothing.
    pub fn show_page(&self, key: &str) -> Result<PageId, RouteError> {
        let next = self.view.with_untracked(|v| v.show_page(key))?;
        let page = next.current_page;
        self.view.set(next);

        dom::scroll_to_top();
        dom::set_document_title(page.title());
        log::debug!("page: {}", page);
        Ok(page)
    }

    /// Click on anything carrying `data-page`.
    pub fn handle_nav_click(&self, ev: &web_sys::MouseEvent) {
        ev.prevent_default();
        let Some(key) = dom::data_page_of(ev) else {
            return;
        };
        if let Err(e) = self.show_page(&key) {
            log::warn!("{}", e);
        }
        if self.view.with_untracked(|v| v.mobile_menu_open) {
            self.toggle_mobile_menu();
        }
    }

    pub fn toggle_mobile_menu(&self) {
        self.view.update(|v| *v = v.toggle_mobile_menu());
    }

    pub fn request_quote(&self, product: &ProductDescriptor) {
        log::debug!("quote requested: {}", product.id);
        self.view
            .update(|v| *v = v.open_quote(QuoteTarget::from(product)));

        let input = self.quote_focus;
        let delay = self.config.with_value(|c| c.timing.focus_delay_ms);
        self.timers.with_value(|t| {
            t.schedule_focus(delay, move || {
                if let Some(input) = input.get_untracked() {
                    let _ = input.focus();
                }
            })
        });
    }

    pub fn close_quote(&self) {
        self.timers.with_value(|t| t.cancel_focus());
        self.view.update(|v| *v = v.close_quote());
    }

    /// Take over the view an accepted submission produced. Its banner closes
    /// itself after the configured delay; a newer banner restarts the countdown.
    pub fn accept_submission(&self, next: ViewState) {
        if !next.is_quote_open() {
            self.timers.with_value(|t| t.cancel_focus());
        }
        self.view.set(next);

        let this = *self;
        let delay = self.config.with_value(|c| c.timing.confirmation_dismiss_ms);
        self.timers
            .with_value(|t| t.schedule_dismiss(delay, move || this.close_confirmation()));
    }

    pub fn close_confirmation(&self) {
        self.timers.with_value(|t| t.cancel_dismiss());
        if self.view.with_untracked(|v| v.is_confirmation_open()) {
            self.view.update(|v| *v = v.close_confirmation());
        }
    }

    pub fn handle_escape(&self) {
        let current = self.view.get_untracked();
        if current.is_quote_open() {
            self.timers.with_value(|t| t.cancel_focus());
        }
        if current.is_confirmation_open() {
            self.timers.with_value(|t| t.cancel_dismiss());
        }
        let next = current.escape();
        if next != current {
            self.view.set(next);
        }
    }

    /// Keyboard, scroll and error listeners. Call once, from the app root.
    pub fn init_listeners(&self) {
        let this = *self;

        let on_keydown = Closure::wrap(Box::new(move |event: web_sys::Event| {
            if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
                if keyboard_event.key() == "Escape" {
                    this.handle_escape();
                }
            }
        }) as Box<dyn FnMut(_)>);

        let threshold = self.config.with_value(|c| c.timing.navbar_scroll_threshold);
        let on_scroll = Closure::wrap(Box::new(move |_: web_sys::Event| {
            let scrolled = dom::scroll_y() > threshold;
            if this.navbar_scrolled.get_untracked() != scrolled {
                this.navbar_scrolled.set(scrolled);
            }
        }) as Box<dyn FnMut(_)>);

        let on_error = Closure::wrap(Box::new(move |event: web_sys::Event| {
            match event.dyn_ref::<ErrorEvent>() {
                Some(error) => log::error!(
                    "{}",
                    dom::describe_error(
                        &error.message(),
                        &error.filename(),
                        error.lineno(),
                        error.colno()
                    )
                ),
                None => log::error!("uncaught error: {}", event.type_()),
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
            let _ = window
                .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
            let _ = window
                .add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref());
        }
        // Listeners stay registered for the page lifetime.
        on_keydown.forget();
        on_scroll.forget();
        on_error.forget();
    }

    /// Keep `body` scroll-locked while the menu or an overlay is open.
    pub fn init_scroll_lock(&self) {
        let view = self.view;
        let locked = Memo::new(move |_| view.with(|v| v.scroll_locked()));
        Effect::new(move |_| dom::set_scroll_lock(locked.get()));
    }
}

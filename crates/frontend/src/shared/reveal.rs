//! Fade-in of cards and list items as they scroll into view.
//!
//! One `IntersectionObserver` is created at startup and shared through
//! context as [`RevealService`]. Elements start hidden with
//! [`HIDDEN_STYLE`]; the first time one intersects the viewport it gets the
//! revealed style and is unobserved.
//!
//! # Example
//! ```rust,ignore
//! <Reveal class="service-card">
//!     <h3>"Precision Manufacturing"</h3>
//! </Reveal>
//!
//! // or on an element you render yourself
//! let node = NodeRef::<html::Div>::new();
//! use_reveal(node);
//! view! { <div class="product-card" style=HIDDEN_STYLE node_ref=node>...</div> }
//! ```

use contracts::shared::config::RevealConfig;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Inline style of an element that has not been revealed yet.
pub const HIDDEN_STYLE: &str =
    "opacity: 0; transform: translateY(30px); transition: opacity 0.6s ease, transform 0.6s ease;";

const REVEALED_OPACITY: &str = "1";
const REVEALED_TRANSFORM: &str = "translateY(0)";

fn reveal(el: &Element) {
    if let Some(el) = el.dyn_ref::<HtmlElement>() {
        let style = el.style();
        let _ = style.set_property("opacity", REVEALED_OPACITY);
        let _ = style.set_property("transform", REVEALED_TRANSFORM);
    }
}

#[derive(Clone, Copy)]
pub struct RevealService {
    observer: StoredValue<Option<IntersectionObserver>, LocalStorage>,
}

impl RevealService {
    pub fn new(config: &RevealConfig) -> Self {
        let observer = match create_observer(config) {
            Ok(observer) => Some(observer),
            Err(e) => {
                // Elements are revealed immediately instead.
                log::warn!("IntersectionObserver unavailable: {:?}", e);
                None
            }
        };
        Self {
            observer: StoredValue::new_local(observer),
        }
    }

    pub fn observe(&self, el: &Element) {
        self.observer.with_value(|observer| match observer {
            Some(observer) => observer.observe(el),
            None => reveal(el),
        });
    }
}

fn create_observer(config: &RevealConfig) -> Result<IntersectionObserver, JsValue> {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    reveal(&target);
                    observer.unobserve(&target);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.threshold));
    options.set_root_margin(&config.root_margin);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    // The observer lives as long as the page; keep its callback alive.
    callback.forget();
    Ok(observer)
}

/// Register `node` with the shared observer once it is mounted.
pub fn use_reveal(node: NodeRef<html::Div>) {
    let service = use_context::<RevealService>();
    Effect::new(move |_| {
        if let (Some(el), Some(service)) = (node.get(), service) {
            service.observe(&el);
        }
    });
}

/// `div` with `class` that fades in on first sight.
#[component]
pub fn Reveal(
    /// CSS class of the wrapper, e.g. `service-card`.
    #[prop(into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    use_reveal(node);

    view! {
        <div class=class style=HIDDEN_STYLE node_ref=node>
            {children()}
        </div>
    }
}

//! Folio site frontend - WASM bindings for the router.
//!
//! This crate connects the platform-free `router` crate to the browser:
//! fragments come from `fetch`, the location from `window.history`, and
//! rendering goes straight into the host page's mount points.

mod dom;
mod events;
mod fetch;
mod forms;
mod location;

pub use dom::DocumentPage;
pub use fetch::HttpFragments;
pub use location::BrowserHistory;

use router::{Router, RouterConfig};
use tracing::{error, info};
use wasm_bindgen::prelude::*;

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    start(RouterConfig::default()).inspect_err(|e| error!(error = ?e, "router did not start"))
}

/// Bind listeners and run the router for the lifetime of the page.
pub fn start(config: RouterConfig) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global `window`"))?;
    let page = DocumentPage::new(window.clone(), config.clone())?;
    let events = events::listen(&window, page.document())?;

    let router = Router::new(HttpFragments::new(), BrowserHistory::new(window), page)
        .with_config(config);

    info!("router listening");
    wasm_bindgen_futures::spawn_local(async move {
        router.run(events).await;
    });

    Ok(())
}

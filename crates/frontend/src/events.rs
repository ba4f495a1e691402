//! DOM listeners feeding the router's event stream.

use futures::channel::mpsc::{self, UnboundedReceiver};
use router::NavigationEvent;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, Window};

/// Selector for elements that navigate on click.
const NAVIGABLE: &str = "[data-route]";

/// Listen for back/forward and for clicks on navigable elements.
///
/// Listeners live as long as the page does.
pub fn listen(
    window: &Window,
    document: &Document,
) -> Result<UnboundedReceiver<NavigationEvent>, JsValue> {
    let (tx, rx) = mpsc::unbounded();

    let pop_tx = tx.clone();
    let on_pop = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
        let _ = pop_tx.unbounded_send(NavigationEvent::PopState);
    });
    window.add_event_listener_with_callback("popstate", on_pop.as_ref().unchecked_ref())?;
    on_pop.forget();

    // One delegated listener; the navbar and sections are replaced wholesale.
    let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        if let Some(route) = clicked_route(&event) {
            event.prevent_default();
            let _ = tx.unbounded_send(NavigationEvent::Navigate(route));
        }
    });
    document.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();

    Ok(rx)
}

/// `data-route` of the clicked element or its closest navigable ancestor.
fn clicked_route(event: &Event) -> Option<String> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    let link = target.closest(NAVIGABLE).ok()??;
    link.get_attribute("data-route")
}

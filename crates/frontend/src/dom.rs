//! The page shell as seen through `web_sys`.

use router::{Container, NavLink, Page, RouterConfig};
use tracing::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, NodeList, Window};

use crate::forms;

const HAMBURGER: &str = ".hamburger";
const NAV_MENU: &str = ".nav-menu";
const MENU_OPEN: &str = "active";
const PROGRESS_BAR: &str = ".skill-progress";

/// Writes into the mount points of the host document.
pub struct DocumentPage {
    window: Window,
    document: Document,
    config: RouterConfig,
}

impl DocumentPage {
    /// Wrap the window's document, checking that every mount point exists.
    pub fn new(window: Window, config: RouterConfig) -> Result<Self, JsValue> {
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("window has no document"))?;

        for container in [Container::Navbar, Container::Footer, Container::Main] {
            let id = config.container_id(container);
            if document.get_element_by_id(id).is_none() {
                return Err(JsValue::from_str(&format!("missing mount point #{id}")));
            }
        }

        Ok(Self {
            window,
            document,
            config,
        })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    fn nav_elements(&self) -> Vec<Element> {
        query_all(&self.document, &self.config.nav_link_selector)
    }

    fn nav_element(&self, index: usize) -> Option<Element> {
        self.nav_elements().into_iter().nth(index)
    }

    fn progress_elements(&self) -> Vec<Element> {
        match self.document.get_element_by_id(&self.config.main_container) {
            Some(main) => query_all(&main, PROGRESS_BAR),
            None => Vec::new(),
        }
    }
}

impl Page for DocumentPage {
    fn set_html(&self, container: Container, html: &str) {
        let id = self.config.container_id(container);
        match self.document.get_element_by_id(id) {
            Some(el) => el.set_inner_html(html),
            None => warn!(id, "mount point disappeared"),
        }
    }

    fn nav_links(&self) -> Vec<NavLink> {
        self.nav_elements()
            .iter()
            .map(|el| NavLink {
                route: el.get_attribute("data-route"),
                href: el.get_attribute("href"),
            })
            .collect()
    }

    fn set_nav_route(&self, index: usize, route: &str) {
        let Some(el) = self.nav_element(index) else {
            return;
        };

        if let Err(e) = el.set_attribute("data-route", route) {
            warn!(index, error = ?e, "could not set data-route");
            return;
        }
        let _ = el.remove_attribute("href");
    }

    fn set_nav_active(&self, index: usize, active: bool) {
        if let Some(el) = self.nav_element(index) {
            let _ = el
                .class_list()
                .toggle_with_force(&self.config.active_class, active);
        }
    }

    fn bind_menu_toggle(&self) -> bool {
        let hamburger = self.document.query_selector(HAMBURGER).ok().flatten();
        let menu = self.document.query_selector(NAV_MENU).ok().flatten();
        let (Some(hamburger), Some(menu)) = (hamburger, menu) else {
            return false;
        };

        let on_toggle = {
            let (hamburger, menu) = (hamburger.clone(), menu.clone());
            Closure::<dyn FnMut()>::new(move || {
                let _ = hamburger.class_list().toggle(MENU_OPEN);
                let _ = menu.class_list().toggle(MENU_OPEN);
            })
        };
        if let Err(e) =
            hamburger.add_event_listener_with_callback("click", on_toggle.as_ref().unchecked_ref())
        {
            warn!(error = ?e, "could not bind menu toggle");
            return false;
        }
        on_toggle.forget();

        for link in self.nav_elements() {
            let (hamburger, menu) = (hamburger.clone(), menu.clone());
            let on_pick = Closure::<dyn FnMut()>::new(move || {
                let _ = hamburger.class_list().remove_1(MENU_OPEN);
                let _ = menu.class_list().remove_1(MENU_OPEN);
            });
            let _ = link.add_event_listener_with_callback("click", on_pick.as_ref().unchecked_ref());
            on_pick.forget();
        }

        true
    }

    fn progress_bars(&self) -> Vec<Option<String>> {
        self.progress_elements()
            .iter()
            .map(|el| el.get_attribute("data-width"))
            .collect()
    }

    fn set_progress_width(&self, index: usize, width: &str) {
        let bar = self
            .progress_elements()
            .into_iter()
            .nth(index)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());

        if let Some(bar) = bar {
            if let Err(e) = bar.style().set_property("width", width) {
                warn!(index, error = ?e, "could not size progress bar");
            }
        }
    }

    fn bind_contact_form(&self) -> bool {
        match forms::bind_contact_form(&self.window, &self.document) {
            Ok(bound) => bound,
            Err(e) => {
                warn!(error = ?e, "could not bind contact form");
                false
            }
        }
    }

    fn scroll_to_top(&self) {
        self.window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// Elements under `root` matching `selector`, in document order.
fn query_all<R: QuerySelectorAll>(root: &R, selector: &str) -> Vec<Element> {
    let Ok(nodes) = root.select_all(selector) else {
        debug!(selector, "invalid selector");
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// `querySelectorAll` exists on both `Document` and `Element`.
trait QuerySelectorAll {
    fn select_all(&self, selector: &str) -> Result<NodeList, JsValue>;
}

impl QuerySelectorAll for Document {
    fn select_all(&self, selector: &str) -> Result<NodeList, JsValue> {
        self.query_selector_all(selector)
    }
}

impl QuerySelectorAll for Element {
    fn select_all(&self, selector: &str) -> Result<NodeList, JsValue> {
        self.query_selector_all(selector)
    }
}

//! In-memory stand-ins for the browser, used by the unit tests.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use futures::channel::oneshot;

use crate::history::History;
use crate::page::{Container, NavLink, Page};
use crate::source::{FetchError, FragmentSource, Result};

/// Serves canned fragments; missing paths answer 404.
#[derive(Default)]
pub struct FakeSource {
    fragments: RefCell<HashMap<String, Result<String>>>,
    gates: RefCell<HashMap<String, oneshot::Receiver<()>>>,
    requests: RefCell<Vec<String>>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `html` at `path`.
    pub fn with_fragment(self, path: &str, html: &str) -> Self {
        self.fragments
            .borrow_mut()
            .insert(path.to_string(), Ok(html.to_string()));
        self
    }

    /// Fail every fetch of `path` with `error`.
    pub fn with_failure(self, path: &str, error: FetchError) -> Self {
        self.fragments
            .borrow_mut()
            .insert(path.to_string(), Err(error));
        self
    }

    /// Hold the next fetch of `path` until the returned sender fires.
    pub fn gate(&self, path: &str) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates.borrow_mut().insert(path.to_string(), rx);
        tx
    }

    /// Every path fetched so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }

    /// How many times `path` was fetched.
    pub fn request_count(&self, path: &str) -> usize {
        self.requests.borrow().iter().filter(|p| *p == path).count()
    }
}

#[async_trait(?Send)]
impl FragmentSource for FakeSource {
    async fn fetch(&self, path: &str) -> Result<String> {
        self.requests.borrow_mut().push(path.to_string());

        let gate = self.gates.borrow_mut().remove(path);
        if let Some(gate) = gate {
            let _ = gate.await;
        }

        self.fragments
            .borrow()
            .get(path)
            .cloned()
            .unwrap_or_else(|| {
                Err(FetchError::Status {
                    path: path.to_string(),
                    status: 404,
                })
            })
    }
}

/// A history stack; the last entry is the current location.
pub struct FakeHistory {
    entries: RefCell<Vec<String>>,
}

impl FakeHistory {
    pub fn at(path: &str) -> Self {
        Self {
            entries: RefCell::new(vec![path.to_string()]),
        }
    }

    /// Simulate the browser back button.
    pub fn back(&self) {
        let mut entries = self.entries.borrow_mut();
        if entries.len() > 1 {
            entries.pop();
        }
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries.borrow().clone()
    }
}

impl History for FakeHistory {
    fn current_path(&self) -> String {
        self.entries.borrow().last().cloned().unwrap_or_default()
    }

    fn push(&self, path: &str) {
        self.entries.borrow_mut().push(path.to_string());
    }
}

/// Records everything the router writes into the page.
///
/// Navbar links only "exist" once navbar markup has been set, like the
/// real DOM.
#[derive(Default)]
pub struct FakePage {
    html: RefCell<HashMap<Container, String>>,
    writes: RefCell<HashMap<Container, usize>>,
    links: RefCell<Vec<NavLink>>,
    active: RefCell<Vec<bool>>,
    has_menu: Cell<bool>,
    menu_bindings: Cell<usize>,
    bars: RefCell<Vec<Option<String>>>,
    widths: RefCell<Vec<Option<String>>>,
    has_contact_form: Cell<bool>,
    contact_bindings: Cell<usize>,
    scrolls: Cell<usize>,
}

impl FakePage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Links that appear once the navbar is inserted.
    pub fn with_nav_links(self, links: Vec<NavLink>) -> Self {
        *self.active.borrow_mut() = vec![false; links.len()];
        *self.links.borrow_mut() = links;
        self
    }

    /// Links carrying `data-route` for each of `routes`.
    pub fn with_routes(self, routes: &[&str]) -> Self {
        let links = routes
            .iter()
            .map(|r| NavLink {
                route: Some(r.to_string()),
                href: None,
            })
            .collect();
        self.with_nav_links(links)
    }

    pub fn with_menu(self) -> Self {
        self.has_menu.set(true);
        self
    }

    pub fn set_progress_bars(&self, bars: Vec<Option<String>>) {
        *self.widths.borrow_mut() = vec![None; bars.len()];
        *self.bars.borrow_mut() = bars;
    }

    pub fn set_has_contact_form(&self, present: bool) {
        self.has_contact_form.set(present);
    }

    pub fn html(&self, container: Container) -> Option<String> {
        self.html.borrow().get(&container).cloned()
    }

    pub fn writes(&self, container: Container) -> usize {
        self.writes.borrow().get(&container).copied().unwrap_or(0)
    }

    pub fn links(&self) -> Vec<NavLink> {
        self.links.borrow().clone()
    }

    /// Routes of the links currently marked active.
    pub fn active_routes(&self) -> Vec<String> {
        self.links
            .borrow()
            .iter()
            .zip(self.active.borrow().iter())
            .filter(|(_, active)| **active)
            .map(|(link, _)| link.route.clone().unwrap_or_default())
            .collect()
    }

    pub fn menu_bindings(&self) -> usize {
        self.menu_bindings.get()
    }

    pub fn progress_widths(&self) -> Vec<Option<String>> {
        self.widths.borrow().clone()
    }

    pub fn contact_bindings(&self) -> usize {
        self.contact_bindings.get()
    }

    pub fn scrolls(&self) -> usize {
        self.scrolls.get()
    }

    fn navbar_loaded(&self) -> bool {
        self.html.borrow().contains_key(&Container::Navbar)
    }
}

impl Page for FakePage {
    fn set_html(&self, container: Container, html: &str) {
        self.html.borrow_mut().insert(container, html.to_string());
        *self.writes.borrow_mut().entry(container).or_insert(0) += 1;
    }

    fn nav_links(&self) -> Vec<NavLink> {
        if self.navbar_loaded() {
            self.links()
        } else {
            Vec::new()
        }
    }

    fn set_nav_route(&self, index: usize, route: &str) {
        if let Some(link) = self.links.borrow_mut().get_mut(index) {
            link.route = Some(route.to_string());
            link.href = None;
        }
    }

    fn set_nav_active(&self, index: usize, active: bool) {
        if let Some(flag) = self.active.borrow_mut().get_mut(index) {
            *flag = active;
        }
    }

    fn bind_menu_toggle(&self) -> bool {
        if self.has_menu.get() {
            self.menu_bindings.set(self.menu_bindings.get() + 1);
        }
        self.has_menu.get()
    }

    fn progress_bars(&self) -> Vec<Option<String>> {
        self.bars.borrow().clone()
    }

    fn set_progress_width(&self, index: usize, width: &str) {
        if let Some(slot) = self.widths.borrow_mut().get_mut(index) {
            *slot = Some(width.to_string());
        }
    }

    fn bind_contact_form(&self) -> bool {
        if self.has_contact_form.get() {
            self.contact_bindings.set(self.contact_bindings.get() + 1);
        }
        self.has_contact_form.get()
    }

    fn scroll_to_top(&self) {
        self.scrolls.set(self.scrolls.get() + 1);
    }
}

/// Log output captured from a test.
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        let bytes = self.0.lock().map(|b| b.clone()).unwrap_or_default();
        String::from_utf8_lossy(&bytes).into_owned()
    }

    /// Number of lines logged at `level`, e.g. `"ERROR"`.
    pub fn count(&self, level: &str) -> usize {
        self.contents()
            .lines()
            .filter(|line| line.split_whitespace().next() == Some(level))
            .count()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if let Ok(mut inner) = self.0.lock() {
            inner.extend_from_slice(buf);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Route `tracing` output on this thread into a buffer until the guard drops.
pub fn capture_logs() -> (LogBuffer, tracing::subscriber::DefaultGuard) {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();

    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .without_time()
        .with_max_level(tracing::Level::DEBUG)
        .finish();

    (buffer, tracing::subscriber::set_default(subscriber))
}

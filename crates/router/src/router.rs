//! The resolve/render loop.

use std::cell::{Cell, RefCell};

use futures::{Stream, StreamExt, join};
use tracing::{debug, error, info};

use crate::config::RouterConfig;
use crate::history::{History, legacy_route};
use crate::hooks::HookRegistry;
use crate::page::{Container, Page};
use crate::route::{RouteTable, Section, canonical_path};
use crate::source::{FragmentSource, fragment_path};

/// A navigation intent raised by the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationEvent {
    /// Browser back/forward changed the location.
    PopState,
    /// A `data-route` element was clicked.
    Navigate(String),
}

/// How a render request ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    /// The fragment replaced the main content.
    Rendered(Section),
    /// A newer render started while this one was fetching; nothing was written.
    Superseded(Section),
    /// The fragment could not be loaded; the previous content stays.
    Failed(Section),
}

impl RenderOutcome {
    /// The section the request was for.
    pub fn section(&self) -> &Section {
        match self {
            RenderOutcome::Rendered(s) | RenderOutcome::Superseded(s) | RenderOutcome::Failed(s) => {
                s
            }
        }
    }

    /// Whether the page now shows the requested section.
    pub fn is_rendered(&self) -> bool {
        matches!(self, RenderOutcome::Rendered(_))
    }
}

/// Maps the browser location onto section fragments.
///
/// All browser access goes through the injected [`FragmentSource`],
/// [`History`] and [`Page`]. Methods take `&self` so that several renders
/// can be in flight on one thread; only the most recently started one is
/// allowed to write to the page.
pub struct Router<S, H, P> {
    config: RouterConfig,
    routes: RouteTable,
    hooks: HookRegistry,
    source: S,
    history: H,
    page: P,
    generation: Cell<u64>,
    current: RefCell<Option<Section>>,
}

impl<S, H, P> Router<S, H, P>
where
    S: FragmentSource,
    H: History,
    P: Page,
{
    /// Create a router with the default route table, hooks and config.
    pub fn new(source: S, history: H, page: P) -> Self {
        Self {
            config: RouterConfig::default(),
            routes: RouteTable::default(),
            hooks: HookRegistry::default(),
            source,
            history,
            page,
            generation: Cell::new(0),
            current: RefCell::new(None),
        }
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: RouterConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the route table.
    pub fn with_routes(mut self, routes: RouteTable) -> Self {
        self.routes = routes;
        self
    }

    /// Replace the section hooks.
    pub fn with_hooks(mut self, hooks: HookRegistry) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    /// Section currently shown in the main container, if any.
    pub fn current_section(&self) -> Option<Section> {
        self.current.borrow().clone()
    }

    /// Initialize, then serve navigation events until the stream ends.
    ///
    /// Events are handled concurrently; a later navigation never waits
    /// for an earlier fetch.
    pub async fn run<E>(&self, events: E)
    where
        E: Stream<Item = NavigationEvent>,
    {
        let listen = events.for_each_concurrent(None, move |event| async move {
            self.dispatch(event).await;
        });

        join!(self.initialize(), listen);
    }

    /// Load the chrome and render the initial route.
    ///
    /// Neither the chrome loads nor the initial render wait on each other.
    pub async fn initialize(&self) -> RenderOutcome {
        info!(path = %self.history.current_path(), "starting router");
        let ((), outcome) = join!(self.load_chrome(), self.resolve_route());
        outcome
    }

    /// Handle one navigation intent.
    pub async fn dispatch(&self, event: NavigationEvent) -> RenderOutcome {
        match event {
            NavigationEvent::PopState => self.resolve_route().await,
            NavigationEvent::Navigate(target) => self.navigate(&target).await,
        }
    }

    /// Push the canonical path for `target` and render it.
    pub async fn navigate(&self, target: &str) -> RenderOutcome {
        let path = canonical_path(target);
        self.history.push(&path);
        self.resolve_route().await
    }

    /// Render the section mapped from the current location.
    pub async fn resolve_route(&self) -> RenderOutcome {
        let path = self.history.current_path();
        let section = self.routes.resolve(&path);
        debug!(%path, %section, "resolved route");
        self.render_section(section).await
    }

    /// Fetch a section and swap it into the main container.
    pub async fn render_section(&self, section: Section) -> RenderOutcome {
        let generation = self.generation.get() + 1;
        self.generation.set(generation);

        let Some(html) = self.load_fragment(section.as_str()).await else {
            return RenderOutcome::Failed(section);
        };

        if self.generation.get() != generation {
            debug!(%section, generation, "discarding superseded render");
            return RenderOutcome::Superseded(section);
        }

        self.page.set_html(Container::Main, &html);
        self.mark_active(&section);
        self.hooks.run(&section, &self.page);
        self.page.scroll_to_top();
        *self.current.borrow_mut() = Some(section.clone());

        RenderOutcome::Rendered(section)
    }

    /// Fetch `components/<name>.html`, logging and swallowing failures.
    pub async fn load_fragment(&self, name: &str) -> Option<String> {
        let path = fragment_path(&self.config.component_dir, name);
        match self.source.fetch(&path).await {
            Ok(html) => Some(html),
            Err(e) => {
                error!(%path, error = %e, "failed to load fragment");
                None
            }
        }
    }

    /// Load navbar and footer side by side.
    pub async fn load_chrome(&self) {
        join!(self.load_navbar(), self.load_footer());
    }

    async fn load_navbar(&self) {
        let Some(html) = self.load_fragment(&self.config.navbar_fragment).await else {
            return;
        };

        self.page.set_html(Container::Navbar, &html);
        self.rewrite_legacy_links();

        if !self.page.bind_menu_toggle() {
            debug!("navbar has no mobile menu");
        }

        // The first render may have finished before the links existed.
        let current = self.current_section();
        if let Some(section) = current {
            self.mark_active(&section);
        }
    }

    async fn load_footer(&self) {
        if let Some(html) = self.load_fragment(&self.config.footer_fragment).await {
            self.page.set_html(Container::Footer, &html);
        }
    }

    /// Move `href="#target"` links over to `data-route`.
    fn rewrite_legacy_links(&self) {
        for (index, link) in self.page.nav_links().iter().enumerate() {
            if let Some(target) = link.href.as_deref().and_then(legacy_route) {
                debug!(index, target, "rewriting legacy nav link");
                self.page.set_nav_route(index, target);
            }
        }
    }

    fn mark_active(&self, section: &Section) {
        for (index, link) in self.page.nav_links().iter().enumerate() {
            let active = link.route.as_deref() == Some(section.as_str());
            self.page.set_nav_active(index, active);
        }
    }
}

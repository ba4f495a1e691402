//! The page shell the router writes into.

/// Mount points provided by the host page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Container {
    /// Navigation bar chrome.
    Navbar,
    /// Footer chrome.
    Footer,
    /// Section content.
    Main,
}

/// A navigation link as currently found in the navbar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavLink {
    /// Value of `data-route`, if present.
    pub route: Option<String>,
    /// Value of `href`, if present.
    pub href: Option<String>,
}

/// DOM operations the router needs.
///
/// Links and progress bars are addressed by their index in document
/// order, as returned by [`Page::nav_links`] and [`Page::progress_bars`].
/// Methods take `&self`; implementations write through to the DOM.
pub trait Page {
    /// Replace the markup of a container.
    fn set_html(&self, container: Container, html: &str);

    /// Navigation links currently in the document.
    fn nav_links(&self) -> Vec<NavLink>;

    /// Switch a link to the `data-route` convention, dropping its `href`.
    fn set_nav_route(&self, index: usize, route: &str);

    /// Add or remove the active marker on a link.
    fn set_nav_active(&self, index: usize, active: bool);

    /// Wire the hamburger button of the mobile menu.
    ///
    /// Returns `false` when the navbar has no menu to wire.
    fn bind_menu_toggle(&self) -> bool;

    /// `data-width` value of every progress bar, `None` where missing.
    fn progress_bars(&self) -> Vec<Option<String>>;

    /// Set the rendered width of a progress bar.
    fn set_progress_width(&self, index: usize, width: &str);

    /// Attach the local-only submit handler to the contact form.
    ///
    /// Returns `false` when the rendered section has no contact form.
    fn bind_contact_form(&self) -> bool;

    /// Reset the viewport to the top of the document.
    fn scroll_to_top(&self);
}

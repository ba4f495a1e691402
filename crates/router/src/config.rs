//! Router configuration.

use crate::page::Container;

/// Naming conventions shared by the router and the page shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouterConfig {
    /// Directory fragments are fetched from (default: components)
    pub component_dir: String,
    /// Fragment name of the navigation bar (default: navbar)
    pub navbar_fragment: String,
    /// Fragment name of the footer (default: footer)
    pub footer_fragment: String,
    /// Element id of the navbar mount point (default: navbar-container)
    pub navbar_container: String,
    /// Element id of the footer mount point (default: footer-container)
    pub footer_container: String,
    /// Element id of the section mount point (default: main-content)
    pub main_container: String,
    /// Selector matching navigation links (default: .nav-link)
    pub nav_link_selector: String,
    /// Class marking the link of the current section (default: active)
    pub active_class: String,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            component_dir: "components".to_string(),
            navbar_fragment: "navbar".to_string(),
            footer_fragment: "footer".to_string(),
            navbar_container: "navbar-container".to_string(),
            footer_container: "footer-container".to_string(),
            main_container: "main-content".to_string(),
            nav_link_selector: ".nav-link".to_string(),
            active_class: "active".to_string(),
        }
    }
}

impl RouterConfig {
    /// Element id of a mount point.
    pub fn container_id(&self, container: Container) -> &str {
        match container {
            Container::Navbar => &self.navbar_container,
            Container::Footer => &self.footer_container,
            Container::Main => &self.main_container,
        }
    }
}

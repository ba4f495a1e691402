//! Sections and the static path table.

use std::collections::HashMap;
use std::fmt;

/// Identifier of the section rendered on the fallback route.
pub const HOME: &str = "home";

/// A named content section, e.g. `about` or `projects`.
///
/// The identifier doubles as the fragment name (`components/<id>.html`)
/// and as the `data-route` value on navigation links.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Section(String);

impl Section {
    /// Create a section from its identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The fallback section.
    pub fn home() -> Self {
        Self(HOME.to_string())
    }

    /// The section identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the home section.
    pub fn is_home(&self) -> bool {
        self.0 == HOME
    }

    /// Path pushed onto history when navigating to this section.
    ///
    /// Home lives at `/`, never at `/home`.
    pub fn canonical_path(&self) -> String {
        canonical_path(&self.0)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Section {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Canonical history path for a navigation target.
pub fn canonical_path(target: &str) -> String {
    if target == HOME {
        "/".to_string()
    } else {
        format!("/{target}")
    }
}

/// Fixed mapping from URL path to section.
///
/// Built once and handed to the router; there is no way to mutate it
/// afterwards.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: HashMap<String, Section>,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::empty()
            .with_route("/", HOME)
            .with_route("/about", "about")
            .with_route("/highlights", "highlights")
            .with_route("/projects", "projects")
            .with_route("/research", "research")
    }
}

impl RouteTable {
    /// A table with no entries. Every path resolves to home.
    pub fn empty() -> Self {
        Self {
            routes: HashMap::new(),
        }
    }

    /// Add an entry while building the table.
    pub fn with_route(mut self, path: impl Into<String>, section: impl Into<Section>) -> Self {
        self.routes.insert(path.into(), section.into());
        self
    }

    /// Look up a location path, falling back to home on a miss.
    ///
    /// Query strings and hash fragments are not part of routing and are
    /// ignored.
    pub fn resolve(&self, path: &str) -> Section {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or(path);

        self.routes.get(path).cloned().unwrap_or_else(Section::home)
    }

    /// Whether the section is the target of some entry.
    pub fn contains_section(&self, section: &Section) -> bool {
        self.routes.values().any(|s| s == section)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

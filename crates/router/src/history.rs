//! Browser location and history.

/// Read and push the browser location.
///
/// The router only ever pushes `/` or `/<section>`.
pub trait History {
    /// Current location path, e.g. `/about`.
    fn current_path(&self) -> String;

    /// Push a new entry without reloading the page.
    fn push(&self, path: &str);
}

/// Target named by a legacy `href="#<target>"` navbar link.
///
/// Returns `None` for anything that is not a non-empty hash link.
pub fn legacy_route(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|target| !target.is_empty())
}

//! Client-side routing core for the folio portfolio site.
//!
//! This crate maps location paths to content sections, loads the matching
//! HTML fragments and swaps them into the page shell. It never touches a
//! browser API directly: fragment loading, history and the DOM are reached
//! through the [`FragmentSource`], [`History`] and [`Page`] traits, and
//! navigation intents arrive as a stream of [`NavigationEvent`]s.

mod config;
mod contact;
mod history;
mod hooks;
mod page;
mod route;
mod router;
mod source;

#[cfg(test)]
mod testing;

pub use config::RouterConfig;
pub use contact::{Acknowledgment, ContactError, ContactSubmission};
pub use history::{History, legacy_route};
pub use hooks::{HookRegistry, SectionHook, is_css_length};
pub use page::{Container, NavLink, Page};
pub use route::{HOME, RouteTable, Section, canonical_path};
pub use router::{NavigationEvent, RenderOutcome, Router};
pub use source::{FetchError, FragmentSource, fragment_path};

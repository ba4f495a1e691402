//! Post-render wiring for individual sections.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::page::Page;
use crate::route::Section;

/// Initialization a section needs once its fragment is in the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionHook {
    /// Size each progress bar from its `data-width` attribute.
    ProgressBars,
    /// Bind the local-only contact form handler.
    ContactForm,
}

impl SectionHook {
    /// Run the hook against freshly rendered content.
    pub fn run<P: Page>(self, page: &P) {
        match self {
            SectionHook::ProgressBars => apply_progress_widths(page),
            SectionHook::ContactForm => {
                if !page.bind_contact_form() {
                    debug!("no contact form in rendered section");
                }
            }
        }
    }
}

/// Which sections get which hook.
#[derive(Debug, Clone)]
pub struct HookRegistry {
    hooks: HashMap<Section, SectionHook>,
}

impl Default for HookRegistry {
    fn default() -> Self {
        Self::empty()
            .with(Section::new("skills"), SectionHook::ProgressBars)
            .with(Section::new("contact"), SectionHook::ContactForm)
    }
}

impl HookRegistry {
    /// A registry with no hooks.
    pub fn empty() -> Self {
        Self {
            hooks: HashMap::new(),
        }
    }

    /// Builder form of [`HookRegistry::register`].
    pub fn with(mut self, section: Section, hook: SectionHook) -> Self {
        self.register(section, hook);
        self
    }

    /// Register (or replace) the hook for a section.
    pub fn register(&mut self, section: Section, hook: SectionHook) {
        self.hooks.insert(section, hook);
    }

    /// Hook registered for a section, if any.
    pub fn get(&self, section: &Section) -> Option<SectionHook> {
        self.hooks.get(section).copied()
    }

    /// Run the section's hook. Sections without one are left alone.
    pub fn run<P: Page>(&self, section: &Section, page: &P) {
        if let Some(hook) = self.get(section) {
            debug!(%section, ?hook, "running section hook");
            hook.run(page);
        }
    }
}

fn apply_progress_widths<P: Page>(page: &P) {
    for (index, width) in page.progress_bars().into_iter().enumerate() {
        match width.as_deref().filter(|w| is_css_length(w)) {
            Some(width) => page.set_progress_width(index, width),
            None => warn!(index, ?width, "skipping progress bar with invalid data-width"),
        }
    }
}

/// Non-negative number followed by `%`, `px`, `em` or `rem`.
pub fn is_css_length(value: &str) -> bool {
    let value = value.trim();
    let number = ["rem", "em", "px", "%"]
        .iter()
        .find_map(|unit| value.strip_suffix(unit));

    match number {
        Some(n) if !n.is_empty() && !n.starts_with('+') => {
            n.parse::<f64>().is_ok_and(|v| v.is_finite() && v >= 0.0)
        }
        _ => false,
    }
}

//! `window.location` and `window.history`.

use router::History;
use tracing::error;
use wasm_bindgen::JsValue;
use web_sys::Window;

/// The browser's own history stack.
pub struct BrowserHistory {
    window: Window,
}

impl BrowserHistory {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl History for BrowserHistory {
    fn current_path(&self) -> String {
        self.window
            .location()
            .pathname()
            .unwrap_or_else(|_| "/".to_string())
    }

    fn push(&self, path: &str) {
        let pushed = self
            .window
            .history()
            .and_then(|h| h.push_state_with_url(&JsValue::NULL, "", Some(path)));

        if let Err(e) = pushed {
            error!(path, error = ?e, "pushState failed");
        }
    }
}

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;

/// Panels reachable from the navigation bar, by hash key.
pub const PANELS: [&str; 4] = ["system", "instances", "datastore", "network"];

pub const DEFAULT_PANEL: &str = "instances";

/// Maps `#network` (or `network`) to a known panel key.
pub fn panel_from_hash(hash: &str) -> &'static str {
    let key = hash.trim_start_matches('#');
    PANELS
        .iter()
        .find(|p| **p == key)
        .copied()
        .unwrap_or(DEFAULT_PANEL)
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<&'static str>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(DEFAULT_PANEL),
        }
    }

    fn current_hash() -> String {
        window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default()
    }

    /// Follows the location hash: reads it once and on every `hashchange`.
    pub fn init_router_integration(&self) {
        self.active.set(panel_from_hash(&Self::current_hash()));

        let Some(w) = window() else {
            return;
        };
        let active = self.active;
        let closure = Closure::<dyn Fn()>::new(move || {
            let panel = panel_from_hash(&Self::current_hash());
            if active.get_untracked() != panel {
                active.set(panel);
            }
        });
        if let Err(e) =
            w.add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref())
        {
            log::warn!("hashchange listener not attached: {:?}", e);
        }
        // Lives for the whole page session
        closure.forget();
    }

    pub fn open_panel(&self, key: &str) {
        let panel = panel_from_hash(key);
        if let Some(w) = window() {
            let _ = w.location().set_hash(panel);
        }
        self.active.set(panel);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub mod container;
pub mod global_context;
pub mod navigation;

use leptos::prelude::*;
use navigation::Navigation;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |              Navigation                   |
/// +------------------------------------------+
/// |              Active panel                 |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<C>(center: C) -> impl IntoView
where
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <Navigation />
            <div class="app-main" id="container">
                {center()}
            </div>
        </div>
    }
}

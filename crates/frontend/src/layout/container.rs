//! Container: standard root wrapper of every panel.
//!
//! Sets `id` of the root element to the panel key (`instances`, `network`, ...)
//! and the document title to `"{title} - LightStar"`.
//!
//! ```rust,ignore
//! view! {
//!     <Container current="network" title="Network">
//!         <div class="page__header">...</div>
//!         <div class="page__content">...</div>
//!     </Container>
//! }
//! ```

use leptos::prelude::*;

pub const TITLE_SUFFIX: &str = " - LightStar";

pub fn document_title(name: &str) -> String {
    format!("{}{}", name, TITLE_SUFFIX)
}

#[component]
pub fn Container(
    /// Panel key, used as the root element id
    current: &'static str,
    /// Human readable name for the document title
    title: &'static str,
    children: Children,
) -> impl IntoView {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(&document_title(title));
    }

    view! {
        <div id=current class="page" data-panel=current>
            {children()}
        </div>
    }
}

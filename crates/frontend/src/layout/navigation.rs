//! Navigation - top bar of the console.
//!
//! Brand, links to the panels and `user@host` of the hypervisor the console
//! is attached to. The hypervisor summary is fetched on mount.

use crate::domain::hyper::api::HyperApi;
use crate::layout::global_context::AppGlobalContext;
use contracts::domain::hyper::HyperSummary;
use leptos::prelude::*;
use leptos::task::spawn_local;

const LINKS: [(&str, &str); 4] = [
    ("system", "Home"),
    ("instances", "Guest Instances"),
    ("datastore", "DataStore"),
    ("network", "Network"),
];

pub fn account_label(summary: &HyperSummary) -> String {
    let user = if summary.user.name.is_empty() {
        "guest"
    } else {
        summary.user.name.as_str()
    };
    format!("{}@{}", user, summary.hyper.display_host())
}

#[component]
pub fn Navigation(
    /// Base href of the console
    #[prop(optional)]
    home: &'static str,
) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let home = if home.is_empty() { "." } else { home };
    let (summary, set_summary) = signal::<Option<HyperSummary>>(None);

    let refresh = move || {
        spawn_local(async move {
            match HyperApi::get().await {
                Ok(s) => set_summary.set(Some(s)),
                Err(e) => log::warn!("hyper summary: {}", e),
            }
        });
    };

    refresh();

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href=home>
                <img src="/static/images/lightstar-6.png" width="30" height="30" alt="" />
            </a>
            <ul class="navbar__nav">
                {LINKS.into_iter().map(|(key, title)| view! {
                    <li class="navbar__item" class:navbar__item--active=move || ctx.active.get() == key>
                        <a
                            class="navbar__link"
                            href=format!("{}#{}", home, key)
                            on:click=move |_| ctx.open_panel(key)
                        >
                            {title}
                        </a>
                    </li>
                }).collect_view()}
            </ul>
            <div class="navbar__account" on:click=move |_| refresh()>
                {move || summary.get().map(|s| account_label(&s)).unwrap_or_default()}
            </div>
            <a class="navbar__link" href="/ui/login">"Logout"</a>
        </nav>
    }
}

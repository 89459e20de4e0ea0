use crate::domain::datastore::ui::list::DataStoreList;
use crate::domain::hyper::ui::system::SystemPanel;
use crate::domain::instance::ui::list::InstanceList;
use crate::domain::network::ui::list::NetworkList;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use leptos::prelude::*;

/// Panel for a hash key. Each switch mounts a fresh panel, so its selection
/// observer starts from an empty selection.
fn panel_view(key: &str) -> AnyView {
    match key {
        "system" => view! { <SystemPanel /> }.into_any(),
        "datastore" => view! { <DataStoreList /> }.into_any(),
        "network" => view! { <NetworkList /> }.into_any(),
        _ => view! { <InstanceList /> }.into_any(),
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Initialize router integration. This runs once when the component is created.
    ctx.init_router_integration();

    view! {
        <Shell center=move || view! { {move || panel_view(ctx.active.get())} }.into_any() />
    }
}

pub mod state;

use self::state::*;
use crate::domain::network::api::{fetch_networks, NetworkApi};
use crate::domain::network::ui::create::NetworkCreateDialog;
use crate::layout::container::Container;
use crate::shared::components::{GroupCheckboxCell, RowCheckboxCell};
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_indicator, sort_list, Sortable};
use crate::shared::selection::{use_selection, ButtonBindingTable};
use contracts::domain::network::Network;
use leptos::html::Div;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;
use thaw::*;

const RELOAD_DELAY_MS: u32 = 500;

impl Sortable for Network {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            "state" => self.state.cmp(&other.state),
            "bridge" => self.bridge.cmp(&other.bridge),
            "address" => self.address.cmp(&other.address),
            "mode" => self.mode.cmp(&other.mode),
            _ => Ordering::Equal,
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn NetworkList() -> impl IntoView {
    let state = create_state();
    let (raw_items, set_raw_items) = signal::<Vec<Network>>(Vec::new());
    let (items, set_items) = signal::<Vec<Network>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let root = NodeRef::<Div>::new();

    // Kept apart from fetch errors, which a successful reload clears
    let (table, binding_error) = ButtonBindingTable::or_empty(bindings());
    let binding = use_selection(root, checkbox_group(), table);
    let panel = binding.state;

    let fetch = move || {
        spawn_local(async move {
            match fetch_networks().await {
                Ok(v) => {
                    set_raw_items.set(v);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let reload_later = move || {
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(RELOAD_DELAY_MS).await;
            fetch();
        });
    };

    Effect::new(move |_| {
        let mut sorted = raw_items.get();
        sort_list(&mut sorted, &state.sort_field.get(), state.sort_ascending.get());
        set_items.set(sorted);
    });

    Effect::new(move |_| {
        items.track();
        binding.refresh_after_render();
    });

    let toggle_sort = move |field: &'static str| {
        if state.sort_field.get_untracked() == field {
            state.sort_ascending.update(|a| *a = !*a);
        } else {
            state.sort_field.set(field.to_string());
            state.sort_ascending.set(true);
        }
    };

    let delete_selected = move || {
        let api = NetworkApi::new(panel.current());
        if api.uuids().is_empty() {
            return;
        }
        let confirmed = web_sys::window()
            .and_then(|w| {
                w.confirm_with_message(&format!("Delete {} network(s)?", api.uuids().len()))
                    .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        api.delete();
        reload_later();
    };

    // Сеть, выбранная для просмотра (edit доступен только для одной)
    let selected_network = Memo::new(move |_| {
        let selection = panel.selection.get();
        let uuid = selection.iter().next()?.to_string();
        items.with(|v| v.iter().find(|n| n.uuid == uuid).cloned())
    });

    fetch();

    let sort_header = move |field: &'static str, title: &'static str| {
        view! {
            <TableHeaderCell resizable=false>
                {title}
                <span
                    style="cursor: pointer; margin-left: 4px;"
                    on:click=move |e| {
                        e.stop_propagation();
                        toggle_sort(field);
                    }
                >
                    {move || get_sort_indicator(&state.sort_field.get(), field, state.sort_ascending.get())}
                </span>
            </TableHeaderCell>
        }
    };

    view! {
        <Container current="network" title="Network">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Network"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| state.create_open.set(true)
                    >
                        {icon("plus")}
                        " New"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| state.details_open.update(|o| *o = !*o)
                        disabled=panel.buttons.disabled(EDIT)
                    >
                        {icon("edit")}
                        " Edit"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| delete_selected()
                        disabled=panel.buttons.disabled(DELETE)
                    >
                        {icon("delete")}
                        {move || format!(" Delete ({})", panel.selection.get().len())}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| fetch()
                    >
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                </div>
            </div>

            <NetworkCreateDialog open=state.create_open on_created=Callback::new(move |_| reload_later()) />

            <div class="page__content">
                {binding_error.map(|e| view! {
                    <div class="warning-box warning-box--error">
                        <span class="warning-box__icon">"⚠"</span>
                        <span class="warning-box__text">{e}</span>
                    </div>
                })}
                {move || error.get().map(|e| view! {
                    <div class="warning-box warning-box--error">
                        <span class="warning-box__icon">"⚠"</span>
                        <span class="warning-box__text">{e}</span>
                    </div>
                })}

                {move || {
                    let visible = state.details_open.get() && !panel.buttons.is_disabled(EDIT);
                    visible.then(|| selected_network.get()).flatten().map(|n| view! {
                        <div class="details-card">
                            <div class="details-card__row"><b>"UUID: "</b>{n.uuid.clone()}</div>
                            <div class="details-card__row"><b>"Bridge: "</b>{n.bridge.clone()}</div>
                            <div class="details-card__row"><b>"Address: "</b>{n.cidr()}</div>
                            <div class="details-card__row"><b>"Mode: "</b>{n.mode.clone()}</div>
                        </div>
                    })
                }}

                <div class="table-wrapper" node_ref=root>
                    <Table attr:style="width: 100%; min-width: 700px;">
                        <TableHeader>
                            <TableRow>
                                <GroupCheckboxCell group=ALL_CLASS />
                                {sort_header("name", "Name")}
                                {sort_header("state", "State")}
                                {sort_header("bridge", "Bridge")}
                                {sort_header("address", "Address")}
                                {sort_header("mode", "Mode")}
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || items.get().into_iter().map(|row| {
                                let uuid = row.uuid.clone();
                                let cidr = row.cidr();
                                view! {
                                    <TableRow class:table__row--selected=move || panel.selection.get().contains(&uuid)>
                                        <RowCheckboxCell
                                            group=ONE_CLASS
                                            value=row.uuid.clone()
                                            checked=binding.is_checked(&row.uuid)
                                        />
                                        <TableCell>
                                            <TableCellLayout>{row.name}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{row.state}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{row.bridge}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{cidr}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{row.mode}</TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }
                            }).collect_view()}
                        </TableBody>
                    </Table>
                </div>
            </div>
        </Container>
    }
}

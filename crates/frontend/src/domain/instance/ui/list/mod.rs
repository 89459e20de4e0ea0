pub mod state;

use self::state::*;
use crate::domain::instance::api::{fetch_instances, InstanceApi};
use crate::domain::instance::ui::create::InstanceCreateDialog;
use crate::layout::container::Container;
use crate::shared::components::{GroupCheckboxCell, RowCheckboxCell};
use crate::shared::icons::icon;
use crate::shared::list_utils::{format_bytes, get_sort_indicator, sort_list, Sortable};
use crate::shared::selection::{use_selection, ButtonBindingTable};
use contracts::domain::instance::{Instance, InstanceAction};
use leptos::html::Div;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;
use thaw::*;

/// Задержка перед перечитыванием списка после действия
const RELOAD_DELAY_MS: u32 = 1000;

impl Sortable for Instance {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            "state" => self.state.as_str().cmp(other.state.as_str()),
            "max_cpu" => self.max_cpu.cmp(&other.max_cpu),
            "max_mem" => self.max_mem.cmp(&other.max_mem),
            _ => Ordering::Equal,
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn InstanceList() -> impl IntoView {
    let state = create_state();
    let (raw_items, set_raw_items) = signal::<Vec<Instance>>(Vec::new());
    let (items, set_items) = signal::<Vec<Instance>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let root = NodeRef::<Div>::new();

    // Kept apart from fetch errors, which a successful reload clears
    let (table, binding_error) = ButtonBindingTable::or_empty(bindings());
    let binding = use_selection(root, checkbox_group(), table);
    let panel = binding.state;

    let fetch = move || {
        spawn_local(async move {
            match fetch_instances().await {
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

    // Автоматическая сортировка при изменении данных или параметров
    Effect::new(move |_| {
        let mut sorted = raw_items.get();
        sort_list(&mut sorted, &state.sort_field.get(), state.sort_ascending.get());
        set_items.set(sorted);
    });

    // Rows were re-rendered with fresh, unchecked inputs
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

    let run = move |action: InstanceAction| {
        state.more_open.set(false);
        let api = InstanceApi::new(panel.current());
        log!("instance {}: {:?}", action.as_str(), api.uuids().as_slice());
        api.run(action);
        if action != InstanceAction::Console {
            reload_later();
        }
    };

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
        <Container current="instances" title="Guest Instances">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Guest Instances"</h1>
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
                        on_click=move |_| run(InstanceAction::Console)
                        disabled=panel.buttons.disabled(CONSOLE)
                    >
                        {icon("monitor")}
                        " Console"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| run(InstanceAction::Start)
                        disabled=panel.buttons.disabled(START)
                    >
                        {icon("play")}
                        " Start"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| run(InstanceAction::Shutdown)
                        disabled=panel.buttons.disabled(SHUTDOWN)
                    >
                        {icon("power")}
                        " Shutdown"
                    </Button>
                    <div class="dropdown">
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| state.more_open.update(|o| *o = !*o)
                            disabled=panel.buttons.disabled(MORE)
                        >
                            " More"
                            {icon("chevron-down")}
                        </Button>
                        {move || (state.more_open.get() && !panel.buttons.is_disabled(MORE)).then(|| view! {
                            <div class="dropdown__menu">
                                {InstanceAction::more().into_iter().map(|action| view! {
                                    <button
                                        class="dropdown__item"
                                        on:click=move |_| run(action)
                                    >
                                        {action.display_name()}
                                    </button>
                                }).collect_view()}
                            </div>
                        })}
                    </div>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| fetch()
                    >
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                </div>
            </div>

            <InstanceCreateDialog open=state.create_open on_created=Callback::new(move |_| reload_later()) />

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

                <div class="table-wrapper" node_ref=root>
                    <Table attr:style="width: 100%; min-width: 700px;">
                        <TableHeader>
                            <TableRow>
                                <GroupCheckboxCell group=ALL_CLASS />
                                {sort_header("name", "Name")}
                                {sort_header("state", "State")}
                                {sort_header("max_cpu", "CPU")}
                                {sort_header("max_mem", "Memory")}
                                <TableHeaderCell resizable=false>"VNC"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || items.get().into_iter().map(|row| {
                                let uuid = row.uuid.clone();
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
                                            <TableCellLayout>
                                                <span class=format!("state state--{}", row.state.as_str())>
                                                    {row.state.as_str()}
                                                </span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{row.max_cpu}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{format_bytes(row.max_mem)}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{row.vnc.unwrap_or_else(|| "-".to_string())}</TableCellLayout>
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

pub mod state;

use self::state::*;
use crate::domain::datastore::api::{fetch_datastores, DataStoreApi};
use crate::domain::datastore::ui::create::DataStoreCreateDialog;
use crate::layout::container::Container;
use crate::shared::components::{GroupCheckboxCell, RowCheckboxCell};
use crate::shared::icons::icon;
use crate::shared::list_utils::format_bytes;
use crate::shared::selection::{use_selection, ButtonBindingTable};
use contracts::domain::datastore::DataStore;
use leptos::html::Div;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const RELOAD_DELAY_MS: u32 = 500;

#[component]
#[allow(non_snake_case)]
pub fn DataStoreList() -> impl IntoView {
    let state = create_state();
    let (items, set_items) = signal::<Vec<DataStore>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let root = NodeRef::<Div>::new();

    // Kept apart from fetch errors, which a successful reload clears
    let (table, binding_error) = ButtonBindingTable::or_empty(bindings());
    let binding = use_selection(root, checkbox_group(), table);
    let panel = binding.state;

    let fetch = move || {
        spawn_local(async move {
            match fetch_datastores().await {
                Ok(mut v) => {
                    v.sort_by(|a, b| a.name.cmp(&b.name));
                    set_items.set(v);
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
        items.track();
        binding.refresh_after_render();
    });

    let delete_selected = move || {
        let api = DataStoreApi::new(panel.current());
        if api.names().is_empty() {
            return;
        }
        let confirmed = web_sys::window()
            .and_then(|w| {
                w.confirm_with_message(&format!(
                    "Delete {} datastore(s) and every volume in them?",
                    api.names().len()
                ))
                .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        api.delete();
        reload_later();
    };

    let selected_store = Memo::new(move |_| {
        let selection = panel.selection.get();
        let name = selection.iter().next()?.to_string();
        items.with(|v| v.iter().find(|d| d.name == name).cloned())
    });

    fetch();

    view! {
        <Container current="datastore" title="DataStore">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"DataStore"</h1>
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
                        " Delete"
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

            <DataStoreCreateDialog open=state.create_open on_created=Callback::new(move |_| reload_later()) />

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
                    visible.then(|| selected_store.get()).flatten().map(|d| view! {
                        <div class="details-card">
                            <div class="details-card__row"><b>"Type: "</b>{d.kind.clone()}</div>
                            <div class="details-card__row"><b>"Path: "</b>{d.path.clone()}</div>
                            <div class="details-card__row"><b>"Allocation: "</b>{format_bytes(d.allocation)}</div>
                        </div>
                    })
                }}

                <div class="table-wrapper" node_ref=root>
                    <Table attr:style="width: 100%; min-width: 700px;">
                        <TableHeader>
                            <TableRow>
                                <GroupCheckboxCell group=ALL_CLASS />
                                <TableHeaderCell resizable=false>"Name"</TableHeaderCell>
                                <TableHeaderCell resizable=false>"Type"</TableHeaderCell>
                                <TableHeaderCell resizable=false>"Path"</TableHeaderCell>
                                <TableHeaderCell resizable=false>"Capacity"</TableHeaderCell>
                                <TableHeaderCell resizable=false>"Available"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || items.get().into_iter().map(|row| {
                                let name = row.name.clone();
                                view! {
                                    <TableRow class:table__row--selected=move || panel.selection.get().contains(&name)>
                                        <RowCheckboxCell
                                            group=ONE_CLASS
                                            value=row.name.clone()
                                            checked=binding.is_checked(&row.name)
                                        />
                                        <TableCell>
                                            <TableCellLayout>{row.name}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{row.kind}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{row.path}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{format_bytes(row.capacity)}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{format_bytes(row.available)}</TableCellLayout>
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

//! Checkbox cells for panel tables.
//!
//! The inputs are uncontrolled: their `checked` state lives in the DOM and is
//! read by the selection observer of the panel. A row rendered again (after a
//! sort or reload) gets its previous state through `checked`. The wrapping cell carries the
//! group class (`instance-on-one`, `instance-on-all`, ...), so the selectors
//! look like `.instance-on-one input`.
//!
//! ```rust,ignore
//! <GroupCheckboxCell group="network-on-all" />
//! <RowCheckboxCell group="network-on-one" value=row.uuid.clone() checked=binding.is_checked(&row.uuid) />
//! ```

use leptos::prelude::*;
use thaw::*;

/// Checkbox in the header row that toggles every row.
#[component]
pub fn GroupCheckboxCell(
    /// Class of the header cell
    group: &'static str,
) -> impl IntoView {
    view! {
        <TableHeaderCell resizable=false class=format!("fixed-checkbox-column {}", group)>
            <input type="checkbox" class="table__checkbox" />
        </TableHeaderCell>
    }
}

/// Checkbox of a single row. Clicking it does not trigger the row click.
#[component]
pub fn RowCheckboxCell(
    /// Class of the cell
    group: &'static str,
    /// Row identifier reported in the selection
    #[prop(into)]
    value: String,
    /// Initial state, restored when the row is rendered again
    #[prop(optional)]
    checked: bool,
) -> impl IntoView {
    view! {
        <TableCell
            class=format!("fixed-checkbox-column {}", group)
            on:click=|e| e.stop_propagation()
        >
            <input type="checkbox" class="table__checkbox" value=value prop:checked=checked />
        </TableCell>
    }
}

//! Installs a selection observer on a rendered panel.

use super::aggregator::{CheckboxGroup, SelectionAggregator, Subscription};
use super::binder::ButtonBindingTable;
use super::controls::PanelSelection;
use super::dom::DomCheckboxes;
use leptos::html::Div;
use leptos::prelude::*;

/// Selection state of a mounted panel.
#[derive(Clone, Copy)]
pub struct SelectionBinding {
    pub state: PanelSelection,
    subscription: StoredValue<Option<Subscription<DomCheckboxes>>, LocalStorage>,
}

impl SelectionBinding {
    /// Whether `id` was selected before the latest re-render. Rows use it to
    /// restore their checkbox, since every render creates fresh inputs.
    pub fn is_checked(&self, id: &str) -> bool {
        self.subscription.with_value(|s| {
            s.as_ref()
                .is_some_and(|s| s.selection().contains(id))
        })
    }

    /// Recomputes from the DOM once the browser has painted re-rendered rows.
    pub fn refresh_after_render(&self) {
        let subscription = self.subscription;
        request_animation_frame(move || {
            subscription.with_value(|s| {
                if let Some(s) = s {
                    s.refresh();
                }
            });
        });
    }
}

/// Observes `group` inside the element behind `root` as soon as it mounts.
///
/// The subscription is owned by the component: it is dropped together with
/// the reactive owner, which detaches the DOM listeners.
pub fn use_selection(
    root: NodeRef<Div>,
    group: CheckboxGroup,
    table: ButtonBindingTable,
) -> SelectionBinding {
    let state = PanelSelection::new(&table);
    let subscription = StoredValue::new_local(None::<Subscription<DomCheckboxes>>);

    Effect::new(move |_| {
        let Some(el) = root.get() else {
            return;
        };
        if subscription.with_value(|s| s.as_ref().is_some_and(Subscription::is_active)) {
            return;
        }
        let table = table.clone();
        let observed = SelectionAggregator::observe(
            DomCheckboxes::new(el.into()),
            group.clone(),
            move |selection| state.apply(&table, selection),
        );
        subscription.set_value(Some(observed));
    });

    SelectionBinding {
        state,
        subscription,
    }
}

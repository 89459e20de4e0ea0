//! Reactive state consumed by panel buttons.

use super::binder::{ButtonBindingTable, DependentControlBinder};
use super::provider::ControlEffects;
use super::set::SelectionSet;
use leptos::prelude::*;
use std::collections::HashSet;

/// Disabled flags for a panel's controls, readable from `view!`.
#[derive(Clone, Copy, Debug)]
pub struct ButtonStates {
    disabled: RwSignal<HashSet<String>>,
}

impl ButtonStates {
    /// Every bound control starts disabled until the first selection arrives.
    pub fn new(table: &ButtonBindingTable) -> Self {
        Self {
            disabled: RwSignal::new(table.controls().map(str::to_string).collect()),
        }
    }

    pub fn is_disabled(&self, control: &str) -> bool {
        self.disabled.with(|d| d.contains(control))
    }

    pub fn disabled(&self, control: &'static str) -> Signal<bool> {
        let this = *self;
        Signal::derive(move || this.is_disabled(control))
    }
}

impl ControlEffects for ButtonStates {
    fn set_disabled(&self, control: &str, disabled: bool) {
        let current = self.disabled.with_untracked(|d| d.contains(control));
        if current == disabled {
            return;
        }
        self.disabled.update(|d| {
            if disabled {
                d.insert(control.to_string());
            } else {
                d.remove(control);
            }
        });
    }
}

/// The latest selection of a panel plus the controls it drives.
#[derive(Clone, Copy, Debug)]
pub struct PanelSelection {
    pub selection: RwSignal<SelectionSet>,
    pub buttons: ButtonStates,
}

impl PanelSelection {
    pub fn new(table: &ButtonBindingTable) -> Self {
        Self {
            selection: RwSignal::new(SelectionSet::new()),
            buttons: ButtonStates::new(table),
        }
    }

    /// Updates controls first, then publishes the new value.
    pub fn apply(&self, table: &ButtonBindingTable, selection: &SelectionSet) {
        DependentControlBinder::bind(table, selection, &self.buttons);
        self.selection.set(selection.clone());
    }

    /// Selection at the moment of the call, for action handlers.
    pub fn current(&self) -> SelectionSet {
        self.selection.get_untracked()
    }
}

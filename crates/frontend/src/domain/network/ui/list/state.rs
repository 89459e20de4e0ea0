use crate::shared::selection::{
    BindingError, ButtonBindingTable, CardinalityPredicate, CheckboxGroup,
};
use leptos::prelude::*;

pub const ONE_CLASS: &str = "network-on-one";
pub const ALL_CLASS: &str = "network-on-all";

pub const EDIT: &str = "network-edit";
pub const DELETE: &str = "network-delete";

#[derive(Clone, Copy, Debug)]
pub struct NetworkListState {
    pub sort_field: RwSignal<String>,
    pub sort_ascending: RwSignal<bool>,
    pub create_open: RwSignal<bool>,
    pub details_open: RwSignal<bool>,
}

pub fn create_state() -> NetworkListState {
    NetworkListState {
        sort_field: RwSignal::new("name".to_string()),
        sort_ascending: RwSignal::new(true),
        create_open: RwSignal::new(false),
        details_open: RwSignal::new(false),
    }
}

pub fn checkbox_group() -> CheckboxGroup {
    CheckboxGroup::new(format!(".{} input", ONE_CLASS), format!(".{} input", ALL_CLASS))
}

/// Delete works on any selection, edit only on a single network.
pub fn bindings() -> Result<ButtonBindingTable, BindingError> {
    ButtonBindingTable::builder()
        .bind(CardinalityPredicate::NonEmpty, [DELETE])
        .bind(CardinalityPredicate::ExactlyOne, [EDIT])
        .build()
}

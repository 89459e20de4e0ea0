use crate::shared::selection::{
    BindingError, ButtonBindingTable, CardinalityPredicate, CheckboxGroup,
};
use leptos::prelude::*;

pub const ONE_CLASS: &str = "datastore-on-one";
pub const ALL_CLASS: &str = "datastore-on-all";

pub const EDIT: &str = "datastore-edit";
pub const DELETE: &str = "datastore-delete";

#[derive(Clone, Copy, Debug)]
pub struct DataStoreListState {
    pub create_open: RwSignal<bool>,
    pub details_open: RwSignal<bool>,
}

pub fn create_state() -> DataStoreListState {
    DataStoreListState {
        create_open: RwSignal::new(false),
        details_open: RwSignal::new(false),
    }
}

pub fn checkbox_group() -> CheckboxGroup {
    CheckboxGroup::new(format!(".{} input", ONE_CLASS), format!(".{} input", ALL_CLASS))
}

pub fn bindings() -> Result<ButtonBindingTable, BindingError> {
    ButtonBindingTable::builder()
        .bind(CardinalityPredicate::NonEmpty, [DELETE])
        .bind(CardinalityPredicate::ExactlyOne, [EDIT])
        .build()
}

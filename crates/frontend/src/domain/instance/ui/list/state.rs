use crate::shared::selection::{
    BindingError, ButtonBindingTable, CardinalityPredicate, CheckboxGroup,
};
use leptos::prelude::*;

pub const ONE_CLASS: &str = "instance-on-one";
pub const ALL_CLASS: &str = "instance-on-all";

pub const CONSOLE: &str = "instance-console";
pub const START: &str = "instance-start";
pub const SHUTDOWN: &str = "instance-shutdown";
pub const MORE: &str = "instance-more";

#[derive(Clone, Copy, Debug)]
pub struct InstanceListState {
    pub sort_field: RwSignal<String>,
    pub sort_ascending: RwSignal<bool>,
    pub more_open: RwSignal<bool>,
    pub create_open: RwSignal<bool>,
}

pub fn create_state() -> InstanceListState {
    InstanceListState {
        sort_field: RwSignal::new("name".to_string()),
        sort_ascending: RwSignal::new(true),
        more_open: RwSignal::new(false),
        create_open: RwSignal::new(false),
    }
}

pub fn checkbox_group() -> CheckboxGroup {
    CheckboxGroup::new(format!(".{} input", ONE_CLASS), format!(".{} input", ALL_CLASS))
}

/// Every instance action works on any non-empty selection.
pub fn bindings() -> Result<ButtonBindingTable, BindingError> {
    ButtonBindingTable::builder()
        .bind(CardinalityPredicate::NonEmpty, [START, CONSOLE, SHUTDOWN, MORE])
        .build()
}

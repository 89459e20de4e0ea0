//! Checkbox selection of list panels.
//!
//! Flow of a single `change` event:
//!
//! ```text
//! checkbox change -> SelectionAggregator (rebuild SelectionSet)
//!                 -> AllToggleState      (group checkbox)
//!                 -> on_change           (DependentControlBinder, panel state)
//! ```
//!
//! Action handlers read [`PanelSelection::current`] at click time.

pub mod aggregator;
pub mod binder;
pub mod controls;
pub mod dom;
pub mod hook;
pub mod provider;
pub mod reconciler;
pub mod set;

#[cfg(test)]
pub(crate) mod testing;

pub use aggregator::{CheckboxGroup, SelectionAggregator, Subscription};
pub use binder::{
    BindingError, ButtonBindingTable, CardinalityPredicate, DependentControlBinder,
};
pub use controls::{ButtonStates, PanelSelection};
pub use hook::{use_selection, SelectionBinding};
pub use provider::{Checkbox, CheckboxProvider, ControlEffects};
pub use reconciler::AllToggleState;
pub use set::{Cardinality, SelectionSet};

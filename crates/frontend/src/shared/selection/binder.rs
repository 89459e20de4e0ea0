//! Enables and disables panel controls according to the selection size.

use super::provider::ControlEffects;
use super::set::{Cardinality, SelectionSet};
use std::collections::HashMap;
use thiserror::Error;

/// Condition on the number of selected rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardinalityPredicate {
    Empty,
    ExactlyOne,
    NonEmpty,
}

impl CardinalityPredicate {
    pub fn holds(&self, cardinality: Cardinality) -> bool {
        match self {
            CardinalityPredicate::Empty => cardinality == Cardinality::Empty,
            CardinalityPredicate::ExactlyOne => cardinality == Cardinality::Single,
            CardinalityPredicate::NonEmpty => cardinality != Cardinality::Empty,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindingError {
    #[error("control `{control}` is bound to both {first:?} and {second:?}")]
    OverlappingTarget {
        control: String,
        first: CardinalityPredicate,
        second: CardinalityPredicate,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingEntry {
    pub predicate: CardinalityPredicate,
    pub controls: Vec<String>,
}

/// Static mapping from a cardinality predicate to the controls it enables.
///
/// Every control appears in at most one entry, so the outcome never depends
/// on evaluation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ButtonBindingTable {
    entries: Vec<BindingEntry>,
}

impl ButtonBindingTable {
    pub fn builder() -> ButtonBindingTableBuilder {
        ButtonBindingTableBuilder::default()
    }

    pub fn entries(&self) -> &[BindingEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Falls back to an empty table, keeping the message for the panel's
    /// warning box.
    pub fn or_empty(result: Result<Self, BindingError>) -> (Self, Option<String>) {
        match result {
            Ok(table) => (table, None),
            Err(e) => {
                log::warn!("{}", e);
                (Self::default(), Some(e.to_string()))
            }
        }
    }

    /// All bound controls, in table order.
    pub fn controls(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .flat_map(|e| e.controls.iter().map(String::as_str))
    }
}

#[derive(Debug, Default)]
pub struct ButtonBindingTableBuilder {
    entries: Vec<BindingEntry>,
}

impl ButtonBindingTableBuilder {
    pub fn bind<I, S>(mut self, predicate: CardinalityPredicate, controls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries.push(BindingEntry {
            predicate,
            controls: controls.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Rejects tables that bind the same control more than once.
    pub fn build(self) -> Result<ButtonBindingTable, BindingError> {
        let mut owners: HashMap<&str, CardinalityPredicate> = HashMap::new();
        for entry in &self.entries {
            for control in &entry.controls {
                if let Some(first) = owners.insert(control.as_str(), entry.predicate) {
                    return Err(BindingError::OverlappingTarget {
                        control: control.clone(),
                        first,
                        second: entry.predicate,
                    });
                }
            }
        }
        Ok(ButtonBindingTable {
            entries: self.entries,
        })
    }
}

pub struct DependentControlBinder;

impl DependentControlBinder {
    pub fn bind(table: &ButtonBindingTable, selection: &SelectionSet, effects: &impl ControlEffects) {
        let cardinality = selection.cardinality();
        for entry in table.entries() {
            let enabled = entry.predicate.holds(cardinality);
            for control in &entry.controls {
                effects.set_disabled(control, !enabled);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::selection::testing::FakeControls;

    fn network_table() -> ButtonBindingTable {
        ButtonBindingTable::builder()
            .bind(CardinalityPredicate::NonEmpty, ["network-delete"])
            .bind(CardinalityPredicate::ExactlyOne, ["network-edit"])
            .build()
            .unwrap()
    }

    #[test]
    fn test_predicates() {
        assert!(CardinalityPredicate::Empty.holds(Cardinality::Empty));
        assert!(!CardinalityPredicate::Empty.holds(Cardinality::Single));
        assert!(CardinalityPredicate::ExactlyOne.holds(Cardinality::Single));
        assert!(!CardinalityPredicate::ExactlyOne.holds(Cardinality::Multiple));
        assert!(CardinalityPredicate::NonEmpty.holds(Cardinality::Multiple));
        assert!(!CardinalityPredicate::NonEmpty.holds(Cardinality::Empty));
    }

    #[test]
    fn test_network_edit_needs_exactly_one() {
        let table = network_table();
        let controls = FakeControls::default();

        DependentControlBinder::bind(&table, &SelectionSet::new(), &controls);
        assert_eq!(controls.is_disabled("network-edit"), Some(true));
        assert_eq!(controls.is_disabled("network-delete"), Some(true));

        DependentControlBinder::bind(&table, &SelectionSet::from_values(["a"]), &controls);
        assert_eq!(controls.is_disabled("network-edit"), Some(false));
        assert_eq!(controls.is_disabled("network-delete"), Some(false));

        DependentControlBinder::bind(&table, &SelectionSet::from_values(["a", "b"]), &controls);
        assert_eq!(controls.is_disabled("network-edit"), Some(true));
        assert_eq!(controls.is_disabled("network-delete"), Some(false));
    }

    #[test]
    fn test_overlapping_controls_are_rejected() {
        let err = ButtonBindingTable::builder()
            .bind(CardinalityPredicate::NonEmpty, ["network-edit", "network-delete"])
            .bind(CardinalityPredicate::ExactlyOne, ["network-edit"])
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            BindingError::OverlappingTarget {
                control: "network-edit".to_string(),
                first: CardinalityPredicate::NonEmpty,
                second: CardinalityPredicate::ExactlyOne,
            }
        );
    }

    #[test]
    fn test_duplicate_within_entry_is_rejected() {
        let result = ButtonBindingTable::builder()
            .bind(CardinalityPredicate::NonEmpty, ["a", "a"])
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_or_empty_keeps_the_error() {
        let (table, error) = ButtonBindingTable::or_empty(
            ButtonBindingTable::builder()
                .bind(CardinalityPredicate::NonEmpty, ["network-edit"])
                .bind(CardinalityPredicate::ExactlyOne, ["network-edit"])
                .build(),
        );
        assert!(table.is_empty());
        assert!(error.unwrap().contains("network-edit"));

        let (table, error) = ButtonBindingTable::or_empty(Ok(network_table()));
        assert_eq!(table, network_table());
        assert_eq!(error, None);
    }

    #[test]
    fn test_empty_table_is_noop() {
        let table = ButtonBindingTable::builder().build().unwrap();
        let controls = FakeControls::default();
        DependentControlBinder::bind(&table, &SelectionSet::from_values(["a"]), &controls);
        assert!(table.is_empty());
        assert_eq!(controls.writes(), 0);
    }
}

//! Tracks which rows of a panel are checked.
//!
//! Listens to `change` events of the row checkboxes (`one`) and of the group
//! checkbox (`all`). On every event the selection is rebuilt from the
//! checkboxes that currently match `one`, the group checkbox is reconciled,
//! and the callback receives the new value.

use super::provider::{Checkbox, CheckboxProvider};
use super::reconciler::AllToggleState;
use super::set::SelectionSet;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Row and group selectors of one panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckboxGroup {
    pub one: String,
    pub all: String,
}

impl CheckboxGroup {
    pub fn new(one: impl Into<String>, all: impl Into<String>) -> Self {
        Self {
            one: one.into(),
            all: all.into(),
        }
    }
}

pub struct SelectionAggregator<P: CheckboxProvider> {
    provider: P,
    group: CheckboxGroup,
    latest: RefCell<SelectionSet>,
    on_change: Box<dyn Fn(&SelectionSet)>,
}

impl<P: CheckboxProvider + 'static> SelectionAggregator<P> {
    /// Starts observing `group` and notifies `on_change` once right away with
    /// the selection as it stands.
    pub fn observe<F>(provider: P, group: CheckboxGroup, on_change: F) -> Subscription<P>
    where
        F: Fn(&SelectionSet) + 'static,
    {
        let aggregator = Rc::new(Self {
            provider,
            group,
            latest: RefCell::new(SelectionSet::new()),
            on_change: Box::new(on_change),
        });

        let weak = Rc::downgrade(&aggregator);
        let one = aggregator.provider.listen(
            &aggregator.group.one,
            Box::new(move |_| with_live(&weak, |a| a.on_one_changed())),
        );

        let weak = Rc::downgrade(&aggregator);
        let all = aggregator.provider.listen(
            &aggregator.group.all,
            Box::new(move |checked| with_live(&weak, |a| a.on_all_changed(checked))),
        );

        aggregator.recompute();

        Subscription {
            aggregator: Some(aggregator),
            _listeners: vec![one, all],
        }
    }
}

impl<P: CheckboxProvider> SelectionAggregator<P> {
    fn on_one_changed(&self) {
        self.recompute();
    }

    fn on_all_changed(&self, checked: bool) {
        for checkbox in self.provider.find(&self.group.one) {
            checkbox.set_checked(checked);
        }
        self.recompute();
    }

    fn recompute(&self) -> SelectionSet {
        let rows = self.provider.find(&self.group.one);
        let checked: Vec<String> = rows
            .iter()
            .filter(|c| c.is_checked())
            .map(|c| c.value())
            .collect();

        let state = AllToggleState::from_counts(checked.len(), rows.len());
        state.apply(&self.provider.find(&self.group.all));

        let selection = SelectionSet::from_values(checked);
        log::debug!("{}: {:?}", self.group.one, selection.as_slice());

        *self.latest.borrow_mut() = selection.clone();
        (self.on_change)(&selection);
        selection
    }
}

fn with_live<P: CheckboxProvider>(
    weak: &Weak<SelectionAggregator<P>>,
    f: impl FnOnce(&SelectionAggregator<P>),
) {
    if let Some(aggregator) = weak.upgrade() {
        f(&aggregator);
    }
}

/// Handle returned by [`SelectionAggregator::observe`].
///
/// The observation lasts as long as the handle. Dropping it or calling
/// [`Subscription::dispose`] detaches every listener.
pub struct Subscription<P: CheckboxProvider> {
    aggregator: Option<Rc<SelectionAggregator<P>>>,
    _listeners: Vec<P::Listener>,
}

impl<P: CheckboxProvider> Subscription<P> {
    /// The most recently reported selection.
    pub fn selection(&self) -> SelectionSet {
        self.aggregator
            .as_ref()
            .map(|a| a.latest.borrow().clone())
            .unwrap_or_default()
    }

    /// Rebuilds the selection as if a change event had fired. Used after the
    /// rows were re-rendered.
    pub fn refresh(&self) -> SelectionSet {
        self.aggregator
            .as_ref()
            .map(|a| a.recompute())
            .unwrap_or_default()
    }

    pub fn is_active(&self) -> bool {
        self.aggregator.is_some()
    }

    pub fn dispose(mut self) {
        self.release();
    }

    fn release(&mut self) {
        self._listeners.clear();
        self.aggregator = None;
    }
}

impl<P: CheckboxProvider> Drop for Subscription<P> {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::selection::testing::{FakeCheckbox, FakeDom};
    use std::cell::Cell;

    const ONE: &str = "vm-on-one input";
    const ALL: &str = "vm-on-all input";

    struct Panel {
        dom: FakeDom,
        all: FakeCheckbox,
        rows: Vec<FakeCheckbox>,
        seen: Rc<RefCell<Vec<SelectionSet>>>,
        subscription: Subscription<FakeDom>,
    }

    fn panel(values: &[&str]) -> Panel {
        let dom = FakeDom::new();
        let all = dom.add(ALL, "on");
        let rows = values.iter().map(|v| dom.add(ONE, v)).collect();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let subscription = SelectionAggregator::observe(
            dom.clone(),
            CheckboxGroup::new(ONE, ALL),
            move |s| sink.borrow_mut().push(s.clone()),
        );
        Panel {
            dom,
            all,
            rows,
            seen,
            subscription,
        }
    }

    impl Panel {
        fn last(&self) -> SelectionSet {
            self.seen.borrow().last().cloned().unwrap()
        }
    }

    #[test]
    fn test_initial_notification_is_empty() {
        let p = panel(&["a", "b", "c"]);
        assert_eq!(p.seen.borrow().len(), 1);
        assert!(p.last().is_empty());
        assert!(!p.all.is_checked());
        assert!(!p.all.is_indeterminate());
    }

    #[test]
    fn test_change_without_state_change_is_idempotent() {
        let p = panel(&["a", "b", "c"]);
        p.dom.click(&p.rows[2]);
        p.dom.click(&p.rows[0]);
        let before = p.last();

        p.dom.fire(ONE, true);

        assert_eq!(p.last(), before);
        assert_eq!(before.as_slice(), ["a", "c"]);
    }

    #[test]
    fn test_all_toggle_checks_every_row_in_dom_order() {
        let p = panel(&["a", "b", "c"]);

        p.dom.click(&p.all);

        assert_eq!(p.last().as_slice(), ["a", "b", "c"]);
        assert!(p.rows.iter().all(|r| r.is_checked()));
        assert!(p.all.is_checked());
        assert!(!p.all.is_indeterminate());

        p.dom.click(&p.all);
        assert!(p.last().is_empty());
        assert!(p.rows.iter().all(|r| !r.is_checked()));
    }

    #[test]
    fn test_rows_reconcile_group_checkbox() {
        let p = panel(&["a", "b", "c"]);

        p.dom.click(&p.rows[1]);
        assert!(p.all.is_indeterminate());
        assert!(!p.all.is_checked());

        p.dom.click(&p.rows[0]);
        p.dom.click(&p.rows[2]);
        assert!(!p.all.is_indeterminate());
        assert!(p.all.is_checked());

        for row in &p.rows {
            p.dom.click(row);
        }
        assert!(p.last().is_empty());
        assert!(!p.all.is_indeterminate());
        assert!(!p.all.is_checked());
    }

    #[test]
    fn test_rows_are_requeried_on_every_change() {
        let p = panel(&["a", "b"]);
        p.dom.click(&p.all);

        let late = p.dom.add(ONE, "c");
        p.dom.click(&late);
        assert_eq!(p.last().as_slice(), ["a", "b", "c"]);

        p.dom.remove(&p.rows[0]);
        p.subscription.refresh();
        assert_eq!(p.last().as_slice(), ["b", "c"]);
        assert!(p.all.is_checked());
    }

    #[test]
    fn test_rerendered_rows_restore_selection() {
        let p = panel(&["a", "b", "c"]);
        p.dom.click(&p.rows[0]);
        p.dom.click(&p.rows[2]);

        // Sorted descending: every row is rendered again as a new input
        p.dom.clear(ONE);
        for v in ["c", "b", "a"] {
            p.dom.add_checked(ONE, v, p.subscription.selection().contains(v));
        }
        p.subscription.refresh();

        assert_eq!(p.last().as_slice(), ["c", "a"]);
        assert!(p.all.is_indeterminate());
    }

    #[test]
    fn test_duplicate_values_count_once() {
        let p = panel(&["a", "a"]);
        p.dom.click(&p.all);
        assert_eq!(p.last().as_slice(), ["a"]);
        assert!(p.all.is_checked());
    }

    #[test]
    fn test_empty_group_yields_empty_selection() {
        let p = panel(&[]);
        p.dom.click(&p.all);
        assert!(p.last().is_empty());
        assert!(!p.all.is_checked());
    }

    #[test]
    fn test_selection_tracks_latest_value() {
        let p = panel(&["a", "b"]);
        p.dom.click(&p.rows[1]);
        assert_eq!(p.subscription.selection().as_slice(), ["b"]);
    }

    #[test]
    fn test_dispose_detaches_listeners() {
        let dom = FakeDom::new();
        let row = dom.add(ONE, "a");
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let subscription =
            SelectionAggregator::observe(dom.clone(), CheckboxGroup::new(ONE, ALL), move |_| {
                counter.set(counter.get() + 1)
            });
        assert_eq!(dom.live_listeners(), 2);
        assert!(subscription.is_active());

        subscription.dispose();
        dom.click(&row);

        assert_eq!(calls.get(), 1);
        assert_eq!(dom.live_listeners(), 0);
    }

    #[test]
    fn test_drop_detaches_listeners() {
        let dom = FakeDom::new();
        let row = dom.add(ONE, "a");
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        {
            let _subscription = SelectionAggregator::observe(
                dom.clone(),
                CheckboxGroup::new(ONE, ALL),
                move |_| counter.set(counter.get() + 1),
            );
        }
        dom.click(&row);
        assert_eq!(calls.get(), 1);
    }
}

//! In-memory checkbox host for exercising the selection core without a DOM.

use super::provider::{ChangeHandler, Checkbox, CheckboxProvider, ControlEffects};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::{Rc, Weak};

#[derive(Clone)]
pub struct FakeCheckbox {
    value: String,
    checked: Rc<Cell<bool>>,
    indeterminate: Rc<Cell<bool>>,
}

impl FakeCheckbox {
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
            checked: Rc::new(Cell::new(false)),
            indeterminate: Rc::new(Cell::new(false)),
        }
    }

    pub fn is_indeterminate(&self) -> bool {
        self.indeterminate.get()
    }

    fn same(&self, other: &FakeCheckbox) -> bool {
        Rc::ptr_eq(&self.checked, &other.checked)
    }
}

impl Checkbox for FakeCheckbox {
    fn value(&self) -> String {
        self.value.clone()
    }

    fn is_checked(&self) -> bool {
        self.checked.get()
    }

    fn set_checked(&self, checked: bool) {
        self.checked.set(checked);
    }

    fn set_indeterminate(&self, indeterminate: bool) {
        self.indeterminate.set(indeterminate);
    }
}

pub struct FakeListener(#[allow(dead_code)] Rc<dyn Fn(bool)>);

#[derive(Default)]
struct FakeDomInner {
    elements: RefCell<Vec<(String, FakeCheckbox)>>,
    listeners: RefCell<Vec<(String, Weak<dyn Fn(bool)>)>>,
}

/// A flat list of (selector, checkbox) pairs standing in for a panel.
#[derive(Clone, Default)]
pub struct FakeDom {
    inner: Rc<FakeDomInner>,
}

impl FakeDom {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, selector: &str, value: &str) -> FakeCheckbox {
        self.add_checked(selector, value, false)
    }

    /// Adds a box whose initial state is already set, like a re-rendered row.
    pub fn add_checked(&self, selector: &str, value: &str, checked: bool) -> FakeCheckbox {
        let checkbox = FakeCheckbox::new(value);
        checkbox.set_checked(checked);
        self.inner
            .elements
            .borrow_mut()
            .push((selector.to_string(), checkbox.clone()));
        checkbox
    }

    pub fn clear(&self, selector: &str) {
        self.inner
            .elements
            .borrow_mut()
            .retain(|(s, _)| s != selector);
    }

    pub fn remove(&self, checkbox: &FakeCheckbox) {
        self.inner
            .elements
            .borrow_mut()
            .retain(|(_, c)| !c.same(checkbox));
    }

    /// Emulates a user click: toggles the box, then fires `change`.
    pub fn click(&self, checkbox: &FakeCheckbox) {
        checkbox.set_checked(!checkbox.is_checked());
        checkbox.set_indeterminate(false);
        let selector = self
            .inner
            .elements
            .borrow()
            .iter()
            .find(|(_, c)| c.same(checkbox))
            .map(|(s, _)| s.clone());
        if let Some(selector) = selector {
            self.fire(&selector, checkbox.is_checked());
        }
    }

    /// Fires `change` for `selector` without touching any state.
    pub fn fire(&self, selector: &str, checked: bool) {
        let handlers: Vec<Rc<dyn Fn(bool)>> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .filter(|(s, _)| s == selector)
            .filter_map(|(_, h)| h.upgrade())
            .collect();
        for handler in handlers {
            handler(checked);
        }
    }

    pub fn live_listeners(&self) -> usize {
        self.inner
            .listeners
            .borrow()
            .iter()
            .filter(|(_, h)| h.strong_count() > 0)
            .count()
    }
}

impl CheckboxProvider for FakeDom {
    type Element = FakeCheckbox;
    type Listener = FakeListener;

    fn find(&self, selector: &str) -> Vec<FakeCheckbox> {
        self.inner
            .elements
            .borrow()
            .iter()
            .filter(|(s, _)| s == selector)
            .map(|(_, c)| c.clone())
            .collect()
    }

    fn listen(&self, selector: &str, handler: ChangeHandler) -> FakeListener {
        let handler: Rc<dyn Fn(bool)> = Rc::from(handler);
        self.inner
            .listeners
            .borrow_mut()
            .push((selector.to_string(), Rc::downgrade(&handler)));
        FakeListener(handler)
    }
}

/// Records the last disabled state written for each control.
#[derive(Default)]
pub struct FakeControls {
    disabled: RefCell<HashMap<String, bool>>,
    writes: Cell<usize>,
}

impl FakeControls {
    pub fn is_disabled(&self, control: &str) -> Option<bool> {
        self.disabled.borrow().get(control).copied()
    }

    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl ControlEffects for FakeControls {
    fn set_disabled(&self, control: &str, disabled: bool) {
        self.writes.set(self.writes.get() + 1);
        self.disabled
            .borrow_mut()
            .insert(control.to_string(), disabled);
    }
}

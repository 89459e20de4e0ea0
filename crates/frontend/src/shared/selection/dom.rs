//! Browser implementation of the checkbox seams.
//!
//! Queries are scoped to a panel root. A single `change` listener on the root
//! per selector catches events from rows rendered after the listener was
//! attached.

use super::provider::{ChangeHandler, Checkbox, CheckboxProvider};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlInputElement};

impl Checkbox for HtmlInputElement {
    fn value(&self) -> String {
        HtmlInputElement::value(self)
    }

    fn is_checked(&self) -> bool {
        HtmlInputElement::checked(self)
    }

    fn set_checked(&self, checked: bool) {
        HtmlInputElement::set_checked(self, checked);
    }

    fn set_indeterminate(&self, indeterminate: bool) {
        HtmlInputElement::set_indeterminate(self, indeterminate);
    }
}

pub struct DomCheckboxes {
    root: Element,
}

impl DomCheckboxes {
    pub fn new(root: Element) -> Self {
        Self { root }
    }
}

impl CheckboxProvider for DomCheckboxes {
    type Element = HtmlInputElement;
    type Listener = DomListener;

    fn find(&self, selector: &str) -> Vec<HtmlInputElement> {
        let list = match self.root.query_selector_all(selector) {
            Ok(list) => list,
            Err(e) => {
                log::warn!("bad selector {selector}: {e:?}");
                return Vec::new();
            }
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<HtmlInputElement>().ok())
            .collect()
    }

    fn listen(&self, selector: &str, handler: ChangeHandler) -> DomListener {
        let selector = selector.to_string();
        let closure = Closure::<dyn Fn(Event)>::new(move |ev: Event| {
            let Some(input) = ev
                .target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            else {
                return;
            };
            if input.matches(&selector).unwrap_or(false) {
                handler(input.checked());
            }
        });
        if let Err(e) = self
            .root
            .add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())
        {
            log::warn!("failed to attach change listener: {e:?}");
        }
        DomListener {
            root: self.root.clone(),
            closure,
        }
    }
}

/// Attached `change` listener. Removed from the root on drop.
pub struct DomListener {
    root: Element,
    closure: Closure<dyn Fn(Event)>,
}

impl Drop for DomListener {
    fn drop(&mut self) {
        let _ = self
            .root
            .remove_event_listener_with_callback("change", self.closure.as_ref().unchecked_ref());
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::shared::selection::{CheckboxGroup, SelectionAggregator, SelectionSet};
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen_test::*;
    use web_sys::EventInit;

    wasm_bindgen_test_configure!(run_in_browser);

    fn panel() -> Element {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        root.set_inner_html(
            r#"<table>
                <thead><tr><th class="vm-on-all"><input type="checkbox"></th></tr></thead>
                <tbody>
                    <tr><td class="vm-on-one"><input type="checkbox" value="a"></td></tr>
                    <tr><td class="vm-on-one"><input type="checkbox" value="b"></td></tr>
                </tbody>
            </table>"#,
        );
        root
    }

    fn change(input: &HtmlInputElement, checked: bool) {
        input.set_checked(checked);
        let init = EventInit::new();
        init.set_bubbles(true);
        let ev = Event::new_with_event_init_dict("change", &init).unwrap();
        input.dispatch_event(&ev).unwrap();
    }

    #[wasm_bindgen_test]
    fn test_delegated_change_updates_selection() {
        let root = panel();
        let seen = Rc::new(RefCell::new(SelectionSet::new()));
        let sink = seen.clone();
        let _subscription = SelectionAggregator::observe(
            DomCheckboxes::new(root.clone()),
            CheckboxGroup::new(".vm-on-one input", ".vm-on-all input"),
            move |s| *sink.borrow_mut() = s.clone(),
        );
        let provider = DomCheckboxes::new(root);
        let rows = provider.find(".vm-on-one input");
        let all = provider.find(".vm-on-all input").remove(0);

        change(&rows[1], true);
        assert_eq!(seen.borrow().as_slice(), ["b"]);
        assert!(all.indeterminate());

        change(&all, true);
        assert_eq!(seen.borrow().as_slice(), ["a", "b"]);
        assert!(rows[0].checked());
        assert!(!all.indeterminate());
    }
}

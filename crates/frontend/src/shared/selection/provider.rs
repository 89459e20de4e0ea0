//! Seams between the selection core and whatever hosts the checkboxes.

/// A checkbox-like element.
///
/// Handles are cheap views onto a shared element: setting state through one
/// handle is visible through every other handle to the same element.
pub trait Checkbox {
    fn value(&self) -> String;
    fn is_checked(&self) -> bool;
    fn set_checked(&self, checked: bool);
    fn set_indeterminate(&self, indeterminate: bool);
}

/// Receives the `checked` state of the element that fired the change.
pub type ChangeHandler = Box<dyn Fn(bool)>;

/// Resolves selectors to checkboxes and delivers their change events.
pub trait CheckboxProvider {
    type Element: Checkbox;
    /// Keeps a listener attached; dropping it detaches the handler.
    type Listener;

    /// Elements currently matching `selector`, in document order.
    /// Always queried fresh.
    fn find(&self, selector: &str) -> Vec<Self::Element>;

    fn listen(&self, selector: &str, handler: ChangeHandler) -> Self::Listener;
}

/// Side effects on the controls that depend on the selection.
pub trait ControlEffects {
    fn set_disabled(&self, control: &str, disabled: bool);
}

//! Keeps the group ("all") checkbox consistent with the row checkboxes.

use super::provider::Checkbox;

/// Visual state of the group checkbox.
///
/// Three states: unchecked, checked, indeterminate. Computed from the number
/// of checked rows and the total number of rows, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllToggleState {
    Unchecked,
    Checked,
    Indeterminate,
}

impl AllToggleState {
    pub fn from_counts(selected: usize, total: usize) -> Self {
        if total == 0 || selected == 0 {
            AllToggleState::Unchecked
        } else if selected >= total {
            AllToggleState::Checked
        } else {
            AllToggleState::Indeterminate
        }
    }

    pub fn is_checked(&self) -> bool {
        matches!(self, AllToggleState::Checked)
    }

    pub fn is_indeterminate(&self) -> bool {
        matches!(self, AllToggleState::Indeterminate)
    }

    /// Writes this state to every group checkbox.
    pub fn apply<E: Checkbox>(&self, group: &[E]) {
        for checkbox in group {
            checkbox.set_checked(self.is_checked());
            checkbox.set_indeterminate(self.is_indeterminate());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::selection::testing::FakeCheckbox;

    #[test]
    fn test_from_counts() {
        assert_eq!(AllToggleState::from_counts(0, 0), AllToggleState::Unchecked);
        assert_eq!(AllToggleState::from_counts(0, 3), AllToggleState::Unchecked);
        assert_eq!(AllToggleState::from_counts(1, 3), AllToggleState::Indeterminate);
        assert_eq!(AllToggleState::from_counts(2, 3), AllToggleState::Indeterminate);
        assert_eq!(AllToggleState::from_counts(3, 3), AllToggleState::Checked);
    }

    #[test]
    fn test_apply_clears_indeterminate_when_checked() {
        let all = FakeCheckbox::new("on");
        all.set_indeterminate(true);

        AllToggleState::Checked.apply(std::slice::from_ref(&all));
        assert!(all.is_checked());
        assert!(!all.is_indeterminate());

        AllToggleState::Indeterminate.apply(std::slice::from_ref(&all));
        assert!(!all.is_checked());
        assert!(all.is_indeterminate());

        AllToggleState::Unchecked.apply(std::slice::from_ref(&all));
        assert!(!all.is_checked());
        assert!(!all.is_indeterminate());
    }
}

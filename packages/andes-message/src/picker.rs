//! Index-based pickers for enum options.

use crate::types::{MessageHierarchy, MessageType};
use crate::{Error, Result};

/// An enum that can be offered as the rows of a picker.
pub trait PickerOption: Copy + PartialEq + 'static {
    /// Picker name used in diagnostics
    const PICKER: &'static str;

    /// Rows in display order
    fn options() -> &'static [Self];

    fn label(self) -> &'static str;
}

impl PickerOption for MessageType {
    const PICKER: &'static str = "type";

    fn options() -> &'static [Self] {
        &MessageType::ALL
    }

    fn label(self) -> &'static str {
        MessageType::label(self)
    }
}

impl PickerOption for MessageHierarchy {
    const PICKER: &'static str = "hierarchy";

    fn options() -> &'static [Self] {
        &MessageHierarchy::ALL
    }

    fn label(self) -> &'static str {
        MessageHierarchy::label(self)
    }
}

/// Single-column picker holding the current selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Picker<T: PickerOption> {
    selected: T,
}

impl<T: PickerOption> Picker<T> {
    pub fn new(selected: T) -> Self {
        Self { selected }
    }

    pub fn row_count(&self) -> usize {
        T::options().len()
    }

    pub fn title_for_row(&self, row: usize) -> Option<&'static str> {
        T::options().get(row).map(|option| option.label())
    }

    pub fn selected(&self) -> T {
        self.selected
    }

    pub fn selected_row(&self) -> usize {
        T::options()
            .iter()
            .position(|option| *option == self.selected)
            .unwrap_or(0)
    }

    /// Text shown in the field bound to this picker.
    pub fn display_text(&self) -> &'static str {
        self.selected.label()
    }

    pub fn set_selected(&mut self, selected: T) {
        self.selected = selected;
    }

    /// Select the option at `row`.
    pub fn select_row(&mut self, row: usize) -> Result<T> {
        let option = T::options()
            .get(row)
            .copied()
            .ok_or(Error::RowOutOfRange {
                picker: T::PICKER,
                row,
                rows: self.row_count(),
            })?;
        self.selected = option;
        Ok(option)
    }
}

impl<T: PickerOption + Default> Default for Picker<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

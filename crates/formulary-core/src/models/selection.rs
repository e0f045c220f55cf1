//! UI selection state.

use serde::{Deserialize, Serialize};

use super::{Category, Product};

/// The transient selection driving the result table.
///
/// An immutable value: every user action consumes the current state and
/// returns the next one. The reference and category selections are mutually
/// exclusive, which holds by construction since each transition that sets
/// one clears the other.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SelectionState {
    /// Text currently in the search field.
    pub search_text: String,
    /// Product chosen from the suggestion list, the anchor for
    /// same-ingredient lookups.
    pub reference: Option<Product>,
    /// Category chosen from the browse buttons.
    pub category: Option<Category>,
    /// Restrict same-ingredient results to the reference's dose text.
    pub same_dose_only: bool,
    /// Restrict results to tradeable stock.
    pub available_only: bool,
}

impl SelectionState {
    /// Typing in the search field. Any previous reference or category
    /// selection is abandoned; the refinement flags are untouched.
    #[must_use]
    pub fn type_search(self, text: impl Into<String>) -> Self {
        Self {
            search_text: text.into(),
            reference: None,
            category: None,
            ..self
        }
    }

    /// Clicking a suggestion. The search field takes the product's name and
    /// both refinement flags reset.
    #[must_use]
    pub fn choose_suggestion(self, product: Product) -> Self {
        Self {
            search_text: product.product_name.clone(),
            reference: Some(product),
            category: None,
            same_dose_only: false,
            available_only: false,
        }
    }

    /// Clicking a category button. Search text, reference, and flags all
    /// clear.
    #[must_use]
    pub fn choose_category(self, category: Category) -> Self {
        Self {
            search_text: String::new(),
            reference: None,
            category: Some(category),
            same_dose_only: false,
            available_only: false,
        }
    }

    /// Set the same-dose refinement. The selection survives.
    #[must_use]
    pub fn with_same_dose_only(self, on: bool) -> Self {
        Self {
            same_dose_only: on,
            ..self
        }
    }

    /// Set the availability refinement. The selection survives.
    #[must_use]
    pub fn with_available_only(self, on: bool) -> Self {
        Self {
            available_only: on,
            ..self
        }
    }

    /// The "return to main" action.
    #[must_use]
    pub fn reset(self) -> Self {
        Self::default()
    }

    /// Whether any selection is active. The view shows the browse screen
    /// otherwise.
    pub fn has_selection(&self) -> bool {
        self.reference.is_some() || self.category.is_some()
    }
}

//! Result-set construction for the current selection.

use std::cmp::Ordering;

use crate::dataset::Dataset;
use crate::models::{Category, Product, SelectionState};

use super::QueryOptions;

/// Ordering of the rows that follow the reference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResultOrder {
    /// Dataset (insertion) order.
    #[default]
    DatasetOrder,
    /// Reimbursement rate, highest first; unparsable rates sort as 0.
    RateDescending,
}

/// What happens to the reference row when `available_only` is on and the
/// reference itself is out of stock. The source product never settled on one
/// behavior, so both are first-class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReferencePolicy {
    /// The availability filter runs after the reference is prepended, so an
    /// out-of-stock reference drops out of its own result set.
    #[default]
    Filtered,
    /// The reference stays pinned first; only the rows after it are
    /// filtered.
    Pinned,
}

/// Rows to render for `state`. Reference lookup takes precedence over the
/// category listing; neither selected means nothing to show.
pub(super) fn build<'a>(
    dataset: &'a Dataset,
    state: &'a SelectionState,
    options: &QueryOptions,
) -> Vec<&'a Product> {
    if let Some(reference) = &state.reference {
        reference_rows(dataset, state, reference, options)
    } else if let Some(category) = state.category {
        category_rows(dataset, category, state.available_only)
    } else {
        Vec::new()
    }
}

/// Same-ingredient lookup anchored on the reference product.
fn reference_rows<'a>(
    dataset: &'a Dataset,
    state: &'a SelectionState,
    reference: &'a Product,
    options: &QueryOptions,
) -> Vec<&'a Product> {
    let base_ingredient = reference.cleaned_ingredient();
    let base_dose = reference.trimmed_dose();

    let mut rest: Vec<&Product> = dataset
        .iter()
        .filter(|p| {
            // Absent ingredients never match, not even each other
            let ingredient = p.cleaned_ingredient();
            !ingredient.is_empty() && ingredient == base_ingredient
        })
        .filter(|p| !state.same_dose_only || p.trimmed_dose() == base_dose)
        // Suppress the duplicate of the reference row itself
        .filter(|p| p.product_name != reference.product_name)
        .collect();

    if options.order == ResultOrder::RateDescending {
        rest.sort_by(|a, b| {
            b.rate_value()
                .partial_cmp(&a.rate_value())
                .unwrap_or(Ordering::Equal)
        });
    }

    if state.available_only {
        rest.retain(|p| p.is_available());
    }

    let keep_reference = !state.available_only
        || reference.is_available()
        || options.reference_policy == ReferencePolicy::Pinned;

    let mut rows = Vec::with_capacity(rest.len() + 1);
    if keep_reference {
        rows.push(reference);
    }
    rows.extend(rest);
    rows
}

/// Category listing in dataset order. Untagged records never match.
fn category_rows<'a>(
    dataset: &'a Dataset,
    category: Category,
    available_only: bool,
) -> Vec<&'a Product> {
    dataset
        .iter()
        .filter(|p| p.category == Some(category))
        .filter(|p| !available_only || p.is_available())
        .collect()
}

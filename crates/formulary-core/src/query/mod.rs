//! Formulary query engine.
//!
//! Two operations behind the search surface: `suggestions` for the
//! autocomplete list, `results` for the table rows. Both are pure passes
//! over the in-memory dataset.

mod results;
mod suggest;

pub use results::{ReferencePolicy, ResultOrder};
pub use suggest::MatchMode;

use crate::dataset::Dataset;
use crate::models::{Product, SelectionState};

/// Knobs the successive UI revisions disagreed on, lifted into explicit
/// configuration instead of a silently-picked behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryOptions {
    /// How typed text matches product names.
    pub match_mode: MatchMode,
    /// Ordering of the rows that follow the reference.
    pub order: ResultOrder,
    /// Availability-filter treatment of the reference row.
    pub reference_policy: ReferencePolicy,
}

/// Query engine over a loaded dataset.
pub struct QueryEngine<'a> {
    dataset: &'a Dataset,
    options: QueryOptions,
}

impl<'a> QueryEngine<'a> {
    /// Create an engine with default options.
    pub fn new(dataset: &'a Dataset) -> Self {
        Self::with_options(dataset, QueryOptions::default())
    }

    /// Create an engine with explicit options.
    pub fn with_options(dataset: &'a Dataset, options: QueryOptions) -> Self {
        Self { dataset, options }
    }

    /// The active options.
    pub fn options(&self) -> &QueryOptions {
        &self.options
    }

    /// Products whose name matches the typed text, in dataset order. Empty
    /// text yields nothing, not everything.
    pub fn suggestions(&self, search_text: &str) -> Vec<&'a Product> {
        let matches = suggest::suggestions(self.dataset, search_text, self.options.match_mode);
        tracing::trace!(query = search_text, matches = matches.len(), "suggestions");
        matches
    }

    /// Best single name match for typed text that produced no suggestions.
    /// Advisory only, never part of the result set.
    pub fn closest_name(&self, search_text: &str) -> Option<&'a Product> {
        suggest::closest_name(self.dataset, search_text)
    }

    /// Rows to render for the current selection: the reference-anchored
    /// same-ingredient lookup, else the category listing, else nothing.
    pub fn results<'s>(&'s self, state: &'s SelectionState) -> Vec<&'s Product> {
        let rows = results::build(self.dataset, state, &self.options);
        tracing::trace!(rows = rows.len(), "result set");
        rows
    }
}

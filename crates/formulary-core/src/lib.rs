//! Formulary Core Library
//!
//! Pure query engine behind a searchable, filterable table of wholesale drug
//! products. The dataset is loaded once at startup and never changes; the
//! view layer owns a [`SelectionState`] value, replaces it wholesale on each
//! user action, and asks the engine for the rows to render.
//!
//! ```text
//! typed text ──▶ suggestions ──▶ reference product ─┐
//!                                                   ├──▶ result set ──▶ table
//! category button ──────────────────────────────────┘
//! ```
//!
//! # Core Principle
//!
//! **Queries never fail.** Absent or malformed fields degrade to "no match";
//! the only fallible surface is loading the dataset itself.
//!
//! # Modules
//!
//! - [`dataset`]: load-once JSON dataset
//! - [`models`]: domain types (Product, Category, SelectionState, ...)
//! - [`query`]: suggestion matching and result-set construction

pub mod dataset;
pub mod models;
pub mod query;

// Re-export commonly used types
pub use dataset::{Dataset, DatasetError};
pub use models::{Category, Product, SelectionState, StockStatus, IN_STOCK};
pub use query::{MatchMode, QueryEngine, QueryOptions, ReferencePolicy, ResultOrder};

//! Formulary product models.

use serde::{Deserialize, Serialize};

use super::category::{self, Category};

/// The distinguished stock status value that marks a product as tradeable.
pub const IN_STOCK: &str = "normal distribution";

/// One formulary row describing a tradeable drug product.
///
/// Fields deserialize from a flat string-keyed JSON object. Absent keys take
/// their default value and simply never match anything; they are not an
/// error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Product {
    /// Display name. Unique-ish, not enforced unique.
    pub product_name: String,
    /// Active ingredient. Source rows sometimes keep a trailing comma from
    /// the upstream spreadsheet; compare via [`Product::cleaned_ingredient`].
    pub ingredient: String,
    /// Free-text dose ("500mg", "1.5mg/mL"). Compare via
    /// [`Product::trimmed_dose`].
    pub dose: String,
    /// Manufacturer name.
    pub manufacturer: String,
    /// Listed price as a display string. Never parsed by the core.
    pub price: String,
    /// Reimbursement rate as a display string ("34", "7.5%"). Parse via
    /// [`Product::rate_value`].
    pub reimbursement_rate: String,
    /// Converted settlement amount as a display string.
    pub converted_amount: String,
    /// Raw stock status.
    pub stock_status: StockStatus,
    /// Fixed category, `None` when the raw value is absent or unrecognized.
    #[serde(deserialize_with = "category::deserialize_lenient")]
    pub category: Option<Category>,
    /// Free-text remarks. The view renders a placeholder when absent.
    pub remarks: Option<String>,
}

impl Product {
    /// Ingredient with a single trailing comma removed, then surrounding
    /// whitespace trimmed.
    pub fn cleaned_ingredient(&self) -> &str {
        let raw = self.ingredient.as_str();
        raw.strip_suffix(',').unwrap_or(raw).trim()
    }

    /// Dose text with surrounding whitespace trimmed.
    pub fn trimmed_dose(&self) -> &str {
        self.dose.trim()
    }

    /// Whether this product is currently tradeable.
    pub fn is_available(&self) -> bool {
        self.stock_status.is_available()
    }

    /// Reimbursement rate parsed as a float for sorting. Accepts a leading
    /// numeric prefix ("7.5%" parses as 7.5); invalid or empty values parse
    /// as 0.0.
    pub fn rate_value(&self) -> f64 {
        parse_leading_float(self.reimbursement_rate.trim())
    }
}

/// Raw stock status string. An open set; only [`IN_STOCK`] is distinguished.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct StockStatus(pub String);

impl StockStatus {
    /// Exact match against the distinguished in-stock value. Anything else,
    /// including an absent field, counts as not available.
    pub fn is_available(&self) -> bool {
        self.0 == IN_STOCK
    }
}

impl From<&str> for StockStatus {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

/// Parse the longest leading float prefix of `s`, or 0.0.
fn parse_leading_float(s: &str) -> f64 {
    let end = s
        .char_indices()
        .take_while(|&(i, c)| c.is_ascii_digit() || c == '.' || (i == 0 && (c == '-' || c == '+')))
        .map(|(i, c)| i + c.len_utf8())
        .last()
        .unwrap_or(0);
    s[..end].parse().unwrap_or(0.0)
}

//! Formulary categories.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Fixed product categories behind the formulary's browse buttons.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Digestive system preparations
    Digestive,
    /// Respiratory system preparations
    Respiratory,
    /// Antibiotics
    Antibiotic,
    /// Circulatory system preparations
    Circulatory,
    /// Antidiabetic agents
    Antidiabetic,
    /// Neuropsychiatric agents
    Neuropsychiatric,
}

impl Category {
    /// All categories, in browse-button order.
    pub const ALL: [Category; 6] = [
        Category::Digestive,
        Category::Respiratory,
        Category::Antibiotic,
        Category::Circulatory,
        Category::Antidiabetic,
        Category::Neuropsychiatric,
    ];

    /// Lowercase label used in the dataset and on the buttons.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Digestive => "digestive",
            Category::Respiratory => "respiratory",
            Category::Antibiotic => "antibiotic",
            Category::Circulatory => "circulatory",
            Category::Antidiabetic => "antidiabetic",
            Category::Neuropsychiatric => "neuropsychiatric",
        }
    }

    /// Case-insensitive label lookup. Unknown labels are `None`, never an
    /// error.
    pub fn parse(raw: &str) -> Option<Category> {
        let raw = raw.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(raw))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lenient `Option<Category>` deserializer: absent, null, or unrecognized
/// labels become `None` instead of failing the whole dataset.
pub(crate) fn deserialize_lenient<'de, D>(deserializer: D) -> Result<Option<Category>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(Category::parse))
}

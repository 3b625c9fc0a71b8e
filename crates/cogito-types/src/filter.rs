use std::fmt;

/// Category selector: the sentinel that matches every category, or one
/// named category drawn from the collection's derived category set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    /// Sentinel value used on the command line and in serialized criteria.
    pub const ALL: &'static str = "all";

    pub fn named(category: impl Into<String>) -> Self {
        Self::Named(category.into())
    }

    /// Parse the sentinel or a category name.
    pub fn parse(value: &str) -> Self {
        if value == Self::ALL {
            Self::All
        } else {
            Self::Named(value.to_owned())
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Named(name) => name == category,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => Self::ALL,
            Self::Named(name) => name,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Applied filter criteria: the debounced search term plus a category
/// selector. The raw (echoed) search input lives with the browser state,
/// not here; matching only ever sees the debounced term.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub term: String,
    pub category: CategoryFilter,
}

impl FilterCriteria {
    pub fn is_default(&self) -> bool {
        self.term.is_empty() && self.category == CategoryFilter::All
    }
}

//! Name matching for catalog searches.
//!
//! A query is lower-cased and compiled as a regular expression, then run
//! unanchored against lower-cased mod names. `fo` therefore finds `Foo` and
//! `fortune`, while `^fo$` finds neither. Because the pattern itself is
//! lower-cased too, escapes whose meaning depends on case (`\D`, `\S`, `\W`)
//! turn into their lower-case counterparts.

use crate::core::ModError;
use regex::Regex;

/// A compiled search query.
#[derive(Debug, Clone)]
pub struct NameMatcher {
    regex: Regex,
}

impl NameMatcher {
    /// Compile `query` as a regular expression.
    ///
    /// Returns `Ok(None)` for an empty query, which matches nothing.
    ///
    /// # Errors
    ///
    /// [`ModError::InvalidSearchPattern`] if the lower-cased query does not
    /// compile.
    pub fn pattern(query: &str) -> Result<Option<Self>, ModError> {
        if query.is_empty() {
            return Ok(None);
        }

        let lowered = query.to_lowercase();
        let regex = Regex::new(&lowered).map_err(|e| ModError::InvalidSearchPattern {
            pattern: query.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Some(Self {
            regex,
        }))
    }

    /// Compile `query` as plain text: every regex metacharacter is escaped.
    pub fn literal(query: &str) -> Result<Option<Self>, ModError> {
        Self::pattern(&regex::escape(query))
    }

    /// Whether the lower-cased `name` contains a match.
    #[must_use]
    pub fn is_match(&self, name: &str) -> bool {
        self.regex.is_match(&name.to_lowercase())
    }

    /// Keep the names that match, preserving their order.
    #[must_use]
    pub fn filter(&self, names: Vec<String>) -> Vec<String> {
        names.into_iter().filter(|name| self.is_match(name)).collect()
    }
}

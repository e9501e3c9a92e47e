//! Marker-based SQL statement classification.
//!
//! Text is lower-cased, its whitespace runs collapsed to single spaces and
//! its ends padded with one space each, so that the guarding whitespace in
//! markers such as `" from "` also matches at the start and end of the text.
//! Categories are then tried in their fixed precedence order and the first
//! category with any marker occurring in the text wins.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::config::MarkerEntry;
use crate::errors::Error;

/// The statement taxonomy, in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatementCategory {
    /// Row-returning statements (`SELECT`, `SHOW`, ...).
    #[cfg_attr(feature = "serde", serde(rename = "SQL SELECT statement"))]
    Select,
    /// Data definition (`CREATE`, `DROP`, ...).
    #[cfg_attr(feature = "serde", serde(rename = "SQL data definition"))]
    Definition,
    /// Data manipulation (`INSERT`, `UPDATE`, ...).
    #[cfg_attr(feature = "serde", serde(rename = "SQL data manipulation"))]
    Manipulation,
    /// Data control (`GRANT`, `REVOKE`).
    #[cfg_attr(feature = "serde", serde(rename = "SQL data control"))]
    Control,
    /// Routine execution (`EXEC`, `CALL`, ...).
    #[cfg_attr(feature = "serde", serde(rename = "SQL data execution"))]
    Execution,
    /// Transaction control (`COMMIT`, `ROLLBACK`, ...).
    #[cfg_attr(feature = "serde", serde(rename = "SQL transaction"))]
    Transaction,
    /// Session administration (`SET`).
    #[cfg_attr(feature = "serde", serde(rename = "SQL administration"))]
    Administration,
}

impl StatementCategory {
    /// Every category, in precedence order.
    ///
    /// Reordering this changes classification results.
    pub const ALL: [StatementCategory; 7] = [
        StatementCategory::Select,
        StatementCategory::Definition,
        StatementCategory::Manipulation,
        StatementCategory::Control,
        StatementCategory::Execution,
        StatementCategory::Transaction,
        StatementCategory::Administration,
    ];

    /// Human-readable title of the category.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            StatementCategory::Select => "SQL SELECT statement",
            StatementCategory::Definition => "SQL data definition",
            StatementCategory::Manipulation => "SQL data manipulation",
            StatementCategory::Control => "SQL data control",
            StatementCategory::Execution => "SQL data execution",
            StatementCategory::Transaction => "SQL transaction",
            StatementCategory::Administration => "SQL administration",
        }
    }

    /// Whether statements of this category return rows that can be read back.
    ///
    /// Everything else has to be run as a stacked statement whose output is
    /// not observable.
    #[must_use]
    pub const fn is_query(self) -> bool {
        matches!(self, StatementCategory::Select)
    }
}

impl fmt::Display for StatementCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Classifies SQL fragments into [`StatementCategory`] values.
#[derive(Debug, Clone)]
pub struct StatementClassifier {
    categories: Vec<(StatementCategory, Vec<String>)>,
}

impl StatementClassifier {
    /// Build a classifier from marker entries.
    ///
    /// Entries must list every category exactly once, in the order of
    /// [`StatementCategory::ALL`]. Markers are lower-cased.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateCategory`], [`Error::MisorderedCategory`],
    /// [`Error::MissingCategory`] or [`Error::EmptyMarker`].
    pub fn new(entries: Vec<MarkerEntry>) -> Result<Self, Error> {
        let mut categories: Vec<(StatementCategory, Vec<String>)> =
            Vec::with_capacity(entries.len());
        for entry in entries {
            let found = entry.category;
            if categories.iter().any(|(category, _)| *category == found) {
                return Err(Error::DuplicateCategory(found));
            }
            let expected = StatementCategory::ALL[categories.len()];
            if found != expected {
                return Err(Error::MisorderedCategory { expected, found });
            }
            if entry.markers.iter().any(|marker| marker.trim().is_empty()) {
                return Err(Error::EmptyMarker(found));
            }
            let markers = entry.markers.iter().map(|m| m.to_lowercase()).collect();
            categories.push((found, markers));
        }
        if let Some(missing) = StatementCategory::ALL.get(categories.len()) {
            return Err(Error::MissingCategory(*missing));
        }
        Ok(Self { categories })
    }

    /// Markers of `category`, lower-cased, in declaration order.
    #[must_use]
    pub fn markers(&self, category: StatementCategory) -> &[String] {
        self.categories
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, markers)| markers.as_slice())
            .unwrap_or_default()
    }

    /// Classify `text`, or `None` if no marker occurs in it.
    ///
    /// Matching ignores case only. Markers are literal substrings, so their
    /// own whitespace has to appear in `text` as written.
    ///
    /// # Example
    ///
    /// ```
    /// use dialect_registry::{Registry, StatementCategory};
    ///
    /// let registry = Registry::builtin().unwrap();
    /// let classifier = registry.classifier();
    /// assert_eq!(
    ///     classifier.classify("SELECT * FROM users WHERE id=1"),
    ///     Some(StatementCategory::Select)
    /// );
    /// assert_eq!(
    ///     classifier.classify("DROP TABLE users"),
    ///     Some(StatementCategory::Definition)
    /// );
    /// assert_eq!(classifier.classify("   "), None);
    /// ```
    #[must_use]
    pub fn classify(&self, text: &str) -> Option<StatementCategory> {
        self.matching_marker(text).map(|(category, _)| category)
    }

    /// Like [`classify`](Self::classify), also returning the marker that
    /// decided the category.
    #[must_use]
    pub fn matching_marker(&self, text: &str) -> Option<(StatementCategory, &str)> {
        let lowered = text.to_lowercase();
        let found = self.categories.iter().find_map(|(category, markers)| {
            markers
                .iter()
                .find(|marker| lowered.contains(marker.as_str()))
                .map(|marker| (*category, marker.as_str()))
        });
        log::trace!("classified {text:?} as {found:?}");
        found
    }
}

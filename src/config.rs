//! Owned, plain-data form of every registry table.
//!
//! [`RegistryData`] is what a configuration layer hands to
//! [`Registry::from_data`](crate::Registry::from_data). The built-in tables are
//! available through [`RegistryData::builtin`]; with the `serde` feature the
//! same structure round-trips through JSON.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::classifier::StatementCategory;
use crate::codes::Code;
use crate::data;
use crate::dialect::Dialect;
#[cfg(feature = "serde")]
use crate::errors::Error;

/// Aliases declared for one dialect.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AliasEntry {
    /// The dialect the aliases refer to.
    pub dialect: Dialect,
    /// Case-insensitive names of the dialect.
    pub aliases: Vec<String>,
}

/// One code and its canonical name.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CodeEntry {
    /// The vendor code.
    pub code: Code,
    /// The canonical name.
    pub name: String,
}

/// A type or privilege table for one dialect.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CodeTableEntry {
    /// The dialect owning the codes.
    pub dialect: Dialect,
    /// Codes in declaration order.
    pub codes: Vec<CodeEntry>,
}

/// Markers of one statement category.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarkerEntry {
    /// The category.
    pub category: StatementCategory,
    /// Lower-case markers, including their guarding whitespace.
    pub markers: Vec<String>,
}

/// A named HTML entity.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityEntry {
    /// Case-sensitive entity name, without `&` and `;`.
    pub name: String,
    /// The Unicode code point it stands for.
    pub code_point: u32,
}

/// Heuristic probe data for one dialect.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProbeEntry {
    /// The dialect.
    pub dialect: Dialect,
    /// Expression that evaluates to NULL only on this dialect.
    #[cfg_attr(feature = "serde", serde(default))]
    pub null_eval: Option<String>,
    /// Clause selecting from a one-row table, with its leading space.
    #[cfg_attr(feature = "serde", serde(default))]
    pub dummy_from: Option<String>,
}

/// Client library able to connect to a dialect directly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Connector {
    /// Library name.
    #[cfg_attr(feature = "serde", serde(default))]
    pub library: Option<String>,
    /// Project URL of the library.
    #[cfg_attr(feature = "serde", serde(default))]
    pub url: Option<String>,
    /// SQLAlchemy dialect name.
    #[cfg_attr(feature = "serde", serde(default))]
    pub sqlalchemy_dialect: Option<String>,
}

/// Connector metadata for one dialect.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConnectorEntry {
    /// The dialect.
    pub dialect: Dialect,
    /// Its connector.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub connector: Connector,
}

/// Every table the registry is built from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct RegistryData {
    /// Alias sets.
    pub aliases: Vec<AliasEntry>,
    /// Column type codes.
    pub types: Vec<CodeTableEntry>,
    /// Privilege codes.
    pub privileges: Vec<CodeTableEntry>,
    /// Statement markers, in precedence order.
    pub statements: Vec<MarkerEntry>,
    /// Named HTML entities.
    pub entities: Vec<EntityEntry>,
    /// Heuristic probes.
    pub probes: Vec<ProbeEntry>,
    /// Client connectors.
    pub connectors: Vec<ConnectorEntry>,
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

fn code_tables<C: Copy + Into<Code>>(tables: &[(Dialect, &[(C, &str)])]) -> Vec<CodeTableEntry> {
    tables
        .iter()
        .map(|(dialect, codes)| CodeTableEntry {
            dialect: *dialect,
            codes: codes
                .iter()
                .map(|(code, name)| CodeEntry {
                    code: (*code).into(),
                    name: name.to_string(),
                })
                .collect(),
        })
        .collect()
}

impl RegistryData {
    /// The tables compiled into the crate.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            aliases: data::aliases::ALIASES
                .iter()
                .map(|(dialect, aliases)| AliasEntry {
                    dialect: *dialect,
                    aliases: owned(aliases),
                })
                .collect(),
            types: code_tables(data::types::TYPES),
            privileges: code_tables(data::privileges::PRIVILEGES),
            statements: data::statements::STATEMENTS
                .iter()
                .map(|(category, markers)| MarkerEntry {
                    category: *category,
                    markers: owned(markers),
                })
                .collect(),
            entities: data::entities::ENTITIES
                .iter()
                .map(|(name, code_point)| EntityEntry {
                    name: name.to_string(),
                    code_point: *code_point,
                })
                .collect(),
            probes: data::probes::PROBES
                .iter()
                .map(|(dialect, null_eval, dummy_from)| ProbeEntry {
                    dialect: *dialect,
                    null_eval: null_eval.map(ToString::to_string),
                    dummy_from: dummy_from.map(ToString::to_string),
                })
                .collect(),
            connectors: data::connectors::CONNECTORS
                .iter()
                .map(|(dialect, library, sqlalchemy_dialect)| ConnectorEntry {
                    dialect: *dialect,
                    connector: Connector {
                        library: library.map(|(name, _)| name.to_string()),
                        url: library.map(|(_, url)| url.to_string()),
                        sqlalchemy_dialect: sqlalchemy_dialect.map(ToString::to_string),
                    },
                })
                .collect(),
        }
    }

    /// Read tables from JSON.
    ///
    /// Missing top-level tables default to empty; whether the result is
    /// usable is decided by [`Registry::from_data`](crate::Registry::from_data).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if the JSON is malformed or names an
    /// unknown dialect or statement category.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, Error> {
        serde_json::from_str(json).map_err(|err| Error::InvalidConfig(err.to_string()))
    }

    /// Write tables as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if serialization fails.
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string_pretty(self).map_err(|err| Error::InvalidConfig(err.to_string()))
    }
}

//! Submodule defining the errors used across the crate.
//!
//! Only malformed table data is an error. Lookups that find nothing return
//! `None` instead.

use alloc::string::String;

use crate::classifier::StatementCategory;
use crate::codes::Code;
use crate::dialect::Dialect;

/// Errors detected while loading the registry tables.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The same alias is claimed by two different dialects.
    #[error("Alias {alias:?} is declared for both {first} and {second}")]
    OverlappingAlias {
        /// The case-folded alias.
        alias: String,
        /// The dialect that declared the alias first.
        first: Dialect,
        /// The dialect that declared it again.
        second: Dialect,
    },

    /// An alias is empty once trimmed.
    #[error("Empty alias declared for {0}")]
    EmptyAlias(Dialect),

    /// A per-dialect table lists the same dialect twice.
    #[error("{dialect} appears more than once in the {table} table")]
    DuplicateDialectEntry {
        /// The table being loaded.
        table: TableKind,
        /// The repeated dialect.
        dialect: Dialect,
    },

    /// A code table maps the same code twice.
    #[error("Code {code} is declared twice in the {table} table of {dialect}")]
    DuplicateCode {
        /// The table being loaded.
        table: TableKind,
        /// The dialect owning the table.
        dialect: Dialect,
        /// The repeated code.
        code: Code,
    },

    /// A code maps to an empty name.
    #[error("Code {code} has an empty name in the {table} table of {dialect}")]
    EmptyCodeName {
        /// The table being loaded.
        table: TableKind,
        /// The dialect owning the table.
        dialect: Dialect,
        /// The offending code.
        code: Code,
    },

    /// A statement category is declared more than once.
    #[error("Statement category {0:?} is declared more than once")]
    DuplicateCategory(StatementCategory),

    /// A statement category is missing from the marker table.
    #[error("Statement category {0:?} is missing from the marker table")]
    MissingCategory(StatementCategory),

    /// Statement categories are not in their fixed precedence order.
    #[error("Expected statement category {expected:?}, found {found:?}")]
    MisorderedCategory {
        /// The category required at this position.
        expected: StatementCategory,
        /// The category actually declared there.
        found: StatementCategory,
    },

    /// A statement category contains an empty marker.
    #[error("Statement category {0:?} contains an empty marker")]
    EmptyMarker(StatementCategory),

    /// An HTML entity name is declared twice.
    #[error("HTML entity {0:?} is declared twice")]
    DuplicateEntity(String),

    /// An HTML entity name is empty or contains non-alphanumeric characters.
    #[error("Invalid HTML entity name {0:?}")]
    InvalidEntityName(String),

    /// An HTML entity maps to a value that is not a Unicode scalar value.
    #[error("HTML entity {name:?} maps to invalid code point {code_point:#x}")]
    InvalidCodePoint {
        /// The entity name.
        name: String,
        /// The rejected code point.
        code_point: u32,
    },

    /// Serialized configuration could not be read or written.
    #[error("Invalid registry configuration: {0}")]
    InvalidConfig(String),
}

/// The table a load-time [`Error`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    /// Dialect aliases.
    Aliases,
    /// Column type codes.
    Types,
    /// Privilege codes.
    Privileges,
    /// Heuristic probes.
    Probes,
    /// Client connector metadata.
    Connectors,
}

impl core::fmt::Display for TableKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            TableKind::Aliases => "alias",
            TableKind::Types => "type",
            TableKind::Privileges => "privilege",
            TableKind::Probes => "probe",
            TableKind::Connectors => "connector",
        })
    }
}

/// A name that no dialect alias matches.
///
/// Returned by [`Dialect::from_str`](core::str::FromStr::from_str). Callers
/// usually treat it as a hint to try another fingerprinting technique.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown database dialect {0:?}")]
pub struct UnknownDialect(pub String);

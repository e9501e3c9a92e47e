//! Heuristic probes used to confirm a dialect through blind inference.
//!
//! A probe is an expression that evaluates to NULL on one dialect and fails
//! (or evaluates differently) elsewhere, plus the dummy table a dialect needs
//! for a one-row `SELECT`.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::config::ProbeEntry;
use crate::dialect::Dialect;
use crate::errors::{Error, TableKind};

#[derive(Debug, Clone)]
struct Probe {
    null_eval: Option<String>,
    dummy_from: Option<String>,
}

/// Per-dialect heuristic probe lookup.
#[derive(Debug, Clone, Default)]
pub struct ProbeRegistry {
    probes: HashMap<Dialect, Probe>,
}

impl ProbeRegistry {
    /// Build the registry from probe entries.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateDialectEntry`] if a dialect is listed twice.
    pub fn new(entries: Vec<ProbeEntry>) -> Result<Self, Error> {
        let mut probes = HashMap::with_capacity(entries.len());
        for ProbeEntry {
            dialect,
            null_eval,
            dummy_from,
        } in entries
        {
            let probe = Probe {
                null_eval,
                dummy_from,
            };
            if probes.insert(dialect, probe).is_some() {
                return Err(Error::DuplicateDialectEntry {
                    table: TableKind::Probes,
                    dialect,
                });
            }
        }
        Ok(Self { probes })
    }

    /// The NULL-evaluating expression of `dialect`, or `None` when no
    /// heuristic exists for it.
    #[must_use]
    pub fn null_probe(&self, dialect: Dialect) -> Option<&str> {
        self.probes.get(&dialect)?.null_eval.as_deref()
    }

    /// The dummy `FROM` clause of `dialect`, with its leading space, or
    /// `None` when a bare `SELECT` already yields one row.
    #[must_use]
    pub fn dummy_from(&self, dialect: Dialect) -> Option<&str> {
        self.probes.get(&dialect)?.dummy_from.as_deref()
    }

    /// The complete one-row probe statement for `dialect`.
    ///
    /// # Example
    ///
    /// ```
    /// use dialect_registry::{Dialect, Registry};
    ///
    /// let registry = Registry::builtin().unwrap();
    /// assert_eq!(
    ///     registry.probes().probe_query(Dialect::Oracle).as_deref(),
    ///     Some("SELECT INSTR2(NULL,NULL) FROM DUAL")
    /// );
    /// assert_eq!(registry.probes().probe_query(Dialect::Sybase), None);
    /// ```
    #[must_use]
    pub fn probe_query(&self, dialect: Dialect) -> Option<String> {
        let null_eval = self.null_probe(dialect)?;
        let from = self.dummy_from(dialect).unwrap_or_default();
        Some(format!("SELECT {null_eval}{from}"))
    }
}

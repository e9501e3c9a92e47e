//! The registry: every component built once from validated tables.

use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::classifier::{StatementCategory, StatementClassifier};
use crate::codes::CodeDecoder;
use crate::config::{Connector, ConnectorEntry, RegistryData};
use crate::dialect::Dialect;
use crate::entities::EntityDecoder;
use crate::errors::{Error, TableKind};
use crate::probes::ProbeRegistry;
use crate::resolver::DialectResolver;

/// Immutable dialect metadata, shared freely between threads once built.
///
/// # Example
///
/// ```
/// use dialect_registry::{Dialect, Registry, StatementCategory};
///
/// let registry = Registry::builtin().unwrap();
/// let dialect = registry.resolve("firebird").unwrap();
/// assert_eq!(registry.codes().decode_type(dialect, 7), Some("SMALLINT"));
/// assert_eq!(registry.probes().dummy_from(dialect), Some(" FROM RDB$DATABASE"));
/// assert_eq!(
///     registry.classify("select 1 from rdb$database"),
///     Some(StatementCategory::Select)
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Registry {
    resolver: DialectResolver,
    codes: CodeDecoder,
    classifier: StatementClassifier,
    entities: EntityDecoder,
    probes: ProbeRegistry,
    connectors: HashMap<Dialect, Connector>,
}

impl Registry {
    /// Build the registry from the compiled-in tables.
    ///
    /// # Errors
    ///
    /// Never fails in practice; the built-in tables go through the same
    /// validation as external ones and any [`Error`] is returned as is.
    pub fn builtin() -> Result<Self, Error> {
        Self::from_data(RegistryData::builtin())
    }

    /// Validate `data` and build every component from it.
    ///
    /// # Errors
    ///
    /// Returns the first inconsistency found: overlapping aliases, duplicate
    /// codes, an incomplete or reordered statement taxonomy, invalid entities
    /// or a dialect listed twice in one table.
    pub fn from_data(data: RegistryData) -> Result<Self, Error> {
        let RegistryData {
            aliases,
            types,
            privileges,
            statements,
            entities,
            probes,
            connectors,
        } = data;

        let registry = Self {
            resolver: DialectResolver::new(aliases)?,
            codes: CodeDecoder::new(types, privileges)?,
            classifier: StatementClassifier::new(statements)?,
            entities: EntityDecoder::new(entities)?,
            probes: ProbeRegistry::new(probes)?,
            connectors: load_connectors(connectors)?,
        };
        log::debug!(
            "loaded dialect registry: {} aliases, {} entities, {} connectors",
            registry.resolver.len(),
            registry.entities.len(),
            registry.connectors.len()
        );
        Ok(registry)
    }

    /// The alias resolver.
    #[must_use]
    pub fn resolver(&self) -> &DialectResolver {
        &self.resolver
    }

    /// The type and privilege code decoder.
    #[must_use]
    pub fn codes(&self) -> &CodeDecoder {
        &self.codes
    }

    /// The statement classifier.
    #[must_use]
    pub fn classifier(&self) -> &StatementClassifier {
        &self.classifier
    }

    /// The HTML entity decoder.
    #[must_use]
    pub fn entities(&self) -> &EntityDecoder {
        &self.entities
    }

    /// The heuristic probe registry.
    #[must_use]
    pub fn probes(&self) -> &ProbeRegistry {
        &self.probes
    }

    /// Shorthand for [`DialectResolver::resolve`].
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<Dialect> {
        self.resolver.resolve(name)
    }

    /// Shorthand for [`StatementClassifier::classify`].
    #[must_use]
    pub fn classify(&self, text: &str) -> Option<StatementCategory> {
        self.classifier.classify(text)
    }

    /// Client library metadata of `dialect`.
    #[must_use]
    pub fn connector(&self, dialect: Dialect) -> Option<&Connector> {
        self.connectors.get(&dialect)
    }
}

fn load_connectors(
    entries: Vec<ConnectorEntry>,
) -> Result<HashMap<Dialect, Connector>, Error> {
    let mut connectors = HashMap::with_capacity(entries.len());
    for ConnectorEntry { dialect, connector } in entries {
        if connectors.insert(dialect, connector).is_some() {
            return Err(Error::DuplicateDialectEntry {
                table: TableKind::Connectors,
                dialect,
            });
        }
    }
    Ok(connectors)
}

//! Alias-based dialect resolution.

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::config::AliasEntry;
use crate::dialect::Dialect;
use crate::errors::{Error, TableKind};

/// Key under which aliases are stored and looked up: surrounding whitespace
/// removed, lower-cased.
pub(crate) fn fold_alias(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Maps free-form names and fingerprint strings to a [`Dialect`].
#[derive(Debug, Clone, Default)]
pub struct DialectResolver {
    lookup: HashMap<String, Dialect>,
    aliases: HashMap<Dialect, Vec<String>>,
}

impl DialectResolver {
    /// Build a resolver from alias sets.
    ///
    /// Aliases are trimmed and lower-cased. An alias repeated inside one
    /// dialect's own set is kept once.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OverlappingAlias`] when two dialects claim the same
    /// alias, [`Error::EmptyAlias`] for blank aliases and
    /// [`Error::DuplicateDialectEntry`] when a dialect has two alias sets.
    pub fn new(entries: Vec<AliasEntry>) -> Result<Self, Error> {
        let mut lookup: HashMap<String, Dialect> = HashMap::new();
        let mut aliases: HashMap<Dialect, Vec<String>> = HashMap::with_capacity(entries.len());
        for AliasEntry {
            dialect,
            aliases: names,
        } in entries
        {
            if aliases.contains_key(&dialect) {
                return Err(Error::DuplicateDialectEntry {
                    table: TableKind::Aliases,
                    dialect,
                });
            }
            let mut declared = Vec::with_capacity(names.len());
            for name in names {
                let folded = fold_alias(&name);
                if folded.is_empty() {
                    return Err(Error::EmptyAlias(dialect));
                }
                match lookup.get(&folded) {
                    Some(&first) if first != dialect => {
                        return Err(Error::OverlappingAlias {
                            alias: folded,
                            first,
                            second: dialect,
                        });
                    }
                    Some(_) => {
                        log::warn!("alias {folded:?} is repeated for {dialect}");
                    }
                    None => {
                        lookup.insert(folded.clone(), dialect);
                        declared.push(folded);
                    }
                }
            }
            aliases.insert(dialect, declared);
        }
        Ok(Self { lookup, aliases })
    }

    /// Resolve `name`, ignoring case and surrounding whitespace.
    ///
    /// # Example
    ///
    /// ```
    /// use dialect_registry::{Dialect, Registry};
    ///
    /// let registry = Registry::builtin().unwrap();
    /// assert_eq!(registry.resolve(" MariaDB "), Some(Dialect::MySql));
    /// assert_eq!(registry.resolve("dbase"), None);
    /// ```
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<Dialect> {
        let folded = fold_alias(name);
        let dialect = self.lookup.get(folded.as_str()).copied();
        log::trace!("resolved {name:?} to {dialect:?}");
        dialect
    }

    /// Aliases of `dialect`, lower-cased, in declaration order.
    #[must_use]
    pub fn aliases(&self, dialect: Dialect) -> &[String] {
        self.aliases
            .get(&dialect)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Dialects that have at least one alias.
    pub fn dialects(&self) -> impl Iterator<Item = Dialect> + '_ {
        Dialect::ALL
            .into_iter()
            .filter(|dialect| !self.aliases(*dialect).is_empty())
    }

    /// Total number of distinct aliases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lookup.len()
    }

    /// Whether no aliases are known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    fn entry(dialect: Dialect, aliases: &[&str]) -> AliasEntry {
        AliasEntry {
            dialect,
            aliases: aliases.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    fn test_aliases_are_folded() {
        let resolver = DialectResolver::new(vec![entry(Dialect::Oracle, &[" Oracle ", "ORCL"])])
            .unwrap();
        assert_eq!(resolver.aliases(Dialect::Oracle), ["oracle", "orcl"]);
        assert_eq!(resolver.resolve("orcl"), Some(Dialect::Oracle));
        assert_eq!(resolver.resolve("\toRaClE\n"), Some(Dialect::Oracle));
    }

    #[test]
    fn test_overlap_is_rejected() {
        let result = DialectResolver::new(vec![
            entry(Dialect::H2, &["h2", "ignite"]),
            entry(Dialect::CrateDb, &["crate", "Ignite"]),
        ]);
        assert_eq!(
            result.unwrap_err(),
            Error::OverlappingAlias {
                alias: "ignite".to_string(),
                first: Dialect::H2,
                second: Dialect::CrateDb,
            }
        );
    }

    #[test]
    fn test_repeat_within_dialect_is_tolerated() {
        let resolver = DialectResolver::new(vec![entry(Dialect::Sqlite, &["sqlite", "SQLite"])])
            .unwrap();
        assert_eq!(resolver.aliases(Dialect::Sqlite), ["sqlite"]);
        assert_eq!(resolver.len(), 1);
    }

    #[test]
    fn test_blank_alias_is_rejected() {
        assert_eq!(
            DialectResolver::new(vec![entry(Dialect::Mckoi, &["mckoi", "  "])]).unwrap_err(),
            Error::EmptyAlias(Dialect::Mckoi)
        );
    }

    #[test]
    fn test_second_alias_set_is_rejected() {
        assert_eq!(
            DialectResolver::new(vec![
                entry(Dialect::Presto, &["presto"]),
                entry(Dialect::Presto, &["trino"]),
            ])
            .unwrap_err(),
            Error::DuplicateDialectEntry {
                table: TableKind::Aliases,
                dialect: Dialect::Presto,
            }
        );
    }

    #[test]
    fn test_dialects_without_aliases_are_skipped() {
        let resolver = DialectResolver::new(vec![entry(Dialect::Vertica, &["vertica"])]).unwrap();
        assert_eq!(resolver.dialects().collect::<Vec<_>>(), [Dialect::Vertica]);
        assert!(resolver.aliases(Dialect::MySql).is_empty());
    }
}

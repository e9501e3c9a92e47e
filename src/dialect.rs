//! The closed set of database products known to the registry.

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use crate::data::aliases::ALIASES;
use crate::errors::UnknownDialect;
use crate::resolver::fold_alias;

/// A supported database product.
///
/// Every variant has exactly one canonical display name, returned by
/// [`Dialect::name`]. Free-form names and fingerprint strings are mapped onto
/// variants by the [`DialectResolver`](crate::DialectResolver).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Dialect {
    /// Microsoft SQL Server.
    MsSql,
    /// MySQL and its wire-compatible forks.
    MySql,
    /// PostgreSQL and its wire-compatible forks.
    PostgreSql,
    /// Oracle Database.
    Oracle,
    /// SQLite.
    Sqlite,
    /// Microsoft Access (Jet).
    Access,
    /// Firebird / InterBase.
    Firebird,
    /// SAP MaxDB.
    MaxDb,
    /// Sybase.
    Sybase,
    /// IBM DB2.
    Db2,
    /// HSQLDB.
    HsqlDb,
    /// H2.
    H2,
    /// IBM Informix.
    Informix,
    /// MonetDB.
    MonetDb,
    /// Apache Derby.
    Derby,
    /// Vertica.
    Vertica,
    /// Mckoi.
    Mckoi,
    /// Presto.
    Presto,
    /// Altibase.
    Altibase,
    /// MimerSQL.
    MimerSql,
    /// ClickHouse.
    ClickHouse,
    /// CrateDB.
    CrateDb,
    /// Cubrid.
    Cubrid,
    /// InterSystems Cache.
    Cache,
    /// eXtremeDB.
    ExtremeDb,
    /// FrontBase.
    FrontBase,
    /// Raima Database Manager.
    Raima,
    /// Virtuoso.
    Virtuoso,
}

impl Dialect {
    /// Every dialect, in declaration order.
    pub const ALL: [Dialect; 28] = [
        Dialect::MsSql,
        Dialect::MySql,
        Dialect::PostgreSql,
        Dialect::Oracle,
        Dialect::Sqlite,
        Dialect::Access,
        Dialect::Firebird,
        Dialect::MaxDb,
        Dialect::Sybase,
        Dialect::Db2,
        Dialect::HsqlDb,
        Dialect::H2,
        Dialect::Informix,
        Dialect::MonetDb,
        Dialect::Derby,
        Dialect::Vertica,
        Dialect::Mckoi,
        Dialect::Presto,
        Dialect::Altibase,
        Dialect::MimerSql,
        Dialect::ClickHouse,
        Dialect::CrateDb,
        Dialect::Cubrid,
        Dialect::Cache,
        Dialect::ExtremeDb,
        Dialect::FrontBase,
        Dialect::Raima,
        Dialect::Virtuoso,
    ];

    /// The canonical display name of the dialect.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Dialect::MsSql => "Microsoft SQL Server",
            Dialect::MySql => "MySQL",
            Dialect::PostgreSql => "PostgreSQL",
            Dialect::Oracle => "Oracle",
            Dialect::Sqlite => "SQLite",
            Dialect::Access => "Microsoft Access",
            Dialect::Firebird => "Firebird",
            Dialect::MaxDb => "SAP MaxDB",
            Dialect::Sybase => "Sybase",
            Dialect::Db2 => "IBM DB2",
            Dialect::HsqlDb => "HSQLDB",
            Dialect::H2 => "H2",
            Dialect::Informix => "Informix",
            Dialect::MonetDb => "MonetDB",
            Dialect::Derby => "Apache Derby",
            Dialect::Vertica => "Vertica",
            Dialect::Mckoi => "Mckoi",
            Dialect::Presto => "Presto",
            Dialect::Altibase => "Altibase",
            Dialect::MimerSql => "MimerSQL",
            Dialect::ClickHouse => "ClickHouse",
            Dialect::CrateDb => "CrateDB",
            Dialect::Cubrid => "Cubrid",
            Dialect::Cache => "InterSystems Cache",
            Dialect::ExtremeDb => "eXtremeDB",
            Dialect::FrontBase => "FrontBase",
            Dialect::Raima => "Raima Database Manager",
            Dialect::Virtuoso => "Virtuoso",
        }
    }

    /// Look a dialect up by its canonical name, ignoring ASCII case.
    ///
    /// Unlike [`FromStr`], this does not consult the alias table.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Dialect> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|dialect| dialect.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dialect {
    type Err = UnknownDialect;

    /// Resolve `s` against the built-in alias table, with the same folding
    /// as [`DialectResolver::resolve`](crate::DialectResolver::resolve).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        find_alias(ALIASES, s).ok_or_else(|| UnknownDialect(String::from(s)))
    }
}

fn find_alias(table: &[(Dialect, &[&str])], name: &str) -> Option<Dialect> {
    let folded = fold_alias(name);
    table
        .iter()
        .find(|(_, aliases)| aliases.iter().any(|alias| fold_alias(alias) == folded))
        .map(|(dialect, _)| *dialect)
}

#[cfg(feature = "serde")]
impl serde::Serialize for Dialect {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Dialect {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = <String as serde::Deserialize>::deserialize(deserializer)?;
        Dialect::from_name(&name)
            .ok_or_else(|| serde::de::Error::custom(UnknownDialect(name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_exhaustive_and_unique() {
        for (i, a) in Dialect::ALL.iter().enumerate() {
            for b in &Dialect::ALL[i + 1..] {
                assert_ne!(a, b);
                assert_ne!(a.name(), b.name());
            }
        }
    }

    #[test]
    fn test_from_name_roundtrips_every_dialect() {
        for dialect in Dialect::ALL {
            assert_eq!(Dialect::from_name(dialect.name()), Some(dialect));
        }
        assert_eq!(Dialect::from_name("  mysql "), Some(Dialect::MySql));
        assert_eq!(Dialect::from_name("mariadb"), None);
    }

    #[test]
    fn test_from_str_uses_aliases() {
        assert_eq!("MariaDB".parse::<Dialect>(), Ok(Dialect::MySql));
        assert_eq!(" pg ".parse::<Dialect>(), Ok(Dialect::PostgreSql));
        assert_eq!(
            "dbase".parse::<Dialect>(),
            Err(UnknownDialect(String::from("dbase")))
        );
    }

    #[test]
    fn test_table_aliases_are_folded_like_resolver_aliases() {
        let table: &[(Dialect, &[&str])] = &[
            (Dialect::MySql, &[" MariaDB ", "TiDB"]),
            (Dialect::H2, &["h2"]),
        ];
        assert_eq!(find_alias(table, "mariadb"), Some(Dialect::MySql));
        assert_eq!(find_alias(table, "\tTIDB"), Some(Dialect::MySql));
        assert_eq!(find_alias(table, "H2 "), Some(Dialect::H2));
        assert_eq!(find_alias(table, "maria db"), None);
    }

    #[test]
    fn test_display_is_canonical_name() {
        use alloc::string::ToString;
        assert_eq!(Dialect::Db2.to_string(), "IBM DB2");
        assert_eq!(Dialect::ExtremeDb.to_string(), "eXtremeDB");
    }
}
